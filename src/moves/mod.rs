//! Module for puzzle move generics and related functionality

/// A move, intended to be a symbol in some group presentation. The only
/// relation assumed here is invertibility; puzzle-specific move types encode
/// everything else themselves.
pub trait Move: Eq + Clone {
    /// Take the inverse of a move. These inverses must satisfy the
    /// invertibility conditions of a group, i.e. that `X X^{-1} = X^{-1} X = e`
    /// where `e` is the empty sequence.
    fn inverse(self) -> Self
    where
        Self: Sized;
}

/// A sequence of moves (also known as an algorithm) for some specific type of
/// move.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MoveSequence<M: Move>(pub Vec<M>);

impl<M: Move> MoveSequence<M> {
    /// Invert a sequence of moves.
    ///
    /// If `X` is a sequence of moves and `X^{-1}` is its inverse and `o` is
    /// composition, then `X o X^{-1} = X^{-1} o X = e` where `e` is the empty
    /// sequence.
    pub fn inverse(self) -> Self {
        Self(self.0.into_iter().rev().map(|m| m.inverse()).collect())
    }

    /// The number of moves in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence contains no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
