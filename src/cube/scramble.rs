//! Scramble driver: applies uniformly random legal moves to a cube.
//!
//! The random source is injected rather than owned, so callers (and tests)
//! can supply any seeded generator; the convenience entry point uses a
//! ChaCha8 generator, which makes a scramble fully reproducible from a u64
//! seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::moves::{CubeMove, MoveToken, TokenAction};
use super::Cube;
use crate::moves::MoveSequence;

/// Apply `count` random moves using the provided random source.
///
/// Each step draws uniformly from the 18 canonical tokens — only the 12
/// outer tokens on a 2×2×2, which has no inner layer — and, for the slice
/// classes M/E/S, an inner layer uniformly from `[1, N-2]`. Returns the
/// resolved moves in the order applied, so the scramble can be replayed or
/// inverted later.
pub fn scramble_with<R: Rng>(cube: &mut Cube, count: usize, rng: &mut R) -> MoveSequence<CubeMove> {
    let tokens: &[MoveToken] = if cube.size() == 2 {
        &MoveToken::OUTER
    } else {
        &MoveToken::ALL
    };

    let mut applied = Vec::with_capacity(count);
    for _ in 0..count {
        let token = tokens[rng.gen_range(0..tokens.len())];
        let mv = match token.action() {
            TokenAction::Face(face, direction) => CubeMove::face(face, direction),
            TokenAction::Slice(axis, direction) => {
                let layer = rng.gen_range(1..cube.size() - 1);
                CubeMove::slice(axis, layer, direction)
            }
        };
        // The layer is drawn from the open interval, so the move is legal
        // by construction and can bypass re-validation.
        match mv {
            CubeMove::Face { face, direction } => cube.twist_face(face, direction),
            CubeMove::Slice {
                axis,
                layer,
                direction,
            } => cube.cycle_strips(axis, layer, direction),
        }
        applied.push(mv);
    }
    MoveSequence(applied)
}

/// Apply `count` random moves drawn from a ChaCha8 generator seeded with
/// `seed`. The same seed, count and cube size always produce the same move
/// sequence and the same final state.
pub fn scramble(cube: &mut Cube, count: usize, seed: u64) -> MoveSequence<CubeMove> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    scramble_with(cube, count, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_sequence_and_state() {
        let mut a = Cube::new(4);
        let mut b = Cube::new(4);
        let seq_a = scramble(&mut a, 40, 42);
        let seq_b = scramble(&mut b, 40, 42);
        assert_eq!(seq_a, seq_b);
        assert_eq!(a, b);
        assert_eq!(seq_a.len(), 40);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Cube::new(3);
        let mut b = Cube::new(3);
        scramble(&mut a, 30, 1);
        scramble(&mut b, 30, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn injected_rng_matches_seed_wrapper() {
        let mut a = Cube::new(5);
        let mut b = Cube::new(5);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let seq_a = scramble_with(&mut a, 20, &mut rng);
        let seq_b = scramble(&mut b, 20, 9);
        assert_eq!(seq_a, seq_b);
        assert_eq!(a, b);
    }

    #[test]
    fn inverted_scramble_replays_to_solved() {
        for size in 2..=5 {
            let mut cube = Cube::new(size);
            let seq = scramble(&mut cube, 30, 1234);
            cube.apply_all(&seq.inverse()).unwrap();
            assert!(cube.is_solved(), "size {size}");
        }
    }

    #[test]
    fn two_cube_scrambles_use_only_outer_twists() {
        let mut cube = Cube::new(2);
        let seq = scramble(&mut cube, 50, 5);
        assert!(seq
            .0
            .iter()
            .all(|mv| matches!(mv, CubeMove::Face { .. })));
    }

    #[test]
    fn slice_layers_stay_strictly_inside() {
        let mut cube = Cube::new(6);
        let seq = scramble(&mut cube, 200, 77);
        for mv in &seq.0 {
            if let CubeMove::Slice { layer, .. } = mv {
                assert!((1..=4).contains(layer));
            }
        }
        assert!(cube.validate().is_ok());
    }
}
