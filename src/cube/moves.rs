//! The rotation engine: outer face twists, generalized inner-slice twists
//! and the move vocabulary that drives them.
//!
//! Every twist is expressed through one strip-cycle engine driven by three
//! static per-axis tables. Each table lists, in clockwise order as seen from
//! that axis's fixed viewpoint, the four strips cut by a layer together with
//! a reversal flag per cycle edge; the flag records whether the two faces'
//! grid coordinate systems run in opposite physical orientation across that
//! transfer. Because strip reversal is involutive, the same table serves
//! both directions.

use std::fmt;
use std::str::FromStr;

use super::face::{Face, FaceGrid};
use super::{Color, Cube};
use crate::error::CubeError;
use crate::moves::{Move, MoveSequence};

#[cfg(test)]
use proptest_derive::Arbitrary;

/// The three slice axes, each named for the pair of faces its layers are
/// parallel to. Directions along an axis are judged from a fixed viewpoint:
/// `X` from the Right face, `Y` from Up, `Z` from Front.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Axis {
    /// Parallel to Left/Right; layer 0 touches Left.
    X,
    /// Parallel to Up/Down; layer 0 touches Up.
    Y,
    /// Parallel to Front/Back; layer 0 touches Front.
    Z,
}

impl FromStr for Axis {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" | "X" => Ok(Axis::X),
            "y" | "Y" => Ok(Axis::Y),
            "z" | "Z" => Ok(Axis::Z),
            _ => Err(CubeError::InvalidAxis(s.to_string())),
        }
    }
}

/// Direction of a 90° twist, as seen from the viewpoint fixed by the face
/// or axis being turned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum Direction {
    /// A quarter turn clockwise.
    Clockwise,
    /// A quarter turn counter-clockwise.
    CounterClockwise,
}

impl Direction {
    /// The opposite direction.
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

impl FromStr for Direction {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cw" => Ok(Direction::Clockwise),
            "ccw" => Ok(Direction::CounterClockwise),
            _ => Err(CubeError::InvalidDirection(s.to_string())),
        }
    }
}

/// The 18 canonical move tokens: the six outer face twists with their
/// inverses, and the three inner-slice classes (M following Left, E
/// following Down, S following Front) with theirs.
///
/// Slice tokens name a move *class*: on cubes larger than 3×3×3 they still
/// need a concrete inner layer, supplied at
/// [resolution](MoveToken::resolve) time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
#[allow(missing_docs)]
pub enum MoveToken {
    U,
    UPrime,
    D,
    DPrime,
    L,
    LPrime,
    R,
    RPrime,
    F,
    FPrime,
    B,
    BPrime,
    M,
    MPrime,
    E,
    EPrime,
    S,
    SPrime,
}

pub(crate) enum TokenAction {
    Face(Face, Direction),
    Slice(Axis, Direction),
}

impl MoveToken {
    /// All 18 tokens.
    pub const ALL: [MoveToken; 18] = [
        MoveToken::U,
        MoveToken::UPrime,
        MoveToken::D,
        MoveToken::DPrime,
        MoveToken::L,
        MoveToken::LPrime,
        MoveToken::R,
        MoveToken::RPrime,
        MoveToken::F,
        MoveToken::FPrime,
        MoveToken::B,
        MoveToken::BPrime,
        MoveToken::M,
        MoveToken::MPrime,
        MoveToken::E,
        MoveToken::EPrime,
        MoveToken::S,
        MoveToken::SPrime,
    ];

    /// The 12 outer-twist tokens; the full vocabulary of a 2×2×2, which has
    /// no inner layer.
    pub const OUTER: [MoveToken; 12] = [
        MoveToken::U,
        MoveToken::UPrime,
        MoveToken::D,
        MoveToken::DPrime,
        MoveToken::L,
        MoveToken::LPrime,
        MoveToken::R,
        MoveToken::RPrime,
        MoveToken::F,
        MoveToken::FPrime,
        MoveToken::B,
        MoveToken::BPrime,
    ];

    // M turns with Left, E with Down, S with Front; against the fixed axis
    // viewpoints (Right/Up/Front) the first two come out counter-clockwise.
    pub(crate) fn action(self) -> TokenAction {
        use Direction::{Clockwise, CounterClockwise};
        match self {
            MoveToken::U => TokenAction::Face(Face::Up, Clockwise),
            MoveToken::UPrime => TokenAction::Face(Face::Up, CounterClockwise),
            MoveToken::D => TokenAction::Face(Face::Down, Clockwise),
            MoveToken::DPrime => TokenAction::Face(Face::Down, CounterClockwise),
            MoveToken::L => TokenAction::Face(Face::Left, Clockwise),
            MoveToken::LPrime => TokenAction::Face(Face::Left, CounterClockwise),
            MoveToken::R => TokenAction::Face(Face::Right, Clockwise),
            MoveToken::RPrime => TokenAction::Face(Face::Right, CounterClockwise),
            MoveToken::F => TokenAction::Face(Face::Front, Clockwise),
            MoveToken::FPrime => TokenAction::Face(Face::Front, CounterClockwise),
            MoveToken::B => TokenAction::Face(Face::Back, Clockwise),
            MoveToken::BPrime => TokenAction::Face(Face::Back, CounterClockwise),
            MoveToken::M => TokenAction::Slice(Axis::X, CounterClockwise),
            MoveToken::MPrime => TokenAction::Slice(Axis::X, Clockwise),
            MoveToken::E => TokenAction::Slice(Axis::Y, CounterClockwise),
            MoveToken::EPrime => TokenAction::Slice(Axis::Y, Clockwise),
            MoveToken::S => TokenAction::Slice(Axis::Z, Clockwise),
            MoveToken::SPrime => TokenAction::Slice(Axis::Z, CounterClockwise),
        }
    }

    /// Whether this token is one of the inner-slice classes M/E/S.
    pub fn is_slice(self) -> bool {
        matches!(self.action(), TokenAction::Slice(..))
    }

    /// The token undoing this one.
    pub fn inverse(self) -> MoveToken {
        match self {
            MoveToken::U => MoveToken::UPrime,
            MoveToken::UPrime => MoveToken::U,
            MoveToken::D => MoveToken::DPrime,
            MoveToken::DPrime => MoveToken::D,
            MoveToken::L => MoveToken::LPrime,
            MoveToken::LPrime => MoveToken::L,
            MoveToken::R => MoveToken::RPrime,
            MoveToken::RPrime => MoveToken::R,
            MoveToken::F => MoveToken::FPrime,
            MoveToken::FPrime => MoveToken::F,
            MoveToken::B => MoveToken::BPrime,
            MoveToken::BPrime => MoveToken::B,
            MoveToken::M => MoveToken::MPrime,
            MoveToken::MPrime => MoveToken::M,
            MoveToken::E => MoveToken::EPrime,
            MoveToken::EPrime => MoveToken::E,
            MoveToken::S => MoveToken::SPrime,
            MoveToken::SPrime => MoveToken::S,
        }
    }

    /// Resolve this token against a cube size into a concrete [`CubeMove`].
    ///
    /// Slice tokens take an explicit inner layer; `None` selects the layer
    /// nearest the middle (`size / 2`, the fixed layer 1 of a 3×3×3) and
    /// fails with [`CubeError::InvalidLayer`] when that layer is not
    /// strictly inside the cube, as on a 2×2×2. The layer is ignored for
    /// outer tokens.
    pub fn resolve(self, size: usize, layer: Option<usize>) -> Result<CubeMove, CubeError> {
        match self.action() {
            TokenAction::Face(face, direction) => Ok(CubeMove::Face { face, direction }),
            TokenAction::Slice(axis, direction) => {
                let layer = layer.unwrap_or(size / 2);
                if layer == 0 || layer >= size - 1 {
                    return Err(CubeError::InvalidLayer { layer, size });
                }
                Ok(CubeMove::Slice {
                    axis,
                    layer,
                    direction,
                })
            }
        }
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MoveToken::U => "U",
            MoveToken::UPrime => "U'",
            MoveToken::D => "D",
            MoveToken::DPrime => "D'",
            MoveToken::L => "L",
            MoveToken::LPrime => "L'",
            MoveToken::R => "R",
            MoveToken::RPrime => "R'",
            MoveToken::F => "F",
            MoveToken::FPrime => "F'",
            MoveToken::B => "B",
            MoveToken::BPrime => "B'",
            MoveToken::M => "M",
            MoveToken::MPrime => "M'",
            MoveToken::E => "E",
            MoveToken::EPrime => "E'",
            MoveToken::S => "S",
            MoveToken::SPrime => "S'",
        };
        f.write_str(s)
    }
}

impl FromStr for MoveToken {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(MoveToken::U),
            "U'" => Ok(MoveToken::UPrime),
            "D" => Ok(MoveToken::D),
            "D'" => Ok(MoveToken::DPrime),
            "L" => Ok(MoveToken::L),
            "L'" => Ok(MoveToken::LPrime),
            "R" => Ok(MoveToken::R),
            "R'" => Ok(MoveToken::RPrime),
            "F" => Ok(MoveToken::F),
            "F'" => Ok(MoveToken::FPrime),
            "B" => Ok(MoveToken::B),
            "B'" => Ok(MoveToken::BPrime),
            "M" => Ok(MoveToken::M),
            "M'" => Ok(MoveToken::MPrime),
            "E" => Ok(MoveToken::E),
            "E'" => Ok(MoveToken::EPrime),
            "S" => Ok(MoveToken::S),
            "S'" => Ok(MoveToken::SPrime),
            _ => Err(CubeError::InvalidDirection(s.to_string())),
        }
    }
}

/// A fully resolved move: a face to twist or a concrete inner layer to
/// rotate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CubeMove {
    /// 90° twist of an outer face, its own grid plus the four boundary
    /// strips of the adjacent faces.
    Face {
        /// The face to twist.
        face: Face,
        /// Direction as viewed looking straight at that face.
        direction: Direction,
    },
    /// 90° rotation of an inner layer; touches no face's own grid, only one
    /// strip cut through each of four faces.
    Slice {
        /// The slice axis.
        axis: Axis,
        /// Layer index along the axis, strictly between 0 and N−1.
        layer: usize,
        /// Direction from the axis viewpoint.
        direction: Direction,
    },
}

impl CubeMove {
    /// An outer face twist.
    pub fn face(face: Face, direction: Direction) -> CubeMove {
        CubeMove::Face { face, direction }
    }

    /// An inner slice rotation.
    pub fn slice(axis: Axis, layer: usize, direction: Direction) -> CubeMove {
        CubeMove::Slice {
            axis,
            layer,
            direction,
        }
    }
}

impl Move for CubeMove {
    fn inverse(self) -> Self {
        match self {
            CubeMove::Face { face, direction } => CubeMove::Face {
                face,
                direction: direction.inverse(),
            },
            CubeMove::Slice {
                axis,
                layer,
                direction,
            } => CubeMove::Slice {
                axis,
                layer,
                direction: direction.inverse(),
            },
        }
    }
}

impl fmt::Display for CubeMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CubeMove::Face { face, direction } => {
                let letter = match face {
                    Face::Up => 'U',
                    Face::Down => 'D',
                    Face::Left => 'L',
                    Face::Right => 'R',
                    Face::Front => 'F',
                    Face::Back => 'B',
                };
                match direction {
                    Direction::Clockwise => write!(f, "{letter}"),
                    Direction::CounterClockwise => write!(f, "{letter}'"),
                }
            }
            CubeMove::Slice {
                axis,
                layer,
                direction,
            } => {
                // Slice letters follow the M/E/S conventions, so the prime
                // marks the axis-clockwise sense for M and E.
                let (letter, primed) = match (axis, direction) {
                    (Axis::X, Direction::CounterClockwise) => ('M', false),
                    (Axis::X, Direction::Clockwise) => ('M', true),
                    (Axis::Y, Direction::CounterClockwise) => ('E', false),
                    (Axis::Y, Direction::Clockwise) => ('E', true),
                    (Axis::Z, Direction::Clockwise) => ('S', false),
                    (Axis::Z, Direction::CounterClockwise) => ('S', true),
                };
                if primed {
                    write!(f, "{letter}'({layer})")
                } else {
                    write!(f, "{letter}({layer})")
                }
            }
        }
    }
}

/// Whether a strip sits at the layer index itself or at its mirror
/// `N-1-layer`, for faces whose grid counts from the opposite end of the
/// axis.
#[derive(Debug, Copy, Clone)]
enum LayerSide {
    Near,
    Far,
}

#[derive(Debug, Copy, Clone)]
enum StripKind {
    Row,
    Col,
}

/// Locates the row or column a layer cuts through one face.
#[derive(Debug, Copy, Clone)]
struct StripRef {
    face: Face,
    kind: StripKind,
    side: LayerSide,
}

impl StripRef {
    const fn new(face: Face, kind: StripKind, side: LayerSide) -> StripRef {
        StripRef { face, kind, side }
    }

    fn index(self, layer: usize, size: usize) -> usize {
        match self.side {
            LayerSide::Near => layer,
            LayerSide::Far => size - 1 - layer,
        }
    }
}

// Clockwise strip cycles per axis, from the axis viewpoints documented on
// `Axis`. REVERSED[i] applies to the transfer between CYCLE[i] and
// CYCLE[(i+1) % 4], in either direction.
const X_CYCLE: [StripRef; 4] = [
    StripRef::new(Face::Front, StripKind::Col, LayerSide::Near),
    StripRef::new(Face::Up, StripKind::Col, LayerSide::Near),
    StripRef::new(Face::Back, StripKind::Col, LayerSide::Far),
    StripRef::new(Face::Down, StripKind::Col, LayerSide::Near),
];
const X_REVERSED: [bool; 4] = [false, true, true, false];

const Y_CYCLE: [StripRef; 4] = [
    StripRef::new(Face::Front, StripKind::Row, LayerSide::Near),
    StripRef::new(Face::Left, StripKind::Row, LayerSide::Near),
    StripRef::new(Face::Back, StripKind::Row, LayerSide::Near),
    StripRef::new(Face::Right, StripKind::Row, LayerSide::Near),
];
const Y_REVERSED: [bool; 4] = [false, false, false, false];

const Z_CYCLE: [StripRef; 4] = [
    StripRef::new(Face::Up, StripKind::Row, LayerSide::Far),
    StripRef::new(Face::Right, StripKind::Col, LayerSide::Near),
    StripRef::new(Face::Down, StripKind::Row, LayerSide::Near),
    StripRef::new(Face::Left, StripKind::Col, LayerSide::Far),
];
const Z_REVERSED: [bool; 4] = [false, true, false, true];

impl Axis {
    fn cycle(self) -> (&'static [StripRef; 4], &'static [bool; 4]) {
        match self {
            Axis::X => (&X_CYCLE, &X_REVERSED),
            Axis::Y => (&Y_CYCLE, &Y_REVERSED),
            Axis::Z => (&Z_CYCLE, &Z_REVERSED),
        }
    }
}

impl Face {
    /// The axis perpendicular to this face, the layer index of this face
    /// along it, and whether this face's outside-view clockwise matches the
    /// axis viewpoint.
    fn boundary_slice(self, size: usize) -> (Axis, usize, bool) {
        let last = size - 1;
        match self {
            Face::Up => (Axis::Y, 0, true),
            Face::Down => (Axis::Y, last, false),
            Face::Left => (Axis::X, 0, false),
            Face::Right => (Axis::X, last, true),
            Face::Front => (Axis::Z, 0, true),
            Face::Back => (Axis::Z, last, false),
        }
    }
}

impl Cube {
    /// Apply one of the six canonical face twists: rotate the face's own
    /// grid and cycle the four boundary strips of its adjacent faces.
    pub fn twist_face(&mut self, face: Face, direction: Direction) {
        let rotated = match direction {
            Direction::Clockwise => self.face(face).rotate_cw(),
            Direction::CounterClockwise => self.face(face).rotate_ccw(),
        };
        *self.face_mut(face) = rotated;

        let (axis, layer, same_sense) = face.boundary_slice(self.size());
        let slice_direction = if same_sense {
            direction
        } else {
            direction.inverse()
        };
        self.cycle_strips(axis, layer, slice_direction);
    }

    /// Rotate an inner layer around the given axis.
    ///
    /// The layer must be strictly between 0 and N−1; boundary layers also
    /// rotate a face's own grid and must go through
    /// [`twist_face`](Cube::twist_face) instead. Rejection happens before
    /// any mutation, so on error the cube is untouched.
    pub fn rotate_layer(
        &mut self,
        layer: usize,
        axis: Axis,
        direction: Direction,
    ) -> Result<(), CubeError> {
        if layer == 0 || layer >= self.size() - 1 {
            return Err(CubeError::InvalidLayer {
                layer,
                size: self.size(),
            });
        }
        self.cycle_strips(axis, layer, direction);
        Ok(())
    }

    /// Apply a resolved move.
    pub fn apply(&mut self, mv: CubeMove) -> Result<(), CubeError> {
        match mv {
            CubeMove::Face { face, direction } => {
                self.twist_face(face, direction);
                Ok(())
            }
            CubeMove::Slice {
                axis,
                layer,
                direction,
            } => self.rotate_layer(layer, axis, direction),
        }
    }

    /// Apply a whole sequence in order, stopping at the first rejected
    /// move. Moves already applied stay applied.
    pub fn apply_all(&mut self, moves: &MoveSequence<CubeMove>) -> Result<(), CubeError> {
        for &mv in &moves.0 {
            self.apply(mv)?;
        }
        Ok(())
    }

    /// Parse and apply a single move token such as `R'` or `M`, resolving
    /// slice tokens to the middle layer. Returns the move actually applied.
    pub fn apply_token(&mut self, token: &str) -> Result<CubeMove, CubeError> {
        let mv = token.parse::<MoveToken>()?.resolve(self.size(), None)?;
        self.apply(mv)?;
        Ok(mv)
    }

    fn read_strip(&self, strip: StripRef, layer: usize) -> Vec<Color> {
        let grid: &FaceGrid = self.face(strip.face);
        let idx = strip.index(layer, self.size());
        match strip.kind {
            StripKind::Row => grid.row(idx),
            StripKind::Col => grid.col(idx),
        }
    }

    fn write_strip(&mut self, strip: StripRef, layer: usize, colors: &[Color]) {
        let idx = strip.index(layer, self.size());
        let grid = self.face_mut(strip.face);
        match strip.kind {
            StripKind::Row => grid.set_row(idx, colors),
            StripKind::Col => grid.set_col(idx, colors),
        }
    }

    // The strip-cycle engine behind both twist kinds. Callers guarantee
    // `layer` is in range; boundary layers are legal here because
    // `twist_face` owns the accompanying grid rotation.
    pub(crate) fn cycle_strips(&mut self, axis: Axis, layer: usize, direction: Direction) {
        let (cycle, reversed) = axis.cycle();

        // Snapshot all four strips before writing any of them back; the
        // four writes each depend on pre-move values.
        let strips: Vec<Vec<Color>> = cycle
            .iter()
            .map(|&strip| self.read_strip(strip, layer))
            .collect();

        for i in 0..4 {
            let (src, dst) = match direction {
                Direction::Clockwise => (i, (i + 1) % 4),
                Direction::CounterClockwise => ((i + 1) % 4, i),
            };
            let mut strip = strips[src].clone();
            if reversed[i] {
                strip.reverse();
            }
            self.write_strip(cycle[dst], layer, &strip);
        }
    }
}
