//! Read-only checks of the cube-state invariants.
//!
//! Sticker conservation holds for every size; the edge-adjacency check is
//! specific to the 3×3×3, whose 12 edge positions each carry a sticker pair
//! that must be one of the 12 pairs the solved cube's geometry allows.

use thiserror::Error;

use super::face::Face;
use super::{Color, Cube};

/// A single invariant violation found by [`Cube::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A color whose sticker count across all six faces is not N².
    #[error("color {color} appears {found} times, expected {expected}")]
    StickerCount {
        /// The miscounted color.
        color: Color,
        /// The required count, N².
        expected: usize,
        /// The count actually found.
        found: usize,
    },
    /// An edge sticker pair that cannot occur on a 3×3×3 reachable from
    /// solved.
    #[error("edge pair {first}/{second} cannot occur on a 3x3x3")]
    EdgePair {
        /// One sticker of the pair.
        first: Color,
        /// The physically adjacent sticker on the neighboring face.
        second: Color,
    },
}

type EdgeSticker = (Face, usize, usize);

// The 12 edge positions of a 3×3×3 as pairs of physically adjacent sticker
// coordinates, four around Up, four around Down, four on the equator.
const EDGES: [(EdgeSticker, EdgeSticker); 12] = [
    ((Face::Up, 2, 1), (Face::Front, 0, 1)),
    ((Face::Up, 1, 2), (Face::Right, 0, 1)),
    ((Face::Up, 0, 1), (Face::Back, 0, 1)),
    ((Face::Up, 1, 0), (Face::Left, 0, 1)),
    ((Face::Down, 0, 1), (Face::Front, 2, 1)),
    ((Face::Down, 1, 2), (Face::Right, 2, 1)),
    ((Face::Down, 2, 1), (Face::Back, 2, 1)),
    ((Face::Down, 1, 0), (Face::Left, 2, 1)),
    ((Face::Front, 1, 2), (Face::Right, 1, 0)),
    ((Face::Front, 1, 0), (Face::Left, 1, 2)),
    ((Face::Back, 1, 0), (Face::Right, 1, 2)),
    ((Face::Back, 1, 2), (Face::Left, 1, 0)),
];

// The valid color pairs are exactly the home-color pairs of the adjacent
// face pairs above. The relation is symmetric, so membership is checked in
// both orders.
fn valid_edge_pair(a: Color, b: Color) -> bool {
    EDGES.iter().any(|&((fa, _, _), (fb, _, _))| {
        let (ha, hb) = (fa.home_color(), fb.home_color());
        (ha == a && hb == b) || (ha == b && hb == a)
    })
}

impl Cube {
    /// Check the cube against the state invariants without mutating it.
    ///
    /// On failure, returns every violation found in a stable order:
    /// per-color sticker-count mismatches first (in color order), then, for
    /// 3×3×3 cubes only, edge pairs absent from the valid-pair set.
    pub fn validate(&self) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();

        let expected = self.size() * self.size();
        let mut counts = [0usize; 6];
        for face in Face::ALL {
            for &color in &self.face(face).stickers {
                counts[color as usize] += 1;
            }
        }
        for color in Color::ALL {
            let found = counts[color as usize];
            if found != expected {
                violations.push(Violation::StickerCount {
                    color,
                    expected,
                    found,
                });
            }
        }

        if self.size() == 3 {
            for &((fa, ra, ca), (fb, rb, cb)) in EDGES.iter() {
                let first = self.face(fa).at(ra, ca);
                let second = self.face(fb).at(rb, cb);
                if !valid_edge_pair(first, second) {
                    violations.push(Violation::EdgePair { first, second });
                }
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Whether [`validate`](Cube::validate) reports no violations.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::moves::Direction;

    #[test]
    fn solved_cubes_are_valid() {
        for size in 2..=6 {
            assert_eq!(Cube::new(size).validate(), Ok(()));
        }
    }

    #[test]
    fn single_outer_twists_stay_valid_on_three_cube() {
        for face in Face::ALL {
            for direction in [Direction::Clockwise, Direction::CounterClockwise] {
                let mut cube = Cube::new(3);
                cube.twist_face(face, direction);
                assert_eq!(cube.validate(), Ok(()), "{face:?} {direction:?}");
            }
        }
    }

    #[test]
    fn recolored_sticker_breaks_two_counts() {
        let mut cube = Cube::new(4);
        cube.set_sticker(Face::Up, 0, 0, Color::Red).unwrap();
        let violations = cube.validate().unwrap_err();
        assert_eq!(
            violations,
            vec![
                Violation::StickerCount {
                    color: Color::White,
                    expected: 16,
                    found: 15,
                },
                Violation::StickerCount {
                    color: Color::Red,
                    expected: 16,
                    found: 17,
                },
            ]
        );
    }

    #[test]
    fn impossible_edge_pair_is_reported() {
        let mut cube = Cube::new(3);
        // Paint the UF edge white on both sides: no 3×3×3 edge piece shows
        // the same color twice.
        cube.set_sticker(Face::Front, 0, 1, Color::White).unwrap();
        let violations = cube.validate().unwrap_err();
        // Counts come first, then the bad edge.
        assert!(matches!(
            violations.first(),
            Some(Violation::StickerCount { .. })
        ));
        assert!(violations.contains(&Violation::EdgePair {
            first: Color::White,
            second: Color::White,
        }));
    }

    #[test]
    fn opposite_face_pairs_are_invalid_edges() {
        // White/Yellow are opposite faces and never share an edge.
        assert!(!valid_edge_pair(Color::White, Color::Yellow));
        assert!(!valid_edge_pair(Color::Red, Color::Orange));
        assert!(!valid_edge_pair(Color::Green, Color::Blue));
        // All four Up edges, both orders.
        assert!(valid_edge_pair(Color::White, Color::Red));
        assert!(valid_edge_pair(Color::Red, Color::White));
        assert!(valid_edge_pair(Color::White, Color::Green));
        assert!(valid_edge_pair(Color::Blue, Color::White));
    }

    #[test]
    fn checker_does_not_mutate() {
        let mut cube = Cube::new(3);
        crate::cube::scramble::scramble(&mut cube, 15, 8);
        let snapshot = cube.clone();
        let _ = cube.validate();
        let _ = cube.is_valid();
        assert_eq!(cube, snapshot);
    }
}
