//! Sticker-level state of an N×N×N cube and the operations acting on it.
//!
//! The [`Cube`] itself only owns the six face grids and the size; every
//! mutation beyond raw sticker writes goes through the rotation engine in
//! [`moves`].

pub mod face;
pub mod moves;
pub mod scramble;
pub mod validate;

pub use face::{Face, FaceGrid};

use crate::error::CubeError;

/// One of the six sticker colors.
///
/// Deliberately a separate alphabet from the [`Face`] labels: `Color::Red`
/// the sticker and `Face::Right` the orientation are distinct symbols and
/// never conflated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    /// White, the home color of the Up face.
    White = 0,
    /// Yellow, the home color of the Down face.
    Yellow = 1,
    /// Green, the home color of the Left face.
    Green = 2,
    /// Blue, the home color of the Right face.
    Blue = 3,
    /// Red, the home color of the Front face.
    Red = 4,
    /// Orange, the home color of the Back face.
    Orange = 5,
}

impl Color {
    /// All six colors, in discriminant order.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::Orange,
    ];

    /// One-letter symbol used by net renderers.
    pub fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// The full sticker state of an N×N×N cube: six face grids plus the fixed
/// edge length.
///
/// A cube is constructed solved and thereafter mutated only through move
/// application (or raw [`set_sticker`](Cube::set_sticker) writes); the size
/// never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    size: usize,
    faces: [FaceGrid; 6],
}

impl Cube {
    /// Construct a solved cube of the given edge length, each face solid in
    /// its home color.
    ///
    /// # Panics
    ///
    /// Panics if `size < 2`; there is no 1×1×1 or degenerate cube.
    pub fn new(size: usize) -> Cube {
        assert!(size >= 2, "cube size must be at least 2, got {size}");
        let faces = Face::ALL.map(|f| FaceGrid::solid(size, f.home_color()));
        Cube { size, faces }
    }

    /// The edge length N of the cube.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Read-only view of one face's grid, e.g. for a net renderer.
    pub fn face(&self, face: Face) -> &FaceGrid {
        &self.faces[face as usize]
    }

    pub(crate) fn face_mut(&mut self, face: Face) -> &mut FaceGrid {
        &mut self.faces[face as usize]
    }

    /// The sticker at `(row, col)` of a face, both in `[0, N)`.
    pub fn sticker(&self, face: Face, row: usize, col: usize) -> Result<Color, CubeError> {
        self.face(face).get(row, col)
    }

    /// Overwrite the sticker at `(row, col)` of a face, both in `[0, N)`.
    ///
    /// This is raw access and can produce states unreachable by moves; use
    /// [`validate`](Cube::validate) to check the result.
    pub fn set_sticker(
        &mut self,
        face: Face,
        row: usize,
        col: usize,
        color: Color,
    ) -> Result<(), CubeError> {
        self.face_mut(face).set(row, col, color)
    }

    /// Whether every face is solid in its home color.
    pub fn is_solved(&self) -> bool {
        Face::ALL
            .iter()
            .all(|&f| self.face(f).stickers.iter().all(|&c| c == f.home_color()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cube_is_solved() {
        for size in 2..=6 {
            let cube = Cube::new(size);
            assert_eq!(cube.size(), size);
            assert!(cube.is_solved());
            for face in Face::ALL {
                for row in 0..size {
                    for col in 0..size {
                        assert_eq!(cube.sticker(face, row, col), Ok(face.home_color()));
                    }
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "cube size must be at least 2")]
    fn degenerate_size_is_rejected() {
        let _ = Cube::new(1);
    }

    #[test]
    fn raw_access_is_bounds_checked() {
        let mut cube = Cube::new(3);
        assert_eq!(
            cube.sticker(Face::Up, 3, 0),
            Err(CubeError::IndexOutOfRange {
                row: 3,
                col: 0,
                size: 3
            })
        );
        assert_eq!(
            cube.set_sticker(Face::Front, 0, 5, Color::White),
            Err(CubeError::IndexOutOfRange {
                row: 0,
                col: 5,
                size: 3
            })
        );
        assert!(cube.set_sticker(Face::Front, 0, 2, Color::White).is_ok());
        assert_eq!(cube.sticker(Face::Front, 0, 2), Ok(Color::White));
        assert!(!cube.is_solved());
    }
}
