//! Face labels and the single-face sticker grid primitive.

use super::Color;
use crate::error::CubeError;

/// One of the six face orientations of a cube held in the canonical
/// orientation: Up on top, Front toward the viewer.
///
/// Each face's grid is laid out as seen when looking straight at that face
/// from outside the cube: Up is viewed with Back at the top, Down with Front
/// at the top, and the four side faces with Up at the top. Column 0 of Back
/// is therefore the column nearest Right, and column 0 of Left the column
/// nearest Back.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Face {
    /// The top face.
    Up = 0,
    /// The bottom face.
    Down = 1,
    /// The left face.
    Left = 2,
    /// The right face.
    Right = 3,
    /// The face toward the viewer.
    Front = 4,
    /// The face away from the viewer.
    Back = 5,
}

impl Face {
    /// All six faces, in discriminant order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    /// The solid color this face holds in the solved state.
    pub fn home_color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Left => Color::Green,
            Face::Right => Color::Blue,
            Face::Front => Color::Red,
            Face::Back => Color::Orange,
        }
    }
}

/// An N×N sticker grid for a single face, row-major, origin at the top-left
/// of the face as viewed from outside the cube.
///
/// The grid knows nothing about adjacency to other faces; the rotation
/// engine owns that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceGrid {
    size: usize,
    pub(crate) stickers: Vec<Color>,
}

impl FaceGrid {
    /// A grid filled with a single color.
    pub fn solid(size: usize, color: Color) -> FaceGrid {
        FaceGrid {
            size,
            stickers: vec![color; size * size],
        }
    }

    /// The edge length N of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, CubeError> {
        if row >= self.size || col >= self.size {
            return Err(CubeError::IndexOutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    /// The sticker at `(row, col)`, both in `[0, N)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Color, CubeError> {
        Ok(self.stickers[self.index(row, col)?])
    }

    /// Overwrite the sticker at `(row, col)`, both in `[0, N)`.
    pub fn set(&mut self, row: usize, col: usize, color: Color) -> Result<(), CubeError> {
        let i = self.index(row, col)?;
        self.stickers[i] = color;
        Ok(())
    }

    // Unchecked access for engine-internal indices, which are derived from
    // the size and always in range.
    pub(crate) fn at(&self, row: usize, col: usize) -> Color {
        self.stickers[row * self.size + col]
    }

    /// Rotate the grid 90° clockwise, as viewed looking directly at the
    /// face: `result[i][j] = grid[N-1-j][i]`. Returns a new grid.
    pub fn rotate_cw(&self) -> FaceGrid {
        let n = self.size;
        let mut stickers = self.stickers.clone();
        for i in 0..n {
            for j in 0..n {
                stickers[i * n + j] = self.stickers[(n - 1 - j) * n + i];
            }
        }
        FaceGrid { size: n, stickers }
    }

    /// Rotate the grid 90° counter-clockwise; the algebraic inverse of
    /// [`rotate_cw`](FaceGrid::rotate_cw): `result[i][j] = grid[j][N-1-i]`.
    pub fn rotate_ccw(&self) -> FaceGrid {
        let n = self.size;
        let mut stickers = self.stickers.clone();
        for i in 0..n {
            for j in 0..n {
                stickers[i * n + j] = self.stickers[j * n + (n - 1 - i)];
            }
        }
        FaceGrid { size: n, stickers }
    }

    pub(crate) fn row(&self, row: usize) -> Vec<Color> {
        self.stickers[row * self.size..(row + 1) * self.size].to_vec()
    }

    pub(crate) fn col(&self, col: usize) -> Vec<Color> {
        (0..self.size).map(|r| self.at(r, col)).collect()
    }

    pub(crate) fn set_row(&mut self, row: usize, strip: &[Color]) {
        self.stickers[row * self.size..(row + 1) * self.size].copy_from_slice(strip);
    }

    pub(crate) fn set_col(&mut self, col: usize, strip: &[Color]) {
        for (r, &color) in strip.iter().enumerate() {
            self.stickers[r * self.size + col] = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // A grid whose stickers vary enough that rotation bugs can't hide.
    fn patterned(size: usize) -> FaceGrid {
        FaceGrid {
            size,
            stickers: (0..size * size).map(|i| Color::ALL[i % 6]).collect(),
        }
    }

    #[test]
    fn rotate_cw_matches_index_formula() {
        use crate::cube::Color::{Blue, Green, White, Yellow};
        let grid = FaceGrid {
            size: 2,
            stickers: vec![White, Yellow, Green, Blue],
        };
        // [W Y]        [G W]
        // [G B]  -cw-> [B Y]
        assert_eq!(grid.rotate_cw().stickers, vec![Green, White, Blue, Yellow]);
    }

    #[test]
    fn four_rotations_are_identity() {
        for size in 2..=7 {
            let grid = patterned(size);
            let cw4 = grid.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
            assert_eq!(cw4, grid);
            let ccw4 = grid.rotate_ccw().rotate_ccw().rotate_ccw().rotate_ccw();
            assert_eq!(ccw4, grid);
        }
    }

    #[test]
    fn ccw_is_cw_cubed() {
        for size in 2..=7 {
            let grid = patterned(size);
            assert_eq!(grid.rotate_ccw(), grid.rotate_cw().rotate_cw().rotate_cw());
        }
    }

    proptest! {
        #[test]
        fn cw_then_ccw_is_identity(
            size in 2usize..8,
            seed in proptest::collection::vec(0usize..6, 64),
        ) {
            let stickers = (0..size * size).map(|i| Color::ALL[seed[i % 64]]).collect();
            let grid = FaceGrid { size, stickers };
            prop_assert_eq!(grid.rotate_cw().rotate_ccw(), grid.clone());
            prop_assert_eq!(grid.rotate_ccw().rotate_cw(), grid);
        }
    }
}
