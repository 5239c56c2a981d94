use rand::Rng;

use super::{Board, BoardError};

impl Board {
    /// Produces a uniformly shuffled permutation of `0..width*height`, in the
    /// manner of `original_source/src/Board.cpp::__createRandom`: a
    /// Fisher-Yates shuffle over the flattened cell array. Does not consult
    /// the parity fixer — a freshly shuffled board may well be unsolvable,
    /// which is exactly what [`crate::parity::fix`] exists to correct.
    pub fn random(width: u32, height: u32) -> Result<Self, BoardError> {
        if width < 2 || height < 2 || width * height < 4 {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        let size = (width * height) as usize;
        let mut cells: Vec<u32> = (0..size as u32).collect();
        let mut rng = rand::thread_rng();
        for i in (1..size).rev() {
            let j = rng.gen_range(0..=i);
            cells.swap(i, j);
        }

        Ok(Self::from_cells(width, height, cells.into_boxed_slice()))
    }
}
