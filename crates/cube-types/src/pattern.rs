use serde::{Deserialize, Serialize};

/// A square boolean template for one face of the cube, indexed `[i][j]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacePattern {
    size: usize,
    cells: Vec<bool>,
}

impl FacePattern {
    /// An all-false pattern of side `size`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Build a pattern from explicit rows. Returns `None` if the rows are not square.
    pub fn from_rows(rows: &[Vec<bool>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        Some(Self {
            size,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell value at `[i][j]`. Out-of-range indices read as false.
    pub fn get(&self, i: usize, j: usize) -> bool {
        if i >= self.size || j >= self.size {
            return false;
        }
        self.cells[i * self.size + j]
    }

    /// Set the cell at `[i][j]`. Out-of-range indices are ignored.
    pub fn set(&mut self, i: usize, j: usize, value: bool) {
        if i < self.size && j < self.size {
            self.cells[i * self.size + j] = value;
        }
    }

    pub fn count_true(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// True if every cell holds the same value (all-true or all-false).
    pub fn is_uniform(&self) -> bool {
        match self.cells.first() {
            Some(&first) => self.cells.iter().all(|&c| c == first),
            None => true,
        }
    }

    /// Rows as nested vectors, mostly for display and serialization to the UI.
    pub fn rows(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.size.max(1)).map(|row| row.to_vec()).collect()
    }
}
