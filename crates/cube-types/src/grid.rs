use serde::{Deserialize, Serialize};

use crate::lattice::{CubeFace, LatticeCoord};
use crate::pattern::FacePattern;

/// Boolean occupancy over an N×N×N lattice, indexed `[x][y][z]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyGrid {
    size: usize,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// An empty grid of side `size`.
    pub fn new(size: usize) -> Self {
        Self::filled(size, false)
    }

    /// A grid of side `size` with every cell set to `value`.
    pub fn filled(size: usize, value: bool) -> Self {
        Self {
            size,
            cells: vec![value; size * size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, coord: LatticeCoord) -> Option<usize> {
        let n = self.size;
        if coord.x >= n || coord.y >= n || coord.z >= n {
            return None;
        }
        Some((coord.x * n + coord.y) * n + coord.z)
    }

    /// Occupancy at `coord`. Out-of-range coordinates read as unoccupied.
    pub fn get(&self, coord: LatticeCoord) -> bool {
        self.index(coord).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// Set occupancy at `coord`. Out-of-range coordinates are ignored.
    pub fn set(&mut self, coord: LatticeCoord, value: bool) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = value;
        }
    }

    pub fn count_occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Every occupied coordinate, `x` outermost and `z` innermost.
    pub fn occupied(&self) -> impl Iterator<Item = LatticeCoord> + '_ {
        let n = self.size;
        (0..n).flat_map(move |x| {
            (0..n).flat_map(move |y| {
                (0..n).filter_map(move |z| {
                    let coord = LatticeCoord::new(x, y, z);
                    self.get(coord).then_some(coord)
                })
            })
        })
    }

    /// The 2D slice of this grid lying on `face`, in that face's `(a, b)` coordinates.
    pub fn face_slice(&self, face: CubeFace) -> FacePattern {
        let n = self.size;
        let mut slice = FacePattern::new(n);
        for a in 0..n {
            for b in 0..n {
                slice.set(a, b, self.get(face.cell(a, b, n)));
            }
        }
        slice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_belongs_to_x_face_first() {
        let corner = LatticeCoord::new(0, 4, 4);
        assert_eq!(CubeFace::first_containing(corner, 5), Some(CubeFace::XMin));
        assert_eq!(CubeFace::first_containing(LatticeCoord::new(2, 2, 2), 5), None);
    }

    #[test]
    fn face_slice_reads_face_cells() {
        let mut grid = OccupancyGrid::new(3);
        grid.set(LatticeCoord::new(1, 2, 0), true);
        let bottom = grid.face_slice(CubeFace::ZMin);
        assert!(bottom.get(1, 2));
        assert_eq!(bottom.count_true(), 1);
        assert_eq!(grid.face_slice(CubeFace::YMax).count_true(), 1);
        assert_eq!(grid.face_slice(CubeFace::XMax).count_true(), 0);
    }

    #[test]
    fn occupied_iterates_x_then_y_then_z() {
        let grid = OccupancyGrid::filled(2, true);
        let order: Vec<_> = grid.occupied().map(|c| (c.x, c.y, c.z)).collect();
        assert_eq!(order[..3], [(0, 0, 0), (0, 0, 1), (0, 1, 0)]);
        assert_eq!(order.len(), 8);
    }

    #[test]
    fn out_of_range_is_unoccupied() {
        let mut grid = OccupancyGrid::filled(2, true);
        grid.set(LatticeCoord::new(5, 0, 0), true);
        assert!(!grid.get(LatticeCoord::new(5, 0, 0)));
    }
}
