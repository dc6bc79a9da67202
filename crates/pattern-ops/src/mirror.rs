use cube_types::{CubeFace, FacePattern, InteriorMode, LatticeCoord, OccupancyGrid};
use tracing::{info, instrument};

use crate::types::OpError;

/// Expand a face pattern into a full occupancy grid.
///
/// A surface cell takes its value from the first face that contains it, in
/// `CubeFace::ALL` order (x=0, x=n-1, y=0, y=n-1, z=0, z=n-1). Min faces read
/// the pattern with both indices mirrored, max faces read it directly.
/// Interior cells follow `interior`.
#[instrument(skip(pattern))]
pub fn mirror(
    n: usize,
    pattern: &FacePattern,
    interior: InteriorMode,
) -> Result<OccupancyGrid, OpError> {
    if pattern.size() != n {
        return Err(OpError::SizeMismatch {
            expected: n,
            actual: pattern.size(),
        });
    }

    let mut grid = OccupancyGrid::new(n);
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                let coord = LatticeCoord::new(x, y, z);
                grid.set(coord, cell_value(n, coord, pattern, interior));
            }
        }
    }

    info!(n, occupied = grid.count_occupied(), ?interior, "mirrored face pattern");
    Ok(grid)
}

fn cell_value(n: usize, coord: LatticeCoord, pattern: &FacePattern, interior: InteriorMode) -> bool {
    let LatticeCoord { x, y, z } = coord;
    let (mx, my, mz) = (n - 1 - x, n - 1 - y, n - 1 - z);

    match CubeFace::first_containing(coord, n) {
        Some(CubeFace::XMin) => pattern.get(my, mz),
        Some(CubeFace::XMax) => pattern.get(y, z),
        Some(CubeFace::YMin) => pattern.get(mx, mz),
        Some(CubeFace::YMax) => pattern.get(x, z),
        Some(CubeFace::ZMin) => pattern.get(mx, my),
        Some(CubeFace::ZMax) => pattern.get(x, y),
        None => match interior {
            InteriorMode::Hollow => false,
            InteriorMode::Solid => pattern.get(x, y),
        },
    }
}
