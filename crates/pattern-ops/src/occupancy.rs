use cube_types::{LatticeCoord, OccupancyGrid};
use rand::Rng;
use tracing::instrument;

use crate::types::OpError;
use crate::validate::{validate_probability, validate_size};

/// Sample every lattice cell independently with probability `p`.
///
/// Cells are drawn in `x`, `y`, `z` order so a seeded generator always yields
/// the same grid.
#[instrument(skip(rng))]
pub fn random_occupancy<R: Rng + ?Sized>(
    n: usize,
    p: f64,
    rng: &mut R,
) -> Result<OccupancyGrid, OpError> {
    validate_size(n)?;
    validate_probability(p)?;

    let mut grid = OccupancyGrid::new(n);
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                grid.set(LatticeCoord::new(x, y, z), rng.random_bool(p));
            }
        }
    }
    Ok(grid)
}
