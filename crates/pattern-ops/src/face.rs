use cube_types::FacePattern;
use rand::Rng;
use tracing::{debug, instrument, warn};

use crate::types::{FaceSample, OpError};
use crate::validate::{validate_probability, validate_size, validate_symmetric_size};

/// Default cap on symmetric sampling passes before the centre cell is forced.
pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

/// Sample every face cell independently with probability `p`.
pub fn random_face<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> Result<FacePattern, OpError> {
    validate_size(n)?;
    validate_probability(p)?;

    let mut pattern = FacePattern::new(n);
    for i in 0..n {
        for j in 0..n {
            pattern.set(i, j, rng.random_bool(p));
        }
    }
    Ok(pattern)
}

/// The eight images of `(i, j)` under the symmetries of an n×n square.
///
/// Positions may repeat when `(i, j)` lies on a diagonal or a centre line.
pub fn orbit(n: usize, i: usize, j: usize) -> [(usize, usize); 8] {
    let (mi, mj) = (n - 1 - i, n - 1 - j);
    [
        (i, j),
        (j, i),
        (mi, j),
        (j, mi),
        (i, mj),
        (mj, i),
        (mi, mj),
        (mj, mi),
    ]
}

/// Sample a face pattern with 8-fold dihedral symmetry.
///
/// One Bernoulli(`p`) sample is drawn per cell of the fundamental domain
/// `0 <= i, j < ceil(n/2)` and written to every position of its orbit.
/// All-true and all-false results are rejected and resampled, at most
/// `max_attempts` times. If every pass is degenerate, the centre cell (an
/// orbit of its own) is flipped so the result is still symmetric.
#[instrument(skip(rng))]
pub fn symmetric_face<R: Rng + ?Sized>(
    n: usize,
    p: f64,
    max_attempts: usize,
    rng: &mut R,
) -> Result<FaceSample, OpError> {
    validate_symmetric_size(n)?;
    validate_probability(p)?;

    let max_attempts = max_attempts.max(1);
    let mut attempts = 0;
    loop {
        attempts += 1;
        let mut pattern = sample_symmetric(n, p, rng);
        if !pattern.is_uniform() {
            return Ok(FaceSample {
                pattern,
                attempts,
                forced: false,
            });
        }
        debug!(attempt = attempts, all_true = pattern.get(0, 0), "rejected degenerate face pattern");

        if attempts >= max_attempts {
            let centre = (n - 1) / 2;
            let flipped = !pattern.get(centre, centre);
            pattern.set(centre, centre, flipped);
            warn!(attempts, "every face sample was degenerate; flipped the centre cell");
            return Ok(FaceSample {
                pattern,
                attempts,
                forced: true,
            });
        }
    }
}

fn sample_symmetric<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> FacePattern {
    let half = n.div_ceil(2);
    let mut pattern = FacePattern::new(n);
    for i in 0..half {
        for j in 0..half {
            let value = rng.random_bool(p);
            for (a, b) in orbit(n, i, j) {
                pattern.set(a, b, value);
            }
        }
    }
    pattern
}
