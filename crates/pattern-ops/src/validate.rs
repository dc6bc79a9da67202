use crate::types::OpError;

/// A probability must lie in the closed interval [0, 1]. NaN is rejected.
pub fn validate_probability(p: f64) -> Result<(), OpError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(OpError::InvalidProbability { value: p })
    }
}

/// Any lattice needs at least one cell per side.
pub fn validate_size(n: usize) -> Result<(), OpError> {
    if n == 0 {
        return Err(OpError::InvalidSize {
            size: n,
            reason: "size must be at least 1".to_string(),
        });
    }
    Ok(())
}

/// Symmetric patterns need an odd side of at least 3 so the centre row and
/// column exist.
pub fn validate_symmetric_size(n: usize) -> Result<(), OpError> {
    if n < 3 {
        return Err(OpError::InvalidSize {
            size: n,
            reason: "symmetric shapes need a size of at least 3".to_string(),
        });
    }
    if n % 2 == 0 {
        return Err(OpError::InvalidSize {
            size: n,
            reason: "symmetric shapes need an odd size".to_string(),
        });
    }
    Ok(())
}
