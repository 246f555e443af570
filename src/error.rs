#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PermutationError {
    #[error("invalid domain size {0}: must be at least 1")]
    InvalidDomain(i64),

    #[error("position {position} is outside the domain [0, {domain})")]
    InvalidPosition { position: i64, domain: u64 },
}

/// Checks `n >= 1` and returns it as the unsigned domain size.
pub fn validate_domain(n: i64) -> Result<u64, PermutationError> {
    if n < 1 {
        return Err(PermutationError::InvalidDomain(n));
    }
    Ok(n as u64)
}

/// Checks `0 <= position < domain`.
pub fn validate_position(position: i64, domain: u64) -> Result<u64, PermutationError> {
    if position < 0 || position as u64 >= domain {
        return Err(PermutationError::InvalidPosition { position, domain });
    }
    Ok(position as u64)
}
