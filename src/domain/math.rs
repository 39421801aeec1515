//! Greatest common divisor and least common multiple over jump counts

use num::integer::Integer;

use crate::domain::error::{DomainError, DomainResult};

/// `gcd(0, 0) == 0`.
pub fn gcd(a: u64, b: u64) -> u64 {
    a.gcd(&b)
}

/// Least common multiple, `0` if either side is `0`.
pub fn lcm(a: u64, b: u64) -> DomainResult<u64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    (a / gcd(a, b))
        .checked_mul(b)
        .ok_or(DomainError::Overflow { a, b })
}

/// Left-to-right pairwise fold; the empty fold is `1`.
pub fn lcm_all<I>(values: I) -> DomainResult<u64>
where
    I: IntoIterator<Item = u64>,
{
    values.into_iter().try_fold(1, lcm)
}
