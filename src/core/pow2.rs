use crate::config::CliConfig;
use crate::utils::error::{Pow2Error, Result};
use crate::utils::validation::Validate;

/// Smallest `k` such that `2^k >= size`.
///
/// Integer-only: position of the highest set bit, plus one when `size` is
/// not already a power of two. Callers must pass `size > 0`.
pub fn ceil_log2(size: u64) -> u32 {
    debug_assert!(size > 0);

    let floor = u64::BITS - size.leading_zeros() - 1;
    if size.is_power_of_two() {
        floor
    } else {
        floor + 1
    }
}

/// Smallest power of two `>= size`.
///
/// `size == 0` has no defined logarithm, and sizes above `2^63` have no
/// `u64` power of two to round up to; both are surfaced as errors.
pub fn next_power_of_two(size: u64) -> Result<u64> {
    if size == 0 {
        return Err(Pow2Error::DomainError {
            field: "size".to_string(),
            value: 0,
        });
    }

    size.checked_next_power_of_two()
        .ok_or(Pow2Error::OverflowError { value: size })
}

/// 驗證輸入並計算，main 與整合測試共用的入口
pub fn run(config: &CliConfig) -> Result<u64> {
    config.validate()?;

    let size = config.size as u64;
    let result = next_power_of_two(size)?;
    tracing::debug!("ceil(log2({})) = {}, result = {}", size, ceil_log2(size), result);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_values() {
        assert_eq!(next_power_of_two(1).unwrap(), 1);
        assert_eq!(next_power_of_two(2).unwrap(), 2);
        assert_eq!(next_power_of_two(3).unwrap(), 4);
        assert_eq!(next_power_of_two(1024).unwrap(), 1024);
        assert_eq!(next_power_of_two(1_000_000).unwrap(), 1_048_576);
    }

    #[test]
    fn test_result_is_smallest_power_of_two() {
        for n in 1..=4096u64 {
            let r = next_power_of_two(n).unwrap();
            assert!(r >= n);
            assert!(r.is_power_of_two());
            assert!(r / 2 < n, "{} is not the smallest power of two for {}", r, n);
        }
    }

    #[test]
    fn test_idempotent_on_own_output() {
        for n in [1u64, 7, 100, 4096, 1_000_000] {
            let r = next_power_of_two(n).unwrap();
            assert_eq!(next_power_of_two(r).unwrap(), r);
        }
    }

    #[test]
    fn test_zero_is_domain_error() {
        let err = next_power_of_two(0).unwrap_err();
        assert!(matches!(err, Pow2Error::DomainError { .. }));
    }

    #[test]
    fn test_overflow_above_2_pow_63() {
        assert_eq!(next_power_of_two(1 << 63).unwrap(), 1 << 63);

        let err = next_power_of_two((1 << 63) + 1).unwrap_err();
        assert!(matches!(err, Pow2Error::OverflowError { .. }));

        let err = next_power_of_two(u64::MAX).unwrap_err();
        assert!(matches!(err, Pow2Error::OverflowError { .. }));
    }

    #[test]
    fn test_ceil_log2() {
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(3), 2);
        assert_eq!(ceil_log2(1024), 10);
        assert_eq!(ceil_log2(1025), 11);
    }
}
