//! Standard normal quantile function (probit)

use std::f64::consts::SQRT_2;

use statrs::function::erf::erfc_inv;

/// Inverse standard-normal CDF, Φ⁻¹(p).
///
/// Uses the identity Φ⁻¹(p) = −√2 · erfc⁻¹(2p). The endpoints map to
/// signed infinities: `inverse_cdf(0.0) == -inf` and `inverse_cdf(1.0) == inf`.
/// Inputs outside `[0, 1]` saturate to the nearest endpoint; NaN propagates.
#[must_use]
pub fn inverse_cdf(p: f64) -> f64 {
    if p.is_nan() {
        return f64::NAN;
    }
    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }
    -SQRT_2 * erfc_inv(2.0 * p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_cdf_known_quantiles() {
        assert!(inverse_cdf(0.5).abs() < 1e-12);
        assert!((inverse_cdf(0.975) - 1.959_963_984_540_054).abs() < 1e-9);
        assert!((inverse_cdf(0.025) + 1.959_963_984_540_054).abs() < 1e-9);
        assert!((inverse_cdf(0.841_344_746_068_542_9) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_inverse_cdf_endpoints() {
        assert_eq!(inverse_cdf(0.0), f64::NEG_INFINITY);
        assert_eq!(inverse_cdf(1.0), f64::INFINITY);
    }

    #[test]
    fn test_inverse_cdf_symmetry() {
        for p in [0.01, 0.1, 0.3, 0.45] {
            assert!((inverse_cdf(p) + inverse_cdf(1.0 - p)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_inverse_cdf_nan() {
        assert!(inverse_cdf(f64::NAN).is_nan());
    }
}
