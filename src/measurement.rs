//! Measurement - trial counts for a single experimental condition
//!
//! A `Measurement` stores the four cells of the yes/no confusion table and
//! derives every SDT statistic from them on demand.
//!
//! ## Zero-denominator convention
//!
//! When a condition has no signal trials (`hits + misses == 0`) the hit rate
//! is `0.0`; likewise the false-alarm rate is `0.0` when there are no noise
//! trials. Rates therefore always lie in `[0, 1]` and downstream sorting and
//! integration stay total. The fallback feeds Φ⁻¹(0) = −∞ into d' and
//! criterion for such conditions.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::normal::inverse_cdf;

/// Trial counts for one condition.
///
/// Immutable after construction; all rates are recomputed from the counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Measurement {
    hits: u64,
    misses: u64,
    false_alarms: u64,
    correct_rejections: u64,
}

impl Measurement {
    /// Create a measurement from raw trial counts.
    ///
    /// # Arguments
    ///
    /// * `hits` - Signal trials answered "yes"
    /// * `misses` - Signal trials answered "no"
    /// * `false_alarms` - Noise trials answered "yes"
    /// * `correct_rejections` - Noise trials answered "no"
    #[must_use]
    pub const fn new(hits: u64, misses: u64, false_alarms: u64, correct_rejections: u64) -> Self {
        Self {
            hits,
            misses,
            false_alarms,
            correct_rejections,
        }
    }

    /// Number of hits.
    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of misses.
    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }

    /// Number of false alarms.
    #[must_use]
    pub const fn false_alarms(&self) -> u64 {
        self.false_alarms
    }

    /// Number of correct rejections.
    #[must_use]
    pub const fn correct_rejections(&self) -> u64 {
        self.correct_rejections
    }

    /// Total signal-present trials, widened so the sum cannot overflow.
    #[must_use]
    pub const fn signal_trials(&self) -> u128 {
        self.hits as u128 + self.misses as u128
    }

    /// Total signal-absent trials, widened so the sum cannot overflow.
    #[must_use]
    pub const fn noise_trials(&self) -> u128 {
        self.false_alarms as u128 + self.correct_rejections as u128
    }

    /// Hit rate: `hits / (hits + misses)`, or `0.0` with no signal trials.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        ratio(self.hits, self.signal_trials())
    }

    /// False-alarm rate: `false_alarms / (false_alarms + correct_rejections)`,
    /// or `0.0` with no noise trials.
    #[must_use]
    pub fn false_alarm_rate(&self) -> f64 {
        ratio(self.false_alarms, self.noise_trials())
    }

    /// Sensitivity d' = Φ⁻¹(H) − Φ⁻¹(F).
    ///
    /// Rates of exactly 0 or 1 yield signed infinities, and NaN when both
    /// terms are infinite with the same sign. No clamping is applied.
    #[must_use]
    pub fn d_prime(&self) -> f64 {
        let (z_hit, z_fa) = self.z_scores();
        let d = z_hit - z_fa;
        if !d.is_finite() {
            warn!(measurement = ?self, d_prime = d, "d' is not finite (extreme rate)");
        }
        d
    }

    /// Response bias c = −0.5 · (Φ⁻¹(H) + Φ⁻¹(F)).
    ///
    /// Extreme rates yield signed infinities, and NaN when H = 1 and F = 0
    /// (or the reverse) make the two terms cancel.
    #[must_use]
    pub fn criterion(&self) -> f64 {
        let (z_hit, z_fa) = self.z_scores();
        let c = -0.5 * (z_hit + z_fa);
        if !c.is_finite() {
            warn!(measurement = ?self, criterion = c, "criterion is not finite (extreme rate)");
        }
        c
    }

    /// All four derived statistics at once.
    #[must_use]
    pub fn summary(&self) -> SdtSummary {
        SdtSummary {
            hit_rate: self.hit_rate(),
            false_alarm_rate: self.false_alarm_rate(),
            d_prime: self.d_prime(),
            criterion: self.criterion(),
        }
    }

    fn z_scores(&self) -> (f64, f64) {
        (
            inverse_cdf(self.hit_rate()),
            inverse_cdf(self.false_alarm_rate()),
        )
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: u64, denominator: u128) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}

/// Derived SDT statistics for one measurement.
///
/// `d_prime` and `criterion` may be infinite or NaN for extreme rates, so the
/// JSON form of such a summary holds `null` in those fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SdtSummary {
    /// Hit rate
    pub hit_rate: f64,
    /// False-alarm rate
    pub false_alarm_rate: f64,
    /// Sensitivity d'
    pub d_prime: f64,
    /// Response bias c
    pub criterion: f64,
}
