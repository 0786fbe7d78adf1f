//! ROC points and trapezoidal AUC
//!
//! A ROC curve here is the set of (false-alarm rate, hit rate) points of an
//! experiment's conditions, ordered along the x axis.
//!
//! ## Ordering
//!
//! Points are sorted ascending by false-alarm rate. Ties on the false-alarm
//! rate are broken by ascending hit rate, and points equal on both keys keep
//! their insertion order (the sort is stable). With this order the vertical
//! segment at a shared x contributes no area and the curve climbs before it
//! moves right, so {(0,0), (0,1), (1,1)} integrates to 1.0 regardless of the
//! order the conditions were added in.
//!
//! ## Integration
//!
//! ```text
//! AUC = Σ (x[i+1] - x[i]) * (y[i] + y[i+1]) / 2
//! ```
//!
//! The result is not clamped to `[0, 1]`.

use serde::{Deserialize, Serialize};

/// A single point on the ROC plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocPoint {
    /// x coordinate: false-alarm rate
    pub false_alarm_rate: f64,
    /// y coordinate: hit rate
    pub hit_rate: f64,
}

impl RocPoint {
    /// Create a point from its coordinates.
    #[must_use]
    pub const fn new(false_alarm_rate: f64, hit_rate: f64) -> Self {
        Self {
            false_alarm_rate,
            hit_rate,
        }
    }
}

/// ROC points sorted ascending by false-alarm rate.
///
/// Only constructible through [`RocCurve::from_points`], which establishes
/// the ordering described in the module docs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocCurve {
    points: Vec<RocPoint>,
}

impl RocCurve {
    /// Sort `points` into ROC order.
    #[must_use]
    pub fn from_points(mut points: Vec<RocPoint>) -> Self {
        points.sort_by(|a, b| {
            a.false_alarm_rate
                .total_cmp(&b.false_alarm_rate)
                .then_with(|| a.hit_rate.total_cmp(&b.hit_rate))
        });
        Self { points }
    }

    /// Sorted points.
    #[must_use]
    pub fn points(&self) -> &[RocPoint] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// False-alarm rates in curve order (non-decreasing).
    #[must_use]
    pub fn false_alarm_rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.false_alarm_rate).collect()
    }

    /// Hit rates in curve order.
    #[must_use]
    pub fn hit_rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.hit_rate).collect()
    }

    /// Split into `(false_alarm_rates, hit_rates)`.
    #[must_use]
    pub fn into_columns(self) -> (Vec<f64>, Vec<f64>) {
        self.points
            .into_iter()
            .map(|p| (p.false_alarm_rate, p.hit_rate))
            .unzip()
    }

    /// Trapezoidal area under the curve; `0.0` for fewer than two points.
    #[must_use]
    pub fn auc(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| trapezoid(w[0], w[1]))
            .sum()
    }
}

/// Trapezoidal rule over paired, pre-sorted `xs` and `ys`.
///
/// Integrates over the common prefix when the slices differ in length and
/// returns `0.0` for fewer than two points. No sorting is performed.
///
/// # Examples
///
/// ```rust
/// use sdt_roc::roc::trapezoid_auc;
///
/// let auc = trapezoid_auc(&[0.0, 0.5, 1.0], &[0.0, 0.5, 1.0]);
/// assert!((auc - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn trapezoid_auc(xs: &[f64], ys: &[f64]) -> f64 {
    xs.windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| trapezoid(RocPoint::new(x[0], y[0]), RocPoint::new(x[1], y[1])))
        .sum()
}

fn trapezoid(left: RocPoint, right: RocPoint) -> f64 {
    (right.false_alarm_rate - left.false_alarm_rate) * (left.hit_rate + right.hit_rate) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_false_alarm_rate() {
        let curve = RocCurve::from_points(vec![
            RocPoint::new(0.4, 0.8),
            RocPoint::new(0.2, 0.75),
            RocPoint::new(0.1, 0.5),
        ]);
        assert_eq!(curve.false_alarm_rates(), vec![0.1, 0.2, 0.4]);
        assert_eq!(curve.hit_rates(), vec![0.5, 0.75, 0.8]);
    }

    #[test]
    fn test_tie_break_by_hit_rate() {
        let curve = RocCurve::from_points(vec![
            RocPoint::new(0.0, 1.0),
            RocPoint::new(1.0, 1.0),
            RocPoint::new(0.0, 0.0),
        ]);
        assert_eq!(curve.hit_rates(), vec![0.0, 1.0, 1.0]);
        assert!((curve.auc() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_auc_diagonal() {
        let curve = RocCurve::from_points(vec![RocPoint::new(1.0, 1.0), RocPoint::new(0.0, 0.0)]);
        assert!((curve.auc() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_auc_single_point_is_zero() {
        let curve = RocCurve::from_points(vec![RocPoint::new(0.3, 0.7)]);
        assert_eq!(curve.auc(), 0.0);
    }

    #[test]
    fn test_auc_not_clamped() {
        // Unnormalized coordinates integrate past 1.0
        let auc = trapezoid_auc(&[0.0, 2.0], &[1.0, 1.0]);
        assert!((auc - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_into_columns() {
        let curve = RocCurve::from_points(vec![RocPoint::new(0.5, 0.9), RocPoint::new(0.1, 0.3)]);
        let (xs, ys) = curve.into_columns();
        assert_eq!(xs, vec![0.1, 0.5]);
        assert_eq!(ys, vec![0.3, 0.9]);
    }

    #[test]
    fn test_trapezoid_auc_mismatched_lengths() {
        let auc = trapezoid_auc(&[0.0, 1.0, 2.0], &[1.0, 1.0]);
        assert!((auc - 1.0).abs() < 1e-12);
        assert_eq!(trapezoid_auc(&[], &[]), 0.0);
    }

    #[test]
    fn test_trapezoid_auc_matches_curve_auc() {
        let curve = RocCurve::from_points(vec![
            RocPoint::new(0.0, 0.0),
            RocPoint::new(0.1, 0.4),
            RocPoint::new(0.3, 0.7),
            RocPoint::new(1.0, 1.0),
        ]);
        let auc = trapezoid_auc(&curve.false_alarm_rates(), &curve.hit_rates());
        assert_eq!(auc, curve.auc());
        // 0.1*0.2 + 0.2*0.55 + 0.7*0.85
        assert!((auc - 0.725).abs() < 1e-12);
    }
}
