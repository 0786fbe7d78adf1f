//! Experiment store - append-only sequence of conditions
//!
//! This module holds the aggregation layer: conditions go in through
//! `add_condition`, ROC points and AUC come out of the query methods.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{Condition, ConditionSummary};
use crate::measurement::Measurement;
use crate::plot::PlotRequest;
use crate::roc::RocCurve;
use crate::{Error, Result};

/// Minimum number of ROC points for trapezoidal integration.
const MIN_AUC_POINTS: usize = 2;

/// What `compute_auc` does with a single ROC point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SinglePointPolicy {
    /// Fail with [`Error::InsufficientData`]
    #[default]
    Strict,
    /// Report an area of `0.0`
    Zero,
}

/// A collection of labeled conditions.
///
/// ## Ordering
///
/// Conditions are stored in insertion order and never reordered; the ROC
/// queries sort a derived copy of the points.
///
/// ## Concurrency
///
/// Appending needs `&mut self`, queries need `&self`, so concurrent reads are
/// allowed while the borrow checker rules out a concurrent append.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experiment {
    name: Option<String>,
    single_point_policy: SinglePointPolicy,
    conditions: Vec<Condition>,
}

impl Experiment {
    /// Create an empty experiment with the default (strict) AUC policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for an experiment with optional settings.
    #[must_use]
    pub fn builder() -> ExperimentBuilder {
        ExperimentBuilder::default()
    }

    /// Experiment name, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// AUC policy for a single point.
    #[must_use]
    pub const fn single_point_policy(&self) -> SinglePointPolicy {
        self.single_point_policy
    }

    /// Number of conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// True when no condition has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Conditions in insertion order.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Append a measurement with an optional label.
    pub fn add_condition(&mut self, measurement: Measurement, label: Option<&str>) {
        debug!(
            index = self.conditions.len(),
            label,
            hit_rate = measurement.hit_rate(),
            false_alarm_rate = measurement.false_alarm_rate(),
            "adding condition"
        );
        self.conditions
            .push(Condition::new(measurement, label.map(str::to_owned)));
    }

    /// ROC points of all conditions, sorted by false-alarm rate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if no condition has been added.
    pub fn roc_curve(&self) -> Result<RocCurve> {
        if self.conditions.is_empty() {
            return Err(Error::EmptyInput);
        }

        let curve =
            RocCurve::from_points(self.conditions.iter().map(Condition::roc_point).collect());
        trace!(points = ?curve.points(), "sorted ROC points");
        Ok(curve)
    }

    /// Sorted `(false_alarm_rates, hit_rates)`.
    ///
    /// The first vector is non-decreasing; ties are ordered by ascending hit
    /// rate, then by insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if no condition has been added.
    pub fn sorted_roc_points(&self) -> Result<(Vec<f64>, Vec<f64>)> {
        Ok(self.roc_curve()?.into_columns())
    }

    /// Area under the ROC curve by the trapezoidal rule.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if no condition has been added
    /// - [`Error::InsufficientData`] for a single condition under
    ///   [`SinglePointPolicy::Strict`]
    pub fn compute_auc(&self) -> Result<f64> {
        let curve = self.roc_curve()?;

        if curve.len() < MIN_AUC_POINTS && self.single_point_policy == SinglePointPolicy::Strict {
            return Err(Error::InsufficientData {
                required: MIN_AUC_POINTS,
                found: curve.len(),
            });
        }

        let auc = curve.auc();
        debug!(points = curve.len(), auc, "computed AUC");
        Ok(auc)
    }

    /// SDT statistics per condition, in insertion order.
    #[must_use]
    pub fn summaries(&self) -> Vec<ConditionSummary> {
        self.conditions.iter().map(Condition::summary).collect()
    }

    /// Input for a plotting collaborator.
    ///
    /// `show` asks the renderer to block for interactive display.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if no condition has been added.
    pub fn plot_request(&self, show: bool) -> Result<PlotRequest> {
        let (false_alarm_rates, hit_rates) = self.sorted_roc_points()?;
        Ok(PlotRequest::roc(false_alarm_rates, hit_rates, show))
    }
}

/// Builder for `Experiment`.
#[derive(Debug, Default)]
pub struct ExperimentBuilder {
    name: Option<String>,
    single_point_policy: SinglePointPolicy,
}

impl ExperimentBuilder {
    /// Set the experiment name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the single-point AUC policy.
    #[must_use]
    pub const fn single_point_policy(mut self, policy: SinglePointPolicy) -> Self {
        self.single_point_policy = policy;
        self
    }

    /// Build an empty `Experiment`.
    #[must_use]
    pub fn build(self) -> Experiment {
        Experiment {
            name: self.name,
            single_point_policy: self.single_point_policy,
            conditions: Vec::new(),
        }
    }
}
