//! Condition - a measurement paired with an optional label

use serde::{Deserialize, Serialize};

use crate::measurement::{Measurement, SdtSummary};
use crate::roc::RocPoint;

/// One entry of an experiment: a measurement and its optional label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    measurement: Measurement,
    label: Option<String>,
}

impl Condition {
    /// Create a condition.
    #[must_use]
    pub fn new(measurement: Measurement, label: Option<String>) -> Self {
        Self { measurement, label }
    }

    /// The condition's trial counts.
    #[must_use]
    pub const fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    /// The condition's label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The condition's position on the ROC plane.
    #[must_use]
    pub fn roc_point(&self) -> RocPoint {
        RocPoint::new(
            self.measurement.false_alarm_rate(),
            self.measurement.hit_rate(),
        )
    }

    /// Labeled SDT statistics for this condition.
    #[must_use]
    pub fn summary(&self) -> ConditionSummary {
        ConditionSummary {
            label: self.label.clone(),
            measurement: self.measurement,
            metrics: self.measurement.summary(),
        }
    }
}

/// Per-condition report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionSummary {
    /// Condition label, if any
    pub label: Option<String>,
    /// Raw trial counts
    pub measurement: Measurement,
    /// Derived statistics
    pub metrics: SdtSummary,
}
