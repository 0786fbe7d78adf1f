//! Plot handoff for ROC rendering
//!
//! The crate does not draw. A [`PlotRequest`] is the complete, immutable
//! description a renderer needs; each request is independent and carries its
//! own display-mode flag, so no drawing state is shared between calls.

use serde::{Deserialize, Serialize};

use crate::Result;

/// x-axis label of a ROC plot
pub const X_LABEL: &str = "False Alarm Rate";
/// y-axis label of a ROC plot
pub const Y_LABEL: &str = "Hit Rate";
/// Title of a ROC plot
pub const TITLE: &str = "ROC Curve";

/// Marker style for plotted points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    /// Filled circle at every point
    Circle,
}

/// Everything a renderer needs to draw one ROC curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotRequest {
    /// x values (false-alarm rates), non-decreasing
    pub x: Vec<f64>,
    /// y values (hit rates), paired with `x`
    pub y: Vec<f64>,
    /// x-axis label
    pub x_label: String,
    /// y-axis label
    pub y_label: String,
    /// Plot title
    pub title: String,
    /// Point marker
    pub marker: Marker,
    /// Block for interactive display after rendering
    pub show: bool,
}

impl PlotRequest {
    /// ROC plot of already-sorted rate sequences.
    #[must_use]
    pub fn roc(false_alarm_rates: Vec<f64>, hit_rates: Vec<f64>, show: bool) -> Self {
        Self {
            x: false_alarm_rates,
            y: hit_rates,
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            title: TITLE.to_string(),
            marker: Marker::Circle,
            show,
        }
    }

    /// Serialize to JSON for an external renderer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roc_request_labels() {
        let request = PlotRequest::roc(vec![0.0, 1.0], vec![0.0, 1.0], false);
        assert_eq!(request.x_label, "False Alarm Rate");
        assert_eq!(request.y_label, "Hit Rate");
        assert_eq!(request.title, "ROC Curve");
        assert!(!request.show);
    }

    #[test]
    fn test_to_json() {
        let request = PlotRequest::roc(vec![0.25], vec![0.5], true);
        let json = request.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["marker"], "circle");
        assert_eq!(value["show"], true);
        assert_eq!(value["x"][0], 0.25);
    }
}
