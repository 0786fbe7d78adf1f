//! Experiment - labeled conditions aggregated into a ROC curve
//!
//! ## Overview
//!
//! ```text
//! Experiment (1) ──< Condition (N) ── Measurement
//!      │
//!      └── sorted_roc_points() ──> compute_auc()
//! ```
//!
//! Conditions are append-only and kept in insertion order. Every query
//! recomputes rates from the stored measurements, so a query issued right
//! after `add_condition` always sees the new condition.
//!
//! ## Usage
//!
//! ```rust
//! use sdt_roc::experiment::Experiment;
//! use sdt_roc::Measurement;
//!
//! let mut experiment = Experiment::new();
//! experiment.add_condition(Measurement::new(40, 10, 20, 30), Some("lenient"));
//! experiment.add_condition(Measurement::new(60, 20, 10, 40), Some("strict"));
//!
//! let (false_alarm_rates, hit_rates) = experiment.sorted_roc_points()?;
//! assert_eq!(false_alarm_rates.len(), hit_rates.len());
//!
//! let auc = experiment.compute_auc()?;
//! assert!(auc > 0.0);
//! # Ok::<(), sdt_roc::Error>(())
//! ```

mod condition;
mod store;

pub use condition::{Condition, ConditionSummary};
pub use store::{Experiment, ExperimentBuilder, SinglePointPolicy};
