//! # sdt-roc: Signal Detection Theory metrics and ROC analysis
//!
//! Computes hit rate, false-alarm rate, d' and criterion from yes/no trial
//! counts, aggregates conditions into an experiment, and integrates the
//! resulting ROC curve with the trapezoidal rule.
//!
//! ## Components
//!
//! - [`Measurement`]: trial counts and derived rates, d', criterion
//! - [`experiment::Experiment`]: append-only labeled conditions, ROC points, AUC
//! - [`roc`]: point ordering and trapezoidal integration
//! - [`plot`]: data handoff for an external ROC renderer
//!
//! ## Example Usage
//!
//! ```rust
//! use sdt_roc::experiment::Experiment;
//! use sdt_roc::Measurement;
//!
//! let mut experiment = Experiment::new();
//! experiment.add_condition(Measurement::new(0, 0, 0, 0), None);
//! experiment.add_condition(Measurement::new(100, 0, 0, 0), None);
//! experiment.add_condition(Measurement::new(100, 0, 100, 0), None);
//!
//! // (0,0) -> (0,1) -> (1,1)
//! let auc = experiment.compute_auc()?;
//! assert!((auc - 1.0).abs() < 1e-12);
//! # Ok::<(), sdt_roc::Error>(())
//! ```
//!
//! Logging goes through `tracing`; install a subscriber to see it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod experiment;
pub mod measurement;
pub mod normal;
pub mod plot;
pub mod roc;

pub use error::{Error, Result};
pub use measurement::{Measurement, SdtSummary};
