#![warn(missing_docs)]

//!
//! A crate that applies a pre-trained multi-label boosting ensemble
//! to a sparse LIBSVM dataset and evaluates the predictions
//! against the gold labels.
//!
//! The job has the following stages:
//!
//! - Record parsing
//!     Each input line becomes a [`Document`],
//!     a sparse feature vector with its gold labels.
//!
//! - Scoring
//!     The [`BoostModel`] assigns a confidence score to each label.
//!     A label is assigned if its score is positive.
//!
//! - Partitioned execution
//!     The [`Executor`] splits the input into partitions
//!     scored concurrently against the shared, read-only model.
//!
//! - Aggregation and reporting
//!     Per-partition [`ContingencyTable`]s are merged into one table,
//!     from which precision, recall and F1 are derived.
//!
//! # Example
//! ```no_run
//! use parboost::prelude::*;
//!
//! let model = BoostModel::load("model.json").unwrap();
//! let config = ClassifierConfig::default().labels_0_based(true);
//! let executor = Executor::new(&model, config).unwrap();
//!
//! let results = executor.classify_file("test.svm", "report.txt").unwrap();
//! let micro = Effectiveness::micro(results.table());
//! println!("F1: {}", micro.f1);
//! ```

pub mod constants;
pub mod config;
pub mod error;
pub mod logging;
pub mod sample;
pub mod hypothesis;
pub mod scorer;
pub mod executor;
pub mod effectiveness;
pub mod prelude;


pub use config::{ClassifierConfig, DimensionPolicy};
pub use error::{ClassifyError, Result};

pub use sample::{Document, LineParser};

pub use hypothesis::{
    Classifier,
    BoostModel,
    WeakHypothesis,
    Polarity,
};

pub use scorer::{Scorer, ClassificationResult};
pub use executor::{Executor, ClassificationResults};
pub use effectiveness::{ContingencyTable, Effectiveness};
