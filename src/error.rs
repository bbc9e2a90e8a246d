//! Error types shared by every stage of the classification job.
//!
//! Any of these errors aborts the job before a report is produced,
//! so that a partial (and possibly misleading) report never reaches
//! the output.
use std::fmt;
use std::io;

use thiserror::Error;


/// Which index space a [`ClassifyError::DimensionMismatch`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// A feature index of a document.
    Feature,
    /// A gold label of a document.
    Label,
}


impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Feature => write!(f, "feature"),
            Dimension::Label   => write!(f, "label"),
        }
    }
}


/// Errors raised while parsing, scoring or reporting.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// A line of the input violates the label/feature grammar.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord {
        /// 0-based line index (the document id).
        line: usize,
        /// Human readable description.
        reason: String,
    },

    /// The serialized model could not be read or is inconsistent.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// A document refers to an index the model was not trained on.
    #[error(
        "document {doc_id} has {kind} index {index} \
         outside the model space [0, {limit})"
    )]
    DimensionMismatch {
        /// Id of the offending document.
        doc_id: usize,
        /// Feature or label.
        kind: Dimension,
        /// The 0-based index found in the document.
        index: usize,
        /// Size of the model's index space.
        limit: usize,
    },

    /// Reading the input stream failed.
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    /// Writing results failed.
    #[error("failed to write results: {0}")]
    OutputWrite(#[source] io::Error),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}


impl ClassifyError {
    /// Shorthand for a [`ClassifyError::MalformedRecord`].
    pub(crate) fn malformed<S: Into<String>>(line: usize, reason: S) -> Self {
        Self::MalformedRecord { line, reason: reason.into() }
    }
}


/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, ClassifyError>;
