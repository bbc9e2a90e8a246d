//! Exports the standard structs and traits.
//!
pub use crate::config::{
    ClassifierConfig,
    DimensionPolicy,
};


pub use crate::error::{
    ClassifyError,
    Dimension,
    Result,
};


pub use crate::sample::{
    Document,
    LineParser,
    RawRecord,
    RecordReader,
};


pub use crate::hypothesis::{
    // Classifier trait
    Classifier,

    BoostModel,
    ModelKind,
    LabelEnsemble,
    WeakHypothesis,
    Polarity,
};


pub use crate::scorer::{
    Scorer,
    ClassificationResult,
};


pub use crate::executor::{
    Executor,
    ClassificationResults,
};


pub use crate::effectiveness::{
    ContingencyTable,
    LabelCounts,
    Effectiveness,
};
