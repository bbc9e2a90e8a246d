//! The pre-trained boosting model and the [`Classifier`] trait.
pub mod classifier;
pub mod weak_hypothesis;
pub mod label_ensemble;
pub mod boost_model;


pub use classifier::Classifier;
pub use weak_hypothesis::{Polarity, WeakHypothesis};
pub use label_ensemble::LabelEnsemble;
pub use boost_model::{BoostModel, ModelKind};
