//! Provides the [`Classifier`] trait.
use crate::constants::DECISION_THRESHOLD;
use crate::sample::Document;


/// A trait that defines the behavior of a multi-label classifier.
/// You only need to implement `n_labels` and `confidence`.
///
/// Every method must be a pure function of `self` and the document,
/// so that the same document always gets the same scores
/// regardless of the worker that scores it.
pub trait Classifier {
    /// Returns the size of the label space.
    fn n_labels(&self) -> usize;


    /// Computes the confidence score of `label` for `doc`.
    fn confidence(&self, doc: &Document, label: usize) -> f64;


    /// Predicts whether `label` is assigned to `doc`.
    fn predict(&self, doc: &Document, label: usize) -> bool {
        self.confidence(doc, label) > DECISION_THRESHOLD
    }


    /// Computes the confidence scores of all labels.
    fn confidence_all(&self, doc: &Document) -> Vec<f64> {
        (0..self.n_labels()).map(|label| self.confidence(doc, label))
            .collect::<Vec<_>>()
    }


    /// Returns the labels assigned to `doc`, in ascending order.
    fn predict_all(&self, doc: &Document) -> Vec<usize> {
        (0..self.n_labels()).filter(|&label| self.predict(doc, label))
            .collect::<Vec<_>>()
    }
}
