//! Provides the per-label weighted majority vote.
use serde::{Serialize, Deserialize};

use crate::sample::Document;
use super::weak_hypothesis::WeakHypothesis;


/// The weighted majority vote of the weak hypotheses of one label.
/// The confidence is the weighted sum of votes,
/// which is not normalized.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LabelEnsemble {
    /// Weak hypotheses, in the order they were trained.
    pub hypotheses: Vec<WeakHypothesis>,
}


impl LabelEnsemble {
    /// Construct an empty ensemble.
    /// An empty ensemble scores every document `0.0`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Append a weak hypothesis.
    #[inline]
    pub fn push(&mut self, hypothesis: WeakHypothesis) {
        self.hypotheses.push(hypothesis);
    }


    /// Returns the number of weak hypotheses.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if there is no weak hypothesis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Decompose the ensemble into its weak hypotheses.
    #[inline]
    pub fn decompose(self) -> Vec<WeakHypothesis> {
        self.hypotheses
    }


    /// Computes `sum( w[h] * h(x) )`.
    pub fn confidence(&self, doc: &Document) -> f64 {
        self.hypotheses.iter()
            .fold(0.0, |acc, h| acc + h.vote(doc))
    }
}


impl FromIterator<WeakHypothesis> for LabelEnsemble {
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item = WeakHypothesis>
    {
        Self { hypotheses: iter.into_iter().collect() }
    }
}
