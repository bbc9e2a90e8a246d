//! Provides the thresholded single-feature weak hypothesis.
use serde::{Serialize, Deserialize};

use crate::sample::Document;


/// Defines which side of the threshold votes for the label.
/// Serialized as `+1` / `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Polarity {
    /// Values above the threshold vote `+1`.
    Positive,
    /// Values above the threshold vote `-1`.
    Negative,
}


impl Polarity {
    /// Returns `+1.0` or `-1.0`.
    #[inline(always)]
    pub fn sign(&self) -> f64 {
        match self {
            Polarity::Positive =>  1.0,
            Polarity::Negative => -1.0,
        }
    }
}


impl TryFrom<i8> for Polarity {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
             1 => Ok(Polarity::Positive),
            -1 => Ok(Polarity::Negative),
             _ => Err(format!("polarity must be +1 or -1, got {value}")),
        }
    }
}


impl From<Polarity> for i8 {
    fn from(polarity: Polarity) -> Self {
        match polarity {
            Polarity::Positive =>  1,
            Polarity::Negative => -1,
        }
    }
}


/// The struct `WeakHypothesis` defines a decision stump
/// that casts a weighted vote for a single label.
/// Given a document `x`, it votes
/// `weight * polarity * sgn(x[feature_index] - threshold)`,
/// where a value equal to the threshold falls on the negative side
/// and a missing feature is `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeakHypothesis {
    /// The 0-based index of the feature used in prediction.
    pub feature_index: usize,
    /// The intercept of the stump.
    pub threshold: f64,
    /// The side voted as `+1`.
    pub polarity: Polarity,
    /// The weight of this hypothesis in the ensemble.
    pub weight: f64,
    /// The 0-based label this hypothesis votes for.
    pub label: usize,
}


impl WeakHypothesis {
    /// Construct a new weak hypothesis.
    pub fn new(
        feature_index: usize,
        threshold: f64,
        polarity: Polarity,
        weight: f64,
        label: usize,
    ) -> Self
    {
        Self { feature_index, threshold, polarity, weight, label }
    }


    /// Returns the unweighted vote in `{-1, +1}`.
    #[inline(always)]
    pub fn confidence(&self, doc: &Document) -> f64 {
        let side = if doc.value_at(self.feature_index) > self.threshold {
            1.0
        } else {
            -1.0
        };
        self.polarity.sign() * side
    }


    /// Returns the weighted vote.
    #[inline(always)]
    pub fn vote(&self, doc: &Document) -> f64 {
        self.weight * self.confidence(doc)
    }
}
