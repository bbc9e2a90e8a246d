//! Precision, recall and F1 derived from contingency counts.
use serde::{Serialize, Deserialize};

use super::contingency::{ContingencyTable, LabelCounts};


/// Effectiveness measures of a set of binary decisions.
/// A measure whose denominator is `0` is defined as `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Effectiveness {
    /// `tp / (tp + fp)`.
    pub precision: f64,
    /// `tp / (tp + fn)`.
    pub recall: f64,
    /// The harmonic mean of precision and recall.
    pub f1: f64,
    /// `(tp + tn) / total`.
    pub accuracy: f64,
    /// `(fp + fn) / total`.
    pub error: f64,
}


impl From<&LabelCounts> for Effectiveness {
    fn from(c: &LabelCounts) -> Self {
        let precision = ratio(c.true_pos, c.true_pos + c.false_pos);
        let recall = ratio(c.true_pos, c.true_pos + c.false_neg);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        let accuracy = ratio(c.true_pos + c.true_neg, c.total());
        let error = ratio(c.false_pos + c.false_neg, c.total());

        Self { precision, recall, f1, accuracy, error }
    }
}


impl Effectiveness {
    /// Micro-averaged measures,
    /// i.e., computed over all label/document decisions.
    pub fn micro(table: &ContingencyTable) -> Self {
        Self::from(&table.micro())
    }


    /// Measures of a single label.
    ///
    /// # Panics
    /// Panics if `label` is outside the label space of `table`.
    pub fn of_label(table: &ContingencyTable, label: usize) -> Self {
        Self::from(&table.label(label))
    }


    /// The macro-averaged F1,
    /// i.e., the mean of the per-label F1 values.
    pub fn macro_f1(table: &ContingencyTable) -> f64 {
        let n_labels = table.n_labels();
        if n_labels == 0 {
            return 0.0;
        }
        table.per_label()
            .iter()
            .map(|c| Self::from(c).f1)
            .sum::<f64>()
            / n_labels as f64
    }
}


#[inline(always)]
fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}
