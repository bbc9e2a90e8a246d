//! Provides the parsed document.
use std::collections::HashMap;

use tracing::debug;

use crate::config::DimensionPolicy;
use crate::error::{ClassifyError, Dimension, Result};


/// A parsed input line: a sparse feature vector and its gold labels.
/// All indices are 0-based.
/// A `Document` is immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    id: usize,
    features: HashMap<usize, f64>,
    gold: Vec<usize>,
}


impl Document {
    /// Construct a new document.
    /// `gold` is sorted and de-duplicated.
    pub fn new(
        id: usize,
        features: HashMap<usize, f64>,
        mut gold: Vec<usize>,
    ) -> Self
    {
        gold.sort_unstable();
        gold.dedup();
        Self { id, features, gold }
    }


    /// Returns the document id.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }


    /// Returns the value at `index`.
    /// Absent features are `0.0`.
    #[inline]
    pub fn value_at(&self, index: usize) -> f64 {
        self.features.get(&index)
            .copied()
            .unwrap_or_default()
    }


    /// Returns the stored (non-zero) features.
    pub fn features(&self) -> &HashMap<usize, f64> {
        &self.features
    }


    /// Returns the gold labels in ascending order.
    pub fn gold_labels(&self) -> &[usize] {
        &self.gold[..]
    }


    /// Checks the document against a model space of
    /// `n_features` features and `n_labels` labels.
    ///
    /// Under [`DimensionPolicy::Strict`] the first out-of-range index
    /// is reported as an error.
    /// Under [`DimensionPolicy::Permissive`] out-of-range entries
    /// are dropped.
    pub fn fit_to(
        mut self,
        n_features: usize,
        n_labels: usize,
        policy: DimensionPolicy,
    ) -> Result<Self>
    {
        let bad_label = self.gold.iter()
            .copied()
            .find(|&l| l >= n_labels);
        let bad_feature = self.features.keys()
            .copied()
            .filter(|&i| i >= n_features)
            .min();

        if bad_label.is_none() && bad_feature.is_none() {
            return Ok(self);
        }

        match policy {
            DimensionPolicy::Strict => {
                let (kind, index, limit) = match bad_label {
                    Some(l) => (Dimension::Label, l, n_labels),
                    None => {
                        let i = bad_feature.unwrap_or_default();
                        (Dimension::Feature, i, n_features)
                    },
                };
                Err(ClassifyError::DimensionMismatch {
                    doc_id: self.id, kind, index, limit,
                })
            },
            DimensionPolicy::Permissive => {
                debug!(
                    doc_id = self.id,
                    "dropping indices outside the model space"
                );
                self.gold.retain(|&l| l < n_labels);
                self.features.retain(|&i, _| i < n_features);
                Ok(self)
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        let features = HashMap::from([(3, 1.0), (7, 0.5)]);
        Document::new(1, features, vec![2, 0, 2])
    }

    #[test]
    fn test_missing_feature_is_zero() {
        let d = doc();
        assert_eq!(d.value_at(3), 1.0);
        assert_eq!(d.value_at(4), 0.0);
    }

    #[test]
    fn test_gold_sorted_dedup() {
        assert_eq!(doc().gold_labels(), &[0, 2]);
    }

    #[test]
    fn test_fit_strict_feature() {
        let err = doc().fit_to(5, 3, DimensionPolicy::Strict).unwrap_err();
        match err {
            ClassifyError::DimensionMismatch { kind, index, limit, .. } => {
                assert_eq!(kind, Dimension::Feature);
                assert_eq!(index, 7);
                assert_eq!(limit, 5);
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_fit_strict_label() {
        let err = doc().fit_to(10, 2, DimensionPolicy::Strict).unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::DimensionMismatch { kind: Dimension::Label, .. }
        ));
    }

    #[test]
    fn test_fit_permissive() {
        let d = doc().fit_to(5, 2, DimensionPolicy::Permissive).unwrap();
        assert_eq!(d.gold_labels(), &[0]);
        assert_eq!(d.value_at(7), 0.0);
        assert_eq!(d.value_at(3), 1.0);
    }
}
