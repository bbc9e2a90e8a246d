//! Per-label contingency counts.
//!
//! Merging two tables is plain integer addition,
//! so partial tables can be combined in any order or tree shape.
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use fixedbitset::FixedBitSet;
use serde::{Serialize, Deserialize};

use crate::scorer::ClassificationResult;


/// Contingency counts of a single label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelCounts {
    /// Assigned and gold.
    pub true_pos: u64,
    /// Assigned but not gold.
    pub false_pos: u64,
    /// Gold but not assigned.
    pub false_neg: u64,
    /// Neither assigned nor gold.
    pub true_neg: u64,
}


impl LabelCounts {
    /// Returns `tp + fp + fn + tn`.
    #[inline]
    pub fn total(&self) -> u64 {
        self.true_pos + self.false_pos + self.false_neg + self.true_neg
    }


    #[inline(always)]
    fn count(&mut self, assigned: bool, gold: bool) {
        match (assigned, gold) {
            (true,  true)  => self.true_pos  += 1,
            (true,  false) => self.false_pos += 1,
            (false, true)  => self.false_neg += 1,
            (false, false) => self.true_neg  += 1,
        }
    }
}


impl Add for LabelCounts {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}


impl AddAssign for LabelCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.true_pos  += rhs.true_pos;
        self.false_pos += rhs.false_pos;
        self.false_neg += rhs.false_neg;
        self.true_neg  += rhs.true_neg;
    }
}


impl Sum for LabelCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, c| acc + c)
    }
}


impl<'a> Sum<&'a LabelCounts> for LabelCounts {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}


/// The contingency table over a label space.
///
/// For every label, `tp + fp + fn + tn` equals [`ContingencyTable::n_docs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContingencyTable {
    per_label: Vec<LabelCounts>,
    n_docs: u64,
}


impl ContingencyTable {
    /// Construct an empty table over `n_labels` labels.
    /// This is the identity of [`ContingencyTable::merge`].
    pub fn new(n_labels: usize) -> Self {
        Self { per_label: vec![LabelCounts::default(); n_labels], n_docs: 0 }
    }


    /// Returns the number of labels.
    #[inline]
    pub fn n_labels(&self) -> usize {
        self.per_label.len()
    }


    /// Returns the number of recorded documents.
    #[inline]
    pub fn n_docs(&self) -> u64 {
        self.n_docs
    }


    /// Returns the counts of `label`.
    ///
    /// # Panics
    /// Panics if `label` is outside the label space `[0, n_labels)`.
    /// Use [`ContingencyTable::per_label`] with `get`
    /// for a non-panicking lookup.
    #[inline]
    pub fn label(&self, label: usize) -> LabelCounts {
        assert!(
            label < self.n_labels(),
            "label {label} is outside the label space [0, {})",
            self.n_labels()
        );
        self.per_label[label]
    }


    /// Returns the counts of every label.
    pub fn per_label(&self) -> &[LabelCounts] {
        &self.per_label[..]
    }


    /// Returns the counts summed over all labels,
    /// the basis of micro-averaged measures.
    pub fn micro(&self) -> LabelCounts {
        self.per_label.iter().sum()
    }


    /// Records the decisions on one document.
    /// Every label of the table receives exactly one count.
    pub fn record(&mut self, assigned: &[usize], gold: &[usize]) {
        let n_labels = self.n_labels();
        let assigned = label_set(assigned, n_labels);
        let gold = label_set(gold, n_labels);

        self.per_label.iter_mut()
            .enumerate()
            .for_each(|(l, counts)| {
                counts.count(assigned.contains(l), gold.contains(l));
            });
        self.n_docs += 1;
    }


    /// Records a classification result.
    pub fn record_result(&mut self, result: &ClassificationResult) {
        self.record(&result.assigned, &result.gold);
    }


    /// Adds the counts of `other` to `self`.
    pub fn merge(&mut self, other: &Self) {
        assert_eq!(
            self.n_labels(), other.n_labels(),
            "cannot merge contingency tables over different label spaces"
        );
        self.per_label.iter_mut()
            .zip(&other.per_label)
            .for_each(|(a, b)| { *a += *b; });
        self.n_docs += other.n_docs;
    }


    /// Returns `true` if every label has been counted once per document.
    pub fn is_conserved(&self) -> bool {
        self.per_label.iter().all(|c| c.total() == self.n_docs)
    }
}


impl Add for ContingencyTable {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self.merge(&rhs);
        self
    }
}


impl AddAssign<&ContingencyTable> for ContingencyTable {
    fn add_assign(&mut self, rhs: &ContingencyTable) {
        self.merge(rhs);
    }
}


#[inline(always)]
fn label_set(labels: &[usize], n_labels: usize) -> FixedBitSet {
    let mut bits = FixedBitSet::with_capacity(n_labels);
    for &l in labels {
        assert!(
            l < n_labels,
            "label {l} is outside the label space [0, {n_labels})"
        );
        bits.insert(l);
    }
    bits
}
