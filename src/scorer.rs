//! Applies a [`BoostModel`] to single documents.
use serde::{Serialize, Deserialize};

use crate::config::{ClassifierConfig, DimensionPolicy};
use crate::constants::DECISION_THRESHOLD;
use crate::error::{ClassifyError, Result};
use crate::hypothesis::{BoostModel, Classifier, ModelKind};
use crate::sample::{Document, LineParser, RawRecord};


/// The outcome of scoring one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Id of the scored document.
    pub doc_id: usize,
    /// Assigned labels, in ascending order.
    pub assigned: Vec<usize>,
    /// `scores[l]` is the confidence of label `l`.
    pub scores: Vec<f64>,
    /// Gold labels, in ascending order.
    pub gold: Vec<usize>,
}


/// Parses and scores records against a shared, read-only model.
///
/// A `Scorer` only borrows the model, so any number of workers
/// can hold one at the same time.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    model: &'a BoostModel,
    parser: LineParser,
    binary_problem: bool,
    policy: DimensionPolicy,
}


impl<'a> Scorer<'a> {
    /// Construct a new scorer.
    ///
    /// A binary problem requires a model with exactly one label.
    /// A binary model always reads its records as a binary problem,
    /// whatever `config.is_binary()` says.
    pub fn new(model: &'a BoostModel, config: &ClassifierConfig)
        -> Result<Self>
    {
        let binary_problem = config.is_binary()
            || model.kind() == ModelKind::Binary;
        if binary_problem && model.n_labels() != 1 {
            return Err(ClassifyError::InvalidConfig(format!(
                "a binary problem needs a single-label model, \
                 got {} labels",
                model.n_labels()
            )));
        }
        Ok(Self {
            model,
            parser: LineParser::new(binary_problem, config.is_0_based()),
            binary_problem,
            policy: config.policy(),
        })
    }


    /// Returns the model.
    pub fn model(&self) -> &'a BoostModel {
        self.model
    }


    /// Scores `doc`.
    /// This is a pure function of the document and the model.
    pub fn score(&self, doc: &Document) -> ClassificationResult {
        let (assigned, scores) = if self.binary_problem {
            let score = self.model.binary_confidence(doc);
            let assigned = if score > DECISION_THRESHOLD {
                vec![0]
            } else {
                Vec::new()
            };
            (assigned, vec![score])
        } else {
            let scores = self.model.confidence_all(doc);
            let assigned = scores.iter()
                .enumerate()
                .filter_map(|(l, &s)| (s > DECISION_THRESHOLD).then_some(l))
                .collect::<Vec<_>>();
            (assigned, scores)
        };

        ClassificationResult {
            doc_id: doc.id(),
            assigned,
            scores,
            gold: doc.gold_labels().to_vec(),
        }
    }


    /// Parses `record`, checks it against the model space
    /// and scores it.
    /// Returns `Ok(None)` for a blank line.
    pub fn process(&self, record: &RawRecord)
        -> Result<Option<ClassificationResult>>
    {
        let doc = match self.parser.parse(record.id, &record.line)? {
            Some(doc) => doc,
            None => return Ok(None),
        };
        let doc = doc.fit_to(
            self.model.n_features(),
            self.model.n_labels(),
            self.policy,
        )?;
        Ok(Some(self.score(&doc)))
    }
}
