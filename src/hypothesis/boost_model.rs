//! Provides [`BoostModel`], the read-only model shared by every worker.
//!
//! A model is serialized as JSON of the following form:
//! ```txt
//! {
//!     "kind": "multilabel",
//!     "n_labels": 3,
//!     "n_features": 10,
//!     "hypotheses": [
//!         { "feature_index": 3, "threshold": 0.5, "polarity": 1,
//!           "weight": 1.0, "label": 2 },
//!         ...
//!     ]
//! }
//! ```
//! For a binary model, `kind` is `"binary"`, `n_labels` is `1`
//! and every hypothesis votes for label `0`.
use std::path::Path;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};

use serde::{Serialize, Deserialize};

use crate::error::{ClassifyError, Result};
use crate::sample::Document;
use super::classifier::Classifier;
use super::label_ensemble::LabelEnsemble;
use super::weak_hypothesis::WeakHypothesis;


/// The encoding of a [`BoostModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    /// A single positive/negative decision.
    Binary,
    /// An independent decision per label.
    MultiLabel,
}


/// A pre-trained boosting ensemble.
/// A model never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelRepr", into = "ModelRepr")]
pub enum BoostModel {
    /// One score, assigned label `0` iff it exceeds the threshold.
    Binary {
        /// Size of the feature space.
        n_features: usize,
        /// The ensemble of the positive class.
        ensemble: LabelEnsemble,
    },
    /// One score per label.
    MultiLabel {
        /// Size of the feature space.
        n_features: usize,
        /// `ensembles[l]` scores label `l`.
        ensembles: Vec<LabelEnsemble>,
    },
}


impl BoostModel {
    /// Construct a binary model.
    /// Every hypothesis must vote for label `0`.
    pub fn binary<T>(n_features: usize, hypotheses: T) -> Result<Self>
        where T: IntoIterator<Item = WeakHypothesis>
    {
        let hypotheses = hypotheses.into_iter()
            .map(|h| check_hypothesis(h, 1, n_features))
            .collect::<Result<Vec<_>>>()?;
        let ensemble = LabelEnsemble::from_iter(hypotheses);
        Ok(Self::Binary { n_features, ensemble })
    }


    /// Construct a multi-label model over `n_labels` labels.
    /// Hypotheses are grouped by their label,
    /// keeping their relative order.
    pub fn multilabel<T>(
        n_labels: usize,
        n_features: usize,
        hypotheses: T,
    ) -> Result<Self>
        where T: IntoIterator<Item = WeakHypothesis>
    {
        if n_labels == 0 {
            return Err(ClassifyError::ModelLoad(
                "a multi-label model needs at least one label".into()
            ));
        }
        let mut ensembles = vec![LabelEnsemble::new(); n_labels];
        for h in hypotheses {
            let h = check_hypothesis(h, n_labels, n_features)?;
            ensembles[h.label].push(h);
        }
        Ok(Self::MultiLabel { n_features, ensembles })
    }


    /// Returns the encoding of this model.
    pub fn kind(&self) -> ModelKind {
        match self {
            Self::Binary { .. } => ModelKind::Binary,
            Self::MultiLabel { .. } => ModelKind::MultiLabel,
        }
    }


    /// Returns the size of the feature space.
    pub fn n_features(&self) -> usize {
        match self {
            Self::Binary { n_features, .. }
            | Self::MultiLabel { n_features, .. } => *n_features,
        }
    }


    /// Returns the total number of weak hypotheses.
    pub fn n_hypotheses(&self) -> usize {
        self.ensembles()
            .iter()
            .map(LabelEnsemble::len)
            .sum::<usize>()
    }


    /// Returns the per-label ensembles.
    pub fn ensembles(&self) -> &[LabelEnsemble] {
        match self {
            Self::Binary { ensemble, .. } => std::slice::from_ref(ensemble),
            Self::MultiLabel { ensembles, .. } => &ensembles[..],
        }
    }


    /// Computes the score of the positive class of a binary problem.
    /// For a multi-label model, this is the score of label `0`.
    pub fn binary_confidence(&self, doc: &Document) -> f64 {
        self.ensembles()
            .first()
            .map(|e| e.confidence(doc))
            .unwrap_or_default()
    }


    /// Read a JSON model from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| ClassifyError::ModelLoad(e.to_string()))
    }


    /// Read a JSON model from the file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| {
                ClassifyError::ModelLoad(
                    format!("cannot open {}: {e}", path.display())
                )
            })?;
        Self::from_reader(BufReader::new(file))
    }


    /// Write this model as JSON to `writer`.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| ClassifyError::OutputWrite(e.into()))
    }


    /// Write this model as JSON to the file at `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path).map_err(ClassifyError::OutputWrite)?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush().map_err(ClassifyError::OutputWrite)
    }
}


impl Classifier for BoostModel {
    fn n_labels(&self) -> usize {
        self.ensembles().len()
    }


    fn confidence(&self, doc: &Document, label: usize) -> f64 {
        self.ensembles()
            .get(label)
            .map(|e| e.confidence(doc))
            .unwrap_or_default()
    }
}


fn check_hypothesis(
    h: WeakHypothesis,
    n_labels: usize,
    n_features: usize,
) -> Result<WeakHypothesis>
{
    if h.label >= n_labels {
        return Err(ClassifyError::ModelLoad(format!(
            "hypothesis label {} is outside [0, {n_labels})", h.label
        )));
    }
    if h.feature_index >= n_features {
        return Err(ClassifyError::ModelLoad(format!(
            "hypothesis feature {} is outside [0, {n_features})",
            h.feature_index
        )));
    }
    if !h.weight.is_finite() || !h.threshold.is_finite() {
        return Err(ClassifyError::ModelLoad(format!(
            "hypothesis on feature {} has a non-finite parameter",
            h.feature_index
        )));
    }
    Ok(h)
}


/// The flat on-disk form of a [`BoostModel`].
#[derive(Serialize, Deserialize)]
struct ModelRepr {
    kind: ModelKind,
    n_labels: usize,
    n_features: usize,
    hypotheses: Vec<WeakHypothesis>,
}


impl TryFrom<ModelRepr> for BoostModel {
    type Error = ClassifyError;

    fn try_from(repr: ModelRepr) -> Result<Self> {
        let ModelRepr { kind, n_labels, n_features, hypotheses } = repr;
        match kind {
            ModelKind::Binary => {
                if n_labels != 1 {
                    return Err(ClassifyError::ModelLoad(format!(
                        "a binary model has exactly 1 label, got {n_labels}"
                    )));
                }
                Self::binary(n_features, hypotheses)
            },
            ModelKind::MultiLabel => {
                Self::multilabel(n_labels, n_features, hypotheses)
            },
        }
    }
}


impl From<BoostModel> for ModelRepr {
    fn from(model: BoostModel) -> Self {
        let kind = model.kind();
        let n_labels = model.n_labels();
        let n_features = model.n_features();
        let hypotheses = match model {
            BoostModel::Binary { ensemble, .. } => ensemble.decompose(),
            BoostModel::MultiLabel { ensembles, .. } => {
                ensembles.into_iter()
                    .flat_map(LabelEnsemble::decompose)
                    .collect()
            },
        };
        Self { kind, n_labels, n_features, hypotheses }
    }
}
