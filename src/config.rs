//! Job configuration handed to the core by the hosting program.
use std::num::NonZeroUsize;

use serde::{Serialize, Deserialize};

use crate::constants::DEFAULT_BATCH_SIZE;
use crate::error::{ClassifyError, Result};


/// What to do when a document refers to a feature or a label
/// outside the space the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DimensionPolicy {
    /// Fail the job with [`ClassifyError::DimensionMismatch`].
    #[default]
    Strict,
    /// Drop the offending entries, i.e.,
    /// treat the feature as absent and the label as negative.
    Permissive,
}


/// Settings of a classification job.
///
/// # Example
/// ```
/// use parboost::ClassifierConfig;
///
/// let config = ClassifierConfig::default()
///     .binary_problem(false)
///     .labels_0_based(true)
///     .parallelism_degree(4)
///     .unwrap()
///     .batch_size(1_000)
///     .unwrap();
/// assert_eq!(config.parallelism(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub(crate) binary_problem: bool,
    pub(crate) labels_0_based: bool,
    pub(crate) parallelism_degree: Option<NonZeroUsize>,
    pub(crate) batch_size: NonZeroUsize,
    pub(crate) dimension_policy: DimensionPolicy,
}


impl Default for ClassifierConfig {
    fn default() -> Self {
        let batch_size = NonZeroUsize::new(DEFAULT_BATCH_SIZE)
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            binary_problem: false,
            labels_0_based: false,
            parallelism_degree: None,
            batch_size,
            dimension_policy: DimensionPolicy::default(),
        }
    }
}


impl ClassifierConfig {
    /// Set the flag whether the dataset is a binary problem
    /// rather than a multi-label one.
    /// Default is `false`.
    pub fn binary_problem(mut self, flag: bool) -> Self {
        self.binary_problem = flag;
        self
    }


    /// Set the flag whether label ids and feature indices of the input
    /// are already 0-based.
    /// Default is `false` (LIBSVM convention).
    pub fn labels_0_based(mut self, flag: bool) -> Self {
        self.labels_0_based = flag;
        self
    }


    /// Set the number of partitions scored concurrently.
    /// Returns `Err` for `0`.
    pub fn parallelism_degree(mut self, degree: usize) -> Result<Self> {
        let degree = NonZeroUsize::new(degree)
            .ok_or_else(|| {
                ClassifyError::InvalidConfig(
                    "parallelism degree must be positive".into()
                )
            })?;
        self.parallelism_degree = Some(degree);
        Ok(self)
    }


    /// Set the number of documents written per batch in streaming mode.
    /// Returns `Err` for `0`.
    pub fn batch_size(mut self, size: usize) -> Result<Self> {
        self.batch_size = NonZeroUsize::new(size)
            .ok_or_else(|| {
                ClassifyError::InvalidConfig(
                    "batch size must be positive".into()
                )
            })?;
        Ok(self)
    }


    /// Set the policy for out-of-model indices.
    /// Default is [`DimensionPolicy::Strict`].
    pub fn dimension_policy(mut self, policy: DimensionPolicy) -> Self {
        self.dimension_policy = policy;
        self
    }


    /// Returns `true` for a binary problem.
    pub fn is_binary(&self) -> bool {
        self.binary_problem
    }


    /// Returns `true` if the input is 0-based.
    pub fn is_0_based(&self) -> bool {
        self.labels_0_based
    }


    /// Returns the effective parallelism degree.
    /// When unset, this is the number of threads rayon would use,
    /// i.e., the available execution units.
    pub fn parallelism(&self) -> usize {
        self.parallelism_degree
            .map(NonZeroUsize::get)
            .unwrap_or_else(rayon::current_num_threads)
    }


    /// Returns the streaming batch size.
    pub fn batch(&self) -> usize {
        self.batch_size.get()
    }


    /// Returns the dimension policy.
    pub fn policy(&self) -> DimensionPolicy {
        self.dimension_policy
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::default();
        assert!(!config.is_binary());
        assert!(!config.is_0_based());
        assert_eq!(config.batch(), DEFAULT_BATCH_SIZE);
        assert_eq!(config.policy(), DimensionPolicy::Strict);
        assert!(config.parallelism() >= 1);
    }

    #[test]
    fn test_zero_parallelism_rejected() {
        let config = ClassifierConfig::default().parallelism_degree(0);
        assert!(matches!(config, Err(ClassifyError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let config = ClassifierConfig::default().batch_size(0);
        assert!(matches!(config, Err(ClassifyError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_serde() {
        let config = ClassifierConfig::default()
            .binary_problem(true)
            .dimension_policy(DimensionPolicy::Permissive);
        let json = serde_json::to_string(&config).unwrap();
        let back: ClassifierConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
