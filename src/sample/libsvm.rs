//! Parses one LIBSVM-format line into a [`Document`].
//!
//! A line has the following form:
//! ```txt
//! label[,label...] index:value index:value ...
//! ```
//! Labels may also be separated by white spaces,
//! every token without a `:` that precedes the first feature
//! is read as a (list of) label(s).
//! For a binary problem, the first token is a single numeric value
//! and a positive value marks the document as positive.
use std::collections::HashMap;

use crate::error::{ClassifyError, Result};
use super::document::Document;


/// The stateless LIBSVM line parser.
/// Parsing is a pure function of the line and the two flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineParser {
    binary_problem: bool,
    labels_0_based: bool,
}


impl LineParser {
    /// Construct a new parser.
    pub fn new(binary_problem: bool, labels_0_based: bool) -> Self {
        Self { binary_problem, labels_0_based }
    }


    /// Parses the line with id `id`.
    /// Returns `Ok(None)` for a blank line.
    pub fn parse(&self, id: usize, line: &str) -> Result<Option<Document>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let mut words = line.split_whitespace().peekable();

        let mut gold = Vec::new();
        if self.binary_problem {
            let word = words.next()
                .ok_or_else(|| ClassifyError::malformed(id, "missing label"))?;
            if word.contains(':') {
                return Err(ClassifyError::malformed(
                    id, format!("expected a binary label, got `{word}`")
                ));
            }
            if self.binary_label(id, word)? {
                gold.push(0);
            }
        } else {
            while let Some(word) = words.next_if(|w| !w.contains(':')) {
                for token in word.split(',') {
                    gold.push(self.label(id, token)?);
                }
            }
        }

        let features = words.map(|word| self.index_and_feature(id, word))
            .collect::<Result<HashMap<_, _>>>()?;

        Ok(Some(Document::new(id, features, gold)))
    }


    /// Returns `true` for a positive binary label.
    fn binary_label(&self, id: usize, word: &str) -> Result<bool> {
        let y = word.parse::<f64>()
            .map_err(|_| {
                ClassifyError::malformed(
                    id, format!("`{word}` is not a binary label")
                )
            })?;
        if y.is_nan() {
            return Err(ClassifyError::malformed(id, "binary label is NaN"));
        }
        Ok(y > 0.0)
    }


    /// Parses a single label id and makes it 0-based.
    fn label(&self, id: usize, token: &str) -> Result<usize> {
        let token = token.trim();
        let label = token.parse::<usize>()
            .map_err(|_| {
                ClassifyError::malformed(
                    id, format!("`{token}` is not a label id")
                )
            })?;
        self.shift(id, label, "label")
    }


    /// Parses `index:value` to the pair of a 0-based index and a value.
    fn index_and_feature(&self, id: usize, word: &str)
        -> Result<(usize, f64)>
    {
        let (i, x) = word.split_once(':')
            .ok_or_else(|| {
                ClassifyError::malformed(
                    id, format!("`{word}` is not an `index:value` pair")
                )
            })?;
        let i = i.trim().parse::<usize>()
            .map_err(|_| {
                ClassifyError::malformed(
                    id, format!("`{i}` is not a feature index")
                )
            })?;
        let x = x.trim().parse::<f64>()
            .map_err(|_| {
                ClassifyError::malformed(
                    id, format!("`{x}` is not a feature value")
                )
            })?;
        if !x.is_finite() {
            return Err(ClassifyError::malformed(
                id, format!("feature {i} has non-finite value {x}")
            ));
        }

        Ok((self.shift(id, i, "feature index")?, x))
    }


    #[inline(always)]
    fn shift(&self, id: usize, index: usize, what: &str) -> Result<usize> {
        if self.labels_0_based {
            return Ok(index);
        }
        index.checked_sub(1)
            .ok_or_else(|| {
                ClassifyError::malformed(
                    id, format!("{what} 0 is invalid for 1-based input")
                )
            })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multilabel_one_based() {
        let parser = LineParser::new(false, false);
        let doc = parser.parse(4, "3,1 4:1.0 8:0.5").unwrap().unwrap();

        assert_eq!(doc.id(), 4);
        assert_eq!(doc.gold_labels(), &[0, 2]);
        assert_eq!(doc.value_at(3), 1.0);
        assert_eq!(doc.value_at(7), 0.5);
        assert_eq!(doc.features().len(), 2);
    }

    #[test]
    fn test_space_separated_labels() {
        let parser = LineParser::new(false, true);
        let doc = parser.parse(0, "0 2,5 1:2.5").unwrap().unwrap();
        assert_eq!(doc.gold_labels(), &[0, 2, 5]);
        assert_eq!(doc.value_at(1), 2.5);
    }

    #[test]
    fn test_no_labels() {
        let parser = LineParser::new(false, false);
        let doc = parser.parse(0, "1:1.0").unwrap().unwrap();
        assert!(doc.gold_labels().is_empty());
        assert_eq!(doc.value_at(0), 1.0);
    }

    #[test]
    fn test_blank_line() {
        let parser = LineParser::new(false, false);
        assert!(parser.parse(0, "   ").unwrap().is_none());
    }

    #[test]
    fn test_binary_labels() {
        let parser = LineParser::new(true, false);
        let pos = parser.parse(0, "+1 1:1.0").unwrap().unwrap();
        let neg = parser.parse(1, "-1 1:1.0").unwrap().unwrap();
        let zero = parser.parse(2, "0 1:1.0").unwrap().unwrap();

        assert_eq!(pos.gold_labels(), &[0]);
        assert!(neg.gold_labels().is_empty());
        assert!(zero.gold_labels().is_empty());
    }

    #[test]
    fn test_binary_label_is_not_shifted() {
        let one = LineParser::new(true, false).parse(0, "1 2:1.0").unwrap();
        let zero = LineParser::new(true, true).parse(0, "1 1:1.0").unwrap();
        assert_eq!(one, zero);
    }

    #[test]
    fn test_malformed_label() {
        let parser = LineParser::new(false, false);
        let err = parser.parse(9, "a,2 1:1.0").unwrap_err();
        assert!(matches!(err, ClassifyError::MalformedRecord { line: 9, .. }));
    }

    #[test]
    fn test_malformed_pair() {
        let parser = LineParser::new(false, false);
        assert!(parser.parse(0, "1 1:x").is_err());
        assert!(parser.parse(0, "1 x:1.0").is_err());
        assert!(parser.parse(0, "1 1:1.0 nan:").is_err());
        assert!(parser.parse(0, "1 1:inf").is_err());
    }

    #[test]
    fn test_zero_index_one_based() {
        let parser = LineParser::new(false, false);
        assert!(parser.parse(0, "1 0:1.0").is_err());
        assert!(parser.parse(0, "0 1:1.0").is_err());

        let parser = LineParser::new(false, true);
        assert!(parser.parse(0, "0 0:1.0").is_ok());
    }

    #[test]
    fn test_label_after_feature_is_malformed() {
        let parser = LineParser::new(false, false);
        assert!(parser.parse(0, "1 1:1.0 2").is_err());
    }
}
