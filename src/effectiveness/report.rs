//! Renders the classification report.
//!
//! A report has the following layout:
//! ```txt
//! **** Effectiveness
//! <contingency table summary>
//! ********
//! DocID: 1, Labels assigned: [2], Labels scores: [0.0, 0.0, 1.0], Gold labels: [2]
//! ...
//! ```
//! Result lines appear in the order they are given.
use std::fmt;
use std::io::Write;
use std::time::Duration;

use colored::Colorize;

use crate::constants::{
    EFFECTIVENESS_HEADER,
    SECTION_FOOTER,
    FULL_WIDTH,
    STAT_WIDTH,
    PRINT_WIDTH,
};
use crate::error::{ClassifyError, Result};
use crate::scorer::ClassificationResult;
use super::contingency::{ContingencyTable, LabelCounts};
use super::metrics::Effectiveness;


impl fmt::Display for LabelCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = Effectiveness::from(self);
        write!(
            f,
            "TP: {}, FP: {}, FN: {}, TN: {}, \
             Precision: {}, Recall: {}, F1: {}",
            self.true_pos, self.false_pos, self.false_neg, self.true_neg,
            e.precision, e.recall, e.f1,
        )
    }
}


impl fmt::Display for ContingencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let micro = self.micro();
        let e = Effectiveness::from(&micro);
        writeln!(
            f,
            "Documents: {}, Labels: {}",
            self.n_docs(), self.n_labels(),
        )?;
        writeln!(f, "Micro-averaged: {micro}")?;
        writeln!(f, "Accuracy: {}, Error: {}", e.accuracy, e.error)?;
        write!(f, "Macro-averaged F1: {}", Effectiveness::macro_f1(self))?;
        for (l, counts) in self.per_label().iter().enumerate() {
            write!(f, "\nLabel {l}: {counts}")?;
        }
        Ok(())
    }
}


/// Formats `[a, b, ...]`.
fn bracketed<T: fmt::Debug>(items: &[T]) -> String {
    let inner = items.iter()
        .map(|item| format!("{item:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]")
}


/// Returns the report line of a single result, without newline.
pub fn result_line(result: &ClassificationResult) -> String {
    format!(
        "DocID: {}, Labels assigned: {}, Labels scores: {}, Gold labels: {}",
        result.doc_id,
        bracketed(&result.assigned),
        bracketed(&result.scores),
        bracketed(&result.gold),
    )
}


/// Writes the effectiveness section.
pub fn write_effectiveness<W: Write>(
    writer: &mut W,
    table: &ContingencyTable,
) -> Result<()>
{
    writeln!(writer, "{EFFECTIVENESS_HEADER}\n{table}\n{SECTION_FOOTER}")
        .map_err(ClassifyError::OutputWrite)
}


/// Writes one line per result.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &[ClassificationResult],
) -> Result<()>
{
    results.iter()
        .try_for_each(|result| writeln!(writer, "{}", result_line(result)))
        .map_err(ClassifyError::OutputWrite)
}


/// Writes the full batch-mode report and flushes `writer`.
pub fn write_report<W: Write>(
    writer: &mut W,
    table: &ContingencyTable,
    results: &[ClassificationResult],
) -> Result<()>
{
    write_effectiveness(writer, table)?;
    write_results(writer, results)?;
    writer.flush().map_err(ClassifyError::OutputWrite)
}


/// Prints a short summary of a finished job to stdout.
pub fn print_summary(table: &ContingencyTable, elapsed: Duration) {
    let e = Effectiveness::micro(table);
    let header = format!(
        "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
        "", "EFFECTIVENESS".bold(), "",
    );
    println!("\n{header}");
    let rows = [
        ("Documents", table.n_docs().to_string()),
        ("Labels", table.n_labels().to_string()),
        ("Precision (micro)", format!("{:>PRINT_WIDTH$.5}", e.precision)),
        ("Recall (micro)", format!("{:>PRINT_WIDTH$.5}", e.recall)),
        ("F1 (micro)", format!("{:>PRINT_WIDTH$.5}", e.f1)),
        (
            "F1 (macro)",
            format!("{:>PRINT_WIDTH$.5}", Effectiveness::macro_f1(table)),
        ),
        ("Time", format!("{} ms", elapsed.as_millis())),
    ];
    for (key, val) in rows {
        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            key.bold(),
            val.bold().green(),
        );
    }
    println!("{:=^FULL_WIDTH$}\n", "");
}


#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> ClassificationResult {
        ClassificationResult {
            doc_id: 1,
            assigned: vec![2],
            scores: vec![0.0, -0.5, 1.0],
            gold: vec![2],
        }
    }

    #[test]
    fn test_result_line() {
        assert_eq!(
            result_line(&result()),
            "DocID: 1, Labels assigned: [2], \
             Labels scores: [0.0, -0.5, 1.0], Gold labels: [2]"
        );
    }

    #[test]
    fn test_empty_label_lists() {
        let r = ClassificationResult {
            doc_id: 0, assigned: vec![], scores: vec![-1.0], gold: vec![],
        };
        assert_eq!(
            result_line(&r),
            "DocID: 0, Labels assigned: [], \
             Labels scores: [-1.0], Gold labels: []"
        );
    }

    #[test]
    fn test_report_layout() {
        let mut table = ContingencyTable::new(3);
        let r = result();
        table.record_result(&r);

        let mut buf = Vec::new();
        write_report(&mut buf, &table, &[r]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines[0], EFFECTIVENESS_HEADER);
        assert_eq!(lines[1], "Documents: 1, Labels: 3");
        assert!(lines.contains(&SECTION_FOOTER));
        assert!(lines.last().unwrap().starts_with("DocID: 1,"));
        assert!(text.contains("Label 2: TP: 1, FP: 0, FN: 0, TN: 0"));
        assert!(text.contains("Label 0: TP: 0, FP: 0, FN: 0, TN: 1"));
    }
}
