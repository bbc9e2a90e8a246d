//! Constants shared across the crate.

/// Scores strictly above this value assign the label.
pub const DECISION_THRESHOLD: f64 = 0.0;

/// Number of documents per flushed batch in streaming mode.
pub const DEFAULT_BATCH_SIZE: usize = 100_000;

/// First line of the effectiveness section.
pub const EFFECTIVENESS_HEADER: &str = "**** Effectiveness";
/// Line closing the effectiveness section.
pub const SECTION_FOOTER:       &str = "********";

/// Width of numbers in the console summary.
pub const PRINT_WIDTH:      usize = 10;
/// Width of the console summary.
pub const FULL_WIDTH:       usize = 60;
/// Width of a key or value column in the console summary.
pub const STAT_WIDTH:       usize = (FULL_WIDTH - 4) / 2;
