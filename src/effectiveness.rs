//! Contingency tables, the effectiveness measures derived from them,
//! and the textual report.
pub mod contingency;
pub mod metrics;
pub mod report;


pub use contingency::{ContingencyTable, LabelCounts};
pub use metrics::Effectiveness;
pub use report::{
    result_line,
    write_report,
    write_results,
    write_effectiveness,
    print_summary,
};
