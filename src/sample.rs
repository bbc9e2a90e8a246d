//! Documents and the LIBSVM-format input they are parsed from.

pub mod document;
pub mod libsvm;
pub mod reader;


pub use document::Document;
pub use libsvm::LineParser;
pub use reader::{RawRecord, RecordReader};
