//! Numbers and batches the raw input lines.
use std::io::{BufRead, Lines};

use crate::error::{ClassifyError, Result};


/// An unparsed input line together with its document id
/// (the 0-based line index).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Document id.
    pub id: usize,
    /// The line, without the trailing newline.
    pub line: String,
}


/// Reads LIBSVM lines from any [`BufRead`] and numbers them.
/// Parsing is left to the workers,
/// so this struct only hands out [`RawRecord`]s,
/// either all at once or in bounded batches.
pub struct RecordReader<R> {
    lines: Lines<R>,
    next_id: usize,
}


impl<R: BufRead> RecordReader<R> {
    /// Construct a new reader.
    pub fn new(reader: R) -> Self {
        Self { lines: reader.lines(), next_id: 0 }
    }


    /// Reads at most `size` lines.
    /// An empty vector means the input is exhausted.
    pub fn next_batch(&mut self, size: usize) -> Result<Vec<RawRecord>> {
        let mut batch = Vec::with_capacity(size.min(1 << 16));
        for line in self.lines.by_ref().take(size) {
            let line = line.map_err(ClassifyError::Input)?;
            batch.push(RawRecord { id: self.next_id, line });
            self.next_id += 1;
        }
        Ok(batch)
    }


    /// Reads every remaining line.
    pub fn read_to_end(&mut self) -> Result<Vec<RawRecord>> {
        self.next_batch(usize::MAX)
    }


    /// Number of lines read so far.
    pub fn lines_read(&self) -> usize {
        self.next_id
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_batches_keep_line_ids() {
        let input = "1 1:1\n\n2 2:1\n3 3:1\n";
        let mut reader = RecordReader::new(Cursor::new(input));

        let first = reader.next_batch(2).unwrap();
        let second = reader.next_batch(2).unwrap();
        let third = reader.next_batch(2).unwrap();

        assert_eq!(first.iter().map(|r| r.id).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(second.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(second[1].line, "3 3:1");
        assert!(third.is_empty());
        assert_eq!(reader.lines_read(), 4);
    }
}
