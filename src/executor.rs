//! Partitioned execution of a classification job.
//!
//! The input records are split into `parallelism_degree` contiguous
//! partitions, each of which is parsed and scored as one task
//! on the global rayon pool.
//! The degree is a partition count, not a thread count:
//! the pool decides how many partitions run at once.
//! Workers share the model by reference and never see each other's
//! partial results; the partial outputs are combined by an
//! associative reduction.
//!
//! Two modes are provided:
//! - [`Executor::classify_with_results`] keeps every result in memory.
//! - [`Executor::classify_streaming`] writes the results batch by batch,
//!   so that memory is bounded by the batch size.
use std::path::Path;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::ClassifierConfig;
use crate::effectiveness::{
    ContingencyTable,
    write_effectiveness,
    write_report,
    write_results,
};
use crate::error::{ClassifyError, Result};
use crate::hypothesis::{BoostModel, Classifier};
use crate::sample::{RawRecord, RecordReader};
use crate::scorer::{ClassificationResult, Scorer};


/// Results of a batch-mode job.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResults {
    table: ContingencyTable,
    results: Vec<ClassificationResult>,
}


impl ClassificationResults {
    /// Returns the number of classified documents.
    pub fn n_docs(&self) -> usize {
        self.results.len()
    }


    /// Returns the contingency table over all documents.
    pub fn table(&self) -> &ContingencyTable {
        &self.table
    }


    /// Returns the per-document results.
    /// No particular order across partitions is guaranteed;
    /// call [`ClassificationResults::sort_by_doc_id`] for a stable one.
    pub fn results(&self) -> &[ClassificationResult] {
        &self.results[..]
    }


    /// Sorts the results by document id.
    pub fn sort_by_doc_id(&mut self) {
        self.results.sort_unstable_by_key(|r| r.doc_id);
    }


    /// Decompose into the table and the results.
    pub fn into_parts(self) -> (ContingencyTable, Vec<ClassificationResult>) {
        (self.table, self.results)
    }


    /// Writes the report (effectiveness first, then one line per result).
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_report(writer, &self.table, &self.results)
    }
}


/// The output of one partition, or of several merged ones.
struct PartitionOutput {
    table: ContingencyTable,
    results: Vec<ClassificationResult>,
}


impl PartitionOutput {
    fn empty(n_labels: usize) -> Self {
        Self { table: ContingencyTable::new(n_labels), results: Vec::new() }
    }


    /// Appends `other`.
    /// The table part is commutative, the result order is not.
    fn merge(mut self, mut other: Self) -> Self {
        self.table.merge(&other.table);
        self.results.append(&mut other.results);
        self
    }
}


/// Runs classification jobs for one model.
///
/// # Example
/// ```no_run
/// use parboost::prelude::*;
///
/// let model = BoostModel::load("model.json").unwrap();
/// let config = ClassifierConfig::default()
///     .parallelism_degree(8)
///     .unwrap();
/// let executor = Executor::new(&model, config).unwrap();
/// let results = executor.classify_file("test.svm", "report.txt").unwrap();
/// println!("{}", results.table());
/// ```
pub struct Executor<'a> {
    scorer: Scorer<'a>,
    config: ClassifierConfig,
}


impl<'a> Executor<'a> {
    /// Construct a new executor that splits its input into
    /// `config.parallelism()` partitions.
    /// No thread is spawned here.
    pub fn new(model: &'a BoostModel, config: ClassifierConfig)
        -> Result<Self>
    {
        let scorer = Scorer::new(model, &config)?;
        Ok(Self { scorer, config })
    }


    /// Returns the configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }


    /// Returns the model.
    pub fn model(&self) -> &'a BoostModel {
        self.scorer.model()
    }


    /// Batch mode.
    /// Scores every record of `reader` and keeps all results in memory.
    pub fn classify_with_results<R: BufRead>(&self, reader: R)
        -> Result<ClassificationResults>
    {
        let records = RecordReader::new(reader).read_to_end()?;
        info!(
            records = records.len(),
            partitions = self.config.parallelism(),
            "classifying in batch mode"
        );

        let PartitionOutput { table, results } = self.run(&records)?;

        info!(docs = table.n_docs(), "batch classification finished");
        Ok(ClassificationResults { table, results })
    }


    /// Streaming mode.
    /// Scores `reader` in batches of `config.batch()` records,
    /// writing and flushing the result lines of a batch
    /// before the next batch is read.
    /// The effectiveness section is appended after the last batch.
    ///
    /// Returns the contingency table over all documents,
    /// which equals the one of the batch mode.
    pub fn classify_streaming<R, W>(&self, reader: R, writer: &mut W)
        -> Result<ContingencyTable>
        where R: BufRead,
              W: Write,
    {
        let batch_size = self.config.batch();
        let mut reader = RecordReader::new(reader);
        let mut table = ContingencyTable::new(self.model().n_labels());
        info!(batch_size, "classifying in streaming mode");

        loop {
            let batch = reader.next_batch(batch_size)?;
            if batch.is_empty() {
                break;
            }
            let output = self.run(&batch)?;

            write_results(writer, &output.results)?;
            writer.flush().map_err(ClassifyError::OutputWrite)?;
            table.merge(&output.table);

            info!(
                lines = reader.lines_read(),
                docs = table.n_docs(),
                "batch written"
            );
        }

        write_effectiveness(writer, &table)?;
        writer.flush().map_err(ClassifyError::OutputWrite)?;

        info!(docs = table.n_docs(), "streaming classification finished");
        Ok(table)
    }


    /// Batch mode from `input` to the report file `output`.
    /// The report is written only after every document is scored,
    /// through a sibling `.partial` file that replaces `output`
    /// once the whole report is on disk.
    pub fn classify_file<P, Q>(&self, input: P, output: Q)
        -> Result<ClassificationResults>
        where P: AsRef<Path>,
              Q: AsRef<Path>,
    {
        let reader = open_input(input)?;
        let results = self.classify_with_results(reader)?;

        write_via_partial(output.as_ref(), |writer| results.write_to(writer))?;
        Ok(results)
    }


    /// Streaming mode from `input` to the report file `output`.
    /// Batches go to a sibling `.partial` file that replaces `output`
    /// only when the whole input has been classified,
    /// so a failed job never leaves a partial report behind.
    pub fn classify_file_streaming<P, Q>(&self, input: P, output: Q)
        -> Result<ContingencyTable>
        where P: AsRef<Path>,
              Q: AsRef<Path>,
    {
        let reader = open_input(input)?;
        write_via_partial(output.as_ref(), |writer| {
            self.classify_streaming(reader, writer)
        })
    }


    /// Splits `records` into partitions, scores them on the global pool
    /// and reduces the partial outputs.
    fn run(&self, records: &[RawRecord]) -> Result<PartitionOutput> {
        let n_labels = self.model().n_labels();
        let chunk = partition_size(records.len(), self.config.parallelism());
        let scorer = self.scorer;

        records.par_chunks(chunk)
            .enumerate()
            .map(|(k, part)| score_partition(&scorer, k, part))
            .try_reduce(
                || PartitionOutput::empty(n_labels),
                |a, b| Ok(a.merge(b)),
            )
    }
}


/// Number of records per partition.
#[inline(always)]
fn partition_size(n_records: usize, degree: usize) -> usize {
    n_records.div_ceil(degree.max(1)).max(1)
}


/// Parses and scores one partition in input order.
fn score_partition(
    scorer: &Scorer<'_>,
    k: usize,
    records: &[RawRecord],
) -> Result<PartitionOutput>
{
    let mut output = PartitionOutput::empty(scorer.model().n_labels());
    output.results.reserve(records.len());

    for record in records {
        if let Some(result) = scorer.process(record)? {
            output.table.record_result(&result);
            output.results.push(result);
        }
    }
    debug!(partition = k, docs = output.results.len(), "partition scored");
    Ok(output)
}


fn open_input<P: AsRef<Path>>(path: P) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(ClassifyError::Input)?;
    Ok(BufReader::new(file))
}


/// Runs `write` against `<output>.partial` and renames it to `output`
/// on success.
/// On any failure the partial file is removed and `output` is untouched.
fn write_via_partial<T, F>(output: &Path, write: F) -> Result<T>
    where F: FnOnce(&mut BufWriter<File>) -> Result<T>
{
    let mut partial = output.as_os_str().to_owned();
    partial.push(".partial");

    let file = File::create(&partial).map_err(ClassifyError::OutputWrite)?;
    let mut writer = BufWriter::new(file);

    let written = write(&mut writer)
        .and_then(|value| {
            writer.flush().map_err(ClassifyError::OutputWrite)?;
            drop(writer);
            fs::rename(&partial, output).map_err(ClassifyError::OutputWrite)?;
            Ok(value)
        });
    if written.is_err() {
        let _ = fs::remove_file(&partial);
    }
    written
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_size() {
        assert_eq!(partition_size(10, 3), 4);
        assert_eq!(partition_size(9, 3), 3);
        assert_eq!(partition_size(2, 8), 1);
        assert_eq!(partition_size(0, 4), 1);
    }
}
