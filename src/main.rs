//! Parboost classifier - applies a boosting model to a LIBSVM dataset.
//!
//! # Usage
//!
//! ```bash
//! # Batch mode: effectiveness first, then one line per document
//! parboost test.svm model.json report.txt
//!
//! # 0-based labels, 8 partitions
//! parboost -z -p 8 test.svm model.json report.txt
//!
//! # Streaming mode for large test sets
//! parboost -s --batch-size 50000 test.svm model.json report.txt
//! ```
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use parboost::prelude::*;
use parboost::constants::DEFAULT_BATCH_SIZE;
use parboost::effectiveness::print_summary;
use parboost::logging::{self, LogConfig};


/// Classify a LIBSVM dataset with a pre-trained boosting model
/// and evaluate the assigned labels against the gold ones.
#[derive(Parser)]
#[command(name = "parboost", version, about)]
struct Cli {
    /// Input dataset in LIBSVM format
    input: PathBuf,

    /// Boosting model (JSON)
    model: PathBuf,

    /// Output report
    output: PathBuf,

    /// The dataset is a binary problem, not a multi-label one
    #[arg(short, long)]
    binary_problem: bool,

    /// Label ids and feature indices are already 0-based
    #[arg(short = 'z', long = "labels0based")]
    labels_0_based: bool,

    /// Number of partitions scored in parallel
    /// (default: number of available cores)
    #[arg(short, long)]
    parallelism_degree: Option<usize>,

    /// Write results in batches to bound memory usage
    #[arg(short, long)]
    single_document_classification: bool,

    /// Documents per batch in streaming mode
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Drop features and labels unknown to the model instead of failing
    #[arg(long)]
    permissive: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}


impl Cli {
    fn config(&self) -> parboost::Result<ClassifierConfig> {
        let policy = if self.permissive {
            DimensionPolicy::Permissive
        } else {
            DimensionPolicy::Strict
        };
        let mut config = ClassifierConfig::default()
            .binary_problem(self.binary_problem)
            .labels_0_based(self.labels_0_based)
            .dimension_policy(policy)
            .batch_size(self.batch_size)?;
        if let Some(degree) = self.parallelism_degree {
            config = config.parallelism_degree(degree)?;
        }
        Ok(config)
    }
}


fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(LogConfig { verbose: cli.verbose });

    let start = Instant::now();

    let config = cli.config().context("invalid options")?;
    let model = BoostModel::load(&cli.model)
        .with_context(|| format!("loading {}", cli.model.display()))?;
    let executor = Executor::new(&model, config)?;

    let table = if cli.single_document_classification {
        executor.classify_file_streaming(&cli.input, &cli.output)
    } else {
        executor.classify_file(&cli.input, &cli.output)
            .map(|results| results.table().clone())
    }
    .with_context(|| format!("classifying {}", cli.input.display()))?;

    let elapsed = start.elapsed();
    print_summary(&table, elapsed);
    println!("Execution time: {} milliseconds.", elapsed.as_millis());
    Ok(())
}
