#![allow(dead_code)]
use std::env;
use std::path::PathBuf;

use rand::prelude::*;
use rand::rngs::StdRng;

use parboost::prelude::*;


pub const N_LABELS: usize = 5;
pub const N_FEATURES: usize = 30;


pub fn dataset_path(name: &str) -> PathBuf {
    let mut path = env::current_dir().unwrap();
    path.push("tests/dataset");
    path.push(name);
    path
}


/// A random multi-label model over `N_LABELS` labels.
pub fn random_model(seed: u64) -> BoostModel {
    let mut rng = StdRng::seed_from_u64(seed);
    let hypotheses = (0..40).map(|_| {
            let polarity = if rng.gen_bool(0.5) {
                Polarity::Positive
            } else {
                Polarity::Negative
            };
            WeakHypothesis::new(
                rng.gen_range(0..N_FEATURES),
                rng.gen_range(-0.2..0.8),
                polarity,
                rng.gen_range(0.1..1.0),
                rng.gen_range(0..N_LABELS),
            )
        })
        .collect::<Vec<_>>();
    BoostModel::multilabel(N_LABELS, N_FEATURES, hypotheses).unwrap()
}


/// A random 1-based multi-label LIBSVM dataset of `n_docs` lines.
pub fn random_dataset(seed: u64, n_docs: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut lines = Vec::with_capacity(n_docs);
    for _ in 0..n_docs {
        let n_gold = rng.gen_range(1..=2);
        let mut gold = (1..=N_LABELS).collect::<Vec<_>>();
        gold.shuffle(&mut rng);
        let gold = gold[..n_gold].iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let mut features = (1..=N_FEATURES).collect::<Vec<_>>();
        features.shuffle(&mut rng);
        let n_feat = rng.gen_range(1..8);
        let mut features = features[..n_feat].to_vec();
        features.sort_unstable();
        let features = features.into_iter()
            .map(|i| format!("{i}:{:.3}", rng.gen::<f64>()))
            .collect::<Vec<_>>()
            .join(" ");

        lines.push(format!("{gold} {features}"));
    }
    lines.join("\n")
}


/// Parses every `DocID:` line of a report, sorted.
pub fn result_lines(report: &str) -> Vec<String> {
    let mut lines = report.lines()
        .filter(|line| line.starts_with("DocID: "))
        .map(str::to_string)
        .collect::<Vec<_>>();
    lines.sort();
    lines
}
