mod common;

use std::io::Cursor;

use rand::prelude::*;
use rand::rngs::StdRng;

use parboost::prelude::*;

use common::*;


/// Partial tables, one per chunk of results of a random job.
fn partial_tables(n_chunks: usize) -> (ContingencyTable, Vec<ContingencyTable>) {
    let model = random_model(7);
    let data = random_dataset(8, 400);
    let executor = Executor::new(&model, ClassifierConfig::default())
        .unwrap();
    let results = executor.classify_with_results(Cursor::new(&data))
        .unwrap();

    let chunk = results.n_docs().div_ceil(n_chunks);
    let partials = results.results()
        .chunks(chunk)
        .map(|part| {
            let mut table = ContingencyTable::new(N_LABELS);
            part.iter().for_each(|r| table.record_result(r));
            table
        })
        .collect::<Vec<_>>();
    (results.table().clone(), partials)
}


#[test]
fn merge_is_order_independent() {
    let (expected, mut partials) = partial_tables(13);
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..20 {
        partials.shuffle(&mut rng);
        let merged = partials.iter()
            .fold(ContingencyTable::new(N_LABELS), |mut acc, t| {
                acc.merge(t);
                acc
            });
        assert_eq!(merged, expected);
    }
}


#[test]
fn merge_is_tree_shape_independent() {
    let (expected, partials) = partial_tables(16);

    // Pairwise (balanced) reduction.
    let mut level = partials.clone();
    while level.len() > 1 {
        level = level.chunks(2)
            .map(|pair| {
                pair.iter()
                    .cloned()
                    .reduce(|a, b| a + b)
                    .unwrap()
            })
            .collect();
    }
    assert_eq!(level.pop().unwrap(), expected);

    // Right-leaning reduction.
    let merged = partials.into_iter()
        .rev()
        .reduce(|a, b| b + a)
        .unwrap();
    assert_eq!(merged, expected);
}


#[test]
fn counts_are_conserved_while_aggregating() {
    let model = random_model(3);
    let data = random_dataset(4, 200);
    let executor = Executor::new(&model, ClassifierConfig::default())
        .unwrap();
    let results = executor.classify_with_results(Cursor::new(&data))
        .unwrap();

    let mut table = ContingencyTable::new(N_LABELS);
    for (k, result) in results.results().iter().enumerate() {
        table.record_result(result);
        assert_eq!(table.n_docs(), k as u64 + 1);
        assert!(table.is_conserved());
        for counts in table.per_label() {
            assert_eq!(counts.total(), k as u64 + 1);
        }
    }
    assert_eq!(&table, results.table());
}
