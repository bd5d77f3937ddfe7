use std::time::{Duration, Instant};

use sortscope_core::{
    evaluate_all, measure, measure_by_name, select_best, sort, Algorithm, Config, Evaluator,
    Measurement, SortError,
};

fn sorted_by_all(input: &[i64]) -> Vec<(Algorithm, Vec<i64>)> {
    Algorithm::ALL
        .iter()
        .map(|&algo| (algo, algo.sorted(input)))
        .collect()
}

fn assert_all_sort_to(input: &[i64], expected: &[i64]) {
    for (algo, output) in sorted_by_all(input) {
        assert_eq!(output, expected, "{algo} on {input:?}");
    }
}

#[test]
fn test_empty_sequence() {
    assert_all_sort_to(&[], &[]);

    let results = evaluate_all(&[]);
    assert_eq!(results.input_len(), 0);
    assert_eq!(results.len(), Algorithm::ALL.len());
}

#[test]
fn test_single_element() {
    assert_all_sort_to(&[5], &[5]);
}

#[test]
fn test_three_elements() {
    assert_all_sort_to(&[3, 1, 2], &[1, 2, 3]);
}

#[test]
fn test_reverse_sorted() {
    assert_all_sort_to(&[5, 4, 3, 2, 1], &[1, 2, 3, 4, 5]);
}

#[test]
fn test_duplicates() {
    assert_all_sort_to(&[2, 2, 1, 3, 1], &[1, 1, 2, 2, 3]);
}

#[test]
fn test_negative_values() {
    assert_all_sort_to(&[0, -3, 7, -3, 2, -10], &[-10, -3, -3, 0, 2, 7]);
}

#[test]
fn test_already_sorted() {
    let data: Vec<i64> = (0..500).collect();
    assert_all_sort_to(&data, &data);
}

#[test]
fn test_free_functions() {
    let mut data = vec![3, 1, 4, 1, 5, 9, 2, 6];
    let expected = vec![1, 1, 2, 3, 4, 5, 6, 9];

    for sort_fn in [
        sort::insertionsort,
        sort::shellsort,
        sort::mergesort,
        sort::quicksort,
        sort::heapsort,
    ] {
        let mut d = data.clone();
        sort_fn(&mut d);
        assert_eq!(d, expected);
    }

    sort::quicksort(&mut data);
    assert!(sort::is_non_decreasing(&data));
}

#[test]
fn test_measure_does_not_mutate_input() {
    let data = vec![9, 3, 7, 1, 8, 2];
    for algo in Algorithm::ALL {
        let _ = measure(&data, algo);
        assert_eq!(data, vec![9, 3, 7, 1, 8, 2], "{algo}");
    }

    let _ = evaluate_all(&data);
    assert_eq!(data, vec![9, 3, 7, 1, 8, 2]);
}

#[test]
fn test_measure_by_name() {
    let data = vec![2, 1];
    assert!(measure_by_name(&data, "Heap Sort").is_ok());
    assert_eq!(
        measure_by_name(&data, "Bogo Sort"),
        Err(SortError::UnknownAlgorithm {
            name: "Bogo Sort".to_string()
        })
    );
}

#[test]
fn test_evaluate_all_covers_every_algorithm() {
    let data: Vec<i64> = (0..1000).rev().collect();
    let results = evaluate_all(&data);

    assert_eq!(results.input_len(), 1000);
    for algo in Algorithm::ALL {
        assert!(results.get(algo).is_some(), "{algo} missing");
    }

    let min = results.iter().map(|m| m.time_ns).min();
    assert_eq!(Some(results.best().time_ns), min);
}

#[test]
fn test_evaluator_default_config_measures_every_algorithm() {
    let data: Vec<i64> = (0..200).map(|i| (i * 7919) % 211 - 100).collect();
    let results = Evaluator::new(Config::default()).evaluate(&data).unwrap();
    assert_eq!(results.len(), 5);
}

#[test]
fn test_select_best_unique_minimum() {
    let measurements = vec![
        Measurement { algorithm: Algorithm::Insertion, time_ns: 500 },
        Measurement { algorithm: Algorithm::Shell, time_ns: 300 },
        Measurement { algorithm: Algorithm::Merge, time_ns: 120 },
        Measurement { algorithm: Algorithm::Quick, time_ns: 90 },
        Measurement { algorithm: Algorithm::Heap, time_ns: 200 },
    ];
    let best = select_best(&measurements).unwrap();
    assert_eq!(best.algorithm, Algorithm::Quick);
    assert_eq!(best.time_ns, 90);
}

#[test]
fn test_select_best_tie_breaks_by_name() {
    // Quick and Merge tie; "Merge Sort" < "Quick Sort"
    let measurements = vec![
        Measurement { algorithm: Algorithm::Quick, time_ns: 100 },
        Measurement { algorithm: Algorithm::Shell, time_ns: 400 },
        Measurement { algorithm: Algorithm::Merge, time_ns: 100 },
    ];
    assert_eq!(select_best(&measurements).unwrap().algorithm, Algorithm::Merge);

    // All zero, as on trivial inputs: "Heap Sort" is first by name
    let zeros: Vec<_> = Algorithm::ALL
        .iter()
        .map(|&algorithm| Measurement { algorithm, time_ns: 0 })
        .collect();
    assert_eq!(select_best(&zeros).unwrap().algorithm, Algorithm::Heap);

    let mut reversed = zeros.clone();
    reversed.reverse();
    assert_eq!(select_best(&reversed).unwrap().algorithm, Algorithm::Heap);
}

#[test]
fn test_result_set_json() {
    let results = evaluate_all(&[3, 1, 2]);
    let json = serde_json::to_value(&results).unwrap();

    assert_eq!(json["input_len"], 3);
    assert!(json["measurements"]["quick"]["time_ns"].is_u64());
    assert!(json["best"]["algorithm"].is_string());
}

fn min_time(data: &[i64], algo: Algorithm, runs: usize) -> Duration {
    (0..runs)
        .map(|_| {
            let mut d = data.to_vec();
            let start = Instant::now();
            algo.sort(&mut d);
            start.elapsed()
        })
        .min()
        .unwrap_or_default()
}

#[test]
fn test_quicksort_no_quadratic_blowup() {
    const N: i64 = 10_000;
    let inputs = [
        ("reverse", (0..N).rev().collect::<Vec<i64>>()),
        ("sorted", (0..N).collect()),
        ("few unique", (0..N).map(|i| i % 4).collect()),
    ];

    for (label, data) in inputs {
        let quick = min_time(&data, Algorithm::Quick, 5);
        let merge = min_time(&data, Algorithm::Merge, 5);
        let heap = min_time(&data, Algorithm::Heap, 5);
        let reference = merge.max(heap);

        // Quadratic behaviour at this size is ~100x slower than n log n
        assert!(
            quick <= reference * 10 + Duration::from_millis(2),
            "{label}: quick {quick:?} vs merge {merge:?} / heap {heap:?}"
        );
        assert!(sort::is_non_decreasing(&Algorithm::Quick.sorted(&data)));
    }
}
