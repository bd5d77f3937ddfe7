//! Quick Performance Report
//! Run with: cargo run -p sortscope-core --example bench

use sortscope_core::{evaluate_all, ResultSet};

fn generate_random(size: usize) -> Vec<i64> {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::Hasher;
    (0..size)
        .map(|i| {
            let mut hasher = DefaultHasher::new();
            hasher.write_usize(i);
            (hasher.finish() % 100000) as i64
        })
        .collect()
}

fn report(title: &str, results: &ResultSet) {
    println!("--- {} ({} elements) ---", title, results.input_len());
    for m in results.iter() {
        println!("{:25} {:12.2} µs", m.algorithm.name(), m.time_ns as f64 / 1000.0);
    }
    println!("Winner: {}\n", results.best().algorithm);
}

fn main() {
    println!("\n=== SortScope Performance Report ===\n");

    report("Random Data", &evaluate_all(&generate_random(5000)));

    // Sorted data - insertion sort's best case
    let sorted: Vec<i64> = (0..10000).collect();
    report("Sorted Data", &evaluate_all(&sorted));

    let reversed: Vec<i64> = (0..5000).rev().collect();
    report("Reverse Sorted Data", &evaluate_all(&reversed));
}
