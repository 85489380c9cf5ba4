//! A small demonstration harness: registers a handful of representative
//! benchmarks and hands them to the library's CLI entry point.
//!
//! This plays the role that a consumer crate's own `benches/` binary would
//! play against `criterion_group!`/`criterion_main!` — the engine itself
//! lives entirely in the library; this file only registers callables.

use benchbar::{bench, bench_template_for_each, Registry, Timers};

fn fib(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        fib(n - 1) + fib(n - 2)
    }
}

fn merge_sort(v: &mut Vec<u64>) {
    let len = v.len();
    if len <= 1 {
        return;
    }
    let mid = len / 2;
    let mut left = v[..mid].to_vec();
    let mut right = v[mid..].to_vec();
    merge_sort(&mut left);
    merge_sort(&mut right);

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            v[k] = left[i];
            i += 1;
        } else {
            v[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        v[k] = left[i];
        i += 1;
        k += 1;
    }
    while j < right.len() {
        v[k] = right[j];
        j += 1;
        k += 1;
    }
}

fn unsorted_vec(n: usize, seed: u64) -> Vec<u64> {
    let mut state = seed.wrapping_add(1);
    (0..n)
        .map(|_| {
            // A tiny xorshift generator; this is a demo fixture, not a
            // cryptographic or statistical primitive.
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        })
        .collect()
}

fn main() {
    let mut registry = Registry::new();

    bench!(registry, "Noop", |_t: &mut Timers| {});

    bench_template_for_each!(registry, "Fib", [19, 20, 21], |n: u64| {
        move |_t: &mut Timers| {
            std::hint::black_box(fib(n));
        }
    });

    bench_template_for_each!(registry, "MergeSort", [10usize, 100usize], |n: usize| {
        move |t: &mut Timers| {
            let mut v = unsorted_vec(n, n as u64);
            t.mark_start();
            merge_sort(&mut v);
        }
    });

    bench_template_for_each!(registry, "VectorSort", [10usize], |n: usize| {
        move |t: &mut Timers| {
            let mut v = unsorted_vec(n, n as u64);
            t.mark_start();
            v.sort_unstable();
        }
    });

    std::process::exit(benchbar::cli::main(&mut registry));
}
