//! Heap Benchmarks
//!
//! Compares bottom-up construction with repeated push, measures push/pop
//! workloads, and checks the max-heap against `std::collections::BinaryHeap`.
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_perf
//!
//! # Only the construction group
//! cargo bench --bench heap_perf -- 'build/'
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_max_heap::sift;
use rust_max_heap::{natural, BinaryHeap, MaxHeap, MinHeap};
use std::collections::BinaryHeap as StdBinaryHeap;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state >> 11
    }
}

fn random_input(n: usize) -> Vec<u64> {
    let mut rng = Lcg::new(0x5eed);
    (0..n).map(|_| rng.next_u64()).collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for &n in &SIZES {
        let input = random_input(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("from_vec", n), &input, |b, input| {
            b.iter(|| black_box(MaxHeap::from_vec(input.clone())))
        });

        group.bench_with_input(BenchmarkId::new("repeated_push", n), &input, |b, input| {
            b.iter(|| {
                let mut heap = MaxHeap::with_capacity(input.len());
                for &x in input {
                    heap.push(x);
                }
                black_box(heap)
            })
        });

        group.bench_with_input(BenchmarkId::new("std_from_vec", n), &input, |b, input| {
            b.iter(|| black_box(StdBinaryHeap::from(input.clone())))
        });
    }

    group.finish();
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    for &n in &SIZES {
        let input = random_input(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("max_heap", n), &input, |b, input| {
            b.iter(|| {
                let mut heap = MaxHeap::with_capacity(input.len());
                for &x in input {
                    heap.push(x);
                }
                let mut sum = 0u64;
                while let Ok(x) = heap.pop() {
                    sum = sum.wrapping_add(x);
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("min_heap", n), &input, |b, input| {
            b.iter(|| {
                let mut heap = MinHeap::new_min();
                for &x in input {
                    heap.push(x);
                }
                let mut sum = 0u64;
                while let Ok(x) = heap.pop() {
                    sum = sum.wrapping_add(x);
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("closure", n), &input, |b, input| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_comparator(|a: &u64, b: &u64| a.cmp(b));
                for &x in input {
                    heap.push(x);
                }
                let mut sum = 0u64;
                while let Ok(x) = heap.pop() {
                    sum = sum.wrapping_add(x);
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("std", n), &input, |b, input| {
            b.iter(|| {
                let mut heap = StdBinaryHeap::with_capacity(input.len());
                for &x in input {
                    heap.push(x);
                }
                let mut sum = 0u64;
                while let Some(x) = heap.pop() {
                    sum = sum.wrapping_add(x);
                }
                black_box(sum)
            })
        });
    }

    group.finish();
}

fn bench_top_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k");
    let input = random_input(100_000);

    for &k in &[10usize, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("push_pop", k), &k, |b, &k| {
            b.iter(|| {
                let mut heap = MaxHeap::from_vec(input[..k].to_vec());
                for &x in &input[k..] {
                    heap.push_pop(x);
                }
                black_box(heap.into_sorted_vec())
            })
        });
    }

    group.finish();
}

fn bench_heapsort(c: &mut Criterion) {
    let mut group = c.benchmark_group("heapsort");

    for &n in &SIZES {
        let input = random_input(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("sift_heapsort", n), &input, |b, input| {
            b.iter(|| {
                let mut data = input.clone();
                sift::heapsort(&mut data, &natural());
                black_box(data)
            })
        });

        group.bench_with_input(BenchmarkId::new("std_sort_unstable", n), &input, |b, input| {
            b.iter(|| {
                let mut data = input.clone();
                data.sort_unstable();
                black_box(data)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_push_pop,
    bench_top_k,
    bench_heapsort
);
criterion_main!(benches);
