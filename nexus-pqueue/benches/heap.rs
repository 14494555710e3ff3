//! Benchmarks comparing nexus-pqueue against std's BinaryHeap.
//!
//! Run with: cargo bench
//!
//! All queues are pre-sized so the push/pop loops measure heap maintenance,
//! not allocation.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use nexus_pqueue::{MinFirst, PriorityQueue, StaticHeap, heap};

const COUNT: usize = 4096;

fn scrambled_keys() -> Vec<u64> {
    // Deterministic scramble
    (0..COUNT as u64).map(|i| (i * 7919 + 13) % COUNT as u64).collect()
}

// ============================================================================
// Fill then drain
// ============================================================================

fn bench_fill_drain(c: &mut Criterion) {
    let keys = scrambled_keys();
    let mut group = c.benchmark_group("fill_drain");
    group.throughput(Throughput::Elements(COUNT as u64));

    group.bench_function("static_heap", |b| {
        let mut slots = heap::slots::<u64, COUNT>();
        let mut heap = StaticHeap::from_slots(&mut slots, MinFirst);
        b.iter(|| {
            for &key in &keys {
                heap.try_push(black_box(key)).unwrap();
            }
            while let Some(key) = heap.pop() {
                black_box(key);
            }
        });
    });

    group.bench_function("priority_queue", |b| {
        let mut pq = PriorityQueue::new(0, COUNT, MinFirst).unwrap();
        b.iter(|| {
            for &key in &keys {
                pq.try_push(black_box(key)).unwrap();
            }
            while let Some(key) = pq.pop() {
                black_box(key);
            }
        });
    });

    group.bench_function("std_binary_heap", |b| {
        let mut heap = BinaryHeap::with_capacity(COUNT);
        b.iter(|| {
            for &key in &keys {
                heap.push(Reverse(black_box(key)));
            }
            while let Some(key) = heap.pop() {
                black_box(key);
            }
        });
    });

    group.finish();
}

// ============================================================================
// Steady state: pop one, push one at a fixed size
// ============================================================================

fn bench_steady_state(c: &mut Criterion) {
    let keys = scrambled_keys();
    let mut group = c.benchmark_group("steady_state");

    group.bench_function("priority_queue", |b| {
        let mut pq = PriorityQueue::new(0, COUNT, MinFirst).unwrap();
        for &key in &keys[..COUNT / 2] {
            pq.try_push(key).unwrap();
        }
        let mut next = 0usize;
        b.iter(|| {
            let top = pq.pop().unwrap();
            pq.try_push(black_box(top + keys[next % COUNT])).unwrap();
            next += 1;
        });
    });

    group.bench_function("std_binary_heap", |b| {
        let mut heap = BinaryHeap::with_capacity(COUNT);
        for &key in &keys[..COUNT / 2] {
            heap.push(Reverse(key));
        }
        let mut next = 0usize;
        b.iter(|| {
            let Reverse(top) = heap.pop().unwrap();
            heap.push(Reverse(black_box(top + keys[next % COUNT])));
            next += 1;
        });
    });

    group.finish();
}

// ============================================================================
// Growth from an empty buffer
// ============================================================================

fn bench_growth(c: &mut Criterion) {
    let keys = scrambled_keys();
    let mut group = c.benchmark_group("growth");
    group.throughput(Throughput::Elements(COUNT as u64));

    for (name, step) in [("step_16", 16usize), ("step_256", 256)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut pq = PriorityQueue::new(step, 0, MinFirst).unwrap();
                for &key in &keys {
                    pq.try_push(key).unwrap();
                }
                black_box(pq.len())
            });
        });
    }

    group.bench_function("double", |b| {
        b.iter(|| {
            let mut pq = nexus_pqueue::PriorityQueueBuilder::new()
                .capacity(0)
                .build(MinFirst)
                .unwrap();
            for &key in &keys {
                pq.try_push(key).unwrap();
            }
            black_box(pq.len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_fill_drain, bench_steady_state, bench_growth);
criterion_main!(benches);
