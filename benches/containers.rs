//! Performance benchmarks for laney containers
//!
//! Compares the deque and priority queue against standard library collections
//! behind a `Mutex`, and against crossbeam's lock-free `SegQueue` for the
//! multi-threaded FIFO case.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::{BinaryHeap, VecDeque};
use std::sync::{Arc, Barrier, Mutex};
use std::thread;

use crossbeam::queue::SegQueue;
use laney::{BoundedDeque, HeapOrder, MetricsCollector, PriorityQueue};

const SIZES: [usize; 3] = [100, 1_000, 10_000];
const NUM_THREADS: usize = 4;
const OPERATIONS_PER_THREAD: usize = 10_000;

fn bench_deque_single_thread(c: &mut Criterion) {
    let mut group = c.benchmark_group("deque_single_thread");

    for &size in SIZES.iter() {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("laney_append_shift", size), &size, |b, &size| {
            b.iter(|| {
                let deque = BoundedDeque::with_capacity(size);
                deque.set_metrics_enabled(false);
                for i in 0..size {
                    black_box(deque.append(black_box(i)));
                }
                for _ in 0..size {
                    black_box(deque.shift());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("laney_prepend_pop", size), &size, |b, &size| {
            b.iter(|| {
                let deque = BoundedDeque::new();
                deque.set_metrics_enabled(false);
                for i in 0..size {
                    black_box(deque.prepend(black_box(i)));
                }
                for _ in 0..size {
                    black_box(deque.pop());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("std_mutex_vecdeque", size), &size, |b, &size| {
            b.iter(|| {
                let deque = Mutex::new(VecDeque::with_capacity(size));
                for i in 0..size {
                    deque.lock().unwrap().push_back(black_box(i));
                }
                for _ in 0..size {
                    black_box(deque.lock().unwrap().pop_front());
                }
            })
        });
    }

    group.finish();
}

fn bench_deque_full_rejection(c: &mut Criterion) {
    let deque = BoundedDeque::with_capacity(16);
    deque.append_batch(0..16);

    c.bench_function("deque_append_when_full", |b| {
        b.iter(|| black_box(deque.append(black_box(99))))
    });
}

fn bench_pqueue_single_thread(c: &mut Criterion) {
    let mut group = c.benchmark_group("pqueue_single_thread");

    for &size in SIZES.iter() {
        group.throughput(Throughput::Elements(size as u64));

        for order in [HeapOrder::Max, HeapOrder::Min] {
            group.bench_with_input(
                BenchmarkId::new(format!("laney_{:?}", order).to_lowercase(), size),
                &size,
                |b, &size| {
                    b.iter(|| {
                        let pq = PriorityQueue::new(order);
                        pq.set_metrics_enabled(false);
                        for i in 0..size {
                            pq.push(i, ((i * 7919) % size) as i64);
                        }
                        while let Some(entry) = pq.pop() {
                            black_box(entry);
                        }
                    })
                },
            );
        }

        group.bench_with_input(BenchmarkId::new("std_mutex_binaryheap", size), &size, |b, &size| {
            b.iter(|| {
                let heap = Mutex::new(BinaryHeap::with_capacity(size));
                for i in 0..size {
                    heap.lock().unwrap().push((((i * 7919) % size) as i64, i));
                }
                while let Some(entry) = heap.lock().unwrap().pop() {
                    black_box(entry);
                }
            })
        });
    }

    group.finish();
}

fn bench_multi_thread_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_thread_append");
    group.throughput(Throughput::Elements((NUM_THREADS * OPERATIONS_PER_THREAD) as u64));

    group.bench_function("laney_deque", |b| {
        b.iter(|| {
            let deque = Arc::new(BoundedDeque::new());
            run_threads(|_| {
                let deque = Arc::clone(&deque);
                move || {
                    for i in 0..OPERATIONS_PER_THREAD {
                        deque.append(i);
                    }
                }
            });
            black_box(deque.size())
        })
    });

    group.bench_function("laney_pqueue", |b| {
        b.iter(|| {
            let pq = Arc::new(PriorityQueue::max());
            run_threads(|t| {
                let pq = Arc::clone(&pq);
                move || {
                    for i in 0..OPERATIONS_PER_THREAD {
                        pq.push(i, (i ^ t) as i64);
                    }
                }
            });
            black_box(pq.size())
        })
    });

    group.bench_function("crossbeam_segqueue", |b| {
        b.iter(|| {
            let queue = Arc::new(SegQueue::new());
            run_threads(|_| {
                let queue = Arc::clone(&queue);
                move || {
                    for i in 0..OPERATIONS_PER_THREAD {
                        queue.push(i);
                    }
                }
            });
            black_box(queue.len())
        })
    });

    group.finish();
}

fn run_threads<F, W>(make_worker: F)
where
    F: Fn(usize) -> W,
    W: FnOnce() + Send + 'static,
{
    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|t| {
            let barrier = Arc::clone(&barrier);
            let work = make_worker(t);
            thread::spawn(move || {
                barrier.wait();
                work();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

criterion_group!(
    benches,
    bench_deque_single_thread,
    bench_deque_full_rejection,
    bench_pqueue_single_thread,
    bench_multi_thread_append
);
criterion_main!(benches);
