//! Priority task scheduling example
//!
//! A dispatcher feeds tasks into a shared min-ordered priority queue keyed by
//! deadline; worker threads repeatedly take the most urgent task. Finished
//! task ids are collected on a bounded deque that acts as a completion log.

use laney::{BoundedDeque, HeapOrder, MetricsCollector, PriorityQueue};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Task {
    id: u64,
    workload: usize,
}

impl Task {
    fn execute(&self) -> f64 {
        let mut result = 0.0;
        for i in 0..self.workload {
            result += (i as f64).sin().abs().sqrt();
        }
        result
    }
}

#[derive(Debug, Default)]
struct WorkerStats {
    tasks_executed: usize,
    total_work_units: usize,
    late_picks: usize,
}

fn main() {
    env_logger::init();

    let num_workers = 4;
    let num_tasks = 400u64;

    let schedule: Arc<PriorityQueue<Task>> = Arc::new(PriorityQueue::new(HeapOrder::Min));
    let completed: Arc<BoundedDeque<u64>> = Arc::new(BoundedDeque::with_capacity(64));
    let dispatch_done = Arc::new(AtomicBool::new(false));
    let barrier = Arc::new(Barrier::new(num_workers + 1));

    println!("Priority Task Scheduler");
    println!("=======================");
    println!("Workers: {}, tasks: {}", num_workers, num_tasks);

    let start = Instant::now();

    let workers: Vec<_> = (0..num_workers)
        .map(|worker_id| {
            let schedule = Arc::clone(&schedule);
            let completed = Arc::clone(&completed);
            let dispatch_done = Arc::clone(&dispatch_done);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let mut stats = WorkerStats::default();
                let mut last_deadline = i64::MIN;

                loop {
                    match schedule.pop() {
                        Some((task, deadline)) => {
                            // Deadlines a worker sees can go backwards only when
                            // a more urgent task arrived after its last pick.
                            if deadline < last_deadline {
                                stats.late_picks += 1;
                            }
                            last_deadline = deadline;

                            task.execute();
                            stats.tasks_executed += 1;
                            stats.total_work_units += task.workload;

                            // The completion log keeps only the most recent ids.
                            while !completed.append(task.id) {
                                completed.shift();
                            }
                        }
                        None if dispatch_done.load(Ordering::Acquire) && schedule.is_empty() => {
                            break
                        }
                        None => thread::sleep(Duration::from_micros(100)),
                    }
                }

                println!(
                    "Worker {}: {} tasks, {} work units, {} out-of-order picks",
                    worker_id, stats.tasks_executed, stats.total_work_units, stats.late_picks
                );
                stats
            })
        })
        .collect();

    barrier.wait();
    for id in 0..num_tasks {
        // Later tasks often carry earlier deadlines, so the heap reorders them.
        let deadline = ((id * 7919) % num_tasks) as i64;
        schedule.push(
            Task {
                id,
                workload: 500 + (id as usize % 7) * 250,
            },
            deadline,
        );
        if id % 50 == 0 {
            thread::sleep(Duration::from_millis(1));
        }
    }
    dispatch_done.store(true, Ordering::Release);

    let mut executed = 0;
    for handle in workers {
        if let Ok(stats) = handle.join() {
            executed += stats.tasks_executed;
        }
    }

    let elapsed = start.elapsed();
    println!("\nExecuted {} tasks in {:?}", executed, elapsed);
    println!("Last completions: {:?}", completed.to_vec());

    let metrics = schedule.metrics();
    println!(
        "Schedule metrics: {} ops, avg {:?}, max {:?}, peak depth {}, {:.1}% contended",
        metrics.total_operations,
        metrics.avg_operation_time(),
        metrics.max_operation_time(),
        metrics.peak_len,
        metrics.contention_rate()
    );
}
