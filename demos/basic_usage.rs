//! Basic usage example for laney
//!
//! Walks through the deque, the priority queue and the stack/queue adapters,
//! including what happens at capacity and on empty containers.
//!
//! Run with `RUST_LOG=trace cargo run --example basic_usage` to see the
//! library's log output.

use laney::{BoundedDeque, Error, HeapOrder, MetricsCollector, PriorityQueue, Queue, Stack};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("laney Usage Example");
    println!("===================");

    // Bounded deque
    println!("\n1. Bounded Deque:");
    let band = BoundedDeque::with_capacity(4);
    for name in ["John", "Paul", "George", "Ringo"] {
        band.append(name);
    }
    println!("   Members: {:?}", band.to_vec());
    println!("   Append Stuart accepted? {}", band.append("Stuart"));
    match band.try_prepend("Pete") {
        Err(Error::CapacityExceeded) => println!("   Prepend Pete: deque is full"),
        other => println!("   Prepend Pete: unexpected {:?}", other),
    }
    println!("   First: {:?}, Last: {:?}", band.first(), band.last());
    println!("   Size {} of {:?}", band.size(), band.capacity());

    // Priority queue
    println!("\n2. Priority Queue (min):");
    let pq = PriorityQueue::new(HeapOrder::Min);
    pq.push("abc", 1);
    pq.push("do re mi", 4);
    pq.push("123", 2);
    pq.push("easy as", 3);
    println!("   Head: {:?}", pq.head());
    while let Some((value, priority)) = pq.pop() {
        println!("   Popped {:?} (priority {})", value, priority);
    }
    println!("   Pop on empty: {:?}", pq.pop());
    println!("   Pop on empty, zero-value style: {:?}", pq.pop_or_default());

    // Adapters
    println!("\n3. Stack and Queue:");
    let stack = Stack::new();
    let queue = Queue::new();
    for i in 1..=3 {
        stack.push(i);
        queue.enqueue(i);
    }
    println!(
        "   Stack pops: {:?}",
        std::iter::from_fn(|| stack.pop()).collect::<Vec<_>>()
    );
    println!(
        "   Queue dequeues: {:?}",
        std::iter::from_fn(|| queue.dequeue()).collect::<Vec<_>>()
    );

    // Bounded deque shared between threads
    println!("\n4. Producers and a consumer sharing a bounded deque:");
    let shared: Arc<BoundedDeque<u32>> = Arc::new(BoundedDeque::with_capacity(8));
    let producers: Vec<_> = (0..3u32)
        .map(|p| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let mut rejected = 0;
                for i in 0..20 {
                    // Inserts fail fast, so retry with a short pause.
                    while !shared.append(p * 100 + i) {
                        rejected += 1;
                        thread::sleep(Duration::from_micros(50));
                    }
                }
                rejected
            })
        })
        .collect();

    let consumer = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || {
            let mut received = 0;
            while received < 60 {
                match shared.shift() {
                    Some(_) => received += 1,
                    None => thread::yield_now(),
                }
            }
            received
        })
    };

    for (p, handle) in producers.into_iter().enumerate() {
        let rejected = handle.join().map_err(|_| "producer panicked")?;
        println!("   Producer {} was turned away {} times", p, rejected);
    }
    let received = consumer.join().map_err(|_| "consumer panicked")?;
    println!("   Consumer received {} items", received);

    let metrics = shared.metrics();
    println!(
        "   Deque metrics: {} ops, {:.1}% rejected, peak size {}",
        metrics.total_operations,
        metrics.failure_rate(),
        metrics.peak_len
    );

    Ok(())
}
