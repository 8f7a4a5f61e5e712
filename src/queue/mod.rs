//! Queue implementations
//!
//! ## Available Queues
//!
//! - [`Queue`]: FIFO queue built on [`BoundedDeque`](crate::deque::BoundedDeque)
//!
//! For ordering by priority rather than arrival, see
//! [`PriorityQueue`](crate::pqueue::PriorityQueue).
//!
//! ## Examples
//!
//! ```rust
//! use laney::Queue;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let queue = Arc::new(Queue::with_capacity(1000));
//!
//! let producer = {
//!     let queue = Arc::clone(&queue);
//!     thread::spawn(move || {
//!         for i in 0..100 {
//!             assert!(queue.enqueue(i));
//!         }
//!     })
//! };
//! producer.join().unwrap();
//!
//! assert_eq!(queue.dequeue(), Some(0));
//! assert_eq!(queue.size(), 99);
//! ```

pub mod fifo;

pub use fifo::Queue;
