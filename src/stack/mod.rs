//! Stack Module
//!
//! LIFO stack built on [`BoundedDeque`](crate::deque::BoundedDeque).

pub mod lifo;

pub use lifo::Stack;
