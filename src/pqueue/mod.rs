//! Priority queue implementations
//!
//! ## Available Queues
//!
//! - [`PriorityQueue`]: array-backed binary heap behind a reader/writer lock,
//!   surfacing either the highest or the lowest priority first
//!
//! ## Choosing an Ordering
//!
//! - [`HeapOrder::Max`]: larger priority values come out first
//! - [`HeapOrder::Min`]: smaller priority values come out first (deadlines,
//!   sequence numbers, costs)
//!
//! ## Performance Characteristics
//!
//! | Operation | Cost | Lock |
//! |-----------|------|------|
//! | `push` | O(log n) | write |
//! | `pop` | O(log n) | write |
//! | `head` | O(1) + clone | read |
//! | `size` / `is_empty` | O(1) | read |

pub mod binary_heap;

pub use self::binary_heap::{HeapOrder, PriorityQueue};


#[cfg(test)]
mod proptests;
