//! Deque (double-ended queue) implementations
//!
//! ## Available Deques
//!
//! - [`BoundedDeque`]: doubly linked deque behind a reader/writer lock, with an
//!   optional maximum length
//!
//! ## Performance Characteristics
//!
//! | Operation | Cost | Lock |
//! |-----------|------|------|
//! | `append` / `prepend` | O(1) | write |
//! | `pop` / `shift` | O(1) | write |
//! | `first` / `last` | O(1) + clone | read |
//! | `size` / `is_empty` / `is_full` | O(1) | read |
//! | `capacity` | O(1) | none, fixed at construction |

mod chain;
pub mod bounded;

pub use self::bounded::{BoundedDeque, Capacity};


#[cfg(test)]
mod proptests;
