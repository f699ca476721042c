//! Binary heap priority queue ordered by a caller-supplied closure
//!
//! This crate provides [`BinaryHeap`], an array-backed binary min-heap whose
//! ordering comes from a comparison closure fixed at construction rather than
//! an `Ord` bound on the element type. That makes it usable with elements
//! that have no natural order, or with orderings that differ per heap
//! instance (schedulers, search frontiers, top-k selection).
//!
//! # Features
//!
//! - **Closure-driven ordering**: `less(a, b)` decides extraction order; the
//!   element type needs no trait implementations
//! - **Min or max**: [`BinaryHeap::new_max`] builds a max-heap by inverting
//!   the predicate, sharing the same sift machinery
//! - **O(log n) push/pop, O(1) peek**: the usual binary-heap bounds
//!
//! # Example
//!
//! ```rust
//! use binary_heap_by::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new(|a: &i32, b: &i32| a < b);
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(*heap.peek(), 1);
//! assert_eq!(heap.pop(), 1);
//! assert_eq!(heap.pop(), 2);
//! assert_eq!(heap.pop(), 3);
//! ```

pub mod binary;

// Re-export the heap type for convenience
pub use binary::BinaryHeap;
