//! Binary Max-Heap Priority Queue for Rust
//!
//! This crate provides a binary heap that always keeps its greatest element at
//! the root, with the ordering chosen when the heap is constructed.
//!
//! # Features
//!
//! - **MaxHeap**: largest element on top, O(log n) push and pop, O(1) peek
//! - **MinHeap**: the same structure with the natural order reversed
//! - **Custom orderings**: any closure `Fn(&T, &T) -> Ordering` or [`Compare`] value
//! - **Linear-time construction**: [`BinaryHeap::from_vec`] heapifies bottom-up in O(n)
//! - **Slice primitives**: sift-up, sift-down, build and heapsort on plain slices in [`sift`]
//! - **`serde`** (optional feature): serialize and deserialize heaps
//!
//! Empty heaps report [`HeapError::EmptyContainer`] from `peek` and `pop`
//! rather than returning a sentinel.
//!
//! # Example
//!
//! ```rust
//! use rust_max_heap::{HeapError, MaxHeap};
//!
//! let mut heap = MaxHeap::new();
//! heap.push(5);
//! heap.push(1);
//! heap.push(8);
//!
//! assert_eq!(heap.peek(), Ok(&8));
//! assert_eq!(heap.pop(), Ok(8));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Err(HeapError::EmptyContainer));
//! ```

pub mod binary;
#[cfg(feature = "serde")]
mod serde_support;
pub mod sift;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use binary::{BinaryHeap, IntoIterSorted, MaxHeap, MinHeap, PeekMut};
pub use compare::{natural, Compare, Natural, Rev};
pub use traits::{Heap, HeapError};
