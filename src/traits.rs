//! Common traits for heap data structures
//!
//! This module provides the trait shared by every heap ordering in this crate:
//!
//! - [`Heap`]: push, peek, pop and size queries over a single element type
//!
//! along with [`HeapError`], the error reported when a heap has no root to
//! return. The trait lets callers and tests be written once and run against
//! max-first, min-first and custom-ordered heaps alike.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeapError {
    /// The heap holds no elements, so there is no root to return
    EmptyContainer,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyContainer => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for heap/priority queue data structures
///
/// The element that compares greatest under the heap's ordering sits at the
/// root:
/// - `push` inserts an element
/// - `pop` removes and returns the root
/// - `peek` returns the root without removing it
///
/// Unlike `std::collections::BinaryHeap`, `peek` and `pop` report an empty heap
/// as [`HeapError::EmptyContainer`] instead of `None`.
///
/// # Example
///
/// ```rust
/// use rust_max_heap::{Heap, HeapError, MaxHeap};
///
/// fn drain_all<H: Heap<i32>>(heap: &mut H) -> Vec<i32> {
///     let mut out = Vec::new();
///     while let Ok(x) = heap.pop() {
///         out.push(x);
///     }
///     out
/// }
///
/// let mut heap = MaxHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(drain_all(&mut heap), vec![3, 2, 1]);
/// assert_eq!(heap.pop(), Err(HeapError::EmptyContainer));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the root element without removing it
    ///
    /// # Errors
    /// Returns `HeapError::EmptyContainer` if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<&T, HeapError>;

    /// Removes and returns the root element
    ///
    /// # Errors
    /// Returns `HeapError::EmptyContainer` if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T, HeapError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(HeapError::EmptyContainer.to_string(), "heap is empty");
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(HeapError::EmptyContainer);
        assert_eq!(err.to_string(), "heap is empty");
    }
}
