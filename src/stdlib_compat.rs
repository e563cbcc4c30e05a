//! Standard library compatibility layer
//!
//! Conversions between this crate's heaps and `std::collections::BinaryHeap`.
//!
//! `std`'s heap is a max-heap over `Ord`, the same order as [`MaxHeap`], so
//! elements move across without changing which one is on top. A [`MinHeap`]
//! corresponds to a `std` heap of `Reverse<T>`.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Reverse;
//! use std::collections::BinaryHeap as StdBinaryHeap;
//! use rust_max_heap::{MaxHeap, MinHeap};
//!
//! let std_heap: StdBinaryHeap<i32> = vec![5, 3, 7].into();
//! let mut heap = MaxHeap::from(std_heap);
//! assert_eq!(heap.pop(), Ok(7));
//!
//! let min = MinHeap::min_from_vec(vec![5, 3, 7]);
//! let mut std_min: StdBinaryHeap<Reverse<i32>> = min.into();
//! assert_eq!(std_min.pop(), Some(Reverse(3)));
//! ```

use std::cmp::Reverse;
use std::collections::BinaryHeap as StdBinaryHeap;

use crate::binary::{MaxHeap, MinHeap};

impl<T: Ord> From<StdBinaryHeap<T>> for MaxHeap<T> {
    fn from(heap: StdBinaryHeap<T>) -> Self {
        MaxHeap::from_vec(heap.into_vec())
    }
}

impl<T: Ord> From<MaxHeap<T>> for StdBinaryHeap<T> {
    fn from(heap: MaxHeap<T>) -> Self {
        StdBinaryHeap::from(heap.into_vec())
    }
}

impl<T: Ord> From<MinHeap<T>> for StdBinaryHeap<Reverse<T>> {
    fn from(heap: MinHeap<T>) -> Self {
        heap.into_iter().map(Reverse).collect()
    }
}

impl<T: Ord> From<StdBinaryHeap<Reverse<T>>> for MinHeap<T> {
    fn from(heap: StdBinaryHeap<Reverse<T>>) -> Self {
        MinHeap::min_from_vec(heap.into_iter().map(|Reverse(x)| x).collect())
    }
}
