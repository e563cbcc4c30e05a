//! Heap operations on slices
//!
//! These functions treat a slice as a complete binary tree stored by index:
//! the children of `i` are `2i + 1` and `2i + 2`, its parent is `(i - 1) / 2`.
//! A slice is a heap under `cmp` when no element compares greater than its
//! parent, so the root (index 0) is a greatest element.
//!
//! [`BinaryHeap`](crate::BinaryHeap) is built on these, but they are public for
//! callers that manage their own storage.
//!
//! # Example
//!
//! ```rust
//! use rust_max_heap::sift;
//! use rust_max_heap::natural;
//!
//! let mut xs = [3, 1, 4, 1, 5, 9, 2, 6];
//! sift::build(&mut xs, &natural());
//! assert!(sift::is_heap(&xs, &natural()));
//! assert_eq!(xs[0], 9);
//!
//! sift::sort(&mut xs, &natural());
//! assert_eq!(xs, [1, 1, 2, 3, 4, 5, 6, 9]);
//! ```

use std::mem;

use compare::Compare;

/// Index of the parent of `index`. `index` must not be the root.
#[inline]
pub fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Index of the left child of `index`; the right child follows it.
#[inline]
pub fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Move the element at `index` towards the root while it compares strictly
/// greater than its parent.
///
/// Everything except `data[index]` must already satisfy the heap property.
pub fn sift_up<T, C: Compare<T>>(data: &mut [T], mut index: usize, cmp: &C) {
    while index > 0 {
        let up = parent(index);
        if cmp.compares_gt(&data[index], &data[up]) {
            data.swap(index, up);
            index = up;
        } else {
            break;
        }
    }
}

/// Move the element at `index` towards the leaves while a child compares
/// strictly greater than it, always swapping with the greater child.
///
/// When both children compare equal the left one is taken. Either choice
/// leaves a valid heap.
pub fn sift_down<T, C: Compare<T>>(data: &mut [T], mut index: usize, cmp: &C) {
    let len = data.len();
    loop {
        let left = left_child(index);
        let right = left + 1;
        let mut largest = index;

        if left < len && cmp.compares_gt(&data[left], &data[largest]) {
            largest = left;
        }
        if right < len && cmp.compares_gt(&data[right], &data[largest]) {
            largest = right;
        }

        if largest == index {
            break;
        }
        data.swap(index, largest);
        index = largest;
    }
}

/// Make `data` a heap in place.
///
/// Sifts down every internal node, from the last one back to the root. This
/// costs O(n) comparisons in total, against O(n log n) for pushing elements
/// one at a time.
pub fn build<T, C: Compare<T>>(data: &mut [T], cmp: &C) {
    let len = data.len();
    if len <= 1 {
        return;
    }
    log::trace!("heapifying {} elements bottom-up", len);
    for index in (0..len / 2).rev() {
        sift_down(data, index, cmp);
    }
}

/// Returns `true` if no element of `data` compares greater than its parent.
pub fn is_heap<T, C: Compare<T>>(data: &[T], cmp: &C) -> bool {
    (1..data.len()).all(|index| !cmp.compares_gt(&data[index], &data[parent(index)]))
}

/// Sort a slice that is already a heap into ascending order under `cmp`.
///
/// Repeatedly swaps the root to the end of the shrinking heap prefix.
pub fn sort<T, C: Compare<T>>(data: &mut [T], cmp: &C) {
    for end in (1..data.len()).rev() {
        data.swap(0, end);
        sift_down(&mut data[..end], 0, cmp);
    }
}

/// Sort an arbitrary slice into ascending order under `cmp`, in place and in
/// O(n log n) time.
pub fn heapsort<T, C: Compare<T>>(data: &mut [T], cmp: &C) {
    build(data, cmp);
    sort(data, cmp);
}

/// Replace the root of a heap with `item` and return the old root.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn replace_root<T, C: Compare<T>>(data: &mut [T], item: T, cmp: &C) -> T {
    assert!(!data.is_empty(), "replace_root on an empty heap");
    let root = mem::replace(&mut data[0], item);
    sift_down(data, 0, cmp);
    root
}
