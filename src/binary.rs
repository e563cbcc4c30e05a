//! Binary Heap implementation
//!
//! A binary heap stored implicitly in a `Vec`, parameterized by the ordering
//! that decides which element sits at the root. The element that compares
//! greatest under the heap's comparator is always on top:
//!
//! - [`MaxHeap<T>`] uses the natural order of `T`, so the largest element is on top
//! - [`MinHeap<T>`] uses the reversed natural order, so the smallest is on top
//! - any closure `Fn(&T, &T) -> Ordering` or [`Compare`] value gives a custom order
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `push`             | O(log n)   |
//! | `pop`              | O(log n)   |
//! | `peek`             | O(1)       |
//! | `from_vec`         | O(n)       |
//! | `append`           | O(n + m)   |
//! | `into_sorted_vec`  | O(n log n) |
//!
//! # Example
//!
//! ```rust
//! use rust_max_heap::MaxHeap;
//!
//! let mut heap = MaxHeap::from_vec(vec![3, 1, 4, 1, 5, 9, 2, 6]);
//! heap.push(7);
//!
//! assert_eq!(heap.peek(), Ok(&9));
//! assert_eq!(heap.pop(), Ok(9));
//! assert_eq!(heap.pop(), Ok(7));
//! assert_eq!(heap.len(), 7);
//! ```
//!
//! A custom ordering is fixed when the heap is constructed:
//!
//! ```rust
//! use rust_max_heap::BinaryHeap;
//!
//! // Shortest string on top.
//! let mut heap = BinaryHeap::with_comparator(|a: &&str, b: &&str| b.len().cmp(&a.len()));
//! heap.push("banana");
//! heap.push("fig");
//! heap.push("apple");
//! assert_eq!(heap.pop(), Ok("fig"));
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Deref, DerefMut};
use std::slice;
use std::vec;

use compare::{natural, Compare, Natural, Rev};

use crate::sift;
use crate::traits::{Heap, HeapError};

/// A binary heap with the greatest element (under `C`) at the root.
///
/// It is a logic error for an element to be modified in such a way that its
/// ordering relative to any other element, as determined by the comparator,
/// changes while it is in the heap. A comparator that is not a total order is
/// likewise a logic error. Neither can cause memory unsafety, but the order in
/// which elements come out of the heap is then unspecified.
#[derive(Clone)]
pub struct BinaryHeap<T, C: Compare<T> = Natural<T>> {
    /// Complete binary tree stored by index
    data: Vec<T>,
    cmp: C,
}

/// A heap with the largest element on top.
pub type MaxHeap<T> = BinaryHeap<T, Natural<T>>;

/// A heap with the smallest element on top.
pub type MinHeap<T> = BinaryHeap<T, Rev<Natural<T>>>;

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty max-heap.
    pub fn new() -> Self {
        Self::with_comparator(natural())
    }

    /// Creates an empty max-heap able to hold `capacity` elements without
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, natural())
    }

    /// Builds a max-heap from an unordered vector in O(n).
    ///
    /// The vector becomes the backing store and is heapified in place.
    pub fn from_vec(vec: Vec<T>) -> Self {
        Self::from_vec_with(vec, natural())
    }
}

impl<T: Ord> BinaryHeap<T, Rev<Natural<T>>> {
    /// Creates an empty min-heap.
    pub fn new_min() -> Self {
        Self::with_comparator(natural().rev())
    }

    /// Builds a min-heap from an unordered vector in O(n).
    pub fn min_from_vec(vec: Vec<T>) -> Self {
        Self::from_vec_with(vec, natural().rev())
    }
}

impl<T, C: Compare<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        Self { data: Vec::new(), cmp }
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` elements.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a heap ordered by `cmp` from an unordered vector in O(n).
    pub fn from_vec_with(mut vec: Vec<T>, cmp: C) -> Self {
        sift::build(&mut vec, &cmp);
        let heap = Self { data: vec, cmp };
        debug_assert!(heap.is_valid());
        heap
    }

    /// Returns the comparator that orders this heap.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Shrinks the backing storage as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Pushes an element onto the heap.
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        let last = self.data.len() - 1;
        sift::sift_up(&mut self.data, last, &self.cmp);
    }

    /// Returns the greatest element without removing it.
    ///
    /// # Errors
    ///
    /// Returns `HeapError::EmptyContainer` if the heap is empty.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::EmptyContainer)
    }

    /// Returns a guard giving mutable access to the greatest element.
    ///
    /// If the element is modified through the guard, the heap is repaired when
    /// the guard is dropped. A guard that is leaked after a mutation leaves
    /// only the root in the heap; the other elements are leaked with it.
    ///
    /// # Errors
    ///
    /// Returns `HeapError::EmptyContainer` if the heap is empty.
    pub fn peek_mut(&mut self) -> Result<PeekMut<'_, T, C>, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyContainer);
        }
        Ok(PeekMut {
            heap: self,
            original_len: None,
        })
    }

    /// Removes and returns the greatest element.
    ///
    /// # Errors
    ///
    /// Returns `HeapError::EmptyContainer` if the heap is empty.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyContainer);
        }
        Ok(self.take_root())
    }

    /// Pushes `item` and then pops the greatest element, in one step.
    ///
    /// Returns `item` itself, leaving the heap untouched, when the heap is empty
    /// or `item` is not less than the current root.
    pub fn push_pop(&mut self, item: T) -> T {
        match self.data.first() {
            Some(root) if self.cmp.compares_lt(&item, root) => {
                sift::replace_root(&mut self.data, item, &self.cmp)
            }
            _ => item,
        }
    }

    /// Moves every element of `other` into this heap, leaving `other` empty.
    pub fn append(&mut self, other: &mut Self) {
        let start = self.data.len();
        self.data.append(&mut other.data);
        self.rebuild_tail(start);
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Removes every element, yielding them in arbitrary order.
    pub fn drain(&mut self) -> vec::Drain<'_, T> {
        self.data.drain(..)
    }

    /// Returns an iterator over the elements in arbitrary order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the backing slice, in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the heap, returning its backing vector in arbitrary order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in ascending order under the
    /// comparator. A max-heap yields smallest first.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut data = self.data;
        log::trace!("sorting {} heap elements in place", data.len());
        sift::sort(&mut data, &self.cmp);
        data
    }

    /// Consumes the heap, returning an iterator that pops elements greatest
    /// first.
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, C> {
        IntoIterSorted { heap: self }
    }

    /// Removes the root. The heap must not be empty.
    fn take_root(&mut self) -> T {
        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            sift::sift_down(&mut self.data, 0, &self.cmp);
        }
        root
    }

    /// Restores the heap property after elements were appended at `start..`.
    ///
    /// Rebuilding costs about `2 * len` comparisons; sifting each new element
    /// up costs about `log2(start)` each.
    fn rebuild_tail(&mut self, start: usize) {
        let len = self.data.len();
        if start == len {
            return;
        }
        let tail = len - start;
        let rebuild = start < tail || 2 * len < tail * log2_floor(start);

        if rebuild {
            log::trace!("rebuilding heap after adding {} to {} elements", tail, start);
            sift::build(&mut self.data, &self.cmp);
        } else {
            log::trace!("sifting up {} new elements into {}", tail, start);
            for index in start..len {
                sift::sift_up(&mut self.data, index, &self.cmp);
            }
        }
        debug_assert!(self.is_valid());
    }

    fn is_valid(&self) -> bool {
        sift::is_heap(&self.data, &self.cmp)
    }
}

fn log2_floor(x: usize) -> usize {
    (usize::BITS - 1 - x.leading_zeros()) as usize
}

impl<T, C: Compare<T>> Heap<T> for BinaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn push(&mut self, item: T) {
        BinaryHeap::push(self, item)
    }

    fn peek(&self) -> Result<&T, HeapError> {
        BinaryHeap::peek(self)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        BinaryHeap::pop(self)
    }
}

impl<T, C: Compare<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::from_vec(vec)
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for BinaryHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let start = self.data.len();
        self.data.extend(iter);
        self.rebuild_tail(start);
    }
}

impl<'a, T: Copy + 'a, C: Compare<T>> Extend<&'a T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, C: Compare<T>> IntoIterator for BinaryHeap<T, C> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    /// Yields the elements in arbitrary order.
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, C: Compare<T>> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Mutable access to the root of a [`BinaryHeap`], from
/// [`BinaryHeap::peek_mut`].
///
/// The heap property is restored when the guard drops, if the root was
/// mutated. While a mutated guard is live the heap's length is cut to one, so
/// leaking the guard (e.g. with `mem::forget`) leaks the other elements
/// instead of leaving an out-of-order root behind.
pub struct PeekMut<'a, T, C: Compare<T> = Natural<T>> {
    heap: &'a mut BinaryHeap<T, C>,
    /// Length of the heap before the first mutable borrow of the root
    original_len: Option<usize>,
}

impl<'a, T, C: Compare<T>> PeekMut<'a, T, C> {
    /// Removes the root from the heap and returns it.
    pub fn pop(mut this: PeekMut<'a, T, C>) -> T {
        this.restore_len();
        this.heap.take_root()
    }

    /// Undo the length cut made by `deref_mut`, returning whether there was one.
    fn restore_len(&mut self) -> bool {
        match self.original_len.take() {
            Some(len) => {
                // SAFETY: `len` is the length the vector had when `deref_mut`
                // shortened it. Elements `1..len` were left initialized and
                // nothing else can reach the vector while the guard borrows it.
                unsafe { self.heap.data.set_len(len) };
                true
            }
            None => false,
        }
    }
}

impl<T, C: Compare<T>> Deref for PeekMut<'_, T, C> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.heap.data[0]
    }
}

impl<T, C: Compare<T>> DerefMut for PeekMut<'_, T, C> {
    fn deref_mut(&mut self) -> &mut T {
        let len = self.heap.data.len();
        if len > 1 && self.original_len.is_none() {
            self.original_len = Some(len);
            // SAFETY: 1 <= len, and shrinking the length only hides the
            // initialized elements `1..len`; `restore_len` brings them back.
            unsafe { self.heap.data.set_len(1) };
        }
        &mut self.heap.data[0]
    }
}

impl<T, C: Compare<T>> Drop for PeekMut<'_, T, C> {
    fn drop(&mut self) {
        if self.restore_len() {
            sift::sift_down(&mut self.heap.data, 0, &self.heap.cmp);
        }
    }
}

impl<T: fmt::Debug, C: Compare<T>> fmt::Debug for PeekMut<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PeekMut").field(&self.heap.data[0]).finish()
    }
}

/// An owning iterator that pops a [`BinaryHeap`] greatest first, from
/// [`BinaryHeap::into_iter_sorted`].
#[derive(Clone, Debug)]
pub struct IntoIterSorted<T, C: Compare<T> = Natural<T>> {
    heap: BinaryHeap<T, C>,
}

impl<T, C: Compare<T>> Iterator for IntoIterSorted<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, C: Compare<T>> ExactSizeIterator for IntoIterSorted<T, C> {}

impl<T, C: Compare<T>> FusedIterator for IntoIterSorted<T, C> {}
