//! Optional `serde` support, enabled with the `serde` feature.
//!
//! A heap serializes as a sequence of its elements in backing (heap) order.
//! Deserialization re-heapifies in O(n) with `C::default()`, so input in any
//! order yields a valid heap.

use compare::Compare;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::binary::BinaryHeap;

impl<T: Serialize, C: Compare<T>> Serialize for BinaryHeap<T, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T, C> Deserialize<'de> for BinaryHeap<T, C>
where
    T: Deserialize<'de>,
    C: Compare<T> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = Vec::<T>::deserialize(deserializer)?;
        Ok(BinaryHeap::from_vec_with(data, C::default()))
    }
}
