use alloc::vec::Vec;

use crate::{DeltaReceiver, DeltaTarget};

/// Read-only view of a set that can report the delta of changes made to it.
///
/// Accept this trait where a consumer should observe a set and replay its
/// delta, but must not mutate it or discard the delta.
///
/// # Example
///
/// ```
/// use delta_set::prelude::*;
/// use std::collections::BTreeSet;
///
/// fn sync<S: ReadonlyDeltaSet<u32>>(source: &S, mirror: &mut BTreeSet<u32>) {
///     source.redelta_into(mirror);
/// }
///
/// let mut set = DeltaSet::with_values([1, 2]);
/// let mut mirror = BTreeSet::new();
/// sync(&set, &mut mirror);
/// set.undelta().delete(&1);
/// sync(&set, &mut mirror);
///
/// assert_eq!(mirror.into_iter().collect::<Vec<_>>(), vec![2]);
/// ```
pub trait ReadonlyDeltaSet<T> {
    /// Iterator over the members, in insertion order.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Check if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Number of members.
    fn len(&self) -> usize;

    /// Check if the set has no members.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the members.
    fn iter(&self) -> Self::Iter<'_>;

    /// Replay the accumulated delta into `receiver` without resetting it.
    fn redelta(&self, receiver: DeltaReceiver<'_, T>) -> &Self;

    /// Replay the accumulated delta to a callback taking the added and
    /// removed values.
    fn redelta_with<F>(&self, mut receive: F) -> &Self
    where
        F: FnMut(Vec<T>, Vec<T>),
    {
        self.redelta(DeltaReceiver::Lists(&mut receive))
    }

    /// Replay the accumulated delta into another collection.
    fn redelta_into<R>(&self, target: &mut R) -> &Self
    where
        R: DeltaTarget<T>,
    {
        self.redelta(DeltaReceiver::Target(target))
    }
}
