use alloc::vec::Vec;

use crate::receiver::replay;
use crate::DeltaTarget;

/// An owned snapshot of the changes recorded by a [`DeltaSet`](crate::DeltaSet).
///
/// Produced by [`DeltaSet::to_delta`](crate::DeltaSet::to_delta) and
/// [`DeltaSet::take_delta`](crate::DeltaSet::take_delta). A snapshot can be
/// stored or sent elsewhere (with the `serde` feature) and applied later.
///
/// # Example
///
/// ```
/// use delta_set::prelude::*;
/// use std::collections::BTreeSet;
///
/// let mut set = DeltaSet::with_values(["a", "b"]);
/// let first = set.take_delta();
/// set.delete(&"a");
/// let second = set.take_delta();
///
/// let mut replica = BTreeSet::new();
/// first.apply_to(&mut replica);
/// second.apply_to(&mut replica);
/// assert_eq!(replica.into_iter().collect::<Vec<_>>(), vec!["b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Delta<T> {
    added: Vec<T>,
    removed: Vec<T>,
}

impl<T> Delta<T> {
    /// Build a delta from added and removed values.
    #[must_use]
    pub fn new(added: Vec<T>, removed: Vec<T>) -> Self {
        Self { added, removed }
    }

    /// Values added, in the order they were recorded.
    #[must_use]
    pub fn added(&self) -> &[T] {
        &self.added
    }

    /// Values removed, in the order they were recorded.
    #[must_use]
    pub fn removed(&self) -> &[T] {
        &self.removed
    }

    /// Check if the delta carries no change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Split into `(added, removed)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.added, self.removed)
    }

    /// Apply to `target`: delete every removed value, then add every added
    /// value.
    pub fn apply_to<R>(&self, target: &mut R)
    where
        T: Clone,
        R: DeltaTarget<T> + ?Sized,
    {
        replay(target, &self.added, &self.removed);
    }
}

impl<T> Default for Delta<T> {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}
