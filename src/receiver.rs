//! Receivers of a replayed delta.
//!
//! A delta can be replayed either to a callback taking the two ordered lists
//! of values, or to any collection implementing [`DeltaTarget`]. The two
//! shapes are carried by [`DeltaReceiver`].

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};

use indexmap::IndexSet;

/// Something that can be driven value by value with a replayed delta.
///
/// Any mutable set qualifies. Implementations are provided for
/// [`BTreeSet`], [`IndexSet`], `HashSet` (with the `std` feature) and
/// [`DeltaSet`](crate::DeltaSet).
pub trait DeltaTarget<T> {
    /// Receive a value that has been added.
    fn add(&mut self, value: T);

    /// Receive a value that has been removed.
    fn delete(&mut self, value: &T);
}

/// A receiver of a replayed delta.
///
/// # Example
///
/// ```
/// use delta_set::prelude::*;
///
/// let mut set = DeltaSet::with_values(["a", "b"]);
/// set.delete(&"a");
///
/// let mut seen = (Vec::new(), Vec::new());
/// set.redelta(DeltaReceiver::Lists(&mut |added, removed| {
///     seen = (added, removed);
/// }));
/// assert_eq!(seen, (vec!["b"], vec!["a"]));
/// ```
pub enum DeltaReceiver<'a, T> {
    /// Called once with the added values and the removed values, each in the
    /// order they were recorded.
    Lists(&'a mut dyn FnMut(Vec<T>, Vec<T>)),
    /// Has every removed value deleted, then every added value added.
    Target(&'a mut dyn DeltaTarget<T>),
}

/// Drive `target` with the remove-then-add protocol.
pub(crate) fn replay<'v, T, R>(
    target: &mut R,
    added: impl IntoIterator<Item = &'v T>,
    removed: impl IntoIterator<Item = &'v T>,
) where
    T: Clone + 'v,
    R: DeltaTarget<T> + ?Sized,
{
    for value in removed {
        target.delete(value);
    }
    for value in added {
        target.add(value.clone());
    }
}

impl<T: Ord> DeltaTarget<T> for BTreeSet<T> {
    fn add(&mut self, value: T) {
        self.insert(value);
    }

    fn delete(&mut self, value: &T) {
        self.remove(value);
    }
}

// Removal shifts the remaining values so that insertion order is kept.
impl<T, S> DeltaTarget<T> for IndexSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn add(&mut self, value: T) {
        self.insert(value);
    }

    fn delete(&mut self, value: &T) {
        self.shift_remove(value);
    }
}

#[cfg(feature = "std")]
impl<T, S> DeltaTarget<T> for std::collections::HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn add(&mut self, value: T) {
        self.insert(value);
    }

    fn delete(&mut self, value: &T) {
        self.remove(value);
    }
}
