use alloc::vec::Vec;
use core::fmt;
use core::hash::{BuildHasher, Hash};

use indexmap::IndexSet;

use crate::receiver::replay;
use crate::{Delta, DeltaReceiver, DeltaTarget, ReadonlyDeltaSet};

/// An insertion-ordered set that records the delta of changes made to it.
///
/// Besides its members, the set keeps two private buckets: values added and
/// values removed since the delta was last discarded. The buckets can be
/// replayed into any [`DeltaTarget`] (another set, a mirror, a UI model)
/// with [`redelta`](Self::redelta), and discarded with
/// [`undelta`](Self::undelta).
///
/// Adding a value clears its pending removal, and deleting a value clears its
/// pending addition, so a value is never in both buckets at once.
///
/// # Example
///
/// ```
/// use delta_set::prelude::*;
/// use std::collections::HashSet;
///
/// let mut set = DeltaSet::with_values([1, 2, 3]);
/// set.undelta();
///
/// set.delete(&1);
/// set.add(4);
///
/// let mut mirror: HashSet<i32> = [1, 2, 3].into_iter().collect();
/// set.redelta_into(&mut mirror);
/// set.undelta();
///
/// assert_eq!(mirror, [2, 3, 4].into_iter().collect());
/// assert!(!set.has_delta());
/// ```
#[cfg(feature = "std")]
#[derive(Clone)]
pub struct DeltaSet<T, S = std::collections::hash_map::RandomState> {
    members: IndexSet<T, S>,
    added: IndexSet<T, S>,
    removed: IndexSet<T, S>,
}

/// An insertion-ordered set that records the delta of changes made to it.
///
/// Without the `std` feature there is no default hash builder, so one must be
/// supplied through [`DeltaSet::with_hasher`] or [`Default`].
#[cfg(not(feature = "std"))]
#[derive(Clone)]
pub struct DeltaSet<T, S> {
    members: IndexSet<T, S>,
    added: IndexSet<T, S>,
    removed: IndexSet<T, S>,
}

#[cfg(feature = "std")]
impl<T> DeltaSet<T> {
    /// Create a new empty delta set with an empty delta.
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: IndexSet::new(),
            added: IndexSet::new(),
            removed: IndexSet::new(),
        }
    }
}

#[cfg(feature = "std")]
impl<T: Hash + Eq + Clone> DeltaSet<T> {
    /// Create a delta set containing `values`.
    ///
    /// Every value goes through [`add`](Self::add), so the initial contents
    /// are recorded as pending additions.
    pub fn with_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        values.into_iter().collect()
    }
}

impl<T, S: Clone> DeltaSet<T, S> {
    /// Create a new empty delta set using the given hash builder.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            members: IndexSet::with_hasher(hash_builder.clone()),
            added: IndexSet::with_hasher(hash_builder.clone()),
            removed: IndexSet::with_hasher(hash_builder),
        }
    }
}

impl<T, S> DeltaSet<T, S> {
    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over the members in insertion order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
        self.members.iter()
    }

    /// Check whether any change is pending since the last reset.
    #[must_use]
    pub fn has_delta(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }

    /// Discard the accumulated delta without touching the members.
    ///
    /// Use this once a consumer has caught up with the current contents by
    /// other means, or right after replaying the delta.
    pub fn undelta(&mut self) -> &mut Self {
        trace_delta!(
            added = self.added.len(),
            removed = self.removed.len(),
            "delta discarded"
        );
        self.added.clear();
        self.removed.clear();
        self
    }
}

impl<T, S> DeltaSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Check if the set contains `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.members.contains(value)
    }
}

impl<T, S> DeltaSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Create a delta set containing `values`, using the given hash builder.
    ///
    /// The values are recorded as pending additions.
    pub fn with_values_and_hasher<I>(values: I, hash_builder: S) -> Self
    where
        I: IntoIterator<Item = T>,
        S: Clone,
    {
        let mut set = Self::with_hasher(hash_builder);
        set.extend(values);
        set
    }

    /// Append `value` to the set unless it is a member already.
    ///
    /// Records the addition and forgets a pending removal of the same value.
    /// Adding an existing member changes nothing.
    pub fn add(&mut self, value: T) -> &mut Self {
        if !self.members.contains(&value) {
            self.removed.shift_remove(&value);
            self.added.insert(value.clone());
            self.members.insert(value);
            trace_delta!(len = self.members.len(), "member added");
        }
        self
    }

    /// Remove `value` from the set.
    ///
    /// Records the removal and forgets a pending addition of the same value.
    /// Returns `true` if the value was a member. The remaining members keep
    /// their relative order.
    pub fn delete(&mut self, value: &T) -> bool {
        match self.members.shift_take(value) {
            Some(value) => {
                self.added.shift_remove(&value);
                self.removed.insert(value);
                trace_delta!(len = self.members.len(), "member deleted");
                true
            }
            None => false,
        }
    }

    /// Remove all members.
    ///
    /// Every current member is recorded as removed and all pending additions
    /// are forgotten.
    pub fn clear(&mut self) {
        trace_delta!(len = self.members.len(), "set cleared");
        self.added.clear();
        for value in self.members.drain(..) {
            self.removed.insert(value);
        }
    }

    /// Apply a batch of changes: first delete every value of `remove`, then
    /// add every value of `add`, each in iteration order.
    ///
    /// A value listed in both ends up a member.
    ///
    /// ```
    /// use delta_set::DeltaSet;
    ///
    /// let mut set = DeltaSet::with_values([1, 2, 3]);
    /// set.delta([2, 4], [2, 1]);
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 2, 4]);
    /// ```
    pub fn delta<A, R>(&mut self, add: A, remove: R) -> &mut Self
    where
        A: IntoIterator<Item = T>,
        R: IntoIterator<Item = T>,
    {
        for value in remove {
            self.delete(&value);
        }
        for value in add {
            self.add(value);
        }
        self
    }

    /// Replay the accumulated delta into `receiver`.
    ///
    /// A [`DeltaReceiver::Lists`] callback gets the added and removed values
    /// in the order they entered their bucket. A [`DeltaReceiver::Target`]
    /// has every removed value deleted, then every added value added.
    ///
    /// The delta is left in place, so it can be replayed again until
    /// [`undelta`](Self::undelta) is called.
    pub fn redelta(&self, receiver: DeltaReceiver<'_, T>) -> &Self {
        trace_delta!(
            added = self.added.len(),
            removed = self.removed.len(),
            "replaying delta"
        );
        match receiver {
            DeltaReceiver::Lists(receive) => receive(
                self.added.iter().cloned().collect(),
                self.removed.iter().cloned().collect(),
            ),
            DeltaReceiver::Target(target) => replay(target, &self.added, &self.removed),
        }
        self
    }

    /// Snapshot the accumulated delta without resetting it.
    #[must_use]
    pub fn to_delta(&self) -> Delta<T> {
        Delta::new(
            self.added.iter().cloned().collect(),
            self.removed.iter().cloned().collect(),
        )
    }

    /// Snapshot the accumulated delta and reset it.
    ///
    /// Equivalent to [`to_delta`](Self::to_delta) followed by
    /// [`undelta`](Self::undelta), without cloning the values.
    pub fn take_delta(&mut self) -> Delta<T> {
        trace_delta!(
            added = self.added.len(),
            removed = self.removed.len(),
            "delta taken"
        );
        let added: Vec<T> = self.added.drain(..).collect();
        let removed: Vec<T> = self.removed.drain(..).collect();
        Delta::new(added, removed)
    }
}

impl<T, S: Default> Default for DeltaSet<T, S> {
    fn default() -> Self {
        Self {
            members: IndexSet::with_hasher(S::default()),
            added: IndexSet::with_hasher(S::default()),
            removed: IndexSet::with_hasher(S::default()),
        }
    }
}

impl<T: fmt::Debug, S> fmt::Debug for DeltaSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeltaSet")
            .field("members", &self.members)
            .field("added", &self.added)
            .field("removed", &self.removed)
            .finish()
    }
}

impl<T, S> Extend<T> for DeltaSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T, S> FromIterator<T> for DeltaSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<'a, T, S> IntoIterator for &'a DeltaSet<T, S> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl<T, S> ReadonlyDeltaSet<T> for DeltaSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    type Iter<'a> = indexmap::set::Iter<'a, T> where Self: 'a, T: 'a;

    fn contains(&self, value: &T) -> bool {
        DeltaSet::contains(self, value)
    }

    fn len(&self) -> usize {
        DeltaSet::len(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        DeltaSet::iter(self)
    }

    fn redelta(&self, receiver: DeltaReceiver<'_, T>) -> &Self {
        DeltaSet::redelta(self, receiver)
    }
}

/// A delta set used as a replay target records the replayed changes in its
/// own delta, so mirrors can be chained.
impl<T, S> DeltaTarget<T> for DeltaSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn add(&mut self, value: T) {
        DeltaSet::add(self, value);
    }

    fn delete(&mut self, value: &T) {
        DeltaSet::delete(self, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta_of<T: Hash + Eq + Clone>(set: &DeltaSet<T>) -> (Vec<T>, Vec<T>) {
        let mut added = Vec::new();
        let mut removed = Vec::new();
        set.redelta(DeltaReceiver::Lists(&mut |add, remove| {
            added.extend(add);
            removed.extend(remove);
        }));
        (added, removed)
    }

    fn members_of<T: Clone>(set: &DeltaSet<T>) -> Vec<T> {
        set.iter().cloned().collect()
    }

    #[test]
    fn new_set_is_empty() {
        let s = DeltaSet::<i32>::new();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(delta_of(&s), (vec![], vec![]));
    }

    #[test]
    fn initial_values_are_recorded_as_added() {
        let s = DeltaSet::with_values([1, 2, 3]);
        assert_eq!(members_of(&s), vec![1, 2, 3]);
        assert_eq!(delta_of(&s), (vec![1, 2, 3], vec![]));
    }

    #[test]
    fn duplicate_initial_values_collapse() {
        let s = DeltaSet::with_values([1, 2, 1, 3, 2]);
        assert_eq!(members_of(&s), vec![1, 2, 3]);
        assert_eq!(delta_of(&s), (vec![1, 2, 3], vec![]));
    }

    #[test]
    fn add_records_addition() {
        let mut s = DeltaSet::with_values([1, 2, 3]);
        s.add(4);
        assert_eq!(members_of(&s), vec![1, 2, 3, 4]);
        assert_eq!(delta_of(&s), (vec![1, 2, 3, 4], vec![]));
    }

    #[test]
    fn add_is_fluent() {
        let mut s = DeltaSet::new();
        s.add("a").add("b").add("a");
        assert_eq!(members_of(&s), vec!["a", "b"]);
    }

    #[test]
    fn add_forgets_removal() {
        let mut s = DeltaSet::with_values([1, 2, 3]);
        s.delete(&1);
        s.delete(&2);
        s.add(2);
        assert_eq!(members_of(&s), vec![3, 2]);
        assert_eq!(delta_of(&s), (vec![3, 2], vec![1]));
    }

    #[test]
    fn add_existing_member_changes_nothing() {
        let mut s = DeltaSet::with_values([1, 2, 3]);
        s.add(2);
        assert_eq!(members_of(&s), vec![1, 2, 3]);
        assert_eq!(delta_of(&s), (vec![1, 2, 3], vec![]));
    }

    #[test]
    fn delete_records_removal_and_forgets_addition() {
        let mut s = DeltaSet::with_values([1, 2, 3]);
        assert!(s.delete(&2));
        assert_eq!(members_of(&s), vec![1, 3]);
        assert_eq!(delta_of(&s), (vec![1, 3], vec![2]));
    }

    #[test]
    fn delete_absent_returns_false() {
        let mut s = DeltaSet::with_values([1, 2, 3]);
        assert!(!s.delete(&4));
        assert_eq!(members_of(&s), vec![1, 2, 3]);
        assert_eq!(delta_of(&s), (vec![1, 2, 3], vec![]));
    }

    #[test]
    fn delete_then_add_of_observed_member() {
        let mut s = DeltaSet::with_values(["x", "y"]);
        s.undelta();
        s.delete(&"x");
        s.add("x");
        assert!(s.contains(&"x"));
        assert_eq!(members_of(&s), vec!["y", "x"]);
        assert_eq!(delta_of(&s), (vec!["x"], vec![]));
    }

    #[test]
    fn clear_records_all_removals() {
        let mut s = DeltaSet::with_values([1, 2, 3]);
        s.clear();
        assert!(s.is_empty());
        assert_eq!(delta_of(&s), (vec![], vec![1, 2, 3]));
    }

    #[test]
    fn clear_keeps_earlier_removals_in_order() {
        let mut s = DeltaSet::with_values([1, 2, 3]);
        s.undelta();
        s.delete(&2);
        s.add(4);
        s.clear();
        assert_eq!(delta_of(&s), (vec![], vec![2, 1, 3, 4]));
    }

    #[test]
    fn clear_empty_set_is_noop() {
        let mut s = DeltaSet::<u8>::new();
        s.clear();
        assert!(!s.has_delta());
    }

    #[test]
    fn delta_adds_elements() {
        let mut s = DeltaSet::with_values([1, 2, 3]);
        s.delta([4, 5, 6], []);
        assert_eq!(members_of(&s), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(delta_of(&s), (vec![1, 2, 3, 4, 5, 6], vec![]));
    }

    #[test]
    fn delta_removes_elements() {
        let mut s = DeltaSet::with_values([1, 2, 3]);
        s.delta([], [3, 1]);
        assert_eq!(members_of(&s), vec![2]);
        assert_eq!(delta_of(&s), (vec![2], vec![3, 1]));
    }

    #[test]
    fn delta_adds_after_removing() {
        let mut s = DeltaSet::with_values([1, 2, 3]);
        s.delta([2, 4], [2, 1]);
        assert_eq!(members_of(&s), vec![3, 2, 4]);
        assert_eq!(delta_of(&s), (vec![3, 2, 4], vec![1]));
    }

    #[test]
    fn delta_from_observed_state() {
        let mut s = DeltaSet::with_values([1, 2, 3]);
        s.undelta();
        s.delta([2, 4], [2, 1]);
        assert_eq!(members_of(&s), vec![3, 2, 4]);
        assert_eq!(delta_of(&s), (vec![2, 4], vec![1]));
    }

    #[test]
    fn undelta_forgets_changes() {
        let mut s = DeltaSet::with_values([1, 2, 3]);
        s.delete(&2);
        s.undelta();
        assert_eq!(members_of(&s), vec![1, 3]);
        assert_eq!(delta_of(&s), (vec![], vec![]));
        assert!(!s.has_delta());
    }

    #[test]
    fn redelta_replays_into_index_set() {
        let mut s = DeltaSet::with_values([1, 2, 3]);
        s.delete(&2);

        let mut target: IndexSet<i32> = [2, 5].into_iter().collect();
        s.redelta(DeltaReceiver::Target(&mut target));
        assert_eq!(target.iter().copied().collect::<Vec<_>>(), vec![5, 1, 3]);
    }

    #[test]
    fn redelta_is_repeatable() {
        let mut s = DeltaSet::with_values(["a", "b"]);
        s.delete(&"a");
        assert_eq!(delta_of(&s), delta_of(&s));
        assert!(s.has_delta());
    }

    #[test]
    fn take_delta_resets() {
        let mut s = DeltaSet::with_values([1, 2]);
        s.delete(&1);
        let delta = s.take_delta();
        assert_eq!(delta.added(), &[2]);
        assert_eq!(delta.removed(), &[1]);
        assert!(!s.has_delta());
        assert_eq!(members_of(&s), vec![2]);
    }

    #[test]
    fn to_delta_keeps_buckets() {
        let s = DeltaSet::with_values([7]);
        assert_eq!(s.to_delta(), s.to_delta());
        assert!(s.has_delta());
    }

    #[test]
    fn delta_set_mirror_records_replay() {
        let mut source = DeltaSet::with_values([1, 2]);
        let mut mirror = DeltaSet::new();
        source.redelta(DeltaReceiver::Target(&mut mirror));
        source.undelta();
        mirror.undelta();

        source.delete(&1);
        source.add(3);
        source.redelta(DeltaReceiver::Target(&mut mirror));

        assert_eq!(members_of(&mirror), vec![2, 3]);
        assert_eq!(delta_of(&mirror), (vec![3], vec![1]));
    }

    #[test]
    fn extend_and_collect_go_through_add() {
        let mut s: DeltaSet<i32> = vec![1, 2].into_iter().collect();
        s.undelta();
        s.extend([2, 3]);
        assert_eq!(delta_of(&s), (vec![3], vec![]));
    }

    #[test]
    fn custom_hasher() {
        use std::collections::hash_map::RandomState;

        let mut s = DeltaSet::with_values_and_hasher([1, 2], RandomState::new());
        s.delete(&1);
        assert_eq!(members_of_any(&s), vec![2]);
    }

    fn members_of_any<T: Clone, S>(set: &DeltaSet<T, S>) -> Vec<T> {
        set.into_iter().cloned().collect()
    }
}
