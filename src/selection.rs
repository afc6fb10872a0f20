//! The selection set and the click rules that mutate it.
//!
//! Membership is all that matters; ids are kept ordered only so that
//! transformer attachment is deterministic.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::BTreeSet;

use crate::doc::ObjectId;

/// Ids of the currently selected content objects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<ObjectId>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectId> {
        self.ids.iter()
    }

    /// Selected ids in ascending order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<ObjectId> {
        self.ids.iter().copied().collect()
    }

    /// Replace the whole set. Returns `true` if membership changed.
    pub fn replace<I>(&mut self, ids: I) -> bool
    where
        I: IntoIterator<Item = ObjectId>,
    {
        let next: BTreeSet<ObjectId> = ids.into_iter().collect();
        if next == self.ids {
            return false;
        }
        self.ids = next;
        true
    }

    /// Empty the set. Returns `true` if anything was selected.
    pub fn clear(&mut self) -> bool {
        if self.ids.is_empty() {
            return false;
        }
        self.ids.clear();
        true
    }

    /// Drop `id` if present. Returns `true` if it was selected.
    pub fn remove(&mut self, id: &ObjectId) -> bool {
        self.ids.remove(id)
    }

    /// Keep only ids for which `keep` holds. Returns `true` if any were dropped.
    pub fn retain<F>(&mut self, mut keep: F) -> bool
    where
        F: FnMut(&ObjectId) -> bool,
    {
        let before = self.ids.len();
        self.ids.retain(|id| keep(id));
        self.ids.len() != before
    }

    /// Apply a click on `clicked`. Returns `true` if membership changed.
    ///
    /// | toggle | already selected | result |
    /// |--------|------------------|--------|
    /// | no     | no               | `{clicked}` |
    /// | yes    | yes              | set minus `clicked` |
    /// | yes    | no               | set plus `clicked` |
    /// | no     | yes              | collapse to `{clicked}` |
    ///
    /// The last row is a no-op when `clicked` is already the only member.
    pub fn click(&mut self, clicked: ObjectId, toggle: bool) -> bool {
        let already = self.ids.contains(&clicked);
        match (toggle, already) {
            (true, true) => self.ids.remove(&clicked),
            (true, false) => self.ids.insert(clicked),
            (false, _) => self.replace([clicked]),
        }
    }
}
