//! Raced containers
//!
//! The three containers share one operation set. Every benchmark helper is
//! generic over [`RaceContainer`], so each container gets its own
//! monomorphised copy and nothing is dispatched at runtime.

use std::collections::{BTreeSet, LinkedList};

use crate::models::ContainerKind;

/// Result of asking a container to sort itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    /// Elements were reordered into ascending order
    Sorted,
    /// The container keeps its elements ordered by construction
    AlreadyOrdered,
}

/// Operation set shared by every raced container
pub trait RaceContainer: Default {
    /// Report column this container fills
    const KIND: ContainerKind;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    /// Append one record read from the source
    fn push_record(&mut self, record: String);

    /// Order the elements ascending, in place
    fn sort_records(&mut self) -> SortOutcome;

    /// Insert `marker` at position `len / 2`; returns whether the count grew
    fn insert_middle(&mut self, marker: &str) -> bool;

    /// Remove the element at position `len / 2`
    fn remove_middle(&mut self) -> Option<String>;
}

/// Midpoint used by insert and delete, recomputed on every call
pub fn midpoint(len: usize) -> usize {
    len / 2
}

impl RaceContainer for Vec<String> {
    const KIND: ContainerKind = ContainerKind::Vector;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn push_record(&mut self, record: String) {
        self.push(record);
    }

    fn sort_records(&mut self) -> SortOutcome {
        self.sort_unstable();
        SortOutcome::Sorted
    }

    fn insert_middle(&mut self, marker: &str) -> bool {
        let mid = midpoint(Vec::len(self));
        self.insert(mid, marker.to_string());
        true
    }

    fn remove_middle(&mut self) -> Option<String> {
        if Vec::is_empty(self) {
            return None;
        }
        let mid = midpoint(Vec::len(self));
        Some(self.remove(mid))
    }
}

impl RaceContainer for LinkedList<String> {
    const KIND: ContainerKind = ContainerKind::List;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn clear(&mut self) {
        LinkedList::clear(self);
    }

    fn push_record(&mut self, record: String) {
        self.push_back(record);
    }

    fn sort_records(&mut self) -> SortOutcome {
        let list = std::mem::take(self);
        *self = merge_sort(list);
        SortOutcome::Sorted
    }

    fn insert_middle(&mut self, marker: &str) -> bool {
        let mid = midpoint(LinkedList::len(self));
        let mut tail = self.split_off(mid);
        self.push_back(marker.to_string());
        self.append(&mut tail);
        true
    }

    fn remove_middle(&mut self) -> Option<String> {
        if LinkedList::is_empty(self) {
            return None;
        }
        let mid = midpoint(LinkedList::len(self));
        let mut tail = self.split_off(mid);
        let removed = tail.pop_front();
        self.append(&mut tail);
        removed
    }
}

impl RaceContainer for BTreeSet<String> {
    const KIND: ContainerKind = ContainerKind::Set;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn clear(&mut self) {
        BTreeSet::clear(self);
    }

    fn push_record(&mut self, record: String) {
        self.insert(record);
    }

    fn sort_records(&mut self) -> SortOutcome {
        SortOutcome::AlreadyOrdered
    }

    // Position is decided by ordering; a duplicate marker is a no-op.
    fn insert_middle(&mut self, marker: &str) -> bool {
        self.insert(marker.to_string())
    }

    fn remove_middle(&mut self) -> Option<String> {
        let mid = midpoint(BTreeSet::len(self));
        // No positional removal on a stable BTreeSet, so take by a cloned key.
        let key = self.iter().nth(mid)?.clone();
        self.take(&key)
    }
}

/// Stable top-down merge sort touching only the list ends
fn merge_sort(mut list: LinkedList<String>) -> LinkedList<String> {
    if list.len() <= 1 {
        return list;
    }

    let right = list.split_off(list.len() / 2);
    merge(merge_sort(list), merge_sort(right))
}

fn merge(mut left: LinkedList<String>, mut right: LinkedList<String>) -> LinkedList<String> {
    let mut merged = LinkedList::new();

    while let (Some(l), Some(r)) = (left.front(), right.front()) {
        // Ties take from the left half to keep the sort stable.
        let next = if r < l {
            right.pop_front()
        } else {
            left.pop_front()
        };

        if let Some(value) = next {
            merged.push_back(value);
        }
    }

    merged.append(&mut left);
    merged.append(&mut right);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn filled<C: RaceContainer>(values: &[&str]) -> C {
        let mut container = C::default();
        for value in records(values) {
            container.push_record(value);
        }
        container
    }

    fn is_non_decreasing<'a>(values: impl Iterator<Item = &'a String>) -> bool {
        let values: Vec<&String> = values.collect();
        values.windows(2).all(|pair| pair[0] <= pair[1])
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(midpoint(0), 0);
        assert_eq!(midpoint(5), 2);
        assert_eq!(midpoint(6), 3);
    }

    #[test]
    fn test_vector_sort() {
        let mut vec: Vec<String> = filled(&["d", "a", "c", "b", "a"]);

        assert_eq!(vec.sort_records(), SortOutcome::Sorted);
        assert_eq!(vec, records(&["a", "a", "b", "c", "d"]));

        vec.sort_records();
        assert_eq!(vec, records(&["a", "a", "b", "c", "d"]));
    }

    #[test]
    fn test_list_merge_sort() {
        let mut list: LinkedList<String> =
            filled(&["pear", "apple", "fig", "apple", "kiwi", "banana", "cherry"]);

        assert_eq!(list.sort_records(), SortOutcome::Sorted);
        assert_eq!(list.len(), 7);
        assert!(is_non_decreasing(list.iter()));

        let once: Vec<String> = list.iter().cloned().collect();
        list.sort_records();
        let twice: Vec<String> = list.iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_list_sort_small() {
        let mut empty = LinkedList::<String>::new();
        empty.sort_records();
        assert!(empty.is_empty());

        let mut single: LinkedList<String> = filled(&["x"]);
        single.sort_records();
        assert_eq!(single.front().map(String::as_str), Some("x"));
    }

    #[test]
    fn test_set_sort_is_already_ordered() {
        let mut set: BTreeSet<String> = filled(&["c", "a", "b"]);
        assert_eq!(set.sort_records(), SortOutcome::AlreadyOrdered);
        assert!(is_non_decreasing(set.iter()));
    }

    #[test]
    fn test_set_collapses_duplicates() {
        let set: BTreeSet<String> = filled(&["b", "a", "b", "a"]);
        assert_eq!(RaceContainer::len(&set), 2);
    }

    #[test]
    fn test_sequence_insert_middle() {
        let mut vec: Vec<String> = filled(&["a", "b", "c", "d", "e"]);
        let mut list: LinkedList<String> = filled(&["a", "b", "c", "d", "e"]);

        assert!(vec.insert_middle("TESTCODE"));
        assert!(list.insert_middle("TESTCODE"));

        let expected = records(&["a", "b", "TESTCODE", "c", "d", "e"]);
        assert_eq!(vec, expected);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_insert_into_empty() {
        let mut vec = Vec::<String>::new();
        let mut list = LinkedList::<String>::new();

        assert!(vec.insert_middle("m"));
        assert!(list.insert_middle("m"));
        assert_eq!(vec, records(&["m"]));
        assert_eq!(list.front().map(String::as_str), Some("m"));
    }

    #[test]
    fn test_set_insert_duplicate_is_noop() {
        let mut set: BTreeSet<String> = filled(&["a", "TESTCODE", "z"]);

        assert!(!set.insert_middle("TESTCODE"));
        assert_eq!(RaceContainer::len(&set), 3);
        assert_eq!(set.iter().filter(|v| *v == "TESTCODE").count(), 1);
    }

    #[test]
    fn test_sequence_remove_middle() {
        let mut vec: Vec<String> = filled(&["a", "b", "TESTCODE", "c", "d", "e"]);
        let mut list: LinkedList<String> = filled(&["a", "b", "TESTCODE", "c", "d", "e"]);

        assert_eq!(vec.remove_middle().as_deref(), Some("c"));
        assert_eq!(list.remove_middle().as_deref(), Some("c"));

        let expected = records(&["a", "b", "TESTCODE", "d", "e"]);
        assert_eq!(vec, expected);
        assert_eq!(list.into_iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_set_remove_middle() {
        let mut set: BTreeSet<String> = filled(&["a", "b", "c", "d", "e"]);
        set.insert_middle("TESTCODE");

        // "TESTCODE" sorts before lowercase letters: [TESTCODE, a, b, c, d, e]
        assert_eq!(set.remove_middle().as_deref(), Some("c"));
        assert_eq!(RaceContainer::len(&set), 5);
        assert!(set.contains("TESTCODE"));
    }

    #[test]
    fn test_remove_from_empty() {
        assert!(Vec::<String>::new().remove_middle().is_none());
        assert!(LinkedList::<String>::new().remove_middle().is_none());
        assert!(BTreeSet::<String>::new().remove_middle().is_none());
    }

    #[test]
    fn test_remove_single() {
        let mut list: LinkedList<String> = filled(&["only"]);
        assert_eq!(list.remove_middle().as_deref(), Some("only"));
        assert!(list.is_empty());
    }
}
