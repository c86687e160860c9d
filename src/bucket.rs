//! Separate-chaining bucket: an unordered run of entries scanned linearly

use std::borrow::Borrow;

use crate::{entry::Entry, error::Result};

/// A growable sequence of entries sharing one bucket address.
///
/// The capacity a bucket is created with is only a reservation hint; pushes grow it without
/// bound. Entry order carries no meaning and removal swaps the last entry into the hole.
#[derive(Debug, Clone)]
pub struct Bucket<K, V> {
    /// The entries addressed to this bucket
    entries: Vec<Entry<K, V>>,
}

impl<K, V> Bucket<K, V> {
    /// Creates an empty bucket with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    /// Creates an empty bucket with room for `capacity` entries, reporting allocation failure
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let mut entries = Vec::new();
        entries.try_reserve_exact(capacity)?;
        Ok(Self { entries })
    }

    /// Number of entries in the bucket
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Appends an entry, growing storage if needed
    pub fn try_push(&mut self, entry: Entry<K, V>) -> Result<()> {
        self.entries.try_reserve(1)?;
        self.entries.push(entry);
        Ok(())
    }

    /// Position of the entry holding `key`
    pub fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter().position(|entry| entry.key().borrow() == key)
    }

    /// Returns the entry holding `key`
    pub fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter().find(|entry| entry.key().borrow() == key)
    }

    /// Returns the entry holding `key` mutably
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.entries.iter_mut().find(|entry| entry.key().borrow() == key)
    }

    /// Removes the entry at `index`, moving the last entry into its place
    pub fn swap_remove(&mut self, index: usize) -> Option<Entry<K, V>> {
        if index < self.entries.len() { Some(self.entries.swap_remove(index)) } else { None }
    }

    /// Drops every entry, keeping the allocation
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over the entries in storage order
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<K, V>> {
        self.entries.iter()
    }

    /// Moves every entry whose key satisfies `moves` into a new bucket.
    ///
    /// Storage for the new bucket (at least `capacity_hint` entries) is reserved before any
    /// entry moves, so on allocation failure `self` is left untouched.
    pub fn split_off_where<F>(&mut self, capacity_hint: usize, mut moves: F) -> Result<Self>
    where
        F: FnMut(&K) -> bool,
    {
        let moving = self.entries.iter().filter(|entry| moves(entry.key())).count();
        let mut split = Self::try_with_capacity(capacity_hint.max(moving))?;

        // Walking backwards keeps swap_remove from pulling an unvisited entry into the hole.
        let mut index = self.entries.len();
        while let Some(previous) = index.checked_sub(1) {
            index = previous;
            let should_move = self.entries.get(index).is_some_and(|entry| moves(entry.key()));
            if should_move {
                split.entries.push(self.entries.swap_remove(index));
            }
        }

        Ok(split)
    }
}

impl<'a, K, V> IntoIterator for &'a Bucket<K, V> {
    type Item = &'a Entry<K, V>;
    type IntoIter = std::slice::Iter<'a, Entry<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn bucket_of(keys: &[u32]) -> Bucket<u32, u32> {
        let mut bucket = Bucket::with_capacity(4);
        for &key in keys {
            bucket.try_push(Entry::new(key, key * 10)).unwrap();
        }
        bucket
    }

    #[test]
    fn test_push_and_find() {
        let bucket = bucket_of(&[1, 2, 3]);

        assert_eq!(bucket.len(), 3);
        assert_eq!(bucket.find(&2).map(Entry::value), Some(&20));
        assert_eq!(bucket.position(&3), Some(2));
        assert!(bucket.find(&4).is_none());
    }

    #[test]
    fn test_grows_past_capacity_hint() {
        let bucket = bucket_of(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(bucket.len(), 9);
    }

    #[test]
    fn test_swap_remove() {
        let mut bucket = bucket_of(&[1, 2, 3]);

        let removed = bucket.swap_remove(0).unwrap();
        assert_eq!(removed.into_parts(), (1, 10));
        assert_eq!(bucket.iter().next().map(Entry::key), Some(&3));
        assert_eq!(bucket.len(), 2);
        assert!(bucket.swap_remove(5).is_none());
    }

    #[test]
    fn test_find_mut() {
        let mut bucket = bucket_of(&[1]);
        if let Some(entry) = bucket.find_mut(&1) {
            *entry.value_mut() = 99;
        }
        assert_eq!(bucket.find(&1).map(Entry::value), Some(&99));
    }

    #[test]
    fn test_split_off_where_partitions() {
        let mut bucket = bucket_of(&[0, 1, 2, 3, 4, 5, 6, 7]);

        let split = bucket.split_off_where(4, |key| key % 2 == 1).unwrap();

        let mut kept: Vec<u32> = bucket.iter().map(|entry| *entry.key()).collect();
        let mut moved: Vec<u32> = split.iter().map(|entry| *entry.key()).collect();
        kept.sort_unstable();
        moved.sort_unstable();

        assert_eq!(kept, vec![0, 2, 4, 6]);
        assert_eq!(moved, vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_split_off_where_nothing_moves() {
        let mut bucket = bucket_of(&[2, 4]);
        let split = bucket.split_off_where(4, |_| false).unwrap();

        assert!(split.iter().next().is_none());
        assert_eq!(bucket.len(), 2);
    }

    #[test]
    fn test_failed_split_keeps_every_entry() {
        let mut bucket = bucket_of(&[1, 2, 3, 4]);

        let result = bucket.split_off_where(usize::MAX, |_| true);

        assert!(matches!(result, Err(Error::AllocationFailure(_))));
        assert_eq!(bucket.len(), 4);
        for key in [1, 2, 3, 4] {
            assert_eq!(bucket.find(&key).map(Entry::value), Some(&(key * 10)));
        }
    }

    #[test]
    fn test_clear() {
        let mut bucket = bucket_of(&[1, 2]);
        bucket.clear();
        assert_eq!(bucket.len(), 0);
    }
}
