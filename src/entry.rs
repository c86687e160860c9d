use std::hash::{Hash, Hasher};

/// An owned key-value pair stored in a bucket.
///
/// Two entries are equal when their keys are equal; the value takes no part in equality or
/// hashing.
#[derive(Debug, Clone)]
pub struct Entry<K, V> {
    /// The key in the key-value pair
    key: K,
    /// The value associated with the key
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new entry owning `key` and `value`
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the entry's key
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the entry's value
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the entry's value
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consumes the entry, returning the key and value
    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: PartialEq, V> PartialEq for Entry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for Entry<K, V> {}

impl<K: Hash, V> Hash for Entry<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::hash::DefaultHasher;

    use super::*;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equality_ignores_value() {
        let a = Entry::new("key".to_string(), 1);
        let b = Entry::new("key".to_string(), 2);
        let c = Entry::new("other".to_string(), 1);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_matches_key_hash() {
        let entry = Entry::new(42_u64, "value");
        assert_eq!(hash_of(&entry), hash_of(&42_u64));
    }

    #[test]
    fn test_accessors() {
        let mut entry = Entry::new("key", 1);
        *entry.value_mut() += 10;

        assert_eq!(entry.key(), &"key");
        assert_eq!(entry.value(), &11);
        assert_eq!(entry.into_parts(), ("key", 11));
    }
}
