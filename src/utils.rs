//! Bulk helpers layered on the `LinearHashMap` API

use std::{
    borrow::Borrow,
    hash::{BuildHasher, Hash},
};

use crate::{LinearHashMap, config::LinearHashMapConfig, error::Result, hasher::DefaultBuildHasher};

/// Owned snapshots and membership checks over a map
pub trait HashMapExtensions<K, V> {
    /// Clones every key, in iteration (bucket) order
    fn keys(&self) -> Vec<K>;

    /// Clones every value, in iteration (bucket) order
    fn values(&self) -> Vec<V>;

    /// Returns true if a lookup of `key` would succeed
    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;
}

impl<K, V, S> HashMapExtensions<K, V> for LinearHashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn keys(&self) -> Vec<K> {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    fn values(&self) -> Vec<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_ok()
    }
}

/// Builds a map with the default configuration and hasher from key-value pairs
///
/// # Errors
///
/// Same as [`try_from_iter_with`].
pub fn try_from_iter<K, V, I>(iter: I) -> Result<LinearHashMap<K, V>>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (K, V)>,
{
    try_from_iter_with(LinearHashMapConfig::default(), DefaultBuildHasher::default(), iter)
}

/// Builds a map with `config` and `hash_builder` from key-value pairs, inserting them in order.
///
/// Pairs are not deduplicated: a repeated key is an error, never an overwrite.
///
/// # Errors
///
/// Fails with [`Error::DuplicateKey`](crate::Error::DuplicateKey) on the first key that
/// repeats, or with [`Error::AllocationFailure`](crate::Error::AllocationFailure) if storage
/// could not be reserved.
pub fn try_from_iter_with<K, V, S, I>(
    config: LinearHashMapConfig,
    hash_builder: S,
    iter: I,
) -> Result<LinearHashMap<K, V, S>>
where
    K: Eq + Hash,
    S: BuildHasher,
    I: IntoIterator<Item = (K, V)>,
{
    let mut map = LinearHashMap::try_with_config_and_hasher(config, hash_builder)?;
    for (key, value) in iter {
        map.insert(key, value)?;
    }
    Ok(map)
}
