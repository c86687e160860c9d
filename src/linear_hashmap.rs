use std::{
    borrow::Borrow,
    hash::{BuildHasher, Hash},
    iter::FusedIterator,
    slice,
};

use crate::{
    bucket::Bucket,
    config::LinearHashMapConfig,
    entry::Entry,
    error::{Error, Result},
    hasher::DefaultBuildHasher,
};

/// A separately chained hash map that grows one bucket at a time.
///
/// The table is addressed with two moduli: `base_count` for buckets that have not split yet in
/// the current generation, and `2 * base_count` for the buckets below the split pointer that
/// already have. When an insert pushes the global load above the configured threshold, the
/// bucket under the split pointer is split in two and the pointer advances; once it has walked
/// the whole generation, `base_count` doubles and the pointer starts over. No insert ever
/// rehashes more than one bucket.
///
/// The table never shrinks: removals leave the bucket count as it is.
///
/// Note: This implementation is not thread-safe. Wrap it in a lock to share it between threads.
#[derive(Debug, Clone)]
pub struct LinearHashMap<K, V, S = DefaultBuildHasher> {
    /// Bucket arena; a bucket's identity is its index. Always `base_count + split_pointer` long
    buckets: Vec<Bucket<K, V>>,
    /// Number of buckets in the current generation
    base_count: usize,
    /// Index of the next bucket to split, always below `base_count`
    split_pointer: usize,
    /// Number of live entries
    item_count: usize,
    /// Capacity hint and split threshold
    config: LinearHashMapConfig,
    /// Produces the integer hash of a key
    hash_builder: S,
}

impl<K, V, S: Default> Default for LinearHashMap<K, V, S> {
    fn default() -> Self {
        Self::with_config_and_hasher(LinearHashMapConfig::default(), S::default())
    }
}

impl<K, V> LinearHashMap<K, V, DefaultBuildHasher> {
    /// Creates an empty map with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with the given configuration
    ///
    /// # Panics
    ///
    /// Panics if the first-generation buckets cannot be allocated, e.g. when
    /// `initial_bucket_count * bucket_capacity_hint` entries overflow the address space. Use
    /// [`LinearHashMap::try_with_config_and_hasher`] to get an error instead.
    #[must_use]
    pub fn with_config(config: LinearHashMapConfig) -> Self {
        Self::with_config_and_hasher(config, DefaultBuildHasher::default())
    }
}

impl<K, V, S> LinearHashMap<K, V, S> {
    /// Creates an empty map with the default configuration that hashes keys with `hash_builder`
    #[must_use]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_config_and_hasher(LinearHashMapConfig::default(), hash_builder)
    }

    /// Creates an empty map with the given configuration and hash builder.
    ///
    /// Every first-generation bucket is allocated up front with room for
    /// `bucket_capacity_hint` entries.
    ///
    /// # Panics
    ///
    /// Panics if that allocation fails or its size overflows, like `Vec::with_capacity`.
    /// [`LinearHashMap::try_with_config_and_hasher`] reports the same failure as an error.
    #[must_use]
    pub fn with_config_and_hasher(config: LinearHashMapConfig, hash_builder: S) -> Self {
        let base_count = config.initial_bucket_count();
        let buckets = (0..base_count)
            .map(|_| Bucket::with_capacity(config.bucket_capacity_hint()))
            .collect();

        Self { buckets, base_count, split_pointer: 0, item_count: 0, config, hash_builder }
    }

    /// Creates an empty map with the given configuration and hash builder, reporting
    /// allocation failure instead of panicking
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the bucket arena or any first-generation bucket
    /// cannot be reserved.
    pub fn try_with_config_and_hasher(
        config: LinearHashMapConfig,
        hash_builder: S,
    ) -> Result<Self> {
        let base_count = config.initial_bucket_count();
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(base_count)?;
        for _ in 0..base_count {
            buckets.push(Bucket::try_with_capacity(config.bucket_capacity_hint())?);
        }

        Ok(Self { buckets, base_count, split_pointer: 0, item_count: 0, config, hash_builder })
    }

    /// Returns the number of buckets, `base_count + split_pointer`
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of entries in the map
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns the number of entries in the map
    #[must_use]
    pub const fn len(&self) -> usize {
        self.item_count
    }

    /// Returns true if the map holds no entries
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Returns the number of buckets in the current generation
    #[must_use]
    pub const fn base_count(&self) -> usize {
        self.base_count
    }

    /// Returns the index of the next bucket to split
    #[must_use]
    pub const fn split_pointer(&self) -> usize {
        self.split_pointer
    }

    /// Returns the configuration the map was built with
    #[must_use]
    pub const fn config(&self) -> &LinearHashMapConfig {
        &self.config
    }

    /// Returns the map's hash builder
    #[must_use]
    pub const fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns the current load as an integer percentage of
    /// `bucket_count * bucket_capacity_hint`
    #[must_use]
    pub fn load_factor_percent(&self) -> usize {
        let capacity = self.bucket_count().saturating_mul(self.config.bucket_capacity_hint());
        self.item_count.saturating_mul(100).checked_div(capacity).unwrap_or(usize::MAX)
    }

    /// Returns the number of entries in each bucket, in bucket order
    pub fn bucket_lengths(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.buckets.iter().map(Bucket::len)
    }

    /// Returns an iterator over the key-value pairs, bucket by bucket
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { buckets: self.buckets.iter(), entries: None, remaining: self.item_count }
    }

    /// Removes every entry.
    ///
    /// The buckets themselves stay, so `bucket_count()` is unchanged.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.item_count = 0;
    }

    /// Modulus of the next generation, used for buckets that have already split
    const fn next_modulus(&self) -> usize {
        self.base_count.saturating_mul(2)
    }
}

impl<K, V, S> LinearHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Inserts a key-value pair.
    ///
    /// May split one bucket if the insert pushes the load above the configured threshold.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if the key is already present; the map is unchanged.
    /// Returns [`Error::AllocationFailure`] if storage could not grow. If that happens while
    /// splitting, the pair is already stored and the split is retried by the next insert.
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        let index = self.address(&key);
        let Some(bucket) = self.buckets.get_mut(index) else {
            return Err(Error::KeyNotFound);
        };
        if bucket.find(&key).is_some() {
            return Err(Error::DuplicateKey);
        }
        bucket.try_push(Entry::new(key, value))?;
        self.item_count = self.item_count.saturating_add(1);

        if self.load_factor_percent() > self.config.load_factor_threshold_percent() {
            self.split()?;
        }

        Ok(())
    }

    /// Retrieves the value stored for `key`
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets
            .get(self.address(key))
            .and_then(|bucket| bucket.find(key))
            .map(Entry::value)
            .ok_or(Error::KeyNotFound)
    }

    /// Retrieves a mutable reference to the value stored for `key`
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.address(key);
        self.buckets
            .get_mut(index)
            .and_then(|bucket| bucket.find_mut(key))
            .map(Entry::value_mut)
            .ok_or(Error::KeyNotFound)
    }

    /// Removes `key` from the map and returns its value.
    ///
    /// The bucket count never drops; removal only empties slots.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent; the map is unchanged.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.address(key);
        let bucket = self.buckets.get_mut(index).ok_or(Error::KeyNotFound)?;
        let position = bucket.position(key).ok_or(Error::KeyNotFound)?;
        let entry = bucket.swap_remove(position).ok_or(Error::KeyNotFound)?;
        self.item_count = self.item_count.saturating_sub(1);

        let (_, value) = entry.into_parts();
        Ok(value)
    }

    /// Removes `key` from the map, dropping its value
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent; the map is unchanged.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<()>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove(key)?;
        Ok(())
    }

    /// Computes the bucket index for a key.
    ///
    /// Buckets below the split pointer have already split this generation, so their keys are
    /// addressed with the next generation's modulus.
    fn address<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        let hash = self.hash_builder.hash_one(key);
        let index = reduce(hash, self.base_count);
        if index < self.split_pointer { reduce(hash, self.next_modulus()) } else { index }
    }

    /// Splits the bucket under the split pointer and advances the pointer.
    ///
    /// Entries whose hash modulo `2 * base_count` lands on the new bucket move there; the rest
    /// stay. All storage is reserved before entries move, so a failed allocation leaves the
    /// table as it was.
    fn split(&mut self) -> Result<()> {
        self.buckets.try_reserve(1)?;

        let source_index = self.split_pointer;
        let new_index = self.base_count.saturating_add(self.split_pointer);
        let modulus = self.next_modulus();
        let hash_builder = &self.hash_builder;

        let Some(source) = self.buckets.get_mut(source_index) else {
            return Ok(());
        };
        let split = source.split_off_where(self.config.bucket_capacity_hint(), |key| {
            reduce(hash_builder.hash_one(key), modulus) == new_index
        })?;

        log::trace!(
            "split bucket {source_index} into {new_index}: {} entries moved, {} stayed",
            split.len(),
            source.len()
        );
        self.buckets.push(split);

        self.split_pointer = self.split_pointer.saturating_add(1);
        if self.split_pointer == self.base_count {
            self.base_count = modulus;
            self.split_pointer = 0;
            log::debug!("generation rollover: base bucket count is now {}", self.base_count);
        }

        Ok(())
    }
}

/// Reduces a hash to a bucket index below `modulus`
#[allow(clippy::cast_possible_truncation)]
fn reduce(hash: u64, modulus: usize) -> usize {
    // The remainder is below `modulus`, so it fits back into usize.
    hash.checked_rem(modulus as u64).unwrap_or(0) as usize
}

/// Iterator over the key-value pairs of a [`LinearHashMap`]
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Buckets not yet visited
    buckets: slice::Iter<'a, Bucket<K, V>>,
    /// Entries left in the bucket being visited
    entries: Option<slice::Iter<'a, Entry<K, V>>>,
    /// Entries not yet yielded
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entries.as_mut().and_then(Iterator::next) {
                self.remaining = self.remaining.saturating_sub(1);
                return Some((entry.key(), entry.value()));
            }
            self.entries = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V, S> IntoIterator for &'a LinearHashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
