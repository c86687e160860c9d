//! # Linear Hash Map
//!
//! A Rust implementation of a separately chained hash table that grows by linear hashing.
//!
//! Instead of doubling and rehashing the whole table when it fills up, `LinearHashMap` splits
//! exactly one bucket per overloaded insert. A rolling split pointer marks which buckets have
//! already split in the current generation, and addressing uses the next generation's modulus
//! for those buckets, so lookups stay consistent while the table grows one bucket at a time.
//! This bounds the worst-case cost of an insert to rehashing a single bucket.
//!
//! ## Basic Usage
//!
//! ```rust
//! use linear_hashmap::{Error, LinearHashMap};
//!
//! // Create a new hash map
//! let mut map = LinearHashMap::new();
//!
//! // Insert values
//! map.insert("apple".to_string(), 1)?;
//! map.insert("banana".to_string(), 2)?;
//!
//! // Keys are unique
//! assert_eq!(map.insert("apple".to_string(), 10), Err(Error::DuplicateKey));
//!
//! // Retrieve values
//! assert_eq!(map.get("apple"), Ok(&1));
//!
//! // Remove values
//! map.delete("apple")?;
//! assert_eq!(map.get("apple"), Err(Error::KeyNotFound));
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Growth
//!
//! ```rust
//! use linear_hashmap::{IdentityBuildHasher, LinearHashMap, LinearHashMapConfig};
//!
//! // 8 buckets, 4 entries per bucket, split above 85% load; integer keys hash to themselves
//! let mut map = LinearHashMap::with_config_and_hasher(
//!     LinearHashMapConfig::default(),
//!     IdentityBuildHasher::default(),
//! );
//!
//! for key in 0_u64..27 {
//!     map.insert(key, key)?;
//! }
//! assert_eq!(map.bucket_count(), 8);
//!
//! // The 28th entry pushes the load to 87% and splits bucket 0
//! map.insert(27, 27)?;
//! assert_eq!(map.bucket_count(), 9);
//! assert_eq!(map.split_pointer(), 1);
//! # Ok::<(), linear_hashmap::Error>(())
//! ```

/// Module implementing the per-address entry chain
mod bucket;
/// Module implementing map construction parameters
mod config;
/// Module implementing the key-value pair stored in buckets
mod entry;
/// Module implementing the crate error type
mod error;
/// Module implementing hash builders for the map
mod hasher;
/// Module implementing the linear hashing map
mod linear_hashmap;
/// Utility functions and traits for the hash map
mod utils;

pub use config::{
    DEFAULT_BUCKET_CAPACITY_HINT, DEFAULT_INITIAL_BUCKET_COUNT,
    DEFAULT_LOAD_FACTOR_THRESHOLD_PERCENT, LinearHashMapConfig,
};
pub use error::{Error, Result};
pub use hasher::{DefaultBuildHasher, IdentityBuildHasher, IdentityHasher};
pub use linear_hashmap::{Iter, LinearHashMap};
pub use utils::{HashMapExtensions, try_from_iter, try_from_iter_with};
