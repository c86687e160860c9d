//! Hashers usable as the `S` parameter of [`LinearHashMap`](crate::LinearHashMap)

use std::hash::{BuildHasherDefault, DefaultHasher, Hasher};

/// The default hash builder: `DefaultHasher` with fixed keys, so a key hashes the same way in
/// every map and every run
pub type DefaultBuildHasher = BuildHasherDefault<DefaultHasher>;

/// Hash builder for [`IdentityHasher`]
pub type IdentityBuildHasher = BuildHasherDefault<IdentityHasher>;

/// A hasher that passes integer keys through unchanged, so `hash(k) == k`.
///
/// Meant for keys that are already well distributed integers. Byte-slice input (strings and
/// other non-integer keys) is folded in little-endian order, which is deterministic but makes
/// no attempt at mixing.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityHasher {
    /// The value written so far
    hash: u64,
}

impl IdentityHasher {
    /// Rotates the running value left by `bits` and folds `value` in.
    ///
    /// A single write into a fresh hasher leaves exactly `value`.
    fn fold(&mut self, value: u64, bits: u32) {
        self.hash = self.hash.rotate_left(bits) ^ value;
    }
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes.iter().rev() {
            self.fold(u64::from(byte), u8::BITS);
        }
    }

    fn write_u8(&mut self, i: u8) {
        self.fold(u64::from(i), u8::BITS);
    }

    fn write_u16(&mut self, i: u16) {
        self.fold(u64::from(i), u16::BITS);
    }

    fn write_u32(&mut self, i: u32) {
        self.fold(u64::from(i), u32::BITS);
    }

    fn write_u64(&mut self, i: u64) {
        self.fold(i, u64::BITS);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn write_usize(&mut self, i: usize) {
        self.fold(i as u64, u64::BITS);
    }

    #[allow(clippy::cast_sign_loss)]
    fn write_i32(&mut self, i: i32) {
        self.fold(u64::from(i as u32), u32::BITS);
    }

    #[allow(clippy::cast_sign_loss)]
    fn write_i64(&mut self, i: i64) {
        self.fold(i as u64, u64::BITS);
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{BuildHasher, Hash};

    use super::*;

    #[test]
    fn test_integers_hash_to_themselves() {
        let builder = IdentityBuildHasher::default();
        assert_eq!(builder.hash_one(27_u64), 27);
        assert_eq!(builder.hash_one(27_usize), 27);
        assert_eq!(builder.hash_one(27_u32), 27);
        assert_eq!(builder.hash_one(27_i32), 27);
    }

    #[test]
    fn test_bytes_are_deterministic() {
        let builder = IdentityBuildHasher::default();
        assert_eq!(builder.hash_one("apple"), builder.hash_one("apple"));
        assert_ne!(builder.hash_one("apple"), builder.hash_one("apples"));
    }

    #[test]
    fn test_default_build_hasher_is_stable_across_instances() {
        let first = DefaultBuildHasher::default();
        let second = DefaultBuildHasher::default();

        let mut a = first.build_hasher();
        let mut b = second.build_hasher();
        "key".hash(&mut a);
        "key".hash(&mut b);
        assert_eq!(a.finish(), b.finish());
    }
}
