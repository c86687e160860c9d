//! Construction parameters for [`LinearHashMap`](crate::LinearHashMap)

/// Number of buckets in the first generation
pub const DEFAULT_INITIAL_BUCKET_COUNT: usize = 8;
/// Entries reserved per bucket, and the per-bucket share of the load denominator
pub const DEFAULT_BUCKET_CAPACITY_HINT: usize = 4;
/// Load percentage above which an insert splits one bucket
pub const DEFAULT_LOAD_FACTOR_THRESHOLD_PERCENT: usize = 85;

/// Parameters controlling the initial table size and when the table grows.
///
/// ```rust
/// use linear_hashmap::LinearHashMapConfig;
///
/// let config = LinearHashMapConfig::default()
///     .with_initial_bucket_count(16)
///     .with_load_factor_threshold_percent(75);
///
/// assert_eq!(config.initial_bucket_count(), 16);
/// assert_eq!(config.bucket_capacity_hint(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearHashMapConfig {
    /// Buckets allocated at construction, the modulus of the first generation
    initial_bucket_count: usize,
    /// Advisory entries per bucket; never caps a bucket
    bucket_capacity_hint: usize,
    /// Split threshold as a percentage of `bucket_count * bucket_capacity_hint`
    load_factor_threshold_percent: usize,
}

impl Default for LinearHashMapConfig {
    fn default() -> Self {
        Self {
            initial_bucket_count: DEFAULT_INITIAL_BUCKET_COUNT,
            bucket_capacity_hint: DEFAULT_BUCKET_CAPACITY_HINT,
            load_factor_threshold_percent: DEFAULT_LOAD_FACTOR_THRESHOLD_PERCENT,
        }
    }
}

impl LinearHashMapConfig {
    /// Creates a configuration from explicit values.
    ///
    /// Bucket count and capacity hint are used as a modulus and a divisor, so both are clamped
    /// to at least 1.
    #[must_use]
    pub fn new(
        initial_bucket_count: usize,
        bucket_capacity_hint: usize,
        load_factor_threshold_percent: usize,
    ) -> Self {
        Self {
            initial_bucket_count: initial_bucket_count.max(1),
            bucket_capacity_hint: bucket_capacity_hint.max(1),
            load_factor_threshold_percent,
        }
    }

    /// Sets the number of buckets in the first generation (at least 1)
    #[must_use]
    pub fn with_initial_bucket_count(mut self, count: usize) -> Self {
        self.initial_bucket_count = count.max(1);
        self
    }

    /// Sets the per-bucket capacity hint (at least 1)
    #[must_use]
    pub fn with_bucket_capacity_hint(mut self, hint: usize) -> Self {
        self.bucket_capacity_hint = hint.max(1);
        self
    }

    /// Sets the load percentage that must be exceeded before a bucket splits
    #[must_use]
    pub const fn with_load_factor_threshold_percent(mut self, threshold: usize) -> Self {
        self.load_factor_threshold_percent = threshold;
        self
    }

    /// Number of buckets in the first generation
    #[must_use]
    pub const fn initial_bucket_count(&self) -> usize {
        self.initial_bucket_count
    }

    /// Per-bucket capacity hint
    #[must_use]
    pub const fn bucket_capacity_hint(&self) -> usize {
        self.bucket_capacity_hint
    }

    /// Split threshold in percent
    #[must_use]
    pub const fn load_factor_threshold_percent(&self) -> usize {
        self.load_factor_threshold_percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LinearHashMapConfig::default();
        assert_eq!(config.initial_bucket_count(), 8);
        assert_eq!(config.bucket_capacity_hint(), 4);
        assert_eq!(config.load_factor_threshold_percent(), 85);
    }

    #[test]
    fn test_zero_values_are_clamped() {
        let config = LinearHashMapConfig::new(0, 0, 0);
        assert_eq!(config.initial_bucket_count(), 1);
        assert_eq!(config.bucket_capacity_hint(), 1);
        assert_eq!(config.load_factor_threshold_percent(), 0);

        let config =
            LinearHashMapConfig::default().with_initial_bucket_count(0).with_bucket_capacity_hint(0);
        assert_eq!(config.initial_bucket_count(), 1);
        assert_eq!(config.bucket_capacity_hint(), 1);
    }
}
