use linear_hashmap::{
    Error, HashMapExtensions, IdentityBuildHasher, LinearHashMap, LinearHashMapConfig,
};

type IdentityMap<V> = LinearHashMap<u64, V, IdentityBuildHasher>;

fn identity_map<V>(config: LinearHashMapConfig) -> IdentityMap<V> {
    LinearHashMap::with_config_and_hasher(config, IdentityBuildHasher::default())
}

#[test]
fn first_split_happens_on_the_twenty_eighth_insert() {
    let mut map = identity_map(LinearHashMapConfig::new(8, 4, 85));

    for key in 0..28_u64 {
        let before = map.bucket_count();
        map.insert(key, key * 100).unwrap();
        if key < 27 {
            assert_eq!(map.bucket_count(), before, "unexpected split at key {key}");
        }
    }

    assert_eq!(map.bucket_count(), 9);
    assert_eq!(map.split_pointer(), 1);
    assert_eq!(map.base_count(), 8);
    assert_eq!(map.item_count(), 28);

    for key in 0..28_u64 {
        assert_eq!(map.get(&key), Ok(&(key * 100)));
    }
}

#[test]
fn generation_doubles_after_every_bucket_split() {
    let mut map = identity_map(LinearHashMapConfig::default());
    let mut key = 0_u64;

    // Eight splits complete the first generation.
    while map.base_count() == 8 {
        map.insert(key, ()).unwrap();
        key += 1;
        assert_eq!(map.bucket_count(), map.base_count() + map.split_pointer());
    }

    assert_eq!(map.base_count(), 16);
    assert_eq!(map.split_pointer(), 0);
    assert_eq!(map.bucket_count(), 16);
    for present in 0..key {
        assert!(map.contains_key(&present));
    }
}

#[test]
fn duplicate_insert_leaves_map_unchanged() {
    let mut map = LinearHashMap::new();
    map.insert("apple", 1).unwrap();
    let buckets = map.bucket_count();

    assert_eq!(map.insert("apple", 2), Err(Error::DuplicateKey));
    assert_eq!(map.get("apple"), Ok(&1));
    assert_eq!(map.item_count(), 1);
    assert_eq!(map.bucket_count(), buckets);
}

#[test]
fn delete_absent_key_changes_nothing() {
    let mut map = LinearHashMap::new();
    map.insert(1_u32, "one").unwrap();

    assert_eq!(map.delete(&2), Err(Error::KeyNotFound));
    assert_eq!(map.item_count(), 1);
    assert_eq!(map.get(&1), Ok(&"one"));
}

#[test]
fn deleted_keys_can_be_inserted_again() {
    let mut map = identity_map(LinearHashMapConfig::default());
    for key in 0..200_u64 {
        map.insert(key, key).unwrap();
    }
    for key in (0..200_u64).step_by(2) {
        map.delete(&key).unwrap();
    }
    assert_eq!(map.item_count(), 100);

    for key in (0..200_u64).step_by(2) {
        assert_eq!(map.get(&key), Err(Error::KeyNotFound));
        map.insert(key, key + 1).unwrap();
    }

    assert_eq!(map.item_count(), 200);
    assert_eq!(map.get(&10), Ok(&11));
    assert_eq!(map.get(&11), Ok(&11));
}

#[test]
fn iteration_visits_every_entry_once() {
    let mut map = LinearHashMap::new();
    for key in 0..1000_u32 {
        map.insert(key, key).unwrap();
    }

    let mut keys = map.keys();
    keys.sort_unstable();
    assert_eq!(keys, (0..1000).collect::<Vec<_>>());
    assert_eq!(map.iter().len(), 1000);
    assert_eq!(map.values().iter().map(|&v| u64::from(v)).sum::<u64>(), 499_500);
}

#[test]
fn string_keys_grow_the_table() {
    let mut map = LinearHashMap::new();
    for i in 0..5000 {
        map.insert(format!("key-{i}"), i).unwrap();
    }

    assert_eq!(map.len(), 5000);
    assert!(map.bucket_count() > 8);
    assert!(map.load_factor_percent() <= 85);
    for i in 0..5000 {
        assert_eq!(map.get(&format!("key-{i}")), Ok(&i));
    }
}
