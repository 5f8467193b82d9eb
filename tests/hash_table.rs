use basic_collections::collections::hash::HashTable;
use basic_collections::error::KeyNotFound;
use test_log::test;

#[test]
fn rehashes_and_keeps_entries() {
    let mut table = HashTable::with_size(4);
    assert_eq!(table.bucket_count(), 5);

    let keys = ["a", "b", "c", "d", "e", "f", "g", "h"];
    for (value, key) in keys.iter().enumerate() {
        assert!(table.insert(*key, value));
    }

    assert!(table.bucket_count() > 5, "Eight entries in five buckets should cause a rehash.");
    assert_eq!(table.len(), 8);
    for (value, key) in keys.iter().enumerate() {
        let mut out = usize::MAX;
        assert!(table.retrieve(*key, &mut out));
        assert_eq!(out, value);
    }
}

#[test]
fn checked_access_and_default_insertion() {
    let mut table = HashTable::from([(String::from("A"), 1)]);

    assert_eq!(table.at("B"), Err(KeyNotFound));
    assert_eq!(*table.get_or_insert_default(String::from("B")), 0);
    assert_eq!(table.len(), 2);
}

#[test]
fn erase_and_reinsert() {
    let mut table: HashTable<u32, &str> = (0..30).map(|i| (i, "value")).collect();

    assert!(table.erase(&7));
    assert!(!table.erase(&7));
    assert_eq!(table.len(), 29);

    let mut out = "untouched";
    assert!(!table.retrieve(&7, &mut out));
    assert_eq!(out, "untouched");

    assert!(table.insert(7, "again"));
    assert_eq!(table[&7], "again");
}
