use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;
use std::ops::{Index, IndexMut};

use log::trace;

use super::chain::{Chain, Entry};
use super::prime::next_prime;
use super::{Iter, IterMut, Keys, Values, ValuesMut};
use crate::collections::contiguous::{Array, Vector};
use crate::error::{InvalidLoadFactor, KeyNotFound};
use crate::util::fmt::DebugRaw;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// The number of buckets used by [`HashTable::new`].
pub const DEFAULT_SIZE: usize = 11;

/// The maximum load factor of a new HashTable.
pub const DEFAULT_MAX_LOAD_FACTOR: f32 = 1.0;

const GROWTH_FACTOR: usize = 2;

/// A map of keys to values which relies on the keys implementing [`Hash`], resolving collisions by
/// separate chaining.
///
/// The number of buckets is always prime. Whenever an insertion takes the load factor
/// (`len / bucket_count`) above the maximum load factor, the table is rehashed into
/// `next_prime(2 * bucket_count)` buckets. Removing entries never shrinks the table.
///
/// It is a logic error for keys in a HashTable to be manipulated in a way that changes their hash.
/// Because of this, HashTable's API prevents mutable access to its keys.
///
/// # Time Complexity
/// - `n`: Entries in the table.
/// - `c`: Entries sharing the key's bucket.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(c)`*, `O(n)` |
/// | `get` | `O(c)` |
/// | `erase` | `O(c)` |
/// | `count` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// \* If the insertion takes the table over its maximum load factor, `insert` will rehash in
/// `O(n)`. On average, `c` is bounded by the maximum load factor.
pub struct HashTable<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) arr: Array<Chain<K, V>>,
    pub(crate) len: usize,
    pub(crate) max_load_factor: f32,
    pub(crate) hasher: B,
}

impl<K: Hash + Eq, V> HashTable<K, V> {
    /// Creates a new HashTable with [`DEFAULT_SIZE`] buckets, using [`RandomState`] for hashing.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::hash::HashTable;
    /// let table: HashTable<&str, u32> = HashTable::new();
    /// assert_eq!(table.bucket_count(), 11);
    /// assert!(table.is_empty());
    /// ```
    pub fn new() -> HashTable<K, V> {
        HashTable::with_size(DEFAULT_SIZE)
    }

    /// Creates a new HashTable with the smallest prime number of buckets that is at least `size`,
    /// using [`RandomState`] for hashing.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::hash::HashTable;
    /// let table: HashTable<&str, u32> = HashTable::with_size(4);
    /// assert_eq!(table.bucket_count(), 5);
    /// ```
    pub fn with_size(size: usize) -> HashTable<K, V> {
        HashTable::with_size_and_hasher(size, RandomState::new())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashTable<K, V, B> {
    /// Creates a new HashTable with [`DEFAULT_SIZE`] buckets and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashTable<K, V, B> {
        HashTable::with_size_and_hasher(DEFAULT_SIZE, hasher)
    }

    /// Creates a new HashTable with the smallest prime number of buckets that is at least `size`
    /// and the provided `hasher`.
    pub fn with_size_and_hasher(size: usize, hasher: B) -> HashTable<K, V, B> {
        HashTable {
            arr: Array::repeat_default(next_prime(size)),
            len: 0,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            hasher,
        }
    }

    /// Returns the number of entries in the HashTable.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashTable contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets, which is always prime.
    pub const fn bucket_count(&self) -> usize {
        self.arr.size()
    }

    /// Returns the current load factor, `len / bucket_count`.
    pub fn load_factor(&self) -> f32 {
        self.len as f32 / self.bucket_count() as f32
    }

    pub const fn max_load_factor(&self) -> f32 {
        self.max_load_factor
    }

    /// Sets the maximum load factor. The table isn't rehashed straight away. Each later insertion
    /// that exceeds the new limit rehashes once, so a much lower limit is approached over several
    /// insertions.
    ///
    /// # Errors
    /// Returns [`InvalidLoadFactor`] if `max_load_factor` isn't finite and greater than 0.
    pub fn set_max_load_factor(&mut self, max_load_factor: f32) -> Result<(), InvalidLoadFactor> {
        if !max_load_factor.is_finite() || max_load_factor <= 0.0 {
            return Err(InvalidLoadFactor(max_load_factor));
        }

        self.max_load_factor = max_load_factor;
        Ok(())
    }

    /// Inserts the provided `key`-`value` pair into the HashTable. Returns true if the key is new,
    /// or false if an existing value was overwritten. As with the standard library, the key isn't
    /// changed if it already exists.
    ///
    /// New entries are pushed to the front of their bucket. If the insertion takes the load factor
    /// above the maximum, the table is rehashed once.
    ///
    /// # Panics
    /// Panics if the number of buckets would overflow during a rehash.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::hash::HashTable;
    /// let mut table = HashTable::new();
    /// assert!(table.insert("one", 1));
    /// assert!(!table.insert("one", 10));
    /// assert_eq!(table.get("one"), Some(&10));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let index = self.bucket_index(&key);

        match self.arr[index].find_mut(&key) {
            Some(existing) => {
                existing.value = value;
                false
            },
            None => {
                self.arr[index].push_front(Entry::new(key, value));
                self.len += 1;

                if self.is_overloaded(self.len) {
                    self.rehash();
                }
                true
            },
        }
    }

    /// Copies the value associated with `key` into `out` and returns true, or returns false and
    /// leaves `out` untouched if there is no such value.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::hash::HashTable;
    /// let table = HashTable::from([("a", 1), ("b", 2)]);
    /// let mut out = 0;
    /// assert!(table.retrieve("b", &mut out));
    /// assert_eq!(out, 2);
    /// assert!(!table.retrieve("c", &mut out));
    /// assert_eq!(out, 2);
    /// ```
    pub fn retrieve<Q>(&self, key: &Q, out: &mut V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        match self.get(key) {
            Some(value) => {
                out.clone_from(value);
                true
            },
            None => false,
        }
    }

    /// Returns the entry for the provided `key`, or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        // Q represents a borrowed version of K where equality and hashing carry over the borrow.
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.arr[self.bucket_index(key)].find(key)
    }

    /// Returns a reference to the value associated with the provided `key` or None if the table
    /// contains no value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|entry| &entry.value)
    }

    /// Like [`get`](HashTable::get), but the value can be modified in place.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.arr[index].find_mut(key).map(|entry| &mut entry.value)
    }

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if the table contains no value for `key`.
    pub fn at<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if the table contains no value for `key`.
    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_mut(key).ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value associated with `key`, first inserting the default
    /// value of `V` if the key is absent. An insertion rehashes the table beforehand if the new
    /// entry would take it over the maximum load factor.
    ///
    /// # Panics
    /// Panics if the number of buckets would overflow during a rehash.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::hash::HashTable;
    /// let mut table = HashTable::from([("a", 1)]);
    /// *table.get_or_insert_default("b") += 5;
    /// *table.get_or_insert_default("a") += 5;
    /// assert_eq!(table.get("a"), Some(&6));
    /// assert_eq!(table.get("b"), Some(&5));
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        if self.contains(&key) {
            // UNREACHABLE: The key has just been found.
            return self.get_mut(&key).unreachable();
        }

        if self.is_overloaded(self.len + 1) {
            self.rehash();
        }

        let index = self.bucket_index(&key);
        self.len += 1;
        &mut self.arr[index].push_front(Entry::new(key, V::default())).value
    }

    /// Unlinks the entry for `key` and hands back its key and value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let removed = self.arr[index].remove(key)?;
        self.len -= 1;
        Some(removed.into_pair())
    }

    /// Unlinks the entry for `key` and hands back its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the entry associated with `key`, returning true if there was one. The table is never
    /// shrunk.
    pub fn erase<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_entry(key).is_some()
    }

    /// Whether `key` has an entry.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).is_some()
    }

    /// Returns the number of entries in the bucket which `key` hashes to, whether or not `key`
    /// itself is present. Use [`contains`](HashTable::contains) to check for a key.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::hash::HashTable;
    /// let table = HashTable::from([("a", 1), ("b", 2), ("c", 3)]);
    /// let total: usize = table.keys().map(|k| table.count(*k)).sum();
    /// assert!(total >= 3);
    /// ```
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.arr[self.bucket_index(key)].len()
    }

    /// Drops all entries, keeping the current number of buckets.
    pub fn clear(&mut self) {
        for chain in self.arr.iter_mut() {
            chain.clear();
        }
        self.len = 0;
    }

    /// Replaces the contents of the table with `entries`. The table is resized to the smallest
    /// prime number of buckets that fits the entries and the maximum load factor is reset to
    /// [`DEFAULT_MAX_LOAD_FACTOR`]. Later entries overwrite earlier ones with the same key.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::hash::HashTable;
    /// let mut table = HashTable::from([("a", 1)]);
    /// table.assign([("b", 2), ("c", 3), ("d", 4)]);
    /// assert_eq!(table.len(), 3);
    /// assert_eq!(table.bucket_count(), 3);
    /// assert!(!table.contains("a"));
    /// ```
    pub fn assign<I: IntoIterator<Item = (K, V)>>(&mut self, entries: I) {
        let entries: Vector<(K, V)> = entries.into_iter().collect();

        self.arr = Array::repeat_default(next_prime(entries.len()));
        self.len = 0;
        self.max_load_factor = DEFAULT_MAX_LOAD_FACTOR;

        self.extend(entries);
    }

    /// Returns an iterator over all entries in the HashTable, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all entries in the HashTable, with mutable access to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in the HashTable, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in the HashTable, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values in the HashTable, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashTable<K, V, B> {
    /// Calculates the index of the bucket for the provided `hashable`.
    pub(crate) fn bucket_index<H: Hash + ?Sized>(&self, hashable: &H) -> usize {
        // The bucket count is always at least 2.
        (self.hasher.hash_one(hashable) % self.bucket_count() as u64) as usize
    }

    /// Determines whether holding `len` entries would exceed the maximum load factor.
    pub(crate) fn is_overloaded(&self, len: usize) -> bool {
        len as f32 > self.bucket_count() as f32 * self.max_load_factor
    }

    /// Moves every entry into a new Array of `next_prime(2 * bucket_count)` buckets. Entries are
    /// relinked rather than reallocated, each one being pushed to the front of its new bucket.
    ///
    /// # Panics
    /// Panics if the number of buckets would overflow.
    pub(crate) fn rehash(&mut self) {
        let new_size = next_prime(
            self.bucket_count().checked_mul(GROWTH_FACTOR).expect("Capacity overflow!")
        );
        trace!(
            "rehashing HashTable from {} to {} buckets ({} entries)",
            self.bucket_count(),
            new_size,
            self.len
        );

        // The old buckets are consumed while the new ones fill up.
        let old_arr = mem::replace(&mut self.arr, Array::repeat_default(new_size));

        for mut chain in old_arr {
            while let Some(link) = chain.pop_front_link() {
                let index = self.bucket_index(&link.entry.key);
                self.arr[index].push_front_link(link);
            }
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashTable<K, V, B> {
    fn default() -> Self {
        HashTable::with_size_and_hasher(DEFAULT_SIZE, B::default())
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for HashTable<K, V, B> {
    /// Deep copies the table, keeping its number of buckets, maximum load factor and the order of
    /// each bucket.
    fn clone(&self) -> Self {
        HashTable {
            arr: self.arr.clone(),
            len: self.len,
            max_load_factor: self.max_load_factor,
            hasher: self.hasher.clone(),
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashTable<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashTable<K, V, B> {
    /// Creates a HashTable with the smallest prime number of buckets that fits all entries.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries: Vector<(K, V)> = iter.into_iter().collect();

        let mut table = HashTable::with_size_and_hasher(entries.len(), B::default());
        table.extend(entries);
        table
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for HashTable<K, V> {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K, Q, V, B> Index<&Q> for HashTable<K, V, B>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    B: BuildHasher,
{
    type Output = V;

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Panics
    /// Panics with [`KeyNotFound`] if the table contains no value for `key`.
    fn index(&self, key: &Q) -> &Self::Output {
        self.at(key).throw()
    }
}

impl<K, Q, V, B> IndexMut<&Q> for HashTable<K, V, B>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    B: BuildHasher,
{
    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// # Panics
    /// Panics with [`KeyNotFound`] if the table contains no value for `key`.
    fn index_mut(&mut self, key: &Q) -> &mut Self::Output {
        self.at_mut(key).throw()
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for HashTable<K, V, B> {
    /// Two tables are equal if they contain the same entries, regardless of their buckets.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.iter().all(|entry| other.get(&entry.key) == Some(&entry.value))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for HashTable<K, V, B> {}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashTable<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets: Vector<DebugRaw> = self.arr.iter()
            .map(|chain| DebugRaw(match chain.len() {
                0 => "-".into(),
                _ => chain.iter()
                    .map(|e| format!("({:?}: {:?})", e.key, e.value))
                    .collect::<Vector<_>>()
                    .join(" -> "),
            }))
            .collect();

        f.debug_struct("HashTable")
            .field("buckets", &&*buckets)
            .field("len", &self.len)
            .field("bucket_count", &self.bucket_count())
            .field("max_load_factor", &self.max_load_factor)
            .field("hasher", &self.hasher)
            .finish()
    }
}

/// Renders one line per bucket, listing its entries from front to back.
///
/// ```
/// # use basic_collections::collections::hash::HashTable;
/// let table: HashTable<&str, u32> = HashTable::with_size(2);
/// assert_eq!(table.to_string(), "[0]->\n[1]->");
/// ```
impl<K: Hash + Eq + Display, V: Display, B: BuildHasher> Display for HashTable<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.arr.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "[{index}]->")?;
            for entry in chain.iter() {
                write!(f, " {entry}")?;
            }
        }
        Ok(())
    }
}
