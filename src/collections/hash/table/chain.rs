use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};

use crate::collections::contiguous::Vector;
use crate::util::option::OptionExtension;

/// A key-value pair stored in a [`HashTable`](super::HashTable).
///
/// The key can only be accessed immutably, because changing it would move the entry to another
/// bucket without the table knowing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub(crate) key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub(crate) const fn new(key: K, value: V) -> Entry<K, V> {
        Entry {
            key,
            value,
        }
    }

    pub const fn key(&self) -> &K {
        &self.key
    }

    pub const fn value(&self) -> &V {
        &self.value
    }

    pub const fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consumes the entry, returning its key and value.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Display, V: Display> Display for Entry<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.key, self.value)
    }
}

pub(crate) struct Link<K, V> {
    pub(crate) entry: Entry<K, V>,
    pub(crate) next: Option<Box<Link<K, V>>>,
}

/// A singly linked list of entries, used as a single bucket. New entries are pushed to the front.
pub(crate) struct Chain<K, V> {
    pub(crate) head: Option<Box<Link<K, V>>>,
    pub(crate) len: usize,
}

impl<K, V> Chain<K, V> {
    pub(crate) const fn new() -> Chain<K, V> {
        Chain {
            head: None,
            len: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn iter(&self) -> ChainIter<'_, K, V> {
        ChainIter {
            next: self.head.as_deref(),
        }
    }

    pub(crate) fn iter_mut(&mut self) -> ChainIterMut<'_, K, V> {
        ChainIterMut {
            next: self.head.as_deref_mut(),
        }
    }

    /// Pushes a new entry to the front of the chain, returning a reference to it.
    pub(crate) fn push_front(&mut self, entry: Entry<K, V>) -> &mut Entry<K, V> {
        self.push_front_link(Box::new(Link {
            entry,
            next: None,
        }))
    }

    /// Relinks an existing node at the front of the chain, so that moving an entry between chains
    /// doesn't allocate.
    pub(crate) fn push_front_link(&mut self, mut link: Box<Link<K, V>>) -> &mut Entry<K, V> {
        link.next = self.head.take();
        self.len += 1;
        &mut self.head.insert(link).entry
    }

    pub(crate) fn pop_front_link(&mut self) -> Option<Box<Link<K, V>>> {
        let mut link = self.head.take()?;
        self.head = link.next.take();
        self.len -= 1;
        Some(link)
    }

    pub(crate) fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.iter().find(|entry| entry.key.borrow() == key)
    }

    pub(crate) fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.iter_mut().find(|entry| entry.key.borrow() == key)
    }

    /// Unlinks the entry with a key equal to `key`, returning it if it exists.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.iter().position(|entry| entry.key.borrow() == key)?;

        let mut link = &mut self.head;
        for _ in 0..index {
            // UNREACHABLE: index is less than the length of the chain.
            link = &mut link.as_mut().unreachable().next;
        }

        // UNREACHABLE: As above, the link at index exists.
        let mut removed = link.take().unreachable();
        *link = removed.next.take();
        self.len -= 1;

        Some(removed.entry)
    }

    pub(crate) fn clear(&mut self) {
        while self.pop_front_link().is_some() {}
    }
}

impl<K, V> Default for Chain<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Chain<K, V> {
    fn drop(&mut self) {
        // Dropping the links one at a time avoids recursing once per link.
        self.clear();
    }
}

impl<K: Clone, V: Clone> Clone for Chain<K, V> {
    /// Clones the chain, keeping the order of its entries.
    fn clone(&self) -> Self {
        let entries: Vector<&Entry<K, V>> = self.iter().collect();
        let mut chain = Chain::new();

        for entry in entries.into_iter().rev() {
            chain.push_front(entry.clone());
        }

        chain
    }
}

impl<K, V> IntoIterator for Chain<K, V> {
    type Item = Entry<K, V>;

    type IntoIter = ChainIntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        ChainIntoIter(self)
    }
}

pub(crate) struct ChainIntoIter<K, V>(Chain<K, V>);

impl<K, V> Iterator for ChainIntoIter<K, V> {
    type Item = Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front_link().map(|link| link.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

pub(crate) struct ChainIter<'a, K, V> {
    next: Option<&'a Link<K, V>>,
}

impl<'a, K, V> Iterator for ChainIter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|link| {
            self.next = link.next.as_deref();
            &link.entry
        })
    }
}

pub(crate) struct ChainIterMut<'a, K, V> {
    next: Option<&'a mut Link<K, V>>,
}

impl<'a, K, V> Iterator for ChainIterMut<'a, K, V> {
    type Item = &'a mut Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|link| {
            self.next = link.next.as_deref_mut();
            &mut link.entry
        })
    }
}
