//! Dense vector + position index implementation.

use crate::error::RegistryError;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// An associative store that can also be enumerated.
///
/// `entries` holds members densely; `index` maps each key to its slot in
/// `entries`. The two are kept in lock-step by every mutating method.
#[derive(Clone, Debug)]
pub struct EnumerableRegistry<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> EnumerableRegistry<K, V>
where
    K: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Add a new member at the end of the iteration order.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), RegistryError> {
        if self.index.contains_key(&key) {
            return Err(RegistryError::DuplicateKey);
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        Ok(())
    }

    /// Remove a member, returning its value.
    ///
    /// The last member is moved into the vacated slot.
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V, RegistryError>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        let position = self.index.remove(key).ok_or(RegistryError::KeyNotFound)?;
        let (_, value) = self.entries.swap_remove(position);
        if let Some((moved, _)) = self.entries.get(position) {
            // `moved` was the last entry; point its index at the new slot.
            if let Some(slot) = self.index.get_mut::<K>(moved) {
                *slot = position;
            }
        }
        Ok(value)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        let position = *self.index.get(key)?;
        self.entries.get(position).map(|(_, v)| v)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        let position = *self.index.get(key)?;
        self.entries.get_mut(position).map(|(_, v)| v)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.index.contains_key(key)
    }

    /// Member at `position` in the current internal order.
    pub fn get_index(&self, position: usize) -> Option<(&K, &V)> {
        self.entries.get(position).map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrowing iterator over members in current internal order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Snapshot of the current keys.
    pub fn keys(&self) -> Snapshot<K> {
        Snapshot::new(self.entries.iter().map(|(k, _)| k.clone()).collect())
    }

    /// Snapshot of the current values.
    pub fn values(&self) -> Snapshot<V>
    where
        V: Clone,
    {
        Snapshot::new(self.entries.iter().map(|(_, v)| v.clone()).collect())
    }
}

impl<K, V> Default for EnumerableRegistry<K, V>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Owned copy of registry members taken at a point in time.
///
/// Later mutations of the registry are not reflected. The sequence can be
/// walked any number of times through [`Snapshot::iter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot<T> {
    items: Vec<T>,
}

impl<T> Snapshot<T> {
    fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> IntoIterator for Snapshot<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Snapshot<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
