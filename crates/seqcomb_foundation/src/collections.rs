//! Persistent collections with structural sharing.
//!
//! These are thin wrappers around the `im` crate's persistent data structures.
//! Cloning is O(1), which lets every traversal own a snapshot of its input
//! instead of borrowing it.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

/// Persistent vector with structural sharing.
///
/// Cloning is O(1), so a traversal can consume its own snapshot while the
/// original stays intact.
#[derive(Clone, Default)]
pub struct SeqVec<T>(im::Vector<T>)
where
    T: Clone;

impl<T: Clone> SeqVec<T> {
    /// Creates an empty vector.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the vector is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for SeqVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + PartialEq> PartialEq for SeqVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Clone + Eq> Eq for SeqVec<T> {}

impl<T: Clone + Hash> Hash for SeqVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Clone> FromIterator<T> for SeqVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl<T: Clone> IntoIterator for SeqVec<T> {
    type Item = T;
    type IntoIter = im::vector::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a SeqVec<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Persistent hash set with structural sharing.
///
/// Iteration order is unspecified but stable for a given set.
#[derive(Clone, Default)]
pub struct SeqSet<T>(im::HashSet<T>)
where
    T: Clone + Eq + Hash;

impl<T: Clone + Eq + Hash> SeqSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self(im::HashSet::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T: Clone + Eq + Hash + fmt::Debug> fmt::Debug for SeqSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Clone + Eq + Hash> PartialEq for SeqSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Clone + Eq + Hash> Eq for SeqSet<T> {}

impl<T: Clone + Eq + Hash> Hash for SeqSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal sets may iterate in different orders, so combine the element
        // hashes with a commutative operation.
        let combined = self.iter().fold(0u64, |acc, item| {
            let mut hasher = DefaultHasher::new();
            item.hash(&mut hasher);
            acc.wrapping_add(hasher.finish())
        });
        self.len().hash(state);
        combined.hash(state);
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for SeqSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(im::HashSet::from_iter(iter))
    }
}

impl<T: Clone + Eq + Hash> IntoIterator for SeqSet<T> {
    type Item = T;
    type IntoIter = im::hashset::ConsumingIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
