use std::collections::hash_set;
use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::hash::Hash;

/// A set of distinct values, each within `[lower, upper]`, holding at most
/// `capacity` values.
///
/// Bounds and capacity are only checked when a value is inserted. Changing
/// them later never evicts values that are already stored.
#[derive(Debug, Clone)]
pub struct BoundedSet<V> {
    lower: V,
    upper: V,
    capacity: usize,
    members: HashSet<V>,
}

/// Why a value was not inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Full,
    BelowLower,
    AboveUpper,
    Duplicate,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Full => "set is full",
            Self::BelowLower => "below lower bound",
            Self::AboveUpper => "above upper bound",
            Self::Duplicate => "already present",
        };
        f.write_str(s)
    }
}

/// Outcome of seeding a set with initial values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seeded<V> {
    pub accepted: Vec<V>,
    pub rejected: Vec<(V, Rejection)>,
}

impl<V> Seeded<V> {
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl<V> Default for Seeded<V> {
    fn default() -> Self {
        Self {
            accepted: vec![],
            rejected: vec![],
        }
    }
}

impl<V> BoundedSet<V>
where
    V: Ord + Hash + Clone,
{
    pub fn new(lower: V, upper: V, capacity: usize) -> Self {
        Self {
            lower,
            upper,
            capacity,
            members: HashSet::with_capacity(capacity),
        }
    }

    /// Creates a set and inserts `initial` in order. Values that cannot be
    /// inserted are skipped and reported in the returned [`Seeded`].
    pub fn with_values<I>(lower: V, upper: V, capacity: usize, initial: I) -> (Self, Seeded<V>)
    where
        I: IntoIterator<Item = V>,
    {
        let mut set = Self::new(lower, upper, capacity);
        let seeded = set.extend_checked(initial);
        (set, seeded)
    }

    /// Inserts every value of `values`, skipping the rejected ones.
    pub fn extend_checked<I>(&mut self, values: I) -> Seeded<V>
    where
        I: IntoIterator<Item = V>,
    {
        let mut seeded = Seeded::default();
        for value in values {
            match self.try_insert(value.clone()) {
                Ok(()) => seeded.accepted.push(value),
                Err(why) => seeded.rejected.push((value, why)),
            }
        }

        seeded
    }

    /// Checks are done in order: capacity, lower bound, upper bound, then
    /// duplicates.
    pub fn try_insert(&mut self, value: V) -> Result<(), Rejection> {
        if self.members.len() >= self.capacity {
            return Err(Rejection::Full);
        }
        if value < self.lower {
            return Err(Rejection::BelowLower);
        }
        if value > self.upper {
            return Err(Rejection::AboveUpper);
        }
        if !self.members.insert(value) {
            return Err(Rejection::Duplicate);
        }

        Ok(())
    }

    pub fn insert(&mut self, value: V) -> bool {
        self.try_insert(value).is_ok()
    }

    pub fn remove(&mut self, value: &V) -> bool {
        self.members.remove(value)
    }

    /// Removes `old` and inserts `new` in its place.
    ///
    /// Returns `false` without any change if `old` is absent. If `new` is
    /// rejected, `old` stays removed and `false` is returned, so the call
    /// degrades to a plain removal. Use [`Self::replace_or_restore`] to keep
    /// `old` in that case.
    pub fn replace(&mut self, old: &V, new: V) -> bool {
        if self.remove(old) {
            return self.insert(new);
        }
        false
    }

    /// Like [`Self::replace`], but a rejected `new` puts `old` back.
    pub fn replace_or_restore(&mut self, old: &V, new: V) -> bool {
        if !self.members.remove(old) {
            return false;
        }
        if self.insert(new) {
            return true;
        }

        // bypass the checks: old was accepted once, bounds may have moved since
        self.members.insert(old.clone());
        false
    }

    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    pub fn set_lower(&mut self, lower: V) {
        self.lower = lower;
    }

    pub fn set_upper(&mut self, upper: V) {
        self.upper = upper;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn lower(&self) -> &V {
        &self.lower
    }

    pub fn upper(&self) -> &V {
        &self.upper
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    pub fn contains(&self, value: &V) -> bool {
        self.members.contains(value)
    }

    /// Snapshot of the members in iteration order, `None` if there are none.
    pub fn to_vec(&self) -> Option<Vec<V>> {
        if self.is_empty() {
            return None;
        }

        Some(self.members.iter().cloned().collect())
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.members.iter(),
        }
    }
}

pub struct Iter<'a, V> {
    inner: hash_set::Iter<'a, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a BoundedSet<V>
where
    V: Ord + Hash + Clone,
{
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
