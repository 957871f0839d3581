use std::{
    borrow::Borrow,
    collections::BTreeMap,
    fmt,
    ops::{self, Bound, Range},
};

#[cfg(any(test, feature = "test"))]
use std::{collections::btree_map, mem};

/// A map assigning a value to every key of `K`.
///
/// Keys below the first breakpoint read as the default value, and every
/// other key reads as the value of the greatest breakpoint not above it.
/// Breakpoints are kept canonical: none of them repeats the value in force
/// immediately before it, so equal maps (as functions) compare equal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IntervalMap<K, V> {
    default_value: V,
    breakpoints: BTreeMap<K, V>,
}

impl<K, V: Default> Default for IntervalMap<K, V> {
    fn default() -> Self { Self::new(V::default()) }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntervalMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_map();
        let mut start = None;
        let mut value = &self.default_value;

        for (key, next) in &self.breakpoints {
            match start.replace(key) {
                Some(s) => d.entry(&(s..key), value),
                None => d.entry(&(..key), value),
            };
            value = next;
        }

        match start {
            Some(s) => d.entry(&(s..), value),
            None => d.entry(&(..), value),
        };

        d.finish()
    }
}

impl<K, V> IntervalMap<K, V> {
    /// Construct a map reading as `default_value` for every key
    #[inline]
    #[must_use]
    pub const fn new(default_value: V) -> Self {
        Self {
            default_value,
            breakpoints: BTreeMap::new(),
        }
    }

    /// The value of every key below the first breakpoint
    #[inline]
    #[must_use]
    pub const fn default_value(&self) -> &V { &self.default_value }

    /// The number of stored breakpoints, i.e. one less than the number of
    /// maximal runs of equal values
    #[inline]
    #[must_use]
    pub fn breakpoint_count(&self) -> usize { self.breakpoints.len() }
}

#[cfg(any(test, feature = "test"))]
impl<K, V: PartialEq> IntervalMap<K, V> {
    /// Iterate the stored breakpoints in key order
    #[must_use]
    pub fn breakpoints(&self) -> btree_map::Iter<'_, K, V> { self.breakpoints.iter() }

    /// Panic if any breakpoint repeats the value in force before it
    pub fn assert_invariants(&self) {
        let mut last = &self.default_value;

        for val in self.breakpoints.values() {
            assert!(
                val != mem::replace(&mut last, val),
                "Redundant breakpoint in interval map"
            );
        }
    }
}

impl<K: Ord, V> IntervalMap<K, V> {
    /// Return the value associated with `key`
    #[inline]
    #[must_use]
    pub fn lookup<Q: ?Sized + Ord>(&self, key: &Q) -> &V
    where K: Borrow<Q> {
        self.breakpoints
            .range((Bound::Unbounded, Bound::Included(key)))
            .next_back()
            .map_or(&self.default_value, |(_, v)| v)
    }

    // The value in force for keys immediately below `key`
    fn value_before<Q: ?Sized + Ord>(&self, key: &Q) -> &V
    where K: Borrow<Q> {
        self.breakpoints
            .range((Bound::Unbounded, Bound::Excluded(key)))
            .next_back()
            .map_or(&self.default_value, |(_, v)| v)
    }
}

impl<K: Clone + Ord, V: Clone + PartialEq> IntervalMap<K, V> {
    /// Construct a map reading as `default_value`, then assign each range
    /// from `it` in order
    pub fn from_iter_with_default<I: IntoIterator<Item = (Range<K>, V)>>(
        it: I,
        default_value: V,
    ) -> Self {
        let mut me = Self::new(default_value);
        me.extend(it);
        me
    }

    fn assign_internal(&mut self, key_begin: K, key_end: K, value: V, over: &mut Vec<K>) {
        if key_begin >= key_end {
            tracing::trace!("Ignoring empty interval");
            return;
        }

        let open = *self.value_before(&key_begin) != value;
        let after = self.lookup(&key_end).clone();
        let close = after != value;

        debug_assert!(over.is_empty());
        over.extend(
            self.breakpoints
                .range(&key_begin..&key_end)
                .map(|(k, _)| k.clone()),
        );
        let removed = over.len();

        for key in over.drain(..) {
            let ok = self.breakpoints.remove(&key).is_some();
            debug_assert!(ok);
        }

        if open {
            self.breakpoints.insert(key_begin.clone(), value);
        }

        if close {
            self.breakpoints.insert(key_end.clone(), after);
        }

        self.drop_redundant(&key_begin);
        self.drop_redundant(&key_end);

        tracing::trace!(
            removed,
            breakpoints = self.breakpoints.len(),
            "Assigned interval"
        );
    }

    // Remove the breakpoint at `key` if it matches the value before it
    fn drop_redundant(&mut self, key: &K) {
        let Some(value) = self.breakpoints.get(key) else {
            return;
        };

        if self.value_before(key) == value {
            tracing::trace!("Dropping redundant breakpoint");
            self.breakpoints.remove(key);
        }
    }

    /// Assign `value` to every key in `key_begin..key_end`, leaving all
    /// other keys untouched.
    ///
    /// If `key_begin` is not less than `key_end` the interval is empty and
    /// the map is not modified.
    #[inline]
    pub fn assign(&mut self, key_begin: K, key_end: K, value: V) {
        self.assign_internal(key_begin, key_end, value, &mut vec![]);

        #[cfg(any(test, feature = "test"))]
        self.assert_invariants();
    }
}

impl<K: Borrow<Q> + Ord, Q: ?Sized + Ord, V> ops::Index<&Q> for IntervalMap<K, V> {
    type Output = V;

    #[inline]
    fn index(&self, key: &Q) -> &V { self.lookup(key) }
}

impl<K: Clone + Ord, V: Clone + PartialEq> Extend<(Range<K>, V)> for IntervalMap<K, V> {
    fn extend<I: IntoIterator<Item = (Range<K>, V)>>(&mut self, it: I) {
        let mut over = vec![];

        for (Range { start, end }, value) in it {
            self.assign_internal(start, end, value, &mut over);
        }

        #[cfg(any(test, feature = "test"))]
        self.assert_invariants();
    }
}

impl<K: Clone + Ord, V: Clone + Default + PartialEq> FromIterator<(Range<K>, V)>
    for IntervalMap<K, V>
{
    fn from_iter<I: IntoIterator<Item = (Range<K>, V)>>(it: I) -> Self {
        Self::from_iter_with_default(it, V::default())
    }
}
