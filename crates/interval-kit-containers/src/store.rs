// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Ordered Segment Store
//!
//! [`SegmentStore`] is the shared backing structure of the interval
//! containers: a `BTreeMap` whose keys are ordered by *exclusive
//! less-than*. Two intervals compare equal under that order exactly when
//! they share at least one element, so as long as the stored keys are
//! pairwise disjoint the order is total and point lookups are ordinary
//! tree searches.
//!
//! The tree is only ever searched with *point* probes: a point collides
//! with at most one stored segment, so the search never sees two keys
//! that both compare equal to the probe. An interval query seeks to the
//! point at the interval's lower edge and walks forward to collect the
//! collision run.
//!
//! The store never rewrites a key in place. Mutations that reshape
//! segments take the colliding run out ([`SegmentStore::take_overlapping`])
//! and reinsert the rewritten pieces.
//!
//! Invariants (always held):
//!    - stored intervals are non-empty
//!    - stored intervals are pairwise disjoint
//!    - discrete intervals are stored in closed canonical form

use interval_kit_core::{Domain, Interval};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Key wrapper imposing the exclusive less-than order.
///
/// `Ord` here is only total over families of pairwise disjoint intervals
/// plus a single probe; the store upholds that precondition.
#[derive(Clone, Debug)]
pub(crate) struct StoreKey<T>(pub(crate) Interval<T>);

impl<T: Domain> Ord for StoreKey<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        if self.0.exclusive_less(&other.0) {
            Ordering::Less
        } else if other.0.exclusive_less(&self.0) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<T: Domain> PartialOrd for StoreKey<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Domain> PartialEq for StoreKey<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Domain> Eq for StoreKey<T> {}

/// A sorted collection of disjoint, non-empty interval segments with
/// attached values.
#[derive(Clone, Debug)]
pub struct SegmentStore<T, V> {
    map: BTreeMap<StoreKey<T>, V>,
}

impl<T, V> Default for SegmentStore<T, V> {
    #[inline]
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }
}

impl<T: Domain, V> SegmentStore<T, V> {
    /// Creates a new, empty store.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no segment is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Removes all segments.
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Inserts a segment that must be non-empty and disjoint from every
    /// stored segment.
    #[inline]
    pub fn insert(&mut self, interval: Interval<T>, value: V) {
        debug_assert!(!interval.is_empty());
        debug_assert!(self.overlapping(&interval).next().is_none());
        self.map.insert(StoreKey(interval), value);
    }

    /// Removes the segment whose interval is structurally identical to
    /// `interval`, returning its value.
    ///
    /// A colliding but different segment is left untouched.
    pub fn remove_exact(&mut self, interval: &Interval<T>) -> Option<V> {
        let probe = StoreKey(interval.clone());
        match self.map.get_key_value(&probe) {
            Some((key, _)) if key.0 == *interval => self.map.remove(&probe),
            _ => None,
        }
    }

    /// Finds the segment containing `point`.
    pub fn find_point(&self, point: &T) -> Option<(&Interval<T>, &V)> {
        let probe = StoreKey(Interval::point(point.clone()));
        self.map
            .get_key_value(&probe)
            .filter(|(key, _)| key.0.contains(point))
            .map(|(key, value)| (&key.0, value))
    }

    /// Finds the first stored segment colliding with `interval`.
    #[inline]
    pub fn find_first(&self, interval: &Interval<T>) -> Option<(&Interval<T>, &V)> {
        self.overlapping(interval).next()
    }

    /// Iterates the run of stored segments colliding with `interval`, in
    /// ascending order.
    ///
    /// Seeks to the point at `interval`'s lower edge and walks forward
    /// until the stored segments lie past `interval`'s end.
    pub fn overlapping(&self, interval: &Interval<T>) -> impl Iterator<Item = (&Interval<T>, &V)> {
        let stop = interval.clone();
        let keep = interval.clone();
        self.map
            .range((Bound::Included(Self::start_probe(interval)), Bound::Unbounded))
            .take_while(move |(key, _)| !stop.exclusive_less(&key.0))
            .filter(move |(key, _)| key.0.intersects(&keep))
            .map(|(key, value)| (&key.0, value))
    }

    /// Removes and returns the run of stored segments colliding with
    /// `interval`, in ascending order.
    pub fn take_overlapping(&mut self, interval: &Interval<T>) -> Vec<(Interval<T>, V)> {
        let keys: Vec<StoreKey<T>> = self
            .map
            .range((Bound::Included(Self::start_probe(interval)), Bound::Unbounded))
            .take_while(|(key, _)| !interval.exclusive_less(&key.0))
            .filter(|(key, _)| key.0.intersects(interval))
            .map(|(key, _)| key.clone())
            .collect();
        let mut run = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some((key, value)) = self.map.remove_entry(&key) {
                run.push((key.0, value));
            }
        }
        run
    }

    /// The last stored segment lying entirely before `interval`.
    pub fn neighbor_below(&self, interval: &Interval<T>) -> Option<(&Interval<T>, &V)> {
        let probe = Self::start_probe(interval);
        // A segment containing the probe point can still lie entirely
        // before `interval` when the meeting bounds are open.
        if let Some((key, value)) = self.map.get_key_value(&probe) {
            if key.0.exclusive_less(interval) {
                return Some((&key.0, value));
            }
        }
        self.map
            .range((Bound::Unbounded, Bound::Excluded(probe)))
            .next_back()
            .map(|(key, value)| (&key.0, value))
    }

    /// The first stored segment lying entirely after `interval`.
    pub fn neighbor_above(&self, interval: &Interval<T>) -> Option<(&Interval<T>, &V)> {
        let probe = Self::end_probe(interval);
        // Symmetric to `neighbor_below`: the segment containing the end
        // point can lie entirely after `interval`.
        if let Some((key, value)) = self.map.get_key_value(&probe) {
            if interval.exclusive_less(&key.0) {
                return Some((&key.0, value));
            }
        }
        self.map
            .range((Bound::Excluded(probe), Bound::Unbounded))
            .next()
            .map(|(key, value)| (&key.0, value))
    }

    /// A point key at the lower edge of `interval`. Collides with at
    /// most one stored segment, so tree searches stay consistent.
    fn start_probe(interval: &Interval<T>) -> StoreKey<T> {
        let point = if T::DISCRETE {
            match interval.first() {
                Some(first) => Interval::point(first),
                None => Interval::empty(),
            }
        } else {
            Interval::point(interval.lower().clone())
        };
        StoreKey(point)
    }

    /// A point key at the upper edge of `interval`.
    fn end_probe(interval: &Interval<T>) -> StoreKey<T> {
        let point = if T::DISCRETE {
            match interval.last() {
                Some(last) => Interval::point(last),
                None => Interval::empty(),
            }
        } else {
            Interval::point(interval.upper().clone())
        };
        StoreKey(point)
    }

    /// Iterates all segments in ascending order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Interval<T>, &V)> {
        self.map.iter().map(|(key, value)| (&key.0, value))
    }

    /// The first stored segment.
    #[inline]
    pub fn first(&self) -> Option<(&Interval<T>, &V)> {
        self.map
            .first_key_value()
            .map(|(key, value)| (&key.0, value))
    }

    /// The last stored segment.
    #[inline]
    pub fn last(&self) -> Option<(&Interval<T>, &V)> {
        self.map
            .last_key_value()
            .map(|(key, value)| (&key.0, value))
    }

    /// Mutable iteration over the stored values.
    #[inline]
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.map.values_mut()
    }

    /// Checks the store invariants. Intended for `debug_assert!` use.
    pub fn invariants_held(&self) -> bool {
        let mut previous: Option<&Interval<T>> = None;
        for (interval, _) in self.iter() {
            if interval.is_empty() {
                return false;
            }
            if T::DISCRETE && *interval != interval.normalized() {
                return false;
            }
            if let Some(prev) = previous {
                if !prev.exclusive_less(interval) {
                    return false;
                }
            }
            previous = Some(interval);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(a: i64, b: i64) -> Interval<i64> {
        Interval::closed(a, b)
    }

    fn store_of(segments: &[(i64, i64)]) -> SegmentStore<i64, u32> {
        let mut store = SegmentStore::new();
        for (i, &(a, b)) in segments.iter().enumerate() {
            store.insert(iv(a, b), i as u32);
        }
        store
    }

    #[test]
    fn test_insert_keeps_sorted_disjoint_order() {
        let store = store_of(&[(10, 20), (1, 5), (30, 40)]);
        let keys: Vec<_> = store.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec![iv(1, 5), iv(10, 20), iv(30, 40)]);
        assert!(store.invariants_held());
    }

    #[test]
    fn test_find_point_hits_only_covering_segment() {
        let store = store_of(&[(1, 5), (10, 20)]);
        assert_eq!(store.find_point(&3).map(|(k, _)| k.clone()), Some(iv(1, 5)));
        assert_eq!(store.find_point(&10).map(|(k, _)| k.clone()), Some(iv(10, 20)));
        assert!(store.find_point(&7).is_none());
        assert!(store.find_point(&21).is_none());
    }

    #[test]
    fn test_overlapping_yields_exact_collision_run() {
        let store = store_of(&[(1, 5), (10, 20), (30, 40), (50, 60)]);
        let run: Vec<_> = store.overlapping(&iv(15, 35)).map(|(k, _)| k.clone()).collect();
        assert_eq!(run, vec![iv(10, 20), iv(30, 40)]);
        assert_eq!(store.overlapping(&iv(6, 9)).count(), 0);
    }

    #[test]
    fn test_overlapping_with_empty_probe_is_empty() {
        let store = store_of(&[(1, 5)]);
        assert_eq!(store.overlapping(&Interval::empty()).count(), 0);
    }

    #[test]
    fn test_take_overlapping_removes_the_run() {
        let mut store = store_of(&[(1, 5), (10, 20), (30, 40)]);
        let run = store.take_overlapping(&iv(4, 12));
        let intervals: Vec<_> = run.into_iter().map(|(k, _)| k).collect();
        assert_eq!(intervals, vec![iv(1, 5), iv(10, 20)]);
        assert_eq!(store.len(), 1);
        assert!(store.invariants_held());
    }

    #[test]
    fn test_remove_exact_ignores_colliding_but_different() {
        let mut store = store_of(&[(1, 5)]);
        assert!(store.remove_exact(&iv(1, 4)).is_none());
        assert_eq!(store.len(), 1);
        assert!(store.remove_exact(&iv(1, 5)).is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn test_overlapping_run_spans_many_segments() {
        let store = store_of(&[(1, 2), (4, 5), (7, 8), (10, 11), (13, 14)]);
        let run: Vec<_> = store.overlapping(&iv(4, 11)).map(|(k, _)| k.clone()).collect();
        assert_eq!(run, vec![iv(4, 5), iv(7, 8), iv(10, 11)]);

        let mut store = store;
        let taken: Vec<_> = store
            .take_overlapping(&iv(0, 20))
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(taken, vec![iv(1, 2), iv(4, 5), iv(7, 8), iv(10, 11), iv(13, 14)]);
        assert!(store.is_empty());
    }

    #[test]
    fn test_neighbors_across_touching_continuous_bounds() {
        let mut below: SegmentStore<String, u32> = SegmentStore::new();
        below.insert(Interval::closed("a".into(), "m".into()), 0);
        let query = Interval::left_open("m".to_string(), "z".to_string());
        assert_eq!(
            below.neighbor_below(&query).map(|(k, _)| k.clone()),
            Some(Interval::closed("a".into(), "m".into()))
        );

        let mut above: SegmentStore<String, u32> = SegmentStore::new();
        above.insert(Interval::closed("m".into(), "z".into()), 0);
        let query = Interval::right_open("a".to_string(), "m".to_string());
        assert_eq!(
            above.neighbor_above(&query).map(|(k, _)| k.clone()),
            Some(Interval::closed("m".into(), "z".into()))
        );
    }

    #[test]
    fn test_neighbors_skip_colliding_segments() {
        let store = store_of(&[(1, 5), (10, 20), (30, 40)]);
        assert_eq!(
            store.neighbor_below(&iv(10, 20)).map(|(k, _)| k.clone()),
            Some(iv(1, 5))
        );
        assert_eq!(
            store.neighbor_above(&iv(8, 22)).map(|(k, _)| k.clone()),
            Some(iv(30, 40))
        );
        assert!(store.neighbor_below(&iv(0, 0)).is_none());
        assert!(store.neighbor_above(&iv(41, 50)).is_none());
    }
}
