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

//! # Interval Sets
//!
//! [`SegmentSet`] stores a set of domain elements as disjoint interval
//! segments. The combining style `S` decides how segment borders behave
//! under mutation:
//!
//! - [`IntervalSet`] (joining) merges overlapping *and* touching
//!   segments into their hull,
//! - [`SeparateIntervalSet`] merges only on overlap and keeps touching
//!   segments apart,
//! - [`SplitIntervalSet`] preserves every border of every added
//!   interval.
//!
//! All three represent the same element sets; they differ only in
//! segmentation. Equality and ordering compare element content, so a
//! joined and a split rendition of the same elements compare equal.

use crate::compare::{inclusion_compare, is_element_equal, InclusionRelation};
use crate::store::SegmentStore;
use crate::style::{CombiningStyle, Joining, Separating, Splitting, StyleKind};
use interval_kit_core::{Cardinality, Domain, Interval};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{
    AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign,
};
use tracing::trace;

/// A set of domain elements stored as disjoint interval segments.
///
/// # Examples
///
/// ```
/// use interval_kit_containers::set::IntervalSet;
/// use interval_kit_core::Interval;
///
/// let mut reserved: IntervalSet<i64> = IntervalSet::new();
/// reserved.add(&Interval::closed(1, 9));
/// reserved.add(&Interval::closed(7, 10));
/// reserved.add(&Interval::closed(8, 11));
/// reserved.add(&Interval::closed(90, 120));
///
/// assert_eq!(reserved.find(&2), Some(&Interval::closed(1, 11)));
/// assert_eq!(reserved.find(&100), Some(&Interval::closed(90, 120)));
/// ```
pub struct SegmentSet<T, S = Joining> {
    store: SegmentStore<T, ()>,
    _style: PhantomData<S>,
}

/// A joining interval set: overlapping and touching segments are merged.
pub type IntervalSet<T> = SegmentSet<T, Joining>;

/// A separating interval set: touching segments stay apart.
pub type SeparateIntervalSet<T> = SegmentSet<T, Separating>;

/// A splitting interval set: every inserted border is preserved.
pub type SplitIntervalSet<T> = SegmentSet<T, Splitting>;

impl<T: Domain, S> SegmentSet<T, S> {
    /// Creates a new, empty set.
    #[inline]
    pub fn new() -> Self {
        Self {
            store: SegmentStore::new(),
            _style: PhantomData,
        }
    }

    /// Returns the number of stored segments (the iterative size).
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Alias of [`SegmentSet::len`].
    #[inline]
    pub fn iterative_size(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Removes all segments.
    #[inline]
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Iterates the stored segments in ascending order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Interval<T>> {
        self.store.iter().map(|(interval, ())| interval)
    }

    /// The segment containing `point`, if any.
    #[inline]
    pub fn find(&self, point: &T) -> Option<&Interval<T>> {
        self.store.find_point(point).map(|(interval, ())| interval)
    }

    /// The first stored segment overlapping `interval`, if any.
    #[inline]
    pub fn find_interval(&self, interval: &Interval<T>) -> Option<&Interval<T>> {
        self.store
            .find_first(&interval.normalized())
            .map(|(found, ())| found)
    }

    /// Returns `true` if `point` is an element of the set.
    #[inline]
    pub fn contains_point(&self, point: &T) -> bool {
        self.store.find_point(point).is_some()
    }

    /// Returns `true` if every element of `interval` is in the set.
    pub fn contains_interval(&self, interval: &Interval<T>) -> bool {
        let probe = interval.normalized();
        if probe.is_empty() {
            return true;
        }
        let mut cursor = probe.clone();
        for (segment, ()) in self.store.overlapping(&probe) {
            if !cursor.right_subtract(segment).is_empty() {
                return false;
            }
            cursor = cursor.left_subtract(segment);
        }
        cursor.is_empty()
    }

    /// Returns `true` if `interval` shares an element with the set.
    pub fn intersects_interval(&self, interval: &Interval<T>) -> bool {
        let probe = interval.normalized();
        !probe.is_empty() && self.store.find_first(&probe).is_some()
    }

    /// The number of elements in the set.
    pub fn cardinality(&self) -> Cardinality {
        self.store
            .iter()
            .map(|(interval, ())| interval.cardinality())
            .sum()
    }

    /// The hull of all stored segments.
    pub fn span(&self) -> Interval<T> {
        match (self.store.first(), self.store.last()) {
            (Some((first, ())), Some((last, ()))) => first.hull(last),
            _ => Interval::empty(),
        }
    }

    /// The uncovered intervals between consecutive segments, not
    /// reaching beyond the span.
    pub fn gaps(&self) -> Vec<Interval<T>> {
        let mut gaps = Vec::new();
        let mut previous: Option<&Interval<T>> = None;
        for (segment, ()) in self.store.iter() {
            if let Some(before) = previous {
                let gap = before.inner_complement(segment).normalized();
                if !gap.is_empty() {
                    gaps.push(gap);
                }
            }
            previous = Some(segment);
        }
        gaps
    }
}

impl<T: Domain, S: CombiningStyle> SegmentSet<T, S> {
    /// Adds the elements of `interval` to the set.
    pub fn add(&mut self, interval: &Interval<T>) {
        let addend = interval.normalized();
        if addend.is_empty() {
            return;
        }
        trace!(interval = ?addend, "segment set add");
        match S::KIND {
            StyleKind::Joining => self.add_hulling(addend),
            StyleKind::Separating => self.add_separating(addend),
            StyleKind::Splitting => self.add_splitting(addend),
        }
        debug_assert!(self.store.invariants_held());
    }

    /// Removes the elements of `interval` from the set. Segments
    /// reaching beyond `interval` keep their residual parts.
    pub fn subtract(&mut self, interval: &Interval<T>) {
        let probe = interval.normalized();
        if probe.is_empty() {
            return;
        }
        trace!(interval = ?probe, "segment set subtract");
        let run = self.store.take_overlapping(&probe);
        for (segment, ()) in run {
            let left = segment.right_subtract(&probe).normalized();
            let right = segment.left_subtract(&probe).normalized();
            if !left.is_empty() {
                self.store.insert(left, ());
            }
            if !right.is_empty() {
                self.store.insert(right, ());
            }
        }
        debug_assert!(self.store.invariants_held());
    }

    /// Symmetric difference with a single interval: elements of
    /// `interval` not in the set are added, common elements are removed.
    pub fn flip(&mut self, interval: &Interval<T>) {
        let addend = interval.normalized();
        if addend.is_empty() {
            return;
        }
        trace!(interval = ?addend, "segment set flip");
        let run = self.store.take_overlapping(&addend);
        let mut pieces: Vec<Interval<T>> = Vec::with_capacity(run.len() + 2);
        let mut cursor = addend;
        for (segment, ()) in run {
            let gap = cursor.right_subtract(&segment);
            if !gap.is_empty() {
                pieces.push(gap.normalized());
            }
            let left = segment.right_subtract(&cursor);
            if !left.is_empty() {
                pieces.push(left.normalized());
            }
            let right = segment.left_subtract(&cursor);
            if !right.is_empty() {
                pieces.push(right.normalized());
            }
            cursor = cursor.left_subtract(&segment);
        }
        if !cursor.is_empty() {
            pieces.push(cursor.normalized());
        }
        self.splice(pieces);
    }

    /// Adds every segment of `other`.
    pub fn add_set(&mut self, other: &Self) {
        for interval in other.iter() {
            self.add(interval);
        }
    }

    /// Subtracts every segment of `other`.
    pub fn subtract_set(&mut self, other: &Self) {
        for interval in other.iter() {
            self.subtract(interval);
        }
    }

    /// Symmetric difference with a whole set.
    pub fn flip_set(&mut self, other: &Self) {
        for interval in other.iter() {
            self.flip(interval);
        }
    }

    /// The elements common to both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut out = Self::new();
        for o_interval in other.iter() {
            for (s_interval, ()) in self.store.overlapping(o_interval) {
                let common = s_interval.intersection(o_interval).normalized();
                debug_assert!(!common.is_empty());
                out.add(&common);
            }
        }
        out
    }

    /// Restricts the set to a window.
    pub fn intersect_interval(&self, window: &Interval<T>) -> Self {
        let window = window.normalized();
        let mut out = Self::new();
        if window.is_empty() {
            return out;
        }
        for (segment, ()) in self.store.overlapping(&window) {
            out.add(&segment.intersection(&window).normalized());
        }
        out
    }

    /// Returns `true` if every element of `other` is in `self`.
    pub fn contains_set(&self, other: &Self) -> bool {
        inclusion_compare(other.store.iter(), self.store.iter(), |(), ()| {
            InclusionRelation::Equal
        })
        .is_within()
    }

    /// Returns `true` if the two sets share an element.
    pub fn intersects_set(&self, other: &Self) -> bool {
        other
            .iter()
            .any(|interval| self.intersects_interval(interval))
    }

    /// Hulls the addend with everything it overlaps or touches.
    fn add_hulling(&mut self, addend: Interval<T>) {
        let mut hull = addend;
        for (segment, ()) in self.store.take_overlapping(&hull) {
            hull = hull.hull(&segment);
        }
        let below = match self.store.neighbor_below(&hull) {
            Some((neighbor, ())) if neighbor.touches(&hull) => Some(neighbor.clone()),
            _ => None,
        };
        if let Some(neighbor) = below {
            self.store.remove_exact(&neighbor);
            hull = neighbor.hull(&hull);
        }
        let above = match self.store.neighbor_above(&hull) {
            Some((neighbor, ())) if hull.touches(neighbor) => Some(neighbor.clone()),
            _ => None,
        };
        if let Some(neighbor) = above {
            self.store.remove_exact(&neighbor);
            hull = hull.hull(&neighbor);
        }
        self.store.insert(hull, ());
    }

    /// Hulls the addend with the overlapped run only; touching segments
    /// stay apart.
    fn add_separating(&mut self, addend: Interval<T>) {
        let mut hull = addend;
        for (segment, ()) in self.store.take_overlapping(&hull) {
            hull = hull.hull(&segment);
        }
        self.store.insert(hull, ());
    }

    /// Keeps every border: stored segments are cut at addend borders and
    /// the addend is cut at stored borders.
    fn add_splitting(&mut self, addend: Interval<T>) {
        let run = self.store.take_overlapping(&addend);
        let mut cursor = addend;
        for (segment, ()) in run {
            let gap = cursor.right_subtract(&segment);
            if !gap.is_empty() {
                self.store.insert(gap.normalized(), ());
            }
            let left = segment.right_subtract(&cursor);
            if !left.is_empty() {
                self.store.insert(left.normalized(), ());
            }
            let common = segment.intersection(&cursor);
            debug_assert!(!common.is_empty());
            self.store.insert(common.normalized(), ());
            let right = segment.left_subtract(&cursor);
            if !right.is_empty() {
                self.store.insert(right.normalized(), ());
            }
            cursor = cursor.left_subtract(&segment);
        }
        if !cursor.is_empty() {
            self.store.insert(cursor.normalized(), ());
        }
    }

    /// Reinserts rewritten pieces, joining touching ones in the run and
    /// at its borders under the joining style.
    fn splice(&mut self, pieces: Vec<Interval<T>>) {
        if pieces.is_empty() {
            debug_assert!(self.store.invariants_held());
            return;
        }
        let mut pieces = pieces;
        if matches!(S::KIND, StyleKind::Joining) {
            let mut merged: Vec<Interval<T>> = Vec::with_capacity(pieces.len());
            for interval in pieces {
                if let Some(last) = merged.last_mut() {
                    if last.touches(&interval) {
                        *last = last.hull(&interval);
                        continue;
                    }
                }
                merged.push(interval);
            }
            pieces = merged;

            let below = match pieces.first() {
                Some(first) => match self.store.neighbor_below(first) {
                    Some((neighbor, ())) if neighbor.touches(first) => Some(neighbor.clone()),
                    _ => None,
                },
                None => None,
            };
            if let Some(neighbor) = below {
                self.store.remove_exact(&neighbor);
                pieces[0] = neighbor.hull(&pieces[0]);
            }
            let above = match pieces.last() {
                Some(last) => match self.store.neighbor_above(last) {
                    Some((neighbor, ())) if last.touches(neighbor) => Some(neighbor.clone()),
                    _ => None,
                },
                None => None,
            };
            if let Some(neighbor) = above {
                self.store.remove_exact(&neighbor);
                let last = pieces.len() - 1;
                pieces[last] = pieces[last].hull(&neighbor);
            }
        }
        for interval in pieces {
            self.store.insert(interval, ());
        }
        debug_assert!(self.store.invariants_held());
    }
}

impl<T: Domain, S> Default for SegmentSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Domain, S> Clone for SegmentSet<T, S> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _style: PhantomData,
        }
    }
}

impl<T: Domain + fmt::Debug, S> fmt::Debug for SegmentSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Domain + fmt::Display, S> fmt::Display for SegmentSet<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, interval) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}

impl<T: Domain, S1, S2> PartialEq<SegmentSet<T, S2>> for SegmentSet<T, S1> {
    /// Sets are compared over their element content, so differently
    /// segmented but element-equal sets compare equal.
    fn eq(&self, other: &SegmentSet<T, S2>) -> bool {
        is_element_equal(self.store.iter(), other.store.iter())
    }
}

impl<T: Domain, S> Eq for SegmentSet<T, S> {}

impl<T: Domain, S1, S2> PartialOrd<SegmentSet<T, S2>> for SegmentSet<T, S1> {
    #[inline]
    fn partial_cmp(&self, other: &SegmentSet<T, S2>) -> Option<Ordering> {
        Some(crate::compare::element_compare(
            self.store.iter(),
            other.store.iter(),
        ))
    }
}

impl<T: Domain, S> Ord for SegmentSet<T, S> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        crate::compare::element_compare(self.store.iter(), other.store.iter())
    }
}

impl<T: Domain, S: CombiningStyle> Extend<Interval<T>> for SegmentSet<T, S> {
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        for interval in iter {
            self.add(&interval);
        }
    }
}

impl<T: Domain, S: CombiningStyle> FromIterator<Interval<T>> for SegmentSet<T, S> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

macro_rules! impl_set_interval_assign_ops {
    ($(($assign:ident, $assign_fn:ident, $method:ident)),* $(,)?) => {$(
        impl<T: Domain, S: CombiningStyle> $assign<Interval<T>> for SegmentSet<T, S> {
            #[inline]
            fn $assign_fn(&mut self, interval: Interval<T>) {
                self.$method(&interval);
            }
        }
    )*};
}

macro_rules! impl_set_interval_binary_ops {
    ($(($binary:ident, $binary_fn:ident, $assign:ident, $assign_fn:ident)),* $(,)?) => {$(
        impl<T: Domain, S: CombiningStyle> $binary<Interval<T>> for SegmentSet<T, S> {
            type Output = Self;

            #[inline]
            fn $binary_fn(mut self, interval: Interval<T>) -> Self {
                $assign::$assign_fn(&mut self, interval);
                self
            }
        }
    )*};
}

impl_set_interval_assign_ops!(
    (AddAssign, add_assign, add),
    (BitOrAssign, bitor_assign, add),
    (SubAssign, sub_assign, subtract),
    (BitXorAssign, bitxor_assign, flip),
);

// No binary `Add`: a trait-provided `add` would shadow the inherent
// `add` mutator on owned receivers during method resolution. `|` is the
// owned-receiver form of addition.
impl_set_interval_binary_ops!(
    (BitOr, bitor, BitOrAssign, bitor_assign),
    (Sub, sub, SubAssign, sub_assign),
    (BitXor, bitxor, BitXorAssign, bitxor_assign),
);

macro_rules! impl_set_container_assign_ops {
    ($(($assign:ident, $assign_fn:ident, $method:ident)),* $(,)?) => {$(
        impl<T: Domain, S: CombiningStyle> $assign<&SegmentSet<T, S>> for SegmentSet<T, S> {
            #[inline]
            fn $assign_fn(&mut self, other: &SegmentSet<T, S>) {
                self.$method(other);
            }
        }
    )*};
}

macro_rules! impl_set_container_binary_ops {
    ($(($binary:ident, $binary_fn:ident, $assign:ident, $assign_fn:ident)),* $(,)?) => {$(
        impl<T: Domain, S: CombiningStyle> $binary<&SegmentSet<T, S>> for SegmentSet<T, S> {
            type Output = Self;

            #[inline]
            fn $binary_fn(mut self, other: &SegmentSet<T, S>) -> Self {
                $assign::$assign_fn(&mut self, other);
                self
            }
        }
    )*};
}

impl_set_container_assign_ops!(
    (AddAssign, add_assign, add_set),
    (BitOrAssign, bitor_assign, add_set),
    (SubAssign, sub_assign, subtract_set),
    (BitXorAssign, bitxor_assign, flip_set),
);

impl_set_container_binary_ops!(
    (BitOr, bitor, BitOrAssign, bitor_assign),
    (Sub, sub, SubAssign, sub_assign),
    (BitXor, bitxor, BitXorAssign, bitxor_assign),
);

impl<T: Domain, S: CombiningStyle> BitAndAssign<&SegmentSet<T, S>> for SegmentSet<T, S> {
    #[inline]
    fn bitand_assign(&mut self, other: &SegmentSet<T, S>) {
        *self = self.intersection(other);
    }
}

impl<T: Domain, S: CombiningStyle> BitAnd<&SegmentSet<T, S>> for SegmentSet<T, S> {
    type Output = Self;

    #[inline]
    fn bitand(self, other: &SegmentSet<T, S>) -> Self {
        self.intersection(other)
    }
}

impl<T: Domain, S: CombiningStyle> BitAndAssign<Interval<T>> for SegmentSet<T, S> {
    #[inline]
    fn bitand_assign(&mut self, window: Interval<T>) {
        *self = self.intersect_interval(&window);
    }
}

impl<T: Domain, S: CombiningStyle> BitAnd<Interval<T>> for SegmentSet<T, S> {
    type Output = Self;

    #[inline]
    fn bitand(self, window: Interval<T>) -> Self {
        self.intersect_interval(&window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(a: i64, b: i64) -> Interval<i64> {
        Interval::closed(a, b)
    }

    fn segments<S>(set: &SegmentSet<i64, S>) -> Vec<Interval<i64>>
    where
        S: CombiningStyle,
    {
        set.iter().cloned().collect()
    }

    #[test]
    fn test_joining_add_hulls_overlap_and_touch() {
        let mut set: IntervalSet<i64> = IntervalSet::new();
        set.add(&iv(1, 9));
        set.add(&iv(7, 10));
        set.add(&iv(8, 11));
        set.add(&iv(90, 120));

        assert_eq!(set.find(&2), Some(&iv(1, 11)));
        assert_eq!(set.find(&100), Some(&iv(90, 120)));
        assert_eq!(set.len(), 2);

        // Touching segments join too.
        set.add(&iv(12, 20));
        assert_eq!(set.find(&2), Some(&iv(1, 20)));
    }

    #[test]
    fn test_joining_add_bridges_a_gap() {
        let mut set: IntervalSet<i64> = IntervalSet::new();
        set.add(&iv(1, 3));
        set.add(&iv(5, 7));
        assert_eq!(set.len(), 2);
        set.add(&iv(4, 4));
        assert_eq!(segments(&set), vec![iv(1, 7)]);
    }

    #[test]
    fn test_separating_joins_on_overlap_only() {
        let mut set: SeparateIntervalSet<i64> = SeparateIntervalSet::new();
        set.add(&iv(1, 3));
        set.add(&iv(4, 6)); // touches, stays apart
        assert_eq!(segments(&set), vec![iv(1, 3), iv(4, 6)]);

        set.add(&iv(3, 4)); // overlaps both, merges the run
        assert_eq!(segments(&set), vec![iv(1, 6)]);
    }

    #[test]
    fn test_splitting_preserves_borders() {
        let mut set: SplitIntervalSet<i64> = SplitIntervalSet::new();
        set.add(&iv(1, 5));
        set.add(&iv(3, 8));
        assert_eq!(segments(&set), vec![iv(1, 2), iv(3, 5), iv(6, 8)]);
    }

    #[test]
    fn test_subtract_keeps_residuals() {
        let mut set: IntervalSet<i64> = IntervalSet::new();
        set.add(&iv(1, 9));
        set.subtract(&iv(3, 6));
        assert_eq!(segments(&set), vec![iv(1, 2), iv(7, 9)]);
        set.subtract(&iv(0, 100));
        assert!(set.is_empty());
    }

    #[test]
    fn test_subtract_then_flip_leaves_symmetric_difference() {
        let mut set: IntervalSet<i64> = IntervalSet::new();
        set.add(&iv(1, 9));
        set.subtract(&iv(3, 6));
        set.flip(&iv(2, 8));
        assert_eq!(segments(&set), vec![iv(1, 1), iv(3, 6), iv(9, 9)]);
    }

    #[test]
    fn test_flip_on_free_space_adds() {
        let mut set: IntervalSet<i64> = IntervalSet::new();
        set.flip(&iv(3, 6));
        assert_eq!(segments(&set), vec![iv(3, 6)]);
        // Flipping again removes it.
        set.flip(&iv(3, 6));
        assert!(set.is_empty());
    }

    #[test]
    fn test_flip_joins_with_untouched_neighbors() {
        let mut set: IntervalSet<i64> = IntervalSet::new();
        set.add(&iv(1, 2));
        set.add(&iv(8, 9));
        set.flip(&iv(3, 7));
        assert_eq!(segments(&set), vec![iv(1, 9)]);
    }

    #[test]
    fn test_intersection_and_window() {
        let lhs: IntervalSet<i64> = [iv(1, 4), iv(6, 9)].into_iter().collect();
        let rhs: IntervalSet<i64> = [iv(3, 7)].into_iter().collect();
        let common = lhs.intersection(&rhs);
        assert_eq!(segments(&common), vec![iv(3, 4), iv(6, 7)]);
        assert_eq!(common, lhs.intersect_interval(&iv(3, 7)));
    }

    #[test]
    fn test_contains_and_intersects() {
        let set: IntervalSet<i64> = [iv(1, 4), iv(6, 9)].into_iter().collect();
        assert!(set.contains_point(&3));
        assert!(!set.contains_point(&5));
        assert!(set.contains_interval(&iv(2, 3)));
        assert!(!set.contains_interval(&iv(2, 7)));
        assert!(set.contains_interval(&Interval::empty()));
        assert!(set.intersects_interval(&iv(4, 5)));
        assert!(!set.intersects_interval(&iv(5, 5)));

        let sub: IntervalSet<i64> = [iv(2, 3), iv(7, 9)].into_iter().collect();
        assert!(set.contains_set(&sub));
        assert!(!sub.contains_set(&set));
        assert!(set.intersects_set(&sub));
        assert!(set.contains_set(&IntervalSet::new()));
    }

    #[test]
    fn test_equality_across_styles() {
        let joined: IntervalSet<i64> = [iv(1, 8)].into_iter().collect();
        let split: SplitIntervalSet<i64> = [iv(1, 5), iv(3, 8)].into_iter().collect();
        assert_eq!(joined, split);
        assert_eq!(joined.cardinality(), split.cardinality());
    }

    #[test]
    fn test_ordering_is_lexicographic_over_elements() {
        let low: IntervalSet<i64> = [iv(0, 0)].into_iter().collect();
        let high: IntervalSet<i64> = [iv(1, 5)].into_iter().collect();
        let prefix: IntervalSet<i64> = [iv(1, 2)].into_iter().collect();
        assert!(low < high);
        assert!(prefix < high);
        assert!(IntervalSet::<i64>::new() < low);
    }

    #[test]
    fn test_span_cardinality_and_gaps() {
        let set: IntervalSet<i64> = [iv(1, 4), iv(8, 9), iv(20, 20)].into_iter().collect();
        assert_eq!(set.span(), iv(1, 20));
        assert_eq!(set.cardinality(), Cardinality::Finite(7));
        assert_eq!(set.gaps(), vec![iv(5, 7), iv(10, 19)]);
    }

    #[test]
    fn test_operators_are_aliases() {
        let mut set: IntervalSet<i64> = IntervalSet::new();
        set += iv(1, 9);
        set -= iv(3, 6);
        set ^= iv(2, 8);
        assert_eq!(segments(&set), vec![iv(1, 1), iv(3, 6), iv(9, 9)]);

        let other: IntervalSet<i64> = [iv(3, 4)].into_iter().collect();
        set &= &other;
        assert_eq!(segments(&set), vec![iv(3, 4)]);

        let unioned = set | iv(5, 6);
        assert_eq!(unioned.iter().collect::<Vec<_>>(), vec![&iv(3, 6)]);
    }

    #[test]
    fn test_inherent_add_resolves_on_owned_receiver() {
        // `add` must stay callable on owned bindings even with the
        // operator impls in scope.
        let mut set: IntervalSet<i64> = IntervalSet::new();
        set.add(&iv(1, 5));

        let mut out = set.intersection(&set.clone());
        out.add(&iv(10, 12));
        assert_eq!(segments(&out), vec![iv(1, 5), iv(10, 12)]);

        let widened = (set.clone() | iv(7, 9)) - iv(2, 3);
        assert_eq!(segments(&widened), vec![iv(1, 1), iv(4, 5), iv(7, 9)]);
    }

    #[test]
    fn test_empty_interval_arguments_are_no_ops() {
        let mut set: IntervalSet<i64> = IntervalSet::new();
        set.add(&Interval::empty());
        set.subtract(&Interval::empty());
        set.flip(&Interval::empty());
        assert!(set.is_empty());
        assert!(!set.intersects_interval(&Interval::empty()));
    }

    #[test]
    fn test_continuous_domain_set_keeps_bound_kinds() {
        use interval_kit_core::BoundKind;
        let closed = |a: &str, b: &str| Interval::closed(a.to_string(), b.to_string());
        let mut set: IntervalSet<String> = IntervalSet::new();
        set.add(&closed("a", "m"));
        set.subtract(&Interval::new(
            "d".to_string(),
            "f".to_string(),
            BoundKind::Closed,
        ));

        let left = Interval::new("a".to_string(), "d".to_string(), BoundKind::RightOpen);
        let right = Interval::new("f".to_string(), "m".to_string(), BoundKind::LeftOpen);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![&left, &right]);
    }

    #[test]
    fn test_display_formats_segments() {
        let set: IntervalSet<i64> = [iv(1, 3), iv(5, 6)].into_iter().collect();
        assert_eq!(format!("{}", set), "{[1, 3], [5, 6]}");
    }

    #[test]
    fn test_randomized_against_element_model() {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;
        use std::collections::BTreeSet;

        let mut rng = ChaCha8Rng::seed_from_u64(0x5E7);
        let mut joined: IntervalSet<i64> = IntervalSet::new();
        let mut split: SplitIntervalSet<i64> = SplitIntervalSet::new();
        let mut model: BTreeSet<i64> = BTreeSet::new();

        for _ in 0..400 {
            let a = rng.random_range(0..120i64);
            let b = (a + rng.random_range(0..20i64)).min(119);
            let interval = iv(a, b);
            match rng.random_range(0..3u8) {
                0 => {
                    joined.add(&interval);
                    split.add(&interval);
                    model.extend(a..=b);
                }
                1 => {
                    joined.subtract(&interval);
                    split.subtract(&interval);
                    for x in a..=b {
                        model.remove(&x);
                    }
                }
                _ => {
                    joined.flip(&interval);
                    split.flip(&interval);
                    for x in a..=b {
                        if !model.remove(&x) {
                            model.insert(x);
                        }
                    }
                }
            }
            for x in 0..120i64 {
                assert_eq!(joined.contains_point(&x), model.contains(&x));
            }
            assert_eq!(joined, split);
            assert_eq!(joined.cardinality(), Cardinality::Finite(model.len() as u64));
        }
    }
}
