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

//! # Interval Maps
//!
//! [`SegmentMap`] attaches values to disjoint interval segments and
//! aggregates values where inserted intervals overlap stored ones. Its
//! behavior is configured by three type-level strategies:
//!
//! - the codomain combiner `C` ([`Combine`]) decides *how* overlapping
//!   values aggregate,
//! - the absorption policy `P` ([`AbsorptionPolicy`]) decides whether
//!   identity values are kept and whether uncovered regions read as
//!   identity-valued,
//! - the combining style `S` ([`CombiningStyle`]) decides what happens
//!   to segment borders.
//!
//! All mutations run through one decomposition: the run of stored
//! segments colliding with the addend is taken out of the store, cut
//! into left residual, gap, common and right residual pieces, and the
//! rewritten pieces are spliced back according to the style.

use crate::combine::{Additive, Combine};
use crate::compare::{inclusion_compare, is_element_equal};
use crate::policy::{AbsorptionPolicy, PartialAbsorber};
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

/// A map from disjoint interval segments to values.
///
/// # Examples
///
/// An overlap counter:
///
/// ```
/// use interval_kit_containers::map::IntervalMap;
/// use interval_kit_core::Interval;
///
/// let mut load: IntervalMap<i64, i64> = IntervalMap::new();
/// load.add(&Interval::closed(1, 5), &1);
/// load.add(&Interval::closed(4, 8), &1);
///
/// assert_eq!(load.find(&2), Some((&Interval::closed(1, 3), &1)));
/// assert_eq!(load.find(&4), Some((&Interval::closed(4, 5), &2)));
/// assert_eq!(load.find(&7), Some((&Interval::closed(6, 8), &1)));
/// ```
pub struct SegmentMap<T, V, C = Additive, P = PartialAbsorber, S = Joining> {
    store: SegmentStore<T, V>,
    _strategy: PhantomData<(C, P, S)>,
}

/// A joining interval map: touching, equal-valued segments are merged.
pub type IntervalMap<T, V, C = Additive, P = PartialAbsorber> = SegmentMap<T, V, C, P, Joining>;

/// A separating interval map: touching segments stay apart.
pub type SeparateIntervalMap<T, V, C = Additive, P = PartialAbsorber> =
    SegmentMap<T, V, C, P, Separating>;

/// A splitting interval map: every inserted border is preserved.
pub type SplitIntervalMap<T, V, C = Additive, P = PartialAbsorber> =
    SegmentMap<T, V, C, P, Splitting>;

impl<T: Domain, V, C, P, S> SegmentMap<T, V, C, P, S> {
    /// Creates a new, empty map.
    #[inline]
    pub fn new() -> Self {
        Self {
            store: SegmentStore::new(),
            _strategy: PhantomData,
        }
    }

    /// Returns the number of stored segments (the iterative size).
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Alias of [`SegmentMap::len`].
    #[inline]
    pub fn iterative_size(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if no segment is stored.
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
    pub fn iter(&self) -> impl Iterator<Item = (&Interval<T>, &V)> {
        self.store.iter()
    }

    /// The segment containing `point`, if any is stored.
    ///
    /// On a total map, uncovered points read as identity-valued but have
    /// no stored segment, so this still returns `None` for them.
    #[inline]
    pub fn find(&self, point: &T) -> Option<(&Interval<T>, &V)> {
        self.store.find_point(point)
    }

    /// The first stored segment overlapping `interval`, if any.
    #[inline]
    pub fn find_interval(&self, interval: &Interval<T>) -> Option<(&Interval<T>, &V)> {
        self.store.find_first(&interval.normalized())
    }

    /// The total number of covered domain elements.
    pub fn cardinality(&self) -> Cardinality {
        self.store
            .iter()
            .map(|(interval, _)| interval.cardinality())
            .sum()
    }

    /// The hull of all stored segments.
    pub fn span(&self) -> Interval<T> {
        match (self.store.first(), self.store.last()) {
            (Some((first, _)), Some((last, _))) => first.hull(last),
            _ => Interval::empty(),
        }
    }
}

impl<T, V, C, P, S> SegmentMap<T, V, C, P, S>
where
    T: Domain,
    V: Clone + Eq,
    C: Combine<V>,
    P: AbsorptionPolicy,
    S: CombiningStyle,
{
    /// Aggregates `value` over `interval`.
    ///
    /// Overlapped stored values are combined through `C`; uncovered parts
    /// of `interval` are filled with the value itself. Adding an
    /// absorbable identity value is a no-op, as is adding over an empty
    /// interval.
    pub fn add(&mut self, interval: &Interval<T>, value: &V) {
        let addend = interval.normalized();
        if addend.is_empty() || Self::absorbs(value) {
            return;
        }
        trace!(interval = ?addend, "segment map add");
        self.combine_over(&addend, true, || C::version(value), |acc| {
            C::combine(acc, value)
        });
    }

    /// Removes `value`'s contribution over `interval`.
    ///
    /// Overlapped stored values are combined through the inverse of `C`.
    /// On a partial map uncovered parts are left untouched; on a total
    /// map they are filled with the inverse version of the value.
    pub fn subtract(&mut self, interval: &Interval<T>, value: &V) {
        let addend = interval.normalized();
        if addend.is_empty() || Self::absorbs(value) {
            return;
        }
        trace!(interval = ?addend, "segment map subtract");
        self.combine_over(
            &addend,
            P::IS_TOTAL,
            || <C::Inverse as Combine<V>>::version(value),
            |acc| <C::Inverse as Combine<V>>::combine(acc, value),
        );
    }

    /// Inserts `value` where `interval` is not yet covered.
    ///
    /// Stored segments are left entirely untouched; only the free parts
    /// of `interval` receive the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_kit_containers::map::SplitIntervalMap;
    /// use interval_kit_core::Interval;
    ///
    /// let mut parties: SplitIntervalMap<i64, i64> = SplitIntervalMap::new();
    /// parties.insert(&Interval::closed(2, 3), &1);
    /// parties.insert(&Interval::closed(4, 4), &1);
    /// parties.insert(&Interval::closed(1, 2), &1);
    ///
    /// // The overlapped segment [2, 3] stays whole; only [1, 1] was free.
    /// let segments: Vec<_> = parties.iter().map(|(i, _)| i.clone()).collect();
    /// assert_eq!(
    ///     segments,
    ///     vec![
    ///         Interval::closed(1, 1),
    ///         Interval::closed(2, 3),
    ///         Interval::closed(4, 4)
    ///     ]
    /// );
    /// ```
    pub fn insert(&mut self, interval: &Interval<T>, value: &V) {
        let addend = interval.normalized();
        if addend.is_empty() || Self::absorbs(value) {
            return;
        }
        trace!(interval = ?addend, "segment map insert");
        let run = self.store.take_overlapping(&addend);
        let mut gaps: Vec<Interval<T>> = Vec::new();
        let mut cursor = addend;
        for (segment, stored) in run {
            let gap = cursor.right_subtract(&segment);
            if !gap.is_empty() {
                gaps.push(gap.normalized());
            }
            cursor = cursor.left_subtract(&segment);
            self.store.insert(segment, stored);
        }
        if !cursor.is_empty() {
            gaps.push(cursor.normalized());
        }
        for gap in gaps {
            self.insert_free(gap, value.clone());
        }
        debug_assert!(self.store.invariants_held());
    }

    /// Overwrites `interval` with `value`, erasing whatever was stored
    /// there before.
    pub fn set(&mut self, interval: &Interval<T>, value: &V) {
        let addend = interval.normalized();
        if addend.is_empty() {
            return;
        }
        trace!(interval = ?addend, "segment map set");
        self.erase(&addend);
        self.insert(&addend, value);
    }

    /// Removes all value associations over `interval`.
    ///
    /// Stored segments reaching beyond `interval` keep their residual
    /// parts with their values.
    pub fn erase(&mut self, interval: &Interval<T>) {
        let probe = interval.normalized();
        if probe.is_empty() {
            return;
        }
        trace!(interval = ?probe, "segment map erase");
        let run = self.store.take_overlapping(&probe);
        for (segment, value) in run {
            let left = segment.right_subtract(&probe).normalized();
            let right = segment.left_subtract(&probe).normalized();
            if !left.is_empty() {
                self.store.insert(left, value.clone());
            }
            if !right.is_empty() {
                self.store.insert(right, value);
            }
        }
        debug_assert!(self.store.invariants_held());
    }

    /// Removes `interval` only where the stored value equals `value`.
    ///
    /// Segments carrying a different value are left untouched; a miss is
    /// a silent no-op.
    pub fn erase_segment(&mut self, interval: &Interval<T>, value: &V) {
        let probe = interval.normalized();
        if probe.is_empty() {
            return;
        }
        let run = self.store.take_overlapping(&probe);
        for (segment, stored) in run {
            if stored != *value {
                self.store.insert(segment, stored);
                continue;
            }
            let left = segment.right_subtract(&probe).normalized();
            let right = segment.left_subtract(&probe).normalized();
            if !left.is_empty() {
                self.store.insert(left, stored.clone());
            }
            if !right.is_empty() {
                self.store.insert(right, stored);
            }
        }
        debug_assert!(self.store.invariants_held());
    }

    /// Symmetric difference with a single segment.
    ///
    /// Uncovered parts of `interval` receive the value; on parts common
    /// with stored segments the values are staged through
    /// [`Combine::flip_common`]: the identity for plain codomains, the
    /// set symmetric difference for set-valued ones. Total maps
    /// degenerate: an absorbing total map becomes empty, an enriching one
    /// aggregates the operand and then neutralizes every stored value.
    pub fn flip(&mut self, interval: &Interval<T>, value: &V) {
        let addend = interval.normalized();
        if addend.is_empty() {
            return;
        }
        trace!(interval = ?addend, "segment map flip");
        if P::IS_TOTAL {
            if P::ABSORBS_IDENTITIES {
                self.store.clear();
            } else {
                self.add(&addend, value);
                self.neutralize();
            }
            return;
        }
        self.combine_over(&addend, true, || C::version(value), |acc| {
            C::flip_common(acc, value)
        });
    }

    /// Aggregates every segment of `other` into `self`.
    pub fn add_map(&mut self, other: &Self) {
        for (interval, value) in other.iter() {
            self.add(interval, value);
        }
    }

    /// Subtracts every segment of `other` from `self`.
    pub fn subtract_map(&mut self, other: &Self) {
        for (interval, value) in other.iter() {
            self.subtract(interval, value);
        }
    }

    /// Symmetric difference with a whole map.
    pub fn flip_map(&mut self, other: &Self) {
        if P::IS_TOTAL {
            if P::ABSORBS_IDENTITIES {
                self.store.clear();
            } else {
                for (interval, value) in other.iter() {
                    self.add(interval, value);
                }
                self.neutralize();
            }
            return;
        }
        for (interval, value) in other.iter() {
            self.flip(interval, value);
        }
    }

    /// The intersection of two maps.
    ///
    /// Values on common regions are aggregated through
    /// [`Combine::intersect`]. On a total map every region is common, so
    /// the intersection degenerates to a copy of `self` aggregated with
    /// `other`.
    pub fn intersection(&self, other: &Self) -> Self {
        if P::IS_TOTAL {
            let mut out = self.clone();
            for (interval, value) in other.iter() {
                out.add(interval, value);
            }
            return out;
        }
        let mut out = Self::new();
        for (o_interval, o_value) in other.iter() {
            for (s_interval, s_value) in self.store.overlapping(o_interval) {
                let common = s_interval.intersection(o_interval).normalized();
                debug_assert!(!common.is_empty());
                let mut combined = s_value.clone();
                C::intersect(&mut combined, o_value);
                out.add(&common, &combined);
            }
        }
        out
    }

    /// Restricts the map to a window, leaving values untouched.
    pub fn intersect_interval(&self, window: &Interval<T>) -> Self {
        let window = window.normalized();
        let mut out = Self::new();
        if window.is_empty() {
            return out;
        }
        for (segment, value) in self.store.overlapping(&window) {
            let common = segment.intersection(&window).normalized();
            out.insert(&common, value);
        }
        out
    }

    /// Returns `true` if `point` carries a value.
    ///
    /// On a total map every point does.
    #[inline]
    pub fn contains_point(&self, point: &T) -> bool {
        P::IS_TOTAL || self.store.find_point(point).is_some()
    }

    /// Returns `true` if every element of `interval` carries a value.
    pub fn contains_interval(&self, interval: &Interval<T>) -> bool {
        let probe = interval.normalized();
        if probe.is_empty() {
            return true;
        }
        if P::IS_TOTAL {
            return true;
        }
        let mut cursor = probe.clone();
        for (segment, _) in self.store.overlapping(&probe) {
            if !cursor.right_subtract(segment).is_empty() {
                return false;
            }
            cursor = cursor.left_subtract(segment);
        }
        cursor.is_empty()
    }

    /// Returns `true` if the stored content of `other` is element-wise
    /// contained in `self`, relating values through
    /// [`Combine::value_inclusion`]: equality for plain codomains,
    /// subset inclusion for set-valued ones.
    pub fn contains_map(&self, other: &Self) -> bool {
        inclusion_compare(other.iter(), self.iter(), C::value_inclusion).is_within()
    }

    /// Returns `true` if `interval` shares an element with the covered
    /// region.
    pub fn intersects_interval(&self, interval: &Interval<T>) -> bool {
        let probe = interval.normalized();
        if probe.is_empty() {
            return false;
        }
        P::IS_TOTAL || self.store.find_first(&probe).is_some()
    }

    /// Returns `true` if the two maps share a covered element.
    pub fn intersects_map(&self, other: &Self) -> bool {
        other
            .iter()
            .any(|(interval, _)| self.intersects_interval(interval))
    }

    #[inline]
    fn absorbs(value: &V) -> bool {
        P::ABSORBS_IDENTITIES && *value == C::identity()
    }

    /// The shared mutation engine: takes the colliding run out of the
    /// store, rewrites it piecewise and splices the result back.
    ///
    /// `gap_value` produces the fill for parts of `addend` that were
    /// uncovered (only used when `fill_gaps` is set); `merge` rewrites a
    /// stored value on a common part. Pieces whose value is absorbable
    /// are dropped.
    fn combine_over<G, M>(&mut self, addend: &Interval<T>, fill_gaps: bool, gap_value: G, merge: M)
    where
        G: Fn() -> V,
        M: Fn(&mut V),
    {
        debug_assert!(!addend.is_empty());
        let run = self.store.take_overlapping(addend);
        let mut pieces: Vec<(Interval<T>, V)> = Vec::with_capacity(run.len() + 2);
        let mut cursor = addend.clone();
        for (segment, value) in run {
            let gap = cursor.right_subtract(&segment);
            if fill_gaps && !gap.is_empty() {
                let filled = gap_value();
                if !Self::absorbs(&filled) {
                    pieces.push((gap.normalized(), filled));
                }
            }
            let left = segment.right_subtract(&cursor);
            if !left.is_empty() {
                pieces.push((left.normalized(), value.clone()));
            }
            let common = segment.intersection(&cursor);
            debug_assert!(!common.is_empty());
            let mut combined = value.clone();
            merge(&mut combined);
            if !Self::absorbs(&combined) {
                pieces.push((common.normalized(), combined));
            }
            let right = segment.left_subtract(&cursor);
            if !right.is_empty() {
                pieces.push((right.normalized(), value));
            }
            cursor = cursor.left_subtract(&segment);
        }
        if fill_gaps && !cursor.is_empty() {
            let filled = gap_value();
            if !Self::absorbs(&filled) {
                pieces.push((cursor.normalized(), filled));
            }
        }
        self.splice(pieces);
    }

    /// Reinserts rewritten pieces, applying the combining style: the
    /// joining style merges touching equal-valued pieces in the run and
    /// at its borders with the untouched neighbors.
    fn splice(&mut self, pieces: Vec<(Interval<T>, V)>) {
        if pieces.is_empty() {
            debug_assert!(self.store.invariants_held());
            return;
        }
        let mut pieces = pieces;
        if matches!(S::KIND, StyleKind::Joining) {
            let mut merged: Vec<(Interval<T>, V)> = Vec::with_capacity(pieces.len());
            for (interval, value) in pieces {
                if let Some((last_iv, last_v)) = merged.last_mut() {
                    if last_iv.touches(&interval) && *last_v == value {
                        *last_iv = last_iv.hull(&interval);
                        continue;
                    }
                }
                merged.push((interval, value));
            }
            pieces = merged;

            let below = match pieces.first() {
                Some((first_iv, first_v)) => match self.store.neighbor_below(first_iv) {
                    Some((n_iv, n_v)) if n_iv.touches(first_iv) && n_v == first_v => {
                        Some(n_iv.clone())
                    }
                    _ => None,
                },
                None => None,
            };
            if let Some(n_iv) = below {
                self.store.remove_exact(&n_iv);
                pieces[0].0 = n_iv.hull(&pieces[0].0);
            }
            let above = match pieces.last() {
                Some((last_iv, last_v)) => match self.store.neighbor_above(last_iv) {
                    Some((n_iv, n_v)) if last_iv.touches(n_iv) && n_v == last_v => {
                        Some(n_iv.clone())
                    }
                    _ => None,
                },
                None => None,
            };
            if let Some(n_iv) = above {
                self.store.remove_exact(&n_iv);
                let last = pieces.len() - 1;
                pieces[last].0 = pieces[last].0.hull(&n_iv);
            }
        }
        for (interval, value) in pieces {
            self.store.insert(interval, value);
        }
        debug_assert!(self.store.invariants_held());
    }

    /// Inserts a piece into a region known to be free, joining it with
    /// touching equal-valued neighbors under the joining style.
    fn insert_free(&mut self, mut interval: Interval<T>, value: V) {
        if matches!(S::KIND, StyleKind::Joining) {
            let below = match self.store.neighbor_below(&interval) {
                Some((n_iv, n_v)) if n_iv.touches(&interval) && *n_v == value => Some(n_iv.clone()),
                _ => None,
            };
            if let Some(n_iv) = below {
                self.store.remove_exact(&n_iv);
                interval = n_iv.hull(&interval);
            }
            let above = match self.store.neighbor_above(&interval) {
                Some((n_iv, n_v)) if interval.touches(n_iv) && *n_v == value => Some(n_iv.clone()),
                _ => None,
            };
            if let Some(n_iv) = above {
                self.store.remove_exact(&n_iv);
                interval = interval.hull(&n_iv);
            }
        }
        self.store.insert(interval, value);
    }

    /// Rewrites every stored value to the identity and restores the
    /// joining invariant.
    fn neutralize(&mut self) {
        let identity = C::identity();
        for stored in self.store.values_mut() {
            *stored = identity.clone();
        }
        if matches!(S::KIND, StyleKind::Joining) {
            self.rejoin();
        }
    }

    /// Rebuilds the store merging touching equal-valued segments.
    fn rejoin(&mut self) {
        let mut rebuilt: Vec<(Interval<T>, V)> = Vec::with_capacity(self.store.len());
        for (interval, value) in self.store.iter() {
            if let Some((last_iv, last_v)) = rebuilt.last_mut() {
                if last_iv.touches(interval) && last_v == value {
                    *last_iv = last_iv.hull(interval);
                    continue;
                }
            }
            rebuilt.push((interval.clone(), value.clone()));
        }
        self.store.clear();
        for (interval, value) in rebuilt {
            self.store.insert(interval, value);
        }
    }
}

impl<T: Domain, V, C, P, S> Default for SegmentMap<T, V, C, P, S> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Domain, V: Clone, C, P, S> Clone for SegmentMap<T, V, C, P, S> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _strategy: PhantomData,
        }
    }
}

impl<T: Domain + fmt::Debug, V: fmt::Debug, C, P, S> fmt::Debug for SegmentMap<T, V, C, P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.store.iter()).finish()
    }
}

impl<T: Domain + fmt::Display, V: fmt::Display, C, P, S> fmt::Display
    for SegmentMap<T, V, C, P, S>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, (interval, value)) in self.store.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}->{}", interval, value)?;
        }
        write!(f, "}}")
    }
}

impl<T, V, C, P, S1, S2> PartialEq<SegmentMap<T, V, C, P, S2>> for SegmentMap<T, V, C, P, S1>
where
    T: Domain,
    V: PartialEq,
{
    /// Maps are compared over their flattened element content, so
    /// differently segmented but element-equal maps compare equal.
    fn eq(&self, other: &SegmentMap<T, V, C, P, S2>) -> bool {
        is_element_equal(self.iter(), other.iter())
    }
}

impl<T: Domain, V: Eq, C, P, S> Eq for SegmentMap<T, V, C, P, S> {}

impl<T, V, C, P, S1, S2> PartialOrd<SegmentMap<T, V, C, P, S2>> for SegmentMap<T, V, C, P, S1>
where
    T: Domain,
    V: Ord,
{
    #[inline]
    fn partial_cmp(&self, other: &SegmentMap<T, V, C, P, S2>) -> Option<Ordering> {
        Some(crate::compare::element_compare(self.iter(), other.iter()))
    }
}

impl<T: Domain, V: Ord, C, P, S> Ord for SegmentMap<T, V, C, P, S> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        crate::compare::element_compare(self.iter(), other.iter())
    }
}

impl<T, V, C, P, S> Extend<(Interval<T>, V)> for SegmentMap<T, V, C, P, S>
where
    T: Domain,
    V: Clone + Eq,
    C: Combine<V>,
    P: AbsorptionPolicy,
    S: CombiningStyle,
{
    fn extend<I: IntoIterator<Item = (Interval<T>, V)>>(&mut self, iter: I) {
        for (interval, value) in iter {
            self.add(&interval, &value);
        }
    }
}

impl<T, V, C, P, S> FromIterator<(Interval<T>, V)> for SegmentMap<T, V, C, P, S>
where
    T: Domain,
    V: Clone + Eq,
    C: Combine<V>,
    P: AbsorptionPolicy,
    S: CombiningStyle,
{
    fn from_iter<I: IntoIterator<Item = (Interval<T>, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

macro_rules! impl_map_segment_assign_ops {
    ($(($assign:ident, $assign_fn:ident, $method:ident)),* $(,)?) => {$(
        impl<T, V, C, P, S> $assign<(Interval<T>, V)> for SegmentMap<T, V, C, P, S>
        where
            T: Domain,
            V: Clone + Eq,
            C: Combine<V>,
            P: AbsorptionPolicy,
            S: CombiningStyle,
        {
            #[inline]
            fn $assign_fn(&mut self, (interval, value): (Interval<T>, V)) {
                self.$method(&interval, &value);
            }
        }
    )*};
}

macro_rules! impl_map_segment_binary_ops {
    ($(($binary:ident, $binary_fn:ident, $assign:ident, $assign_fn:ident)),* $(,)?) => {$(
        impl<T, V, C, P, S> $binary<(Interval<T>, V)> for SegmentMap<T, V, C, P, S>
        where
            T: Domain,
            V: Clone + Eq,
            C: Combine<V>,
            P: AbsorptionPolicy,
            S: CombiningStyle,
        {
            type Output = Self;

            #[inline]
            fn $binary_fn(mut self, segment: (Interval<T>, V)) -> Self {
                $assign::$assign_fn(&mut self, segment);
                self
            }
        }
    )*};
}

impl_map_segment_assign_ops!(
    (AddAssign, add_assign, add),
    (BitOrAssign, bitor_assign, add),
    (SubAssign, sub_assign, subtract),
    (BitXorAssign, bitxor_assign, flip),
);

// No binary `Add`: a trait-provided `add` would shadow the inherent
// `add` mutator on owned receivers during method resolution. `|` is the
// owned-receiver form of addition.
impl_map_segment_binary_ops!(
    (BitOr, bitor, BitOrAssign, bitor_assign),
    (Sub, sub, SubAssign, sub_assign),
    (BitXor, bitxor, BitXorAssign, bitxor_assign),
);

macro_rules! impl_map_container_assign_ops {
    ($(($assign:ident, $assign_fn:ident, $method:ident)),* $(,)?) => {$(
        impl<T, V, C, P, S> $assign<&SegmentMap<T, V, C, P, S>> for SegmentMap<T, V, C, P, S>
        where
            T: Domain,
            V: Clone + Eq,
            C: Combine<V>,
            P: AbsorptionPolicy,
            S: CombiningStyle,
        {
            #[inline]
            fn $assign_fn(&mut self, other: &SegmentMap<T, V, C, P, S>) {
                self.$method(other);
            }
        }
    )*};
}

macro_rules! impl_map_container_binary_ops {
    ($(($binary:ident, $binary_fn:ident, $assign:ident, $assign_fn:ident)),* $(,)?) => {$(
        impl<T, V, C, P, S> $binary<&SegmentMap<T, V, C, P, S>> for SegmentMap<T, V, C, P, S>
        where
            T: Domain,
            V: Clone + Eq,
            C: Combine<V>,
            P: AbsorptionPolicy,
            S: CombiningStyle,
        {
            type Output = Self;

            #[inline]
            fn $binary_fn(mut self, other: &SegmentMap<T, V, C, P, S>) -> Self {
                $assign::$assign_fn(&mut self, other);
                self
            }
        }
    )*};
}

impl_map_container_assign_ops!(
    (AddAssign, add_assign, add_map),
    (BitOrAssign, bitor_assign, add_map),
    (SubAssign, sub_assign, subtract_map),
    (BitXorAssign, bitxor_assign, flip_map),
);

impl_map_container_binary_ops!(
    (BitOr, bitor, BitOrAssign, bitor_assign),
    (Sub, sub, SubAssign, sub_assign),
    (BitXor, bitxor, BitXorAssign, bitxor_assign),
);

impl<T, V, C, P, S> BitAndAssign<&SegmentMap<T, V, C, P, S>> for SegmentMap<T, V, C, P, S>
where
    T: Domain,
    V: Clone + Eq,
    C: Combine<V>,
    P: AbsorptionPolicy,
    S: CombiningStyle,
{
    #[inline]
    fn bitand_assign(&mut self, other: &SegmentMap<T, V, C, P, S>) {
        *self = self.intersection(other);
    }
}

impl<T, V, C, P, S> BitAnd<&SegmentMap<T, V, C, P, S>> for SegmentMap<T, V, C, P, S>
where
    T: Domain,
    V: Clone + Eq,
    C: Combine<V>,
    P: AbsorptionPolicy,
    S: CombiningStyle,
{
    type Output = Self;

    #[inline]
    fn bitand(self, other: &SegmentMap<T, V, C, P, S>) -> Self {
        self.intersection(other)
    }
}

impl<T, V, C, P, S> BitAndAssign<Interval<T>> for SegmentMap<T, V, C, P, S>
where
    T: Domain,
    V: Clone + Eq,
    C: Combine<V>,
    P: AbsorptionPolicy,
    S: CombiningStyle,
{
    #[inline]
    fn bitand_assign(&mut self, window: Interval<T>) {
        *self = self.intersect_interval(&window);
    }
}

impl<T, V, C, P, S> BitAnd<Interval<T>> for SegmentMap<T, V, C, P, S>
where
    T: Domain,
    V: Clone + Eq,
    C: Combine<V>,
    P: AbsorptionPolicy,
    S: CombiningStyle,
{
    type Output = Self;

    #[inline]
    fn bitand(self, window: Interval<T>) -> Self {
        self.intersect_interval(&window)
    }
}
