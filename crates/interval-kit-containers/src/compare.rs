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

//! # Comparison Engine
//!
//! Containers with different combining styles can store the same element
//! content in differently segmented form, so comparisons run over the
//! *flattened element sequence* rather than the stored segments. Both
//! walks trim aligned chunks off two segment streams without ever
//! materializing elements, so they work on continuous domains too.
//!
//! - [`element_compare`] yields the lexicographic order of the flattened
//!   `(element, value)` sequences.
//! - [`inclusion_compare`] classifies two streams as equal, sub-, super-
//!   or unrelated containers by narrowing a relation mask, with early
//!   exit as soon as the relation is unrelated.

use interval_kit_core::{Domain, Interval};
use std::cmp::Ordering;
use std::collections::BTreeSet;

const SUBSET_BIT: u8 = 0b01;
const SUPERSET_BIT: u8 = 0b10;

/// How one container's element content relates to another's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InclusionRelation {
    /// Each side holds content the other lacks.
    Unrelated,
    /// The left content is properly contained in the right.
    Subset,
    /// The left content properly contains the right.
    Superset,
    /// Both sides hold the same content.
    Equal,
}

impl InclusionRelation {
    #[inline]
    fn mask(self) -> u8 {
        match self {
            InclusionRelation::Unrelated => 0,
            InclusionRelation::Subset => SUBSET_BIT,
            InclusionRelation::Superset => SUPERSET_BIT,
            InclusionRelation::Equal => SUBSET_BIT | SUPERSET_BIT,
        }
    }

    #[inline]
    fn from_mask(mask: u8) -> Self {
        match mask {
            0 => InclusionRelation::Unrelated,
            SUBSET_BIT => InclusionRelation::Subset,
            SUPERSET_BIT => InclusionRelation::Superset,
            _ => InclusionRelation::Equal,
        }
    }

    /// `true` for [`Subset`](InclusionRelation::Subset) and
    /// [`Equal`](InclusionRelation::Equal).
    #[inline]
    pub fn is_within(self) -> bool {
        matches!(self, InclusionRelation::Subset | InclusionRelation::Equal)
    }
}

/// Compares two segment streams as flattened `(element, value)`
/// sequences, lexicographically.
///
/// Both streams must be ascending and disjoint, as produced by the
/// container iterators.
pub fn element_compare<'a, T, V, L, R>(lhs: L, rhs: R) -> Ordering
where
    T: Domain + 'a,
    V: Ord + 'a,
    L: IntoIterator<Item = (&'a Interval<T>, &'a V)>,
    R: IntoIterator<Item = (&'a Interval<T>, &'a V)>,
{
    let mut lhs = lhs.into_iter();
    let mut rhs = rhs.into_iter();
    let mut left: Option<(Interval<T>, &V)> = lhs.next().map(|(i, v)| (i.clone(), v));
    let mut right: Option<(Interval<T>, &V)> = rhs.next().map(|(i, v)| (i.clone(), v));

    loop {
        match (left.take(), right.take()) {
            (None, None) => return Ordering::Equal,
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (Some((liv, lv)), Some((riv, rv))) => {
                match liv.cmp_lower_edge(&riv) {
                    Ordering::Equal => {}
                    // The earlier-starting side has the smaller first element.
                    order => return order,
                }
                match lv.cmp(rv) {
                    Ordering::Equal => {}
                    order => return order,
                }
                match liv.cmp_upper_edge(&riv) {
                    Ordering::Equal => {
                        left = lhs.next().map(|(i, v)| (i.clone(), v));
                        right = rhs.next().map(|(i, v)| (i.clone(), v));
                    }
                    Ordering::Less => {
                        right = Some((riv.left_subtract(&liv), rv));
                        left = lhs.next().map(|(i, v)| (i.clone(), v));
                    }
                    Ordering::Greater => {
                        left = Some((liv.left_subtract(&riv), lv));
                        right = rhs.next().map(|(i, v)| (i.clone(), v));
                    }
                }
            }
        }
    }
}

/// Tests two segment streams for equal flattened element content.
pub fn is_element_equal<'a, T, V, L, R>(lhs: L, rhs: R) -> bool
where
    T: Domain + 'a,
    V: PartialEq + 'a,
    L: IntoIterator<Item = (&'a Interval<T>, &'a V)>,
    R: IntoIterator<Item = (&'a Interval<T>, &'a V)>,
{
    let mut lhs = lhs.into_iter();
    let mut rhs = rhs.into_iter();
    let mut left: Option<(Interval<T>, &V)> = lhs.next().map(|(i, v)| (i.clone(), v));
    let mut right: Option<(Interval<T>, &V)> = rhs.next().map(|(i, v)| (i.clone(), v));

    loop {
        match (left.take(), right.take()) {
            (None, None) => return true,
            (Some(_), None) | (None, Some(_)) => return false,
            (Some((liv, lv)), Some((riv, rv))) => {
                if liv.cmp_lower_edge(&riv) != Ordering::Equal || lv != rv {
                    return false;
                }
                match liv.cmp_upper_edge(&riv) {
                    Ordering::Equal => {
                        left = lhs.next().map(|(i, v)| (i.clone(), v));
                        right = rhs.next().map(|(i, v)| (i.clone(), v));
                    }
                    Ordering::Less => {
                        right = Some((riv.left_subtract(&liv), rv));
                        left = lhs.next().map(|(i, v)| (i.clone(), v));
                    }
                    Ordering::Greater => {
                        left = Some((liv.left_subtract(&riv), lv));
                        right = rhs.next().map(|(i, v)| (i.clone(), v));
                    }
                }
            }
        }
    }
}

/// Classifies the element content of `lhs` against `rhs`.
///
/// `value_relation` decides how values on a common region relate; use
/// [`value_equality`] for plain codomains and [`set_value_inclusion`]
/// for set-valued ones. The running mask narrows with every observation
/// and the walk stops as soon as the streams are unrelated.
pub fn inclusion_compare<'a, T, V, L, R, F>(
    lhs: L,
    rhs: R,
    mut value_relation: F,
) -> InclusionRelation
where
    T: Domain + 'a,
    V: 'a,
    L: IntoIterator<Item = (&'a Interval<T>, &'a V)>,
    R: IntoIterator<Item = (&'a Interval<T>, &'a V)>,
    F: FnMut(&V, &V) -> InclusionRelation,
{
    let mut lhs = lhs.into_iter();
    let mut rhs = rhs.into_iter();
    let mut left: Option<(Interval<T>, &V)> = lhs.next().map(|(i, v)| (i.clone(), v));
    let mut right: Option<(Interval<T>, &V)> = rhs.next().map(|(i, v)| (i.clone(), v));
    let mut mask = SUBSET_BIT | SUPERSET_BIT;

    loop {
        match (left.take(), right.take()) {
            (None, None) => break,
            (Some(_), None) => {
                mask &= SUPERSET_BIT;
                break;
            }
            (None, Some(_)) => {
                mask &= SUBSET_BIT;
                break;
            }
            (Some((liv, lv)), Some((riv, rv))) => {
                if liv.exclusive_less(&riv) {
                    // A chunk only the left side covers.
                    mask &= SUPERSET_BIT;
                    if mask == 0 {
                        return InclusionRelation::Unrelated;
                    }
                    left = lhs.next().map(|(i, v)| (i.clone(), v));
                    right = Some((riv, rv));
                    continue;
                }
                if riv.exclusive_less(&liv) {
                    mask &= SUBSET_BIT;
                    if mask == 0 {
                        return InclusionRelation::Unrelated;
                    }
                    right = rhs.next().map(|(i, v)| (i.clone(), v));
                    left = Some((liv, lv));
                    continue;
                }

                // Overlap. Leading one-sided parts narrow the mask, then
                // both chunks start at the same edge.
                let left_lead = liv.right_subtract(&riv);
                if !left_lead.is_empty() {
                    mask &= SUPERSET_BIT;
                }
                let right_lead = riv.right_subtract(&liv);
                if !right_lead.is_empty() {
                    mask &= SUBSET_BIT;
                }
                mask &= value_relation(lv, rv).mask();
                if mask == 0 {
                    return InclusionRelation::Unrelated;
                }

                let left_rest = liv.left_subtract(&left_lead);
                let right_rest = riv.left_subtract(&right_lead);
                match left_rest.cmp_upper_edge(&right_rest) {
                    Ordering::Equal => {
                        left = lhs.next().map(|(i, v)| (i.clone(), v));
                        right = rhs.next().map(|(i, v)| (i.clone(), v));
                    }
                    Ordering::Less => {
                        right = Some((right_rest.left_subtract(&left_rest), rv));
                        left = lhs.next().map(|(i, v)| (i.clone(), v));
                    }
                    Ordering::Greater => {
                        left = Some((left_rest.left_subtract(&right_rest), lv));
                        right = rhs.next().map(|(i, v)| (i.clone(), v));
                    }
                }
            }
        }
    }
    InclusionRelation::from_mask(mask)
}

/// Value relation for plain codomains: equal or unrelated.
#[inline]
pub fn value_equality<V: PartialEq>(lhs: &V, rhs: &V) -> InclusionRelation {
    if lhs == rhs {
        InclusionRelation::Equal
    } else {
        InclusionRelation::Unrelated
    }
}

/// Value relation for set-valued codomains, recursing into the sets.
#[inline]
pub fn set_value_inclusion<E: Ord>(lhs: &BTreeSet<E>, rhs: &BTreeSet<E>) -> InclusionRelation {
    match (lhs.is_subset(rhs), rhs.is_subset(lhs)) {
        (true, true) => InclusionRelation::Equal,
        (true, false) => InclusionRelation::Subset,
        (false, true) => InclusionRelation::Superset,
        (false, false) => InclusionRelation::Unrelated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(a: i64, b: i64) -> Interval<i64> {
        Interval::closed(a, b)
    }

    fn stream(segments: &[(i64, i64, i32)]) -> Vec<(Interval<i64>, i32)> {
        segments.iter().map(|&(a, b, v)| (iv(a, b), v)).collect()
    }

    fn cmp(lhs: &[(Interval<i64>, i32)], rhs: &[(Interval<i64>, i32)]) -> Ordering {
        element_compare(
            lhs.iter().map(|(i, v)| (i, v)),
            rhs.iter().map(|(i, v)| (i, v)),
        )
    }

    fn incl(lhs: &[(Interval<i64>, i32)], rhs: &[(Interval<i64>, i32)]) -> InclusionRelation {
        inclusion_compare(
            lhs.iter().map(|(i, v)| (i, v)),
            rhs.iter().map(|(i, v)| (i, v)),
            value_equality,
        )
    }

    #[test]
    fn test_element_compare_segmentation_invariance() {
        let joined = stream(&[(1, 5, 7)]);
        let split = stream(&[(1, 2, 7), (3, 5, 7)]);
        assert_eq!(cmp(&joined, &split), Ordering::Equal);
        assert!(is_element_equal(
            joined.iter().map(|(i, v)| (i, v)),
            split.iter().map(|(i, v)| (i, v)),
        ));
    }

    #[test]
    fn test_element_compare_prefix_is_less() {
        let short = stream(&[(1, 2, 7)]);
        let long = stream(&[(1, 5, 7)]);
        assert_eq!(cmp(&short, &long), Ordering::Less);
        assert_eq!(cmp(&long, &short), Ordering::Greater);
    }

    #[test]
    fn test_element_compare_smaller_first_element_wins() {
        let low = stream(&[(0, 0, 7)]);
        let high = stream(&[(1, 5, 7)]);
        assert_eq!(cmp(&low, &high), Ordering::Less);
    }

    #[test]
    fn test_element_compare_value_breaks_tie() {
        let small = stream(&[(1, 5, 3)]);
        let large = stream(&[(1, 5, 4)]);
        assert_eq!(cmp(&small, &large), Ordering::Less);
    }

    #[test]
    fn test_inclusion_subset_and_superset() {
        let sub = stream(&[(2, 4, 7)]);
        let sup = stream(&[(1, 5, 7)]);
        assert_eq!(incl(&sub, &sup), InclusionRelation::Subset);
        assert_eq!(incl(&sup, &sub), InclusionRelation::Superset);
        assert_eq!(incl(&sup, &sup), InclusionRelation::Equal);
    }

    #[test]
    fn test_inclusion_gap_in_superset_side() {
        let sub = stream(&[(1, 2, 7), (4, 5, 7)]);
        let sup = stream(&[(1, 5, 7)]);
        assert_eq!(incl(&sub, &sup), InclusionRelation::Subset);
    }

    #[test]
    fn test_inclusion_value_mismatch_is_unrelated() {
        let lhs = stream(&[(1, 5, 7)]);
        let rhs = stream(&[(1, 5, 8)]);
        assert_eq!(incl(&lhs, &rhs), InclusionRelation::Unrelated);
    }

    #[test]
    fn test_inclusion_disjoint_is_unrelated() {
        let lhs = stream(&[(1, 2, 7)]);
        let rhs = stream(&[(4, 5, 7)]);
        assert_eq!(incl(&lhs, &rhs), InclusionRelation::Unrelated);
    }

    #[test]
    fn test_inclusion_empty_stream_is_subset() {
        let none: Vec<(Interval<i64>, i32)> = Vec::new();
        let some = stream(&[(1, 5, 7)]);
        assert_eq!(incl(&none, &some), InclusionRelation::Subset);
        assert_eq!(incl(&some, &none), InclusionRelation::Superset);
        assert_eq!(incl(&none, &none), InclusionRelation::Equal);
    }

    #[test]
    fn test_inclusion_consistent_with_element_equality() {
        let joined = stream(&[(1, 5, 7)]);
        let split = stream(&[(1, 3, 7), (4, 5, 7)]);
        assert_eq!(incl(&joined, &split), InclusionRelation::Equal);
        assert_eq!(cmp(&joined, &split), Ordering::Equal);
    }

    #[test]
    fn test_set_value_inclusion() {
        let small: BTreeSet<i32> = [1].into_iter().collect();
        let big: BTreeSet<i32> = [1, 2].into_iter().collect();
        let other: BTreeSet<i32> = [9].into_iter().collect();
        assert_eq!(set_value_inclusion(&small, &big), InclusionRelation::Subset);
        assert_eq!(set_value_inclusion(&big, &small), InclusionRelation::Superset);
        assert_eq!(set_value_inclusion(&big, &big), InclusionRelation::Equal);
        assert_eq!(set_value_inclusion(&small, &other), InclusionRelation::Unrelated);
    }
}
