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

//! Codomain combiners for interval maps.
//!
//! A [`Combine`] implementation tells the map how overlapping values are
//! aggregated. It is a zero-sized strategy selected at the type level;
//! the map calls its associated functions, never an instance.
//!
//! The trait carries three aggregation flavors:
//!
//! - [`Combine::combine`] — overlap on `add`.
//! - [`Combine::intersect`] — overlap when building an intersection. For
//!   plain values this is the same aggregation as `combine` (a counter
//!   map intersection adds the counters); set-valued combiners override
//!   it with set intersection.
//! - [`Combine::flip_common`] — the staged value for a region common to
//!   both operands of a symmetric difference: the identity for plain
//!   values, the set symmetric difference for set values.
//!
//! [`Combine::value_inclusion`] is the value relation containment checks
//! use: equality for plain values, subset inclusion for set values.

use crate::compare::{set_value_inclusion, value_equality, InclusionRelation};
use num_traits::Zero;
use std::collections::BTreeSet;
use std::ops::{Add, Sub};

/// Aggregation strategy for a map's codomain type `V`.
pub trait Combine<V> {
    /// The combiner undoing this one; used by `subtract`.
    type Inverse: Combine<V>;

    /// The neutral value of the aggregation.
    fn identity() -> V;

    /// Aggregates `operand` into `acc`.
    fn combine(acc: &mut V, operand: &V);

    /// Aggregates values on the common region of an intersection.
    #[inline]
    fn intersect(acc: &mut V, operand: &V) {
        Self::combine(acc, operand);
    }

    /// Stages the value for a region common to both operands of a
    /// symmetric difference.
    #[inline]
    fn flip_common(acc: &mut V, operand: &V) {
        let _ = operand;
        *acc = Self::identity();
    }

    /// `operand` aggregated into the identity, so that first insertion
    /// and combination into an existing value share one code path.
    #[inline]
    fn version(operand: &V) -> V {
        let mut out = Self::identity();
        Self::combine(&mut out, operand);
        out
    }

    /// Relates two values for containment checks. Plain values only
    /// contain each other when equal; set-valued combiners refine this
    /// to subset inclusion.
    #[inline]
    fn value_inclusion(lhs: &V, rhs: &V) -> InclusionRelation
    where
        V: PartialEq,
    {
        value_equality(lhs, rhs)
    }
}

/// Aggregates by addition; the default combiner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Additive;

/// Aggregates by subtraction; the inverse of [`Additive`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Subtractive;

impl<V> Combine<V> for Additive
where
    V: Clone + Zero + Add<Output = V> + Sub<Output = V>,
{
    type Inverse = Subtractive;

    #[inline]
    fn identity() -> V {
        V::zero()
    }

    #[inline]
    fn combine(acc: &mut V, operand: &V) {
        *acc = acc.clone() + operand.clone();
    }
}

impl<V> Combine<V> for Subtractive
where
    V: Clone + Zero + Add<Output = V> + Sub<Output = V>,
{
    type Inverse = Additive;

    #[inline]
    fn identity() -> V {
        V::zero()
    }

    #[inline]
    fn combine(acc: &mut V, operand: &V) {
        *acc = acc.clone() - operand.clone();
    }
}

/// Set-valued aggregation by union, with set semantics for intersection
/// and symmetric difference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SetUnion;

/// Set-valued aggregation by difference; the inverse of [`SetUnion`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SetMinus;

impl<E: Ord + Clone> Combine<BTreeSet<E>> for SetUnion {
    type Inverse = SetMinus;

    #[inline]
    fn identity() -> BTreeSet<E> {
        BTreeSet::new()
    }

    #[inline]
    fn combine(acc: &mut BTreeSet<E>, operand: &BTreeSet<E>) {
        acc.extend(operand.iter().cloned());
    }

    #[inline]
    fn intersect(acc: &mut BTreeSet<E>, operand: &BTreeSet<E>) {
        acc.retain(|element| operand.contains(element));
    }

    #[inline]
    fn flip_common(acc: &mut BTreeSet<E>, operand: &BTreeSet<E>) {
        *acc = acc.symmetric_difference(operand).cloned().collect();
    }

    #[inline]
    fn value_inclusion(lhs: &BTreeSet<E>, rhs: &BTreeSet<E>) -> InclusionRelation {
        set_value_inclusion(lhs, rhs)
    }
}

impl<E: Ord + Clone> Combine<BTreeSet<E>> for SetMinus {
    type Inverse = SetUnion;

    #[inline]
    fn identity() -> BTreeSet<E> {
        BTreeSet::new()
    }

    #[inline]
    fn combine(acc: &mut BTreeSet<E>, operand: &BTreeSet<E>) {
        for element in operand {
            acc.remove(element);
        }
    }

    #[inline]
    fn value_inclusion(lhs: &BTreeSet<E>, rhs: &BTreeSet<E>) -> InclusionRelation {
        set_value_inclusion(lhs, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(elements: &[i32]) -> BTreeSet<i32> {
        elements.iter().copied().collect()
    }

    #[test]
    fn test_additive_combine_and_version() {
        let mut acc = 3i64;
        Additive::combine(&mut acc, &4);
        assert_eq!(acc, 7);
        assert_eq!(<Additive as Combine<i64>>::version(&5), 5);
        assert_eq!(<Additive as Combine<i64>>::identity(), 0);
    }

    #[test]
    fn test_subtractive_is_inverse_of_additive() {
        let mut acc = 7i64;
        Subtractive::combine(&mut acc, &4);
        assert_eq!(acc, 3);
        // Versioning through the inverse negates.
        assert_eq!(<Subtractive as Combine<i64>>::version(&5), -5);
    }

    #[test]
    fn test_additive_flip_common_stages_identity() {
        let mut acc = 9i64;
        <Additive as Combine<i64>>::flip_common(&mut acc, &4);
        assert_eq!(acc, 0);
    }

    #[test]
    fn test_set_union_combine_intersect_flip() {
        let mut acc = set(&[1, 2, 3]);
        SetUnion::combine(&mut acc, &set(&[3, 4]));
        assert_eq!(acc, set(&[1, 2, 3, 4]));

        let mut acc = set(&[1, 2, 3]);
        SetUnion::intersect(&mut acc, &set(&[2, 3, 4]));
        assert_eq!(acc, set(&[2, 3]));

        let mut acc = set(&[1, 2, 3]);
        SetUnion::flip_common(&mut acc, &set(&[2, 3, 4]));
        assert_eq!(acc, set(&[1, 4]));
    }

    #[test]
    fn test_set_minus_removes_elements() {
        let mut acc = set(&[1, 2, 3]);
        SetMinus::combine(&mut acc, &set(&[2, 9]));
        assert_eq!(acc, set(&[1, 3]));
    }

    #[test]
    fn test_value_inclusion_refines_to_subset_for_sets() {
        assert_eq!(
            <Additive as Combine<i64>>::value_inclusion(&3, &3),
            InclusionRelation::Equal
        );
        assert_eq!(
            <Additive as Combine<i64>>::value_inclusion(&3, &4),
            InclusionRelation::Unrelated
        );
        assert_eq!(
            <SetUnion as Combine<BTreeSet<i32>>>::value_inclusion(&set(&[1]), &set(&[1, 2])),
            InclusionRelation::Subset
        );
        assert_eq!(
            <SetUnion as Combine<BTreeSet<i32>>>::value_inclusion(&set(&[1, 2]), &set(&[2])),
            InclusionRelation::Superset
        );
    }
}
