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

//! # Dynamically Bounded Intervals
//!
//! A single [`Interval`] type covers all four bound combinations at
//! runtime. Its operations are bound-kind aware and domain aware: on
//! discrete domains `[1, 2]` and `(2, 5]` touch seamlessly, on continuous
//! domains touching additionally depends on which side is closed.
//!
//! The permissive constructors normalize degenerate input (reversed
//! bounds) to the empty interval; [`Interval::try_new`] rejects it with
//! [`ReversedBoundsError`] instead. An empty interval behaves as absent
//! in every predicate: it is exclusively less than everything, intersects
//! nothing and touches nothing.

use crate::bounds::BoundKind;
use crate::domain::{Cardinality, Domain};
use num_traits::Zero;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;

/// An interval over a [`Domain`] with per-instance bound kinds.
///
/// # Examples
///
/// ```
/// use interval_kit_core::interval::Interval;
///
/// let a = Interval::closed(1, 5);
/// assert!(a.contains(&1));
/// assert!(a.contains(&5));
///
/// let b = Interval::right_open(5, 8);
/// assert!(!b.contains(&8));
/// assert!(a.intersects(&b)); // both contain 5
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    lower: T,
    upper: T,
    bounds: BoundKind,
}

impl<T: Domain> Interval<T> {
    /// Creates an interval with explicit bound kinds.
    ///
    /// Reversed input (`upper < lower`) is normalized to the empty
    /// interval, as is any bound combination that encloses no element.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_kit_core::bounds::BoundKind;
    /// use interval_kit_core::interval::Interval;
    ///
    /// let a = Interval::new(1, 5, BoundKind::LeftOpen);
    /// assert!(!a.contains(&1));
    /// assert!(a.contains(&5));
    ///
    /// let reversed = Interval::new(5, 1, BoundKind::Closed);
    /// assert!(reversed.is_empty());
    /// ```
    #[inline]
    pub fn new(lower: T, upper: T, bounds: BoundKind) -> Self {
        let candidate = Self {
            lower,
            upper,
            bounds,
        };
        if candidate.is_empty() {
            Self::empty()
        } else {
            candidate
        }
    }

    /// Creates an interval with explicit bound kinds, rejecting reversed
    /// bounds.
    ///
    /// Unlike [`Interval::new`], an `upper < lower` input is reported as
    /// a [`ReversedBoundsError`] rather than collapsed to the empty
    /// interval. Well-ordered but element-free input (such as `(3, 3]`)
    /// still normalizes to empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_kit_core::bounds::BoundKind;
    /// use interval_kit_core::interval::Interval;
    ///
    /// assert!(Interval::try_new(1, 5, BoundKind::Closed).is_ok());
    /// assert!(Interval::try_new(5, 1, BoundKind::Closed).is_err());
    /// ```
    #[inline]
    pub fn try_new(lower: T, upper: T, bounds: BoundKind) -> Result<Self, ReversedBoundsError<T>> {
        if upper < lower {
            return Err(ReversedBoundsError::new(lower, upper));
        }
        Ok(Self::new(lower, upper, bounds))
    }

    /// Creates the closed interval `[lower, upper]`.
    #[inline]
    pub fn closed(lower: T, upper: T) -> Self {
        Self::new(lower, upper, BoundKind::Closed)
    }

    /// Creates the open interval `(lower, upper)`.
    #[inline]
    pub fn open(lower: T, upper: T) -> Self {
        Self::new(lower, upper, BoundKind::Open)
    }

    /// Creates the left-open interval `(lower, upper]`.
    #[inline]
    pub fn left_open(lower: T, upper: T) -> Self {
        Self::new(lower, upper, BoundKind::LeftOpen)
    }

    /// Creates the right-open interval `[lower, upper)`.
    #[inline]
    pub fn right_open(lower: T, upper: T) -> Self {
        Self::new(lower, upper, BoundKind::RightOpen)
    }

    /// Creates the degenerate closed interval `[value, value]`.
    #[inline]
    pub fn point(value: T) -> Self {
        Self {
            lower: value.clone(),
            upper: value,
            bounds: BoundKind::Closed,
        }
    }

    /// Creates the canonical empty interval.
    #[inline]
    pub fn empty() -> Self {
        Self {
            lower: T::default(),
            upper: T::default(),
            bounds: BoundKind::Open,
        }
    }

    /// Returns the raw lower bound value.
    #[inline]
    pub fn lower(&self) -> &T {
        &self.lower
    }

    /// Returns the raw upper bound value.
    #[inline]
    pub fn upper(&self) -> &T {
        &self.upper
    }

    /// Returns the bound kind of this interval.
    #[inline]
    pub fn bounds(&self) -> BoundKind {
        self.bounds
    }

    /// Returns `true` if the interval encloses no element.
    ///
    /// On discrete domains open bounds are resolved to the enclosed
    /// elements, so `(2, 3)` over `i32` is empty while `[2, 3)` is not.
    pub fn is_empty(&self) -> bool {
        if T::DISCRETE {
            match (self.first_raw(), self.last_raw()) {
                (Some(first), Some(last)) => first > last,
                // Stepping past the edge of the representable range.
                _ => true,
            }
        } else {
            match self.lower.cmp(&self.upper) {
                Ordering::Less => false,
                Ordering::Equal => self.bounds != BoundKind::Closed,
                Ordering::Greater => true,
            }
        }
    }

    /// The smallest enclosed element, if the domain pins one down.
    ///
    /// On discrete domains this resolves open lower bounds to the first
    /// enclosed element. On continuous domains only a closed lower bound
    /// yields a first element.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_kit_core::interval::Interval;
    ///
    /// assert_eq!(Interval::left_open(2, 5).first(), Some(3));
    /// assert_eq!(Interval::left_open("a".to_string(), "b".to_string()).first(), None);
    /// ```
    #[inline]
    pub fn first(&self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            self.first_raw()
        }
    }

    /// The largest enclosed element, if the domain pins one down.
    #[inline]
    pub fn last(&self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            self.last_raw()
        }
    }

    #[inline]
    fn first_raw(&self) -> Option<T> {
        if self.bounds.left_closed() {
            Some(self.lower.clone())
        } else if T::DISCRETE {
            self.lower.successor()
        } else {
            None
        }
    }

    #[inline]
    fn last_raw(&self) -> Option<T> {
        if self.bounds.right_closed() {
            Some(self.upper.clone())
        } else if T::DISCRETE {
            self.upper.predecessor()
        } else {
            None
        }
    }

    /// Returns `true` if `x` lies inside the interval.
    #[inline]
    pub fn contains(&self, x: &T) -> bool {
        let lower_ok = if self.bounds.left_closed() {
            self.lower <= *x
        } else {
            self.lower < *x
        };
        let upper_ok = if self.bounds.right_closed() {
            *x <= self.upper
        } else {
            *x < self.upper
        };
        lower_ok && upper_ok
    }

    /// Returns `true` if every element of `other` lies inside `self`.
    ///
    /// The empty interval is contained in everything.
    pub fn contains_interval(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.is_empty() {
            return false;
        }
        self.cmp_lower_edge(other) != Ordering::Greater
            && self.cmp_upper_edge(other) != Ordering::Less
    }

    /// Returns `true` if `self` lies entirely before `other` with no
    /// shared element.
    ///
    /// An empty operand on either side makes this `true`: emptiness is
    /// exclusively less than everything, including another empty
    /// interval.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_kit_core::interval::Interval;
    ///
    /// assert!(Interval::closed(1, 2).exclusive_less(&Interval::closed(3, 4)));
    /// assert!(!Interval::closed(1, 3).exclusive_less(&Interval::closed(3, 4)));
    /// // Continuous domains: touching open/closed ends share no element.
    /// let a = Interval::right_open("a".to_string(), "m".to_string());
    /// let b = Interval::closed("m".to_string(), "z".to_string());
    /// assert!(a.exclusive_less(&b));
    /// ```
    pub fn exclusive_less(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return true;
        }
        if T::DISCRETE {
            match (self.last_raw(), other.first_raw()) {
                (Some(last), Some(first)) => last < first,
                _ => true,
            }
        } else {
            match self.upper.cmp(&other.lower) {
                Ordering::Less => true,
                Ordering::Equal => {
                    !(self.bounds.right_closed() && other.bounds.left_closed())
                }
                Ordering::Greater => false,
            }
        }
    }

    /// Returns `true` if `self` ends exactly where `other` begins, with
    /// neither a gap nor a shared element in between.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_kit_core::interval::Interval;
    ///
    /// // Discrete: consecutive elements touch.
    /// assert!(Interval::closed(1, 2).touches(&Interval::closed(3, 4)));
    /// assert!(!Interval::closed(1, 2).touches(&Interval::closed(4, 5)));
    /// // Continuous: exactly one of the meeting ends must be closed.
    /// let a = Interval::right_open("a".to_string(), "m".to_string());
    /// let b = Interval::closed("m".to_string(), "z".to_string());
    /// assert!(a.touches(&b));
    /// ```
    pub fn touches(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if T::DISCRETE {
            match (self.last_raw().and_then(|l| l.successor()), other.first_raw()) {
                (Some(next), Some(first)) => next == first,
                _ => false,
            }
        } else {
            self.upper == other.lower
                && (self.bounds.right_closed() != other.bounds.left_closed())
        }
    }

    /// Returns `true` if the intervals share at least one element.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !self.exclusive_less(other) && !other.exclusive_less(self)
    }

    /// The smallest interval containing both operands.
    ///
    /// The empty interval is the identity of `hull`.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_kit_core::interval::Interval;
    ///
    /// let h = Interval::closed(1, 3).hull(&Interval::closed(7, 9));
    /// assert_eq!(h, Interval::closed(1, 9));
    /// ```
    pub fn hull(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        let (lo, lo_closed) = if self.cmp_lower_edge(other) != Ordering::Greater {
            self.lower_edge()
        } else {
            other.lower_edge()
        };
        let (hi, hi_closed) = if self.cmp_upper_edge(other) != Ordering::Less {
            self.upper_edge()
        } else {
            other.upper_edge()
        };
        Self::from_edges(lo, lo_closed, hi, hi_closed)
    }

    /// The largest interval contained in both operands, or empty.
    pub fn intersection(&self, other: &Self) -> Self {
        if !self.intersects(other) {
            return Self::empty();
        }
        let (lo, lo_closed) = if self.cmp_lower_edge(other) == Ordering::Less {
            other.lower_edge()
        } else {
            self.lower_edge()
        };
        let (hi, hi_closed) = if self.cmp_upper_edge(other) == Ordering::Greater {
            other.upper_edge()
        } else {
            self.upper_edge()
        };
        Self::from_edges(lo, lo_closed, hi, hi_closed)
    }

    /// The part of `self` strictly to the right of `other`'s upper edge.
    ///
    /// If `other` lies entirely before `self`, the result is `self`
    /// unchanged; if `other` reaches past `self`'s end, the result is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_kit_core::interval::Interval;
    ///
    /// let rest = Interval::closed(1, 9).left_subtract(&Interval::closed(3, 6));
    /// assert_eq!(rest.first(), Some(7));
    /// assert_eq!(rest.last(), Some(9));
    /// ```
    pub fn left_subtract(&self, other: &Self) -> Self {
        if other.exclusive_less(self) {
            return self.clone();
        }
        if self.is_empty() {
            return Self::empty();
        }
        let (cut, cut_closed) = other.upper_edge();
        let (hi, hi_closed) = self.upper_edge();
        Self::from_edges(cut, !cut_closed, hi, hi_closed)
    }

    /// The part of `self` strictly to the left of `other`'s lower edge.
    ///
    /// If `self` lies entirely before `other`, the result is `self`
    /// unchanged; if `other` reaches before `self`'s start, the result is
    /// empty.
    pub fn right_subtract(&self, other: &Self) -> Self {
        if self.exclusive_less(other) {
            return self.clone();
        }
        if self.is_empty() {
            return Self::empty();
        }
        let (cut, cut_closed) = other.lower_edge();
        let (lo, lo_closed) = self.lower_edge();
        Self::from_edges(lo, lo_closed, cut, !cut_closed)
    }

    /// The gap strictly between two disjoint intervals, or empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_kit_core::interval::Interval;
    ///
    /// let gap = Interval::closed(1, 2).inner_complement(&Interval::closed(6, 9));
    /// assert_eq!(gap, Interval::closed(3, 5));
    /// // Touching intervals leave no gap.
    /// assert!(Interval::closed(1, 2)
    ///     .inner_complement(&Interval::closed(3, 9))
    ///     .is_empty());
    /// ```
    pub fn inner_complement(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }
        if self.exclusive_less(other) {
            let (lo, lo_closed) = self.upper_edge();
            let (hi, hi_closed) = other.lower_edge();
            return Self::from_edges(lo, !lo_closed, hi, !hi_closed);
        }
        if other.exclusive_less(self) {
            return other.inner_complement(self);
        }
        Self::empty()
    }

    /// The canonical representation of this interval.
    ///
    /// On discrete domains every non-empty interval normalizes to the
    /// closed form over its first and last element, so structural
    /// equality coincides with element equality. Continuous intervals are
    /// returned unchanged, and any empty interval normalizes to
    /// [`Interval::empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_kit_core::interval::Interval;
    ///
    /// assert_eq!(Interval::right_open(1, 5).normalized(), Interval::closed(1, 4));
    /// assert_eq!(Interval::open(2, 3).normalized(), Interval::empty());
    /// ```
    pub fn normalized(&self) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        if T::DISCRETE {
            match (self.first_raw(), self.last_raw()) {
                (Some(first), Some(last)) => Self {
                    lower: first,
                    upper: last,
                    bounds: BoundKind::Closed,
                },
                _ => Self::empty(),
            }
        } else {
            self.clone()
        }
    }

    /// The difference between the canonical endpoints of the interval.
    ///
    /// For discrete intervals this is `last - first` (so a single point
    /// has length zero); for continuous intervals it is `upper - lower`
    /// regardless of the bound kinds. Empty intervals have length zero.
    pub fn length<D>(&self) -> D
    where
        T: Sub<T, Output = D>,
        D: Zero,
    {
        if self.is_empty() {
            return D::zero();
        }
        if T::DISCRETE {
            match (self.first_raw(), self.last_raw()) {
                (Some(first), Some(last)) => last - first,
                _ => D::zero(),
            }
        } else {
            self.upper.clone() - self.lower.clone()
        }
    }

    /// The number of elements enclosed by the interval.
    ///
    /// A degenerate closed continuous interval holds exactly one element;
    /// any other non-empty continuous interval holds infinitely many.
    ///
    /// # Examples
    ///
    /// ```
    /// use interval_kit_core::domain::Cardinality;
    /// use interval_kit_core::interval::Interval;
    ///
    /// assert_eq!(Interval::closed(1, 4).cardinality(), Cardinality::Finite(4));
    /// assert_eq!(
    ///     Interval::closed("a".to_string(), "a".to_string()).cardinality(),
    ///     Cardinality::Finite(1)
    /// );
    /// assert_eq!(
    ///     Interval::closed("a".to_string(), "b".to_string()).cardinality(),
    ///     Cardinality::Infinite
    /// );
    /// ```
    pub fn cardinality(&self) -> Cardinality {
        if self.is_empty() {
            return Cardinality::Finite(0);
        }
        if T::DISCRETE {
            match (self.first_raw(), self.last_raw()) {
                (Some(first), Some(last)) => match T::unit_distance(&first, &last) {
                    Some(d) => Cardinality::Finite(d.saturating_add(1)),
                    None => Cardinality::Infinite,
                },
                _ => Cardinality::Finite(0),
            }
        } else if self.lower == self.upper {
            Cardinality::Finite(1)
        } else {
            Cardinality::Infinite
        }
    }

    /// Compares the lower edges of two non-empty intervals.
    ///
    /// On equal edge values a closed edge sorts before an open one, since
    /// it starts earlier. Discrete edges are compared over their
    /// canonical first element.
    pub fn cmp_lower_edge(&self, other: &Self) -> Ordering {
        let (a, a_closed) = self.lower_edge();
        let (b, b_closed) = other.lower_edge();
        a.cmp(&b).then(match (a_closed, b_closed) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        })
    }

    /// Compares the upper edges of two non-empty intervals.
    ///
    /// On equal edge values a closed edge sorts after an open one, since
    /// it reaches further.
    pub fn cmp_upper_edge(&self, other: &Self) -> Ordering {
        let (a, a_closed) = self.upper_edge();
        let (b, b_closed) = other.upper_edge();
        a.cmp(&b).then(match (a_closed, b_closed) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        })
    }

    #[inline]
    fn lower_edge(&self) -> (T, bool) {
        debug_assert!(!self.is_empty());
        if T::DISCRETE {
            match self.first_raw() {
                Some(first) => (first, true),
                None => (self.lower.clone(), self.bounds.left_closed()),
            }
        } else {
            (self.lower.clone(), self.bounds.left_closed())
        }
    }

    #[inline]
    fn upper_edge(&self) -> (T, bool) {
        debug_assert!(!self.is_empty());
        if T::DISCRETE {
            match self.last_raw() {
                Some(last) => (last, true),
                None => (self.upper.clone(), self.bounds.right_closed()),
            }
        } else {
            (self.upper.clone(), self.bounds.right_closed())
        }
    }

    #[inline]
    fn from_edges(lower: T, left_closed: bool, upper: T, right_closed: bool) -> Self {
        Self::new(lower, upper, BoundKind::from_flags(left_closed, right_closed))
    }
}

impl<T: Domain> Default for Interval<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Domain> From<std::ops::Range<T>> for Interval<T> {
    /// A `start..end` range maps to the right-open interval `[start, end)`.
    #[inline]
    fn from(r: std::ops::Range<T>) -> Self {
        Interval::right_open(r.start, r.end)
    }
}

impl<T: Domain> From<std::ops::RangeInclusive<T>> for Interval<T> {
    /// A `start..=end` range maps to the closed interval `[start, end]`.
    #[inline]
    fn from(r: std::ops::RangeInclusive<T>) -> Self {
        let (start, end) = r.into_inner();
        Interval::closed(start, end)
    }
}

impl<T: Domain + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "()");
        }
        let open = if self.bounds.left_closed() { '[' } else { '(' };
        let close = if self.bounds.right_closed() { ']' } else { ')' };
        write!(f, "{}{}, {}{}", open, self.lower, self.upper, close)
    }
}

/// Error returned by [`Interval::try_new`] when `upper < lower`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReversedBoundsError<T> {
    lower: T,
    upper: T,
}

impl<T> ReversedBoundsError<T> {
    /// Creates a new error from the offending bounds.
    #[inline]
    pub fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    /// The lower bound that was passed in.
    #[inline]
    pub fn lower(&self) -> &T {
        &self.lower
    }

    /// The upper bound that was passed in.
    #[inline]
    pub fn upper(&self) -> &T {
        &self.upper
    }
}

impl<T: fmt::Display> fmt::Display for ReversedBoundsError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reversed interval bounds: upper {} is less than lower {}",
            self.upper, self.lower
        )
    }
}

impl<T: fmt::Debug + fmt::Display> std::error::Error for ReversedBoundsError<T> {}
