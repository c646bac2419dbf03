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

//! # Domain Elements
//!
//! This module defines the [`Domain`] trait that classifies the element
//! types intervals can range over, and the [`Cardinality`] value type used
//! to report how many elements an interval or container covers.
//!
//! A domain is either *discrete* (its elements have well-defined
//! neighbors, like the integers) or *continuous* (like strings under
//! lexicographic order, where between any two distinct elements there is
//! another one). Several interval semantics depend on this distinction:
//! on a discrete domain `[1, 2]` and `[3, 4]` touch, while on a continuous
//! domain they do not.

use num_traits::Zero;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// An ordered element type that intervals can range over.
///
/// Implementors declare whether the domain is discrete via
/// [`Domain::DISCRETE`]. For discrete domains, [`successor`](Domain::successor)
/// and [`predecessor`](Domain::predecessor) step between neighboring
/// elements and return `None` at the edges of the representable range.
/// Continuous domains return `None` from all three stepping operations.
///
/// # Examples
///
/// ```
/// use interval_kit_core::domain::Domain;
///
/// assert!(i32::DISCRETE);
/// assert_eq!(3i32.successor(), Some(4));
/// assert_eq!(i32::unit_distance(&2, &7), Some(5));
///
/// assert!(!String::DISCRETE);
/// assert_eq!("a".to_string().successor(), None);
/// ```
pub trait Domain: Clone + Ord + Default + fmt::Debug {
    /// `true` if the elements of this domain have well-defined neighbors.
    const DISCRETE: bool;

    /// The smallest element strictly greater than `self`, if any.
    fn successor(&self) -> Option<Self>;

    /// The largest element strictly smaller than `self`, if any.
    fn predecessor(&self) -> Option<Self>;

    /// The number of successor steps from `lo` to `hi`.
    ///
    /// Returns `None` if `hi < lo`, if the distance does not fit into a
    /// `u64`, or if the domain is continuous.
    fn unit_distance(lo: &Self, hi: &Self) -> Option<u64>;
}

macro_rules! impl_signed_domain {
    ($($t:ty),* $(,)?) => {$(
        impl Domain for $t {
            const DISCRETE: bool = true;

            #[inline]
            fn successor(&self) -> Option<Self> {
                self.checked_add(1)
            }

            #[inline]
            fn predecessor(&self) -> Option<Self> {
                self.checked_sub(1)
            }

            #[inline]
            fn unit_distance(lo: &Self, hi: &Self) -> Option<u64> {
                if hi < lo {
                    return None;
                }
                // Widening avoids overflow on full-range differences.
                u64::try_from((*hi as i128) - (*lo as i128)).ok()
            }
        }
    )*};
}

macro_rules! impl_unsigned_domain {
    ($($t:ty),* $(,)?) => {$(
        impl Domain for $t {
            const DISCRETE: bool = true;

            #[inline]
            fn successor(&self) -> Option<Self> {
                self.checked_add(1)
            }

            #[inline]
            fn predecessor(&self) -> Option<Self> {
                self.checked_sub(1)
            }

            #[inline]
            fn unit_distance(lo: &Self, hi: &Self) -> Option<u64> {
                hi.checked_sub(*lo).and_then(|d| u64::try_from(d).ok())
            }
        }
    )*};
}

impl_signed_domain!(i8, i16, i32, i64, isize);
impl_unsigned_domain!(u8, u16, u32, u64, usize);

/// Strings under lexicographic order form a continuous domain: between
/// any two distinct strings there is always another one (append a
/// character to the smaller), so no element has a successor.
impl Domain for String {
    const DISCRETE: bool = false;

    #[inline]
    fn successor(&self) -> Option<Self> {
        None
    }

    #[inline]
    fn predecessor(&self) -> Option<Self> {
        None
    }

    #[inline]
    fn unit_distance(_lo: &Self, _hi: &Self) -> Option<u64> {
        None
    }
}

/// The number of domain elements covered by an interval or container.
///
/// Continuous intervals with more than one element have infinitely many,
/// so cardinality is either a finite count or [`Cardinality::Infinite`].
/// Finite additions saturate at `u64::MAX`.
///
/// # Examples
///
/// ```
/// use interval_kit_core::domain::Cardinality;
///
/// let a = Cardinality::Finite(3);
/// let b = Cardinality::Finite(4);
/// assert_eq!(a + b, Cardinality::Finite(7));
/// assert_eq!(a + Cardinality::Infinite, Cardinality::Infinite);
/// assert!(Cardinality::Finite(u64::MAX) < Cardinality::Infinite);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cardinality {
    /// An exact element count.
    Finite(u64),
    /// More elements than any finite count.
    Infinite,
}

impl Cardinality {
    /// Returns `true` if this is a finite count.
    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self, Cardinality::Finite(_))
    }

    /// Returns the finite count, or `None` for [`Cardinality::Infinite`].
    #[inline]
    pub fn finite(&self) -> Option<u64> {
        match self {
            Cardinality::Finite(n) => Some(*n),
            Cardinality::Infinite => None,
        }
    }
}

impl Add for Cardinality {
    type Output = Cardinality;

    #[inline]
    fn add(self, rhs: Cardinality) -> Cardinality {
        match (self, rhs) {
            (Cardinality::Finite(a), Cardinality::Finite(b)) => {
                Cardinality::Finite(a.saturating_add(b))
            }
            _ => Cardinality::Infinite,
        }
    }
}

impl AddAssign for Cardinality {
    #[inline]
    fn add_assign(&mut self, rhs: Cardinality) {
        *self = *self + rhs;
    }
}

impl Sum for Cardinality {
    #[inline]
    fn sum<I: Iterator<Item = Cardinality>>(iter: I) -> Cardinality {
        iter.fold(Cardinality::zero(), Add::add)
    }
}

impl Zero for Cardinality {
    #[inline]
    fn zero() -> Self {
        Cardinality::Finite(0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        matches!(self, Cardinality::Finite(0))
    }
}

impl Default for Cardinality {
    #[inline]
    fn default() -> Self {
        Cardinality::zero()
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::Finite(n) => write!(f, "{}", n),
            Cardinality::Infinite => write!(f, "inf"),
        }
    }
}

impl PartialEq<u64> for Cardinality {
    #[inline]
    fn eq(&self, other: &u64) -> bool {
        matches!(self, Cardinality::Finite(n) if n == other)
    }
}

impl PartialOrd<u64> for Cardinality {
    #[inline]
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        match self {
            Cardinality::Finite(n) => n.partial_cmp(other),
            Cardinality::Infinite => Some(Ordering::Greater),
        }
    }
}
