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

//! Bound kinds for dynamically bounded intervals.
//!
//! Every [`Interval`](crate::interval::Interval) carries one of the four
//! bound kinds at runtime, so a single interval type covers `[a, b]`,
//! `(a, b]`, `[a, b)` and `(a, b)`.

use std::fmt;

/// The openness of the two ends of an interval.
///
/// # Examples
///
/// ```
/// use interval_kit_core::bounds::BoundKind;
///
/// assert!(BoundKind::Closed.left_closed());
/// assert!(!BoundKind::LeftOpen.left_closed());
/// assert_eq!(BoundKind::from_flags(true, false), BoundKind::RightOpen);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundKind {
    /// `[a, b]` — both ends included.
    Closed,
    /// `(a, b]` — lower end excluded.
    LeftOpen,
    /// `[a, b)` — upper end excluded.
    RightOpen,
    /// `(a, b)` — both ends excluded.
    Open,
}

impl BoundKind {
    /// Builds the bound kind from per-side closedness flags.
    #[inline]
    pub fn from_flags(left_closed: bool, right_closed: bool) -> Self {
        match (left_closed, right_closed) {
            (true, true) => BoundKind::Closed,
            (false, true) => BoundKind::LeftOpen,
            (true, false) => BoundKind::RightOpen,
            (false, false) => BoundKind::Open,
        }
    }

    /// Returns `true` if the lower end is included.
    #[inline]
    pub fn left_closed(&self) -> bool {
        matches!(self, BoundKind::Closed | BoundKind::RightOpen)
    }

    /// Returns `true` if the upper end is included.
    #[inline]
    pub fn right_closed(&self) -> bool {
        matches!(self, BoundKind::Closed | BoundKind::LeftOpen)
    }
}

impl Default for BoundKind {
    /// Closed bounds are the canonical stored form on discrete domains.
    #[inline]
    fn default() -> Self {
        BoundKind::Closed
    }
}

impl fmt::Display for BoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BoundKind::Closed => "[]",
            BoundKind::LeftOpen => "(]",
            BoundKind::RightOpen => "[)",
            BoundKind::Open => "()",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_roundtrip() {
        for kind in [
            BoundKind::Closed,
            BoundKind::LeftOpen,
            BoundKind::RightOpen,
            BoundKind::Open,
        ] {
            assert_eq!(
                BoundKind::from_flags(kind.left_closed(), kind.right_closed()),
                kind
            );
        }
    }

    #[test]
    fn test_side_accessors() {
        assert!(BoundKind::LeftOpen.right_closed());
        assert!(!BoundKind::LeftOpen.left_closed());
        assert!(BoundKind::RightOpen.left_closed());
        assert!(!BoundKind::Open.left_closed());
        assert!(!BoundKind::Open.right_closed());
    }
}
