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

//! # interval-kit-containers
//!
//! Interval sets and interval maps over the domains of
//! `interval-kit-core`, storing element content as runs of disjoint
//! interval segments.
//!
//! The containers are configured at the type level:
//!
//! - a [combining style](style) decides what happens to segment borders
//!   (joining, separating or splitting),
//! - maps additionally take a [codomain combiner](combine) telling
//!   overlapping values how to aggregate, and an
//!   [absorption policy](policy) deciding totality and the fate of
//!   identity values.
//!
//! Containers with different styles hold the same element content in
//! differently segmented form; equality, ordering and inclusion compare
//! the flattened content through the [compare] engine, never the raw
//! segmentation.
//!
//! ```
//! use interval_kit_containers::prelude::*;
//!
//! let mut booked: IntervalSet<i64> = IntervalSet::new();
//! booked.add(&Interval::closed(1, 3));
//! booked.add(&Interval::closed(4, 8));
//! assert_eq!(booked.find(&2), Some(&Interval::closed(1, 8)));
//!
//! let mut load: IntervalMap<i64, i64> = IntervalMap::new();
//! load.add(&Interval::closed(1, 5), &1);
//! load.add(&Interval::closed(4, 8), &1);
//! assert_eq!(load.find(&4), Some((&Interval::closed(4, 5), &2)));
//! ```

pub mod combine;
pub mod compare;
pub mod map;
pub mod policy;
pub mod set;
pub(crate) mod store;
pub mod style;

/// The commonly used container types and strategies in one import.
pub mod prelude {
    pub use crate::combine::{Additive, Combine, SetMinus, SetUnion, Subtractive};
    pub use crate::compare::InclusionRelation;
    pub use crate::map::{IntervalMap, SegmentMap, SeparateIntervalMap, SplitIntervalMap};
    pub use crate::policy::{
        AbsorptionPolicy, PartialAbsorber, PartialEnricher, TotalAbsorber, TotalEnricher,
    };
    pub use crate::set::{IntervalSet, SegmentSet, SeparateIntervalSet, SplitIntervalSet};
    pub use crate::style::{CombiningStyle, Joining, Separating, Splitting};
    pub use interval_kit_core::{BoundKind, Cardinality, Domain, Interval};
}
