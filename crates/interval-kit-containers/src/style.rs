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

//! Combining styles for the interval containers.
//!
//! The style decides what a container does with segment borders after a
//! mutation:
//!
//! - [`Joining`]: touching segments with equal values are merged; borders
//!   of the inserted intervals disappear.
//! - [`Separating`]: overlap is resolved, but touching segments are kept
//!   apart; borders between distinct insertions survive.
//! - [`Splitting`]: every border of every inserted interval is preserved;
//!   stored segments are cut at addend boundaries and never merged.

/// Runtime tag for the three combining styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleKind {
    /// Merge touching, equal-valued segments.
    Joining,
    /// Keep touching segments apart, resolve overlap only.
    Separating,
    /// Preserve every inserted border.
    Splitting,
}

/// Marker trait selecting a combining style at the type level.
pub trait CombiningStyle {
    /// The style this marker selects.
    const KIND: StyleKind;
}

/// Marker for the joining style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Joining;

/// Marker for the separating style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Separating;

/// Marker for the splitting style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Splitting;

impl CombiningStyle for Joining {
    const KIND: StyleKind = StyleKind::Joining;
}

impl CombiningStyle for Separating {
    const KIND: StyleKind = StyleKind::Separating;
}

impl CombiningStyle for Splitting {
    const KIND: StyleKind = StyleKind::Splitting;
}
