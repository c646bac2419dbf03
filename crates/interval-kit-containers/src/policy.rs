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

//! Absorption policies for interval maps.
//!
//! A map is *partial* if uncovered regions simply carry no value, or
//! *total* if uncovered regions conceptually carry the combiner's
//! identity value. Independently, it either *absorbs identities*
//! (segments whose value combines down to the identity are removed) or
//! *enriches* (identity-valued segments are kept and visible).
//!
//! Absorption is re-checked after every combine step, so a counter map
//! under an absorbing policy loses a segment the moment its count
//! returns to zero.

/// Type-level configuration of totality and identity absorption.
pub trait AbsorptionPolicy {
    /// Uncovered regions read as identity-valued when `true`.
    const IS_TOTAL: bool;

    /// Identity-valued segments are removed when `true`.
    const ABSORBS_IDENTITIES: bool;
}

/// Partial map that drops identity-valued segments. The default policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PartialAbsorber;

/// Partial map that keeps identity-valued segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PartialEnricher;

/// Total map that drops identity-valued segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TotalAbsorber;

/// Total map that keeps identity-valued segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TotalEnricher;

impl AbsorptionPolicy for PartialAbsorber {
    const IS_TOTAL: bool = false;
    const ABSORBS_IDENTITIES: bool = true;
}

impl AbsorptionPolicy for PartialEnricher {
    const IS_TOTAL: bool = false;
    const ABSORBS_IDENTITIES: bool = false;
}

impl AbsorptionPolicy for TotalAbsorber {
    const IS_TOTAL: bool = true;
    const ABSORBS_IDENTITIES: bool = true;
}

impl AbsorptionPolicy for TotalEnricher {
    const IS_TOTAL: bool = true;
    const ABSORBS_IDENTITIES: bool = false;
}
