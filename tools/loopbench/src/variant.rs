// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Loop-body strategies for counting multiples of 16.
//!
//! Every variant walks `i` over `[0, bound)` with a `u32` counter and counts the
//! values whose low four bits are clear. They differ only in code shape; the
//! result is identical for all of them. Each body lives in its own
//! `#[inline(never)]` function so the shapes are compiled and timed separately.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Closed set of loop-body strategies.
///
/// Config files and the command line share [`FromStr`], so both accept
/// mixed case and `_` in place of `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Variant {
    /// `count += if i % 16 == 0 { 1 } else { 0 }` with no intermediate binding.
    SingleConditional,
    /// Binds `is_multiple_of_16` first, then accumulates the conditional.
    NamedConditional,
    /// `if i % 16 == 0 { count += 1 }` inline.
    SingleBranch,
    /// Binds `is_multiple_of_16` first, then branches on it.
    NamedBranch,
    /// Adds the branchless bit expression directly.
    SingleBranchless,
    /// Binds the branchless bit expression, then adds it.
    NamedBranchless,
}

impl Variant {
    /// All variants in table order.
    pub const ALL: [Variant; 6] = [
        Variant::SingleConditional,
        Variant::NamedConditional,
        Variant::SingleBranch,
        Variant::NamedBranch,
        Variant::SingleBranchless,
        Variant::NamedBranchless,
    ];

    /// Stable machine name used on the command line and in config files.
    pub const fn name(self) -> &'static str {
        match self {
            Variant::SingleConditional => "single-conditional",
            Variant::NamedConditional => "named-conditional",
            Variant::SingleBranch => "single-branch",
            Variant::NamedBranch => "named-branch",
            Variant::SingleBranchless => "single-branchless",
            Variant::NamedBranchless => "named-branchless",
        }
    }

    /// Human readable label printed in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Variant::SingleConditional => "Single-line conditional",
            Variant::NamedConditional => "Multi-line conditional",
            Variant::SingleBranch => "Single-line if",
            Variant::NamedBranch => "Multi-line if",
            Variant::SingleBranchless => "Single-line branchless",
            Variant::NamedBranchless => "Multi-line branchless",
        }
    }

    /// Runs this variant's loop body over `[0, bound)` and returns the count.
    pub fn count_multiples(self, bound: u32) -> u32 {
        match self {
            Variant::SingleConditional => single_conditional(bound),
            Variant::NamedConditional => named_conditional(bound),
            Variant::SingleBranch => single_branch(bound),
            Variant::NamedBranch => named_branch(bound),
            Variant::SingleBranchless => single_branchless(bound),
            Variant::NamedBranchless => named_branchless(bound),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Variant::ALL
            .into_iter()
            .find(|variant| variant.name() == wanted)
            .ok_or_else(|| Error::UnknownVariant(s.trim().to_string()))
    }
}

impl TryFrom<String> for Variant {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Returns 1 when `i` is a multiple of 16 and 0 otherwise, without branching.
///
/// OR-ing `i` with its three right shifts folds bits 0..=3 into bit 0, so bit 0
/// of the result is clear exactly when the low four bits of `i` are clear.
/// The branchless loop bodies spell the expression out inline so the timed
/// code shape does not depend on inlining; tests pin both to this function.
#[inline(always)]
pub const fn branchless_is_multiple_of_16(i: u32) -> u32 {
    !(i >> 3 | i >> 2 | i >> 1 | i) & 1
}

#[inline(never)]
#[allow(clippy::bool_to_int_with_if)]
fn single_conditional(bound: u32) -> u32 {
    let mut count: u32 = 0;
    for i in 0..bound {
        count += if i % 16 == 0 { 1 } else { 0 };
    }
    count
}

#[inline(never)]
#[allow(clippy::bool_to_int_with_if)]
fn named_conditional(bound: u32) -> u32 {
    let mut count: u32 = 0;
    for i in 0..bound {
        let is_multiple_of_16 = i % 16 == 0;
        count += if is_multiple_of_16 { 1 } else { 0 };
    }
    count
}

#[inline(never)]
fn single_branch(bound: u32) -> u32 {
    let mut count: u32 = 0;
    for i in 0..bound {
        if i % 16 == 0 {
            count += 1;
        }
    }
    count
}

#[inline(never)]
fn named_branch(bound: u32) -> u32 {
    let mut count: u32 = 0;
    for i in 0..bound {
        let is_multiple_of_16 = i % 16 == 0;
        if is_multiple_of_16 {
            count += 1;
        }
    }
    count
}

#[inline(never)]
fn single_branchless(bound: u32) -> u32 {
    let mut count: u32 = 0;
    for i in 0..bound {
        count += !(i >> 3 | i >> 2 | i >> 1 | i) & 1;
    }
    count
}

#[inline(never)]
fn named_branchless(bound: u32) -> u32 {
    let mut count: u32 = 0;
    for i in 0..bound {
        let is_multiple_of_16 = !(i >> 3 | i >> 2 | i >> 1 | i) & 1;
        count += is_multiple_of_16;
    }
    count
}
