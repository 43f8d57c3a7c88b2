// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display label assignment
//!
//! Labels follow fixed per-kind templates. Ordinals are 1-based and counted
//! per `(kind, side)` bucket; the counter is monotonic over one pass and
//! never reused, so ties between same-template elements resolve by input
//! order. Elements whose template cannot be satisfied (no side tag where the
//! template needs one, `Unknown` kind) keep their original label.

use bim_annotate_model::{ElementKind, Side};
use rustc_hash::FxHashMap;

/// Stateful label assigner for one annotation pass
///
/// Holds the per-bucket ordinal counters. One assigner serves exactly one
/// document pass; a fresh pass starts from fresh counters.
#[derive(Debug, Default)]
pub struct LabelAssigner {
    counters: FxHashMap<(ElementKind, Option<Side>), u32>,
}

impl LabelAssigner {
    /// Create an assigner with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the display label for the next element of `(kind, side)`
    ///
    /// Returns `None` when the element must keep its original label: unknown
    /// kind, or a template that needs a side tag the element does not have.
    pub fn assign(&mut self, kind: ElementKind, side: Option<Side>, peak: bool) -> Option<String> {
        match kind {
            ElementKind::Footing => {
                let n = self.next_ordinal(kind, None);
                Some(format!("Footing {n}"))
            }
            ElementKind::Column => match side? {
                Side::Center => {
                    let n = self.next_ordinal(kind, Some(Side::Center));
                    Some(format!("Center Column {n}"))
                }
                s @ (Side::Left | Side::Right) => {
                    let n = self.next_ordinal(kind, Some(s));
                    Some(format!("{s} Post {n}"))
                }
            },
            ElementKind::Beam => {
                if peak {
                    Some("Ridge Beam (Peak)".to_string())
                } else {
                    match side? {
                        s @ (Side::Left | Side::Right) => Some(format!("Horizontal Beam ({s})")),
                        Side::Center => None,
                    }
                }
            }
            ElementKind::Rafter => {
                let s = side?;
                let n = self.next_ordinal(kind, Some(s));
                Some(format!("{s} Rafter {n}"))
            }
            ElementKind::Unknown => None,
        }
    }

    fn next_ordinal(&mut self, kind: ElementKind, side: Option<Side>) -> u32 {
        let counter = self.counters.entry((kind, side)).or_insert(0);
        *counter += 1;
        *counter
    }
}
