// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! BIM-Annotate Engine - Rule-based annotation of structural models
//!
//! The engine is a single deterministic pass over one [`Document`]: classify
//! every element by its source identifier, derive display labels and interop
//! roles, optionally re-parent elements into a group hierarchy, and merge
//! document metadata. Geometry payloads are never read or rewritten.
//!
//! Everything here is total: unclassifiable elements keep
//! [`ElementKind::Unknown`] and are left alone, they are never an error.
//!
//! [`Document`]: bim_annotate_model::Document
//! [`ElementKind::Unknown`]: bim_annotate_model::ElementKind::Unknown

pub mod annotate;
pub mod classify;
pub mod group;
pub mod label;
pub mod report;

pub use annotate::{annotate, AnnotateOptions, AnnotateSummary, Grouping};
pub use classify::{classify, peak_hint, role_for, side_hint};
pub use group::{group_by_kind, group_into};
pub use label::LabelAssigner;
pub use report::ModelStatus;
