// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! BIM-Annotate Model - Shared types and trait definitions for structural
//! model annotation
//!
//! This crate provides the core abstractions for enriching a tree of typed
//! structural building elements with labels, interop roles, and grouping
//! hierarchy. It holds no annotation logic itself; backends implement the
//! traits defined here.
//!
//! # Architecture
//!
//! - [`Document`] - root owner of the element tree plus open metadata
//! - [`Node`] / [`Group`] / [`Element`] - the containment tree
//! - [`ElementKind`] / [`Side`] / [`ElementRole`] - classification vocabulary
//! - [`DocumentStore`] - load/save seam for container backends
//!
//! # Example
//!
//! ```ignore
//! use bim_annotate_model::{Document, DocumentStore};
//!
//! let store: Box<dyn DocumentStore> = get_store();
//! let mut doc = store.load("frame.bimdoc".as_ref())?;
//! for element in doc.elements() {
//!     println!("{} -> {:?}", element.name, element.kind);
//! }
//! ```

pub mod document;
pub mod error;
pub mod traits;
pub mod tree;
pub mod types;

// Re-export all public types
pub use document::*;
pub use error::*;
pub use traits::*;
pub use tree::*;
pub use types::*;
