// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Storage seam for document container backends
//!
//! The container format is owned by an external CAD engine; this crate only
//! sees a load/save interface. Backends are expected to preserve every byte
//! of geometry and every object not touched by the annotation pass.

use crate::{Document, Result};
use std::path::Path;

/// Load/save interface for document containers
///
/// # Example
///
/// ```ignore
/// use bim_annotate_model::DocumentStore;
///
/// fn roundtrip(store: &dyn DocumentStore, path: &std::path::Path) -> bim_annotate_model::Result<()> {
///     let doc = store.load(path)?;
///     store.save(&doc, path)
/// }
/// ```
pub trait DocumentStore: Send + Sync {
    /// Load a document from `path`
    ///
    /// # Errors
    /// Returns [`StoreError::Load`](crate::StoreError::Load) if the file is
    /// missing, unreadable, or not in the expected container format.
    fn load(&self, path: &Path) -> Result<Document>;

    /// Save a document to `path`
    ///
    /// Must never partially overwrite the destination: implementations write
    /// to a temporary location and atomically replace, or fail before
    /// touching the destination.
    ///
    /// # Errors
    /// Returns [`StoreError::Save`](crate::StoreError::Save) if the
    /// destination is unwritable.
    fn save(&self, document: &Document, path: &Path) -> Result<()>;
}
