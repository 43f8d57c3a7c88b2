// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for document storage
//!
//! The annotation pass itself cannot fail: unclassifiable elements degrade
//! to `Unknown` rather than raising. The only hard failures come from the
//! storage layer, and both carry the offending path. Neither is retried;
//! a corrupt input or an unwritable destination needs external remediation.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur loading or saving a document container
#[derive(Error, Debug)]
pub enum StoreError {
    /// Input document missing, corrupt, or not in the expected format
    #[error("failed to load {}: {reason}", path.display())]
    Load {
        /// Offending input path
        path: PathBuf,
        /// Cause, as reported by the container backend
        reason: String,
    },

    /// Destination unwritable (permissions, disk full, path invalid)
    #[error("failed to save {}: {reason}", path.display())]
    Save {
        /// Offending destination path
        path: PathBuf,
        /// Cause, as reported by the container backend
        reason: String,
    },
}

impl StoreError {
    /// Create a new load error
    pub fn load(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        StoreError::Load {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create a new save error
    pub fn save(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        StoreError::Save {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Path of the offending file
    pub fn path(&self) -> &Path {
        match self {
            StoreError::Load { path, .. } | StoreError::Save { path, .. } => path,
        }
    }
}
