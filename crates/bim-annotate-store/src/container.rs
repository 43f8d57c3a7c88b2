// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Versioned JSON envelope for documents
//!
//! The envelope carries a format tag so a reader can reject foreign or
//! future files before touching the document body.

use bim_annotate_model::Document;
use serde::{Deserialize, Serialize};

/// Format tag written into every container
pub const FORMAT_TAG: &str = "bim-annotate/1";

/// On-disk shape of a document container
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Envelope {
    /// Format tag, must equal [`FORMAT_TAG`]
    pub format: String,
    /// The document body
    pub document: Document,
}

impl Envelope {
    /// Wrap a document for writing
    pub fn wrap(document: Document) -> Self {
        Self {
            format: FORMAT_TAG.to_string(),
            document,
        }
    }

    /// Unwrap after reading, checking the format tag
    pub fn unwrap_checked(self) -> Result<Document, String> {
        if self.format == FORMAT_TAG {
            Ok(self.document)
        } else {
            Err(format!(
                "unsupported container format {:?}, expected {FORMAT_TAG:?}",
                self.format
            ))
        }
    }
}
