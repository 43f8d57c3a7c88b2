// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! BIM-Annotate Store - JSON document container
//!
//! Implements [`DocumentStore`] over a versioned JSON envelope. The
//! binary/zip CAD containers of the originating engines are out of scope;
//! this crate is the seam where such a backend would plug in.
//!
//! Saving never partially overwrites the destination: the document is
//! serialized to a temporary file in the destination directory and renamed
//! into place atomically.
//!
//! [`DocumentStore`]: bim_annotate_model::DocumentStore

pub mod container;
pub mod json;

pub use container::{Envelope, FORMAT_TAG};
pub use json::JsonStore;
