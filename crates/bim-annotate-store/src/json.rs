// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON-backed [`DocumentStore`] implementation
//!
//! Load surfaces every failure as a [`StoreError::Load`] carrying the input
//! path; save writes through a temporary file in the destination directory
//! and atomically renames, so a failed save leaves any existing destination
//! intact.
//!
//! [`DocumentStore`]: bim_annotate_model::DocumentStore
//! [`StoreError::Load`]: bim_annotate_model::StoreError::Load

use crate::container::Envelope;
use bim_annotate_model::{Document, DocumentStore, Result, StoreError};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// JSON document container backend
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonStore;

impl JsonStore {
    /// Create a new store
    pub fn new() -> Self {
        JsonStore
    }
}

impl DocumentStore for JsonStore {
    fn load(&self, path: &Path) -> Result<Document> {
        let file = File::open(path).map_err(|e| StoreError::load(path, e))?;
        let envelope: Envelope = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| StoreError::load(path, e))?;
        envelope
            .unwrap_checked()
            .map_err(|reason| StoreError::load(path, reason))
    }

    fn save(&self, document: &Document, path: &Path) -> Result<()> {
        let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))
            .map_err(|e| StoreError::save(path, e))?;

        {
            let envelope = Envelope::wrap(document.clone());
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, &envelope)
                .map_err(|e| StoreError::save(path, e))?;
            writer.write_all(b"\n").map_err(|e| StoreError::save(path, e))?;
            writer.flush().map_err(|e| StoreError::save(path, e))?;
        }

        tmp.persist(path).map_err(|e| StoreError::save(path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bim_annotate_engine::{annotate, AnnotateOptions, Grouping};
    use bim_annotate_model::{Element, Geometry};

    fn sample() -> Document {
        Document::from_elements(
            ["Footing_1", "Post_L_1", "Rafter_R_1"]
                .into_iter()
                .map(|n| Element::new(n, Geometry::new(format!("opaque payload of {n}")))),
        )
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.bimdoc");
        let store = JsonStore::new();

        let mut doc = sample();
        annotate(
            &mut doc,
            &AnnotateOptions {
                grouping: Grouping::ByKind,
                ..Default::default()
            },
        );

        store.save(&doc, &path).unwrap();
        let loaded = store.load(&path).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_roundtrip_preserves_geometry_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.bimdoc");
        let store = JsonStore::new();

        let doc = sample();
        store.save(&doc, &path).unwrap();
        let loaded = store.load(&path).unwrap();

        let before: Vec<&[u8]> = doc.elements().map(|e| e.geometry.as_bytes()).collect();
        let after: Vec<&[u8]> = loaded.elements().map(|e| e.geometry.as_bytes()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_load_missing_file() {
        let store = JsonStore::new();
        let err = store.load(Path::new("/nonexistent/frame.bimdoc")).unwrap_err();
        assert!(matches!(err, StoreError::Load { .. }));
        assert!(err.to_string().contains("/nonexistent/frame.bimdoc"));
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.bimdoc");
        std::fs::write(&path, b"not json at all").unwrap();

        let err = JsonStore::new().load(&path).unwrap_err();
        assert!(matches!(err, StoreError::Load { .. }));
    }

    #[test]
    fn test_load_foreign_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("foreign.bimdoc");
        std::fs::write(&path, br#"{"format":"other/2","document":{}}"#).unwrap();

        let err = JsonStore::new().load(&path).unwrap_err();
        assert!(err.to_string().contains("unsupported container format"));
    }

    #[test]
    fn test_failed_save_leaves_destination_intact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("frame.bimdoc");

        let err = JsonStore::new().save(&sample(), &path).unwrap_err();
        assert!(matches!(err, StoreError::Save { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_overwrites_atomically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.bimdoc");
        let store = JsonStore::new();

        store.save(&sample(), &path).unwrap();
        let mut updated = sample();
        updated.label = Some("v2".to_string());
        store.save(&updated, &path).unwrap();

        assert_eq!(store.load(&path).unwrap().label.as_deref(), Some("v2"));
    }
}
