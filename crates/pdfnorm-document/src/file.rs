// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF file handle — open, inspect, and save documents using the `lopdf` crate.

use std::path::Path;

use lopdf::{Dictionary, Document, Object, ObjectId};
use pdfnorm_core::error::{NormError, Result};
use tracing::{debug, info, instrument};

/// An open PDF document.
///
/// Wraps `lopdf::Document` and carries the facet accessors defined in the
/// sibling modules (`metadata`, `catalog`, `outline`, `names`). One handle
/// per document; nothing below the handle is safe for concurrent mutation.
pub struct PdfFile {
    /// The underlying lopdf document.
    pub(crate) document: Document,
    /// Source path, if opened from a file (useful for diagnostics).
    source_path: Option<String>,
}

impl PdfFile {
    // -- Construction ---------------------------------------------------------

    /// Open a PDF from the filesystem.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path_ref = path.as_ref();
        info!("Opening PDF: {}", path_ref.display());

        let document = Document::load(path_ref).map_err(|err| {
            NormError::Pdf(format!("failed to open {}: {}", path_ref.display(), err))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded");

        Ok(Self {
            document,
            source_path: Some(path_ref.display().to_string()),
        })
    }

    /// Create a handle from raw PDF bytes already in memory.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let document = Document::load_mem(data)
            .map_err(|err| NormError::Pdf(format!("failed to load PDF from memory: {}", err)))?;

        Ok(Self {
            document,
            source_path: None,
        })
    }

    /// Wrap an already-built document. Used by tests and callers that
    /// assemble documents programmatically.
    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            source_path: None,
        }
    }

    // -- Persistence ----------------------------------------------------------

    /// Save the document to `path`.
    pub fn save_to(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path_ref = path.as_ref();
        self.document.save(path_ref).map_err(|err| {
            NormError::Pdf(format!("failed to save {}: {}", path_ref.display(), err))
        })?;
        debug!(path = %path_ref.display(), "PDF saved");
        Ok(())
    }

    /// Serialise the document into a byte vector.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.document
            .save_to(&mut output)
            .map_err(|err| NormError::Pdf(format!("failed to serialise PDF: {}", err)))?;
        Ok(output)
    }

    // -- Inspection -----------------------------------------------------------

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Object ID of the page with the given 1-indexed number.
    pub fn page_ref(&self, page_number: u32) -> Option<ObjectId> {
        self.document.get_pages().get(&page_number).copied()
    }

    /// 1-indexed page number of the page object, if it is in the page tree.
    pub fn page_number(&self, page_id: ObjectId) -> Option<u32> {
        self.document
            .get_pages()
            .iter()
            .find_map(|(&number, &id)| (id == page_id).then_some(number))
    }

    /// Source path if the handle was created via [`PdfFile::open`].
    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }

    // -- Shared plumbing ------------------------------------------------------

    /// Follow a reference to its target object; non-references pass through.
    pub(crate) fn resolve<'a>(&'a self, object: &'a Object) -> &'a Object {
        match object {
            Object::Reference(id) => self.document.get_object(*id).unwrap_or(object),
            other => other,
        }
    }

    /// Object ID of the document catalog (trailer /Root).
    pub(crate) fn catalog_id(&self) -> Result<ObjectId> {
        self.document
            .trailer
            .get(b"Root")
            .and_then(Object::as_reference)
            .map_err(|err| NormError::Pdf(format!("document has no catalog: {}", err)))
    }

    /// The catalog dictionary.
    pub(crate) fn catalog(&self) -> Result<&Dictionary> {
        let id = self.catalog_id()?;
        self.document
            .get_object(id)
            .and_then(Object::as_dict)
            .map_err(|err| NormError::Pdf(format!("catalog is not a dictionary: {}", err)))
    }

    /// Mutable access to the catalog dictionary.
    pub(crate) fn catalog_mut(&mut self) -> Result<&mut Dictionary> {
        let id = self.catalog_id()?;
        self.document
            .get_object_mut(id)
            .and_then(Object::as_dict_mut)
            .map_err(|err| NormError::Pdf(format!("catalog is not a dictionary: {}", err)))
    }

    /// The dictionary stored under the given object ID.
    pub(crate) fn dict(&self, id: ObjectId) -> Result<&Dictionary> {
        self.document
            .get_object(id)
            .and_then(Object::as_dict)
            .map_err(|err| NormError::Pdf(format!("object {:?} is not a dictionary: {}", id, err)))
    }

    /// Mutable access to the dictionary stored under the given object ID.
    pub(crate) fn dict_mut(&mut self, id: ObjectId) -> Result<&mut Dictionary> {
        self.document
            .get_object_mut(id)
            .and_then(Object::as_dict_mut)
            .map_err(|err| NormError::Pdf(format!("object {:?} is not a dictionary: {}", id, err)))
    }
}
