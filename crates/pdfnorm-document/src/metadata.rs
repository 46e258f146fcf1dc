// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Metadata facet — title, ordered author list, and modification date from
// the document /Info dictionary.
//
// The ordered author list is carried in /Info /Author as a `;`-separated
// sequence. Splitting is exact (no trimming) so that whitespace around
// individual entries stays visible to the trim checks in the rule engine.

use chrono::{DateTime, Utc};
use lopdf::{Dictionary, Object, ObjectId};

use crate::file::PdfFile;
use crate::strings;

/// Separator between entries of the ordered author list.
const AUTHOR_SEPARATOR: char = ';';

impl PdfFile {
    /// Document title. Empty string when missing.
    pub fn title(&self) -> String {
        self.info_text(b"Title").unwrap_or_default()
    }

    /// Overwrite the document title.
    pub fn set_title(&mut self, title: &str) {
        let id = self.ensure_info_id();
        if let Ok(Object::Dictionary(info)) = self.document.get_object_mut(id) {
            info.set("Title", strings::encode_text(title));
        }
    }

    /// Ordered author list. Empty when /Author is missing or empty.
    pub fn authors(&self) -> Vec<String> {
        match self.info_text(b"Author") {
            None => Vec::new(),
            Some(raw) if raw.is_empty() => Vec::new(),
            Some(raw) => raw.split(AUTHOR_SEPARATOR).map(String::from).collect(),
        }
    }

    /// Replace the whole author list.
    pub fn set_authors(&mut self, authors: &[String]) {
        let joined = authors.join(&AUTHOR_SEPARATOR.to_string());
        let id = self.ensure_info_id();
        if let Ok(Object::Dictionary(info)) = self.document.get_object_mut(id) {
            info.set("Author", strings::encode_text(&joined));
        }
    }

    /// Replace a single author entry (0-indexed), keeping the rest.
    pub fn set_author(&mut self, index: usize, value: &str) {
        let mut authors = self.authors();
        if let Some(entry) = authors.get_mut(index) {
            *entry = value.to_string();
            self.set_authors(&authors);
        }
    }

    /// Refresh the /ModDate timestamp.
    ///
    /// Called unconditionally after the metadata checks so viewers prefer
    /// the rewritten metadata; never reported as a fix.
    pub fn touch_mod_date(&mut self, now: DateTime<Utc>) {
        let stamp = format!("D:{}+00'00'", now.format("%Y%m%d%H%M%S"));
        let id = self.ensure_info_id();
        if let Ok(Object::Dictionary(info)) = self.document.get_object_mut(id) {
            info.set("ModDate", strings::encode_text(&stamp));
        }
    }

    /// Raw /ModDate string, if present.
    pub fn mod_date(&self) -> Option<String> {
        self.info_text(b"ModDate")
    }

    // -- Plumbing -------------------------------------------------------------

    /// The /Info dictionary, resolved through the trailer.
    fn info_dict(&self) -> Option<&Dictionary> {
        let info = self.document.trailer.get(b"Info").ok()?;
        self.resolve(info).as_dict().ok()
    }

    /// Decode a text field of the /Info dictionary.
    fn info_text(&self, key: &[u8]) -> Option<String> {
        let value = self.info_dict()?.get(key).ok()?;
        match self.resolve(value) {
            Object::String(bytes, _) => Some(strings::decode_text(bytes)),
            _ => None,
        }
    }

    /// Object ID of the /Info dictionary, creating it (and re-rooting a
    /// direct trailer dictionary as an indirect object) when needed.
    fn ensure_info_id(&mut self) -> ObjectId {
        if let Ok(Object::Reference(id)) = self.document.trailer.get(b"Info") {
            return *id;
        }
        let existing = match self.document.trailer.get(b"Info") {
            Ok(Object::Dictionary(dict)) => dict.clone(),
            _ => Dictionary::new(),
        };
        let id = self.document.add_object(Object::Dictionary(existing));
        self.document.trailer.set("Info", id);
        id
    }
}
