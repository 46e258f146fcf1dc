// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Outline facet — bookmark tree enumeration and per-node title/destination
// access.
//
// The outline tree is the catalog's /Outlines dictionary: its /First chain
// yields the top-level bookmarks, each node's own /First chain its children,
// siblings linked via /Next. Enumeration guards against reference cycles.

use std::collections::HashSet;

use lopdf::{Object, ObjectId};
use pdfnorm_core::error::Result;

use crate::file::PdfFile;
use crate::strings;

/// A bookmark destination, as stored.
///
/// `Explicit` carries the raw destination array `[page_ref, zoom_tag,
/// params…]` without shape validation — arity and zoom-tag checks belong to
/// the rule engine. `Named` is a key into the document's name table.
#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    Explicit(Vec<Object>),
    Named(String),
}

impl PdfFile {
    /// Object IDs of the top-level bookmarks, in document order.
    pub fn outline_top_level(&self) -> Vec<ObjectId> {
        let Ok(catalog) = self.catalog() else {
            return Vec::new();
        };
        let Ok(outlines) = catalog.get(b"Outlines") else {
            return Vec::new();
        };
        let Ok(root) = self.resolve(outlines).as_dict() else {
            return Vec::new();
        };
        match root.get(b"First").and_then(Object::as_reference) {
            Ok(first) => self.sibling_chain(first),
            Err(_) => Vec::new(),
        }
    }

    /// Object IDs of a bookmark's direct children, in document order.
    pub fn outline_children(&self, id: ObjectId) -> Vec<ObjectId> {
        let Ok(node) = self.dict(id) else {
            return Vec::new();
        };
        match node.get(b"First").and_then(Object::as_reference) {
            Ok(first) => self.sibling_chain(first),
            Err(_) => Vec::new(),
        }
    }

    /// Bookmark title. Empty string when missing or not a text string.
    pub fn outline_title(&self, id: ObjectId) -> String {
        let Ok(node) = self.dict(id) else {
            return String::new();
        };
        match node.get(b"Title").map(|value| self.resolve(value)) {
            Ok(Object::String(bytes, _)) => strings::decode_text(bytes),
            _ => String::new(),
        }
    }

    pub fn set_outline_title(&mut self, id: ObjectId, title: &str) -> Result<()> {
        self.dict_mut(id)?.set("Title", strings::encode_text(title));
        Ok(())
    }

    /// The bookmark's destination: /Dest if present, otherwise the /D of a
    /// GoTo action under /A. None when neither yields a usable object.
    pub fn outline_dest(&self, id: ObjectId) -> Option<Destination> {
        let node = self.dict(id).ok()?;

        let raw = if let Ok(dest) = node.get(b"Dest") {
            Some(self.resolve(dest))
        } else if let Ok(action) = node.get(b"A") {
            let action = self.resolve(action).as_dict().ok()?;
            match action.get(b"S") {
                Ok(Object::Name(kind)) if kind == b"GoTo" => {
                    action.get(b"D").ok().map(|dest| self.resolve(dest))
                }
                _ => None,
            }
        } else {
            None
        };

        match raw? {
            Object::Array(array) => Some(Destination::Explicit(array.clone())),
            Object::String(bytes, _) => Some(Destination::Named(strings::decode_text(bytes))),
            Object::Name(name) => Some(Destination::Named(
                String::from_utf8_lossy(name).into_owned(),
            )),
            _ => None,
        }
    }

    /// Rewrite the bookmark's destination array in place: a /Dest entry is
    /// replaced directly, a GoTo action gets its /D replaced.
    pub fn set_outline_dest(&mut self, id: ObjectId, dest: Vec<Object>) -> Result<()> {
        let (has_dest, action_ref) = {
            let node = self.dict(id)?;
            let action_ref = node.get(b"A").ok().and_then(|obj| obj.as_reference().ok());
            (node.has(b"Dest"), action_ref)
        };

        if !has_dest {
            if let Some(action_id) = action_ref {
                self.dict_mut(action_id)?.set("D", Object::Array(dest));
                return Ok(());
            }
            let node = self.dict_mut(id)?;
            if let Ok(Object::Dictionary(action)) = node.get_mut(b"A") {
                action.set("D", Object::Array(dest));
                return Ok(());
            }
        }

        self.dict_mut(id)?.set("Dest", Object::Array(dest));
        Ok(())
    }

    /// Walk a /Next sibling chain, stopping on cycles.
    fn sibling_chain(&self, first: ObjectId) -> Vec<ObjectId> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = Some(first);

        while let Some(id) = current {
            if !visited.insert(id) {
                break;
            }
            chain.push(id);
            current = self
                .dict(id)
                .ok()
                .and_then(|node| node.get(b"Next").ok())
                .and_then(|next| next.as_reference().ok());
        }

        chain
    }
}
