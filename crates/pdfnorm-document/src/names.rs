// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Named-destination table — resolve a destination key to its underlying
// explicit array.
//
// Keys live either in the /Names → /Dests name tree (leaf /Names arrays of
// key/value pairs, intermediate /Kids nodes) or, for older producers, in a
// flat /Dests dictionary on the catalog. A value may be the destination
// array itself or a dictionary wrapping it under /D.

use lopdf::{Dictionary, Object};

use crate::file::PdfFile;
use crate::strings;

impl PdfFile {
    /// Resolve a named-destination key to its explicit destination array.
    pub fn named_destination(&self, key: &str) -> Option<Vec<Object>> {
        let catalog = self.catalog().ok()?;

        if let Ok(names) = catalog.get(b"Names") {
            if let Ok(names) = self.resolve(names).as_dict() {
                if let Ok(dests) = names.get(b"Dests") {
                    if let Ok(tree) = self.resolve(dests).as_dict() {
                        if let Some(found) = self.lookup_name_tree(tree, key) {
                            return Some(found);
                        }
                    }
                }
            }
        }

        // Flat /Dests dictionary (PDF 1.1).
        if let Ok(dests) = catalog.get(b"Dests") {
            if let Ok(dests) = self.resolve(dests).as_dict() {
                if let Ok(value) = dests.get(key.as_bytes()) {
                    return self.dest_value_array(value);
                }
            }
        }

        None
    }

    /// Search a name-tree node for `key`, descending into /Kids.
    fn lookup_name_tree(&self, tree: &Dictionary, key: &str) -> Option<Vec<Object>> {
        if let Ok(names) = tree.get(b"Names") {
            if let Ok(pairs) = self.resolve(names).as_array() {
                for pair in pairs.chunks(2) {
                    if pair.len() < 2 {
                        break;
                    }
                    let matches = match self.resolve(&pair[0]) {
                        Object::String(bytes, _) => strings::decode_text(bytes) == key,
                        _ => false,
                    };
                    if matches {
                        return self.dest_value_array(&pair[1]);
                    }
                }
            }
        }

        if let Ok(kids) = tree.get(b"Kids") {
            if let Ok(kids) = self.resolve(kids).as_array() {
                for kid in kids {
                    if let Ok(kid_dict) = self.resolve(kid).as_dict() {
                        if let Some(found) = self.lookup_name_tree(kid_dict, key) {
                            return Some(found);
                        }
                    }
                }
            }
        }

        None
    }

    /// A name-tree value is an array directly or a dictionary with /D.
    fn dest_value_array(&self, value: &Object) -> Option<Vec<Object>> {
        match self.resolve(value) {
            Object::Array(array) => Some(array.clone()),
            Object::Dictionary(dict) => {
                let inner = dict.get(b"D").ok()?;
                self.resolve(inner).as_array().ok().cloned()
            }
            _ => None,
        }
    }
}
