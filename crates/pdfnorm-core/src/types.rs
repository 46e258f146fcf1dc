// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Pdfnorm normalizer.

use serde::{Deserialize, Serialize};

/// Record of one corrective action that was actually executed.
///
/// A document's final list of fix records is the authoritative signal that
/// the document was modified: the batch driver only persists a document
/// whose record list is non-empty. In dry-run mode no records are created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixRecord {
    /// The issue description the fix addressed.
    pub message: String,
}

impl FixRecord {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FixRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
