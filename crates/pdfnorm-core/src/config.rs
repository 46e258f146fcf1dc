// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Normalization configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Optional overrides for the canonical profile.
///
/// Every field is optional; an absent field means the built-in default
/// applies. The struct is immutable once loaded and shared read-only across
/// all norms and all documents in a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NormConfig {
    /// Title template; may contain a `{file_name}` placeholder.
    pub title: Option<String>,
    /// Single author that replaces the document's author list.
    pub author: Option<String>,
    /// Whether viewers should display the document title instead of the
    /// file name. Defaults to true.
    pub display_doc_title: Option<bool>,
    /// Initial-view page mode token: PageOnly, Bookmarks, Pages,
    /// Attachments, or Layers.
    pub page_mode: Option<String>,
    /// Initial-view page layout token: SinglePage, OneColumn, TwoColumnLeft,
    /// TwoColumnRight, TwoPageLeft, or TwoPageRight.
    pub page_layout: Option<String>,
    /// Page the document opens to. Defaults to 1.
    pub open_to_page: Option<u32>,
    /// Bookmark zoom token: FitPage, FitWidth, FitVisible, ActualSize, or
    /// InheritZoom.
    pub bookmark_zoom: Option<String>,
}

/// Load a configuration file.
///
/// A missing path, unreadable file, or malformed JSON all yield `None`
/// ("no configuration", all defaults) rather than an error. Unrecognized
/// keys are ignored by the deserializer.
pub fn load_config(path: Option<&Path>) -> Option<NormConfig> {
    let path = path?;
    if !path.exists() {
        warn!(path = %path.display(), "configuration file not found, using defaults");
        return None;
    }

    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) => {
            warn!(path = %path.display(), %err, "configuration file unreadable, using defaults");
            return None;
        }
    };

    match serde_json::from_str(&json) {
        Ok(config) => Some(config),
        Err(err) => {
            warn!(path = %path.display(), %err, "configuration file malformed, using defaults");
            None
        }
    }
}
