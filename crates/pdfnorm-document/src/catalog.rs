// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Catalog facet — viewer preferences, page mode, page layout, and the
// open action of the document catalog.

use lopdf::{Dictionary, Object, dictionary};
use pdfnorm_core::error::{NormError, Result};

use crate::file::PdfFile;

impl PdfFile {
    // -- Viewer preferences ---------------------------------------------------

    /// Whether the catalog carries a /ViewerPreferences dictionary.
    pub fn has_viewer_preferences(&self) -> bool {
        self.viewer_preferences().is_some()
    }

    /// The /DisplayDocTitle flag. False when the flag or the whole
    /// preferences dictionary is missing.
    pub fn display_doc_title(&self) -> bool {
        let Some(prefs) = self.viewer_preferences() else {
            return false;
        };
        match prefs.get(b"DisplayDocTitle").map(|value| self.resolve(value)) {
            Ok(Object::Boolean(flag)) => *flag,
            _ => false,
        }
    }

    /// Create /ViewerPreferences with /DisplayDocTitle true.
    pub fn create_viewer_preferences(&mut self) -> Result<()> {
        let prefs = dictionary! { "DisplayDocTitle" => true };
        self.catalog_mut()?
            .set("ViewerPreferences", Object::Dictionary(prefs));
        Ok(())
    }

    /// Set the /DisplayDocTitle flag, creating the preferences dictionary
    /// when absent.
    pub fn set_display_doc_title(&mut self, value: bool) -> Result<()> {
        let prefs_ref = self
            .catalog()?
            .get(b"ViewerPreferences")
            .ok()
            .and_then(|obj| obj.as_reference().ok());

        if let Some(id) = prefs_ref {
            self.dict_mut(id)?.set("DisplayDocTitle", value);
            return Ok(());
        }

        let catalog = self.catalog_mut()?;
        match catalog.get_mut(b"ViewerPreferences") {
            Ok(Object::Dictionary(prefs)) => prefs.set("DisplayDocTitle", value),
            _ => {
                let prefs = dictionary! { "DisplayDocTitle" => value };
                catalog.set("ViewerPreferences", Object::Dictionary(prefs));
            }
        }
        Ok(())
    }

    // -- Page mode / page layout ----------------------------------------------

    /// Current /PageMode name, if set.
    pub fn page_mode(&self) -> Option<String> {
        self.catalog_name(b"PageMode")
    }

    pub fn set_page_mode(&mut self, mode: &str) -> Result<()> {
        self.catalog_mut()?
            .set("PageMode", Object::Name(mode.as_bytes().to_vec()));
        Ok(())
    }

    /// Current /PageLayout name, if set.
    pub fn page_layout(&self) -> Option<String> {
        self.catalog_name(b"PageLayout")
    }

    pub fn set_page_layout(&mut self, layout: &str) -> Result<()> {
        self.catalog_mut()?
            .set("PageLayout", Object::Name(layout.as_bytes().to_vec()));
        Ok(())
    }

    // -- Open action ----------------------------------------------------------

    /// Whether /OpenAction exists and is an action dictionary.
    ///
    /// A destination array stored directly under /OpenAction is treated as
    /// absent; the normalizer replaces it with a proper GoTo action.
    pub fn has_open_action(&self) -> bool {
        self.open_action_dict().is_some()
    }

    /// The open action's destination array, cloned. None when the action is
    /// missing or its /D entry is not an array.
    pub fn open_action_dest(&self) -> Option<Vec<Object>> {
        let action = self.open_action_dict()?;
        let dest = action.get(b"D").ok()?;
        self.resolve(dest).as_array().ok().cloned()
    }

    /// Replace /OpenAction with a GoTo action carrying the given destination.
    pub fn create_open_action(&mut self, dest: Vec<Object>) -> Result<()> {
        let action = dictionary! {
            "S" => "GoTo",
            "D" => Object::Array(dest),
        };
        self.catalog_mut()?
            .set("OpenAction", Object::Dictionary(action));
        Ok(())
    }

    /// Rewrite the existing open action's destination array.
    pub fn set_open_action_dest(&mut self, dest: Vec<Object>) -> Result<()> {
        let action_ref = self
            .catalog()?
            .get(b"OpenAction")
            .ok()
            .and_then(|obj| obj.as_reference().ok());

        if let Some(id) = action_ref {
            self.dict_mut(id)?.set("D", Object::Array(dest));
            return Ok(());
        }

        match self.catalog_mut()?.get_mut(b"OpenAction") {
            Ok(Object::Dictionary(action)) => {
                action.set("D", Object::Array(dest));
                Ok(())
            }
            _ => Err(NormError::Pdf("open action is missing".into())),
        }
    }

    // -- Plumbing -------------------------------------------------------------

    fn viewer_preferences(&self) -> Option<&Dictionary> {
        let prefs = self.catalog().ok()?.get(b"ViewerPreferences").ok()?;
        self.resolve(prefs).as_dict().ok()
    }

    fn open_action_dict(&self) -> Option<&Dictionary> {
        let action = self.catalog().ok()?.get(b"OpenAction").ok()?;
        self.resolve(action).as_dict().ok()
    }

    fn catalog_name(&self, key: &[u8]) -> Option<String> {
        let value = self.catalog().ok()?.get(key).ok()?;
        match self.resolve(value) {
            Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
            _ => None,
        }
    }
}
