// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// View norm — initial-view checks over the document catalog: viewer
// preferences, page mode, page layout, and the open action.

use std::sync::Arc;

use lopdf::Object;
use pdfnorm_core::error::Result;
use pdfnorm_core::{FixRecord, NormConfig};
use pdfnorm_document::PdfFile;

use crate::canon::{self, ZoomMode};
use crate::norms::Norm;
use crate::reporter::IssueReporter;

pub struct ViewNorm {
    reporter: Arc<IssueReporter>,
    config: Option<Arc<NormConfig>>,
}

impl ViewNorm {
    pub fn new(reporter: Arc<IssueReporter>) -> Self {
        Self {
            reporter,
            config: None,
        }
    }

    fn normalize_viewer_preferences(
        &self,
        doc: &mut PdfFile,
        name: &str,
        dry_run: bool,
        fix_records: &mut Vec<FixRecord>,
    ) -> Result<()> {
        let current = if doc.has_viewer_preferences() {
            doc.display_doc_title()
        } else {
            self.reporter.report_and_fix(
                name,
                "Display document title is unset because viewer preferences are missing.",
                "Fix by creating viewer preferences with display document title set to true.",
                || doc.create_viewer_preferences(),
                fix_records,
                dry_run,
            )?;
            // The value the creation fix establishes; comparing against it
            // keeps dry-run and live-run announcements identical.
            true
        };

        let target = self
            .config
            .as_deref()
            .and_then(|c| c.display_doc_title)
            .unwrap_or(true);

        if current != target {
            self.reporter.report_and_fix(
                name,
                &format!("Display document title is set to {current}."),
                &format!("Fix by setting display document title to {target}."),
                || doc.set_display_doc_title(target),
                fix_records,
                dry_run,
            )?;
        }

        Ok(())
    }

    fn normalize_page_mode(
        &self,
        doc: &mut PdfFile,
        name: &str,
        dry_run: bool,
        fix_records: &mut Vec<FixRecord>,
    ) -> Result<()> {
        let current = doc.page_mode();
        let target = canon::target_page_mode(self.config.as_deref());

        if current.as_deref() != Some(target) {
            let actual = current.as_deref().unwrap_or("(none)").to_string();
            self.reporter.report_and_fix(
                name,
                &format!("In initial view, page mode is not set to {target}, but {actual}."),
                &format!("Fix by setting the page mode to {target}."),
                || doc.set_page_mode(target),
                fix_records,
                dry_run,
            )?;
        }

        Ok(())
    }

    fn normalize_page_layout(
        &self,
        doc: &mut PdfFile,
        name: &str,
        dry_run: bool,
        fix_records: &mut Vec<FixRecord>,
    ) -> Result<()> {
        let current = doc.page_layout();
        let target = canon::target_page_layout(self.config.as_deref());

        if current.as_deref() != Some(target) {
            let actual = current.as_deref().unwrap_or("(none)").to_string();
            self.reporter.report_and_fix(
                name,
                &format!("In initial view, page layout is not set to {target}, but {actual}."),
                &format!("Fix by setting the page layout to {target}."),
                || doc.set_page_layout(target),
                fix_records,
                dry_run,
            )?;
        }

        Ok(())
    }

    fn normalize_open_action(
        &self,
        doc: &mut PdfFile,
        name: &str,
        dry_run: bool,
        fix_records: &mut Vec<FixRecord>,
    ) -> Result<()> {
        let mut target_page = self
            .config
            .as_deref()
            .and_then(|c| c.open_to_page)
            .unwrap_or(1);

        // Out-of-range targets clamp to the first page.
        if target_page < 1 || target_page as usize > doc.page_count() {
            target_page = 1;
        }

        if !doc.has_open_action() {
            let Some(page_ref) = doc.page_ref(target_page) else {
                self.reporter
                    .report(name, "PDF has no pages to point an open action at.");
                return Ok(());
            };
            self.reporter.report_and_fix(
                name,
                "PDF does not have an open action set.",
                &format!("Fix by creating an open action to page {target_page} with Fit zoom."),
                || {
                    doc.create_open_action(vec![
                        Object::Reference(page_ref),
                        ZoomMode::Fit.name_object(),
                    ])
                },
                fix_records,
                dry_run,
            )?;
            return Ok(());
        }

        let Some(dest) = doc.open_action_dest() else {
            self.reporter
                .report(name, "PDF open action destination is invalid.");
            return Ok(());
        };
        if dest.len() < 2 {
            self.reporter
                .report(name, "PDF open action destination is invalid.");
            return Ok(());
        }

        let current_page = match dest[0] {
            Object::Reference(id) => doc.page_number(id),
            _ => None,
        };
        let Some(current_page) = current_page else {
            self.reporter
                .report(name, "PDF open action page reference is invalid.");
            return Ok(());
        };

        if current_page != target_page {
            let Some(page_ref) = doc.page_ref(target_page) else {
                self.reporter
                    .report(name, "PDF open action page reference is invalid.");
                return Ok(());
            };
            let mut rewritten = dest.clone();
            rewritten[0] = Object::Reference(page_ref);
            self.reporter.report_and_fix(
                name,
                &format!(
                    "In initial view, page number is not set to {target_page}, but {current_page}."
                ),
                &format!("Fix by setting the page number to {target_page}."),
                || doc.set_open_action_dest(rewritten),
                fix_records,
                dry_run,
            )?;
        }

        // Re-read: the page fix above may have rewritten the array.
        let Some(mut dest) = doc.open_action_dest() else {
            return Ok(());
        };
        if dest.len() < 2 {
            return Ok(());
        }

        let target_zoom = ZoomMode::Fit;
        if canon::zoom_tag(&dest) != Some(target_zoom.pdf_name().as_bytes()) {
            let actual = match canon::zoom_tag(&dest) {
                Some(tag) => String::from_utf8_lossy(tag).into_owned(),
                None => "(none)".to_string(),
            };
            self.reporter.report_and_fix(
                name,
                &format!(
                    "PDF open destination is not valid. Expected: {}, actual: {actual}.",
                    target_zoom.pdf_name()
                ),
                &format!(
                    "Fix by updating the destination zoom to \"{}\".",
                    target_zoom.description()
                ),
                || {
                    canon::canonicalize_destination(&mut dest, target_zoom);
                    doc.set_open_action_dest(dest)
                },
                fix_records,
                dry_run,
            )?;
        }

        Ok(())
    }
}

impl Norm for ViewNorm {
    fn set_config(&mut self, config: Option<Arc<NormConfig>>) {
        self.config = config;
    }

    fn normalize(
        &self,
        doc: &mut PdfFile,
        name: &str,
        dry_run: bool,
        fix_records: &mut Vec<FixRecord>,
    ) -> Result<()> {
        self.normalize_viewer_preferences(doc, name, dry_run, fix_records)?;
        self.normalize_page_mode(doc, name, dry_run, fix_records)?;
        self.normalize_page_layout(doc, name, dry_run, fix_records)?;
        self.normalize_open_action(doc, name, dry_run, fix_records)?;
        Ok(())
    }
}
