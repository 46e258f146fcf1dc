// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Outline norm — bookmark title and destination checks, applied to every
// node of the outline tree in breadth-first order.

use std::collections::VecDeque;
use std::sync::Arc;

use lopdf::{Object, ObjectId};
use pdfnorm_core::error::Result;
use pdfnorm_core::{FixRecord, NormConfig, text};
use pdfnorm_document::{Destination, PdfFile};

use crate::canon::{self, ZoomMode};
use crate::norms::Norm;
use crate::reporter::IssueReporter;

pub struct OutlineNorm {
    reporter: Arc<IssueReporter>,
    config: Option<Arc<NormConfig>>,
}

impl OutlineNorm {
    pub fn new(reporter: Arc<IssueReporter>) -> Self {
        Self {
            reporter,
            config: None,
        }
    }

    fn normalize_bookmark(
        &self,
        doc: &mut PdfFile,
        id: ObjectId,
        name: &str,
        dry_run: bool,
        fix_records: &mut Vec<FixRecord>,
    ) -> Result<()> {
        let title = doc.outline_title(id);
        let mut display = text::escape_eol(&title);

        if text::can_be_trimmed(&title) {
            let trimmed = text::trim(&title).to_string();
            let trimmed_display = text::escape_eol(&trimmed);
            self.reporter.report_and_fix(
                name,
                &format!("Bookmark title \"{display}\" can be trimmed."),
                &format!("Fix by trimming the bookmark title to \"{trimmed_display}\"."),
                || doc.set_outline_title(id, &trimmed),
                fix_records,
                dry_run,
            )?;
            display = trimmed_display;
        }

        let target = canon::target_bookmark_zoom(self.config.as_deref());

        match doc.outline_dest(id) {
            Some(Destination::Explicit(dest)) => {
                self.normalize_explicit_dest(doc, id, dest, &display, target, name, dry_run, fix_records)
            }
            Some(Destination::Named(key)) => {
                self.normalize_named_dest(doc, id, &key, &display, target, name, dry_run, fix_records)
            }
            None => {
                self.reporter.report(
                    name,
                    &format!("Bookmark \"{display}\" does not have a valid destination."),
                );
                Ok(())
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn normalize_explicit_dest(
        &self,
        doc: &mut PdfFile,
        id: ObjectId,
        mut dest: Vec<Object>,
        display: &str,
        target: ZoomMode,
        name: &str,
        dry_run: bool,
        fix_records: &mut Vec<FixRecord>,
    ) -> Result<()> {
        if dest.len() < 2 || dest[1] == Object::Null {
            self.reporter.report(
                name,
                &format!("Bookmark \"{display}\" does not have a valid destination."),
            );
            return Ok(());
        }

        if canon::zoom_tag(&dest) == Some(target.pdf_name().as_bytes()) {
            return Ok(());
        }

        let actual = match canon::zoom_tag(&dest) {
            Some(tag) => String::from_utf8_lossy(tag).into_owned(),
            None => "(none)".to_string(),
        };
        self.reporter.report_and_fix(
            name,
            &format!(
                "Bookmark \"{display}\" zoom is not set to {}, but {actual}.",
                target.pdf_name()
            ),
            &format!(
                "Fix by updating the bookmark zoom to \"{}\".",
                target.description()
            ),
            || {
                canon::canonicalize_destination(&mut dest, target);
                doc.set_outline_dest(id, dest)
            },
            fix_records,
            dry_run,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn normalize_named_dest(
        &self,
        doc: &mut PdfFile,
        id: ObjectId,
        key: &str,
        display: &str,
        target: ZoomMode,
        name: &str,
        dry_run: bool,
        fix_records: &mut Vec<FixRecord>,
    ) -> Result<()> {
        // Resolve before announcing anything: an unresolvable key leaves no
        // fix to offer.
        let page_ref = doc
            .named_destination(key)
            .and_then(|resolved| match resolved.first() {
                Some(Object::Reference(page)) => Some(*page),
                _ => None,
            });
        let Some(page_ref) = page_ref else {
            self.reporter.report(
                name,
                &format!("Bookmark \"{display}\" named destination \"{key}\" cannot be resolved."),
            );
            return Ok(());
        };

        self.reporter.report_and_fix(
            name,
            &format!("Bookmark \"{display}\" uses the named destination \"{key}\"."),
            &format!(
                "Fix by replacing it with an explicit destination with \"{}\" zoom.",
                target.description()
            ),
            || {
                doc.set_outline_dest(
                    id,
                    vec![Object::Reference(page_ref), target.name_object()],
                )
            },
            fix_records,
            dry_run,
        )
    }
}

impl Norm for OutlineNorm {
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
        let mut queue: VecDeque<ObjectId> = doc.outline_top_level().into();

        while let Some(id) = queue.pop_front() {
            self.normalize_bookmark(doc, id, name, dry_run, fix_records)?;
            queue.extend(doc.outline_children(id));
        }

        Ok(())
    }
}
