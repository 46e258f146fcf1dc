// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Metadata norm — title and author checks over the document metadata facet.

use std::sync::Arc;

use chrono::Utc;
use pdfnorm_core::error::Result;
use pdfnorm_core::{FixRecord, NormConfig, text};
use pdfnorm_document::PdfFile;

use crate::norms::Norm;
use crate::reporter::IssueReporter;

/// Placeholder in a configured title template that receives the document's
/// base file name.
const FILE_NAME_TOKEN: &str = "{file_name}";

pub struct MetadataNorm {
    reporter: Arc<IssueReporter>,
    config: Option<Arc<NormConfig>>,
}

impl MetadataNorm {
    pub fn new(reporter: Arc<IssueReporter>) -> Self {
        Self {
            reporter,
            config: None,
        }
    }

    fn normalize_title(
        &self,
        doc: &mut PdfFile,
        name: &str,
        dry_run: bool,
        fix_records: &mut Vec<FixRecord>,
    ) -> Result<()> {
        let title = doc.title();

        // A configured title supersedes the whitespace checks for this pass.
        let template = self
            .config
            .as_deref()
            .and_then(|c| c.title.as_deref())
            .filter(|t| !t.is_empty());
        if let Some(template) = template {
            let expected = template.replace(FILE_NAME_TOKEN, name);
            if title != expected {
                self.reporter.report_and_fix(
                    name,
                    &format!("PDF title \"{title}\" doesn't match config."),
                    &format!("Fix by setting title to \"{expected}\"."),
                    || {
                        doc.set_title(&expected);
                        Ok(())
                    },
                    fix_records,
                    dry_run,
                )?;
                return Ok(());
            }
        }

        if title.is_empty() {
            self.reporter.report(name, "PDF title is empty.");
        }

        if text::can_be_trimmed(&title) {
            let trimmed = text::trim(&title).to_string();
            self.reporter.report_and_fix(
                name,
                &format!("PDF title \"{title}\" can be trimmed."),
                &format!("Fix by trimming the title to \"{trimmed}\"."),
                || {
                    doc.set_title(&trimmed);
                    Ok(())
                },
                fix_records,
                dry_run,
            )?;
        }

        Ok(())
    }

    fn normalize_authors(
        &self,
        doc: &mut PdfFile,
        name: &str,
        dry_run: bool,
        fix_records: &mut Vec<FixRecord>,
    ) -> Result<()> {
        let authors = doc.authors();

        // A configured author replaces the whole list and supersedes the
        // per-entry checks for this pass.
        let configured = self
            .config
            .as_deref()
            .and_then(|c| c.author.as_deref())
            .filter(|a| !a.is_empty());
        if let Some(configured) = configured {
            let current = authors.first().cloned().unwrap_or_default();
            if current != configured {
                self.reporter.report_and_fix(
                    name,
                    &format!("PDF author \"{current}\" doesn't match config."),
                    &format!("Fix by setting author to \"{configured}\"."),
                    || {
                        doc.set_authors(&[configured.to_string()]);
                        Ok(())
                    },
                    fix_records,
                    dry_run,
                )?;
                return Ok(());
            }
        }

        if authors.is_empty() {
            self.reporter.report(name, "PDF does not have an author.");
        }

        for (index, author) in authors.iter().enumerate() {
            let position = index + 1;

            if author.is_empty() {
                self.reporter
                    .report(name, &format!("PDF author [{position}] is empty."));
            }

            if text::can_be_trimmed(author) {
                let trimmed = text::trim(author).to_string();
                self.reporter.report_and_fix(
                    name,
                    &format!("PDF author [{position}] \"{author}\" can be trimmed."),
                    &format!("Fix by trimming author [{position}] to \"{trimmed}\"."),
                    || {
                        doc.set_author(index, &trimmed);
                        Ok(())
                    },
                    fix_records,
                    dry_run,
                )?;
            }
        }

        Ok(())
    }
}

impl Norm for MetadataNorm {
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
        self.normalize_title(doc, name, dry_run, fix_records)?;
        self.normalize_authors(doc, name, dry_run, fix_records)?;

        // Refresh the modification date so viewers prefer the rewritten
        // metadata. Unconditional and never reported as a fix.
        doc.touch_mod_date(Utc::now());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdoc::{base_doc, recording_reporter, set_info};

    fn norm_with_config(config: Option<NormConfig>) -> (MetadataNorm, Arc<crate::testdoc::RecordingReporter>) {
        let (reporter, sink) = recording_reporter();
        let mut norm = MetadataNorm::new(reporter);
        norm.set_config(config.map(Arc::new));
        (norm, sink)
    }

    #[test]
    fn config_title_template_substitutes_file_name() {
        let mut doc = base_doc(1);
        set_info(&mut doc, "Old", "A");
        let mut doc = PdfFile::from_document(doc);

        let (norm, _) = norm_with_config(Some(NormConfig {
            title: Some("Report - {file_name}".into()),
            ..NormConfig::default()
        }));

        let mut records = Vec::new();
        norm.normalize(&mut doc, "q3", false, &mut records)
            .expect("normalize");

        assert_eq!(doc.title(), "Report - q3");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn config_title_supersedes_trim_fix() {
        let mut doc = base_doc(1);
        set_info(&mut doc, "  spaced  ", "A");
        let mut doc = PdfFile::from_document(doc);

        let (norm, sink) = norm_with_config(Some(NormConfig {
            title: Some("Exact".into()),
            ..NormConfig::default()
        }));

        let mut records = Vec::new();
        norm.normalize(&mut doc, "doc", false, &mut records)
            .expect("normalize");

        assert_eq!(doc.title(), "Exact");
        // Exactly one title fix, no trim message.
        assert!(
            sink.messages()
                .iter()
                .all(|m| !m.contains("can be trimmed"))
        );
    }

    #[test]
    fn empty_title_is_report_only() {
        let mut doc = base_doc(1);
        set_info(&mut doc, "", "A");
        let mut doc = PdfFile::from_document(doc);

        let (norm, sink) = norm_with_config(None);
        let mut records = Vec::new();
        norm.normalize(&mut doc, "doc", false, &mut records)
            .expect("normalize");

        assert!(records.is_empty());
        assert!(
            sink.messages()
                .iter()
                .any(|m| m.contains("PDF title is empty."))
        );
    }

    #[test]
    fn title_whitespace_is_trimmed() {
        let mut doc = base_doc(1);
        set_info(&mut doc, " My Title\n", "A");
        let mut doc = PdfFile::from_document(doc);

        let (norm, _) = norm_with_config(None);
        let mut records = Vec::new();
        norm.normalize(&mut doc, "doc", false, &mut records)
            .expect("normalize");

        assert_eq!(doc.title(), "My Title");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn config_author_replaces_whole_list() {
        let mut doc = base_doc(1);
        set_info(&mut doc, "T", "X;Y");
        let mut doc = PdfFile::from_document(doc);

        let (norm, sink) = norm_with_config(Some(NormConfig {
            author: Some("A. Smith".into()),
            ..NormConfig::default()
        }));

        let mut records = Vec::new();
        norm.normalize(&mut doc, "doc", false, &mut records)
            .expect("normalize");

        assert_eq!(doc.authors(), vec!["A. Smith".to_string()]);
        assert_eq!(records.len(), 1);
        // Per-entry checks were skipped for this pass.
        assert!(
            sink.messages()
                .iter()
                .all(|m| !m.contains("can be trimmed"))
        );
    }

    #[test]
    fn author_entries_are_trimmed_individually() {
        let mut doc = base_doc(1);
        set_info(&mut doc, "T", " First ; Second");
        let mut doc = PdfFile::from_document(doc);

        let (norm, _) = norm_with_config(None);
        let mut records = Vec::new();
        norm.normalize(&mut doc, "doc", false, &mut records)
            .expect("normalize");

        assert_eq!(
            doc.authors(),
            vec!["First".to_string(), "Second".to_string()]
        );
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn missing_author_is_report_only() {
        let mut doc = base_doc(1);
        set_info(&mut doc, "T", "");
        let mut doc = PdfFile::from_document(doc);

        let (norm, sink) = norm_with_config(None);
        let mut records = Vec::new();
        norm.normalize(&mut doc, "doc", false, &mut records)
            .expect("normalize");

        assert!(records.is_empty());
        assert!(
            sink.messages()
                .iter()
                .any(|m| m.contains("PDF does not have an author."))
        );
    }

    #[test]
    fn mod_date_is_refreshed_without_a_record() {
        let mut doc = base_doc(1);
        set_info(&mut doc, "Clean", "Author");
        let mut doc = PdfFile::from_document(doc);

        let (norm, sink) = norm_with_config(None);
        let mut records = Vec::new();
        norm.normalize(&mut doc, "doc", false, &mut records)
            .expect("normalize");

        assert!(records.is_empty());
        assert!(sink.messages().is_empty());
        assert!(doc.mod_date().expect("mod date set").starts_with("D:"));
    }

    #[test]
    fn dry_run_reports_without_mutating() {
        let mut doc = base_doc(1);
        set_info(&mut doc, " spaced ", "A");
        let mut doc = PdfFile::from_document(doc);

        let (norm, sink) = norm_with_config(None);
        let mut records = Vec::new();
        norm.normalize(&mut doc, "doc", true, &mut records)
            .expect("normalize");

        assert_eq!(doc.title(), " spaced ");
        assert!(records.is_empty());
        assert!(!sink.messages().is_empty());
    }
}
