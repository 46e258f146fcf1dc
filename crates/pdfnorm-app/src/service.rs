// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Batch driver — expands the inputs, runs the processor over each document,
// and promotes corrected copies over their originals.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use pdfnorm_core::NormConfig;
use pdfnorm_engine::{DocProcessor, IssueReporter};
use tracing::{error, warn};

use crate::files::FileService;

/// Outcome of one batch run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Documents the batch attempted.
    pub processed: usize,
    /// Documents that received at least one fix (and, outside a dry run,
    /// were rewritten in place).
    pub corrected: usize,
    /// Documents that could not be processed.
    pub failed: usize,
}

pub struct NormalizeService {
    processor: DocProcessor,
    files: FileService,
    reporter: Arc<IssueReporter>,
}

impl NormalizeService {
    pub fn new(processor: DocProcessor, files: FileService, reporter: Arc<IssueReporter>) -> Self {
        Self {
            processor,
            files,
            reporter,
        }
    }

    /// Normalize every PDF reachable from `inputs`.
    ///
    /// A document that fails to process is reported and skipped; the batch
    /// always runs to the end.
    pub fn normalize_all(
        &mut self,
        inputs: &[PathBuf],
        config: Option<NormConfig>,
        dry_run: bool,
    ) -> BatchSummary {
        self.processor.set_config(config);

        let paths = self.files.collect_pdf_paths(inputs);
        if paths.is_empty() {
            warn!("no PDF files found in the given inputs");
            return BatchSummary::default();
        }

        let mut summary = BatchSummary::default();
        let total = paths.len();

        for (index, path) in paths.iter().enumerate() {
            let name = document_name(path);
            self.reporter.report_progress(index + 1, total, &name);
            summary.processed += 1;

            if let Err(err) = self.normalize_one(path, &name, dry_run, &mut summary) {
                error!(path = %path.display(), %err, "document failed, continuing with the batch");
                summary.failed += 1;
            }
        }

        summary
    }

    fn normalize_one(
        &self,
        path: &Path,
        name: &str,
        dry_run: bool,
        summary: &mut BatchSummary,
    ) -> pdfnorm_core::error::Result<()> {
        let temp = self.files.temp_path_for(path)?;

        let result = self.processor.process(path, &temp, name, dry_run);
        let records = match result {
            Ok(records) => records,
            Err(err) => {
                self.files.remove_temp(&temp);
                return Err(err);
            }
        };

        if !records.is_empty() {
            summary.corrected += 1;
            if !dry_run {
                self.files.promote(&temp, path)?;
            }
        }
        self.files.remove_temp(&temp);

        Ok(())
    }
}

/// Display name for a document: the file name without its extension.
fn document_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{Document, Object, dictionary};
    use pdfnorm_document::PdfFile;
    use pdfnorm_engine::ProgressReporter;

    #[derive(Debug, Default)]
    struct SilentReporter;

    impl ProgressReporter for SilentReporter {
        fn report_progress(&self, _current: usize, _total: usize, _name: &str) {}
        fn report_issue(&self, _name: &str, _message: &str) {}
        fn report_fix(&self, _name: &str, _message: &str) {}
    }

    fn service(temp_dir: PathBuf) -> NormalizeService {
        let reporter = Arc::new(IssueReporter::new(Box::new(SilentReporter)));
        NormalizeService::new(
            DocProcessor::with_default_norms(Arc::clone(&reporter)),
            FileService::new(temp_dir),
            reporter,
        )
    }

    fn save_doc_with_title(path: &Path, title: &str) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(title),
            "Author" => Object::string_literal("Author"),
        });
        doc.trailer.set("Info", info_id);
        doc.save(path).expect("save fixture");
    }

    #[test]
    fn corrected_documents_are_rewritten_in_place() {
        let dir = tempfile::tempdir().expect("temp dir");
        let pdf = dir.path().join("doc.pdf");
        save_doc_with_title(&pdf, " Spaced ");

        let mut service = service(dir.path().join("work"));
        let summary = service.normalize_all(&[pdf.clone()], None, false);

        assert_eq!(summary.processed, 1);
        assert_eq!(summary.corrected, 1);
        assert_eq!(summary.failed, 0);
        let reopened = PdfFile::open(&pdf).expect("reopen");
        assert_eq!(reopened.title(), "Spaced");
    }

    #[test]
    fn dry_run_leaves_the_original_untouched() {
        let dir = tempfile::tempdir().expect("temp dir");
        let pdf = dir.path().join("doc.pdf");
        save_doc_with_title(&pdf, " Spaced ");

        let mut service = service(dir.path().join("work"));
        let summary = service.normalize_all(&[pdf.clone()], None, true);

        assert_eq!(summary.corrected, 0);
        let reopened = PdfFile::open(&pdf).expect("reopen");
        assert_eq!(reopened.title(), " Spaced ");
    }

    #[test]
    fn a_broken_document_does_not_stop_the_batch() {
        let dir = tempfile::tempdir().expect("temp dir");
        let broken = dir.path().join("broken.pdf");
        std::fs::write(&broken, b"not a pdf").expect("write broken");
        let good = dir.path().join("good.pdf");
        save_doc_with_title(&good, " Spaced ");

        let mut service = service(dir.path().join("work"));
        let summary = service.normalize_all(&[broken, good.clone()], None, false);

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.corrected, 1);
        let reopened = PdfFile::open(&good).expect("reopen");
        assert_eq!(reopened.title(), "Spaced");
    }

    #[test]
    fn config_reaches_the_norms() {
        let dir = tempfile::tempdir().expect("temp dir");
        let pdf = dir.path().join("report.pdf");
        save_doc_with_title(&pdf, "Old");

        let config = NormConfig {
            title: Some("Q3 - {file_name}".into()),
            ..NormConfig::default()
        };
        let mut service = service(dir.path().join("work"));
        service.normalize_all(&[pdf.clone()], Some(config), false);

        let reopened = PdfFile::open(&pdf).expect("reopen");
        assert_eq!(reopened.title(), "Q3 - report");
    }
}
