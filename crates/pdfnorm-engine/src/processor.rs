// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document processor — runs the norm modules over one document in fixed
// order and reports what was (or would be) fixed.

use std::path::Path;
use std::sync::Arc;

use pdfnorm_core::error::Result;
use pdfnorm_core::{FixRecord, NormConfig};
use pdfnorm_document::PdfFile;
use tracing::{debug, instrument};

use crate::norms::{MetadataNorm, Norm, OutlineNorm, ViewNorm};
use crate::reporter::IssueReporter;

pub struct DocProcessor {
    norms: Vec<Box<dyn Norm>>,
}

impl DocProcessor {
    pub fn new(norms: Vec<Box<dyn Norm>>) -> Self {
        Self { norms }
    }

    /// The standard pipeline: metadata, then initial view, then outline.
    pub fn with_default_norms(reporter: Arc<IssueReporter>) -> Self {
        Self::new(vec![
            Box::new(MetadataNorm::new(Arc::clone(&reporter))),
            Box::new(ViewNorm::new(Arc::clone(&reporter))),
            Box::new(OutlineNorm::new(reporter)),
        ])
    }

    /// Share one configuration across every norm. `None` resets to defaults.
    pub fn set_config(&mut self, config: Option<NormConfig>) {
        let config = config.map(Arc::new);
        for norm in &mut self.norms {
            norm.set_config(config.clone());
        }
    }

    /// Normalize the document at `pdf_path`. Unless this is a dry run, the
    /// corrected document is written to `temp_path`; promotion over the
    /// original is the caller's decision.
    #[instrument(skip(self))]
    pub fn process(
        &self,
        pdf_path: &Path,
        temp_path: &Path,
        name: &str,
        dry_run: bool,
    ) -> Result<Vec<FixRecord>> {
        let mut doc = PdfFile::open(pdf_path)?;
        let fix_records = self.process_document(&mut doc, name, dry_run)?;

        if !dry_run {
            doc.save_to(temp_path)?;
        }
        debug!(fixes = fix_records.len(), dry_run, "document processed");

        Ok(fix_records)
    }

    /// Run every norm over an already-open document.
    pub fn process_document(
        &self,
        doc: &mut PdfFile,
        name: &str,
        dry_run: bool,
    ) -> Result<Vec<FixRecord>> {
        let mut fix_records = Vec::new();
        for norm in &self.norms {
            norm.normalize(doc, name, dry_run, &mut fix_records)?;
        }
        Ok(fix_records)
    }
}
