// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Norm modules — one self-contained rule module per document facet.

use std::sync::Arc;

use pdfnorm_core::error::Result;
use pdfnorm_core::{FixRecord, NormConfig};
use pdfnorm_document::PdfFile;

pub mod metadata;
pub mod outline;
pub mod view;

pub use metadata::MetadataNorm;
pub use outline::OutlineNorm;
pub use view::ViewNorm;

/// A normalization rule module.
///
/// Implementations are stateful only in their held configuration reference;
/// `normalize` communicates exclusively through side effects on the
/// document and the fix-record list, routed through the issue reporter.
pub trait Norm {
    /// Inject the shared run configuration. `None` means all defaults.
    fn set_config(&mut self, config: Option<Arc<NormConfig>>);

    /// Inspect one document facet, reporting every deviation and applying
    /// fixes unless `dry_run` is set.
    ///
    /// Idempotent: a second invocation on the same document state with the
    /// same config yields no issues and no fix records.
    fn normalize(
        &self,
        doc: &mut PdfFile,
        name: &str,
        dry_run: bool,
        fix_records: &mut Vec<FixRecord>,
    ) -> Result<()>;
}
