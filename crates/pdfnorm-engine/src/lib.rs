// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pdfnorm-engine — Normalization rule engine for Pdfnorm.
//
// Provides the issue reporter, the canonicalization helpers (zoom / page
// mode / page layout targets and the shared destination rewrite algorithm),
// the three norm modules (metadata, view, outline), and the per-document
// processor that runs them in fixed order.

pub mod canon;
pub mod norms;
pub mod processor;
pub mod reporter;

#[cfg(test)]
pub(crate) mod testdoc;

pub use canon::ZoomMode;
pub use norms::{MetadataNorm, Norm, OutlineNorm, ViewNorm};
pub use processor::DocProcessor;
pub use reporter::{IssueReporter, ProgressReporter, TracingReporter};
