// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Issue reporting — the single path through which any norm announces a
// deviation or mutates a document.

use pdfnorm_core::FixRecord;
use pdfnorm_core::error::Result;
use tracing::info;

/// Sink for progress, issue, and fix announcements.
///
/// The console implementation lives in the application crate; library
/// consumers can supply their own (see [`TracingReporter`]).
pub trait ProgressReporter: Send + Sync {
    fn report_progress(&self, current: usize, total: usize, name: &str);
    fn report_issue(&self, name: &str, message: &str);
    fn report_fix(&self, name: &str, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for std::sync::Arc<T> {
    fn report_progress(&self, current: usize, total: usize, name: &str) {
        (**self).report_progress(current, total, name);
    }

    fn report_issue(&self, name: &str, message: &str) {
        (**self).report_issue(name, message);
    }

    fn report_fix(&self, name: &str, message: &str) {
        (**self).report_fix(name, message);
    }
}

/// Default sink that forwards every announcement to `tracing`.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl ProgressReporter for TracingReporter {
    fn report_progress(&self, current: usize, total: usize, name: &str) {
        info!(current, total, name, "processing document");
    }

    fn report_issue(&self, name: &str, message: &str) {
        info!(name, "{message}");
    }

    fn report_fix(&self, name: &str, message: &str) {
        info!(name, "{message}");
    }
}

/// Uniform detect/describe/apply-conditionally primitive used by every norm.
///
/// Norms never touch the document outside a fix action registered here, and
/// `fix_records` only grows through [`IssueReporter::report_and_fix`].
pub struct IssueReporter {
    sink: Box<dyn ProgressReporter>,
}

impl IssueReporter {
    pub fn new(sink: Box<dyn ProgressReporter>) -> Self {
        Self { sink }
    }

    /// Announce one file of the batch.
    pub fn report_progress(&self, current: usize, total: usize, name: &str) {
        self.sink.report_progress(current, total, name);
    }

    /// Emit an issue for which no corrective action exists.
    pub fn report(&self, doc_name: &str, issue_message: &str) {
        self.sink.report_issue(doc_name, issue_message);
    }

    /// Emit an issue and its proposed fix, then — unless this is a dry run —
    /// record the fix and invoke the deferred action.
    ///
    /// Both descriptions are always emitted so dry-run previews read exactly
    /// like live-run announcements. The action is invoked at most once.
    pub fn report_and_fix<F>(
        &self,
        doc_name: &str,
        issue_message: &str,
        fix_message: &str,
        fix_action: F,
        fix_records: &mut Vec<FixRecord>,
        dry_run: bool,
    ) -> Result<()>
    where
        F: FnOnce() -> Result<()>,
    {
        self.sink.report_issue(doc_name, issue_message);
        self.sink.report_fix(doc_name, fix_message);

        if !dry_run {
            fix_records.push(FixRecord::new(issue_message));
            fix_action()?;
        }

        Ok(())
    }
}
