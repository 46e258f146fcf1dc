// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Pdfnorm.

use thiserror::Error;

/// Top-level error type for all Pdfnorm operations.
///
/// Structural anomalies inside a document (malformed destinations, missing
/// page references) are never surfaced through this type — they degrade to
/// issue-only reports and processing continues. This enum covers the faults
/// that genuinely end a document's processing: unreadable or unwritable
/// files and documents whose top-level skeleton (trailer, catalog) is gone.
#[derive(Debug, Error)]
pub enum NormError {
    #[error("PDF operation failed: {0}")]
    Pdf(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, NormError>;
