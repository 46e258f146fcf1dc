// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pdfnorm-document — Document access layer for the Pdfnorm normalizer.
//
// Wraps `lopdf::Document` in a `PdfFile` handle and exposes the narrow
// per-facet accessors the rule engine consumes: metadata (title, authors,
// mod-date), catalog (viewer preferences, page mode/layout, open action),
// outline (bookmark enumeration, titles, destinations), and the
// named-destination table.

mod catalog;
mod file;
mod metadata;
mod names;
mod outline;
mod strings;

pub use file::PdfFile;
pub use outline::Destination;
