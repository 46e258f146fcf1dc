// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// File plumbing for the batch run: input discovery, temp-file placement,
// and promotion of corrected documents over their originals.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use pdfnorm_core::error::Result;
use tracing::warn;

pub struct FileService {
    temp_dir: PathBuf,
}

impl Default for FileService {
    fn default() -> Self {
        Self::new(std::env::temp_dir().join("pdfnorm"))
    }
}

impl FileService {
    pub fn new(temp_dir: PathBuf) -> Self {
        Self { temp_dir }
    }

    /// Expand the command-line inputs into a deduplicated list of PDF files.
    ///
    /// Files are taken as given; directories contribute their top-level
    /// `.pdf` entries (no recursion). Paths that do not exist are skipped
    /// with a warning rather than failing the batch.
    pub fn collect_pdf_paths(&self, inputs: &[PathBuf]) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut paths = Vec::new();

        for input in inputs {
            if !input.exists() {
                warn!(path = %input.display(), "input path not found, skipping");
                continue;
            }
            let canonical = match input.canonicalize() {
                Ok(canonical) => canonical,
                Err(err) => {
                    warn!(path = %input.display(), %err, "cannot resolve input path, skipping");
                    continue;
                }
            };

            if canonical.is_dir() {
                let mut entries = match Self::pdf_entries(&canonical) {
                    Ok(entries) => entries,
                    Err(err) => {
                        warn!(path = %canonical.display(), %err, "cannot read directory, skipping");
                        continue;
                    }
                };
                entries.sort();
                for entry in entries {
                    if seen.insert(entry.clone()) {
                        paths.push(entry);
                    }
                }
            } else if seen.insert(canonical.clone()) {
                paths.push(canonical);
            }
        }

        paths
    }

    fn pdf_entries(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let is_pdf = path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
            if is_pdf {
                entries.push(path);
            }
        }
        Ok(entries)
    }

    /// Where the corrected copy of `source` is written before promotion.
    pub fn temp_path_for(&self, source: &Path) -> Result<PathBuf> {
        fs::create_dir_all(&self.temp_dir)?;
        let file_name = source
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "output.pdf".into());
        Ok(self.temp_dir.join(file_name))
    }

    /// Replace `dest` with the corrected copy at `temp`.
    ///
    /// Rename first; when the temp directory sits on another filesystem,
    /// fall back to copy-and-delete.
    pub fn promote(&self, temp: &Path, dest: &Path) -> Result<()> {
        if fs::rename(temp, dest).is_ok() {
            return Ok(());
        }
        fs::copy(temp, dest)?;
        fs::remove_file(temp)?;
        Ok(())
    }

    /// Best-effort cleanup of a leftover temp file.
    pub fn remove_temp(&self, temp: &Path) {
        if temp.exists() {
            if let Err(err) = fs::remove_file(temp) {
                warn!(path = %temp.display(), %err, "could not remove temp file");
            }
        }
    }
}
