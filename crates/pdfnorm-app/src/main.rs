// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pdfnorm — batch PDF convention normalizer
//
// Entry point. Initialises logging, parses the command line, and runs the
// batch over the given files and directories.

mod console;
mod files;
mod service;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use pdfnorm_core::config;
use pdfnorm_engine::{DocProcessor, IssueReporter};

use console::ConsoleReporter;
use files::FileService;
use service::NormalizeService;

/// Audit and correct PDF metadata, initial-view settings, and bookmarks.
#[derive(Debug, Parser)]
#[command(name = "pdfnorm", version, about)]
struct Cli {
    /// PDF files or directories to normalize (directories are scanned for
    /// top-level .pdf files).
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// JSON configuration file with normalization overrides.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report every issue and proposed fix without modifying any file.
    #[arg(short = 'n', long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref());

    let reporter = Arc::new(IssueReporter::new(Box::new(ConsoleReporter)));
    let mut service = NormalizeService::new(
        DocProcessor::with_default_norms(Arc::clone(&reporter)),
        FileService::default(),
        reporter,
    );

    let summary = service.normalize_all(&cli.paths, config, cli.dry_run);

    let verb = if cli.dry_run { "would correct" } else { "corrected" };
    println!(
        "{} {} processed, {} {}, {} failed",
        "Done:".bold(),
        summary.processed,
        summary.corrected,
        verb,
        summary.failed
    );

    if summary.processed == 0 || summary.failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
