// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Console reporter — timestamped, colored announcements for interactive runs.

use chrono::Local;
use colored::Colorize;
use pdfnorm_engine::ProgressReporter;

#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    fn timestamp() -> String {
        Local::now().format("%H:%M:%S").to_string()
    }
}

impl ProgressReporter for ConsoleReporter {
    fn report_progress(&self, current: usize, total: usize, name: &str) {
        println!(
            "[{}] {} {}",
            Self::timestamp().dimmed(),
            format!("{current}/{total}").bold(),
            name.bold()
        );
    }

    fn report_issue(&self, name: &str, message: &str) {
        println!(
            "[{}] {}: {}",
            Self::timestamp().dimmed(),
            name,
            message.yellow()
        );
    }

    fn report_fix(&self, name: &str, message: &str) {
        println!(
            "[{}] {}: {}",
            Self::timestamp().dimmed(),
            name,
            message.green()
        );
    }
}
