// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text helpers shared by the norms: trim detection and end-of-line escaping
// for log-safe bookmark titles.

/// Characters the normalizer strips from the edges of titles and authors.
const TRIM_CHARS: &[char] = &[' ', '\r', '\n'];

/// True iff `target` carries leading or trailing spaces, CR, or LF.
pub fn can_be_trimmed(target: &str) -> bool {
    target != trim(target)
}

/// Strip leading/trailing spaces, CR, and LF.
pub fn trim(target: &str) -> &str {
    target.trim_matches(TRIM_CHARS)
}

/// Make CR/LF visible so multi-line bookmark titles stay on one log line.
pub fn escape_eol(target: &str) -> String {
    target.replace('\r', "\\r").replace('\n', "\\n")
}
