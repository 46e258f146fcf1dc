// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Canonicalization helpers — configuration tokens mapped to canonical
// target values, and the shared destination-array rewrite algorithm used by
// both the open action and every bookmark.

use lopdf::Object;
use pdfnorm_core::NormConfig;

/// Canonical zoom modes the normalizer targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomMode {
    /// /Fit — fit the whole page.
    Fit,
    /// /FitH — fit the page width (one trailing `top` parameter).
    FitH,
    /// /FitB — fit the visible (bounding-box) area.
    FitB,
    /// /XYZ — explicit left/top/zoom triple.
    Xyz,
}

impl ZoomMode {
    /// The PDF name written at slot 1 of a destination array.
    pub fn pdf_name(self) -> &'static str {
        match self {
            Self::Fit => "Fit",
            Self::FitH => "FitH",
            Self::FitB => "FitB",
            Self::Xyz => "XYZ",
        }
    }

    /// Human-readable form used in fix descriptions.
    pub fn description(self) -> &'static str {
        match self {
            Self::Fit => "Fit Page",
            Self::FitH => "Fit Width",
            Self::FitB => "Fit Visible",
            Self::Xyz => "XYZ",
        }
    }

    /// The name object for slot 1.
    pub fn name_object(self) -> Object {
        Object::Name(self.pdf_name().as_bytes().to_vec())
    }
}

/// Target bookmark zoom from the config token. Unrecognized or absent
/// tokens fall back to Fit.
pub fn target_bookmark_zoom(config: Option<&NormConfig>) -> ZoomMode {
    let token = config.and_then(|c| c.bookmark_zoom.as_deref());
    match token {
        Some("FitPage") => ZoomMode::Fit,
        Some("FitWidth") => ZoomMode::FitH,
        Some("FitVisible") => ZoomMode::FitB,
        Some("ActualSize") => ZoomMode::Xyz,
        Some("InheritZoom") => ZoomMode::Xyz,
        _ => ZoomMode::Fit,
    }
}

/// Target /PageMode name from the config token. Defaults to UseOutlines.
pub fn target_page_mode(config: Option<&NormConfig>) -> &'static str {
    let token = config.and_then(|c| c.page_mode.as_deref());
    match token {
        Some("PageOnly") => "UseNone",
        Some("Bookmarks") => "UseOutlines",
        Some("Pages") => "UseThumbs",
        Some("Attachments") => "UseAttachments",
        Some("Layers") => "UseOC",
        _ => "UseOutlines",
    }
}

/// Target /PageLayout name from the config token. The six layout tokens map
/// to themselves; anything else defaults to TwoPageRight.
pub fn target_page_layout(config: Option<&NormConfig>) -> &'static str {
    let token = config.and_then(|c| c.page_layout.as_deref());
    match token {
        Some("SinglePage") => "SinglePage",
        Some("OneColumn") => "OneColumn",
        Some("TwoColumnLeft") => "TwoColumnLeft",
        Some("TwoColumnRight") => "TwoColumnRight",
        Some("TwoPageLeft") => "TwoPageLeft",
        Some("TwoPageRight") => "TwoPageRight",
        _ => "TwoPageRight",
    }
}

/// The zoom name at slot 1, when it is a name.
pub fn zoom_tag(dest: &[Object]) -> Option<&[u8]> {
    match dest.get(1) {
        Some(Object::Name(name)) => Some(name),
        _ => None,
    }
}

/// Rewrite a destination array `[page_ref, zoom_tag, params…]` towards
/// `target`. The caller guarantees arity ≥ 2.
///
/// This is not a complete coercion between every pair of zoom modes — it
/// normalizes only the transitions the system needs (Fit, FitH/FitBH, FitB,
/// XYZ). Other combinations fall through to "set tag only", which can leave
/// stale trailing parameters behind.
pub fn canonicalize_destination(dest: &mut Vec<Object>, target: ZoomMode) {
    let current = zoom_tag(dest).map(<[u8]>::to_vec);
    let current = current.as_deref();

    if target == ZoomMode::Xyz {
        dest[1] = target.name_object();
        if dest.len() <= 2 {
            // [page /XYZ left top zoom] — zero zoom means actual size.
            dest.push(Object::Integer(0));
            dest.push(Object::Integer(0));
            dest.push(Object::Integer(0));
        }
    } else if matches!(current, Some(b"FitH") | Some(b"FitBH")) {
        dest[1] = target.name_object();
        if target != ZoomMode::FitH && dest.len() > 2 {
            // Drop the single `top` parameter FitH/FitBH carry.
            dest.remove(2);
        }
    } else if current == Some(b"XYZ".as_slice()) {
        dest[1] = target.name_object();
        dest.truncate(2);
    } else {
        dest[1] = target.name_object();
    }
}
