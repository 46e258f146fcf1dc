// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory PDF fixtures for the norm tests.

use std::sync::{Arc, Mutex};

use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};

use crate::reporter::{IssueReporter, ProgressReporter};

/// Sink that captures every issue/fix announcement for assertions.
#[derive(Debug, Default)]
pub(crate) struct RecordingReporter {
    messages: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("reporter lock").clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn report_progress(&self, _current: usize, _total: usize, _name: &str) {}

    fn report_issue(&self, name: &str, message: &str) {
        self.messages
            .lock()
            .expect("reporter lock")
            .push(format!("{name}: {message}"));
    }

    fn report_fix(&self, name: &str, message: &str) {
        self.messages
            .lock()
            .expect("reporter lock")
            .push(format!("{name}: {message}"));
    }
}

/// An issue reporter wired to a recording sink.
pub(crate) fn recording_reporter() -> (Arc<IssueReporter>, Arc<RecordingReporter>) {
    let sink = Arc::new(RecordingReporter::default());
    let reporter = Arc::new(IssueReporter::new(Box::new(Arc::clone(&sink))));
    (reporter, sink)
}

/// A minimal valid document with the given number of empty pages.
pub(crate) fn base_doc(page_count: usize) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::new();
    for _ in 0..page_count {
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Object ID of the 1-indexed page.
pub(crate) fn page_id(doc: &Document, page_number: u32) -> ObjectId {
    *doc.get_pages().get(&page_number).expect("page exists")
}

/// Install an /Info dictionary with the given title and author string.
pub(crate) fn set_info(doc: &mut Document, title: &str, author: &str) {
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(title),
        "Author" => Object::string_literal(author),
    });
    doc.trailer.set("Info", info_id);
}

/// Set an entry on the catalog dictionary.
pub(crate) fn catalog_set(doc: &mut Document, key: &str, value: Object) {
    let root = doc
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .expect("catalog reference");
    doc.get_object_mut(root)
        .and_then(Object::as_dict_mut)
        .expect("catalog dictionary")
        .set(key, value);
}

/// Install a GoTo open action with the given destination array.
pub(crate) fn install_open_action(doc: &mut Document, dest: Vec<Object>) {
    let action = dictionary! {
        "S" => "GoTo",
        "D" => Object::Array(dest),
    };
    catalog_set(doc, "OpenAction", Object::Dictionary(action));
}

/// Bookmark fixture: title, optional destination, children.
pub(crate) struct BookmarkSpec {
    title: String,
    dest: Option<Object>,
    children: Vec<BookmarkSpec>,
}

pub(crate) fn bm(title: &str, dest: Object) -> BookmarkSpec {
    BookmarkSpec {
        title: title.to_string(),
        dest: Some(dest),
        children: Vec::new(),
    }
}

pub(crate) fn bm_no_dest(title: &str) -> BookmarkSpec {
    BookmarkSpec {
        title: title.to_string(),
        dest: None,
        children: Vec::new(),
    }
}

pub(crate) fn bm_with_children(
    title: &str,
    dest: Object,
    children: Vec<BookmarkSpec>,
) -> BookmarkSpec {
    BookmarkSpec {
        title: title.to_string(),
        dest: Some(dest),
        children,
    }
}

/// Install an /Outlines tree built from the given top-level bookmarks.
pub(crate) fn install_outline(doc: &mut Document, roots: &[BookmarkSpec]) {
    let Some((first, last)) = install_nodes(doc, roots) else {
        return;
    };
    let outlines_id = doc.add_object(dictionary! {
        "Type" => "Outlines",
        "First" => first,
        "Last" => last,
        "Count" => roots.len() as i64,
    });
    catalog_set(doc, "Outlines", outlines_id.into());
}

fn install_nodes(doc: &mut Document, specs: &[BookmarkSpec]) -> Option<(ObjectId, ObjectId)> {
    if specs.is_empty() {
        return None;
    }

    let ids: Vec<ObjectId> = specs.iter().map(|_| doc.new_object_id()).collect();
    for (index, spec) in specs.iter().enumerate() {
        let mut node = Dictionary::new();
        node.set("Title", Object::string_literal(spec.title.as_str()));
        if let Some(dest) = &spec.dest {
            node.set("Dest", dest.clone());
        }
        if let Some((child_first, child_last)) = install_nodes(doc, &spec.children) {
            node.set("First", child_first);
            node.set("Last", child_last);
        }
        if index + 1 < ids.len() {
            node.set("Next", ids[index + 1]);
        }
        doc.objects.insert(ids[index], Object::Dictionary(node));
    }

    Some((ids[0], *ids.last().expect("non-empty ids")))
}

/// Install a /Names → /Dests name tree with the given key/array pairs.
pub(crate) fn install_named_dests(doc: &mut Document, entries: &[(&str, Vec<Object>)]) {
    let mut pairs: Vec<Object> = Vec::new();
    for (key, dest) in entries {
        pairs.push(Object::string_literal(*key));
        pairs.push(Object::Array(dest.clone()));
    }
    let tree = dictionary! { "Names" => pairs };
    let names = dictionary! { "Dests" => Object::Dictionary(tree) };
    catalog_set(doc, "Names", Object::Dictionary(names));
}

/// An explicit destination array.
pub(crate) fn dest_array(page: ObjectId, zoom: &str) -> Object {
    Object::Array(vec![
        page.into(),
        Object::Name(zoom.as_bytes().to_vec()),
    ])
}
