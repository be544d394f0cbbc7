//! # Documents
//!
//! The demo binary's page content: one text document per page, titled by
//! file stem. The widget itself never looks inside a page; only the page
//! view renders these.

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub body: String,
}

impl Document {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Read each path as a page. Fails on the first unreadable file.
pub fn load_documents<P: AsRef<Path>>(paths: &[P]) -> io::Result<Vec<Document>> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            let body = fs::read_to_string(path)?;
            let title = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            debug!("Loaded {} ({} bytes)", path.display(), body.len());
            Ok(Document::new(title, body))
        })
        .collect::<io::Result<Vec<_>>>()
        .inspect(|docs| info!("Loaded {} documents", docs.len()))
}

/// Built-in pages shown when no files are given.
pub fn sample_documents() -> Vec<Document> {
    const SAMPLES: &[(&str, &str)] = &[
        (
            "Inbox",
            "Tabs along the top, pages below.\n\n\
             Press → / ← to swipe between pages, or drag the page sideways with the mouse. \
             A drag released before the halfway point springs back.",
        ),
        (
            "Drafts",
            "The menu strip scrolls on its own.\n\n\
             Press l / h (or Tab / Shift+Tab) to fling it one tab, or drag it with the mouse. \
             Wherever it comes to rest, the tab in the middle becomes the current page.",
        ),
        (
            "Sent",
            "Click any tab to jump straight to its page.\n\n\
             Number keys 1-9 jump too.",
        ),
        (
            "Archive",
            "Long pages scroll vertically with ↑ / ↓, PgUp / PgDn or the mouse wheel. \
             Each page remembers its own scroll position.",
        ),
        ("Trash", "Press q or Esc to quit."),
    ];
    SAMPLES
        .iter()
        .map(|(title, body)| Document::new(*title, *body))
        .collect()
}
