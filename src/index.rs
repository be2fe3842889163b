//! Derived questions index generation.
//!
//! Stage 2 of the guidebook build pipeline. Takes the scan manifest and
//! produces the aggregated questions index (`QUESTIONS_INDEX.md` by
//! default): every guide topic in source order, each with an ordered list of
//! its questions linking into the source document by anchor.
//!
//! ## Output
//!
//! ```text
//! ---
//! layout: default
//! title: Questions Index
//! ---
//!
//! # Questions Index
//!
//! ## 1. Activity Lifecycle (2 Questions)
//!
//! 1. [What is an Activity?](010-activity-lifecycle.md#q1-what-is-an-activity)
//! 2. [Describe the lifecycle callbacks.](010-activity-lifecycle.md#q2-describe-the-lifecycle-callbacks)
//!
//! ## 2. Android Components (1 Question)
//! ...
//! ```
//!
//! ## Contract
//!
//! - Input order is preserved: topics appear in guide order, questions in
//!   source order. Hidden (unnumbered) documents contribute nothing.
//! - Every count is computed from the extracted question list. Counts
//!   declared in source headings are never copied — that is the drift
//!   `check` exists to catch.
//! - Output is a pure function of the manifest: rebuilding on unchanged
//!   input is byte-identical, and an empty document set produces an empty
//!   (header-only) index without error.

use crate::types::Manifest;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of writing the index file.
#[derive(Debug)]
pub struct IndexReport {
    /// Where the index was written.
    pub path: PathBuf,
    /// Number of topics listed.
    pub topics: usize,
    /// Total number of questions listed.
    pub questions: usize,
    /// False when the file already had identical content.
    pub changed: bool,
}

/// Build the index document from a manifest. Pure; no I/O.
pub fn build_index(manifest: &Manifest) -> String {
    let heading = &manifest.config.index.heading;
    let mut out = String::new();

    out.push_str("---\nlayout: default\ntitle: ");
    out.push_str(heading);
    out.push_str("\n---\n\n# ");
    out.push_str(heading);
    out.push('\n');

    for (position, doc) in manifest.guide_documents().enumerate() {
        out.push('\n');
        out.push_str(&format!(
            "## {}. {} ({})\n",
            position + 1,
            doc.title,
            count_label(doc.questions.len())
        ));
        if !doc.questions.is_empty() {
            out.push('\n');
            for (i, q) in doc.questions.iter().enumerate() {
                out.push_str(&format!(
                    "{}. [{}]({}#{})\n",
                    i + 1,
                    q.title,
                    doc.source_path,
                    q.anchor
                ));
            }
        }
    }

    out
}

/// `"1 Question"` / `"3 Questions"` — always the derived number.
fn count_label(n: usize) -> String {
    if n == 1 {
        "1 Question".to_string()
    } else {
        format!("{} Questions", n)
    }
}

/// Read the manifest JSON and write the index file at the guide root.
///
/// The write is skipped (and `changed` is false) when the file already has
/// identical content, so repeated runs do not touch mtimes.
pub fn write_index(manifest_path: &Path, source_root: &Path) -> Result<IndexReport, IndexError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;

    let content = build_index(&manifest);
    let path = source_root.join(&manifest.config.index.file);

    let changed = match fs::read_to_string(&path) {
        Ok(existing) => existing != content,
        Err(_) => true,
    };
    if changed {
        fs::write(&path, &content)?;
    }

    Ok(IndexReport {
        path,
        topics: manifest.guide_documents().count(),
        questions: manifest.guide_documents().map(|d| d.questions.len()).sum(),
        changed,
    })
}
