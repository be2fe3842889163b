//! Shared test utilities for the guidebook test suite.
//!
//! Provides fixture builders and lookup helpers that work with scan-phase
//! data structures (`Manifest`, `Document`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = sample_guide();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let doc = find_document(&manifest, "coroutines");
//! assert_eq!(doc.questions.len(), 2);
//! ```

use crate::types::{Document, Manifest};
use std::fs;
use tempfile::TempDir;

// =========================================================================
// Fixture builders
// =========================================================================

/// An empty guide directory.
pub fn empty_guide() -> TempDir {
    TempDir::new().unwrap()
}

/// A small but representative guide: three numbered topics with question
/// sections, declared prev/next links, and an unnumbered `SETUP.md`.
///
/// The link chain is deliberately consistent (no findings) so tests that
/// want drift can introduce it on top.
pub fn sample_guide() -> TempDir {
    let tmp = TempDir::new().unwrap();

    write_doc(
        &tmp,
        "010-activity-lifecycle.md",
        Some("Activity Lifecycle"),
        "\
# Activity Lifecycle

## Interview Questions & Answers (2 Questions)

### Q1: What is an Activity?

An Activity represents a single screen with a user interface.

### Q2: Describe the lifecycle callbacks.

onCreate, onStart, onResume, onPause, onStop, onDestroy.

---

**Next:** [Android Components](020-android-components.md)
",
    );

    write_doc(
        &tmp,
        "020-android-components.md",
        Some("Android Components"),
        "\
# Android Components

## Interview Questions & Answers (1 Questions)

### Q1: Name the four component types.

Activities, Services, Broadcast Receivers, Content Providers.

---

**Previous:** [Activity Lifecycle](010-activity-lifecycle.md)
**Next:** [Coroutines & Flows](030-coroutines.md)
",
    );

    write_doc(
        &tmp,
        "030-coroutines.md",
        Some("Coroutines & Flows"),
        "\
# Coroutines & Flows

## Interview Questions & Answers (2 Questions)

### Q1: What is a coroutine?

A lightweight unit of concurrent work built on suspending functions.

### Q2: What is a Flow?

A cold asynchronous stream of values.

---

**Previous:** [Android Components](020-android-components.md)
",
    );

    fs::write(
        tmp.path().join("SETUP.md"),
        "# Setup\n\nInstall the toolchain and serve the guide locally.\n",
    )
    .unwrap();

    tmp
}

/// Write a document with optional front matter into the guide root.
pub fn write_doc(tmp: &TempDir, name: &str, fm_title: Option<&str>, body: &str) {
    let content = match fm_title {
        Some(title) => format!("---\nlayout: default\ntitle: {title}\n---\n\n{body}"),
        None => body.to_string(),
    };
    fs::write(tmp.path().join(name), content).unwrap();
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find a document by slug. Panics if not found.
pub fn find_document<'a>(manifest: &'a Manifest, slug: &str) -> &'a Document {
    manifest
        .documents
        .iter()
        .find(|d| d.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = manifest.documents.iter().map(|d| d.slug.as_str()).collect();
            panic!("document '{slug}' not found. Available: {slugs:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Slugs of guide documents (hidden excluded), in guide order.
pub fn guide_slugs(manifest: &Manifest) -> Vec<&str> {
    manifest
        .guide_documents()
        .map(|d| d.slug.as_str())
        .collect()
}

/// Titles of all documents, in manifest order.
pub fn doc_titles(manifest: &Manifest) -> Vec<&str> {
    manifest
        .documents
        .iter()
        .map(|d| d.title.as_str())
        .collect()
}

/// Question titles of a document, in source order.
pub fn question_titles(doc: &Document) -> Vec<&str> {
    doc.questions.iter().map(|q| q.title.as_str()).collect()
}
