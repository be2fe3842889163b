//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every document is its semantic identity — positional index and
//! title — with filesystem paths shown as secondary context via indented
//! `Source:` lines.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Documents
//! 001 Activity Lifecycle (2 questions)
//!     Source: 010-activity-lifecycle.md
//! 002 Android Components (1 question)
//!     Source: 020-android-components.md
//!
//! Hidden
//!     Setup
//!         Source: SETUP.md
//!
//! Config
//!     config.toml
//! ```
//!
//! ## Index
//!
//! ```text
//! Questions Index → QUESTIONS_INDEX.md
//!     3 topics, 5 questions
//! ```
//!
//! ## Check
//!
//! ```text
//! 2 findings
//!     coroutines: heading 'Interview Questions & Answers' declares 10 questions but 2 were found
//!     SETUP: no front matter; filename title in use
//! ```
//!
//! ## Render
//!
//! ```text
//! Home → index.html
//! 001 Activity Lifecycle → activity-lifecycle.html
//! 002 Android Components → android-components.html
//!
//! Hidden
//!     Setup → SETUP.html
//!
//! Generated 4 pages
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::check::Finding;
use crate::index::IndexReport;
use crate::types::Manifest;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// `"1 question"` / `"3 questions"`.
fn question_count(n: usize) -> String {
    if n == 1 {
        "1 question".to_string()
    } else {
        format!("{} questions", n)
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing the discovered guide structure.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Documents".to_string());
    for (i, doc) in manifest.guide_documents().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            format_index(i + 1),
            doc.title,
            question_count(doc.questions.len())
        ));
        lines.push(format!("    Source: {}", doc.source_path));
    }

    let hidden: Vec<_> = manifest.documents.iter().filter(|d| !d.in_guide).collect();
    if !hidden.is_empty() {
        lines.push(String::new());
        lines.push("Hidden".to_string());
        for doc in hidden {
            lines.push(format!("    {}", doc.title));
            lines.push(format!("        Source: {}", doc.source_path));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push("    config.toml".to_string());
    } else {
        lines.push("    (defaults)".to_string());
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Index output
// ============================================================================

/// Format index stage output.
pub fn format_index_output(report: &IndexReport, heading: &str) -> Vec<String> {
    let status = if report.changed { "" } else { " (unchanged)" };
    vec![
        format!("{} \u{2192} {}{}", heading, report.path.display(), status),
        format!(
            "    {} topics, {}",
            report.topics,
            question_count(report.questions)
        ),
    ]
}

/// Print index output to stdout.
pub fn print_index_output(report: &IndexReport, heading: &str) {
    for line in format_index_output(report, heading) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format check findings, one indented line each.
pub fn format_check_output(findings: &[Finding]) -> Vec<String> {
    if findings.is_empty() {
        return vec!["No findings".to_string()];
    }
    let mut lines = Vec::new();
    lines.push(if findings.len() == 1 {
        "1 finding".to_string()
    } else {
        format!("{} findings", findings.len())
    });
    for finding in findings {
        lines.push(format!("    {}", finding));
    }
    lines
}

/// Print check output to stdout.
pub fn print_check_output(findings: &[Finding]) {
    for line in format_check_output(findings) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 3: Render output
// ============================================================================

/// Format render stage output showing generated HTML files.
pub fn format_render_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Home \u{2192} index.html".to_string());
    for (i, doc) in manifest.guide_documents().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}.html",
            format_index(i + 1),
            doc.title,
            doc.slug
        ));
    }

    let hidden: Vec<_> = manifest.documents.iter().filter(|d| !d.in_guide).collect();
    if !hidden.is_empty() {
        lines.push(String::new());
        lines.push("Hidden".to_string());
        for doc in hidden {
            lines.push(format!("    {} \u{2192} {}.html", doc.title, doc.slug));
        }
    }

    lines.push(String::new());
    // +1 for the index page
    lines.push(format!("Generated {} pages", manifest.documents.len() + 1));

    lines
}

/// Print render output to stdout.
pub fn print_render_output(manifest: &Manifest) {
    for line in format_render_output(manifest) {
        println!("{}", line);
    }
}
