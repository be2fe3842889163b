//! Shared types used across all pipeline stages.
//!
//! These types are serialized to JSON between stages (scan → index → render)
//! and must be identical across all three modules.

use crate::config::SiteConfig;
use serde::{Deserialize, Serialize};

/// Manifest output from the scan stage.
///
/// Documents are stored in guide order: ascending numeric prefix first,
/// then unnumbered (hidden) documents sorted by slug.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub documents: Vec<Document>,
    pub config: SiteConfig,
}

impl Manifest {
    /// Documents that are part of the guide proper, in reading order.
    ///
    /// Unnumbered documents are excluded — they render, but they carry no
    /// position, contribute no index topic, and get no prev/next links.
    pub fn guide_documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter().filter(|d| d.in_guide)
    }
}

/// A single markdown document in the guide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// URL slug: filename stem with the number prefix stripped.
    pub slug: String,
    /// Resolved title: front matter → first `# heading` → filename.
    pub title: String,
    /// Source path relative to the guide root (e.g. `010-lifecycle.md`).
    pub source_path: String,
    /// Position from the `NNN-` filename prefix. `None` for hidden documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    /// Whether this document participates in guide order and navigation.
    pub in_guide: bool,
    /// `layout` from front matter, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// False when the file had no front matter block (fallback title used).
    pub has_front_matter: bool,
    /// Raw markdown body, front matter stripped.
    pub body: String,
    /// Every heading in the body, in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
    /// Question entries extracted from question sections, in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<QuestionEntry>,
    /// `(N Questions)` claims found in headings, paired with actual counts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub count_claims: Vec<CountClaim>,
    /// `**Previous:** [...](...)` link declared in the body, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_prev: Option<NavLink>,
    /// `**Next:** [...](...)` link declared in the body, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_next: Option<NavLink>,
}

/// A heading in a document body, used for anchor navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Heading text as written (including any `(N Questions)` suffix).
    pub title: String,
    /// Heading level, 1–6.
    pub level: u8,
    /// GitHub-style anchor slug for the heading.
    pub anchor: String,
}

/// A question heading and its answer body.
///
/// Questions are H3 headings inside a question section. The display title
/// has any `Q<n>:` marker stripped — numbering is derived from position,
/// not repeated from the source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionEntry {
    /// Question text with the `Q<n>:` marker stripped.
    pub title: String,
    /// Anchor slug of the original heading (marker included, so links into
    /// the source file resolve).
    pub anchor: String,
    /// Plain-text answer excerpt: everything until the next question.
    pub answer: String,
}

/// A `(N Questions)` count written into a heading, checked against the
/// number of questions actually found in that heading's scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountClaim {
    /// Heading text with the count suffix removed.
    pub heading: String,
    /// The count the heading declares.
    pub declared: usize,
    /// The count the extractor found.
    pub actual: usize,
}

/// A Previous/Next link declared in a document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    /// Link label as written.
    pub label: String,
    /// Raw link target as written (e.g. `./android-components.md`).
    pub target: String,
}
