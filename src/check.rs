//! Consistency findings over a scanned guide.
//!
//! The source conventions this tool consumes are hand-maintained: question
//! counts written into headings, Previous/Next links written at the bottom
//! of each page. Both drift. `check` mechanizes the editorial review that
//! would otherwise catch them.
//!
//! Findings are not errors — a guide with findings still scans, indexes,
//! and renders. The CLI exits non-zero when findings exist so CI can gate
//! on a clean report.
//!
//! ## Finding kinds
//!
//! - [`FindingKind::BrokenLink`] — a declared Previous/Next target that is
//!   not a document in the collection.
//! - [`FindingKind::AsymmetricLink`] — A declares Next = B, but B's
//!   declared Previous is not A (and the mirror case).
//! - [`FindingKind::CountDrift`] — a heading declares `(N Questions)` but
//!   the extractor found a different number in its scope.
//! - [`FindingKind::MissingFrontMatter`] — no front matter block; the
//!   fallback title was used.

use crate::naming::link_target_slug;
use crate::types::{Document, Manifest, NavLink};
use std::collections::BTreeMap;
use std::fmt;

/// Which direction a declared link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn label(self) -> &'static str {
        match self {
            Direction::Previous => "Previous",
            Direction::Next => "Next",
        }
    }

    fn mirror(self) -> Direction {
        match self {
            Direction::Previous => Direction::Next,
            Direction::Next => Direction::Previous,
        }
    }
}

/// A single editorial defect found in the guide.
#[derive(Debug)]
pub struct Finding {
    /// Slug of the document the finding is about.
    pub slug: String,
    pub kind: FindingKind,
}

#[derive(Debug)]
pub enum FindingKind {
    /// Declared link target does not exist in the collection.
    BrokenLink { direction: Direction, target: String },
    /// Declared link exists but the target does not point back.
    AsymmetricLink {
        direction: Direction,
        target_slug: String,
    },
    /// Heading count claim disagrees with the extracted questions.
    CountDrift {
        heading: String,
        declared: usize,
        actual: usize,
    },
    /// No front matter block; fallback title in use.
    MissingFrontMatter,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FindingKind::BrokenLink { direction, target } => write!(
                f,
                "{}: {} link target '{}' is not in the collection",
                self.slug,
                direction.label(),
                target
            ),
            FindingKind::AsymmetricLink {
                direction,
                target_slug,
            } => write!(
                f,
                "{}: {} link to '{}' is not reciprocated by its {} link",
                self.slug,
                direction.label(),
                target_slug,
                direction.mirror().label()
            ),
            FindingKind::CountDrift {
                heading,
                declared,
                actual,
            } => write!(
                f,
                "{}: heading '{}' declares {} questions but {} were found",
                self.slug, heading, declared, actual
            ),
            FindingKind::MissingFrontMatter => {
                write!(f, "{}: no front matter; filename title in use", self.slug)
            }
        }
    }
}

/// Run all consistency checks over a manifest.
///
/// Findings are ordered by document (manifest order), then by kind in the
/// order documented above — deterministic output for CI logs.
pub fn check(manifest: &Manifest) -> Vec<Finding> {
    let by_slug: BTreeMap<&str, &Document> = manifest
        .documents
        .iter()
        .map(|d| (d.slug.as_str(), d))
        .collect();

    let mut findings = Vec::new();
    for doc in &manifest.documents {
        check_link(doc, Direction::Previous, &by_slug, &mut findings);
        check_link(doc, Direction::Next, &by_slug, &mut findings);

        for claim in &doc.count_claims {
            if claim.declared != claim.actual {
                findings.push(Finding {
                    slug: doc.slug.clone(),
                    kind: FindingKind::CountDrift {
                        heading: claim.heading.clone(),
                        declared: claim.declared,
                        actual: claim.actual,
                    },
                });
            }
        }

        if !doc.has_front_matter {
            findings.push(Finding {
                slug: doc.slug.clone(),
                kind: FindingKind::MissingFrontMatter,
            });
        }
    }
    findings
}

fn check_link(
    doc: &Document,
    direction: Direction,
    by_slug: &BTreeMap<&str, &Document>,
    findings: &mut Vec<Finding>,
) {
    let link = match direction {
        Direction::Previous => &doc.declared_prev,
        Direction::Next => &doc.declared_next,
    };
    let Some(link) = link else { return };

    // External targets are out of scope for referential checks
    let Some(target_slug) = link_target_slug(&link.target) else {
        return;
    };

    let Some(target) = by_slug.get(target_slug.as_str()) else {
        findings.push(Finding {
            slug: doc.slug.clone(),
            kind: FindingKind::BrokenLink {
                direction,
                target: link.target.clone(),
            },
        });
        return;
    };

    let back = match direction {
        Direction::Previous => &target.declared_next,
        Direction::Next => &target.declared_prev,
    };
    if !points_to(back, &doc.slug) {
        findings.push(Finding {
            slug: doc.slug.clone(),
            kind: FindingKind::AsymmetricLink {
                direction,
                target_slug,
            },
        });
    }
}

fn points_to(link: &Option<NavLink>, slug: &str) -> bool {
    link.as_ref()
        .and_then(|l| link_target_slug(&l.target))
        .is_some_and(|s| s == slug)
}
