//! Centralized name parsing: the NNN-name filename convention, heading
//! anchors, and link target normalization.
//!
//! Documents follow the same naming pattern the rest of the pipeline relies
//! on: an optional numeric prefix (`NNN-`) followed by a name. This module
//! provides a single parsing function that extracts both parts consistently,
//! plus the two slug forms used when cross-linking:
//!
//! - [`anchor_slug`]: GitHub-style heading anchors (`## Q1: What is an
//!   Activity?` → `q1-what-is-an-activity`), used by the questions index.
//! - [`link_target_slug`]: normalizes a markdown link target written by hand
//!   (`./010-android-components.md#intro`) down to the document slug it
//!   refers to, used by the consistency checks.
//!
//! ## Display Titles
//!
//! Dashes in the name portion are converted to spaces for display:
//! `020-activity-lifecycle.md` → "activity lifecycle". The display form is
//! only a fallback — front matter and `# headings` win over it.

/// Result of parsing a numbered entry name like `020-activity-lifecycle`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Number prefix if present (e.g. `20` from `020-activity-lifecycle`).
    pub number: Option<u32>,
    /// Raw name part after `NNN-`, dashes preserved. Empty if number-only.
    /// For unnumbered entries, this is the full input.
    pub name: String,
    /// Display title: name with dashes converted to spaces.
    pub display_title: String,
}

/// Parse an entry name following the `NNN-name` convention.
///
/// Handles these patterns:
/// - `"020-activity-lifecycle"` → number=Some(20), name="activity-lifecycle"
/// - `"010-coroutines"` → number=Some(10), name="coroutines"
/// - `"001"` → number=Some(1), name=""
/// - `"SETUP"` → number=None, name="SETUP"
/// - `"wip-notes"` → number=None, name="wip-notes"
pub fn parse_entry_name(name: &str) -> ParsedName {
    // Try splitting on first dash
    if let Some(dash_pos) = name.find('-') {
        let prefix = &name[..dash_pos];
        if let Ok(num) = prefix.parse::<u32>() {
            let raw = &name[dash_pos + 1..];
            return ParsedName {
                number: Some(num),
                name: raw.to_string(),
                display_title: raw.replace('-', " "),
            };
        }
    }
    // Check if the entire string is a pure number (no dash)
    if let Ok(num) = name.parse::<u32>() {
        return ParsedName {
            number: Some(num),
            name: String::new(),
            display_title: String::new(),
        };
    }
    // No number prefix
    ParsedName {
        number: None,
        name: name.to_string(),
        display_title: name.replace('-', " "),
    }
}

/// Compute a GitHub-style anchor slug for a heading.
///
/// Lowercases, keeps alphanumerics and existing dashes, converts each
/// whitespace character to a dash, and drops all other punctuation. This
/// matches how GitHub and Jekyll derive `id` attributes (dashes are NOT
/// collapsed — "A & B" becomes `a--b`), so index links into the source
/// markdown resolve when the guide is browsed on either.
pub fn anchor_slug(heading: &str) -> String {
    let mut slug = String::with_capacity(heading.len());
    for c in heading.trim().chars() {
        if c.is_alphanumeric() {
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else if c.is_whitespace() || c == '-' {
            slug.push('-');
        }
        // Other punctuation is dropped entirely
    }
    slug
}

/// Normalize a hand-written link target to the document slug it refers to.
///
/// Returns `None` for external links (`http://`, `https://`, `mailto:`) and
/// pure fragment links (`#anchor`). Otherwise strips any fragment, a leading
/// `./`, a `.md`/`.markdown` extension, directory components, and the `NNN-`
/// prefix — leaving the slug that [`parse_entry_name`] would produce for the
/// target file.
pub fn link_target_slug(target: &str) -> Option<String> {
    let target = target.trim();
    if target.is_empty() || target.starts_with('#') {
        return None;
    }
    if target.starts_with("http://")
        || target.starts_with("https://")
        || target.starts_with("mailto:")
    {
        return None;
    }

    let without_fragment = target.split('#').next().unwrap_or(target);
    let without_dot = without_fragment.strip_prefix("./").unwrap_or(without_fragment);
    let file = without_dot.rsplit('/').next().unwrap_or(without_dot);
    let stem = file
        .strip_suffix(".md")
        .or_else(|| file.strip_suffix(".markdown"))
        .unwrap_or(file);
    if stem.is_empty() {
        return None;
    }

    let parsed = parse_entry_name(stem);
    if parsed.name.is_empty() {
        // Number-only filenames have no slug to speak of; keep the stem
        Some(stem.to_string())
    } else {
        Some(parsed.name)
    }
}
