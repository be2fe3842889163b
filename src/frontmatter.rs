//! Jekyll-style YAML front matter extraction.
//!
//! Guide documents may begin with a front matter block, delimited by `---`
//! lines, carrying the metadata the static-site generator consumes:
//!
//! ```text
//! ---
//! layout: default
//! title: Activity Lifecycle
//! ---
//!
//! # Activity Lifecycle
//! ...
//! ```
//!
//! The loader is deliberately not a schema enforcer. `layout` and `title`
//! are the only keys it understands; everything else is preserved in an
//! `extra` map and passed through untouched. A *missing* front matter block
//! is not an error — the document loads with a fallback title and the
//! omission surfaces as a `check` finding. Malformed YAML between valid
//! fences, and an opening fence with no closing fence, are errors: the file
//! claims to have metadata but the claim cannot be read.
//!
//! ## Title resolution
//!
//! Each document's title is resolved from multiple sources. The first
//! non-empty value wins:
//!
//! ```text
//! front matter `title:` → first `# heading` in the body → filename
//! ```
//!
//! Front matter represents deliberate curation (the author typed it on
//! purpose) and wins over the body heading; the filename form is mechanical
//! extraction and comes last.

use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("front matter block is not closed by a `---` fence")]
    Unterminated,
    #[error("invalid YAML in front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Parsed front matter. Unknown keys land in `extra`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Split a document into front matter and body.
///
/// Returns `(None, content)` when the document has no front matter block.
/// The returned body has the block (and the blank line Jekyll conventionally
/// leaves after it) stripped.
pub fn split(content: &str) -> Result<(Option<FrontMatter>, &str), FrontMatterError> {
    let rest = match opening_fence(content) {
        Some(rest) => rest,
        None => return Ok((None, content)),
    };

    // Find the closing fence: a line that is exactly `---`
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &rest[..offset];
            let body = rest[offset + line.len()..].trim_start_matches('\n');
            // An empty block is still a block: `---\n---` means "no keys"
            let fm = if yaml.trim().is_empty() {
                FrontMatter::default()
            } else {
                serde_yaml::from_str(yaml)?
            };
            return Ok((Some(fm), body));
        }
        offset += line.len();
    }

    Err(FrontMatterError::Unterminated)
}

/// Returns the content after the opening `---` fence, or `None` when the
/// document does not start with one.
fn opening_fence(content: &str) -> Option<&str> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content.strip_prefix("---")?;
    // The fence must be a whole line: `---\n`, or `---` at EOF
    if let Some(rest) = rest.strip_prefix('\n') {
        Some(rest)
    } else if let Some(rest) = rest.strip_prefix("\r\n") {
        Some(rest)
    } else {
        None
    }
}

/// Resolve a value from multiple sources in priority order.
///
/// Returns the first non-`None`, non-empty value, trimmed. Used for title
/// resolution: `resolve(&[fm_title, first_heading, filename_title])`.
pub fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_extracts_layout_and_title() {
        let content = "---\nlayout: default\ntitle: Activity Lifecycle\n---\n\n# Body\n";
        let (fm, body) = split(content).unwrap();
        let fm = fm.unwrap();
        assert_eq!(fm.layout.as_deref(), Some("default"));
        assert_eq!(fm.title.as_deref(), Some("Activity Lifecycle"));
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn split_without_front_matter_returns_none() {
        let content = "# Just a heading\n\nBody text.\n";
        let (fm, body) = split(content).unwrap();
        assert!(fm.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn split_preserves_unknown_keys() {
        let content = "---\ntitle: T\ncategory: android\n---\nbody";
        let (fm, _) = split(content).unwrap();
        let fm = fm.unwrap();
        assert_eq!(
            fm.extra.get("category").and_then(|v| v.as_str()),
            Some("android")
        );
    }

    #[test]
    fn split_empty_block_is_default() {
        let content = "---\n---\nbody";
        let (fm, body) = split(content).unwrap();
        let fm = fm.unwrap();
        assert!(fm.title.is_none());
        assert!(fm.layout.is_none());
        assert_eq!(body, "body");
    }

    #[test]
    fn split_unterminated_block_is_error() {
        let content = "---\ntitle: T\n\n# No closing fence\n";
        assert!(matches!(split(content), Err(FrontMatterError::Unterminated)));
    }

    #[test]
    fn split_invalid_yaml_is_error() {
        let content = "---\ntitle: [unclosed\n---\nbody";
        assert!(matches!(split(content), Err(FrontMatterError::Yaml(_))));
    }

    #[test]
    fn split_thematic_break_later_is_not_front_matter() {
        // A `---` further down the file is a thematic break, not a fence
        let content = "# Heading\n\n---\n\nmore\n";
        let (fm, body) = split(content).unwrap();
        assert!(fm.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn split_handles_crlf_fences() {
        let content = "---\r\ntitle: T\r\n---\r\nbody";
        let (fm, body) = split(content).unwrap();
        assert_eq!(fm.unwrap().title.as_deref(), Some("T"));
        assert_eq!(body, "body");
    }

    #[test]
    fn split_strips_bom() {
        let content = "\u{feff}---\ntitle: T\n---\nbody";
        let (fm, _) = split(content).unwrap();
        assert_eq!(fm.unwrap().title.as_deref(), Some("T"));
    }

    // =========================================================================
    // resolve() tests
    // =========================================================================

    #[test]
    fn resolve_picks_first_non_none() {
        assert_eq!(
            resolve(&[Some("Front Matter"), Some("Heading")]),
            Some("Front Matter".to_string())
        );
    }

    #[test]
    fn resolve_skips_none_and_empty() {
        assert_eq!(
            resolve(&[None, Some(""), Some("  "), Some("Fallback")]),
            Some("Fallback".to_string())
        );
    }

    #[test]
    fn resolve_trims_whitespace() {
        assert_eq!(
            resolve(&[Some("  Padded  ")]),
            Some("Padded".to_string())
        );
    }

    #[test]
    fn resolve_returns_none_when_all_empty() {
        assert_eq!(resolve(&[None, Some("")]), None);
        assert_eq!(resolve(&[]), None);
    }
}
