//! Guide directory scanning and manifest generation.
//!
//! Stage 1 of the guidebook build pipeline. Walks a directory tree of
//! markdown documents and produces the structured manifest that the index
//! and render stages consume.
//!
//! ## Directory Structure
//!
//! ```text
//! guide/                            # Content root
//! ├── config.toml                   # Site configuration (optional)
//! ├── QUESTIONS_INDEX.md            # Generated index (skipped by the scanner)
//! ├── 010-activity-lifecycle.md     # Document (numbered = part of the guide)
//! ├── 020-android-components.md
//! ├── topics/                       # Subdirectories are walked too
//! │   └── 030-coroutines.md
//! ├── SETUP.md                      # Unnumbered = loaded, hidden from guide order
//! └── wip-jetpack-compose.md        # Draft, also hidden
//! ```
//!
//! ## Naming Conventions
//!
//! - **Numbered files** (`NNN-name.md`): part of the guide, ordered by number
//! - **Unnumbered files**: loaded and rendered, but excluded from guide
//!   order, navigation, and the questions index
//!
//! ## Per-document loading
//!
//! Each file is split into front matter and body ([`crate::frontmatter`]),
//! its structure extracted ([`crate::outline`]), and its title resolved:
//! front matter `title:` → first `# heading` → filename display form. A
//! missing front matter block is tolerated (it becomes a `check` finding);
//! malformed YAML is an error.
//!
//! ## Validation
//!
//! The scanner enforces one structural rule: document slugs must be unique
//! across the collection, because slugs are both output filenames and link
//! targets. Everything softer — broken links, count drift — is left to
//! `check`, which reports instead of failing.

use crate::config::{self, SiteConfig};
use crate::frontmatter::{self, FrontMatterError};
use crate::naming::parse_entry_name;
use crate::outline;
use crate::types::{Document, Manifest};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Duplicate document slug '{0}' at {1}")]
    DuplicateSlug(String, PathBuf),
    #[error("Front matter error in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        source: FrontMatterError,
    },
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;

    let mut documents = Vec::new();
    let mut seen_slugs = BTreeSet::new();

    for md_path in collect_markdown_files(root, &config)? {
        let document = load_document(&md_path, root)?;
        if !seen_slugs.insert(document.slug.clone()) {
            return Err(ScanError::DuplicateSlug(document.slug, md_path));
        }
        documents.push(document);
    }

    // Guide order: ascending number prefix, hidden documents last by slug
    documents.sort_by(|a, b| {
        let ka = (a.order.unwrap_or(u32::MAX), a.slug.clone());
        let kb = (b.order.unwrap_or(u32::MAX), b.slug.clone());
        ka.cmp(&kb)
    });

    Ok(Manifest { documents, config })
}

/// Collect all markdown files under the root, in stable path order.
///
/// Skips hidden files and directories, output directories, and the
/// generated index file — that one is this tool's output, not its input.
fn collect_markdown_files(root: &Path, config: &SiteConfig) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Depth 0 is the root itself; only filter what's inside it
            if e.depth() == 0 {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !name.starts_with('.') && name != "dist"
        });

    for entry in walker {
        let entry = entry.map_err(|e| ScanError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name == config.index.file {
            continue;
        }
        if !name.to_lowercase().ends_with(".md") {
            continue;
        }
        files.push(entry.into_path());
    }
    Ok(files)
}

fn load_document(path: &Path, root: &Path) -> Result<Document, ScanError> {
    let content = fs::read_to_string(path)?;
    let (front, body) = frontmatter::split(&content).map_err(|source| {
        ScanError::FrontMatter {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let parsed = parse_entry_name(&stem);

    // Unnumbered files keep their full stem as the slug; numbered files
    // drop the prefix. Number-only stems fall back to the raw stem.
    let slug = if parsed.name.is_empty() {
        stem.clone()
    } else {
        parsed.name.clone()
    };

    let extracted = outline::extract(body);

    let fm_title = front.as_ref().and_then(|f| f.title.as_deref());
    let title = frontmatter::resolve(&[
        fm_title,
        extracted.first_h1.as_deref(),
        Some(&parsed.display_title),
    ])
    .unwrap_or_else(|| slug.clone());

    let source_path = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/");

    Ok(Document {
        slug,
        title,
        source_path,
        order: parsed.number,
        in_guide: parsed.number.is_some(),
        layout: front.as_ref().and_then(|f| f.layout.clone()),
        has_front_matter: front.is_some(),
        body: body.to_string(),
        sections: extracted.sections,
        questions: extracted.questions,
        count_claims: extracted.count_claims,
        declared_prev: extracted.declared_prev,
        declared_next: extracted.declared_next,
    })
}
