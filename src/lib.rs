//! # Guidebook
//!
//! A minimal static site builder for markdown study guides. Your filesystem
//! is the data source: a directory of markdown documents becomes a guide,
//! documents are ordered by numeric prefix, and question headings become a
//! derived, navigable index.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! Guidebook processes content through three independent stages, each reading
//! or producing a JSON manifest that the next stage consumes:
//!
//! ```text
//! 1. Scan     guide/    →  manifest.json        (filesystem → structured data)
//! 2. Index    manifest  →  QUESTIONS_INDEX.md   (derived table of contents)
//! 3. Render   manifest  →  dist/                (final HTML site)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **Composability**: the index stage is useful on its own — many guides
//!   only ever want the regenerated `QUESTIONS_INDEX.md`, not a site.
//! - **Testability**: index and render are pure functions from manifest to
//!   output, so unit tests can exercise them without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the guide directory, loads documents, produces the manifest |
//! | [`index`] | Stage 2 — builds the derived questions index from the manifest |
//! | [`render`] | Stage 3 — renders the static HTML site from the manifest using Maud |
//! | [`check`] | Consistency findings: broken links, asymmetric prev/next, count drift |
//! | [`config`] | `config.toml` loading, merging, validation, and CSS generation |
//! | [`types`] | Shared types serialized between stages (`Manifest`, `Document`) |
//! | [`naming`] | `NNN-name` filename convention and anchor/link slug parsing |
//! | [`frontmatter`] | Jekyll-style YAML front matter extraction |
//! | [`outline`] | Markdown structure extraction: sections, questions, nav links |
//! | [`output`] | CLI output formatting — information-first display of stage results |
//!
//! # Design Decisions
//!
//! ## Derived, Never Declared
//!
//! Study guides accumulate hand-maintained metadata that drifts: question
//! counts embedded in headings (`"Coroutines & Flows (10 Questions)"`),
//! Previous/Next links at the bottom of each page, a table of contents that
//! claims counts per topic. Guidebook treats all of these as *derived values*:
//! the index recomputes every count from the extracted questions, and rendered
//! navigation is computed from document order. Whatever the source *declares*
//! is only ever validated — `guidebook check` reports the drift instead of
//! republishing it.
//!
//! ## Consumed Markdown Parsing
//!
//! Guidebook does not parse markdown itself. Structure extraction and HTML
//! conversion both go through [pulldown-cmark](https://docs.rs/pulldown-cmark),
//! and front matter through serde_yaml. The crate's own logic is limited to
//! what no off-the-shelf tool provides: the document collection model, the
//! derived index, and the consistency checks.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera. Malformed HTML is a
//! build error, template variables are Rust expressions, interpolation is
//! auto-escaped, and there is no template directory to ship.
//!
//! ## NNN-Prefix Ordering
//!
//! Documents use a numeric filename prefix (`010-`, `020-`, etc.) for
//! explicit ordering, parsed by [`naming::parse_entry_name`]. Files without
//! a prefix are loaded and rendered but hidden from the guide order and
//! navigation — useful for ancillary pages (`SETUP.md`, `README.md`) that
//! should remain reachable by direct URL. Front matter stays minimal
//! (`layout`, `title`); the filesystem is the source of ordering truth.

pub mod check;
pub mod config;
pub mod frontmatter;
pub mod index;
pub mod naming;
pub mod outline;
pub mod output;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
