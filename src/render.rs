//! HTML site generation.
//!
//! Stage 3 of the guidebook build pipeline. Takes the scan manifest and
//! generates the final static HTML site.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): topic list with derived question counts
//! - **Document pages** (`/{slug}.html`): converted markdown with computed
//!   previous/next navigation
//!
//! Hidden (unnumbered) documents are rendered too — reachable by direct
//! URL, absent from the nav, no previous/next.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                   # Topic list
//! ├── activity-lifecycle.html
//! ├── android-components.html
//! ├── coroutines.html
//! └── SETUP.html                   # Hidden document, direct URL only
//! ```
//!
//! ## Navigation
//!
//! Previous/next links are computed from guide order. The hand-written
//! `**Previous:**`/`**Next:**` footer lines in document bodies are dropped
//! before conversion — they are editorial claims, validated by `check`,
//! and rendering them alongside the computed links would duplicate (or
//! contradict) the real navigation.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating
//! with automatic XSS escaping. Markdown conversion is pulldown-cmark with
//! the same extension set the outline extractor uses. The base stylesheet
//! is embedded at compile time; color and layout custom properties are
//! generated from `config.toml`.

use crate::config;
use crate::outline;
use crate::types::{Document, Manifest};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

pub fn render(manifest_path: &Path, output_dir: &Path) -> Result<(), RenderError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;

    let css = format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&manifest.config.colors),
        config::generate_theme_css(&manifest.config.theme),
        CSS_STATIC
    );

    fs::create_dir_all(output_dir)?;

    let index_html = render_index(&manifest, &css);
    fs::write(output_dir.join("index.html"), index_html.into_string())?;

    let guide: Vec<&Document> = manifest.guide_documents().collect();
    for doc in &manifest.documents {
        let position = guide.iter().position(|d| d.slug == doc.slug);
        let (prev, next) = match position {
            Some(i) => (
                i.checked_sub(1).map(|p| guide[p]),
                guide.get(i + 1).copied(),
            ),
            None => (None, None),
        };
        let page = render_document_page(doc, prev, next, &manifest, &css);
        fs::write(
            output_dir.join(format!("{}.html", doc.slug)),
            page.into_string(),
        )?;
    }

    Ok(())
}

/// Convert a markdown body to HTML, dropping declared nav marker lines.
fn markdown_to_html(body: &str) -> String {
    let cleaned: String = body
        .lines()
        .filter(|line| !outline::is_nav_marker(line))
        .collect::<Vec<_>>()
        .join("\n");
    let parser = Parser::new_ext(&cleaned, outline::markdown_options());
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the site header with breadcrumb and navigation
fn site_header(breadcrumb: Markup, nav: Markup) -> Markup {
    html! {
        header.site-header {
            nav.breadcrumb {
                (breadcrumb)
            }
            nav.site-nav {
                (nav)
            }
        }
    }
}

/// Renders the document navigation list (guide documents only, in order)
pub fn render_nav(manifest: &Manifest, current_slug: &str) -> Markup {
    html! {
        ul {
            @for doc in manifest.guide_documents() {
                @let is_current = doc.slug == current_slug;
                li class=[is_current.then_some("current")] {
                    a href={ (doc.slug) ".html" } { (doc.title) }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the index/home page with the topic list
fn render_index(manifest: &Manifest, css: &str) -> Markup {
    let nav = render_nav(manifest, "");
    let site_title = &manifest.config.site.title;

    let breadcrumb = html! {
        a href="index.html" { (site_title) }
    };

    let content = html! {
        (site_header(breadcrumb, nav))
        main.index-page {
            h1 { (site_title) }
            @if let Some(desc) = &manifest.config.site.description {
                p.site-description { (desc) }
            }
            ol.topic-list {
                @for doc in manifest.guide_documents() {
                    li {
                        a href={ (doc.slug) ".html" } { (doc.title) }
                        span.question-count {
                            " — " (doc.questions.len())
                            @if doc.questions.len() == 1 { " question" } @else { " questions" }
                        }
                    }
                }
            }
        }
    };

    base_document(site_title, css, content)
}

/// Renders a single document page
fn render_document_page(
    doc: &Document,
    prev: Option<&Document>,
    next: Option<&Document>,
    manifest: &Manifest,
    css: &str,
) -> Markup {
    let nav = render_nav(manifest, &doc.slug);
    let site_title = &manifest.config.site.title;
    let body_html = markdown_to_html(&doc.body);

    let breadcrumb = html! {
        a href="index.html" { (site_title) }
        " › "
        (doc.title)
    };

    let content = html! {
        (site_header(breadcrumb, nav))
        main.document-page {
            article.document-content {
                (PreEscaped(body_html))
            }
            @if prev.is_some() || next.is_some() {
                nav.page-nav {
                    @if let Some(p) = prev {
                        a.page-nav-prev href={ (p.slug) ".html" } { "← " (p.title) }
                    }
                    @if let Some(n) = next {
                        a.page-nav-next href={ (n.slug) ".html" } { (n.title) " →" }
                    }
                }
            }
        }
    };

    let page_title = format!("{} - {}", doc.title, site_title);
    base_document(&page_title, css, content)
}

// ============================================================================
// Tests
// ============================================================================
