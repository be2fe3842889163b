//! Markdown structure extraction.
//!
//! Pulls the navigable structure out of a document body without transforming
//! the body itself: headings (sections), question entries, declared question
//! counts, and declared Previous/Next links. Parsing is delegated to
//! pulldown-cmark — this module only folds its event stream.
//!
//! ## Question sections
//!
//! A question section is an H2 whose heading either contains the word
//! "question" or carries a `(N Questions)` count suffix:
//!
//! ```text
//! ## Interview Questions & Answers
//!
//! ### Q1: What is an Activity?
//! An Activity represents a single screen...
//!
//! ### Q2: Describe the lifecycle.
//! ...
//! ```
//!
//! Each H3 under a question section becomes a [`QuestionEntry`]: the heading
//! text (with any `Q<n>:` marker stripped — numbering is derived from
//! position downstream), the anchor of the original heading, and a
//! plain-text answer excerpt running to the next question. Documents with no
//! H2 structure at all fall back to the H1: if it qualifies, H3s collect at
//! document level.
//!
//! ## Count claims
//!
//! Every `(N Questions)` suffix found on an H1 or H2 becomes a
//! [`CountClaim`] paired with the number of entries actually extracted in
//! that heading's scope (whole document for H1, section for H2). The claims
//! are validated by `check`; generated output never repeats them.

use crate::naming::anchor_slug;
use crate::types::{CountClaim, NavLink, QuestionEntry, Section};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Extracted document structure.
#[derive(Debug, Default)]
pub struct Outline {
    pub sections: Vec<Section>,
    pub questions: Vec<QuestionEntry>,
    pub count_claims: Vec<CountClaim>,
    /// First `# heading` text, count suffix stripped. Title fallback.
    pub first_h1: Option<String>,
    pub declared_prev: Option<NavLink>,
    pub declared_next: Option<NavLink>,
}

/// Markdown extensions the published guides use.
pub fn markdown_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES
}

pub fn extract(body: &str) -> Outline {
    let mut outline = Outline::default();

    // Heading currently being read
    let mut heading_level: Option<u8> = None;
    let mut heading_text = String::new();

    // Question currently accumulating its answer
    let mut open_question: Option<(String, String)> = None; // (title, anchor)
    let mut answer = String::new();

    // Scope tracking: does the active heading scope collect questions?
    let mut h1_collects = false;
    let mut in_h2 = false;
    let mut h2_collects = false;
    let mut active_h2_claim: Option<usize> = None;
    let mut h1_claim: Option<usize> = None;
    let mut doc_total = 0usize;

    let parser = Parser::new_ext(body, markdown_options());
    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                let level = level as u8;
                if level <= 3 {
                    finish_question(&mut open_question, &mut answer, &mut outline.questions);
                }
                heading_level = Some(level);
                heading_text.clear();
            }
            Event::End(TagEnd::Heading(level)) => {
                let level = level as u8;
                let text = heading_text.trim().to_string();
                outline.sections.push(Section {
                    title: text.clone(),
                    level,
                    anchor: anchor_slug(&text),
                });

                let (cleaned, declared) = match parse_count_suffix(&text) {
                    Some((cleaned, n)) => (cleaned, Some(n)),
                    None => (text.clone(), None),
                };
                let mentions_questions = cleaned.to_lowercase().contains("question");

                match level {
                    1 => {
                        if outline.first_h1.is_none() {
                            outline.first_h1 = Some(cleaned.clone());
                        }
                        in_h2 = false;
                        active_h2_claim = None;
                        h1_collects = declared.is_some() || mentions_questions;
                        if let Some(n) = declared
                            && h1_claim.is_none()
                        {
                            h1_claim = Some(outline.count_claims.len());
                            outline.count_claims.push(CountClaim {
                                heading: cleaned,
                                declared: n,
                                actual: 0,
                            });
                        }
                    }
                    2 => {
                        in_h2 = true;
                        h2_collects = declared.is_some() || mentions_questions;
                        active_h2_claim = declared.map(|n| {
                            outline.count_claims.push(CountClaim {
                                heading: cleaned,
                                declared: n,
                                actual: 0,
                            });
                            outline.count_claims.len() - 1
                        });
                    }
                    3 => {
                        let collects = if in_h2 { h2_collects } else { h1_collects };
                        if collects {
                            open_question =
                                Some((strip_question_marker(&text), anchor_slug(&text)));
                            answer.clear();
                            doc_total += 1;
                            if let Some(i) = active_h2_claim {
                                outline.count_claims[i].actual += 1;
                            }
                        }
                    }
                    _ => {}
                }
                heading_level = None;
            }
            Event::Text(t) | Event::Code(t) => {
                if heading_level.is_some() {
                    heading_text.push_str(&t);
                } else if open_question.is_some() {
                    answer.push_str(&t);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if heading_level.is_some() {
                    heading_text.push(' ');
                } else if open_question.is_some() {
                    answer.push(' ');
                }
            }
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Item)
            | Event::End(TagEnd::CodeBlock) => {
                if open_question.is_some() {
                    answer.push(' ');
                }
            }
            // A thematic break ends the last answer — the source convention
            // separates the Previous/Next footer from content with `---`.
            Event::Rule => {
                finish_question(&mut open_question, &mut answer, &mut outline.questions);
            }
            _ => {}
        }
    }
    finish_question(&mut open_question, &mut answer, &mut outline.questions);

    if let Some(i) = h1_claim {
        outline.count_claims[i].actual = doc_total;
    }

    let (prev, next) = parse_nav_links(body);
    outline.declared_prev = prev;
    outline.declared_next = next;

    outline
}

fn finish_question(
    open: &mut Option<(String, String)>,
    answer: &mut String,
    questions: &mut Vec<QuestionEntry>,
) {
    if let Some((title, anchor)) = open.take() {
        questions.push(QuestionEntry {
            title,
            anchor,
            answer: answer.split_whitespace().collect::<Vec<_>>().join(" "),
        });
        answer.clear();
    }
}

/// Parse a `(N Questions)` suffix from a heading.
///
/// `"Coroutines & Flows (10 Questions)"` → `Some(("Coroutines & Flows", 10))`.
/// Case-insensitive on the word, singular accepted. Returns `None` when the
/// heading carries no such suffix.
pub fn parse_count_suffix(heading: &str) -> Option<(String, usize)> {
    let trimmed = heading.trim_end();
    let rest = trimmed.strip_suffix(')')?;
    let open = rest.rfind('(')?;
    let inner = &rest[open + 1..];
    let mut words = inner.split_whitespace();
    let count: usize = words.next()?.parse().ok()?;
    let word = words.next()?;
    if words.next().is_some() {
        return None;
    }
    if !word.eq_ignore_ascii_case("questions") && !word.eq_ignore_ascii_case("question") {
        return None;
    }
    Some((trimmed[..open].trim_end().to_string(), count))
}

/// Strip a `Q<n>:` / `Q<n>.` / `Q<n>)` marker from a question heading.
///
/// Question numbering in output is derived from position; the marker is a
/// source convention, not data.
pub fn strip_question_marker(heading: &str) -> String {
    let trimmed = heading.trim();
    let stripped = trimmed
        .strip_prefix('Q')
        .or_else(|| trimmed.strip_prefix('q'));
    if let Some(rest) = stripped {
        let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits > 0 {
            let after = &rest[digits..];
            if let Some(text) = after
                .strip_prefix(':')
                .or_else(|| after.strip_prefix('.'))
                .or_else(|| after.strip_prefix(')'))
            {
                let text = text.trim_start();
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }
    trimmed.to_string()
}

// ============================================================================
// Declared navigation links
// ============================================================================

/// Find `Previous:`/`Next:` marker lines carrying a markdown link.
///
/// Accepts the decorations the source convention uses — `**Next:**`,
/// `> Next:`, list bullets, emoji arrows — by skipping any leading
/// non-alphabetic characters. Only the first occurrence of each direction
/// counts.
pub fn parse_nav_links(body: &str) -> (Option<NavLink>, Option<NavLink>) {
    let mut prev = None;
    let mut next = None;
    for line in body.lines() {
        match parse_nav_line(line) {
            Some((true, link)) => {
                prev.get_or_insert(link);
            }
            Some((false, link)) => {
                next.get_or_insert(link);
            }
            None => {}
        }
    }
    (prev, next)
}

/// Whether a line is a Previous/Next marker carrying a link.
///
/// The renderer drops these lines: rendered navigation is computed from
/// document order, so the declared footer would only duplicate it.
pub fn is_nav_marker(line: &str) -> bool {
    parse_nav_line(line).is_some()
}

/// Parse one line as a nav marker. `true` means Previous.
fn parse_nav_line(line: &str) -> Option<(bool, NavLink)> {
    let s = line.trim_start_matches(|c: char| !c.is_alphabetic());
    let (is_prev, keyword_len) = if starts_with_ignore_case(s, "previous") {
        (true, "previous".len())
    } else if starts_with_ignore_case(s, "next") {
        (false, "next".len())
    } else {
        return None;
    };
    let link = parse_marker_link(&s[keyword_len..])?;
    Some((is_prev, link))
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Parse `: [label](target)` after a Previous/Next keyword.
///
/// Between the keyword and the colon only emphasis markers and whitespace
/// are allowed — this keeps prose like "Next steps: see the docs" from
/// matching.
fn parse_marker_link(after_keyword: &str) -> Option<NavLink> {
    let colon = after_keyword.find(':')?;
    if !after_keyword[..colon]
        .chars()
        .all(|c| c == '*' || c == '_' || c.is_whitespace())
    {
        return None;
    }
    let rest = &after_keyword[colon + 1..];
    let bracket = rest.find('[')?;
    let rest = &rest[bracket..];
    let close = rest.find("](")?;
    let label = rest[1..close].trim().to_string();
    let tail = &rest[close + 2..];
    let paren = tail.find(')')?;
    let target = tail[..paren].trim().to_string();
    if target.is_empty() {
        return None;
    }
    Some(NavLink { label, target })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
# Activity Lifecycle (3 Questions)

Some intro prose.

## Overview

Not a question section.

### Detail heading

Body under a non-question section.

## Interview Questions & Answers

### Q1: What is an Activity?

An Activity represents a single screen with a user interface.

### Q2: Describe the lifecycle callbacks.

`onCreate`, `onStart`, `onResume` and friends.

### Q3: What happens on rotation?

The activity is destroyed and recreated.

---

**Previous:** [Setup](./000-setup.md)
**Next:** [Android Components](020-android-components.md)
";

    #[test]
    fn extracts_all_sections() {
        let outline = extract(DOC);
        let titles: Vec<&str> = outline.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Activity Lifecycle (3 Questions)",
                "Overview",
                "Detail heading",
                "Interview Questions & Answers",
                "Q1: What is an Activity?",
                "Q2: Describe the lifecycle callbacks.",
                "Q3: What happens on rotation?",
            ]
        );
        assert_eq!(outline.sections[0].level, 1);
        assert_eq!(outline.sections[3].level, 2);
    }

    #[test]
    fn questions_only_from_question_sections() {
        let outline = extract(DOC);
        assert_eq!(outline.questions.len(), 3);
        // "Detail heading" under "Overview" is not a question
        assert_eq!(outline.questions[0].title, "What is an Activity?");
    }

    #[test]
    fn question_marker_stripped_but_anchor_keeps_it() {
        let outline = extract(DOC);
        let q = &outline.questions[0];
        assert_eq!(q.title, "What is an Activity?");
        assert_eq!(q.anchor, "q1-what-is-an-activity");
    }

    #[test]
    fn answers_run_to_next_question() {
        let outline = extract(DOC);
        assert!(outline.questions[0].answer.contains("single screen"));
        assert!(!outline.questions[0].answer.contains("onCreate"));
        assert!(outline.questions[1].answer.contains("onCreate"));
    }

    #[test]
    fn nav_footer_does_not_leak_into_last_answer() {
        let outline = extract(DOC);
        assert!(!outline.questions[2].answer.contains("Previous"));
        assert!(!outline.questions[2].answer.contains("Android Components"));
    }

    #[test]
    fn h1_count_claim_covers_whole_document() {
        let outline = extract(DOC);
        let claim = &outline.count_claims[0];
        assert_eq!(claim.heading, "Activity Lifecycle");
        assert_eq!(claim.declared, 3);
        assert_eq!(claim.actual, 3);
    }

    #[test]
    fn first_h1_has_suffix_stripped() {
        let outline = extract(DOC);
        assert_eq!(outline.first_h1.as_deref(), Some("Activity Lifecycle"));
    }

    #[test]
    fn nav_links_extracted() {
        let outline = extract(DOC);
        let prev = outline.declared_prev.unwrap();
        assert_eq!(prev.label, "Setup");
        assert_eq!(prev.target, "./000-setup.md");
        let next = outline.declared_next.unwrap();
        assert_eq!(next.target, "020-android-components.md");
    }

    #[test]
    fn h2_count_claim_scoped_to_section() {
        let doc = "\
# Guide

## Coroutines (2 Questions)

### Q1: What is a coroutine?
A.

### Q2: What is a Flow?
B.

### Q3: Uncounted extra.
C.
";
        let outline = extract(doc);
        assert_eq!(outline.count_claims.len(), 1);
        assert_eq!(outline.count_claims[0].heading, "Coroutines");
        assert_eq!(outline.count_claims[0].declared, 2);
        assert_eq!(outline.count_claims[0].actual, 3);
    }

    #[test]
    fn count_suffix_alone_marks_question_section() {
        // Title has no "question" keyword; the count suffix qualifies it
        let doc = "## Topics (1 Questions)\n\n### Q1: Only one?\nYes.\n";
        let outline = extract(doc);
        assert_eq!(outline.questions.len(), 1);
    }

    #[test]
    fn document_without_h2_collects_under_qualifying_h1() {
        let doc = "# FAQ Questions\n\n### Q1: Works?\nIt does.\n";
        let outline = extract(doc);
        assert_eq!(outline.questions.len(), 1);
    }

    #[test]
    fn document_without_questions_is_empty() {
        let doc = "# Setup\n\nInstall things.\n\n## Steps\n\n### First\nDo it.\n";
        let outline = extract(doc);
        assert!(outline.questions.is_empty());
        assert!(outline.count_claims.is_empty());
    }

    // =========================================================================
    // parse_count_suffix tests
    // =========================================================================

    #[test]
    fn count_suffix_plural() {
        assert_eq!(
            parse_count_suffix("Coroutines & Flows (10 Questions)"),
            Some(("Coroutines & Flows".to_string(), 10))
        );
    }

    #[test]
    fn count_suffix_singular_and_lowercase() {
        assert_eq!(
            parse_count_suffix("Edge Cases (1 question)"),
            Some(("Edge Cases".to_string(), 1))
        );
    }

    #[test]
    fn count_suffix_absent() {
        assert_eq!(parse_count_suffix("Just a Heading"), None);
        assert_eq!(parse_count_suffix("Parens (but prose)"), None);
        assert_eq!(parse_count_suffix("Wrong (10 Answers)"), None);
    }

    #[test]
    fn count_suffix_must_be_trailing() {
        assert_eq!(parse_count_suffix("(3 Questions) up front"), None);
    }

    // =========================================================================
    // strip_question_marker tests
    // =========================================================================

    #[test]
    fn marker_colon_dot_paren() {
        assert_eq!(strip_question_marker("Q1: What?"), "What?");
        assert_eq!(strip_question_marker("Q12. What?"), "What?");
        assert_eq!(strip_question_marker("q3) What?"), "What?");
    }

    #[test]
    fn marker_absent_returns_input() {
        assert_eq!(strip_question_marker("What is an Activity?"), "What is an Activity?");
        assert_eq!(strip_question_marker("Quality gates"), "Quality gates");
    }

    #[test]
    fn marker_without_text_is_kept() {
        assert_eq!(strip_question_marker("Q1:"), "Q1:");
    }

    // =========================================================================
    // parse_nav_links tests
    // =========================================================================

    #[test]
    fn nav_bold_markers() {
        let (prev, next) =
            parse_nav_links("**Previous:** [A](a.md)\n**Next:** [B](b.md)\n");
        assert_eq!(prev.unwrap().target, "a.md");
        assert_eq!(next.unwrap().target, "b.md");
    }

    #[test]
    fn nav_plain_and_blockquote_markers() {
        let (prev, next) = parse_nav_links("> Previous: [A](a.md)\nNext: [B](b.md)\n");
        assert_eq!(prev.unwrap().label, "A");
        assert_eq!(next.unwrap().label, "B");
    }

    #[test]
    fn nav_prose_does_not_match() {
        let (prev, next) = parse_nav_links("Next steps: see [the docs](d.md)\n");
        assert!(prev.is_none());
        assert!(next.is_none());
    }

    #[test]
    fn nav_line_without_link_ignored() {
        let (_, next) = parse_nav_links("Next: coming soon\n");
        assert!(next.is_none());
    }

    #[test]
    fn nav_first_occurrence_wins() {
        let (_, next) = parse_nav_links("Next: [B](b.md)\nNext: [C](c.md)\n");
        assert_eq!(next.unwrap().target, "b.md");
    }
}
