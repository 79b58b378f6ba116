//! Feedback markup rendered to sanitized preview HTML.

use std::collections::{HashMap, HashSet};

use services::EditorMode;

/// Renders feedback markup to sanitized HTML.
///
/// Markdown goes straight through the CommonMark renderer. The
/// reStructuredText dialect the edit panel uses shares its inline forms
/// with Markdown except for literals, which are mapped over first.
#[must_use]
pub fn markup_to_html(input: &str, mode: EditorMode) -> String {
    let source = match mode {
        EditorMode::Markdown => input.to_owned(),
        EditorMode::Rst => rst_inline_to_markdown(input),
    };

    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(&source, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

/// Strips HTML down to the allow-listed inline and block tags.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "code", "pre", "blockquote", "ul",
        "ol", "li", "a",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

/// Maps reStructuredText inline literals (``double backticks``) onto
/// Markdown code spans. Emphasis and strong agree between the dialects
/// and pass through untouched.
#[must_use]
pub fn rst_inline_to_markdown(input: &str) -> String {
    input.replace("``", "`")
}

/// Unwraps the single outer paragraph of a one-line preview, leaving
/// multi-block previews unchanged.
#[must_use]
pub fn unwrap_paragraph(html: &str) -> String {
    let trimmed = html.trim();
    if let Some(inner) = trimmed
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
        && !inner.contains("<p>")
    {
        return inner.to_owned();
    }
    trimmed.to_owned()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_emphasis_renders() {
        let html = markup_to_html("**bold** and *soft*", EditorMode::Markdown);
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>soft</em>"));
    }

    #[test]
    fn rst_literals_become_code_spans() {
        let html = markup_to_html("use ``iter`` here", EditorMode::Rst);
        assert!(html.contains("<code>iter</code>"));
    }

    #[test]
    fn rst_emphasis_passes_through() {
        let html = markup_to_html("*good* answer", EditorMode::Rst);
        assert!(html.contains("<em>good</em>"));
    }

    #[test]
    fn sanitizer_drops_scriptable_content() {
        let html = markup_to_html("[x](javascript:alert(1))", EditorMode::Markdown);
        assert!(!html.contains("javascript:"));

        let cleaned = sanitize_html("<p>ok</p><script>alert(1)</script>");
        assert_eq!(cleaned, "<p>ok</p>");
    }

    #[test]
    fn unwrap_paragraph_handles_single_and_multi_block() {
        assert_eq!(unwrap_paragraph("<p>one line</p>\n"), "one line");
        let multi = "<p>a</p>\n<p>b</p>";
        assert_eq!(unwrap_paragraph(multi), multi);
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(markup_to_html("", EditorMode::Rst), "");
    }
}
