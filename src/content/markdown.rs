use pulldown_cmark::{Options, Parser, html};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static LEADING_MARKDOWN_H1: LazyLock<Regex> = LazyLock::new(|| {
    // blank lines, then at most three spaces: deeper indents are code blocks
    Regex::new(r"^(?:[ \t]*\r?\n)*[ ]{0,3}#[ \t]+[^\n]*(?:\n|$)")
        .expect("Failed to compile heading regex")
});

static LEADING_HTML_H1: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^(?:[ \t]*\r?\n)*[ ]{0,3}<h1\b[^>]*>.*?</h1>\s*")
        .expect("Failed to compile h1 regex")
});

/// Drop one leading top-level heading (`# Title` or `<h1>Title</h1>`).
/// The page already shows the title, so the body must not repeat it.
pub fn strip_leading_heading(content: &str) -> Cow<'_, str> {
    if LEADING_MARKDOWN_H1.is_match(content) {
        return LEADING_MARKDOWN_H1.replace(content, "");
    }
    LEADING_HTML_H1.replace(content, "")
}

/// CommonMark + tables + strikethrough to HTML. Raw HTML passes through
/// untouched; sanitizing is the caller's job.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
    html::push_html(&mut out, parser);
    out
}
