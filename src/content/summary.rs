use regex::Regex;
use std::sync::LazyLock;

/// Description length used for page metadata.
pub const DEFAULT_SUMMARY_LENGTH: usize = 160;
const ELLIPSIS: &str = "...";
const MIN_LINE_LENGTH: usize = 50;

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<script\b[^>]*>.*?</script>").expect("Failed to compile script regex")
});

static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<style\b[^>]*>.*?</style>").expect("Failed to compile style regex")
});

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("Failed to compile fence regex"));

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Failed to compile tag regex"));

static MARKDOWN_MARKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[#*`]").expect("Failed to compile markdown marks regex"));

/// Plain-text description for SEO and share previews.
///
/// Keeps only prose-looking lines so JSON fragments, code and headings
/// never surface as a description. A short article (no line over 50
/// characters) falls back to `title`.
pub fn extract_summary(raw_content: &str, title: &str, max_length: usize) -> String {
    let without_scripts = SCRIPT_BLOCK.replace_all(raw_content, "");
    let without_styles = STYLE_BLOCK.replace_all(&without_scripts, "");
    let without_code = CODE_FENCE.replace_all(&without_styles, "");
    let text = TAG.replace_all(&without_code, "");

    let prose = text
        .split('\n')
        .map(str::trim)
        .filter(|line| is_substantive(line))
        .collect::<Vec<_>>()
        .join(" ");

    let source: &str = if prose.is_empty() { title } else { prose.as_str() };
    let mut summary: String = source.chars().take(max_length).collect();
    summary.push_str(ELLIPSIS);
    summary
}

fn is_substantive(line: &str) -> bool {
    line.chars().count() > MIN_LINE_LENGTH
        && !line.starts_with(['{', '[', '"', '#'])
        && !line.contains("{\"")
}

/// Short description for structured data: tags and markdown marks removed,
/// first `DEFAULT_SUMMARY_LENGTH` characters, no line filtering.
pub fn schema_excerpt(raw_content: &str) -> String {
    let text = TAG.replace_all(raw_content, "");
    let text = MARKDOWN_MARKS.replace_all(&text, "");
    text.chars().take(DEFAULT_SUMMARY_LENGTH).collect()
}
