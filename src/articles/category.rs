use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]+").expect("Failed to compile token regex"));

static HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("Failed to compile hyphen regex"));

/// Label shown when an article has no category.
pub const FALLBACK_CATEGORY_LABEL: &str = "Artikel";

/// Turn a free-text category label into its URL token, e.g.
/// "Kipas Angin" -> "kipas-angin".
pub fn normalize_category(name: &str) -> String {
    let lowered = name.to_lowercase();
    let hyphenated = WHITESPACE_RUN.replace_all(&lowered, "-");
    let stripped = DISALLOWED.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

/// Readable name for a token nobody has labelled, e.g.
/// "rumah-tangga" -> "Rumah Tangga".
pub fn display_name_from_token(token: &str) -> String {
    token
        .split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Label for an article's category badge.
pub fn category_label(category: &str) -> &str {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        FALLBACK_CATEGORY_LABEL
    } else {
        trimmed
    }
}
