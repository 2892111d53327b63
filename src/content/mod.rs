pub mod cleaner;
pub mod markdown;
pub mod summary;
pub mod tables;

#[cfg(test)]
mod tests;

pub use cleaner::PRICE_CAPTION;
pub use summary::{DEFAULT_SUMMARY_LENGTH, extract_summary, schema_excerpt};

/// Raw article body to sanitized display markup.
pub fn render_content(raw_content: &str) -> String {
    if raw_content.trim().is_empty() {
        return String::new();
    }

    // 1. The page renders the title itself
    let body = markdown::strip_leading_heading(raw_content);

    // 2. Markdown (plus embedded HTML) to HTML
    let html = markdown::markdown_to_html(&body);

    // 3. Allow-list sanitizing
    let clean = cleaner::sanitize_html(&html);

    // 4. Body cells labelled with their column header, every table
    let labelled = tables::label_table_cells(&clean);

    // 5. Static price note on every table
    cleaner::inject_price_captions(&labelled)
}
