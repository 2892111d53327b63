use std::fs;

use crate::content::{
    DEFAULT_SUMMARY_LENGTH, PRICE_CAPTION, extract_summary, render_content, schema_excerpt,
};
use crate::entities::{Article, ArticleRecord};

fn fixture_article() -> Article {
    let content = fs::read_to_string("src/content/tests/fixtures/review.md")
        .expect("Failed to read test fixture");

    Article::from(ArticleRecord {
        id: "doc-42".to_string(),
        slug: Some("kipas-angin-terbaik".to_string()),
        title: Some("5 Kipas Angin Terbaik 2026 untuk Kamar Tidur".to_string()),
        category: Some("Elektronik".to_string()),
        content: Some(content),
        status: Some("published".to_string()),
        ..Default::default()
    })
}

#[test]
fn test_render_review_fixture() {
    let html = render_content(&fixture_article().content);

    // duplicate title gone, section headings kept
    assert!(!html.contains("5 Kipas Angin Terbaik 2026"));
    assert!(html.contains("<h2>Perbandingan Singkat</h2>"));

    // script/JSON-LD and event handlers never reach the page
    assert!(!html.contains("<script"));
    assert!(!html.contains("ItemList"));
    assert!(!html.contains("onclick"));
    assert!(!html.contains("<div"));

    // both the markdown and the raw HTML table get a caption
    assert_eq!(html.matches("</table>").count(), 2);
    assert_eq!(html.matches(PRICE_CAPTION).count(), 2);

    // cells of both tables are labelled for the card layout
    assert!(html.contains("<td data-label=\"Harga\">Rp250.000</td>"));
    assert!(html.contains("<td data-label=\"Fitur\">Timer</td>"));
    assert!(html.contains("<td data-label=\"Miyako\">Ya</td>"));

    assert!(html.contains("href=\"https://shopee.co.id/miyako\""));
    assert!(html.contains("<pre><code>"));
}

#[test]
fn test_fixture_description_skips_script_and_code() {
    let article = fixture_article();
    let description = extract_summary(&article.content, &article.title, DEFAULT_SUMMARY_LENGTH);

    assert!(
        description
            .starts_with("Memilih kipas angin untuk kamar tidur tidak bisa asal murah")
    );
    assert!(description.ends_with("..."));
    assert_eq!(description.chars().count(), 163);
    assert!(!description.contains("schema.org"));
    assert!(!description.contains("noise_db"));
}

#[test]
fn test_render_kipas_angin_scenario() {
    let html = render_content("# Kipas Angin Terbaik\n\nIni adalah **ulasan** lengkap...");
    assert_eq!(html, "<p>Ini adalah <strong>ulasan</strong> lengkap...</p>\n");
}

#[test]
fn test_render_empty_content() {
    assert_eq!(render_content(""), "");
    assert_eq!(render_content("  \n\n "), "");
}

#[test]
fn test_render_heading_only_content() {
    assert_eq!(render_content("# Judul Saja"), "");
}

#[test]
fn test_caption_count_matches_tables() {
    let table = "| A | B |\n|---|---|\n| 1 | 2 |\n";
    for count in 0..4 {
        let content = vec![table; count].join("\nParagraf pemisah.\n\n");
        let html = render_content(&content);
        assert_eq!(html.matches("</table>").count(), count);
        assert_eq!(html.matches(PRICE_CAPTION).count(), count);
    }
}

#[test]
fn test_raw_html_table_is_labelled() {
    let html = render_content(
        "<table>\n<thead><tr><th>Fitur</th><th>Miyako</th></tr></thead>\n\
         <tbody><tr><td>Timer</td><td>Ya</td></tr></tbody>\n</table>\n",
    );
    assert!(html.contains("<td data-label=\"Fitur\">Timer</td>"));
    assert!(html.contains("<td data-label=\"Miyako\">Ya</td>"));
    assert_eq!(html.matches(PRICE_CAPTION).count(), 1);
}

#[test]
fn test_indented_heading_survives_as_code() {
    let html = render_content("    # bukan judul, kode\n\nIsi.");
    assert!(html.contains("<pre><code># bukan judul, kode\n</code></pre>"));
    assert!(html.contains("<p>Isi.</p>"));
}

#[test]
fn test_html_heading_is_stripped() {
    let html = render_content("<h1>Judul</h1>\n\nIsi artikel.");
    assert_eq!(html, "<p>Isi artikel.</p>\n");
}

#[test]
fn test_empty_article_renders_neutral() {
    let article = Article::from(ArticleRecord {
        id: "kosong".to_string(),
        title: Some("Artikel Kosong".to_string()),
        status: Some("published".to_string()),
        ..Default::default()
    });

    assert_eq!(render_content(&article.content), "");
    assert_eq!(
        extract_summary(&article.content, &article.title, DEFAULT_SUMMARY_LENGTH),
        "Artikel Kosong..."
    );
    assert_eq!(schema_excerpt(&article.content), "");
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_render_never_panics(content in ".*") {
            let html = render_content(&content);
            prop_assert!(!html.contains("<script"));
        }
    }
}
