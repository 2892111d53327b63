#![no_main]

use libfuzzer_sys::fuzz_target;

use bantupilih::articles::normalize_category;
use bantupilih::content::{PRICE_CAPTION, extract_summary, render_content};

fuzz_target!(|data: &[u8]| {
    // Stored documents are arbitrary text, handle invalid UTF-8 gracefully
    let raw = String::from_utf8_lossy(data);

    // Rendering should never panic regardless of input
    let html = render_content(&raw);
    assert!(!html.contains("<script"));
    assert_eq!(
        html.matches(PRICE_CAPTION).count(),
        html.matches("</table>").count()
    );

    let summary = extract_summary(&raw, "Judul", 160);
    assert!(summary.chars().count() <= 163);

    let token = normalize_category(&raw);
    assert_eq!(normalize_category(&token), token);
});
