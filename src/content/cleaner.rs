use ammonia::Builder;
use std::collections::HashSet;

/// Tags allowed in rendered article bodies.
const ALLOWED_TAGS: &[&str] = &[
    "p",
    "h2",
    "h3",
    "h4",
    "ul",
    "ol",
    "li",
    "table",
    "thead",
    "tbody",
    "tr",
    "td",
    "th",
    "caption",
    "img",
    "a",
    "strong",
    "em",
    "code",
    "pre",
    "blockquote",
    // emitted by markdown for hard breaks, rules and strikethrough
    "br",
    "hr",
    "del",
];

const CELL_ATTRIBUTES: &[&str] = &["data-label"];

/// Static note appended to every table: affiliate prices drift.
pub const PRICE_CAPTION: &str = "<caption class=\"price-note\">*Harga yang tercantum adalah harga saat artikel ditulis dan dapat berubah sewaktu-waktu.</caption>";

const TABLE_CLOSE: &str = "</table>";

/// Reduce rendered markup to the allow-listed tags. Script and style
/// elements disappear with their content; other disallowed tags are
/// unwrapped to their text.
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = ALLOWED_TAGS.iter().copied().collect();

    Builder::default()
        .tags(tags)
        .add_tag_attributes("td", CELL_ATTRIBUTES.iter().copied())
        .clean(html)
        .to_string()
}

/// Put the price caption in front of every closing table tag.
pub fn inject_price_captions(html: &str) -> String {
    if !html.contains(TABLE_CLOSE) {
        return html.to_string();
    }
    html.replace(TABLE_CLOSE, &format!("{PRICE_CAPTION}{TABLE_CLOSE}"))
}
