use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static TABLE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/?)(table|thead|tbody|tfoot|tr|th|td)\b[^>]*>")
        .expect("Failed to compile table tag regex")
});

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Failed to compile tag regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Head,
    Body,
    Foot,
}

#[derive(Debug)]
struct TableState {
    headers: Vec<String>,
    section: Section,
    column: usize,
    /// Byte offset where the open `<th>` content starts.
    header_start: Option<usize>,
}

impl TableState {
    fn new() -> Self {
        Self {
            headers: Vec::new(),
            section: Section::None,
            column: 0,
            header_start: None,
        }
    }
}

/// Gives every body cell a `data-label` holding the text of its column's
/// `thead th`, so narrow screens can lay rows out as cards.
///
/// Expects serializer-normalized markup (lowercase tags, text already
/// escaped), i.e. the output of the sanitizer. Tables without a header
/// row are left alone, as are cells past the last header.
pub fn label_table_cells(html: &str) -> Cow<'_, str> {
    if !html.contains("<table") {
        return Cow::Borrowed(html);
    }

    let mut out = String::with_capacity(html.len() + html.len() / 4);
    let mut tables: Vec<TableState> = Vec::new();
    let mut last = 0;

    for caps in TABLE_TAG.captures_iter(html) {
        let Some(tag) = caps.get(0) else { continue };
        let closing = !caps[1].is_empty();
        let name = &caps[2];

        out.push_str(&html[last..tag.start()]);
        last = tag.end();

        if name == "table" {
            if closing {
                tables.pop();
            } else {
                tables.push(TableState::new());
            }
            out.push_str(tag.as_str());
            continue;
        }

        let Some(table) = tables.last_mut() else {
            out.push_str(tag.as_str());
            continue;
        };

        match (name, closing) {
            ("thead", false) => table.section = Section::Head,
            ("tbody", false) => table.section = Section::Body,
            ("tfoot", false) => table.section = Section::Foot,
            ("thead" | "tbody" | "tfoot", true) => table.section = Section::None,
            ("tr", false) => table.column = 0,
            ("th", false) if table.section == Section::Head => {
                table.header_start = Some(tag.end());
            }
            ("th", true) if table.section == Section::Head => {
                if let Some(start) = table.header_start.take() {
                    let text = TAG.replace_all(&html[start..tag.start()], "");
                    table.headers.push(text.trim().to_string());
                }
            }
            ("td", false) if table.section == Section::Body => {
                let column = table.column;
                table.column += 1;
                let label = table
                    .headers
                    .get(column)
                    .filter(|label| !label.is_empty());
                if let Some(label) = label {
                    out.push_str("<td data-label=\"");
                    out.push_str(&label.replace('"', "&quot;"));
                    out.push_str("\">");
                    continue;
                }
            }
            _ => {}
        }
        out.push_str(tag.as_str());
    }

    out.push_str(&html[last..]);
    Cow::Owned(out)
}
