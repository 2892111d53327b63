//! Sitemap generation.
//!
//! Lists the home page and every published article for search engine
//! indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/artikel/kipas-angin-terbaik</loc>
//!     <lastmod>2026-01-01T00:00:00Z</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.8</priority>
//!   </url>
//! </urlset>
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use std::borrow::Cow;

use crate::entities::Article;
use crate::seo::site::SiteInfo;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
}

impl ChangeFrequency {
    fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub loc: String,
    pub lastmod: DateTime<Utc>,
    pub changefreq: ChangeFrequency,
    pub priority: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sitemap {
    pub urls: Vec<UrlEntry>,
}

impl Sitemap {
    /// Home entry first, then one entry per published article in the
    /// given order. Articles without any timestamp take `now` as `lastmod`.
    pub fn build(site: &SiteInfo, articles: &[Article], now: DateTime<Utc>) -> Self {
        let home = UrlEntry {
            loc: site.absolute("/"),
            lastmod: now,
            changefreq: ChangeFrequency::Daily,
            priority: 1.0,
        };

        let urls = std::iter::once(home)
            .chain(
                articles
                    .iter()
                    .filter(|article| article.is_published())
                    .map(|article| UrlEntry {
                        loc: site.article_url(article.public_id()),
                        lastmod: article.last_modified().unwrap_or(now),
                        changefreq: ChangeFrequency::Weekly,
                        priority: 0.8,
                    }),
            )
            .collect();

        Self { urls }
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 160);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            xml.push_str("    <lastmod>");
            xml.push_str(&entry.lastmod.to_rfc3339_opts(SecondsFormat::Secs, true));
            xml.push_str("</lastmod>\n");
            xml.push_str("    <changefreq>");
            xml.push_str(entry.changefreq.as_str());
            xml.push_str("</changefreq>\n");
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
