use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::Url;

use crate::config::Config;

/// Characters escaped when an identifier is used as one path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub const SITE_LOCALE: &str = "id_ID";
pub const SITE_TAGLINE: &str = "Rekomendasi Produk Terbaik";
pub const SITE_DESCRIPTION: &str = "Temukan rekomendasi produk terbaik berdasarkan riset independen. Review jujur, perbandingan harga, dan spesifikasi lengkap untuk membantu Anda memilih produk yang tepat.";

/// Public identity of the site, used to build absolute URLs and titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    pub name: String,
    pub base_url: Url,
}

impl SiteInfo {
    pub fn new(name: impl Into<String>, base_url: Url) -> Self {
        Self {
            name: name.into(),
            base_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.site_name(), config.site_url().clone())
    }

    /// Base URL without a trailing slash.
    pub fn root(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Title used when a page supplies none.
    pub fn default_title(&self) -> String {
        format!("{} - {}", self.name, SITE_TAGLINE)
    }

    /// Applies the site-wide `%s | <site>` template.
    pub fn page_title(&self, title: &str) -> String {
        format!("{} | {}", title, self.name)
    }

    pub fn article_path(identifier: &str) -> String {
        format!("/artikel/{}", utf8_percent_encode(identifier, PATH_SEGMENT))
    }

    pub fn category_path(token: &str) -> String {
        format!("/kategori/{}", utf8_percent_encode(token, PATH_SEGMENT))
    }

    pub fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.root(), path)
    }

    pub fn article_url(&self, identifier: &str) -> String {
        self.absolute(&Self::article_path(identifier))
    }
}
