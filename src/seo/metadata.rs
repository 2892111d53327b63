use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::entities::Article;
use crate::seo::site::{SITE_DESCRIPTION, SITE_LOCALE, SiteInfo};

const OG_IMAGE_WIDTH: u32 = 1200;
const OG_IMAGE_HEIGHT: u32 = 630;
const TWITTER_CARD: &str = "summary_large_image";
const NOT_FOUND_TITLE: &str = "Artikel Tidak Ditemukan";

/// Metadata block handed to the page-rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PageMetadata {
    /// Full document title, site suffix included.
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub locale: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<DateTime<Utc>>,
    pub images: Vec<OpenGraphImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct OpenGraphImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

impl PageMetadata {
    fn build(
        site: &SiteInfo,
        title: &str,
        description: &str,
        canonical_url: String,
        kind: &str,
        published_time: Option<DateTime<Utc>>,
        image: Option<(&str, &str)>,
    ) -> Self {
        let images: Vec<OpenGraphImage> = image
            .map(|(url, alt)| OpenGraphImage {
                url: url.to_string(),
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: alt.to_string(),
            })
            .into_iter()
            .collect();

        Self {
            title: site.page_title(title),
            description: description.to_string(),
            open_graph: OpenGraph {
                title: title.to_string(),
                description: description.to_string(),
                url: canonical_url.clone(),
                site_name: site.name.clone(),
                locale: SITE_LOCALE.to_string(),
                kind: kind.to_string(),
                published_time,
                images: images.clone(),
            },
            twitter: TwitterCard {
                card: TWITTER_CARD.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                images: images.into_iter().map(|image| image.url).collect(),
            },
            canonical_url,
        }
    }
}

/// Metadata for an article page; `description` comes from the summary
/// extractor.
pub fn article_metadata(site: &SiteInfo, article: &Article, description: &str) -> PageMetadata {
    PageMetadata::build(
        site,
        &article.title,
        description,
        site.article_url(article.public_id()),
        "article",
        article.published_time(),
        article
            .banner_url
            .as_deref()
            .map(|url| (url, article.title.as_str())),
    )
}

pub fn home_metadata(site: &SiteInfo) -> PageMetadata {
    let mut metadata = PageMetadata::build(
        site,
        &site.default_title(),
        SITE_DESCRIPTION,
        site.absolute("/"),
        "website",
        None,
        None,
    );
    // the home title is already complete
    metadata.title = site.default_title();
    metadata
}

pub fn category_metadata(site: &SiteInfo, name: &str, token: &str) -> PageMetadata {
    let description = format!("Kumpulan artikel dan rekomendasi terbaik seputar {name}.");
    PageMetadata::build(
        site,
        name,
        &description,
        site.absolute(&SiteInfo::category_path(token)),
        "website",
        None,
        None,
    )
}

/// Document title for an unknown article.
pub fn not_found_title(site: &SiteInfo) -> String {
    site.page_title(NOT_FOUND_TITLE)
}
