use serde_json::{Value, json};

use crate::entities::Article;
use crate::seo::site::SiteInfo;

const IMAGE_WIDTH: u32 = 1200;
const IMAGE_HEIGHT: u32 = 630;

/// `schema.org/Article` structured data for an article page.
pub fn article_schema(site: &SiteInfo, article: &Article, description: &str) -> Value {
    let organization = json!({
        "@type": "Organization",
        "name": site.name,
        "url": site.root(),
    });

    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": article.title,
        "datePublished": article.published_time().map(|t| t.to_rfc3339()),
        "author": organization.clone(),
        "publisher": organization,
        "description": description,
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": site.article_url(article.public_id()),
        },
    });

    if let Some(banner) = &article.banner_url {
        schema["image"] = json!({
            "@type": "ImageObject",
            "url": banner,
            "width": IMAGE_WIDTH,
            "height": IMAGE_HEIGHT,
        });
    }

    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ArticleRecord;
    use chrono::{TimeZone, Utc};
    use url::Url;

    fn site() -> SiteInfo {
        SiteInfo::new("BantuPilih", Url::parse("https://example.com").unwrap())
    }

    #[test]
    fn test_article_schema() {
        let article = Article::from(ArticleRecord {
            id: "abc123".to_string(),
            title: Some("Kipas Angin Terbaik".to_string()),
            banner_url: Some("https://cdn.example.com/k.jpg".to_string()),
            status: Some("published".to_string()),
            published_at: Some(Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()),
            ..Default::default()
        });

        let schema = article_schema(&site(), &article, "Ringkasan");

        assert_eq!(schema["@type"], "Article");
        assert_eq!(schema["headline"], "Kipas Angin Terbaik");
        assert_eq!(schema["datePublished"], "2026-01-02T03:04:05+00:00");
        assert_eq!(schema["author"]["name"], "BantuPilih");
        assert_eq!(schema["publisher"]["url"], "https://example.com");
        assert_eq!(schema["description"], "Ringkasan");
        assert_eq!(
            schema["mainEntityOfPage"]["@id"],
            "https://example.com/artikel/abc123"
        );
        assert_eq!(schema["image"]["width"], 1200);
    }

    #[test]
    fn test_article_schema_without_banner() {
        let article = Article::from(ArticleRecord {
            id: "abc123".to_string(),
            status: Some("published".to_string()),
            ..Default::default()
        });

        let schema = article_schema(&site(), &article, "");
        assert!(schema.get("image").is_none());
        assert!(schema["datePublished"].is_null());
    }
}
