use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    articles::{category_label, normalize_category},
    entities::Article,
    seo::{PageMetadata, SiteInfo},
};

/// One entry of an article listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleCard {
    pub id: String,
    pub title: String,
    /// Site-relative link, `/artikel/{slug or id}`.
    pub path: String,
    pub category: String,
    pub category_token: String,
    pub banner_url: Option<String>,
    pub published_time: Option<DateTime<Utc>>,
}

impl From<&Article> for ArticleCard {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            path: SiteInfo::article_path(article.public_id()),
            category: category_label(&article.category).to_string(),
            category_token: normalize_category(&article.category),
            banner_url: article.banner_url.clone(),
            published_time: article.published_time(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HomePage {
    pub metadata: PageMetadata,
    pub articles: Vec<ArticleCard>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryPage {
    pub metadata: PageMetadata,
    pub name: String,
    pub token: String,
    /// Empty when nothing is filed under the category yet.
    pub articles: Vec<ArticleCard>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleBody {
    pub id: String,
    pub title: String,
    pub category: String,
    pub category_token: String,
    pub banner_url: Option<String>,
    pub published_time: Option<DateTime<Utc>>,
    /// Sanitized article markup, leading title heading removed.
    pub html: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArticlePage {
    pub metadata: PageMetadata,
    pub article: ArticleBody,
    /// `schema.org/Article` document for a `<script type="application/ld+json">` tag.
    #[schema(value_type = Object)]
    pub json_ld: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Document title the rendering layer shows for the error page.
    pub title: String,
}
