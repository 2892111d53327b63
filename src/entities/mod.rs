use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// --- Article status ---
///
/// Stored as free text by the authoring system; anything other than
/// `published` is hidden from readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleStatus {
    Published,
    Draft,
    /// A label this service does not know about (or no label at all).
    Unknown(String),
}

impl ArticleStatus {
    pub const PUBLISHED: &'static str = "published";
    pub const DRAFT: &'static str = "draft";

    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some(Self::PUBLISHED) => Self::Published,
            Some(Self::DRAFT) => Self::Draft,
            Some(other) => Self::Unknown(other.to_string()),
            None => Self::Unknown(String::new()),
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published)
    }
}

/// --- Tables ---

/// Raw row of the `articles` collection. Documents carry no enforced
/// schema, so every field except the key may be absent.
#[derive(Debug, Clone, Default, FromRow)]
pub struct ArticleRecord {
    pub id: String,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub banner_url: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub slug: Option<String>,
    pub title: String,
    pub category: String,
    pub content: String,
    pub banner_url: Option<String>,
    pub status: ArticleStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Identifier used in public URLs: the slug when present, else the id.
    pub fn public_id(&self) -> &str {
        self.slug.as_deref().unwrap_or(&self.id)
    }

    pub fn is_published(&self) -> bool {
        self.status.is_published()
    }

    /// Timestamp shown to readers and search engines.
    pub fn published_time(&self) -> Option<DateTime<Utc>> {
        self.published_at.or(self.created_at)
    }

    /// Most recent modification time known for the record.
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.published_at).or(self.created_at)
    }
}

impl From<ArticleRecord> for Article {
    fn from(record: ArticleRecord) -> Self {
        let slug = non_blank(record.slug);
        let title = non_blank(record.title)
            .unwrap_or_else(|| slug.clone().unwrap_or_else(|| record.id.clone()));

        Self {
            status: ArticleStatus::from_label(record.status.as_deref()),
            slug,
            title,
            category: record.category.unwrap_or_default(),
            content: record.content.unwrap_or_default(),
            banner_url: non_blank(record.banner_url),
            created_at: record.created_at,
            published_at: record.published_at,
            updated_at: record.updated_at,
            id: record.id,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
