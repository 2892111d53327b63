use crate::entities::{Article, ArticleRecord, ArticleStatus};
use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Postgres};

#[cfg(test)]
use mockall::automock;

const ARTICLE_COLUMNS: &str = "id, slug, title, category, content, banner_url, status, \
     created_at, published_at, updated_at";

/// Read access to the `articles` collection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ArticleRepositoryTrait: Send + Sync {
    /// First published article whose slug equals `slug`.
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Article>>;

    /// Article stored under `id`, whatever its status.
    async fn find_by_id(&self, id: &str) -> Result<Option<Article>>;

    /// Up to `limit` articles, newest `published_at` first, unpublished
    /// records included.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Article>>;
}

#[derive(Clone)]
pub struct ArticleRepository {
    pool: Pool<Postgres>,
}

impl ArticleRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepositoryTrait for ArticleRepository {
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles \
             WHERE slug = $1 AND status = $2 \
             ORDER BY id \
             LIMIT 1"
        );
        let record = sqlx::query_as::<_, ArticleRecord>(&sql)
            .bind(slug)
            .bind(ArticleStatus::PUBLISHED)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record.map(Article::from))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let record = sqlx::query_as::<_, ArticleRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record.map(Article::from))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles \
             ORDER BY published_at DESC NULLS LAST, id \
             LIMIT $1"
        );
        let records = sqlx::query_as::<_, ArticleRecord>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(records.into_iter().map(Article::from).collect())
    }
}
