use anyhow::Result;
use async_trait::async_trait;
use axum::Router;
use sqlx::{Pool, Postgres};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use bantupilih::{
    app_state::AppState,
    config::Config,
    entities::{Article, ArticleRecord},
    repositories::ArticleRepositoryTrait,
    router::router,
};

/// Article store held in memory, newest first. Counts every query.
pub struct InMemoryArticleRepository {
    articles: Vec<Article>,
    queries: AtomicUsize,
}

impl InMemoryArticleRepository {
    pub fn new(records: Vec<ArticleRecord>) -> Self {
        Self {
            articles: records.into_iter().map(Article::from).collect(),
            queries: AtomicUsize::new(0),
        }
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArticleRepositoryTrait for InMemoryArticleRepository {
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Article>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .articles
            .iter()
            .find(|a| a.slug.as_deref() == Some(slug) && a.is_published())
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Article>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Article>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self.articles.iter().take(limit).cloned().collect())
    }
}

pub fn record(id: &str, slug: Option<&str>, status: &str, category: &str) -> ArticleRecord {
    ArticleRecord {
        id: id.to_string(),
        slug: slug.map(str::to_string),
        title: Some(format!("Artikel {id}")),
        category: Some(category.to_string()),
        content: Some(format!("Isi artikel {id}.")),
        status: Some(status.to_string()),
        ..Default::default()
    }
}

pub fn test_app(repo: Arc<InMemoryArticleRepository>) -> Router {
    // never connected; only the health route touches it
    let pool =
        Pool::<Postgres>::connect_lazy("postgresql://dummy").expect("Failed to create test pool");
    router(AppState::with_repository(repo, pool, &Config::default()))
}
