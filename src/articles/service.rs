use std::sync::Arc;

use tracing::{debug, error, instrument};

use crate::{
    articles::category::{display_name_from_token, normalize_category},
    entities::Article,
    repositories::ArticleRepositoryTrait,
};

/// Articles filed under one category token.
#[derive(Debug, Clone)]
pub struct CategoryListing {
    pub token: String,
    pub name: String,
    pub articles: Vec<Article>,
}

/// Public read path over the article store.
///
/// Store failures are logged and degrade to "not found" or an empty
/// listing; callers never see them.
#[derive(Clone)]
pub struct ArticleService {
    repo: Arc<dyn ArticleRepositoryTrait + Send + Sync>,
}

impl ArticleService {
    pub fn new(repo: Arc<dyn ArticleRepositoryTrait + Send + Sync>) -> Self {
        Self { repo }
    }

    /// Resolve a public identifier: a published slug match wins, then a
    /// published record stored under that id.
    #[instrument(skip(self))]
    pub async fn find_article_by_identifier(&self, identifier: &str) -> Option<Article> {
        match self.repo.find_published_by_slug(identifier).await {
            Ok(Some(article)) => return Some(article),
            Ok(None) => {}
            Err(err) => {
                error!(error = %err, "Failed to look up article by slug");
                return None;
            }
        }

        match self.repo.find_by_id(identifier).await {
            Ok(Some(article)) if article.is_published() => Some(article),
            Ok(Some(article)) => {
                debug!(status = ?article.status, "Article exists but is not published");
                None
            }
            Ok(None) => {
                debug!("No article matches identifier");
                None
            }
            Err(err) => {
                error!(error = %err, "Failed to look up article by id");
                None
            }
        }
    }

    /// Newest published articles, at most `max_count` records considered.
    #[instrument(skip(self))]
    pub async fn list_published_articles(&self, max_count: usize) -> Vec<Article> {
        let limit = i64::try_from(max_count).unwrap_or(i64::MAX);
        match self.repo.list_recent(limit).await {
            Ok(articles) => {
                let published: Vec<Article> =
                    articles.into_iter().filter(Article::is_published).collect();
                debug!(count = published.len(), "Listed published articles");
                published
            }
            Err(err) => {
                error!(error = %err, "Failed to list articles");
                Vec::new()
            }
        }
    }

    /// Published articles whose normalized category equals `token`.
    #[instrument(skip(self))]
    pub async fn list_by_category(&self, token: &str, max_count: usize) -> CategoryListing {
        let articles: Vec<Article> = self
            .list_published_articles(max_count)
            .await
            .into_iter()
            .filter(|article| normalize_category(&article.category) == token)
            .collect();

        let name = match articles.first() {
            Some(first) if !first.category.trim().is_empty() => first.category.trim().to_string(),
            _ => display_name_from_token(token),
        };

        CategoryListing {
            token: token.to_string(),
            name,
            articles,
        }
    }
}
