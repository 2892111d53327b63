use dashmap::DashMap;

use crate::{articles::service::ArticleService, entities::Article};

/// Per-request memo over [`ArticleService::find_article_by_identifier`].
///
/// Metadata and body rendering both resolve the same identifier; this keeps
/// the store to one round trip per distinct identifier. Misses are cached
/// too. Create one per request and drop it with the request.
pub struct ArticleLookup<'a> {
    service: &'a ArticleService,
    resolved: DashMap<String, Option<Article>>,
}

impl<'a> ArticleLookup<'a> {
    pub fn new(service: &'a ArticleService) -> Self {
        Self {
            service,
            resolved: DashMap::new(),
        }
    }

    pub async fn find(&self, identifier: &str) -> Option<Article> {
        let cached = self
            .resolved
            .get(identifier)
            .map(|entry| entry.value().clone());
        if let Some(article) = cached {
            return article;
        }

        let article = self.service.find_article_by_identifier(identifier).await;
        self.resolved
            .insert(identifier.to_string(), article.clone());
        article
    }
}
