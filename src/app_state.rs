use crate::articles::ArticleService;
use crate::config::{Config, ListingLimits};
use crate::repositories::{ArticleRepository, ArticleRepositoryTrait};
use crate::seo::SiteInfo;
use sqlx::{Pool, Postgres};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub articles: ArticleService,
    pub site: Arc<SiteInfo>,
    pub limits: ListingLimits,
    pub db_pool: Pool<Postgres>,
}

impl AppState {
    pub fn new(pool: Pool<Postgres>, config: &Config) -> Self {
        let repo: Arc<dyn ArticleRepositoryTrait + Send + Sync> =
            Arc::new(ArticleRepository::new(pool.clone()));
        Self::with_repository(repo, pool, config)
    }

    /// State over any repository implementation; tests pass mocks here.
    pub fn with_repository(
        repo: Arc<dyn ArticleRepositoryTrait + Send + Sync>,
        pool: Pool<Postgres>,
        config: &Config,
    ) -> Self {
        Self {
            articles: ArticleService::new(repo),
            site: Arc::new(SiteInfo::from_config(config)),
            limits: config.limits(),
            db_pool: pool,
        }
    }
}
