pub mod article;

pub use article::{ArticleRepository, ArticleRepositoryTrait};
