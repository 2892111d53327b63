pub mod json_ld;
pub mod metadata;
pub mod site;
pub mod sitemap;

pub use json_ld::article_schema;
pub use metadata::{
    OpenGraph, OpenGraphImage, PageMetadata, TwitterCard, article_metadata, category_metadata,
    home_metadata, not_found_title,
};
pub use site::SiteInfo;
pub use sitemap::Sitemap;
