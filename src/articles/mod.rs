pub mod category;
pub mod lookup;
pub mod service;

pub use category::{category_label, display_name_from_token, normalize_category};
pub use lookup::ArticleLookup;
pub use service::{ArticleService, CategoryListing};
