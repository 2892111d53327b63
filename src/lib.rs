pub mod app_state;
pub mod articles;
pub mod config;
pub mod content;
pub mod entities;
pub mod health;
pub mod pages;
pub mod repositories;
pub mod router;
pub mod seo;
