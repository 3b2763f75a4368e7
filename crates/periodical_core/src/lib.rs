//! In-memory model of authors, magazines and the articles linking them.
//! This crate is the single source of truth for the catalog invariants.

pub mod catalog;
pub mod logging;
pub mod model;

pub use catalog::{ArticleView, AuthorView, Catalog, CatalogError, CatalogResult, MagazineView};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::article::Article;
pub use model::author::Author;
pub use model::fields::{
    AuthorName, Category, Field, MagazineName, Title, ValidationError, AUTHOR_NAME_MIN_CHARS,
    CATEGORY_MIN_CHARS, MAGAZINE_NAME_MAX_CHARS, MAGAZINE_NAME_MIN_CHARS, TITLE_MAX_CHARS,
    TITLE_MIN_CHARS,
};
pub use model::ids::{ArticleId, AuthorId, MagazineId};
pub use model::magazine::{Magazine, DEFAULT_MIN_ARTICLES};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
