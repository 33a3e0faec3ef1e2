//! Core domain logic for Masthead.
//! Authors and magazines joined by articles, with aggregate queries over the
//! resulting graph.

pub mod catalog;
pub mod logging;
pub mod model;

pub use catalog::{
    reset_global_catalog, with_global_catalog, ArticleView, AuthorView, Catalog, CatalogSnapshot,
    MagazineView,
};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::article::Article;
pub use model::author::Author;
pub use model::error::{CatalogResult, ValidationError};
pub use model::ids::{ArticleId, AuthorId, MagazineId};
pub use model::magazine::Magazine;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
