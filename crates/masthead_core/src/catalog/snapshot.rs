//! Serializable export of a catalog's registries.
//!
//! Export only: rebuilding a catalog from a snapshot would skip the
//! validation and wiring that `Catalog::create_article` performs.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use serde::Serialize;

/// Every record of one catalog, borrowed, in creation order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogSnapshot<'a> {
    pub authors: &'a [Author],
    pub magazines: &'a [Magazine],
    pub articles: &'a [Article],
}
