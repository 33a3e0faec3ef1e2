//! Author record.
//!
//! # Invariants
//! - `name` is non-empty and never changes after construction.
//! - `articles` is append-only and only grows through article construction,
//!   so every listed article names this author.

use crate::model::error::{CatalogResult, ValidationError};
use crate::model::ids::{ArticleId, AuthorId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: AuthorId,
    name: String,
    articles: Vec<ArticleId>,
}

impl Author {
    /// Validates `name` and builds an author with no articles.
    ///
    /// Whitespace-only names are accepted; only the empty string is rejected.
    pub(crate) fn new(name: impl Into<String>) -> CatalogResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyAuthorName);
        }
        Ok(Self {
            id: AuthorId::new(),
            name,
            articles: Vec::new(),
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Article ids in the order they were written.
    pub fn article_ids(&self) -> &[ArticleId] {
        &self.articles
    }

    /// Appends without validation. Only article construction calls this.
    pub(crate) fn add_article(&mut self, article: ArticleId) {
        self.articles.push(article);
    }
}
