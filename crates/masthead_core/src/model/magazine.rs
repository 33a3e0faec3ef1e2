//! Magazine record.
//!
//! # Invariants
//! - `name` is 2..=16 characters and `category` is non-empty; both are
//!   fixed at construction.
//! - `articles` is append-only and every listed article names this magazine.

use crate::model::error::{
    char_len, CatalogResult, ValidationError, MAGAZINE_NAME_MAX_CHARS, MAGAZINE_NAME_MIN_CHARS,
};
use crate::model::ids::{ArticleId, MagazineId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
    articles: Vec<ArticleId>,
}

impl Magazine {
    /// Validates both fields before building anything. Name is checked first.
    pub(crate) fn new(name: impl Into<String>, category: impl Into<String>) -> CatalogResult<Self> {
        let name = name.into();
        let category = category.into();

        let len = char_len(&name);
        if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&len) {
            return Err(ValidationError::MagazineNameLength { len });
        }
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        Ok(Self {
            id: MagazineId::new(),
            name,
            category,
            articles: Vec::new(),
        })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Article ids in publication order.
    pub fn article_ids(&self) -> &[ArticleId] {
        &self.articles
    }

    pub(crate) fn add_article(&mut self, article: ArticleId) {
        self.articles.push(article);
    }
}

#[cfg(test)]
mod tests {
    use super::Magazine;
    use crate::model::error::ValidationError;

    #[test]
    fn name_length_bounds_are_inclusive() {
        assert!(Magazine::new("ab", "Tech").is_ok());
        assert!(Magazine::new("a".repeat(16), "Tech").is_ok());

        assert_eq!(
            Magazine::new("a", "Tech").unwrap_err(),
            ValidationError::MagazineNameLength { len: 1 }
        );
        assert_eq!(
            Magazine::new("a".repeat(17), "Tech").unwrap_err(),
            ValidationError::MagazineNameLength { len: 17 }
        );
    }

    #[test]
    fn rejects_empty_category() {
        assert_eq!(
            Magazine::new("Vogue", "").unwrap_err(),
            ValidationError::EmptyCategory
        );
    }

    #[test]
    fn name_is_checked_before_category() {
        assert_eq!(
            Magazine::new("", "").unwrap_err(),
            ValidationError::MagazineNameLength { len: 0 }
        );
    }
}
