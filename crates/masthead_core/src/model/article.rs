//! Article record: the join between one author and one magazine.
//!
//! # Invariants
//! - `author`, `magazine` and `title` never change after construction.
//! - Built only by `Catalog::create_article`, which checks both links
//!   before calling `Article::new`.

use crate::model::error::{
    char_len, CatalogResult, ValidationError, TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
use crate::model::ids::{ArticleId, AuthorId, MagazineId};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: String,
}

impl Article {
    pub(crate) fn new(
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<Self> {
        let title = title.into();
        let len = char_len(&title);
        if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
            return Err(ValidationError::TitleLength { len });
        }
        Ok(Self {
            id: ArticleId::new(),
            author,
            magazine,
            title,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author_id(&self) -> AuthorId {
        self.author
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::Article;
    use crate::model::error::ValidationError;
    use crate::model::ids::{AuthorId, MagazineId};

    #[test]
    fn title_length_bounds_are_inclusive() {
        let author = AuthorId::new();
        let magazine = MagazineId::new();

        assert!(Article::new(author, magazine, "a".repeat(5)).is_ok());
        assert!(Article::new(author, magazine, "a".repeat(50)).is_ok());
        assert_eq!(
            Article::new(author, magazine, "a".repeat(4)).unwrap_err(),
            ValidationError::TitleLength { len: 4 }
        );
        assert_eq!(
            Article::new(author, magazine, "a".repeat(51)).unwrap_err(),
            ValidationError::TitleLength { len: 51 }
        );
    }

    #[test]
    fn keeps_links_as_given() {
        let author = AuthorId::new();
        let magazine = MagazineId::new();
        let article = Article::new(author, magazine, "Rust in Production").unwrap();
        assert_eq!(article.author_id(), author);
        assert_eq!(article.magazine_id(), magazine);
        assert_eq!(article.title(), "Rust in Production");
    }
}
