//! Validation failures raised while constructing catalog entities.

use crate::model::ids::{AuthorId, MagazineId};
use thiserror::Error;

/// Inclusive lower bound for magazine name length, in characters.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Inclusive upper bound for magazine name length, in characters.
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// Inclusive lower bound for article title length, in characters.
pub const TITLE_MIN_CHARS: usize = 5;
/// Inclusive upper bound for article title length, in characters.
pub const TITLE_MAX_CHARS: usize = 50;

pub type CatalogResult<T> = Result<T, ValidationError>;

/// Rejected constructor input.
///
/// Only constructors return this error. Queries never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("author name must not be empty")]
    EmptyAuthorName,

    #[error(
        "magazine name must be {min}..={max} characters, got {len}",
        min = MAGAZINE_NAME_MIN_CHARS,
        max = MAGAZINE_NAME_MAX_CHARS
    )]
    MagazineNameLength { len: usize },

    #[error("magazine category must not be empty")]
    EmptyCategory,

    #[error(
        "article title must be {min}..={max} characters, got {len}",
        min = TITLE_MIN_CHARS,
        max = TITLE_MAX_CHARS
    )]
    TitleLength { len: usize },

    /// The author id was not created by the catalog receiving it.
    #[error("author is not registered in this catalog: {0}")]
    UnknownAuthor(AuthorId),

    /// The magazine id was not created by the catalog receiving it.
    #[error("magazine is not registered in this catalog: {0}")]
    UnknownMagazine(MagazineId),
}

impl ValidationError {
    /// Stable machine-readable code, used as `error_code` in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyAuthorName => "empty_author_name",
            Self::MagazineNameLength { .. } => "magazine_name_length",
            Self::EmptyCategory => "empty_category",
            Self::TitleLength { .. } => "title_length",
            Self::UnknownAuthor(_) => "unknown_author",
            Self::UnknownMagazine(_) => "unknown_magazine",
        }
    }
}

/// Length in Unicode scalar values, matching how names and titles are bounded.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}
