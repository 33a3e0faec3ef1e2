//! Typed identifiers for catalog entities.
//!
//! Links between entities are stored as these ids, never as references, so
//! an article can point at its author and magazine without owning either.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random id.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(
    /// Stable identity of an author.
    AuthorId
);
define_id!(
    /// Stable identity of a magazine.
    MagazineId
);
define_id!(
    /// Stable identity of an article (the author/magazine join record).
    ArticleId
);

#[cfg(test)]
mod tests {
    use super::{ArticleId, AuthorId};
    use uuid::Uuid;

    #[test]
    fn new_ids_are_unique_and_not_nil() {
        let first = AuthorId::new();
        let second = AuthorId::new();
        assert_ne!(first, second);
        assert!(!first.as_uuid().is_nil());
    }

    #[test]
    fn display_matches_inner_uuid() {
        let uuid = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
        assert_eq!(
            ArticleId::from_uuid(uuid).to_string(),
            "11111111-2222-4333-8444-555555555555"
        );
    }
}
