//! Entity records for the author/magazine/article graph.
//!
//! # Responsibility
//! - Define the three records and the rules each one validates on creation.
//! - Keep relational links as typed ids so no record owns another.
//!
//! # Invariants
//! - Records are immutable apart from their append-only article lists.
//! - Records are only created through `crate::catalog::Catalog`.

pub mod article;
pub mod author;
pub mod error;
pub mod ids;
pub mod magazine;
