//! Process-wide catalog.
//!
//! # Invariants
//! - Starts empty on first use and only grows until `reset_global_catalog`.
//! - All access goes through one mutex, so there is a single writer at a time.

use crate::catalog::Catalog;
use log::info;
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

static GLOBAL_CATALOG: Lazy<Mutex<Catalog>> = Lazy::new(|| Mutex::new(Catalog::new()));

/// Runs `f` with exclusive access to the process-wide catalog.
///
/// A poisoned lock is recovered: catalog writes validate before mutating, so
/// a panic inside `f` cannot leave a half-registered article behind.
pub fn with_global_catalog<T>(f: impl FnOnce(&mut Catalog) -> T) -> T {
    let mut catalog = GLOBAL_CATALOG
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut catalog)
}

/// Empties the process-wide catalog. Intended for test isolation.
pub fn reset_global_catalog() {
    let dropped = with_global_catalog(|catalog| {
        let dropped = catalog.article_count();
        catalog.clear();
        dropped
    });
    info!("event=catalog_reset module=catalog status=ok dropped_articles={dropped}");
}
