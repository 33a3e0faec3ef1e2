//! In-memory catalog that owns every author, magazine and article.
//!
//! # Responsibility
//! - Hold the author, magazine and article registries in creation order.
//! - Validate constructor input and wire new articles into the graph.
//! - Resolve typed ids into borrowed views for queries.
//!
//! # Invariants
//! - Every constructor validates all input before mutating anything.
//! - An article is appended to the article registry, its magazine and its
//!   author within one `&mut self` call, so no partial state is observable.
//! - Registries only grow, except through `clear`.

mod global;
mod snapshot;
mod view;

pub use global::{reset_global_catalog, with_global_catalog};
pub use snapshot::CatalogSnapshot;
pub use view::{ArticleView, AuthorView, MagazineView};

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::error::{CatalogResult, ValidationError};
use crate::model::ids::{ArticleId, AuthorId, MagazineId};
use crate::model::magazine::Magazine;
use log::{debug, warn};
use std::collections::HashMap;

/// Arena of catalog entities with id indexes.
#[derive(Debug, Default)]
pub struct Catalog {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
    author_index: HashMap<AuthorId, usize>,
    magazine_index: HashMap<MagazineId, usize>,
    article_index: HashMap<ArticleId, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an author with no articles.
    ///
    /// # Errors
    /// - `ValidationError::EmptyAuthorName` when `name` is empty.
    pub fn create_author(&mut self, name: impl Into<String>) -> CatalogResult<AuthorId> {
        let author = Author::new(name).map_err(|err| rejected("author_create", err))?;
        let id = author.id();
        self.author_index.insert(id, self.authors.len());
        self.authors.push(author);
        debug!("event=author_create module=catalog status=ok author_id={id}");
        Ok(id)
    }

    /// Creates a magazine and adds it to the magazine registry.
    ///
    /// # Errors
    /// - `ValidationError::MagazineNameLength` when `name` is not 2..=16 chars.
    /// - `ValidationError::EmptyCategory` when `category` is empty.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> CatalogResult<MagazineId> {
        let magazine =
            Magazine::new(name, category).map_err(|err| rejected("magazine_create", err))?;
        let id = magazine.id();
        self.magazine_index.insert(id, self.magazines.len());
        self.magazines.push(magazine);
        debug!("event=magazine_create module=catalog status=ok magazine_id={id}");
        Ok(id)
    }

    /// Creates an article and registers it with the article registry, the
    /// magazine and the author, in that order.
    ///
    /// # Errors
    /// Checked in this order; nothing is registered on failure.
    /// - `ValidationError::UnknownAuthor` when `author` is not in this catalog.
    /// - `ValidationError::UnknownMagazine` when `magazine` is not in this catalog.
    /// - `ValidationError::TitleLength` when `title` is not 5..=50 chars.
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<ArticleId> {
        let (author_slot, magazine_slot, article) = self
            .prepare_article(author, magazine, title)
            .map_err(|err| rejected("article_create", err))?;

        let id = article.id();
        self.article_index.insert(id, self.articles.len());
        self.articles.push(article);
        self.magazines[magazine_slot].add_article(id);
        self.authors[author_slot].add_article(id);

        debug!(
            "event=article_create module=catalog status=ok article_id={id} author_id={author} magazine_id={magazine}"
        );
        Ok(id)
    }

    fn prepare_article(
        &self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> CatalogResult<(usize, usize, Article)> {
        let author_slot = *self
            .author_index
            .get(&author)
            .ok_or(ValidationError::UnknownAuthor(author))?;
        let magazine_slot = *self
            .magazine_index
            .get(&magazine)
            .ok_or(ValidationError::UnknownMagazine(magazine))?;
        let article = Article::new(author, magazine, title)?;
        Ok((author_slot, magazine_slot, article))
    }

    pub fn author(&self, id: AuthorId) -> Option<AuthorView<'_>> {
        self.author_record(id).map(|record| AuthorView::new(self, record))
    }

    pub fn magazine(&self, id: MagazineId) -> Option<MagazineView<'_>> {
        self.magazine_record(id).map(|record| MagazineView::new(self, record))
    }

    /// Resolves an article together with both of its links.
    pub fn article(&self, id: ArticleId) -> Option<ArticleView<'_>> {
        ArticleView::resolve(self, self.article_record(id)?)
    }

    /// All authors, in creation order.
    pub fn authors(&self) -> Vec<AuthorView<'_>> {
        self.authors
            .iter()
            .map(|record| AuthorView::new(self, record))
            .collect()
    }

    /// The magazine registry, in creation order.
    pub fn magazines(&self) -> Vec<MagazineView<'_>> {
        self.magazines
            .iter()
            .map(|record| MagazineView::new(self, record))
            .collect()
    }

    /// The article registry, in creation order.
    pub fn articles(&self) -> Vec<ArticleView<'_>> {
        self.articles
            .iter()
            .filter_map(|record| ArticleView::resolve(self, record))
            .collect()
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn magazine_count(&self) -> usize {
        self.magazines.len()
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty() && self.magazines.is_empty() && self.articles.is_empty()
    }

    /// Magazine with the most articles across the registry.
    ///
    /// Returns `None` when there are no magazines or none has an article.
    /// On a tie the earliest-created magazine wins.
    pub fn top_publisher(&self) -> Option<MagazineView<'_>> {
        let mut top: Option<&Magazine> = None;
        for magazine in &self.magazines {
            let count = magazine.article_ids().len();
            if count == 0 {
                continue;
            }
            if top.map_or(true, |current| count > current.article_ids().len()) {
                top = Some(magazine);
            }
        }
        top.map(|record| MagazineView::new(self, record))
    }

    /// Borrowed, serializable copy of every record.
    pub fn snapshot(&self) -> CatalogSnapshot<'_> {
        CatalogSnapshot {
            authors: &self.authors,
            magazines: &self.magazines,
            articles: &self.articles,
        }
    }

    /// Drops every entity and index.
    pub fn clear(&mut self) {
        self.authors.clear();
        self.magazines.clear();
        self.articles.clear();
        self.author_index.clear();
        self.magazine_index.clear();
        self.article_index.clear();
    }

    pub(crate) fn author_record(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(*self.author_index.get(&id)?)
    }

    pub(crate) fn magazine_record(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.get(*self.magazine_index.get(&id)?)
    }

    pub(crate) fn article_record(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(*self.article_index.get(&id)?)
    }
}

fn rejected(event: &str, err: ValidationError) -> ValidationError {
    warn!(
        "event={event} module=catalog status=error error_code={} error={err}",
        err.code()
    );
    err
}
