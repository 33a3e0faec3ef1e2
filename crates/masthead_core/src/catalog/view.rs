//! Borrowed query handles over catalog records.
//!
//! Views pair a record with the catalog that owns it, so relational queries
//! can follow id links. Every query is computed on demand from the current
//! article lists; nothing is cached.

use crate::catalog::Catalog;
use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::ids::{ArticleId, AuthorId, MagazineId};
use crate::model::magazine::Magazine;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt::{Debug, Formatter};

/// An author qualifies as contributing with strictly more articles than this.
const CONTRIBUTING_ARTICLE_THRESHOLD: usize = 2;

#[derive(Clone, Copy)]
pub struct AuthorView<'a> {
    catalog: &'a Catalog,
    record: &'a Author,
}

impl<'a> AuthorView<'a> {
    pub(crate) fn new(catalog: &'a Catalog, record: &'a Author) -> Self {
        Self { catalog, record }
    }

    pub fn id(&self) -> AuthorId {
        self.record.id()
    }

    pub fn name(&self) -> &'a str {
        self.record.name()
    }

    /// Articles by this author, oldest first.
    pub fn articles(&self) -> Vec<ArticleView<'a>> {
        resolve_articles(self.catalog, self.record.article_ids())
    }

    /// Distinct magazines this author has written for, in order of first
    /// appearance.
    pub fn magazines(&self) -> Vec<MagazineView<'a>> {
        let mut seen = HashSet::new();
        self.articles()
            .into_iter()
            .map(|article| article.magazine())
            .filter(|magazine| seen.insert(magazine.id()))
            .collect()
    }

    /// Distinct categories of the magazines this author has written for.
    ///
    /// Returns `None` when the author has no articles, which is distinct from
    /// an empty set.
    pub fn topic_areas(&self) -> Option<BTreeSet<&'a str>> {
        if self.record.article_ids().is_empty() {
            return None;
        }
        Some(
            self.articles()
                .iter()
                .map(|article| article.magazine().category())
                .collect(),
        )
    }
}

impl PartialEq for AuthorView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for AuthorView<'_> {}

impl Debug for AuthorView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorView")
            .field("id", &self.id())
            .field("name", &self.name())
            .finish()
    }
}

#[derive(Clone, Copy)]
pub struct MagazineView<'a> {
    catalog: &'a Catalog,
    record: &'a Magazine,
}

impl<'a> MagazineView<'a> {
    pub(crate) fn new(catalog: &'a Catalog, record: &'a Magazine) -> Self {
        Self { catalog, record }
    }

    pub fn id(&self) -> MagazineId {
        self.record.id()
    }

    pub fn name(&self) -> &'a str {
        self.record.name()
    }

    pub fn category(&self) -> &'a str {
        self.record.category()
    }

    pub fn article_count(&self) -> usize {
        self.record.article_ids().len()
    }

    /// Articles published here, oldest first.
    pub fn articles(&self) -> Vec<ArticleView<'a>> {
        resolve_articles(self.catalog, self.record.article_ids())
    }

    /// Distinct authors with at least one article here, in order of first
    /// appearance.
    pub fn contributors(&self) -> Vec<AuthorView<'a>> {
        let mut seen = HashSet::new();
        self.articles()
            .into_iter()
            .map(|article| article.author())
            .filter(|author| seen.insert(author.id()))
            .collect()
    }

    /// Titles in publication order, or `None` when nothing is published.
    pub fn article_titles(&self) -> Option<Vec<&'a str>> {
        if self.record.article_ids().is_empty() {
            return None;
        }
        Some(
            self.articles()
                .iter()
                .map(|article| article.title())
                .collect(),
        )
    }

    /// Authors with three or more articles here, in order of first
    /// appearance. Returns `None` rather than an empty list when nobody
    /// qualifies.
    pub fn contributing_authors(&self) -> Option<Vec<AuthorView<'a>>> {
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in self.articles() {
            *counts.entry(article.author().id()).or_default() += 1;
        }

        let qualified: Vec<_> = self
            .contributors()
            .into_iter()
            .filter(|author| {
                counts.get(&author.id()).copied().unwrap_or_default()
                    > CONTRIBUTING_ARTICLE_THRESHOLD
            })
            .collect();

        if qualified.is_empty() {
            None
        } else {
            Some(qualified)
        }
    }
}

impl PartialEq for MagazineView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for MagazineView<'_> {}

impl Debug for MagazineView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MagazineView")
            .field("id", &self.id())
            .field("name", &self.name())
            .field("category", &self.category())
            .finish()
    }
}

/// Read-only article handle with both links already resolved.
#[derive(Clone, Copy)]
pub struct ArticleView<'a> {
    record: &'a Article,
    author: AuthorView<'a>,
    magazine: MagazineView<'a>,
}

impl<'a> ArticleView<'a> {
    pub(crate) fn resolve(catalog: &'a Catalog, record: &'a Article) -> Option<Self> {
        let author = catalog.author_record(record.author_id())?;
        let magazine = catalog.magazine_record(record.magazine_id())?;
        Some(Self {
            record,
            author: AuthorView::new(catalog, author),
            magazine: MagazineView::new(catalog, magazine),
        })
    }

    pub fn id(&self) -> ArticleId {
        self.record.id()
    }

    pub fn title(&self) -> &'a str {
        self.record.title()
    }

    pub fn author(&self) -> AuthorView<'a> {
        self.author
    }

    pub fn magazine(&self) -> MagazineView<'a> {
        self.magazine
    }
}

impl PartialEq for ArticleView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for ArticleView<'_> {}

impl Debug for ArticleView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticleView")
            .field("id", &self.id())
            .field("title", &self.title())
            .field("author", &self.author.id())
            .field("magazine", &self.magazine.id())
            .finish()
    }
}

fn resolve_articles<'a>(catalog: &'a Catalog, ids: &[ArticleId]) -> Vec<ArticleView<'a>> {
    ids.iter().filter_map(|id| catalog.article(*id)).collect()
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;

    #[test]
    fn contributing_authors_requires_more_than_two_articles() {
        let mut catalog = Catalog::new();
        let prolific = catalog.create_author("Ada").unwrap();
        let occasional = catalog.create_author("Grace").unwrap();
        let magazine = catalog.create_magazine("Tech Weekly", "Technology").unwrap();

        for title in ["First piece", "Second piece", "Third piece"] {
            catalog.create_article(prolific, magazine, title).unwrap();
        }
        for title in ["Compilers 1", "Compilers 2"] {
            catalog.create_article(occasional, magazine, title).unwrap();
        }

        let view = catalog.magazine(magazine).unwrap();
        let contributing = view.contributing_authors().unwrap();
        assert_eq!(contributing.len(), 1);
        assert_eq!(contributing[0].id(), prolific);
    }

    #[test]
    fn contributing_authors_is_none_when_nobody_qualifies() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Grace").unwrap();
        let magazine = catalog.create_magazine("Tech Weekly", "Technology").unwrap();
        assert!(catalog
            .magazine(magazine)
            .unwrap()
            .contributing_authors()
            .is_none());

        catalog.create_article(author, magazine, "Compilers 1").unwrap();
        catalog.create_article(author, magazine, "Compilers 2").unwrap();
        assert!(catalog
            .magazine(magazine)
            .unwrap()
            .contributing_authors()
            .is_none());
    }

    #[test]
    fn contributors_and_magazines_are_deduplicated_in_first_seen_order() {
        let mut catalog = Catalog::new();
        let ada = catalog.create_author("Ada").unwrap();
        let grace = catalog.create_author("Grace").unwrap();
        let tech = catalog.create_magazine("Tech Weekly", "Technology").unwrap();
        let arts = catalog.create_magazine("Arts Daily", "Art").unwrap();

        catalog.create_article(grace, tech, "Cobol forever").unwrap();
        catalog.create_article(ada, tech, "Engines of note").unwrap();
        catalog.create_article(grace, tech, "Nanoseconds").unwrap();
        catalog.create_article(grace, arts, "Wire sculpture").unwrap();

        let contributors: Vec<_> = catalog
            .magazine(tech)
            .unwrap()
            .contributors()
            .iter()
            .map(|author| author.id())
            .collect();
        assert_eq!(contributors, vec![grace, ada]);

        let magazines: Vec<_> = catalog
            .author(grace)
            .unwrap()
            .magazines()
            .iter()
            .map(|magazine| magazine.id())
            .collect();
        assert_eq!(magazines, vec![tech, arts]);
    }

    #[test]
    fn article_titles_follow_publication_order() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Ada").unwrap();
        let magazine = catalog.create_magazine("Tech Weekly", "Technology").unwrap();
        assert!(catalog.magazine(magazine).unwrap().article_titles().is_none());

        catalog.create_article(author, magazine, "Zeta first").unwrap();
        catalog.create_article(author, magazine, "Alpha second").unwrap();

        assert_eq!(
            catalog.magazine(magazine).unwrap().article_titles(),
            Some(vec!["Zeta first", "Alpha second"])
        );
    }

    #[test]
    fn topic_areas_distinguishes_no_articles_from_results() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Ada").unwrap();
        assert!(catalog.author(author).unwrap().topic_areas().is_none());

        let tech = catalog.create_magazine("Tech Weekly", "Technology").unwrap();
        let also_tech = catalog.create_magazine("Byte", "Technology").unwrap();
        catalog.create_article(author, tech, "Engines of note").unwrap();
        catalog.create_article(author, also_tech, "Punch cards").unwrap();

        let topics = catalog.author(author).unwrap().topic_areas().unwrap();
        assert_eq!(topics.into_iter().collect::<Vec<_>>(), vec!["Technology"]);
    }

    #[test]
    fn article_view_resolves_both_links() {
        let mut catalog = Catalog::new();
        let author = catalog.create_author("Ada").unwrap();
        let magazine = catalog.create_magazine("Tech Weekly", "Technology").unwrap();
        let article = catalog
            .create_article(author, magazine, "Engines of note")
            .unwrap();

        let view = catalog.article(article).unwrap();
        assert_eq!(view.title(), "Engines of note");
        assert_eq!(view.author().name(), "Ada");
        assert_eq!(view.magazine().name(), "Tech Weekly");
    }
}
