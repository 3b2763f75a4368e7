//! In-memory catalog owning every author, magazine and article.
//!
//! # Responsibility
//! - Mint entities and keep the author/magazine/article links consistent.
//! - Resolve handles into read views that answer cross-entity queries.
//!
//! # Invariants
//! - Every article is registered with its author and, exactly once, with its
//!   magazine.
//! - `create_article` validates the title and resolves both handles before
//!   any registration happens; a failed call leaves the catalog untouched.
//! - Log lines carry ids and counts only, never names or titles.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::fields::{AuthorName, Category, MagazineName, Title, ValidationError};
use crate::model::ids::{ArticleId, AuthorId, MagazineId};
use crate::model::magazine::{Magazine, DEFAULT_MIN_ARTICLES};
use log::debug;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors from catalog operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Attribute validation failed.
    Validation(ValidationError),
    /// Author handle does not belong to this catalog.
    AuthorNotFound(AuthorId),
    /// Magazine handle does not belong to this catalog.
    MagazineNotFound(MagazineId),
    /// Article handle does not belong to this catalog.
    ArticleNotFound(ArticleId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::AuthorNotFound(id) => write!(f, "author not found: {id}"),
            Self::MagazineNotFound(id) => write!(f, "magazine not found: {id}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::AuthorNotFound(_) | Self::MagazineNotFound(_) | Self::ArticleNotFound(_) => {
                None
            }
        }
    }
}

impl From<ValidationError> for CatalogError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Owner of the author/magazine/article graph.
#[derive(Debug, Default)]
pub struct Catalog {
    authors: HashMap<AuthorId, Author>,
    magazines: HashMap<MagazineId, Magazine>,
    articles: HashMap<ArticleId, Article>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an author and returns its handle.
    pub fn add_author(
        &mut self,
        name: impl TryInto<AuthorName, Error = ValidationError>,
    ) -> CatalogResult<AuthorId> {
        let author = Author::new(name)?;
        let id = author.id();
        self.authors.insert(id, author);
        debug!("event=author_create module=catalog status=ok author={id}");
        Ok(id)
    }

    /// Creates a magazine and returns its handle.
    pub fn add_magazine(
        &mut self,
        name: impl TryInto<MagazineName, Error = ValidationError>,
        category: impl TryInto<Category, Error = ValidationError>,
    ) -> CatalogResult<MagazineId> {
        let magazine = Magazine::new(name, category)?;
        let id = magazine.id();
        self.magazines.insert(id, magazine);
        debug!("event=magazine_create module=catalog status=ok magazine={id}");
        Ok(id)
    }

    /// Creates an article and registers it with its author and magazine.
    ///
    /// `title` may be a string or an untyped JSON value.
    ///
    /// # Errors
    /// - `Validation` when the title is not a string or not 5..=50 characters.
    /// - `AuthorNotFound` / `MagazineNotFound` for foreign handles.
    ///
    /// Nothing is mutated when an error is returned.
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl TryInto<Title, Error = ValidationError>,
    ) -> CatalogResult<ArticleId> {
        let title: Title = match title.try_into() {
            Ok(title) => title,
            Err(err) => {
                debug!(
                    "event=article_create module=catalog status=rejected field={}",
                    err.field()
                );
                return Err(err.into());
            }
        };
        let author_entry = self
            .authors
            .get_mut(&author)
            .ok_or(CatalogError::AuthorNotFound(author))?;
        let magazine_entry = self
            .magazines
            .get_mut(&magazine)
            .ok_or(CatalogError::MagazineNotFound(magazine))?;

        let article = Article::new(author, magazine, title);
        let id = article.id();
        author_entry.add_article(&article);
        magazine_entry.add_article(&article);
        self.articles.insert(id, article);

        debug!(
            "event=article_create module=catalog status=ok article={id} author={author} magazine={magazine}"
        );
        Ok(id)
    }

    /// Registers an article this catalog owns with `magazine`.
    ///
    /// Returns `false` when the magazine already lists the article.
    ///
    /// # Errors
    /// - `MagazineNotFound` / `ArticleNotFound` for handles outside this catalog.
    pub fn register_article(
        &mut self,
        magazine: MagazineId,
        article_id: ArticleId,
    ) -> CatalogResult<bool> {
        let article = self
            .articles
            .get(&article_id)
            .ok_or(CatalogError::ArticleNotFound(article_id))?;
        let magazine_entry = self
            .magazines
            .get_mut(&magazine)
            .ok_or(CatalogError::MagazineNotFound(magazine))?;

        let inserted = magazine_entry.add_article(article);
        debug!(
            "event=article_register module=catalog status=ok article={article_id} magazine={magazine} inserted={inserted}"
        );
        Ok(inserted)
    }

    /// Records an article this catalog owns against `author`.
    ///
    /// Articles are not deduplicated per author.
    ///
    /// # Errors
    /// - `AuthorNotFound` / `ArticleNotFound` for handles outside this catalog.
    pub fn register_authored_article(
        &mut self,
        author: AuthorId,
        article_id: ArticleId,
    ) -> CatalogResult<()> {
        let article = self
            .articles
            .get(&article_id)
            .ok_or(CatalogError::ArticleNotFound(article_id))?;
        let author_entry = self
            .authors
            .get_mut(&author)
            .ok_or(CatalogError::AuthorNotFound(author))?;

        author_entry.add_article(article);
        debug!(
            "event=article_register module=catalog status=ok article={article_id} author={author}"
        );
        Ok(())
    }

    pub fn author(&self, id: AuthorId) -> Option<AuthorView<'_>> {
        self.authors.get(&id).map(|author| AuthorView {
            catalog: self,
            author,
        })
    }

    pub fn magazine(&self, id: MagazineId) -> Option<MagazineView<'_>> {
        self.magazines.get(&id).map(|magazine| MagazineView {
            catalog: self,
            magazine,
        })
    }

    pub fn article(&self, id: ArticleId) -> Option<ArticleView<'_>> {
        self.articles.get(&id).map(|article| ArticleView {
            catalog: self,
            article,
        })
    }

    /// Mutable author access. The only public mutator on `Author` is the
    /// name setter, which always fails.
    pub fn author_mut(&mut self, id: AuthorId) -> Option<&mut Author> {
        self.authors.get_mut(&id)
    }

    pub fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        self.magazines.get_mut(&id)
    }

    pub fn article_mut(&mut self, id: ArticleId) -> Option<&mut Article> {
        self.articles.get_mut(&id)
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
}

/// Read view over one author.
#[derive(Debug, Clone, Copy)]
pub struct AuthorView<'a> {
    catalog: &'a Catalog,
    author: &'a Author,
}

impl<'a> AuthorView<'a> {
    pub fn id(&self) -> AuthorId {
        self.author.id()
    }

    pub fn name(&self) -> &'a str {
        self.author.name()
    }

    /// Underlying entity record.
    pub fn entity(&self) -> &'a Author {
        self.author
    }

    /// Authored articles in registration order.
    pub fn articles(&self) -> &'a [ArticleId] {
        self.author.articles()
    }

    /// Magazines contributed to, without duplicates.
    pub fn magazines(&self) -> &'a [MagazineId] {
        self.author.magazines()
    }

    /// Resolved magazine views, in the same order as `magazines()`.
    pub fn magazine_views(&self) -> Vec<MagazineView<'a>> {
        self.magazines()
            .iter()
            .filter_map(|id| self.catalog.magazine(*id))
            .collect()
    }
}

/// Read view over one magazine, answering contributor queries.
#[derive(Debug, Clone, Copy)]
pub struct MagazineView<'a> {
    catalog: &'a Catalog,
    magazine: &'a Magazine,
}

impl<'a> MagazineView<'a> {
    pub fn id(&self) -> MagazineId {
        self.magazine.id()
    }

    pub fn name(&self) -> &'a str {
        self.magazine.name()
    }

    pub fn category(&self) -> &'a str {
        self.magazine.category()
    }

    pub fn entity(&self) -> &'a Magazine {
        self.magazine
    }

    /// Registered articles in registration order.
    pub fn articles(&self) -> &'a [ArticleId] {
        self.magazine.articles()
    }

    fn resolved_articles(&self) -> impl Iterator<Item = &'a Article> + 'a {
        let catalog = self.catalog;
        let magazine = self.magazine;
        magazine
            .articles()
            .iter()
            .filter_map(move |id| catalog.articles.get(id))
    }

    /// Authors with at least one article here, in first-appearance order.
    pub fn contributors(&self) -> Vec<AuthorId> {
        let mut authors = Vec::new();
        for article in self.resolved_articles() {
            let author = article.author();
            if !authors.contains(&author) {
                authors.push(author);
            }
        }
        authors
    }

    /// Titles in the same order as `articles()`.
    pub fn article_titles(&self) -> Vec<&'a str> {
        self.resolved_articles().map(Article::title).collect()
    }

    /// Authors with at least `min_articles` articles here, in
    /// first-appearance order.
    ///
    /// Authors without articles in this magazine are never returned, even for
    /// a threshold of zero.
    pub fn contributing_authors(&self, min_articles: usize) -> Vec<AuthorId> {
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        for article in self.resolved_articles() {
            *counts.entry(article.author()).or_insert(0) += 1;
        }
        self.contributors()
            .into_iter()
            .filter(|author| counts.get(author).copied().unwrap_or(0) >= min_articles)
            .collect()
    }

    /// `contributing_authors` with the default threshold of two articles.
    pub fn contributing_authors_default(&self) -> Vec<AuthorId> {
        self.contributing_authors(DEFAULT_MIN_ARTICLES)
    }
}

/// Read view over one article.
#[derive(Debug, Clone, Copy)]
pub struct ArticleView<'a> {
    catalog: &'a Catalog,
    article: &'a Article,
}

impl<'a> ArticleView<'a> {
    pub fn id(&self) -> ArticleId {
        self.article.id()
    }

    pub fn title(&self) -> &'a str {
        self.article.title()
    }

    pub fn entity(&self) -> &'a Article {
        self.article
    }

    pub fn author_id(&self) -> AuthorId {
        self.article.author()
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.article.magazine()
    }

    /// Resolved author. `None` only if the article came from another catalog.
    pub fn author(&self) -> Option<AuthorView<'a>> {
        self.catalog.author(self.article.author())
    }

    pub fn magazine(&self) -> Option<MagazineView<'a>> {
        self.catalog.magazine(self.article.magazine())
    }
}
