//! Author domain model.
//!
//! # Responsibility
//! - Hold the write-once author name.
//! - Track authored articles and the magazines they were published in.
//!
//! # Invariants
//! - `name` is non-empty and never reassigned.
//! - `articles` keeps registration order.
//! - `magazines` holds each magazine at most once, in first-contribution order.

use crate::model::article::Article;
use crate::model::fields::{AuthorName, Field, ValidationError};
use crate::model::ids::{ArticleId, AuthorId, MagazineId};
use serde::Serialize;

/// A writer contributing articles to magazines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: AuthorId,
    name: AuthorName,
    articles: Vec<ArticleId>,
    magazines: Vec<MagazineId>,
}

impl Author {
    /// Creates an author with no articles.
    ///
    /// # Errors
    /// - `TypeMismatch` when `name` is an untyped non-string value.
    /// - `ValueOutOfRange` when `name` is empty.
    pub fn new(
        name: impl TryInto<AuthorName, Error = ValidationError>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: AuthorId::new(),
            name: name.try_into()?,
            articles: Vec::new(),
            magazines: Vec::new(),
        })
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Always fails: the name is set once at construction.
    pub fn set_name(
        &mut self,
        _name: impl TryInto<AuthorName, Error = ValidationError>,
    ) -> Result<(), ValidationError> {
        Err(ValidationError::ImmutableFieldReassignment {
            field: Field::AuthorName,
        })
    }

    /// Records `article` as written by this author.
    ///
    /// Does not deduplicate articles; `Catalog::create_article` calls this
    /// exactly once per article. The article's magazine is added to
    /// `magazines` if new. Callers outside the crate go through
    /// `Catalog::register_authored_article`, which only accepts articles the
    /// catalog owns.
    pub(crate) fn add_article(&mut self, article: &Article) {
        self.articles.push(article.id());
        let magazine = article.magazine();
        if !self.magazines.contains(&magazine) {
            self.magazines.push(magazine);
        }
    }

    /// Authored articles in registration order.
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    /// Magazines this author has contributed to, without duplicates.
    pub fn magazines(&self) -> &[MagazineId] {
        &self.magazines
    }
}
