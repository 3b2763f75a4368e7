//! Magazine domain model.
//!
//! # Invariants
//! - `name` is 2..=16 characters and `category` is non-empty at all times.
//! - `articles` keeps registration order and holds each article at most once.
//!
//! Cross-entity queries (contributors, titles) live on
//! [`MagazineView`](crate::catalog::MagazineView) because they need to
//! resolve article handles.

use crate::model::article::Article;
use crate::model::fields::{Category, MagazineName, ValidationError};
use crate::model::ids::{ArticleId, MagazineId};
use serde::Serialize;

/// Threshold used by `contributing_authors_default`.
pub const DEFAULT_MIN_ARTICLES: usize = 2;

/// A publication that collects articles from many authors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Magazine {
    id: MagazineId,
    name: MagazineName,
    category: Category,
    articles: Vec<ArticleId>,
}

impl Magazine {
    /// Creates a magazine with no articles.
    ///
    /// # Errors
    /// - `ValueOutOfRange` when `name` is not 2..=16 characters.
    /// - `ValueOutOfRange` when `category` is empty.
    /// - `TypeMismatch` when either field is an untyped non-string value.
    pub fn new(
        name: impl TryInto<MagazineName, Error = ValidationError>,
        category: impl TryInto<Category, Error = ValidationError>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: MagazineId::new(),
            name: name.try_into()?,
            category: category.try_into()?,
            articles: Vec::new(),
        })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn category(&self) -> &str {
        self.category.as_str()
    }

    /// Renames the magazine. On error the previous name is kept.
    pub fn set_name(
        &mut self,
        name: impl TryInto<MagazineName, Error = ValidationError>,
    ) -> Result<(), ValidationError> {
        self.name = name.try_into()?;
        Ok(())
    }

    /// Changes the category. On error the previous category is kept.
    pub fn set_category(
        &mut self,
        category: impl TryInto<Category, Error = ValidationError>,
    ) -> Result<(), ValidationError> {
        self.category = category.try_into()?;
        Ok(())
    }

    /// Registers `article` unless the same article is already present.
    ///
    /// Returns `true` when the article was appended. Callers outside the
    /// crate go through `Catalog::register_article`, which only accepts
    /// articles the catalog owns.
    pub(crate) fn add_article(&mut self, article: &Article) -> bool {
        let id = article.id();
        if self.articles.contains(&id) {
            return false;
        }
        self.articles.push(id);
        true
    }

    /// Registered articles in registration order.
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }
}
