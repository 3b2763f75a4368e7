//! Article domain model.
//!
//! # Responsibility
//! - Link exactly one author and one magazine under a validated title.
//!
//! # Invariants
//! - `author` and `magazine` are fixed at construction.
//! - `title` is 5..=50 characters at all times.
//! - Articles are only minted by the catalog, which registers them with
//!   their author and magazine in the same step.

use crate::model::fields::{Title, ValidationError};
use crate::model::ids::{ArticleId, AuthorId, MagazineId};
use serde::Serialize;

/// One published piece written by an author for a magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: Title,
}

impl Article {
    pub(crate) fn new(author: AuthorId, magazine: MagazineId, title: Title) -> Self {
        Self {
            id: ArticleId::new(),
            author,
            magazine,
            title,
        }
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Replaces the title after revalidation.
    ///
    /// Accepts strings or untyped JSON values; on error the previous title is
    /// kept.
    pub fn set_title(
        &mut self,
        title: impl TryInto<Title, Error = ValidationError>,
    ) -> Result<(), ValidationError> {
        self.title = title.try_into()?;
        Ok(())
    }
}
