//! Typed handles for catalog entities.
//!
//! Handles are non-owning references between entities. Each wraps a random
//! UUID, so a handle minted by one catalog never resolves in another.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub(crate) fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Underlying stable UUID.
            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Handle to an [`Author`](crate::model::author::Author).
    AuthorId
);

entity_id!(
    /// Handle to a [`Magazine`](crate::model::magazine::Magazine).
    MagazineId
);

entity_id!(
    /// Handle to an [`Article`](crate::model::article::Article).
    ArticleId
);
