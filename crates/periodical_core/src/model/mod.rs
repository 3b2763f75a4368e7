//! Domain model for authors, magazines and the articles linking them.
//!
//! # Responsibility
//! - Define the entity records and their validated attributes.
//! - Keep each attribute rule in one place (`fields`).
//!
//! # Invariants
//! - Entities refer to each other through typed handles, never by ownership.
//! - No entity is deleted or unlinked once registered.

pub mod article;
pub mod author;
pub mod fields;
pub mod ids;
pub mod magazine;
