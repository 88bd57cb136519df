//! Books: a specific edition of a work.

use serde::Serialize;

use super::{Author, PublicationDate, Work};

/// Numeric identifier for a book (edition).
pub type BookID = i64;

/// A book as returned by `/book/show` and in author listings.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Book {
    pub id: BookID,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub small_image_url: String,
    pub num_pages: i64,
    pub format: String,
    pub edition_information: String,
    pub publisher: String,

    /// The work this edition belongs to.
    pub work: Work,

    /// Credited authors in API order. Duplicates are kept.
    pub authors: Vec<Author>,

    pub publication_date: PublicationDate,
}
