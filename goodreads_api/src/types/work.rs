//! Works: the abstract creative work behind every edition.

use serde::Serialize;

use super::{Author, BookID, OriginalPublicationDate};

/// Numeric identifier for a work.
pub type WorkID = i64;

/// A work as listed in search results and series.
///
/// Title, images and author come from the work's best-known edition. When a
/// work is embedded in a book, usually only the ids and the original
/// publication date are filled in.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Work {
    pub work_id: WorkID,

    /// Id of the best-known edition, read from `best_book>id`.
    pub book_id: BookID,

    /// Id of the best-known edition, read from `best_book_id`. Books embed
    /// this one instead of a `best_book` element.
    pub best_book_id: BookID,

    pub original_title: String,
    pub title: String,
    pub image_url: String,

    /// Often missing.
    pub small_image_url: String,

    pub author: Author,

    /// Often partial: a year with no month or day is common.
    pub original_publication_date: OriginalPublicationDate,
}
