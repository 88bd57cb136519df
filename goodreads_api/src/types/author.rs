//! Author records and the author-with-books listing.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::Book;

/// Numeric identifier for an author.
pub type AuthorID = i64;

/// An author as returned by `/author/show`, or the partial author embedded in
/// books and works.
///
/// Every field is optional on the wire. A missing value is the zero value, so
/// `works_count == 0` can mean either "no works" or "not supplied".
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Author {
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    pub id: AuthorID,

    pub name: String,

    /// Biography, usually HTML.
    pub about: String,

    pub image_url: String,
    pub small_image_url: String,
    pub large_image_url: String,

    /// Number of works credited to the author.
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    pub works_count: i64,

    pub gender: String,
    pub hometown: String,
    pub born_at: String,
    pub died_at: String,
}

/// An author together with one page of their books, from `/author/list`.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorWithBooks {
    pub author: Author,

    /// Books on the requested page, in API order. Empty when there are none.
    pub books: Vec<Book>,
}

impl Deref for AuthorWithBooks {
    type Target = Author;

    fn deref(&self) -> &Author {
        &self.author
    }
}
