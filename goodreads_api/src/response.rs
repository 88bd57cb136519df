//! Wire shapes of the XML documents returned by each endpoint.
//!
//! The API nests fields that the domain types keep flat (`best_book>title`
//! on a work, `publication_year` beside a book's other fields). These
//! structs mirror the documents and convert into the public types.

use serde::Deserialize;

use crate::types::{
    Author, AuthorID, AuthorWithBooks, Book, BookID, OriginalPublicationDate, PublicationDate,
    Series, SeriesID, SeriesWithWorks, Work, WorkID,
};

/// `/search/index`: `search>results>work`.
#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct SearchResponse {
    search: SearchWire,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SearchWire {
    results: SearchResultsWire,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SearchResultsWire {
    #[serde(rename = "work")]
    works: Vec<WorkWire>,
}

impl From<SearchResponse> for Vec<Work> {
    fn from(resp: SearchResponse) -> Self {
        resp.search.results.works.into_iter().map(Work::from).collect()
    }
}

/// `/author/show`: `author`.
#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct AuthorShowResponse {
    author: Author,
}

impl From<AuthorShowResponse> for Author {
    fn from(resp: AuthorShowResponse) -> Self {
        resp.author
    }
}

/// `/author/list`: `author` with its `books>book`.
#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct AuthorListResponse {
    author: AuthorListWire,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct AuthorListWire {
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    id: AuthorID,
    name: String,
    about: String,
    image_url: String,
    small_image_url: String,
    large_image_url: String,
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    works_count: i64,
    gender: String,
    hometown: String,
    born_at: String,
    died_at: String,
    books: BooksWire,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct BooksWire {
    #[serde(rename = "book")]
    books: Vec<BookWire>,
}

impl From<AuthorListResponse> for AuthorWithBooks {
    fn from(resp: AuthorListResponse) -> Self {
        let wire = resp.author;
        AuthorWithBooks {
            author: Author {
                id: wire.id,
                name: wire.name,
                about: wire.about,
                image_url: wire.image_url,
                small_image_url: wire.small_image_url,
                large_image_url: wire.large_image_url,
                works_count: wire.works_count,
                gender: wire.gender,
                hometown: wire.hometown,
                born_at: wire.born_at,
                died_at: wire.died_at,
            },
            books: wire.books.books.into_iter().map(Book::from).collect(),
        }
    }
}

/// `/book/show`: `book`.
#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct BookShowResponse {
    book: BookWire,
}

impl From<BookShowResponse> for Book {
    fn from(resp: BookShowResponse) -> Self {
        resp.book.into()
    }
}

/// `/series/work/{id}`: `series_works>series_work>series`.
#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct SeriesForWorkResponse {
    series_works: SeriesForWorkList,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SeriesForWorkList {
    #[serde(rename = "series_work")]
    entries: Vec<SeriesForWorkEntry>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SeriesForWorkEntry {
    series: Series,
}

impl From<SeriesForWorkResponse> for Vec<Series> {
    fn from(resp: SeriesForWorkResponse) -> Self {
        resp.series_works
            .entries
            .into_iter()
            .map(|entry| entry.series)
            .collect()
    }
}

/// `/series/show/{id}`: `series` with its `series_works>series_work>work`.
#[derive(Deserialize, Default)]
#[serde(default)]
pub(crate) struct SeriesShowResponse {
    series: SeriesShowWire,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SeriesShowWire {
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    id: SeriesID,
    title: String,
    description: String,
    note: String,
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    series_works_count: i64,
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    primary_work_count: i64,
    #[serde(deserialize_with = "crate::de::bool_or_false")]
    numbered: bool,
    series_works: SeriesWorkList,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SeriesWorkList {
    #[serde(rename = "series_work")]
    entries: Vec<SeriesWorkEntry>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SeriesWorkEntry {
    work: WorkWire,
}

impl From<SeriesShowResponse> for SeriesWithWorks {
    fn from(resp: SeriesShowResponse) -> Self {
        let wire = resp.series;
        SeriesWithWorks {
            series: Series {
                id: wire.id,
                title: wire.title,
                description: wire.description,
                note: wire.note,
                series_works_count: wire.series_works_count,
                primary_work_count: wire.primary_work_count,
                numbered: wire.numbered,
            },
            works: wire
                .series_works
                .entries
                .into_iter()
                .map(|entry| Work::from(entry.work))
                .collect(),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct WorkWire {
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    id: WorkID,
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    best_book_id: BookID,
    original_title: String,
    best_book: BestBookWire,
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    original_publication_year: i32,
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    original_publication_month: u32,
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    original_publication_day: u32,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct BestBookWire {
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    id: BookID,
    title: String,
    image_url: String,
    small_image_url: String,
    author: Author,
}

impl From<WorkWire> for Work {
    fn from(wire: WorkWire) -> Self {
        Work {
            work_id: wire.id,
            book_id: wire.best_book.id,
            best_book_id: wire.best_book_id,
            original_title: wire.original_title,
            title: wire.best_book.title,
            image_url: wire.best_book.image_url,
            small_image_url: wire.best_book.small_image_url,
            author: wire.best_book.author,
            original_publication_date: OriginalPublicationDate {
                year: wire.original_publication_year,
                month: wire.original_publication_month,
                day: wire.original_publication_day,
            },
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct BookWire {
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    id: BookID,
    title: String,
    description: String,
    image_url: String,
    small_image_url: String,
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    num_pages: i64,
    format: String,
    edition_information: String,
    publisher: String,
    work: WorkWire,
    authors: AuthorsWire,
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    publication_year: i32,
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    publication_month: u32,
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    publication_day: u32,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct AuthorsWire {
    #[serde(rename = "author")]
    authors: Vec<Author>,
}

impl From<BookWire> for Book {
    fn from(wire: BookWire) -> Self {
        Book {
            id: wire.id,
            title: wire.title,
            description: wire.description,
            image_url: wire.image_url,
            small_image_url: wire.small_image_url,
            num_pages: wire.num_pages,
            format: wire.format,
            edition_information: wire.edition_information,
            publisher: wire.publisher,
            work: wire.work.into(),
            authors: wire.authors.authors,
            publication_date: PublicationDate {
                year: wire.publication_year,
                month: wire.publication_month,
                day: wire.publication_day,
            },
        }
    }
}
