mod author;
pub use self::author::{Author, AuthorID, AuthorWithBooks};

mod book;
pub use self::book::{Book, BookID};

mod date;
pub use self::date::{OriginalPublicationDate, PublicationDate};

mod series;
pub use self::series::{Series, SeriesID, SeriesWithWorks};

mod work;
pub use self::work::{Work, WorkID};
