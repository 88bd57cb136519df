//! Async client for the Goodreads XML API.
//!
//! ```rust,no_run
//! use goodreads_api::{Client, Context};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("your-api-key")?;
//! let ctx = Context::background();
//!
//! let author = client.get_one_author(&ctx, 15388346).await?;
//! println!("{} has {} works", author.name, author.works_count);
//!
//! for work in client.search(&ctx, "kings of the wyld", 1).await? {
//!     println!("{} ({})", work.title, work.original_publication_date.year);
//! }
//! # Ok(())
//! # }
//! ```
mod client;
mod context;
mod de;
mod errors;
mod query;
mod response;
pub mod types;
pub use self::client::Client;
pub use self::context::{CancelHandle, Context};
pub use self::errors::{BuildError, ContextError, Error, RequestError, TransportFailure};
