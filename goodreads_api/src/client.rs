//! HTTP client for the Goodreads XML API.

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    context::Context,
    errors::{BuildError, RequestError, TransportFailure},
    query::QueryParams,
    response::{
        AuthorListResponse, AuthorShowResponse, BookShowResponse, SearchResponse,
        SeriesForWorkResponse, SeriesShowResponse,
    },
    types::{
        Author, AuthorID, AuthorWithBooks, Book, BookID, Series, SeriesID, SeriesWithWorks, Work,
        WorkID,
    },
    Error,
};

/// Production API domain.
const DEFAULT_DOMAIN: &str = "https://www.goodreads.com";

/// Response format requested from the API.
const FORMAT: &str = "xml";

/// Ceiling on a whole request, connect and body included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("goodreads_api/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Goodreads XML API.
///
/// Holds the API key and a pooled `reqwest::Client`. Cloning is cheap and
/// clones share the connection pool. Calls take `&self` and keep no state
/// between them, so one client can serve concurrent callers.
#[derive(Clone)]
pub struct Client {
    api_key: String,
    format: &'static str,
    domain: String,
    http: reqwest::Client,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("format", &self.format)
            .field("domain", &self.domain)
            .finish()
    }
}

impl Client {
    /// Creates a client for the production API authenticated with `api_key`.
    pub fn new(api_key: impl Into<String>) -> Result<Self, BuildError> {
        Self::with_domain(api_key, DEFAULT_DOMAIN)
    }

    /// Creates a client pointing at a custom domain. Used for testing with wiremock.
    pub(crate) fn with_domain(
        api_key: impl Into<String>,
        domain: &str,
    ) -> Result<Self, BuildError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                BuildError::Http(e)
            })?;
        Ok(Self {
            api_key: api_key.into(),
            format: FORMAT,
            domain: domain.to_string(),
            http,
        })
    }

    fn get_url(&self, path: &str, query: &QueryParams) -> Result<Url, RequestError> {
        let raw = format!(
            "{}/{}",
            self.domain.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let url = Url::parse(&raw).map_err(|e| {
            tracing::error!("Invalid URL constructed from {:?}: {}", path, e);
            RequestError::UrlBuild(e)
        })?;
        Ok(query.add_to_url(&url))
    }

    /// Sends one authenticated GET to `path` and decodes the XML body as `T`.
    ///
    /// `key` and `format` are always set by the client, replacing any value
    /// the caller put in `query`.
    pub(crate) async fn get<T>(
        &self,
        ctx: &Context,
        path: &str,
        mut query: QueryParams,
    ) -> Result<T, RequestError>
    where
        T: DeserializeOwned,
    {
        query.set("key", &self.api_key).set("format", self.format);

        let url = self.get_url(path, &query)?;
        let path = url.path().to_string();

        let request = self
            .http
            .request(Method::GET, url)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build request for '{}': {}", path, e);
                RequestError::RequestBuild {
                    path: path.clone(),
                    source: e,
                }
            })?;

        tracing::debug!("GET {}", path);

        let round_trip = async {
            let resp = self.http.execute(request).await?;
            let status = resp.status();
            let body = resp.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };
        let outcome = tokio::select! {
            biased;
            reason = ctx.done() => Err(TransportFailure::Context(reason)),
            res = round_trip => res.map_err(TransportFailure::Http),
        };
        let (status, body) = outcome.map_err(|e| {
            tracing::error!("Request failed for '{}': {}", path, e);
            RequestError::Transport {
                path: path.clone(),
                source: e,
            }
        })?;

        if status.as_u16() >= 400 {
            tracing::error!(
                "Request failed for '{}' with status {}: {}",
                path,
                status,
                truncate_body(&body)
            );
            return Err(RequestError::HttpStatus { path, status });
        }

        let parsed = decode::<T>(&body).map_err(|e| {
            tracing::error!(
                "Failed to decode response for '{}': {} | body: {}",
                path,
                e,
                truncate_body(&body)
            );
            RequestError::Decode {
                path: path.clone(),
                source: e,
            }
        })?;

        tracing::debug!("Decoded response for '{}'", path);
        Ok(parsed)
    }

    /// Finds works by title, author or ISBN.
    ///
    /// Pages 0 and 1 both return the first page of results.
    pub async fn search(&self, ctx: &Context, query: &str, page: i64) -> Result<Vec<Work>, Error> {
        let params = QueryParams::new().with("q", query).with("page", page);
        self.get::<SearchResponse>(ctx, "/search/index", params)
            .await
            .map(Vec::from)
            .map_err(|e| Error::new(format!("'{}' search at page {} failed", query, page), e))
    }

    /// Fetches the details of one author.
    pub async fn get_one_author(&self, ctx: &Context, author_id: AuthorID) -> Result<Author, Error> {
        let params = QueryParams::new().with("id", author_id);
        self.get::<AuthorShowResponse>(ctx, "/author/show", params)
            .await
            .map(Author::from)
            .map_err(|e| Error::new(format!("failed to get the author #{}", author_id), e))
    }

    /// Fetches an author and one page of their books.
    ///
    /// Pages 0 and 1 are the same page. Books are paginated once an author
    /// has more than about a hundred of them.
    pub async fn get_author_books(
        &self,
        ctx: &Context,
        author_id: AuthorID,
        page: i64,
    ) -> Result<AuthorWithBooks, Error> {
        let params = QueryParams::new().with("id", author_id).with("page", page);
        self.get::<AuthorListResponse>(ctx, "/author/list", params)
            .await
            .map(AuthorWithBooks::from)
            .map_err(|e| {
                Error::new(
                    format!(
                        "failed to get the books for the author #{} in page #{}",
                        author_id, page
                    ),
                    e,
                )
            })
    }

    /// Fetches one book (edition) by its numeric id.
    pub async fn get_one_book(&self, ctx: &Context, book_id: BookID) -> Result<Book, Error> {
        let params = QueryParams::new().with("id", book_id);
        self.get::<BookShowResponse>(ctx, "/book/show", params)
            .await
            .map(Book::from)
            .map_err(|e| Error::new(format!("failed to get the book #{}", book_id), e))
    }

    /// Lists every series a work belongs to.
    pub async fn get_all_series_for_work(
        &self,
        ctx: &Context,
        work_id: WorkID,
    ) -> Result<Vec<Series>, Error> {
        self.get::<SeriesForWorkResponse>(
            ctx,
            format!("/series/work/{}", work_id).as_str(),
            QueryParams::new(),
        )
        .await
        .map(Vec::from)
        .map_err(|e| Error::new(format!("failed to get the series for the work #{}", work_id), e))
    }

    /// Fetches a series and one page of its works.
    ///
    /// Pages 0 and 1 are the same page. Works are paginated once a series
    /// has more than about a hundred of them.
    pub async fn get_one_series(
        &self,
        ctx: &Context,
        series_id: SeriesID,
        page: i64,
    ) -> Result<SeriesWithWorks, Error> {
        let params = QueryParams::new().with("page", page);
        self.get::<SeriesShowResponse>(ctx, format!("/series/show/{}", series_id).as_str(), params)
            .await
            .map(SeriesWithWorks::from)
            .map_err(|e| {
                Error::new(
                    format!(
                        "failed to get the works for the series #{} in page #{}",
                        series_id, page
                    ),
                    e,
                )
            })
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, quick_xml::DeError> {
    if body.trim().is_empty() {
        return Err(serde::de::Error::custom("unexpected end of input"));
    }
    quick_xml::de::from_str::<T>(body)
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body;
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
