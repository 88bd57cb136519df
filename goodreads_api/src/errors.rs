//! Error types for the API client.

use reqwest::StatusCode;

/// Why a [`Context`](crate::Context) ended.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    /// The context was cancelled through its [`CancelHandle`](crate::CancelHandle).
    #[error("context canceled")]
    Canceled,
    /// The context deadline passed before the request completed.
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// Underlying cause of a failed round trip.
#[derive(thiserror::Error, Debug)]
pub enum TransportFailure {
    /// Connection, timeout or body read failure reported by the HTTP client.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The caller's context ended before the response arrived.
    #[error(transparent)]
    Context(#[from] ContextError),
}

impl TransportFailure {
    /// True when the failure came from an elapsed deadline, either the
    /// context's own or the client-wide request timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            TransportFailure::Http(e) => e.is_timeout(),
            TransportFailure::Context(e) => *e == ContextError::DeadlineExceeded,
        }
    }
}

/// Errors produced by a single request against the API.
#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    /// The domain and endpoint path did not form a valid URL.
    #[error("could not build request url: {0}")]
    UrlBuild(#[source] url::ParseError),
    /// The HTTP request could not be constructed from the URL.
    #[error("failed to build request for '{path}': {source}")]
    RequestBuild {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    /// The round trip failed (network, timeout or context ended).
    #[error("request failed for '{path}': {source}")]
    Transport {
        path: String,
        #[source]
        source: TransportFailure,
    },
    /// The API answered with a status code >= 400.
    #[error("request failed for '{path}': {status}")]
    HttpStatus { path: String, status: StatusCode },
    /// The body was empty, malformed, or did not match the expected shape.
    #[error("failed to decode response for '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: quick_xml::DeError,
    },
}

impl RequestError {
    /// Endpoint path the request was sent to. `None` when the URL itself
    /// could not be built.
    pub fn path(&self) -> Option<&str> {
        match self {
            RequestError::UrlBuild(_) => None,
            RequestError::RequestBuild { path, .. }
            | RequestError::Transport { path, .. }
            | RequestError::HttpStatus { path, .. }
            | RequestError::Decode { path, .. } => Some(path),
        }
    }
}

/// Error returned by every public [`Client`](crate::Client) operation.
///
/// Carries a message naming the operation and its arguments, with the
/// [`RequestError`] kept as the source.
#[derive(thiserror::Error, Debug)]
#[error("{context}: {source}")]
pub struct Error {
    context: String,
    #[source]
    source: RequestError,
}

impl Error {
    pub(crate) fn new(context: impl Into<String>, source: RequestError) -> Self {
        Self {
            context: context.into(),
            source,
        }
    }

    /// Operation message, without the underlying cause.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The pipeline error that caused this one.
    pub fn kind(&self) -> &RequestError {
        &self.source
    }

    /// Consumes the error, returning the pipeline error that caused it.
    pub fn into_kind(self) -> RequestError {
        self.source
    }

    /// The request URL could not be built.
    pub fn is_url_build(&self) -> bool {
        matches!(self.source, RequestError::UrlBuild(_))
    }

    /// The HTTP request could not be built from the URL.
    pub fn is_request_build(&self) -> bool {
        matches!(self.source, RequestError::RequestBuild { .. })
    }

    /// The round trip did not complete, including timeouts and ended contexts.
    pub fn is_transport(&self) -> bool {
        matches!(self.source, RequestError::Transport { .. })
    }

    /// The response body was not the expected XML.
    pub fn is_decode(&self) -> bool {
        matches!(self.source, RequestError::Decode { .. })
    }

    /// HTTP status of the response, if the API rejected the request.
    pub fn status(&self) -> Option<StatusCode> {
        match &self.source {
            RequestError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while constructing a [`Client`](crate::Client).
#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
