//! Query-string parameters sent with every request.

use std::collections::BTreeMap;

use url::Url;

/// Name-to-value mapping of query parameters.
///
/// Each name holds a single value; setting a name twice keeps the last value.
/// Parameters are written to the URL sorted by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl ToString) -> &mut Self {
        self.params.insert(name.into(), value.to_string());
        self
    }

    /// Builder form of [`QueryParams::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.set(name, value);
        self
    }

    /// Replaces the URL's query string with these parameters, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.set_query(None);
        if !self.params.is_empty() {
            url.query_pairs_mut().extend_pairs(self.params.iter());
        }
        url
    }
}
