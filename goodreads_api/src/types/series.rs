//! Series of works.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::Work;

/// Numeric identifier for a series.
pub type SeriesID = i64;

/// Series metadata, without its works.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Series {
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    pub id: SeriesID,

    pub title: String,
    pub description: String,
    pub note: String,

    /// Number of works in the series, including omnibuses and companions.
    #[serde(deserialize_with = "crate::de::int_or_zero")]
    pub series_works_count: i64,

    #[serde(deserialize_with = "crate::de::int_or_zero")]
    pub primary_work_count: i64,

    /// Whether works carry a position number within the series.
    #[serde(deserialize_with = "crate::de::bool_or_false")]
    pub numbered: bool,
}

/// A series together with one page of its works, from `/series/show`.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesWithWorks {
    pub series: Series,

    /// Works on the requested page, in series order. Empty when there are none.
    pub works: Vec<Work>,
}

impl Deref for SeriesWithWorks {
    type Target = Series;

    fn deref(&self) -> &Series {
        &self.series
    }
}
