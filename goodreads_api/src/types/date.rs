//! Year/month/day triples as the API reports them.
//!
//! A `0` in any part means the API did not supply it. Books report their
//! edition's `publication_*` fields while works report
//! `original_publication_*`, hence two separate types.

use chrono::NaiveDate;
use serde::Serialize;

/// Publication date of a specific edition.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublicationDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// First publication date of a work, across all editions.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OriginalPublicationDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl PublicationDate {
    /// True when the API supplied at least the year.
    pub fn is_known(&self) -> bool {
        self.year != 0
    }

    /// The full calendar date, if all three parts are present and valid.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        to_naive_date(self.year, self.month, self.day)
    }
}

impl OriginalPublicationDate {
    /// True when the API supplied at least the year.
    pub fn is_known(&self) -> bool {
        self.year != 0
    }

    /// The full calendar date, if all three parts are present and valid.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        to_naive_date(self.year, self.month, self.day)
    }
}

fn to_naive_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if year == 0 || month == 0 || day == 0 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}
