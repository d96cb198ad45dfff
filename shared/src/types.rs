//! Core shared types: query dates and API payloads

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::SharedError;

/// Wire format for every date the API accepts or emits
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date given in a request path, strictly `YYYY-MM-DD`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryDate(NaiveDate);

impl QueryDate {
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for QueryDate {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SharedError::InvalidDate { input: s.to_string() };

        // chrono accepts unpadded fields, the API does not
        let bytes = s.as_bytes();
        let well_shaped = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !well_shaped {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }
}

impl fmt::Display for QueryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Inclusive date window for temperature statistics; `end: None` is open-ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: QueryDate,
    pub end: Option<QueryDate>,
}

impl DateRange {
    pub fn starting(start: QueryDate) -> Self {
        Self { start, end: None }
    }

    pub fn between(start: QueryDate, end: QueryDate) -> Self {
        Self { start, end: Some(end) }
    }
}

/// Precipitation keyed by observation date. Later rows overwrite earlier ones
/// when several stations report on the same date.
pub type PrecipitationByDate = BTreeMap<String, Option<f64>>;

/// One temperature reading of the most-active station
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemperatureObservation {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
}

/// Min/avg/max temperature over a date window. All three are `None` when no
/// rows fall inside the window.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TemperatureStats {
    #[serde(rename = "Min Temperature")]
    pub min: Option<f64>,
    #[serde(rename = "Avg Temperature")]
    pub avg: Option<f64>,
    #[serde(rename = "Max Temperature")]
    pub max: Option<f64>,
}

impl TemperatureStats {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.avg.is_none() && self.max.is_none()
    }
}
