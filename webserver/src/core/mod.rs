//! Core query logic independent of storage and transport

pub mod window;

pub use window::{TRAILING_MONTHS, cutoff_for_stored, parse_stored_date, trailing_year_cutoff};
