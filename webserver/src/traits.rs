//! Storage trait definition for dependency injection
//!
//! Handlers only see this trait so they can be tested against a mock store

use async_trait::async_trait;
use shared::{DateRange, PrecipitationByDate, TemperatureObservation, TemperatureStats};

use crate::error::WebServerResult;

/// Read-only access to the climate dataset.
///
/// Each call acquires its own storage handle and releases it before
/// returning, on success and on error alike.
#[mockall::automock]
#[async_trait]
pub trait ClimateStore: Send + Sync {
    /// Precipitation for every measurement in the trailing year before the
    /// latest observed date. Empty when there are no measurements.
    async fn precipitation_last_year(&self) -> WebServerResult<PrecipitationByDate>;

    /// Every station identifier in storage order
    async fn station_ids(&self) -> WebServerResult<Vec<String>>;

    /// Trailing-year temperature readings of the station with the most
    /// measurements. Ties go to whichever station storage yields first.
    async fn most_active_temperatures(&self) -> WebServerResult<Vec<TemperatureObservation>>;

    /// Min/avg/max temperature over an inclusive date range
    async fn temperature_stats(&self, range: DateRange) -> WebServerResult<TemperatureStats>;
}
