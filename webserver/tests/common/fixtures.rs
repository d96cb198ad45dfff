//! Test fixtures and data for webserver tests
//!
//! A miniature of the Hawaii dataset where the three stations have 5, 9 and
//! 2 measurements respectively and the latest date is 2017-08-23.

use climate_webserver::{Measurement, Station};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const STATION_A: &'static str = "USC00519397";
    pub const STATION_B: &'static str = "USC00519281";
    pub const STATION_C: &'static str = "USC00513117";

    /// Latest date in the whole dataset and its trailing-year cutoff
    pub const LATEST_DATE: &'static str = "2017-08-23";
    pub const CUTOFF_DATE: &'static str = "2016-08-23";

    /// Latest date of station B and its trailing-year cutoff
    pub const STATION_B_LATEST: &'static str = "2017-08-18";
    pub const STATION_B_CUTOFF: &'static str = "2016-08-18";

    pub fn stations() -> Vec<Station> {
        vec![
            station(Self::STATION_A, "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
            station(Self::STATION_B, "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
            station(Self::STATION_C, "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
        ]
    }

    pub fn measurements() -> Vec<Measurement> {
        vec![
            // Station A: 5 rows
            measurement(Self::STATION_A, "2015-06-01", Some(0.1), 70.0),
            measurement(Self::STATION_A, "2016-08-22", Some(0.4), 80.0),
            measurement(Self::STATION_A, "2016-08-23", None, 81.0),
            measurement(Self::STATION_A, "2017-02-01", Some(0.0), 58.0),
            measurement(Self::STATION_A, "2017-08-23", Some(0.08), 82.0),
            // Station B: 9 rows, two on the same date
            measurement(Self::STATION_B, "2016-08-17", Some(1.2), 77.0),
            measurement(Self::STATION_B, "2016-08-18", Some(0.9), 78.0),
            measurement(Self::STATION_B, "2016-12-01", Some(0.3), 65.0),
            measurement(Self::STATION_B, "2017-01-01", Some(0.0), 62.0),
            measurement(Self::STATION_B, "2017-03-15", None, 68.0),
            measurement(Self::STATION_B, "2017-06-01", Some(0.02), 87.0),
            measurement(Self::STATION_B, "2017-08-01", Some(0.5), 79.0),
            measurement(Self::STATION_B, "2017-08-18", Some(0.06), 80.0),
            measurement(Self::STATION_B, "2017-08-18", Some(0.06), 81.0),
            // Station C: 2 rows, one colliding with station B's latest date
            measurement(Self::STATION_C, "2010-01-01", Some(0.2), 50.0),
            measurement(Self::STATION_C, "2017-08-18", Some(0.0), 76.0),
        ]
    }

    /// Temperatures of every measurement with `start <= date` (and
    /// `date <= end` when given)
    pub fn temperatures_between(start: &str, end: Option<&str>) -> Vec<f64> {
        Self::measurements()
            .into_iter()
            .filter(|m| m.date.as_str() >= start && end.is_none_or(|end| m.date.as_str() <= end))
            .map(|m| m.tobs)
            .collect()
    }
}

fn station(id: &str, name: &str, latitude: f64, longitude: f64, elevation: f64) -> Station {
    Station {
        station: id.to_string(),
        name: name.to_string(),
        latitude,
        longitude,
        elevation,
    }
}

fn measurement(station: &str, date: &str, prcp: Option<f64>, tobs: f64) -> Measurement {
    Measurement {
        station: station.to_string(),
        date: date.to_string(),
        prcp,
        tobs,
    }
}
