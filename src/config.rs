//! Runtime configuration for the dashboard.

use std::path::PathBuf;

use time::UtcOffset;

use crate::{Error, source::DEFAULT_ENDPOINT, zone::LocalZone};

/// Where to fetch from, where to keep the filter selection, and which local
/// time to filter in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The URL of the transactions endpoint.
    pub endpoint: String,
    /// File path to the SQLite database holding the filter selection.
    pub state_db_path: PathBuf,
    /// A canonical timezone name, e.g. "America/Bogota". `None` uses the
    /// system's current local offset.
    pub timezone: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            state_db_path: PathBuf::from("dashboard-state.db"),
            timezone: None,
        }
    }
}

impl Config {
    /// The zone that defines "local" day boundaries, months and times.
    ///
    /// A configured timezone keeps its daylight saving rules. Without one
    /// this is the system's current offset, or UTC if the system offset
    /// cannot be determined.
    ///
    /// # Errors
    /// Returns [Error::UnknownTimezone] if the configured name is not a
    /// canonical timezone.
    pub fn local_zone(&self) -> Result<LocalZone, Error> {
        match &self.timezone {
            Some(name) => {
                LocalZone::named(name).ok_or_else(|| Error::UnknownTimezone(name.clone()))
            }
            None => {
                let offset = UtcOffset::current_local_offset().unwrap_or_else(|error| {
                    tracing::warn!("Could not determine the local offset, using UTC: {error}");
                    UtcOffset::UTC
                });

                Ok(LocalZone::Fixed(offset))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{datetime, offset};

    use super::Config;
    use crate::{Error, zone::LocalZone};

    fn config_with_timezone(name: &str) -> Config {
        Config {
            timezone: Some(name.to_owned()),
            ..Config::default()
        }
    }

    #[test]
    fn bogota_is_utc_minus_five() {
        let zone = config_with_timezone("America/Bogota").local_zone().unwrap();

        assert_eq!(zone.offset_at(datetime!(2026-10-19 12:00 UTC)), offset!(-5));
    }

    #[test]
    fn configured_timezone_keeps_daylight_saving() {
        let zone = config_with_timezone("Pacific/Auckland").local_zone().unwrap();

        assert_eq!(zone.offset_at(datetime!(2026-01-15 00:00 UTC)), offset!(+13));
        assert_eq!(zone.offset_at(datetime!(2026-07-15 00:00 UTC)), offset!(+12));
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        let result = config_with_timezone("Mars/Olympus_Mons").local_zone();

        assert!(matches!(result, Err(Error::UnknownTimezone(name)) if name == "Mars/Olympus_Mons"));
    }

    #[test]
    fn without_timezone_the_zone_is_fixed() {
        let zone = Config::default().local_zone().unwrap();

        assert!(matches!(zone, LocalZone::Fixed(_)));
    }
}
