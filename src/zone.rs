//! The local time zone that day boundaries, months and displayed times use.

use std::fmt;

use time::{Date, OffsetDateTime, Time, UtcOffset};
use time_tz::{Offset, TimeZone, Tz};

/// Either a fixed UTC offset or a named timezone with daylight saving rules.
///
/// A named zone is consulted at each timestamp's own instant, so a
/// transaction from the summer is shown in summer time even when viewed in
/// the winter.
#[derive(Clone, Copy)]
pub enum LocalZone {
    /// The same offset at every instant.
    Fixed(UtcOffset),
    /// A canonical timezone, e.g. "America/New_York".
    Named(&'static Tz),
}

impl LocalZone {
    /// Look up a canonical timezone name, e.g. "America/Bogota".
    pub fn named(canonical_timezone: &str) -> Option<Self> {
        time_tz::timezones::get_by_name(canonical_timezone).map(Self::Named)
    }

    /// The UTC offset in effect at the instant `at`.
    pub fn offset_at(&self, at: OffsetDateTime) -> UtcOffset {
        match self {
            Self::Fixed(offset) => *offset,
            Self::Named(tz) => tz.get_offset_utc(&at).to_utc(),
        }
    }

    /// `timestamp` shifted so that its calendar fields are local.
    pub fn to_local(&self, timestamp: OffsetDateTime) -> OffsetDateTime {
        timestamp.to_offset(self.offset_at(timestamp))
    }

    /// The current instant in local time.
    pub fn now(&self) -> OffsetDateTime {
        self.to_local(OffsetDateTime::now_utc())
    }

    /// The instant local midnight begins on `date`.
    ///
    /// `hint` is an offset near that instant, usually the offset of "now".
    /// On a day where the clocks change the offset is re-read at the first
    /// guess, which lands within an hour of the real midnight.
    pub fn start_of_day(&self, date: Date, hint: UtcOffset) -> OffsetDateTime {
        let midnight = date.with_time(Time::MIDNIGHT);
        let guess = midnight.assume_offset(hint);

        midnight.assume_offset(self.offset_at(guess))
    }
}

impl From<UtcOffset> for LocalZone {
    fn from(offset: UtcOffset) -> Self {
        Self::Fixed(offset)
    }
}

impl PartialEq for LocalZone {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Fixed(left), Self::Fixed(right)) => left == right,
            (Self::Named(left), Self::Named(right)) => left.name() == right.name(),
            _ => false,
        }
    }
}

impl Eq for LocalZone {}

impl fmt::Debug for LocalZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(offset) => f.debug_tuple("Fixed").field(offset).finish(),
            Self::Named(tz) => f.debug_tuple("Named").field(&tz.name()).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime, offset};

    use super::LocalZone;

    fn new_york() -> LocalZone {
        LocalZone::named("America/New_York").unwrap()
    }

    #[test]
    fn fixed_offset_is_the_same_all_year() {
        let zone = LocalZone::from(offset!(-5));

        assert_eq!(zone.offset_at(datetime!(2025-01-15 12:00 UTC)), offset!(-5));
        assert_eq!(zone.offset_at(datetime!(2025-07-15 12:00 UTC)), offset!(-5));
    }

    #[test]
    fn named_zone_follows_daylight_saving() {
        let zone = new_york();

        assert_eq!(zone.offset_at(datetime!(2025-12-15 12:00 UTC)), offset!(-5));
        assert_eq!(zone.offset_at(datetime!(2025-10-01 04:30 UTC)), offset!(-4));
    }

    #[test]
    fn to_local_uses_the_timestamps_own_offset() {
        let local = new_york().to_local(datetime!(2025-10-01 04:30 UTC));

        assert_eq!(local, datetime!(2025-10-01 00:30 -4));
        assert_eq!(local.day(), 1);
    }

    #[test]
    fn start_of_day_uses_the_offset_of_that_day() {
        // Viewed from December (-5), midnight on 1 October is still EDT.
        let start = new_york().start_of_day(date!(2025-10-01), offset!(-5));

        assert_eq!(start, datetime!(2025-10-01 00:00 -4));
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(LocalZone::named("Mars/Olympus_Mons"), None);
    }

    #[test]
    fn zones_compare_by_name() {
        assert_eq!(new_york(), new_york());
        assert_ne!(new_york(), LocalZone::named("America/Bogota").unwrap());
        assert_ne!(new_york(), LocalZone::from(offset!(-5)));
    }
}
