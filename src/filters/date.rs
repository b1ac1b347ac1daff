//! Date window membership for the date filter.

use time::{Duration, Month, OffsetDateTime};

use crate::{filter_state::DateFilter, zone::LocalZone};

/// The bounds a [DateFilter] selects, resolved against one fixed "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindow {
    /// `[start, end)`.
    HalfOpen {
        /// Inclusive lower bound.
        start: OffsetDateTime,
        /// Exclusive upper bound.
        end: OffsetDateTime,
    },
    /// `[start, end]`.
    Closed {
        /// Inclusive lower bound.
        start: OffsetDateTime,
        /// Inclusive upper bound.
        end: OffsetDateTime,
    },
    /// Any instant whose local month is `month`, in any year.
    Month {
        /// The month to match.
        month: Month,
        /// The zone used to find a timestamp's local month.
        zone: LocalZone,
    },
    /// Every instant.
    Unbounded,
}

impl DateWindow {
    /// Resolve `filter` against `now`, with day boundaries and months taken
    /// in `zone`.
    ///
    /// - [DateFilter::Today]: from local midnight today to local midnight
    ///   tomorrow.
    /// - [DateFilter::Week]: from local midnight seven days before today up to
    ///   and including `now` itself, not the end of today.
    /// - [DateFilter::October]: October of any year.
    /// - [DateFilter::Unrecognized]: everything.
    pub fn new(filter: DateFilter, now: OffsetDateTime, zone: LocalZone) -> Self {
        let now = zone.to_local(now);
        let today = now.date();

        match filter {
            DateFilter::Today => Self::HalfOpen {
                start: zone.start_of_day(today, now.offset()),
                end: zone.start_of_day(today + Duration::days(1), now.offset()),
            },
            DateFilter::Week => Self::Closed {
                start: zone.start_of_day(today - Duration::days(7), now.offset()),
                end: now,
            },
            DateFilter::October => Self::Month {
                month: Month::October,
                zone,
            },
            DateFilter::Unrecognized => Self::Unbounded,
        }
    }

    /// Whether `timestamp` falls inside the window.
    pub fn contains(&self, timestamp: OffsetDateTime) -> bool {
        match *self {
            Self::HalfOpen { start, end } => start <= timestamp && timestamp < end,
            Self::Closed { start, end } => start <= timestamp && timestamp <= end,
            Self::Month { month, zone } => zone.to_local(timestamp).month() == month,
            Self::Unbounded => true,
        }
    }
}

/// Whether `timestamp` is inside the window `filter` selects at `now` in
/// `zone`.
///
/// When checking many timestamps, build a [DateWindow] once instead.
pub fn matches_date_filter(
    timestamp: OffsetDateTime,
    filter: DateFilter,
    now: OffsetDateTime,
    zone: LocalZone,
) -> bool {
    DateWindow::new(filter, now, zone).contains(timestamp)
}
