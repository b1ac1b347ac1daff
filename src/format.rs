//! Local-time string forms of transaction timestamps and amounts.
//!
//! The padded forms are for display. The short date and the 12-hour time are
//! what the search predicate matches against, so changing them changes what
//! users can search for.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::OffsetDateTime;

use crate::zone::LocalZone;

/// Format `timestamp` in `zone` as `dd/mm/yyyy`.
pub fn format_date_only(timestamp: OffsetDateTime, zone: impl Into<LocalZone>) -> String {
    let local = zone.into().to_local(timestamp);

    format!(
        "{:02}/{:02}/{}",
        local.day(),
        u8::from(local.month()),
        local.year()
    )
}

/// Format `timestamp` in `zone` as a 24-hour `HH:MM`.
pub fn format_time_only(timestamp: OffsetDateTime, zone: impl Into<LocalZone>) -> String {
    let local = zone.into().to_local(timestamp);

    format!("{:02}:{:02}", local.hour(), local.minute())
}

/// Format `timestamp` in `zone` as `dd/mm/yyyy - HH:MM:SS`.
pub fn format_date_time(timestamp: OffsetDateTime, zone: impl Into<LocalZone>) -> String {
    let zone = zone.into();
    let local = zone.to_local(timestamp);

    format!(
        "{} - {:02}:{:02}:{:02}",
        format_date_only(timestamp, zone),
        local.hour(),
        local.minute(),
        local.second()
    )
}

/// The Colombian short date, `d/m/yyyy` without padding, e.g. `5/3/2024`.
pub fn format_date_short(timestamp: OffsetDateTime, zone: impl Into<LocalZone>) -> String {
    let local = zone.into().to_local(timestamp);

    format!(
        "{}/{}/{}",
        local.day(),
        u8::from(local.month()),
        local.year()
    )
}

/// The Colombian 12-hour clock time, e.g. `02:07 p. m.` or `12:30 a. m.`.
pub fn format_time_12_hour(timestamp: OffsetDateTime, zone: impl Into<LocalZone>) -> String {
    let local = zone.into().to_local(timestamp);
    let period = if local.hour() < 12 { "a. m." } else { "p. m." };
    let hour = match local.hour() % 12 {
        0 => 12,
        hour => hour,
    };

    format!("{hour:02}:{:02} {period}", local.minute())
}

/// Format an amount in minor units (cents) as whole pesos, e.g. `$25,000`.
///
/// Thousands are grouped with commas, not the Colombian `$ 25.000`.
pub fn format_currency(amount: i64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();
    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let pesos = amount as f64 / 100.0;

    if pesos == 0.0 {
        // numfmt renders zero as a bare "0"
        return "$0".to_owned();
    }

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .expect("\"$\" is a valid currency prefix")
            .precision(Precision::Decimals(0))
    });
    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .expect("\"-$\" is a valid currency prefix")
            .precision(Precision::Decimals(0))
    });

    if pesos < 0.0 {
        negative_fmt.fmt_string(pesos.abs())
    } else {
        positive_fmt.fmt_string(pesos)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{datetime, offset};

    use super::{
        format_currency, format_date_only, format_date_short, format_date_time, format_time_12_hour,
        format_time_only,
    };
    use crate::zone::LocalZone;

    #[test]
    fn date_is_zero_padded_day_month_year() {
        let timestamp = datetime!(2024-03-05 14:07:09 UTC);

        assert_eq!(format_date_only(timestamp, offset!(UTC)), "05/03/2024");
    }

    #[test]
    fn date_uses_local_calendar_day() {
        // 02:00 UTC on the 6th is still the 5th in Bogotá.
        let timestamp = datetime!(2024-03-06 02:00 UTC);

        assert_eq!(format_date_only(timestamp, offset!(-5)), "05/03/2024");
    }

    #[test]
    fn time_is_twenty_four_hour_clock() {
        let timestamp = datetime!(2024-03-05 19:07:09 UTC);

        assert_eq!(format_time_only(timestamp, offset!(-5)), "14:07");
    }

    #[test]
    fn date_time_includes_seconds() {
        let timestamp = datetime!(2024-03-05 09:07:03 UTC);

        assert_eq!(
            format_date_time(timestamp, offset!(UTC)),
            "05/03/2024 - 09:07:03"
        );
    }

    #[test]
    fn zero_currency() {
        assert_eq!(format_currency(0), "$0");
    }

    #[test]
    fn currency_has_dollar_prefix() {
        assert!(format_currency(2_500_000).starts_with('$'));
        assert!(format_currency(-2_500_000).starts_with("-$"));
    }

    #[test]
    fn short_date_is_not_padded() {
        let timestamp = datetime!(2024-03-05 19:07 UTC);

        assert_eq!(format_date_short(timestamp, offset!(-5)), "5/3/2024");
    }

    #[test]
    fn twelve_hour_time_in_the_afternoon() {
        let timestamp = datetime!(2024-03-05 19:07 UTC);

        assert_eq!(format_time_12_hour(timestamp, offset!(-5)), "02:07 p. m.");
    }

    #[test]
    fn twelve_hour_time_around_midnight_and_noon() {
        assert_eq!(
            format_time_12_hour(datetime!(2024-03-05 00:30 UTC), offset!(UTC)),
            "12:30 a. m."
        );
        assert_eq!(
            format_time_12_hour(datetime!(2024-03-05 12:05 UTC), offset!(UTC)),
            "12:05 p. m."
        );
        assert_eq!(
            format_time_12_hour(datetime!(2024-03-05 09:15 UTC), offset!(UTC)),
            "09:15 a. m."
        );
    }

    #[test]
    fn times_use_the_offset_of_their_own_instant() {
        let new_york = LocalZone::named("America/New_York").unwrap();
        let summer = datetime!(2025-07-01 16:00 UTC);
        let winter = datetime!(2025-12-01 17:00 UTC);

        assert_eq!(format_time_only(summer, new_york), "12:00");
        assert_eq!(format_time_only(winter, new_york), "12:00");
        assert_eq!(format_date_time(summer, new_york), "01/07/2025 - 12:00:00");
    }
}
