//! Local date labels and timezone naming.
//!
//! The feed writes dates as "<Weekday> <month>/<day>" (e.g. "Tuesday 4/21"),
//! so today and yesterday are rendered the same way for matching.

use std::path::Path;

use chrono::{DateTime, Days, Local, NaiveDate, Utc};
use chrono_tz::Tz;

/// Today's and yesterday's date labels, upper-cased for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayContext {
    today: String,
    yesterday: String,
}

impl DayContext {
    pub fn for_date(date: NaiveDate) -> Self {
        let yesterday = date.checked_sub_days(Days::new(1)).unwrap_or(date);
        DayContext {
            today: feed_label(date),
            yesterday: feed_label(yesterday),
        }
    }

    /// Labels for the current local date
    pub fn now() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    pub fn today(&self) -> &str {
        &self.today
    }

    pub fn yesterday(&self) -> &str {
        &self.yesterday
    }
}

fn feed_label(date: NaiveDate) -> String {
    date.format("%A %-m/%-d").to_string().to_uppercase()
}

/// Abbreviation of the viewer's timezone, e.g. "EDT".
///
/// Falls back to the numeric offset when no IANA zone can be found.
pub fn timezone_abbreviation() -> String {
    match local_zone() {
        Some(tz) => abbreviation_at(tz, Utc::now()),
        None => Local::now().format("%:z").to_string(),
    }
}

fn local_zone() -> Option<Tz> {
    if let Ok(name) = std::env::var("TZ") {
        if let Ok(tz) = name.trim_start_matches(':').parse::<Tz>() {
            return Some(tz);
        }
    }
    let target = std::fs::read_link("/etc/localtime").ok()?;
    zone_from_path(&target)
}

fn zone_from_path(path: &Path) -> Option<Tz> {
    let path = path.to_str()?;
    let (_, name) = path.split_once("zoneinfo/")?;
    name.parse().ok()
}

fn abbreviation_at(tz: Tz, at: DateTime<Utc>) -> String {
    at.with_timezone(&tz).format("%Z").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_day_labels() {
        let day = DayContext::for_date(NaiveDate::from_ymd_opt(2015, 4, 21).unwrap());
        assert_eq!(day.today(), "TUESDAY 4/21");
        assert_eq!(day.yesterday(), "MONDAY 4/20");
    }

    #[test]
    fn test_yesterday_crosses_month() {
        let day = DayContext::for_date(NaiveDate::from_ymd_opt(2023, 11, 1).unwrap());
        assert_eq!(day.today(), "WEDNESDAY 11/1");
        assert_eq!(day.yesterday(), "TUESDAY 10/31");
    }

    #[test]
    fn test_zone_from_localtime_link() {
        let tz = zone_from_path(Path::new("/usr/share/zoneinfo/America/New_York"));
        assert_eq!(tz, Some(chrono_tz::America::New_York));
        assert_eq!(zone_from_path(Path::new("/etc/localtime")), None);
    }

    #[test]
    fn test_abbreviation_follows_dst() {
        let tz = chrono_tz::America::New_York;
        let winter = Utc.with_ymd_and_hms(2023, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2023, 7, 15, 12, 0, 0).unwrap();
        assert_eq!(abbreviation_at(tz, winter), "EST");
        assert_eq!(abbreviation_at(tz, summer), "EDT");
    }
}
