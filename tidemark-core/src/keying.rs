//! Partition keying: calendar dates to stable storage keys.
//!
//! Keys are derived from calendar dates in UTC, the fixed reference
//! timezone. The mapping is deterministic and injective, so a key computed
//! today for a given date equals the key computed for that date by any
//! later process.

use chrono::{DateTime, Days, NaiveDate, Utc};
use std::fmt;

/// A stable storage key for one calendar date's partition.
///
/// Layout: `items/YYYY-MM-DD/items.json`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartitionKey(String);

impl PartitionKey {
    /// Derive the key for a calendar date.
    pub fn for_date(date: NaiveDate) -> Self {
        Self(format!("items/{}/items.json", date.format("%Y-%m-%d")))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The today/yesterday pair for one engine run.
///
/// Both dates are evaluated from a single captured reference instant, so a
/// run straddling midnight cannot see "today" and "yesterday" computed
/// from different days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    today: NaiveDate,
}

impl DayWindow {
    /// Capture the window for the given reference instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            today: instant.date_naive(),
        }
    }

    /// Capture the window for a calendar date directly.
    pub fn for_date(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Today's calendar date.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// The partition key for today.
    pub fn today_key(&self) -> PartitionKey {
        PartitionKey::for_date(self.today)
    }

    /// The partition key for yesterday.
    pub fn yesterday_key(&self) -> PartitionKey {
        // NaiveDate covers a range vastly wider than any real clock value,
        // so the subtraction cannot fail for dates that came from one.
        let yesterday = self
            .today
            .checked_sub_days(Days::new(1))
            .unwrap_or(NaiveDate::MIN);
        PartitionKey::for_date(yesterday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn key_layout_is_stable() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            PartitionKey::for_date(date).as_str(),
            "items/2024-03-07/items.json"
        );
    }

    #[test]
    fn keys_are_injective_per_date() {
        let a = PartitionKey::for_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        let b = PartitionKey::for_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_ne!(a, b);
    }

    #[test]
    fn window_derives_both_keys_from_one_instant() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 5).unwrap();
        let window = DayWindow::at(instant);

        assert_eq!(window.today_key().as_str(), "items/2024-03-01/items.json");
        assert_eq!(
            window.yesterday_key().as_str(),
            "items/2024-02-29/items.json"
        );
    }

    #[test]
    fn window_uses_utc_date_of_instant() {
        let just_before_midnight = Utc.with_ymd_and_hms(2024, 6, 15, 23, 59, 59).unwrap();
        let window = DayWindow::at(just_before_midnight);
        assert_eq!(window.today(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }
}
