//! Calendar-day keys.
//!
//! Every date-time is reduced to its calendar day in its own time zone, with
//! the time of day dropped. The same rule is used when storing and when
//! looking up, so two instants on the same local day always share a key.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::DATE_KEY_FORMAT;
use crate::error::DaybookError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn from_date(date: NaiveDate) -> Self {
        DateKey(date)
    }

    /// Key for the local calendar day of `datetime` in its own zone.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        DateKey(datetime.date_naive())
    }

    /// Today's key as seen from `tz`.
    pub fn today_in<Tz: TimeZone>(tz: &Tz) -> Self {
        Self::from_datetime(&Utc::now().with_timezone(tz))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn succ(&self) -> Self {
        DateKey(self.0.succ_opt().unwrap_or(self.0))
    }

    pub fn pred(&self) -> Self {
        DateKey(self.0.pred_opt().unwrap_or(self.0))
    }
}

impl FromStr for DateKey {
    type Err = DaybookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_KEY_FORMAT)
            .map(DateKey)
            .map_err(|_| DaybookError::InvalidDate(s.to_string()))
    }
}

impl TryFrom<String> for DateKey {
    type Error = DaybookError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_same_day_different_times_share_key() {
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let morning = tz.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let night = tz.with_ymd_and_hms(2024, 6, 1, 23, 59, 59).unwrap();

        assert_eq!(DateKey::from_datetime(&morning), DateKey::from_datetime(&night));
        assert_eq!(DateKey::from_datetime(&night).to_string(), "2024-06-01");
    }

    #[test]
    fn test_key_uses_local_day_not_utc_day() {
        // 00:30 in UTC+9 is still the previous day in UTC
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let early = tz.with_ymd_and_hms(2024, 6, 1, 0, 30, 0).unwrap();

        assert_eq!(DateKey::from_datetime(&early).to_string(), "2024-06-01");
        assert_eq!(
            DateKey::from_datetime(&early.with_timezone(&Utc)).to_string(),
            "2024-05-31"
        );
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let key: DateKey = "2024-02-29".parse().unwrap();
        let again: DateKey = key.to_string().parse().unwrap();
        assert_eq!(key, again);

        let midnight = key.date().and_hms_opt(0, 0, 0).unwrap().and_utc();
        assert_eq!(DateKey::from_datetime(&midnight), key);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("2024-13-01".parse::<DateKey>().is_err());
        assert!("2024/06/01".parse::<DateKey>().is_err());
        assert!("".parse::<DateKey>().is_err());
    }

    #[test]
    fn test_succ_and_pred_cross_month() {
        let key: DateKey = "2024-06-30".parse().unwrap();
        assert_eq!(key.succ().to_string(), "2024-07-01");
        assert_eq!(key.succ().pred(), key);
    }

    #[test]
    fn test_serializes_as_string() {
        let key: DateKey = "2024-06-01".parse().unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2024-06-01\"");
        let back: DateKey = serde_json::from_str("\"2024-06-01\"").unwrap();
        assert_eq!(back, key);
    }
}
