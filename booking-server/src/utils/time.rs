//! 日期/时间解析与计算
//!
//! Wire 格式: `date` = YYYY-MM-DD, `time` = HH:MM (HH:MM:SS 也接受)。
//! 预约时刻在库里另存为 epoch 毫秒 (`start_at`)，重叠计数用整数比较。

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use shared::AppError;

/// Parse a wire-format calendar date (YYYY-MM-DD)
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date (expected YYYY-MM-DD): {value}")))
}

/// Parse a wire-format time of day (HH:MM, seconds tolerated)
pub fn parse_time(value: &str) -> Result<NaiveTime, AppError> {
    let v = value.trim();
    NaiveTime::parse_from_str(v, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(v, "%H:%M:%S"))
        .map_err(|_| AppError::validation(format!("Invalid time (expected HH:MM): {value}")))
}

/// Epoch milliseconds of a reservation slot start
///
/// Naive wall-clock instants are interpreted uniformly; only differences
/// matter for overlap arithmetic, so no timezone conversion is applied.
pub fn slot_start_millis(date: NaiveDate, time: NaiveTime) -> i64 {
    NaiveDateTime::new(date, time).and_utc().timestamp_millis()
}

/// Today's calendar date in the server's local timezone (YYYY-MM-DD)
pub fn today_string() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Milliseconds until the next local wall-clock occurrence of hour:minute
///
/// Always strictly positive: if the moment has already passed today, the
/// next occurrence is tomorrow.
pub fn ms_until_next(hour: u32, minute: u32) -> u64 {
    let target_time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
    let now = Local::now().naive_local();
    let mut target = NaiveDateTime::new(now.date(), target_time);
    if target <= now {
        target = target + chrono::Duration::days(1);
    }
    (target - now).num_milliseconds().max(1) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert!(parse_date("01/01/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(
            parse_time("18:00").unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap()
        );
        assert_eq!(
            parse_time("18:30:00").unwrap(),
            NaiveTime::from_hms_opt(18, 30, 0).unwrap()
        );
        assert!(parse_time("6pm").is_err());
        assert!(parse_time("25:00").is_err());
    }

    #[test]
    fn test_slot_start_millis_ordering() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let early = slot_start_millis(date, NaiveTime::from_hms_opt(18, 0, 0).unwrap());
        let late = slot_start_millis(date, NaiveTime::from_hms_opt(20, 0, 0).unwrap());
        assert_eq!(late - early, 2 * 60 * 60 * 1000);
    }

    #[test]
    fn test_ms_until_next_positive_and_bounded() {
        let ms = ms_until_next(0, 5);
        assert!(ms > 0);
        assert!(ms <= 24 * 60 * 60 * 1000);
    }
}
