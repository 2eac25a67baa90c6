use chrono::DateTime;

pub use web_time::Instant as AppInstant;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    pub const INTRADAY_TIME_FORMAT: &str = "%m-%d %H:%M";
    pub const FULL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

    /// Axis label for a bar timestamp. Intraday charts need the clock time.
    pub fn epoch_ms_to_axis_label(epoch_ms: i64, intraday: bool) -> String {
        let format = if intraday {
            Self::INTRADAY_TIME_FORMAT
        } else {
            Self::STANDARD_TIME_FORMAT
        };
        Self::format_epoch_ms(epoch_ms, format)
    }

    pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
        Self::format_epoch_ms(epoch_ms, Self::FULL_TIME_FORMAT)
    }

    fn format_epoch_ms(epoch_ms: i64, format: &str) -> String {
        match DateTime::from_timestamp_millis(epoch_ms) {
            Some(dt) => dt.format(format).to_string(),
            None => String::from("invalid timestamp"),
        }
    }
}

pub fn format_duration(ms: i64) -> String {
    if ms < 1000 {
        return format!("{}ms", ms);
    }
    let secs = ms / 1000;
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    format!("{}m {}s", mins, secs % 60)
}
