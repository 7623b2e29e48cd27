// Time-of-day helpers
// Minutes-since-midnight formatting for export and logs

use chrono::NaiveTime;

use crate::models::interval::Minutes;

/// `"hhmm"`, the format the schedule generator parses
pub fn format_hhmm(minutes: Minutes) -> String {
    format!("{:02}{:02}", minutes / 60, minutes % 60)
}

/// `"8:30"` / `"20:30"`, or `"8:30 PM"` style when `twelve_hour` is set
pub fn format_clock(minutes: Minutes, twelve_hour: bool) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if !twelve_hour {
        return format!("{}:{:02}", hours, mins);
    }
    let suffix = if hours % 24 < 12 { "AM" } else { "PM" };
    let display = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display, mins, suffix)
}

/// `None` for 24:00, which chrono can't represent as a time of day
pub fn to_naive_time(minutes: Minutes) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}
