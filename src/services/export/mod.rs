//! Busy blocks in the shape the schedule generator expects.

use serde::{Deserialize, Serialize};

use crate::models::interval::{AvailabilityKind, DayOfWeek};
use crate::services::store::IntervalStore;
use crate::utils::time::format_hhmm;

/// A time the user can't attend class, `start_time`/`end_time` as `"hhmm"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnavailableTime {
    pub day: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
}

/// Busy blocks of the store, sorted by day then start
pub fn generation_request(store: &IntervalStore) -> Vec<UnavailableTime> {
    store
        .canonical()
        .into_iter()
        .filter(|interval| interval.kind == AvailabilityKind::Busy)
        .map(|interval| UnavailableTime {
            day: interval.day,
            start_time: format_hhmm(interval.start),
            end_time: format_hhmm(interval.end),
        })
        .collect()
}
