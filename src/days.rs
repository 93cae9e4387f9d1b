#![allow(dead_code)]
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Canonical weekday identifier, Monday-first catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayId {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

pub struct DayInfo {
    pub id: DayId,
    pub label: &'static str,
    pub full: &'static str,
    /// Calendar weekday index, Sunday = 0.
    pub weekday_index: u32,
}

pub const DAYS: [DayInfo; 7] = [
    DayInfo { id: DayId::Mon, label: "M", full: "Monday", weekday_index: 1 },
    DayInfo { id: DayId::Tue, label: "T", full: "Tuesday", weekday_index: 2 },
    DayInfo { id: DayId::Wed, label: "W", full: "Wednesday", weekday_index: 3 },
    DayInfo { id: DayId::Thu, label: "T", full: "Thursday", weekday_index: 4 },
    DayInfo { id: DayId::Fri, label: "F", full: "Friday", weekday_index: 5 },
    DayInfo { id: DayId::Sat, label: "S", full: "Saturday", weekday_index: 6 },
    DayInfo { id: DayId::Sun, label: "S", full: "Sunday", weekday_index: 0 },
];

/// Sentinel label expanding to all seven days.
pub const DAILY_SENTINEL: &str = "Daily";
/// Sentinel label expanding to Monday through Friday.
pub const WEEKDAYS_SENTINEL: &str = "Weekdays";

impl DayId {
    pub fn all() -> Vec<DayId> {
        DAYS.iter().map(|day| day.id).collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayId::Mon => "mon",
            DayId::Tue => "tue",
            DayId::Wed => "wed",
            DayId::Thu => "thu",
            DayId::Fri => "fri",
            DayId::Sat => "sat",
            DayId::Sun => "sun",
        }
    }

    /// Single-letter display label from the catalog.
    pub fn label(&self) -> &'static str {
        DAYS[self.catalog_index()].label
    }

    pub fn full_name(&self) -> &'static str {
        DAYS[self.catalog_index()].full
    }

    fn catalog_index(&self) -> usize {
        match self {
            DayId::Mon => 0,
            DayId::Tue => 1,
            DayId::Wed => 2,
            DayId::Thu => 3,
            DayId::Fri => 4,
            DayId::Sat => 5,
            DayId::Sun => 6,
        }
    }
}

impl std::fmt::Display for DayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DayId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mon" => Ok(DayId::Mon),
            "tue" => Ok(DayId::Tue),
            "wed" => Ok(DayId::Wed),
            "thu" => Ok(DayId::Thu),
            "fri" => Ok(DayId::Fri),
            "sat" => Ok(DayId::Sat),
            "sun" => Ok(DayId::Sun),
            _ => Err(anyhow::anyhow!("Unknown day id: {}", s)),
        }
    }
}

/// Reconcile free-form day labels (as carried across screen parameters)
/// against the canonical catalog.
///
/// "Daily" anywhere in the input short-circuits to the full week. "Weekdays"
/// expands to Monday through Friday, each inserted once. A single-letter label
/// claims the first not-yet-used catalog day with that letter, so duplicate
/// letters resolve in catalog order (Tuesday before Thursday, Saturday before
/// Sunday). Unrecognized labels are dropped.
pub fn labels_to_day_ids<S: AsRef<str>>(labels: &[S]) -> Vec<DayId> {
    let normalized: Vec<String> = labels
        .iter()
        .map(|label| label.as_ref().trim().to_uppercase())
        .collect();

    if normalized.iter().any(|label| label == "DAILY") {
        return DayId::all();
    }

    let mut used = [false; DAYS.len()];
    let mut ids = Vec::new();

    for label in &normalized {
        if label == "WEEKDAYS" {
            for (index, day) in DAYS.iter().enumerate().take(5) {
                if !used[index] {
                    used[index] = true;
                    ids.push(day.id);
                }
            }
            continue;
        }
        let next_match = DAYS
            .iter()
            .enumerate()
            .find(|(index, day)| !used[*index] && day.label.eq_ignore_ascii_case(label));
        if let Some((index, day)) = next_match {
            used[index] = true;
            ids.push(day.id);
        }
    }

    ids
}

/// One-to-one id-to-letter mapping, order preserved, duplicates kept.
pub fn day_ids_to_labels(ids: &[DayId]) -> Vec<String> {
    ids.iter().map(|id| id.label().to_string()).collect()
}

/// Map a calendar date's weekday to its catalog id.
pub fn day_id_from_date(date: NaiveDate) -> Option<DayId> {
    let weekday_index = date.weekday().num_days_from_sunday();
    DAYS.iter()
        .find(|day| day.weekday_index == weekday_index)
        .map(|day| day.id)
}

/// Length check only; membership is not enforced.
pub fn is_full_week(ids: &[DayId]) -> bool {
    ids.len() == DAYS.len()
}

/// Drop any string that is not a canonical day id, keeping order and
/// duplicates.
pub fn filter_day_ids<S: AsRef<str>>(values: &[S]) -> Vec<DayId> {
    values
        .iter()
        .filter_map(|value| DayId::from_str(value.as_ref()).ok())
        .collect()
}
