use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::days::{self, DAILY_SENTINEL};
use crate::models::topic::TopicId;

/// One prayer record as persisted in `prayers.json`. Field names follow the
/// on-disk camelCase schema. `days` keeps the labels exactly as the user
/// entered them, sentinel tokens included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPrayer {
    pub id: String,
    /// Topic id as persisted. Any string is structurally valid; ids outside
    /// the catalog resolve through the total fallback at lookup time.
    pub topic_id: String,
    /// Snapshot of the topic's display label at save time.
    pub topic_label: String,
    pub name: String,
    pub days: Vec<String>,
    pub reminder: bool,
    pub completed: bool,
}

impl StoredPrayer {
    pub fn new(id: String, topic: TopicId, name: String, days: Vec<String>, reminder: bool) -> Self {
        Self {
            id,
            topic_id: topic.as_str().to_string(),
            topic_label: topic.label().to_string(),
            name,
            days,
            reminder,
            completed: false,
        }
    }

    /// Resolve the stored topic id against the catalog; unknown ids fall
    /// back to the first topic.
    pub fn topic(&self) -> TopicId {
        TopicId::from_param(Some(&self.topic_id))
    }

    /// Whether this prayer appears on the given date: an empty day list means
    /// every day, "Daily" means every day, otherwise the date's single-letter
    /// label must be present.
    pub fn shown_on(&self, date: NaiveDate) -> bool {
        if self.days.is_empty() {
            return true;
        }
        if self.days.iter().any(|day| day == DAILY_SENTINEL) {
            return true;
        }
        match days::day_id_from_date(date) {
            Some(id) => self.days.iter().any(|day| day == id.label()),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prayer_with_days(days: Vec<&str>) -> StoredPrayer {
        StoredPrayer::new(
            "p1".to_string(),
            TopicId::Family,
            "Family Prayer".to_string(),
            days.into_iter().map(String::from).collect(),
            false,
        )
    }

    #[test]
    fn empty_day_list_shows_every_day() {
        let prayer = prayer_with_days(vec![]);
        let saturday = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        assert!(prayer.shown_on(saturday));
    }

    #[test]
    fn daily_sentinel_shows_every_day() {
        let prayer = prayer_with_days(vec!["Daily"]);
        let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert!(prayer.shown_on(monday));
        assert!(prayer.shown_on(sunday));
    }

    #[test]
    fn letter_labels_match_the_dates_weekday() {
        let prayer = prayer_with_days(vec!["M", "F"]);
        let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let friday = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        let saturday = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
        assert!(prayer.shown_on(monday));
        assert!(prayer.shown_on(friday));
        assert!(!prayer.shown_on(saturday));
    }

    #[test]
    fn unknown_topic_ids_resolve_through_the_catalog_fallback() {
        let mut prayer = prayer_with_days(vec![]);
        prayer.topic_id = "gratitude".to_string();
        assert_eq!(prayer.topic(), TopicId::Family);
        let known = StoredPrayer::new(
            "p2".to_string(),
            TopicId::Health,
            "Health Concern".to_string(),
            vec![],
            false,
        );
        assert_eq!(known.topic(), TopicId::Health);
    }

    #[test]
    fn wire_format_uses_camel_case_keys() {
        let prayer = prayer_with_days(vec!["M"]);
        let json = serde_json::to_string(&prayer).unwrap();
        assert!(json.contains("\"topicId\":\"family\""));
        assert!(json.contains("\"topicLabel\":\"Family\""));
        let back: StoredPrayer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prayer);
    }
}
