use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Closed set of prayer topics. Lookup by id never fails: anything
/// unrecognized falls back to the first topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicId {
    Family,
    Health,
    Work,
    Relationships,
    FuturePlans,
    FutureGoals,
    OtherPerson,
    OtherSituation,
}

impl TopicId {
    pub fn all() -> Vec<TopicId> {
        vec![
            TopicId::Family,
            TopicId::Health,
            TopicId::Work,
            TopicId::Relationships,
            TopicId::FuturePlans,
            TopicId::FutureGoals,
            TopicId::OtherPerson,
            TopicId::OtherSituation,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TopicId::Family => "family",
            TopicId::Health => "health",
            TopicId::Work => "work",
            TopicId::Relationships => "relationships",
            TopicId::FuturePlans => "future-plans",
            TopicId::FutureGoals => "future-goals",
            TopicId::OtherPerson => "other-person",
            TopicId::OtherSituation => "other-situation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TopicId::Family => "Family",
            TopicId::Health => "Health",
            TopicId::Work => "Work",
            TopicId::Relationships => "Relationships",
            TopicId::FuturePlans => "Future Plans",
            TopicId::FutureGoals => "Future Goals",
            TopicId::OtherPerson => "Someone Else",
            TopicId::OtherSituation => "Something Else",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TopicId::Family => "users",
            TopicId::Health => "heart",
            TopicId::Work => "laptop",
            TopicId::Relationships => "hands-helping",
            TopicId::FuturePlans => "arrow-circle-right",
            TopicId::FutureGoals => "chart-line",
            TopicId::OtherPerson => "user",
            TopicId::OtherSituation => "praying-hands",
        }
    }

    /// Total lookup over optional free-form id strings; absent or unknown ids
    /// resolve to the first topic.
    pub fn from_param(id: Option<&str>) -> TopicId {
        id.and_then(|value| TopicId::from_str(value).ok())
            .unwrap_or(TopicId::Family)
    }
}

impl std::fmt::Display for TopicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TopicId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "family" => Ok(TopicId::Family),
            "health" => Ok(TopicId::Health),
            "work" => Ok(TopicId::Work),
            "relationships" => Ok(TopicId::Relationships),
            "future-plans" => Ok(TopicId::FuturePlans),
            "future-goals" => Ok(TopicId::FutureGoals),
            "other-person" => Ok(TopicId::OtherPerson),
            "other-situation" => Ok(TopicId::OtherSituation),
            _ => Err(anyhow::anyhow!("Unknown topic id: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_total_with_fallback() {
        assert_eq!(TopicId::from_param(Some("health")), TopicId::Health);
        assert_eq!(TopicId::from_param(Some("no-such-topic")), TopicId::Family);
        assert_eq!(TopicId::from_param(None), TopicId::Family);
    }

    #[test]
    fn ids_round_trip_through_strings() {
        for topic in TopicId::all() {
            assert_eq!(TopicId::from_str(topic.as_str()).unwrap(), topic);
        }
    }
}
