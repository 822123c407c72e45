use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed key of the single matchday row.
pub const MATCHDAY_RECORD_ID: &str = "matchday";

/// Stored form of the singleton matchday record. Attribute names keep the
/// camelCase the clients already use on the wire.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Matchday {
    pub id: String,
    pub number: i32,
    #[serde(rename = "topPlayer")]
    pub top_player: String,
    #[serde(rename = "lastPlayer")]
    pub last_player: String,
    #[serde(rename = "secondToLast")]
    pub second_to_last: String,
    #[serde(rename = "noSubs")]
    pub no_subs: String,
    pub accumulated: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Wire view of the record: what GET returns and what PUT accepts.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchdayInfo {
    pub number: i32,
    #[serde(rename = "topPlayer")]
    pub top_player: String,
    #[serde(rename = "lastPlayer")]
    pub last_player: String,
    #[serde(rename = "secondToLast")]
    pub second_to_last: String,
    #[serde(rename = "noSubs")]
    pub no_subs: String,
    pub accumulated: String,
}

impl MatchdayInfo {
    /// Placeholder record served before the first PUT.
    pub fn default_info() -> Self {
        MatchdayInfo {
            number: 1,
            top_player: "No data yet".to_string(),
            last_player: "No data yet".to_string(),
            second_to_last: "No data yet".to_string(),
            no_subs: "No data yet".to_string(),
            accumulated: "$0".to_string(),
        }
    }
}

impl Matchday {
    pub fn from_info(info: &MatchdayInfo, created_at: DateTime<Utc>) -> Self {
        Matchday {
            id: MATCHDAY_RECORD_ID.to_string(),
            number: info.number,
            top_player: info.top_player.clone(),
            last_player: info.last_player.clone(),
            second_to_last: info.second_to_last.clone(),
            no_subs: info.no_subs.clone(),
            accumulated: info.accumulated.clone(),
            created_at,
            updated_at: Utc::now(),
        }
    }

    pub fn info(&self) -> MatchdayInfo {
        MatchdayInfo {
            number: self.number,
            top_player: self.top_player.clone(),
            last_player: self.last_player.clone(),
            second_to_last: self.second_to_last.clone(),
            no_subs: self.no_subs.clone(),
            accumulated: self.accumulated.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchdayResponse {
    pub matchday: MatchdayInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_view_uses_camel_case_names() {
        let info = MatchdayInfo::default_info();
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["number"], 1);
        assert_eq!(value["topPlayer"], "No data yet");
        assert_eq!(value["secondToLast"], "No data yet");
        assert_eq!(value["noSubs"], "No data yet");
        assert_eq!(value["accumulated"], "$0");
    }

    #[test]
    fn test_from_info_round_trips_through_storage_form() {
        let info = MatchdayInfo {
            number: 12,
            top_player: "Alex".to_string(),
            last_player: "Kim".to_string(),
            second_to_last: "Jo".to_string(),
            no_subs: "Robin, Charlie".to_string(),
            accumulated: "$45".to_string(),
        };
        let stored = Matchday::from_info(&info, Utc::now());
        assert_eq!(stored.id, MATCHDAY_RECORD_ID);

        let round_tripped = stored.info();
        assert_eq!(round_tripped.number, 12);
        assert_eq!(round_tripped.top_player, "Alex");
        assert_eq!(round_tripped.accumulated, "$45");
    }
}
