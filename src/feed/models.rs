//! Raw game records as published by the scoreboard feed.

use serde::{Deserialize, Deserializer};

/// One game as it appears in the feed's `games` array
#[derive(Debug, Clone, Deserialize)]
pub struct GameRecord {
    #[serde(deserialize_with = "text_or_number")]
    pub id: String,
    /// Clock or phase text, e.g. "10:34 1st", "END 2nd", "TUESDAY 4/21"
    #[serde(rename = "ts")]
    pub clock: String,
    /// Stage code, e.g. "pre", "progress", "critical", "final"
    #[serde(rename = "tsc")]
    pub stage: String,
    /// Status text, e.g. "LIVE", "FINAL OT", "7:00 PM ET"
    #[serde(rename = "bs")]
    pub status: String,

    #[serde(rename = "atn")]
    pub away_locale: String,
    #[serde(rename = "atv")]
    pub away_name: String,
    #[serde(rename = "ats", deserialize_with = "text_or_number")]
    pub away_score: String,
    #[serde(rename = "atc")]
    pub away_result: String,

    #[serde(rename = "htn")]
    pub home_locale: String,
    #[serde(rename = "htv")]
    pub home_name: String,
    #[serde(rename = "hts", deserialize_with = "text_or_number")]
    pub home_score: String,
    #[serde(rename = "htc")]
    pub home_result: String,
}

/// Ids and scores show up both quoted and bare depending on the feed revision
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Int(n) => n.to_string(),
        TextOrNumber::Float(f) => f.to_string(),
    })
}
