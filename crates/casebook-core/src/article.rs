//! Article records as they are persisted in the store file

use serde::{Deserialize, Serialize};

/// Opinion recorded for a judge when the form does not say otherwise
pub const DEFAULT_OPINION: &str = "yes";

/// A judge sitting on the bench for a case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judge {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub initials: String,
    #[serde(default = "default_opinion")]
    pub opinion: String,
}

fn default_opinion() -> String {
    DEFAULT_OPINION.to_string()
}

/// One step in the procedural history of a case
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
}

/// One case summary.
///
/// Field order is the order written to disk. Every field defaults when
/// missing so files written by older versions still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    pub title: String,
    pub delivered_date: String,
    pub bench_size: String,
    pub intro: String,
    pub plaintiff: String,
    pub defendant: String,
    pub case_type: String,
    pub year_range: String,
    pub judges: Vec<Judge>,
    pub ruling: String,
    pub acts: Vec<String>,
    pub citations: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
    pub petitioner_arguments: Vec<String>,
    pub respondent_arguments: Vec<String>,
    pub analysis: String,
    pub verdict_points: Vec<String>,
    pub ratio_decidendi: String,
    pub case_number: String,
    pub counsel_petitioner: String,
    pub counsel_respondent: String,
    pub hearing_dates: String,
}
