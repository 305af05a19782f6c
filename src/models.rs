use crate::catalog::Channel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    NotDue,
    Pending,
    Completed,
    Overdue,
}

impl Status {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotDue => "not-due",
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub is_weekend: bool,
    pub day_of_week: String,
    pub statuses: BTreeMap<String, Status>,
}

impl DayRecord {
    pub fn completed_count(&self) -> usize {
        self.statuses
            .values()
            .filter(|status| **status == Status::Completed)
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreClass {
    High,
    Medium,
    Low,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub date: String,
    pub channel: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub date: String,
    pub channel: String,
    pub status: Status,
    pub score: usize,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
pub struct ChannelsResponse {
    pub channels: &'static [Channel],
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayView {
    pub date: String,
    pub day_of_week: String,
    pub is_weekend: bool,
    pub is_today: bool,
    pub statuses: BTreeMap<String, Status>,
    pub score: usize,
    pub total: usize,
    pub score_class: ScoreClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    pub completed_count: usize,
    pub total_count: usize,
    pub completion_rate_percent: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub today: String,
    pub aggregate: Aggregate,
    pub current_streak: usize,
    pub days: Vec<DayView>,
}
