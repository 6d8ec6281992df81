use crate::scorer::SessionSummary;
use crate::trial::TrialRecord;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub number_of_trials: usize,
    pub prompt_length: usize,
    pub seed: Option<u64>,
}

/// One finished run as stored in the history file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub trials: Vec<TrialRecord>,
    pub summary: SessionSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Local>>,
}

impl SessionRecord {
    /// Stamp a scored run with the current local time
    pub fn new(trials: Vec<TrialRecord>, summary: SessionSummary) -> Self {
        Self {
            trials,
            summary,
            recorded_at: Some(Local::now()),
        }
    }
}
