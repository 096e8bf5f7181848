use serde::{Deserialize, Serialize};

/// One reviewed assignment as reported by the statuses endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeworkRecord {
    pub homework_name: String,
    pub status: String,
}

/// Validated statuses payload for one poll window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub homeworks: Vec<HomeworkRecord>,
    pub current_date: i64,
}
