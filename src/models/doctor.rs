use serde::{Deserialize, Serialize};

/// A practitioner belonging to exactly one department.
///
/// `start_time`/`end_time` are "HH:MM:SS" strings as served by the API;
/// the assistant passes them through untouched and never parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    /// References `Department::id`. A dangling reference is treated as
    /// "not found" during filtering, never an error.
    pub department: i64,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}
