//! Outbound reply types for the assistant.
//!
//! Serialized untagged: the consuming UI dispatches on which fields are
//! present (`text`, `type`/`title`/`departments`, or `doctors`), so the
//! wire shape must stay exactly one of the three forms below.

use serde::Serialize;

use crate::models::{Department, Doctor};

/// Discriminant carried by the department-listing shape only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Departments,
}

/// One reply per query. Never empty: an unmatched query gets the
/// fallback `Text` shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BotReply {
    /// Plain text bubble.
    Text { text: String },
    /// Scrollable department list with click-to-re-query behavior.
    Departments {
        #[serde(rename = "type")]
        kind: ListKind,
        title: String,
        departments: Vec<Department>,
    },
    /// Scrollable doctor list, optionally headed by a text line.
    Doctors {
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        doctors: Vec<Doctor>,
    },
}

impl BotReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn departments(title: impl Into<String>, departments: Vec<Department>) -> Self {
        Self::Departments {
            kind: ListKind::Departments,
            title: title.into(),
            departments,
        }
    }

    pub fn doctors(doctors: Vec<Doctor>) -> Self {
        Self::Doctors {
            text: None,
            doctors,
        }
    }

    pub fn doctors_with_text(text: impl Into<String>, doctors: Vec<Doctor>) -> Self {
        Self::Doctors {
            text: Some(text.into()),
            doctors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cardiology() -> Department {
        Department {
            id: 1,
            name: "Cardiology".into(),
        }
    }

    fn dr_mehta() -> Doctor {
        Doctor {
            id: 10,
            name: "Dr. Mehta".into(),
            department: 1,
            start_time: Some("09:00:00".into()),
            end_time: Some("17:00:00".into()),
            photo: None,
        }
    }

    #[test]
    fn text_reply_serializes_to_text_field_only() {
        let json = serde_json::to_value(BotReply::text("Hello")).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "Hello" }));
    }

    #[test]
    fn department_reply_carries_type_tag() {
        let reply = BotReply::departments("Departments at Mallika Hospital", vec![cardiology()]);
        let json = serde_json::to_value(reply).unwrap();
        assert_eq!(json["type"], "departments");
        assert_eq!(json["title"], "Departments at Mallika Hospital");
        assert_eq!(json["departments"][0]["name"], "Cardiology");
    }

    #[test]
    fn doctor_reply_omits_absent_text() {
        let json = serde_json::to_value(BotReply::doctors(vec![dr_mehta()])).unwrap();
        assert!(json.get("text").is_none());
        assert!(json.get("type").is_none());
        assert_eq!(json["doctors"][0]["id"], 10);
    }

    #[test]
    fn doctor_reply_with_header_text() {
        let reply = BotReply::doctors_with_text("Doctors available in Cardiology:", vec![dr_mehta()]);
        let json = serde_json::to_value(reply).unwrap();
        assert_eq!(json["text"], "Doctors available in Cardiology:");
        assert_eq!(json["doctors"][0]["start_time"], "09:00:00");
    }
}
