use serde::{Deserialize, Serialize};

/// A medical specialty category (Cardiology, Dermatology, ...).
/// Owned by the hospital API; the assistant only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
}
