//! Chat landing screen data: the fixed quick-action chips shown before
//! the first message. Selecting one feeds its `value` back through
//! `Assistant::reply` as if the visitor had typed it.

use serde::{Deserialize, Serialize};

/// One tappable chip on the chat home screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickAction {
    pub label: String,
    pub value: String,
    pub icon: String,
}

impl QuickAction {
    fn new(label: &str, value: &str, icon: &str) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            icon: icon.into(),
        }
    }
}

/// The six fixed quick actions.
pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction::new("Find a Doctor", "doctor", "🧑‍⚕️"),
        QuickAction::new("Departments", "departments", "🏥"),
        QuickAction::new("Heart Problem", "heart", "❤️"),
        QuickAction::new("Skin Issue", "skin", "🩺"),
        QuickAction::new("Child Specialist", "child", "👶"),
        QuickAction::new("Bone / Joint Pain", "bone", "🦴"),
    ]
}
