use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::slots;

/// Request body the dialogue engine posts to `/webhook`.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionRequest {
    pub next_action: String,
    pub sender_id: String,
    pub tracker: Tracker,
    #[serde(default)]
    pub domain: Value,
    #[serde(default)]
    pub version: Option<String>,
}

/// The host's view of conversation state, read-only for action handlers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tracker {
    #[serde(default)]
    pub sender_id: String,
    #[serde(default)]
    pub slots: HashMap<String, Value>,
    #[serde(default)]
    pub latest_message: LatestMessage,
    #[serde(default)]
    pub active_loop: Option<ActiveLoop>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatestMessage {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub intent: Intent,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Intent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub entity: String,
    pub value: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveLoop {
    pub name: String,
}

impl Tracker {
    /// A slot's value, treating JSON null as unset.
    pub fn slot(&self, name: &str) -> Option<&Value> {
        self.slots.get(name).filter(|v| !v.is_null())
    }

    pub fn slot_str(&self, name: &str) -> Option<&str> {
        self.slot(name).and_then(Value::as_str)
    }

    /// The slot the active form is currently asking for.
    pub fn requested_slot(&self) -> Option<&str> {
        self.slot_str(slots::REQUESTED_SLOT)
    }

    pub fn intent(&self) -> &str {
        &self.latest_message.intent.name
    }

    pub fn message_text(&self) -> Option<&str> {
        self.latest_message
            .text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// All values of a named entity in the latest message.
    pub fn entity_values(&self, entity: &str) -> Vec<String> {
        self.latest_message
            .entities
            .iter()
            .filter(|e| e.entity == entity)
            .filter_map(|e| match &e.value {
                Value::String(s) => Some(s.clone()),
                other if !other.is_null() => Some(other.to_string()),
                _ => None,
            })
            .collect()
    }

    pub fn entity_value(&self, entity: &str) -> Option<String> {
        self.entity_values(entity).into_iter().next()
    }

    /// The user's candidate value for a slot: a same-named entity from a
    /// button payload wins over the raw message text.
    pub fn candidate(&self, slot: &str) -> Option<String> {
        self.entity_value(slot)
            .or_else(|| self.message_text().map(str::to_string))
    }

    pub fn active_form(&self) -> Option<&str> {
        self.active_loop.as_ref().map(|l| l.name.as_str())
    }
}
