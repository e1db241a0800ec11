use serde::{Deserialize, Serialize};
use serde_json::Value;

/// State-mutation instructions returned to the dialogue engine.
///
/// The wire format is the host's: an `event` tag plus event-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Slot { name: String, value: Value },
    ActiveLoop { name: Option<String> },
    Followup { name: String },
}

impl Event {
    pub fn set_slot(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Event::Slot {
            name: name.into(),
            value: value.into(),
        }
    }

    /// A null slot value tells the form to re-ask the field.
    pub fn clear_slot(name: impl Into<String>) -> Self {
        Event::Slot {
            name: name.into(),
            value: Value::Null,
        }
    }

    pub fn deactivate_form() -> Self {
        Event::ActiveLoop { name: None }
    }

    pub fn followup(name: impl Into<String>) -> Self {
        Event::Followup { name: name.into() }
    }
}

/// One outgoing bot message, plain text with optional button affordances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BotMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

impl BotMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            buttons: Vec::new(),
        }
    }

    pub fn with_buttons(text: impl Into<String>, buttons: Vec<Button>) -> Self {
        Self {
            text: Some(text.into()),
            buttons,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub title: String,
    pub payload: String,
}

impl Button {
    pub fn new(title: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            payload: payload.into(),
        }
    }

    /// Encode a follow-up command as the `/intent{entities}` payload string
    /// the NLU layer short-circuits on. Entities are serialized JSON, never
    /// hand-concatenated text.
    pub fn command(title: impl Into<String>, intent: &str, entities: &Value) -> Self {
        let payload = if entities.as_object().is_some_and(|m| !m.is_empty()) {
            format!(
                "/{}{}",
                intent,
                serde_json::to_string(entities).unwrap_or_default()
            )
        } else {
            format!("/{intent}")
        };
        Self::new(title, payload)
    }
}

/// Webhook response body: events to apply plus messages to utter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionResponse {
    pub events: Vec<Event>,
    pub responses: Vec<BotMessage>,
}
