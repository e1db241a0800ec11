use crate::events::{BotMessage, Button};

/// Collects the messages an action wants to send back to the user.
///
/// Messages are drained into the webhook response after the action returns;
/// the dispatcher itself never talks to the network.
#[derive(Debug, Default)]
pub struct CollectingDispatcher {
    messages: Vec<BotMessage>,
}

impl CollectingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn utter(&mut self, text: impl Into<String>) {
        self.messages.push(BotMessage::text(text));
    }

    pub fn utter_buttons(&mut self, text: impl Into<String>, buttons: Vec<Button>) {
        self.messages.push(BotMessage::with_buttons(text, buttons));
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_messages(self) -> Vec<BotMessage> {
        self.messages
    }
}
