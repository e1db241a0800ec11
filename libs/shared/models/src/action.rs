use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::MySqlPool;
use tracing::warn;

use crate::dispatcher::CollectingDispatcher;
use crate::error::AppError;
use crate::events::Event;
use crate::tracker::Tracker;

/// Per-invocation context handed to every action.
pub struct ActionContext {
    /// Shared connection pool, built once at startup.
    pub pool: MySqlPool,
    /// Patient the conversation belongs to, resolved from the webhook
    /// sender id by the host runtime.
    pub patient_id: String,
    /// Domain metadata forwarded by the host, opaque to most actions.
    pub domain: Value,
}

/// A named server-side action the dialogue engine can execute.
#[async_trait]
pub trait Action: Send + Sync {
    fn name(&self) -> &'static str;

    async fn run(
        &self,
        ctx: &ActionContext,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>, AppError>;
}

/// Name → handler table the webhook dispatches on.
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<&'static str, Arc<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<A: Action + 'static>(&mut self, action: A) {
        let action: Arc<dyn Action> = Arc::new(action);
        if self.actions.insert(action.name(), Arc::clone(&action)).is_some() {
            warn!("Action {} registered twice, keeping the last one", action.name());
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Action>> {
        self.actions.get(name).cloned()
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.actions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
