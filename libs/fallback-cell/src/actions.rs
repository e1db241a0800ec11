use async_trait::async_trait;
use tracing::debug;

use shared_models::domain::{intents, slots};
use shared_models::{Action, ActionContext, AppError, CollectingDispatcher, Event, Tracker};

use crate::hints::{bundle_for, hint_for, MENU};

/// With an active form: re-prompt the current field and resume the form.
/// Without one: offer the top-level menu.
fn reprompt_or_menu(
    dispatcher: &mut CollectingDispatcher,
    tracker: &Tracker,
    preamble: &str,
) -> Vec<Event> {
    match tracker.active_form() {
        Some(form) => {
            let hint = tracker
                .requested_slot()
                .map(hint_for)
                .unwrap_or("Bạn trả lời giúp tôi câu hỏi phía trên nhé.");
            dispatcher.utter(format!("{preamble} {hint}"));
            vec![Event::followup(form)]
        }
        None => {
            dispatcher.utter(preamble);
            dispatcher.utter(MENU);
            vec![]
        }
    }
}

pub struct ActionFallback;

#[async_trait]
impl Action for ActionFallback {
    fn name(&self) -> &'static str {
        "action_fallback"
    }

    async fn run(
        &self,
        _ctx: &ActionContext,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>, AppError> {
        Ok(reprompt_or_menu(
            dispatcher,
            tracker,
            "Xin lỗi, tôi chưa hiểu ý bạn.",
        ))
    }
}

pub struct ActionOutOfScope;

#[async_trait]
impl Action for ActionOutOfScope {
    fn name(&self) -> &'static str {
        "action_out_of_scope"
    }

    async fn run(
        &self,
        _ctx: &ActionContext,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>, AppError> {
        Ok(reprompt_or_menu(
            dispatcher,
            tracker,
            "Yêu cầu này nằm ngoài khả năng hỗ trợ của tôi.",
        ))
    }
}

/// Abandons the current task: deactivates the active form and clears the
/// task's slot bundle.
pub struct ActionDeny;

#[async_trait]
impl Action for ActionDeny {
    fn name(&self) -> &'static str {
        "action_deny"
    }

    async fn run(
        &self,
        _ctx: &ActionContext,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>, AppError> {
        let mut events = Vec::new();

        if tracker.active_loop.is_some() {
            events.push(Event::deactivate_form());
        }

        if let Some(task) = tracker.slot_str(slots::CURRENT_TASK) {
            debug!("Abandoning task {}", task);
            for slot in bundle_for(task) {
                events.push(Event::clear_slot(*slot));
            }
        }

        events.push(Event::clear_slot(slots::CURRENT_TASK));
        events.push(Event::clear_slot(slots::REQUESTED_SLOT));

        dispatcher.utter("Đã hủy thao tác hiện tại. Bạn cần tôi giúp gì khác không?");
        Ok(events)
    }
}

/// Remembers which top-level task the user just started.
pub struct ActionSetCurrentTask;

#[async_trait]
impl Action for ActionSetCurrentTask {
    fn name(&self) -> &'static str {
        "action_set_current_task"
    }

    async fn run(
        &self,
        _ctx: &ActionContext,
        _dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>, AppError> {
        let intent = tracker.intent();
        match intent {
            intents::REQUEST_DOCTOR | intents::REQUEST_BOOKING | intents::REQUEST_CANCELLATION => {
                Ok(vec![Event::set_slot(slots::CURRENT_TASK, intent.to_string())])
            }
            _ => Ok(vec![]),
        }
    }
}
