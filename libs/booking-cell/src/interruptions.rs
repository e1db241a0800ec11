//! Drive-by questions during slot filling.
//!
//! A user halfway through the booking form may ask what a specialty
//! treats or when a doctor works. The side lookup answers in place and the
//! requested slot's value is echoed back unchanged, so the form re-asks
//! the same question without losing progress.

use serde_json::Value;
use tracing::debug;

use directory_cell::lookups;
use shared_models::domain::{entities, intents, slots};
use shared_models::{ActionContext, AppError, CollectingDispatcher, Event, Tracker};

fn lookup_subject(tracker: &Tracker, entity: &str, slot: &str) -> Option<String> {
    tracker
        .entity_value(entity)
        .or_else(|| tracker.slot_str(slot).map(str::to_string))
}

/// Handle a mid-form side question.
///
/// Returns `Some(events)` when the latest intent was an interruption; the
/// answer has already been uttered and the events leave the requested slot
/// untouched.
pub async fn handle(
    ctx: &ActionContext,
    dispatcher: &mut CollectingDispatcher,
    tracker: &Tracker,
) -> Result<Option<Vec<Event>>, AppError> {
    let intent = tracker.intent();

    let handled = match intent {
        intents::ASK_SPECIALTY_INFO => {
            let name = lookup_subject(tracker, entities::SPECIALTY, slots::SPECIALTY);
            lookups::explain_specialty(&ctx.pool, dispatcher, name.as_deref()).await?;
            true
        }
        intents::ASK_DOCTOR_LIST => {
            let specialty = lookup_subject(tracker, entities::SPECIALTY, slots::SPECIALTY);
            lookups::list_doctors(&ctx.pool, dispatcher, specialty.as_deref()).await?;
            true
        }
        intents::ASK_DOCTOR_INFO => {
            let name = lookup_subject(tracker, entities::DOCTOR_NAME, slots::DOCTOR_NAME);
            lookups::doctor_info(&ctx.pool, dispatcher, name.as_deref()).await?;
            true
        }
        intents::ASK_DOCTOR_SCHEDULE => {
            let name = lookup_subject(tracker, entities::DOCTOR_NAME, slots::DOCTOR_NAME);
            lookups::doctor_schedule(&ctx.pool, dispatcher, name.as_deref()).await?;
            true
        }
        intents::ASK_LAST_EXAMINER => {
            lookups::last_examiner(&ctx.pool, dispatcher, &ctx.patient_id).await?;
            true
        }
        _ => false,
    };

    if !handled {
        return Ok(None);
    }

    debug!("Handled mid-form interruption {}", intent);

    let events = match tracker.requested_slot() {
        Some(slot) => {
            let current = tracker.slot(slot).cloned().unwrap_or(Value::Null);
            vec![Event::set_slot(slot, current)]
        }
        None => vec![],
    };

    Ok(Some(events))
}
