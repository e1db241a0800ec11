use async_trait::async_trait;

use shared_models::domain::{entities, slots};
use shared_models::{Action, ActionContext, AppError, CollectingDispatcher, Event, Tracker};

use crate::lookups;

/// The subject of a directory question: an entity on the latest message
/// wins, a filled slot from an ongoing form is the fallback.
fn subject<'a>(tracker: &'a Tracker, entity: &str, slot: &str) -> Option<String> {
    tracker
        .entity_value(entity)
        .or_else(|| tracker.slot_str(slot).map(str::to_string))
}

pub struct ActionExplainSpecialty;

#[async_trait]
impl Action for ActionExplainSpecialty {
    fn name(&self) -> &'static str {
        "action_explain_specialty"
    }

    async fn run(
        &self,
        ctx: &ActionContext,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>, AppError> {
        let name = subject(tracker, entities::SPECIALTY, slots::SPECIALTY);
        lookups::explain_specialty(&ctx.pool, dispatcher, name.as_deref()).await?;
        Ok(vec![])
    }
}

pub struct ActionListDoctors;

#[async_trait]
impl Action for ActionListDoctors {
    fn name(&self) -> &'static str {
        "action_list_doctors"
    }

    async fn run(
        &self,
        ctx: &ActionContext,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>, AppError> {
        let specialty = subject(tracker, entities::SPECIALTY, slots::SPECIALTY);
        lookups::list_doctors(&ctx.pool, dispatcher, specialty.as_deref()).await?;
        Ok(vec![])
    }
}

pub struct ActionDoctorInfo;

#[async_trait]
impl Action for ActionDoctorInfo {
    fn name(&self) -> &'static str {
        "action_doctor_info"
    }

    async fn run(
        &self,
        ctx: &ActionContext,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>, AppError> {
        let name = subject(tracker, entities::DOCTOR_NAME, slots::DOCTOR_NAME);
        lookups::doctor_info(&ctx.pool, dispatcher, name.as_deref()).await?;
        Ok(vec![])
    }
}

pub struct ActionDoctorSchedule;

#[async_trait]
impl Action for ActionDoctorSchedule {
    fn name(&self) -> &'static str {
        "action_doctor_schedule"
    }

    async fn run(
        &self,
        ctx: &ActionContext,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>, AppError> {
        let name = subject(tracker, entities::DOCTOR_NAME, slots::DOCTOR_NAME);
        lookups::doctor_schedule(&ctx.pool, dispatcher, name.as_deref()).await?;
        Ok(vec![])
    }
}

pub struct ActionLastExaminer;

#[async_trait]
impl Action for ActionLastExaminer {
    fn name(&self) -> &'static str {
        "action_last_examiner"
    }

    async fn run(
        &self,
        ctx: &ActionContext,
        dispatcher: &mut CollectingDispatcher,
        _tracker: &Tracker,
    ) -> Result<Vec<Event>, AppError> {
        lookups::last_examiner(&ctx.pool, dispatcher, &ctx.patient_id).await?;
        Ok(vec![])
    }
}
