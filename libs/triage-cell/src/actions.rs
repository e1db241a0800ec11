use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, info};

use directory_cell::DoctorDirectoryService;
use shared_models::domain::{entities, intents, slots};
use shared_models::{Action, ActionContext, AppError, Button, CollectingDispatcher, Event, Tracker};

use crate::symptoms::suggested_specialties;

/// Collects `symptom` entities from the latest message into the `symptoms`
/// slot.
pub struct ValidateRecommendDoctorForm;

#[async_trait]
impl Action for ValidateRecommendDoctorForm {
    fn name(&self) -> &'static str {
        "validate_recommend_doctor_form"
    }

    async fn run(
        &self,
        _ctx: &ActionContext,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>, AppError> {
        let symptoms = tracker.entity_values(entities::SYMPTOM);

        if symptoms.is_empty() {
            if tracker.slot(slots::SYMPTOMS).is_some() {
                // Already collected on a previous turn, nothing to change.
                return Ok(vec![]);
            }
            dispatcher.utter("Tôi chưa nhận ra triệu chứng nào. Bạn mô tả lại giúp tôi nhé?");
            return Ok(vec![Event::clear_slot(slots::SYMPTOMS)]);
        }

        debug!("Collected {} symptom entities", symptoms.len());
        Ok(vec![Event::set_slot(slots::SYMPTOMS, Value::from(symptoms))])
    }
}

/// Suggests a specialty from the collected symptoms and lists its doctors,
/// each with a booking button.
pub struct ActionRecommendDoctor;

#[async_trait]
impl Action for ActionRecommendDoctor {
    fn name(&self) -> &'static str {
        "action_recommend_doctor"
    }

    async fn run(
        &self,
        ctx: &ActionContext,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>, AppError> {
        let symptoms: Vec<String> = tracker
            .slot(slots::SYMPTOMS)
            .and_then(Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        if symptoms.is_empty() {
            dispatcher.utter("Không nhận được triệu chứng. Hãy thử lại.");
            return Ok(vec![]);
        }

        let specialties = suggested_specialties(&symptoms);
        let suggested = specialties.join(", ");
        info!("Symptoms {:?} mapped to specialties {:?}", symptoms, specialties);

        let doctors = DoctorDirectoryService::new(ctx.pool.clone())
            .list_by_specialties(&specialties)
            .await?;

        if doctors.is_empty() {
            dispatcher.utter("Rất tiếc, không tìm thấy bác sĩ phù hợp.");
            return Ok(vec![Event::clear_slot(slots::SPECIALTY_SUGGESTED)]);
        }

        dispatcher.utter(format!(
            "Dựa trên triệu chứng, tôi đề xuất chuyên khoa {suggested}. \
             Dưới đây là danh sách bác sĩ phù hợp:"
        ));

        for doctor in &doctors {
            dispatcher.utter_buttons(
                doctor.render(),
                vec![Button::command(
                    "Đặt lịch",
                    intents::BOOK_WITH_DOCTOR,
                    &json!({
                        (entities::DOCTOR_ID): doctor.id,
                        (entities::DOCTOR_NAME): doctor.name,
                        (entities::SPECIALTY): doctor.specialty,
                    }),
                )],
            );
        }

        Ok(vec![
            Event::set_slot(slots::SPECIALTY_SUGGESTED, suggested),
            Event::clear_slot(slots::CURRENT_TASK),
            Event::clear_slot(slots::SYMPTOMS),
        ])
    }
}
