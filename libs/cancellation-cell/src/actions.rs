use async_trait::async_trait;
use serde_json::json;

use shared_models::domain::{entities, intents, slots};
use shared_models::{Action, ActionContext, AppError, Button, CollectingDispatcher, Event, Tracker};
use shared_utils::{format_date, parse_user_date, today};

use crate::services::CancellationService;

/// Field-level validation for the cancellation form: first the date, then
/// the appointment picked from the listed candidates.
pub struct ValidateCancelAppointmentForm;

#[async_trait]
impl Action for ValidateCancelAppointmentForm {
    fn name(&self) -> &'static str {
        "validate_cancel_appointment_form"
    }

    async fn run(
        &self,
        ctx: &ActionContext,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>, AppError> {
        let Some(requested) = tracker.requested_slot().map(str::to_string) else {
            return Ok(vec![]);
        };
        let Some(candidate) = tracker.candidate(&requested) else {
            return Ok(vec![]);
        };

        match requested.as_str() {
            slots::CANCEL_DATE => validate_cancel_date(ctx, dispatcher, &candidate).await,
            slots::CANCEL_APPOINTMENT_ID => {
                validate_cancel_selection(ctx, dispatcher, &candidate).await
            }
            _ => Ok(vec![]),
        }
    }
}

async fn validate_cancel_date(
    ctx: &ActionContext,
    dispatcher: &mut CollectingDispatcher,
    candidate: &str,
) -> Result<Vec<Event>, AppError> {
    let Some(date) = parse_user_date(candidate) else {
        dispatcher.utter(
            "Ngày không đúng định dạng. Bạn nhập theo dạng ngày/tháng/năm giúp tôi nhé, \
             ví dụ 25/08/2026.",
        );
        return Ok(vec![Event::clear_slot(slots::CANCEL_DATE)]);
    };

    if date < today() {
        dispatcher.utter(format!(
            "Ngày {} đã qua, lịch khám ngày đó không thể hủy nữa.",
            format_date(date)
        ));
        return Ok(vec![Event::clear_slot(slots::CANCEL_DATE)]);
    }

    let appointments = CancellationService::new(ctx.pool.clone())
        .list_on(&ctx.patient_id, date)
        .await?;

    if appointments.is_empty() {
        dispatcher.utter(format!(
            "Bạn không có lịch khám nào vào ngày {}.",
            format_date(date)
        ));
        return Ok(vec![Event::clear_slot(slots::CANCEL_DATE)]);
    }

    dispatcher.utter(format!(
        "Các lịch khám của bạn ngày {}:",
        format_date(date)
    ));
    for appointment in &appointments {
        dispatcher.utter_buttons(
            appointment.render(),
            vec![Button::command(
                appointment.button_label(),
                intents::INFORM,
                &json!({ (entities::CANCEL_APPOINTMENT_ID): appointment.id }),
            )],
        );
    }

    Ok(vec![Event::set_slot(slots::CANCEL_DATE, format_date(date))])
}

async fn validate_cancel_selection(
    ctx: &ActionContext,
    dispatcher: &mut CollectingDispatcher,
    candidate: &str,
) -> Result<Vec<Event>, AppError> {
    let service = CancellationService::new(ctx.pool.clone());

    match service.get_owned(&ctx.patient_id, candidate).await? {
        Some(appointment) => {
            dispatcher.utter(format!("Bạn đã chọn:\n{}", appointment.render()));
            Ok(vec![Event::set_slot(
                slots::CANCEL_APPOINTMENT_ID,
                appointment.id,
            )])
        }
        None => {
            dispatcher.utter(
                "Mã lịch khám không hợp lệ, không thuộc về bạn hoặc đã được hủy. \
                 Bạn chọn lại giúp tôi nhé.",
            );
            Ok(vec![Event::clear_slot(slots::CANCEL_APPOINTMENT_ID)])
        }
    }
}

/// Re-displays the picked appointment and asks for an explicit yes/no.
/// The host's dialogue policy routes the answer.
pub struct ActionConfirmCancellation;

#[async_trait]
impl Action for ActionConfirmCancellation {
    fn name(&self) -> &'static str {
        "action_confirm_cancellation"
    }

    async fn run(
        &self,
        ctx: &ActionContext,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>, AppError> {
        let Some(appointment_id) = tracker.slot_str(slots::CANCEL_APPOINTMENT_ID) else {
            dispatcher.utter("Bạn chưa chọn lịch khám nào để hủy.");
            return Ok(vec![]);
        };

        let service = CancellationService::new(ctx.pool.clone());
        match service.get_owned(&ctx.patient_id, appointment_id).await? {
            Some(appointment) => {
                dispatcher.utter_buttons(
                    format!(
                        "Bạn chắc chắn muốn hủy lịch khám này chứ?\n{}",
                        appointment.render()
                    ),
                    vec![
                        Button::command("Đồng ý hủy", intents::AFFIRM, &json!({})),
                        Button::command("Không hủy nữa", intents::DENY, &json!({})),
                    ],
                );
                Ok(vec![])
            }
            None => {
                dispatcher.utter("Lịch khám này không còn hủy được nữa.");
                Ok(vec![Event::clear_slot(slots::CANCEL_APPOINTMENT_ID)])
            }
        }
    }
}

/// Performs the status flip after the user confirmed.
pub struct ActionCancelAppointment;

#[async_trait]
impl Action for ActionCancelAppointment {
    fn name(&self) -> &'static str {
        "action_cancel_appointment"
    }

    async fn run(
        &self,
        ctx: &ActionContext,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>, AppError> {
        let Some(appointment_id) = tracker.slot_str(slots::CANCEL_APPOINTMENT_ID) else {
            dispatcher.utter("Bạn chưa chọn lịch khám nào để hủy.");
            return Ok(vec![]);
        };

        let cancelled = CancellationService::new(ctx.pool.clone())
            .cancel(&ctx.patient_id, appointment_id)
            .await?;

        if cancelled {
            dispatcher.utter(format!("Đã hủy lịch khám {appointment_id}."));
        } else {
            dispatcher.utter(
                "Không thể hủy lịch khám này: lịch không tồn tại, không thuộc về bạn \
                 hoặc đã được hủy trước đó.",
            );
        }

        Ok(vec![
            Event::clear_slot(slots::CANCEL_DATE),
            Event::clear_slot(slots::CANCEL_APPOINTMENT_ID),
            Event::clear_slot(slots::CURRENT_TASK),
        ])
    }
}
