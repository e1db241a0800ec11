use async_trait::async_trait;

use shared_models::domain::{entities, slots};
use shared_models::{Action, ActionContext, AppError, CollectingDispatcher, Event, Tracker};
use shared_utils::{format_date, parse_user_date};

use crate::render::medication_table;
use crate::services::PrescriptionService;

/// Looks up the patient's prescriptions, either for an explicitly named
/// exam date or the most recent ones.
pub struct ActionLookupPrescription;

#[async_trait]
impl Action for ActionLookupPrescription {
    fn name(&self) -> &'static str {
        "action_lookup_prescription"
    }

    async fn run(
        &self,
        ctx: &ActionContext,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>, AppError> {
        let service = PrescriptionService::new(ctx.pool.clone());

        let raw_date = tracker
            .entity_value(entities::EXAM_DATE)
            .or_else(|| tracker.slot_str(slots::EXAM_DATE).map(str::to_string));

        let (lines, header) = match raw_date {
            Some(raw) => {
                let Some(date) = parse_user_date(&raw) else {
                    dispatcher.utter(
                        "Ngày khám không đúng định dạng. Bạn nhập theo dạng ngày/tháng/năm \
                         giúp tôi nhé, ví dụ 02/06/2026.",
                    );
                    return Ok(vec![Event::clear_slot(slots::EXAM_DATE)]);
                };
                let lines = service.lines_on(&ctx.patient_id, date).await?;
                if lines.is_empty() {
                    dispatcher.utter(format!(
                        "Không tìm thấy đơn thuốc nào của bạn ngày {}.",
                        format_date(date)
                    ));
                    return Ok(vec![Event::clear_slot(slots::EXAM_DATE)]);
                }
                let header = format!("Đơn thuốc của bạn ngày {}:", format_date(date));
                (lines, header)
            }
            None => {
                let lines = service.latest_lines(&ctx.patient_id).await?;
                if lines.is_empty() {
                    dispatcher.utter("Bạn chưa có đơn thuốc nào tại phòng khám.");
                    return Ok(vec![]);
                }
                (lines, "Các đơn thuốc gần nhất của bạn:".to_string())
            }
        };

        dispatcher.utter(header);
        dispatcher.utter(medication_table(&lines));

        Ok(vec![Event::clear_slot(slots::EXAM_DATE)])
    }
}
