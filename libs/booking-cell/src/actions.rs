use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use directory_cell::{ShiftService, SpecialtyDirectoryService};
use shared_models::domain::slots;
use shared_models::{Action, ActionContext, AppError, CollectingDispatcher, Event, Tracker};
use shared_utils::{format_date, format_time, parse_user_date, parse_user_time};

use crate::models::{BookingError, NewAppointment};
use crate::services::AppointmentService;
use crate::validators::resolve_doctor;

const BOOKING_SLOTS: &[&str] = &[
    slots::SPECIALTY,
    slots::DOCTOR_NAME,
    slots::BOOKING_DATE,
    slots::BOOKING_TIME,
    slots::DESCRIPTION,
];

/// Writes the appointment once the form has collected all five fields.
pub struct ActionBookAppointment;

#[async_trait]
impl Action for ActionBookAppointment {
    fn name(&self) -> &'static str {
        "action_book_appointment"
    }

    async fn run(
        &self,
        ctx: &ActionContext,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
    ) -> Result<Vec<Event>, AppError> {
        let specialty = tracker.slot_str(slots::SPECIALTY);
        let date = tracker
            .slot_str(slots::BOOKING_DATE)
            .and_then(parse_user_date);
        let time = tracker
            .slot_str(slots::BOOKING_TIME)
            .and_then(parse_user_time);
        let description = tracker.slot_str(slots::DESCRIPTION);

        let (Some(specialty), Some(date), Some(time), Some(description)) =
            (specialty, date, time, description)
        else {
            dispatcher.utter("Tôi chưa đủ thông tin để đặt lịch. Bạn vui lòng thử lại nhé.");
            return Ok(vec![]);
        };

        let Some(doctor) = resolve_doctor(ctx, tracker).await? else {
            dispatcher.utter("Tôi không xác định được bác sĩ bạn đã chọn. Bạn vui lòng thử lại nhé.");
            return Ok(vec![]);
        };

        let Some(specialty_row) = SpecialtyDirectoryService::new(ctx.pool.clone())
            .find(specialty)
            .await?
        else {
            dispatcher.utter("Tôi không xác định được chuyên khoa bạn đã chọn. Bạn vui lòng thử lại nhé.");
            return Ok(vec![]);
        };

        let shifts = ShiftService::new(ctx.pool.clone())
            .working_shifts_on(&doctor.id, date)
            .await?;

        let appointment = NewAppointment {
            id: format!("LK{}", Utc::now().timestamp()),
            patient_id: ctx.patient_id.clone(),
            doctor_id: doctor.id.clone(),
            specialty_id: specialty_row.id,
            date,
            time,
            description: description.to_string(),
        };

        match AppointmentService::new(ctx.pool.clone())
            .insert(&appointment, &shifts)
            .await
        {
            Ok(()) => {
                info!(
                    "Patient {} booked appointment {} with doctor {}",
                    ctx.patient_id, appointment.id, doctor.id
                );
                dispatcher.utter(format!(
                    "✅ Đặt lịch thành công!\n\
                     - Mã lịch khám: {}\n\
                     - Bác sĩ: {}\n\
                     - Chuyên khoa: {}\n\
                     - Ngày khám: {}\n\
                     - Giờ khám: {}\n\
                     - Mô tả: {}",
                    appointment.id,
                    doctor.name,
                    specialty_row.name,
                    format_date(date),
                    format_time(time),
                    description
                ));

                let mut events: Vec<Event> =
                    BOOKING_SLOTS.iter().map(|s| Event::clear_slot(*s)).collect();
                events.push(Event::clear_slot(slots::CURRENT_TASK));
                Ok(events)
            }
            Err(BookingError::Conflict) => {
                dispatcher.utter(format!(
                    "Bạn đã có lịch khám với bác sĩ {} trong khung giờ này. \
                     Lịch mới chưa được tạo.",
                    doctor.name
                ));
                Ok(vec![])
            }
            Err(err) => Err(err.into()),
        }
    }
}
