use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use directory_cell::{
    format_windows, DoctorCard, DoctorDirectoryService, ShiftService, SpecialtyDirectoryService,
};
use shared_models::domain::{entities, intents, slots};
use shared_models::{Action, ActionContext, AppError, Button, CollectingDispatcher, Event, Tracker};
use shared_utils::{format_date, format_time, parse_user_date, parse_user_time, today};

use crate::interruptions;
use crate::models::{conflict_in_same_window, time_in_windows, MIN_DESCRIPTION_CHARS};
use crate::services::AppointmentService;
use crate::wrong_input::{is_wrong_input, BookingField};

/// Field-level validation for the booking form.
///
/// The host calls this action after every user turn while the form is
/// active; only the currently requested slot is validated. Rejections
/// clear the slot so the form re-asks it.
pub struct ValidateBookAppointmentForm;

#[async_trait]
impl Action for ValidateBookAppointmentForm {
    fn name(&self) -> &'static str {
        "validate_book_appointment_form"
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

        // Side questions answer in place and keep the form where it is.
        if let Some(events) = interruptions::handle(ctx, dispatcher, tracker).await? {
            return Ok(events);
        }

        let Some(candidate) = tracker.candidate(&requested) else {
            return Ok(vec![]);
        };

        debug!("Validating {} = {:?}", requested, candidate);

        match requested.as_str() {
            slots::SPECIALTY => validate_specialty(ctx, dispatcher, &candidate).await,
            slots::DOCTOR_NAME => validate_doctor_name(ctx, dispatcher, tracker, &candidate).await,
            slots::BOOKING_DATE => validate_booking_date(ctx, dispatcher, tracker, &candidate).await,
            slots::BOOKING_TIME => validate_booking_time(ctx, dispatcher, tracker, &candidate).await,
            slots::DESCRIPTION => validate_description(ctx, dispatcher, tracker, &candidate).await,
            _ => Ok(vec![]),
        }
    }
}

async fn validate_specialty(
    ctx: &ActionContext,
    dispatcher: &mut CollectingDispatcher,
    candidate: &str,
) -> Result<Vec<Event>, AppError> {
    if is_wrong_input(BookingField::Specialty, candidate) {
        dispatcher.utter(
            "Có vẻ đó không phải tên chuyên khoa. Bạn cho tôi biết chuyên khoa muốn khám nhé?",
        );
        return Ok(vec![Event::clear_slot(slots::SPECIALTY)]);
    }

    let service = SpecialtyDirectoryService::new(ctx.pool.clone());
    match service.find(candidate).await? {
        Some(specialty) => Ok(vec![Event::set_slot(slots::SPECIALTY, specialty.name)]),
        None => {
            let names: Vec<String> = service.all().await?.into_iter().map(|s| s.name).collect();
            dispatcher.utter(format!(
                "Phòng khám không có chuyên khoa \"{candidate}\". Các chuyên khoa hiện có: {}.",
                names.join(", ")
            ));
            Ok(vec![Event::clear_slot(slots::SPECIALTY)])
        }
    }
}

async fn validate_doctor_name(
    ctx: &ActionContext,
    dispatcher: &mut CollectingDispatcher,
    tracker: &Tracker,
    candidate: &str,
) -> Result<Vec<Event>, AppError> {
    if is_wrong_input(BookingField::DoctorName, candidate) {
        dispatcher.utter("Có vẻ đó không phải tên bác sĩ. Bạn muốn khám với bác sĩ nào?");
        return Ok(vec![Event::clear_slot(slots::DOCTOR_NAME)]);
    }

    let slot_specialty = tracker.slot_str(slots::SPECIALTY);
    // A disambiguation button also carries the specialty as an entity.
    let scope = slot_specialty
        .map(str::to_string)
        .or_else(|| tracker.entity_value(entities::SPECIALTY));

    let service = DoctorDirectoryService::new(ctx.pool.clone());
    let matches = service.find_by_name(candidate, scope.as_deref()).await?;

    if matches.is_empty() {
        match scope.as_deref() {
            Some(specialty) => {
                let colleagues = service.list(Some(specialty)).await?;
                if colleagues.is_empty() {
                    dispatcher.utter(format!(
                        "Không tìm thấy bác sĩ nào tên \"{candidate}\" thuộc chuyên khoa {specialty}."
                    ));
                } else {
                    let names: Vec<String> =
                        colleagues.into_iter().map(|d| d.name).collect();
                    dispatcher.utter(format!(
                        "Không tìm thấy bác sĩ nào tên \"{candidate}\" thuộc chuyên khoa \
                         {specialty}. Các bác sĩ của khoa: {}.",
                        names.join(", ")
                    ));
                }
            }
            None => {
                dispatcher.utter(format!("Không tìm thấy bác sĩ nào tên \"{candidate}\"."));
            }
        }
        return Ok(vec![Event::clear_slot(slots::DOCTOR_NAME)]);
    }

    if matches.len() > 1 {
        // Several doctors share the name, or one doctor holds several
        // specialties; either way the user has to pick one pairing.
        let buttons: Vec<Button> = matches
            .iter()
            .map(|card| {
                Button::command(
                    format!("BS {} - {}", card.name, card.specialty),
                    intents::INFORM,
                    &json!({
                        (entities::DOCTOR_NAME): card.name,
                        (entities::SPECIALTY): card.specialty,
                    }),
                )
            })
            .collect();
        dispatcher.utter_buttons("Có nhiều bác sĩ phù hợp, bạn muốn chọn ai?", buttons);
        return Ok(vec![Event::clear_slot(slots::DOCTOR_NAME)]);
    }

    let card = &matches[0];
    let mut events = vec![Event::set_slot(slots::DOCTOR_NAME, card.name.clone())];

    if slot_specialty.is_none() {
        dispatcher.utter(format!(
            "Bác sĩ {} thuộc chuyên khoa {}, tôi sẽ đặt lịch ở chuyên khoa này.",
            card.name, card.specialty
        ));
        events.push(Event::set_slot(slots::SPECIALTY, card.specialty.clone()));
    }

    Ok(events)
}

async fn validate_booking_date(
    ctx: &ActionContext,
    dispatcher: &mut CollectingDispatcher,
    tracker: &Tracker,
    candidate: &str,
) -> Result<Vec<Event>, AppError> {
    if is_wrong_input(BookingField::Date, candidate) {
        dispatcher.utter("Có vẻ đó không phải ngày khám. Bạn muốn khám ngày nào?");
        return Ok(vec![Event::clear_slot(slots::BOOKING_DATE)]);
    }

    let Some(date) = parse_user_date(candidate) else {
        dispatcher.utter(
            "Ngày không đúng định dạng. Bạn nhập theo dạng ngày/tháng/năm giúp tôi nhé, \
             ví dụ 25/08/2026.",
        );
        return Ok(vec![Event::clear_slot(slots::BOOKING_DATE)]);
    };

    if date < today() {
        dispatcher.utter(format!(
            "Ngày {} đã qua. Bạn chọn một ngày từ hôm nay trở đi nhé.",
            format_date(date)
        ));
        return Ok(vec![Event::clear_slot(slots::BOOKING_DATE)]);
    }

    let Some(doctor) = resolve_doctor(ctx, tracker).await? else {
        // Doctor slot not usable yet; the past check is all we can do.
        return Ok(vec![Event::set_slot(slots::BOOKING_DATE, format_date(date))]);
    };

    let shifts = ShiftService::new(ctx.pool.clone())
        .working_shifts_on(&doctor.id, date)
        .await?;

    if shifts.is_empty() {
        dispatcher.utter(format!(
            "Bác sĩ {} không làm việc ngày {}. Bạn chọn ngày khác giúp tôi nhé.",
            doctor.name,
            format_date(date)
        ));
        return Ok(vec![Event::clear_slot(slots::BOOKING_DATE)]);
    }

    dispatcher.utter(format!(
        "Ngày {} bác sĩ {} làm việc các khung giờ: {}.",
        format_date(date),
        doctor.name,
        format_windows(&shifts)
    ));

    Ok(vec![Event::set_slot(slots::BOOKING_DATE, format_date(date))])
}

async fn validate_booking_time(
    ctx: &ActionContext,
    dispatcher: &mut CollectingDispatcher,
    tracker: &Tracker,
    candidate: &str,
) -> Result<Vec<Event>, AppError> {
    if is_wrong_input(BookingField::Time, candidate) {
        dispatcher.utter("Có vẻ đó không phải giờ khám. Bạn muốn khám lúc mấy giờ?");
        return Ok(vec![Event::clear_slot(slots::BOOKING_TIME)]);
    }

    let Some(time) = parse_user_time(candidate) else {
        dispatcher.utter(
            "Giờ không đúng định dạng. Bạn nhập theo dạng giờ:phút giúp tôi nhé, ví dụ 09:30.",
        );
        return Ok(vec![Event::clear_slot(slots::BOOKING_TIME)]);
    };

    let doctor = resolve_doctor(ctx, tracker).await?;
    let date = tracker
        .slot_str(slots::BOOKING_DATE)
        .and_then(parse_user_date);

    let (Some(doctor), Some(date)) = (doctor, date) else {
        return Ok(vec![Event::set_slot(slots::BOOKING_TIME, format_time(time))]);
    };

    let shifts = ShiftService::new(ctx.pool.clone())
        .working_shifts_on(&doctor.id, date)
        .await?;

    if shifts.is_empty() {
        dispatcher.utter(format!(
            "Bác sĩ {} không làm việc ngày {}. Bạn chọn lại ngày khám giúp tôi nhé.",
            doctor.name,
            format_date(date)
        ));
        return Ok(vec![Event::clear_slot(slots::BOOKING_TIME)]);
    }

    if !time_in_windows(time, &shifts) {
        dispatcher.utter(format!(
            "Giờ {} nằm ngoài giờ làm việc của bác sĩ {}. Các khung giờ hợp lệ: {}.",
            format_time(time),
            doctor.name,
            format_windows(&shifts)
        ));
        return Ok(vec![Event::clear_slot(slots::BOOKING_TIME)]);
    }

    Ok(vec![Event::set_slot(slots::BOOKING_TIME, format_time(time))])
}

async fn validate_description(
    ctx: &ActionContext,
    dispatcher: &mut CollectingDispatcher,
    tracker: &Tracker,
    candidate: &str,
) -> Result<Vec<Event>, AppError> {
    if candidate.chars().count() < MIN_DESCRIPTION_CHARS {
        dispatcher.utter(
            "Bạn mô tả triệu chứng chi tiết hơn một chút giúp tôi nhé (ít nhất vài từ).",
        );
        return Ok(vec![Event::clear_slot(slots::DESCRIPTION)]);
    }

    if is_wrong_input(BookingField::Description, candidate) {
        dispatcher.utter("Có vẻ đó chưa phải mô tả triệu chứng. Bạn đang gặp vấn đề gì?");
        return Ok(vec![Event::clear_slot(slots::DESCRIPTION)]);
    }

    // Last field of the form: with doctor, date, and time all validated,
    // check the patient is not already booked in the same shift window.
    let doctor = resolve_doctor(ctx, tracker).await?;
    let date = tracker
        .slot_str(slots::BOOKING_DATE)
        .and_then(parse_user_date);
    let time = tracker
        .slot_str(slots::BOOKING_TIME)
        .and_then(parse_user_time);

    let (Some(doctor), Some(date), Some(time)) = (doctor, date, time) else {
        return Ok(vec![Event::set_slot(slots::DESCRIPTION, candidate.to_string())]);
    };

    let shifts = ShiftService::new(ctx.pool.clone())
        .working_shifts_on(&doctor.id, date)
        .await?;
    let existing = AppointmentService::new(ctx.pool.clone())
        .booked_times(&ctx.patient_id, &doctor.id, date)
        .await?;

    if conflict_in_same_window(time, &existing, &shifts) {
        dispatcher.utter(format!(
            "Bạn đã có lịch khám với bác sĩ {} trong khung giờ này ngày {}. \
             Vui lòng chọn khung giờ khác hoặc hủy lịch cũ trước.",
            doctor.name,
            format_date(date)
        ));
        return Ok(vec![Event::clear_slot(slots::DESCRIPTION)]);
    }

    Ok(vec![Event::set_slot(slots::DESCRIPTION, candidate.to_string())])
}

/// Resolve the already-validated doctor slot to its directory row, scoped
/// to the chosen specialty. Slots only hold the display name, so the id
/// is re-read here.
pub(crate) async fn resolve_doctor(
    ctx: &ActionContext,
    tracker: &Tracker,
) -> Result<Option<DoctorCard>, AppError> {
    let Some(name) = tracker.slot_str(slots::DOCTOR_NAME) else {
        return Ok(None);
    };
    let specialty = tracker.slot_str(slots::SPECIALTY);

    DoctorDirectoryService::new(ctx.pool.clone())
        .resolve(name, specialty)
        .await
        .map_err(Into::into)
}
