use shared_models::domain::{slots, tasks};

/// Canned re-prompt hint for the field the active form is waiting on.
pub fn hint_for(slot: &str) -> &'static str {
    match slot {
        slots::SYMPTOMS => "Bạn hãy kể các triệu chứng đang gặp, ví dụ: đau đầu, sốt.",
        slots::SPECIALTY => "Bạn cho tôi biết chuyên khoa muốn khám, ví dụ: Nội khoa.",
        slots::DOCTOR_NAME => "Bạn muốn khám với bác sĩ nào? Nhập tên bác sĩ giúp tôi nhé.",
        slots::BOOKING_DATE => {
            "Bạn nhập ngày khám theo dạng ngày/tháng/năm giúp tôi, ví dụ 25/08/2026."
        }
        slots::BOOKING_TIME => "Bạn nhập giờ khám theo dạng giờ:phút giúp tôi, ví dụ 09:30.",
        slots::DESCRIPTION => "Bạn mô tả ngắn gọn vấn đề sức khỏe đang gặp phải.",
        slots::CANCEL_DATE => "Bạn nhập ngày có lịch khám muốn hủy, theo dạng ngày/tháng/năm.",
        slots::CANCEL_APPOINTMENT_ID => {
            "Bạn chọn một lịch khám trong danh sách hoặc nhập mã lịch khám."
        }
        _ => "Bạn trả lời giúp tôi câu hỏi phía trên nhé.",
    }
}

/// The slots each task owns, cleared together when the user abandons it.
pub fn bundle_for(task: &str) -> &'static [&'static str] {
    match task {
        tasks::BOOK_APPOINTMENT => &[
            slots::SPECIALTY,
            slots::DOCTOR_NAME,
            slots::BOOKING_DATE,
            slots::BOOKING_TIME,
            slots::DESCRIPTION,
        ],
        tasks::CANCEL_APPOINTMENT => &[slots::CANCEL_DATE, slots::CANCEL_APPOINTMENT_ID],
        tasks::RECOMMEND_DOCTOR => &[slots::SYMPTOMS, slots::SPECIALTY_SUGGESTED],
        _ => &[],
    }
}

/// Static top-level menu offered when no form is active.
pub const MENU: &str = "Tôi có thể giúp bạn:\n\
     - Tư vấn chuyên khoa theo triệu chứng\n\
     - Đặt lịch khám với bác sĩ\n\
     - Hủy lịch khám đã đặt\n\
     - Tra cứu đơn thuốc\n\
     - Xem thông tin bác sĩ và chuyên khoa";
