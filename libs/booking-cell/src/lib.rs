pub mod actions;
pub mod interruptions;
pub mod models;
pub mod services;
pub mod validators;
pub mod wrong_input;

pub use actions::ActionBookAppointment;
pub use models::{conflict_in_same_window, time_in_windows, BookingError, NewAppointment};
pub use services::AppointmentService;
pub use validators::ValidateBookAppointmentForm;
pub use wrong_input::{is_wrong_input, BookingField};
