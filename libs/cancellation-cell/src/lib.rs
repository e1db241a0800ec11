pub mod actions;
pub mod models;
pub mod services;

pub use actions::{ActionCancelAppointment, ActionConfirmCancellation, ValidateCancelAppointmentForm};
pub use models::{AppointmentSummary, CancellationError};
pub use services::CancellationService;
