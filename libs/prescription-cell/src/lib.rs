pub mod actions;
pub mod models;
pub mod render;
pub mod services;

pub use actions::ActionLookupPrescription;
pub use models::{MedicationLine, PrescriptionError};
pub use services::PrescriptionService;
