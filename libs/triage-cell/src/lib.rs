pub mod actions;
pub mod symptoms;

pub use actions::{ActionRecommendDoctor, ValidateRecommendDoctorForm};
pub use symptoms::{specialty_for, suggested_specialties, GENERAL_SPECIALTY};
