pub mod actions;
pub mod lookups;
pub mod models;
pub mod services;

pub use models::*;
pub use services::{DoctorDirectoryService, ShiftService, SpecialtyDirectoryService};
