pub mod doctor;
pub mod schedule;
pub mod specialty;

pub use doctor::DoctorDirectoryService;
pub use schedule::ShiftService;
pub use specialty::SpecialtyDirectoryService;
