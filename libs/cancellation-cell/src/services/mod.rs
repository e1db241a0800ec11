pub mod cancellation;

pub use cancellation::CancellationService;
