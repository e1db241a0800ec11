pub mod datetime;

pub use datetime::*;
