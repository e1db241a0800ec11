pub mod actions;
pub mod hints;

pub use actions::{ActionDeny, ActionFallback, ActionOutOfScope, ActionSetCurrentTask};
pub use hints::{bundle_for, hint_for};
