pub mod action;
pub mod dispatcher;
pub mod domain;
pub mod error;
pub mod events;
pub mod tracker;

pub use action::{Action, ActionContext, ActionRegistry};
pub use dispatcher::CollectingDispatcher;
pub use error::AppError;
pub use events::{ActionResponse, BotMessage, Button, Event};
pub use tracker::{ActionRequest, ActiveLoop, Entity, Intent, LatestMessage, Tracker};
