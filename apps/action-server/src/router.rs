use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use sqlx::MySqlPool;
use tracing::{debug, error, info};

use shared_models::{
    ActionContext, ActionRegistry, ActionRequest, ActionResponse, AppError, CollectingDispatcher,
};

pub struct ServerState {
    pub pool: MySqlPool,
    pub registry: ActionRegistry,
}

/// Every action the dialogue engine may ask this server to run.
pub fn build_registry() -> ActionRegistry {
    let mut registry = ActionRegistry::new();

    // Triage
    registry.register(triage_cell::ValidateRecommendDoctorForm);
    registry.register(triage_cell::ActionRecommendDoctor);

    // Booking
    registry.register(booking_cell::ValidateBookAppointmentForm);
    registry.register(booking_cell::ActionBookAppointment);

    // Cancellation
    registry.register(cancellation_cell::ValidateCancelAppointmentForm);
    registry.register(cancellation_cell::ActionConfirmCancellation);
    registry.register(cancellation_cell::ActionCancelAppointment);

    // Prescriptions
    registry.register(prescription_cell::ActionLookupPrescription);

    // Directory
    registry.register(directory_cell::actions::ActionExplainSpecialty);
    registry.register(directory_cell::actions::ActionListDoctors);
    registry.register(directory_cell::actions::ActionDoctorInfo);
    registry.register(directory_cell::actions::ActionDoctorSchedule);
    registry.register(directory_cell::actions::ActionLastExaminer);

    // Recovery
    registry.register(fallback_cell::ActionFallback);
    registry.register(fallback_cell::ActionOutOfScope);
    registry.register(fallback_cell::ActionDeny);
    registry.register(fallback_cell::ActionSetCurrentTask);

    info!("Registered {} actions", registry.len());
    debug!("Action names: {:?}", registry.names());
    registry
}

pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic action server is running!" }))
        .route("/health", get(health))
        .route("/webhook", post(run_action))
        .with_state(state)
}

async fn health(
    State(state): State<Arc<ServerState>>,
) -> Result<Json<serde_json::Value>, AppError> {
    sqlx::query("SELECT 1").execute(&state.pool).await?;
    Ok(Json(json!({ "status": "ok" })))
}

/// Generic in-chat message for database failures. The turn ends with the
/// messages collected so far and no state changes.
const DB_ERROR_MESSAGE: &str =
    "Xin lỗi, hệ thống đang gặp sự cố khi truy cập dữ liệu. Bạn vui lòng thử lại sau ít phút.";

async fn run_action(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<ActionRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    let Some(action) = state.registry.get(&request.next_action) else {
        return Err(AppError::NotFound(format!(
            "No registered action named {}",
            request.next_action
        )));
    };

    let ctx = ActionContext {
        pool: state.pool.clone(),
        patient_id: request.sender_id.clone(),
        domain: request.domain.clone(),
    };
    let mut dispatcher = CollectingDispatcher::new();

    let events = match action.run(&ctx, &mut dispatcher, &request.tracker).await {
        Ok(events) => events,
        Err(AppError::Database(message)) => {
            error!("Database failure in {}: {}", request.next_action, message);
            dispatcher.utter(DB_ERROR_MESSAGE);
            Vec::new()
        }
        Err(err) => return Err(err),
    };

    Ok(Json(ActionResponse {
        events,
        responses: dispatcher.into_messages(),
    }))
}
