use crate::{
    api::middleware::ApiResult,
    api::AppState,
    models::{AvailabilitySlot, SlotInput},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list_availability(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> ApiResult<Json<Vec<AvailabilitySlot>>> {
    let slots = state.availability.list_slots(&employee_id).await?;
    Ok(Json(slots))
}

pub async fn add_availability(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(batch): Json<Vec<SlotInput>>,
) -> ApiResult<Json<Vec<AvailabilitySlot>>> {
    let created = state.availability.add_slots(&employee_id, batch).await?;
    Ok(Json(created))
}

pub async fn remove_availability(
    State(state): State<AppState>,
    Path((employee_id, slot_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    state.availability.delete_slot(&employee_id, &slot_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
