use crate::{
    api::middleware::ApiResult,
    api::AppState,
    models::{CreateEmployeeRequest, Employee, ListParams, Reservation, UpdateEmployeeRequest},
    services::employee_service,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Employee>>> {
    let employees =
        employee_service::list_employees(state.db.as_ref(), params.skip, params.limit).await?;
    Ok(Json(employees))
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let employee = employee_service::create_employee(state.db.as_ref(), request).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Employee>> {
    let employee = employee_service::get_employee(state.db.as_ref(), &id).await?;
    Ok(Json(employee))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateEmployeeRequest>,
) -> ApiResult<Json<Employee>> {
    let employee = employee_service::update_employee(state.db.as_ref(), &id, request).await?;
    Ok(Json(employee))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    employee_service::delete_employee(state.db.as_ref(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_reservations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Reservation>>> {
    // Unknown employees 404 before the upstream call.
    employee_service::get_employee(state.db.as_ref(), &id).await?;
    let reservations = state.reservations.reservations_for_employee(&id).await?;
    Ok(Json(reservations))
}
