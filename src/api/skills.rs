use crate::{
    api::middleware::ApiResult,
    api::AppState,
    models::EmployeeSkill,
    services::skill_service,
};
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn get_skills(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> ApiResult<Json<Vec<EmployeeSkill>>> {
    let skills =
        skill_service::get_skills(state.db.as_ref(), state.db.as_ref(), &employee_id).await?;
    Ok(Json(skills))
}

pub async fn replace_skills(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(service_ids): Json<Vec<i64>>,
) -> ApiResult<Json<Vec<EmployeeSkill>>> {
    let skills = skill_service::replace_skills(
        state.db.as_ref(),
        state.db.as_ref(),
        &employee_id,
        service_ids,
    )
    .await?;
    Ok(Json(skills))
}
