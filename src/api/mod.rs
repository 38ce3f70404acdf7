use crate::database::Database;
use crate::services::{AvailabilityService, ReservationClient};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod availability;
pub mod employees;
pub mod middleware;
pub mod skills;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub availability: AvailabilityService,
    pub reservations: ReservationClient,
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/employees", get(employees::list_employees))
        .route("/employees", post(employees::create_employee))
        .route("/employees/:id", get(employees::get_employee))
        .route("/employees/:id", put(employees::update_employee))
        .route("/employees/:id", delete(employees::delete_employee))
        .route(
            "/employees/:id/reservations",
            get(employees::get_reservations),
        )
        .route(
            "/employees/:id/availability",
            get(availability::list_availability),
        )
        .route(
            "/employees/:id/availability",
            post(availability::add_availability),
        )
        .route(
            "/employees/:id/availability/:slot_id",
            delete(availability::remove_availability),
        )
        .route("/employees/:id/skills", get(skills::get_skills))
        .route("/employees/:id/skills", put(skills::replace_skills))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
