use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use tracing::info;

use crate::error::AppError;
use crate::models::*;
use crate::services::{PersonalShift, PersonalStats};
use crate::state::AppState;

#[derive(Serialize)]
struct ScheduleResponse {
    month: YearMonth,
    days: Vec<DaySchedule>,
}

#[derive(Serialize)]
struct PersonalScheduleResponse {
    employee: Employee,
    shifts: Vec<PersonalShift>,
    stats: PersonalStats,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/schedule", get(get_schedule))
        .route("/schedule/personal/{name}", get(personal_schedule))
        .route("/schedule/assign-employee", post(assign_employee))
        .route("/schedule/assign-pair", post(assign_pair))
        .route("/employees", get(list_employees).post(create_employee))
        .route("/pairs", get(list_pairs).post(create_pair))
        .route("/month", get(get_month).put(set_month))
        .route("/month/step", post(step_month))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn get_schedule(State(state): State<AppState>) -> Json<ScheduleResponse> {
    let roster = state.roster.read().await;
    Json(ScheduleResponse {
        month: roster.month(),
        days: roster.schedule().to_vec(),
    })
}

async fn personal_schedule(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PersonalScheduleResponse>, AppError> {
    let roster = state.roster.read().await;
    let employee = roster
        .employees()
        .iter()
        .find(|e| e.name == name)
        .cloned()
        .ok_or(AppError::NotFound)?;
    let shifts = roster.personal_schedule(&name);
    let stats = PersonalStats::summarize(&shifts);
    Ok(Json(PersonalScheduleResponse {
        employee,
        shifts,
        stats,
    }))
}

async fn list_employees(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.roster.read().await.employees().to_vec())
}

async fn create_employee(
    State(state): State<AppState>,
    Json(req): Json<NewEmployeeRequest>,
) -> Result<Json<Employee>, AppError> {
    let mut roster = state.roster.write().await;
    let employee = roster
        .add_employee(req.name.trim())
        .ok_or_else(|| AppError::BadRequest("employee name must not be blank".to_string()))?;
    info!("added employee {} (id {})", employee.name, employee.id);
    Ok(Json(employee))
}

async fn list_pairs(State(state): State<AppState>) -> Json<Vec<Pair>> {
    Json(state.roster.read().await.pairs().to_vec())
}

async fn create_pair(State(state): State<AppState>, Json(req): Json<NewPairRequest>) -> Response {
    let mut roster = state.roster.write().await;
    match roster.add_pair(&req.senior, &req.junior) {
        Some(pair) => {
            info!("added pair {} / {} (id {})", pair.senior, pair.junior, pair.id);
            Json(pair).into_response()
        }
        // Blank or identical names: silently ignored.
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn get_month(State(state): State<AppState>) -> Json<YearMonth> {
    Json(state.roster.read().await.month())
}

async fn set_month(
    State(state): State<AppState>,
    Json(req): Json<YearMonthRepr>,
) -> Result<Json<YearMonth>, AppError> {
    let month = YearMonth::try_from(req).map_err(AppError::BadRequest)?;
    let mut roster = state.roster.write().await;
    roster.set_month(month);
    info!("active month set to {}-{:02}", month.year(), month.month() + 1);
    Ok(Json(month))
}

async fn step_month(
    State(state): State<AppState>,
    Json(req): Json<StepMonthRequest>,
) -> Result<Json<YearMonth>, AppError> {
    let mut roster = state.roster.write().await;
    let month = roster.step_month(req.delta).ok_or_else(|| {
        AppError::BadRequest(format!(
            "stepping {} months leaves the supported calendar range",
            req.delta
        ))
    })?;
    Ok(Json(month))
}

async fn assign_employee(
    State(state): State<AppState>,
    Json(req): Json<AssignEmployeeRequest>,
) -> StatusCode {
    let mut roster = state.roster.write().await;
    roster.assign_employee(&req.days, req.shift, req.role, &req.name);
    StatusCode::NO_CONTENT
}

async fn assign_pair(
    State(state): State<AppState>,
    Json(req): Json<AssignPairRequest>,
) -> StatusCode {
    let mut roster = state.roster.write().await;
    roster.assign_pair(&req.days, req.shift, &req.pair_id);
    StatusCode::NO_CONTENT
}
