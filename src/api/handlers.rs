//! HTTP request handlers for the payroll services API.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tracing::{info, warn};
use uuid::Uuid;

use super::request::{
    CalculatePayrollRequest, LoginRequest, RegisterRequest, UpdateProfileRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, DeleteResponse, RegisterResponse, UpdateResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees/register", post(register_handler))
        .route("/employees/login", post(login_handler))
        .route("/employees/profile", put(update_profile_handler))
        .route("/employees", get(list_employees_handler))
        .route("/employees/by-username/:username", get(get_employee_handler))
        .route("/employees/:id", delete(delete_employee_handler))
        .route("/payroll/calculate", post(calculate_payroll_handler))
        .route("/payroll/records", get(all_payroll_records_handler))
        .route("/payroll/records/:employee_id", get(payroll_records_handler))
        .with_state(state)
}

/// Handler for `POST /employees/register`.
async fn register_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, username = %request.username, "register request");

    match state.employees().register(request.into()).await {
        Ok(registered) => Json(RegisterResponse { registered }).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "register failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /employees/login`.
///
/// Responds `200` with the employee record, or with `null` when the
/// user is unknown or the password does not match; the two cases are
/// indistinguishable on the wire.
async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, username = %request.username, "login request");

    match state
        .employees()
        .login(&request.username, &request.password)
        .await
    {
        Ok(employee) => Json(employee).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "login failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `PUT /employees/profile`.
async fn update_profile_handler(
    State(state): State<AppState>,
    Json(request): Json<UpdateProfileRequest>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, id = request.id, "update profile request");

    match state.employees().update_profile(&request.into()).await {
        Ok(updated) => Json(UpdateResponse { updated }).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "update failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /employees/by-username/{username}`.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> impl IntoResponse {
    match state.employees().get_employee_by_username(&username).await {
        Ok(employee) => Json(employee).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for `GET /employees`.
async fn list_employees_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.employees().get_all_employees().await {
        Ok(employees) => Json(employees).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for `DELETE /employees/{id}`.
async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, id, "delete employee request");

    match state.employees().delete_employee(id).await {
        Ok(deleted) => Json(DeleteResponse { deleted }).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "delete failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /payroll/calculate`.
///
/// Accepts any of the three calculation conventions and returns the
/// computed record. Validation failures surface the offending field in
/// the error body rather than a bare `400`.
async fn calculate_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculatePayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = request.employee_id(),
        period = %request.period(),
        "calculate payroll request"
    );

    let payroll = state.payroll();
    let employee_id = request.employee_id();
    let period = request.period().to_string();
    let result = match request.compensation() {
        Some(input) => payroll.calculate_itemized(employee_id, &period, input).await,
        None => match request {
            CalculatePayrollRequest::Flat { gross_pay, .. } => {
                payroll.calculate_flat(employee_id, &period, gross_pay).await
            }
            _ => payroll.calculate_default(employee_id, &period).await,
        },
    };

    match result {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                record_id = record.id,
                gross_pay = record.gross_pay,
                net_pay = record.net_pay,
                "calculation completed"
            );
            Json(record).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "calculation rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /payroll/records/{employee_id}`.
async fn payroll_records_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<i64>,
) -> impl IntoResponse {
    match state.payroll().records_for_employee(employee_id).await {
        Ok(records) => Json(records).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for `GET /payroll/records`.
async fn all_payroll_records_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.payroll().all_records().await {
        Ok(records) => Json(records).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}
