//! HTTP request handlers for the Duty-Time Reconciliation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{
    AttendancePunch, BreakRecord, Employee, HolidaySpan, LeaveSpan, ReportDocument, ReportPeriod,
};
use crate::reconciliation::reconcile_range;

use super::request::ReportRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .with_state(state)
}

/// Handler for the POST /report endpoint.
///
/// Accepts a report request and returns the reconciled duty report.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing duty report request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // An entirely empty report request is a caller error, not an
    // all-absent period.
    if request.has_no_data() {
        warn!(
            correlation_id = %correlation_id,
            employee_code = %request.employee.code,
            "Report data not found"
        );
        let api_error: ApiErrorResponse = EngineError::ReportDataNotFound {
            employee_code: request.employee.code.clone(),
        }
        .into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    // Convert request types to domain types
    let employee: Employee = request.employee.into();
    let period: ReportPeriod = request.period.into();
    let attendance: Vec<AttendancePunch> =
        request.attendance.into_iter().map(Into::into).collect();
    let leaves: Vec<LeaveSpan> = request.leaves.into_iter().map(Into::into).collect();
    let holidays: Vec<HolidaySpan> = request.holidays.into_iter().map(Into::into).collect();
    let breaks: Vec<BreakRecord> = request.breaks.into_iter().map(Into::into).collect();

    match reconcile_range(
        &period,
        &attendance,
        &leaves,
        &holidays,
        &breaks,
        state.policy(),
    ) {
        Ok(reconciliation) => {
            info!(
                correlation_id = %correlation_id,
                employee_code = %employee.code,
                days = reconciliation.days.len(),
                present_count = reconciliation.summary.present_count,
                total_actual_duty_minutes = reconciliation.summary.total_actual_duty_minutes,
                "Duty report generated"
            );

            let document = ReportDocument {
                report_id: Uuid::new_v4(),
                generated_at: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                employee,
                period,
                days: reconciliation.days,
                summary: reconciliation.summary,
            };

            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(document),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Duty report generation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
