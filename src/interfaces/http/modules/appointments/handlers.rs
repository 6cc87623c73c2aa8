//! Appointment REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::AppointmentResponse;
use crate::application::dto::{CreateAppointmentRequest, UpdateAppointmentRequest};
use crate::application::AppointmentService;
use crate::interfaces::http::common::{ApiResult, ErrorBody, JsonBody};

#[derive(Clone)]
pub struct AppointmentState {
    pub appointments: Arc<AppointmentService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/appointments",
    tag = "Appointments",
    responses(
        (status = 200, description = "All appointments", body = Vec<AppointmentResponse>)
    )
)]
pub async fn list_appointments(
    State(state): State<AppointmentState>,
) -> ApiResult<Json<Vec<AppointmentResponse>>> {
    let appointments = state.appointments.list().await?;
    Ok(Json(appointments.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/v1/appointments",
    tag = "Appointments",
    request_body = CreateAppointmentRequest,
    responses(
        (status = 201, description = "Booked", body = AppointmentResponse),
        (status = 422, description = "Invalid data", body = ErrorBody)
    )
)]
pub async fn create_appointment(
    State(state): State<AppointmentState>,
    JsonBody(req): JsonBody<CreateAppointmentRequest>,
) -> ApiResult<(StatusCode, Json<AppointmentResponse>)> {
    let appointment = state.appointments.create(req).await?;
    Ok((StatusCode::CREATED, Json(appointment.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/appointments/book",
    tag = "Appointments",
    request_body = CreateAppointmentRequest,
    responses(
        (status = 201, description = "Booked from the public site", body = AppointmentResponse),
        (status = 422, description = "Invalid data", body = ErrorBody)
    )
)]
pub async fn book_appointment(
    state: State<AppointmentState>,
    body: JsonBody<CreateAppointmentRequest>,
) -> ApiResult<(StatusCode, Json<AppointmentResponse>)> {
    create_appointment(state, body).await
}

#[utoipa::path(
    get,
    path = "/api/v1/appointments/{id}",
    tag = "Appointments",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment details", body = AppointmentResponse),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_appointment(
    State(state): State<AppointmentState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<AppointmentResponse>> {
    Ok(Json(state.appointments.read(id).await?.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/appointments/{id}",
    tag = "Appointments",
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = UpdateAppointmentRequest,
    responses(
        (status = 200, description = "Updated", body = AppointmentResponse),
        (status = 404, description = "Not found", body = ErrorBody),
        (status = 422, description = "Invalid data", body = ErrorBody)
    )
)]
pub async fn update_appointment(
    State(state): State<AppointmentState>,
    Path(id): Path<i32>,
    JsonBody(req): JsonBody<UpdateAppointmentRequest>,
) -> ApiResult<Json<AppointmentResponse>> {
    Ok(Json(state.appointments.update(id, req).await?.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/appointments/{id}",
    tag = "Appointments",
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn delete_appointment(
    State(state): State<AppointmentState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.appointments.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
