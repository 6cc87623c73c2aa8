//! Service REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::ServiceResponse;
use crate::application::dto::{CreateServiceRequest, UpdateServiceRequest};
use crate::application::ServiceCatalog;
use crate::interfaces::http::common::{ApiResult, ErrorBody, JsonBody};

#[derive(Clone)]
pub struct ServiceState {
    pub catalog: Arc<ServiceCatalog>,
}

#[utoipa::path(
    get,
    path = "/api/v1/services",
    tag = "Services",
    responses(
        (status = 200, description = "Active services", body = Vec<ServiceResponse>)
    )
)]
pub async fn list_services(
    State(state): State<ServiceState>,
) -> ApiResult<Json<Vec<ServiceResponse>>> {
    let services = state.catalog.list().await?;
    Ok(Json(services.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/services/public",
    tag = "Services",
    responses(
        (status = 200, description = "Active services for the public site", body = Vec<ServiceResponse>)
    )
)]
pub async fn list_public_services(
    state: State<ServiceState>,
) -> ApiResult<Json<Vec<ServiceResponse>>> {
    list_services(state).await
}

#[utoipa::path(
    post,
    path = "/api/v1/services",
    tag = "Services",
    request_body = CreateServiceRequest,
    responses(
        (status = 201, description = "Created", body = ServiceResponse),
        (status = 422, description = "Invalid data", body = ErrorBody)
    )
)]
pub async fn create_service(
    State(state): State<ServiceState>,
    JsonBody(req): JsonBody<CreateServiceRequest>,
) -> ApiResult<(StatusCode, Json<ServiceResponse>)> {
    let service = state.catalog.create(req).await?;
    Ok((StatusCode::CREATED, Json(service.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/services/{id}",
    tag = "Services",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service details", body = ServiceResponse),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_service(
    State(state): State<ServiceState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ServiceResponse>> {
    Ok(Json(state.catalog.read(id).await?.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/services/{id}",
    tag = "Services",
    params(("id" = i32, Path, description = "Service ID")),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Updated", body = ServiceResponse),
        (status = 404, description = "Not found", body = ErrorBody),
        (status = 422, description = "Invalid data", body = ErrorBody)
    )
)]
pub async fn update_service(
    State(state): State<ServiceState>,
    Path(id): Path<i32>,
    JsonBody(req): JsonBody<UpdateServiceRequest>,
) -> ApiResult<Json<ServiceResponse>> {
    Ok(Json(state.catalog.update(id, req).await?.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/services/{id}",
    tag = "Services",
    params(("id" = i32, Path, description = "Service ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn delete_service(
    State(state): State<ServiceState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.catalog.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
