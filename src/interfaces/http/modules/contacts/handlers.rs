//! Contact REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::ContactResponse;
use crate::application::dto::{CreateContactRequest, UpdateContactRequest};
use crate::application::ContactService;
use crate::interfaces::http::common::{ApiResult, ErrorBody, JsonBody};

#[derive(Clone)]
pub struct ContactState {
    pub contacts: Arc<ContactService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/contacts",
    tag = "Contacts",
    responses(
        (status = 200, description = "Contact messages, newest first", body = Vec<ContactResponse>)
    )
)]
pub async fn list_contacts(
    State(state): State<ContactState>,
) -> ApiResult<Json<Vec<ContactResponse>>> {
    let contacts = state.contacts.list().await?;
    Ok(Json(contacts.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/v1/contacts",
    tag = "Contacts",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Received", body = ContactResponse),
        (status = 422, description = "Invalid data", body = ErrorBody)
    )
)]
pub async fn create_contact(
    State(state): State<ContactState>,
    JsonBody(req): JsonBody<CreateContactRequest>,
) -> ApiResult<(StatusCode, Json<ContactResponse>)> {
    let contact = state.contacts.create(req).await?;
    Ok((StatusCode::CREATED, Json(contact.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/contacts/send",
    tag = "Contacts",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Received from the public site", body = ContactResponse),
        (status = 422, description = "Invalid data", body = ErrorBody)
    )
)]
pub async fn send_contact(
    state: State<ContactState>,
    body: JsonBody<CreateContactRequest>,
) -> ApiResult<(StatusCode, Json<ContactResponse>)> {
    create_contact(state, body).await
}

#[utoipa::path(
    get,
    path = "/api/v1/contacts/{id}",
    tag = "Contacts",
    params(("id" = i32, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Contact details", body = ContactResponse),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_contact(
    State(state): State<ContactState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ContactResponse>> {
    Ok(Json(state.contacts.read(id).await?.into()))
}

#[utoipa::path(
    put,
    path = "/api/v1/contacts/{id}",
    tag = "Contacts",
    params(("id" = i32, Path, description = "Contact ID")),
    request_body = UpdateContactRequest,
    responses(
        (status = 200, description = "Status updated", body = ContactResponse),
        (status = 404, description = "Not found", body = ErrorBody),
        (status = 422, description = "Invalid status", body = ErrorBody)
    )
)]
pub async fn update_contact(
    State(state): State<ContactState>,
    Path(id): Path<i32>,
    JsonBody(req): JsonBody<UpdateContactRequest>,
) -> ApiResult<Json<ContactResponse>> {
    Ok(Json(state.contacts.update(id, req).await?.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/contacts/{id}",
    tag = "Contacts",
    params(("id" = i32, Path, description = "Contact ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn delete_contact(
    State(state): State<ContactState>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.contacts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
