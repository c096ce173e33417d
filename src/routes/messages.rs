use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use validator::Validate;

use crate::{
    dto::message_dto::{
        CreateMessagePayload, CreatedMessageResponse, MessageDetailResponse, ReadReceiptResponse,
    },
    error::Result,
    middleware::auth::{require_bearer_auth, CurrentUser},
    models::message::MessageId,
    AppState,
};

/// Message endpoints. Every route requires a logged-in caller.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages", post(create_message))
        .route("/messages/:id", get(get_message))
        .route("/messages/:id/read", post(mark_read))
        .route_layer(axum::middleware::from_fn(require_bearer_auth))
}

#[utoipa::path(
    get,
    path = "/messages/{id}",
    params(
        ("id" = i64, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message detail", body = MessageDetailResponse),
        (status = 401, description = "Caller is neither sender nor recipient"),
        (status = 404, description = "Message not found")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn get_message(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<MessageId>,
) -> Result<impl IntoResponse> {
    let message = state.message_service.get_message(id, &user).await?;
    Ok(Json(MessageDetailResponse::from(message)))
}

#[utoipa::path(
    post,
    path = "/messages",
    request_body = CreateMessagePayload,
    responses(
        (status = 200, description = "Message sent", body = CreatedMessageResponse),
        (status = 400, description = "Invalid payload or unknown recipient"),
        (status = 401, description = "Not logged in or sender unknown"),
        (status = 422, description = "Unrecognized or missing fields")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn create_message(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<CreateMessagePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let message = state.message_service.create_message(payload, &user).await?;
    Ok(Json(CreatedMessageResponse::from(message)))
}

#[utoipa::path(
    post,
    path = "/messages/{id}/read",
    params(
        ("id" = i64, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message marked read", body = ReadReceiptResponse),
        (status = 401, description = "Caller is not the recipient"),
        (status = 404, description = "Message not found")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn mark_read(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<MessageId>,
) -> Result<impl IntoResponse> {
    let receipt = state.message_service.mark_read(id, &user).await?;
    Ok(Json(ReadReceiptResponse::from(receipt)))
}
