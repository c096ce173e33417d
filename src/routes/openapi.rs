use axum::Json;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    dto::message_dto::{
        CreateMessagePayload, CreatedMessageResponse, MessageDetailResponse, ReadReceiptResponse,
    },
    models::{
        message::{CreatedMessage, MessageDetail, ReadReceipt},
        user::Participant,
    },
    routes::{health, messages},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        messages::get_message,
        messages::create_message,
        messages::mark_read,
    ),
    components(schemas(
        Participant,
        MessageDetail,
        CreatedMessage,
        ReadReceipt,
        CreateMessagePayload,
        MessageDetailResponse,
        CreatedMessageResponse,
        ReadReceiptResponse,
    )),
    modifiers(&BearerAuth)
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
