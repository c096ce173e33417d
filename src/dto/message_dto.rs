use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::message::{CreatedMessage, MessageDetail, ReadReceipt};

/// Body of `POST /messages`. The sender is always the authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateMessagePayload {
    #[serde(rename = "toUsername")]
    #[validate(length(min = 1))]
    pub to_username: String,
    #[validate(length(min = 1))]
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDetailResponse {
    pub message: MessageDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedMessageResponse {
    pub message: CreatedMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReadReceiptResponse {
    pub message: ReadReceipt,
}

impl From<MessageDetail> for MessageDetailResponse {
    fn from(message: MessageDetail) -> Self {
        Self { message }
    }
}

impl From<CreatedMessage> for CreatedMessageResponse {
    fn from(message: CreatedMessage) -> Self {
        Self { message }
    }
}

impl From<ReadReceipt> for ReadReceiptResponse {
    fn from(message: ReadReceipt) -> Self {
        Self { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_uses_camel_case_recipient() {
        let payload: CreateMessagePayload =
            serde_json::from_value(json!({"toUsername": "bob", "body": "hello"})).unwrap();
        assert_eq!(payload.to_username, "bob");
        assert_eq!(payload.body, "hello");
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn payload_rejects_caller_supplied_extras() {
        let result = serde_json::from_value::<CreateMessagePayload>(json!({
            "toUsername": "bob",
            "body": "hello",
            "from_username": "mallory"
        }));
        assert!(result.is_err());

        let result = serde_json::from_value::<CreateMessagePayload>(json!({
            "toUsername": "bob",
            "body": "hello",
            "sent_at": "2020-01-01T00:00:00Z"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn payload_requires_both_fields() {
        assert!(serde_json::from_value::<CreateMessagePayload>(json!({"body": "x"})).is_err());
        assert!(serde_json::from_value::<CreateMessagePayload>(json!({"toUsername": "bob"})).is_err());
    }

    #[test]
    fn empty_fields_fail_validation() {
        let payload = CreateMessagePayload {
            to_username: String::new(),
            body: "hello".into(),
        };
        assert!(payload.validate().is_err());

        let payload = CreateMessagePayload {
            to_username: "bob".into(),
            body: String::new(),
        };
        assert!(payload.validate().is_err());
    }
}
