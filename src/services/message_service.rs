use std::sync::Arc;

use crate::dto::message_dto::CreateMessagePayload;
use crate::error::{Error, Result};
use crate::middleware::auth::CurrentUser;
use crate::models::message::{CreatedMessage, MessageDetail, MessageId, ReadReceipt};
use crate::services::message_store::MessageStore;

pub const NOT_AUTHORIZED_TO_VIEW: &str = "User not authorized to view this message";
pub const NOT_AUTHORIZED_TO_READ: &str = "User not authorized to read message";

/// Participant-scoped access to messages held by a [`MessageStore`].
#[derive(Clone)]
pub struct MessageService {
    store: Arc<dyn MessageStore>,
}

impl MessageService {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// Either participant may view a message.
    pub async fn get_message(&self, id: MessageId, caller: &CurrentUser) -> Result<MessageDetail> {
        let message = self.store.get(id).await?;
        if !message.is_participant(caller.username()) {
            tracing::warn!(message_id = id, caller = caller.username(), "message view denied");
            return Err(Error::Unauthorized(NOT_AUTHORIZED_TO_VIEW.to_string()));
        }
        Ok(message)
    }

    pub async fn create_message(
        &self,
        payload: CreateMessagePayload,
        caller: &CurrentUser,
    ) -> Result<CreatedMessage> {
        let message = self
            .store
            .create(caller.username(), &payload.to_username, &payload.body)
            .await?;
        tracing::info!(
            message_id = message.id,
            from = %message.from_username,
            to = %message.to_username,
            "message sent"
        );
        Ok(message)
    }

    /// Only the recipient may mark a message read. Repeat calls return the
    /// original `read_at`.
    pub async fn mark_read(&self, id: MessageId, caller: &CurrentUser) -> Result<ReadReceipt> {
        let message = self.store.get(id).await?;
        if !message.is_recipient(caller.username()) {
            tracing::warn!(message_id = id, caller = caller.username(), "mark read denied");
            return Err(Error::Unauthorized(NOT_AUTHORIZED_TO_READ.to_string()));
        }
        let receipt = self.store.mark_read(id).await?;
        tracing::debug!(message_id = id, read_at = %receipt.read_at, "message marked read");
        Ok(receipt)
    }
}
