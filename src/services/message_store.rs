use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{Error, Result};
use crate::models::message::{
    CreatedMessage, MessageDetail, MessageDetailRow, MessageId, ReadReceipt,
};

/// Persistence seam for messages.
///
/// Implementations own the message lifecycle: they assign ids, stamp
/// `sent_at` and perform the single `read_at` transition. `mark_read` must be
/// idempotent and never move an existing `read_at`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Returns [`Error::NotFound`] when no message has this id.
    async fn get(&self, id: MessageId) -> Result<MessageDetail>;

    /// Returns [`Error::BadRequest`] when the recipient does not exist and
    /// [`Error::Unauthorized`] when the sender does not.
    async fn create(&self, from_username: &str, to_username: &str, body: &str)
        -> Result<CreatedMessage>;

    async fn mark_read(&self, id: MessageId) -> Result<ReadReceipt>;
}

const FROM_USERNAME_FKEY: &str = "messages_from_username_fkey";
const TO_USERNAME_FKEY: &str = "messages_to_username_fkey";

/// Maps a foreign-key violation on `messages` to the participant it names.
fn unknown_participant(
    constraint: Option<&str>,
    from_username: &str,
    to_username: &str,
) -> Option<Error> {
    match constraint? {
        FROM_USERNAME_FKEY => Some(Error::Unauthorized(format!(
            "No such user: {}",
            from_username
        ))),
        TO_USERNAME_FKEY => Some(Error::BadRequest(format!(
            "No such recipient: {}",
            to_username
        ))),
        _ => None,
    }
}

#[derive(Clone)]
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn get(&self, id: MessageId) -> Result<MessageDetail> {
        let row = sqlx::query_as::<_, MessageDetailRow>(
            r#"
            SELECT m.id,
                   m.body,
                   m.sent_at,
                   m.read_at,
                   f.username   AS from_username,
                   f.first_name AS from_first_name,
                   f.last_name  AS from_last_name,
                   f.phone      AS from_phone,
                   t.username   AS to_username,
                   t.first_name AS to_first_name,
                   t.last_name  AS to_last_name,
                   t.phone      AS to_phone
            FROM messages AS m
            JOIN users AS f ON m.from_username = f.username
            JOIN users AS t ON m.to_username = t.username
            WHERE m.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(MessageDetail::from)
            .ok_or_else(|| Error::NotFound(format!("No such message: {}", id)))
    }

    async fn create(
        &self,
        from_username: &str,
        to_username: &str,
        body: &str,
    ) -> Result<CreatedMessage> {
        let message = sqlx::query_as::<_, CreatedMessage>(
            r#"
            INSERT INTO messages (from_username, to_username, body, sent_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING id, from_username, to_username, body, sent_at
            "#,
        )
        .bind(from_username)
        .bind(to_username)
        .bind(body)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            let known = match &err {
                sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                    unknown_participant(db_err.constraint(), from_username, to_username)
                }
                _ => None,
            };
            known.unwrap_or_else(|| Error::from(err))
        })?;

        Ok(message)
    }

    async fn mark_read(&self, id: MessageId) -> Result<ReadReceipt> {
        // COALESCE keeps the first timestamp when two readers race.
        let receipt = sqlx::query_as::<_, ReadReceipt>(
            r#"
            UPDATE messages
            SET read_at = COALESCE(read_at, NOW())
            WHERE id = $1
            RETURNING id, read_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        receipt.ok_or_else(|| Error::NotFound(format!("No such message: {}", id)))
    }
}
