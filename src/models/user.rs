use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public profile of a message participant, embedded in message details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Participant {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}
