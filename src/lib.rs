pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use crate::services::{
    message_service::MessageService,
    message_store::{MessageStore, PgMessageStore},
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub message_service: MessageService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self::with_store(Arc::new(PgMessageStore::new(pool)))
    }

    pub fn with_store(store: Arc<dyn MessageStore>) -> Self {
        Self {
            message_service: MessageService::new(store),
        }
    }
}
