pub mod message_service;
pub mod message_store;
