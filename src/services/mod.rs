// src/services/mod.rs
pub mod advisory;
pub mod chat_relay;
pub mod deadline;
pub mod generator;
pub mod knowledge;
pub mod prompt;
pub mod rules;
pub mod session_manager;
