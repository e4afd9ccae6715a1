//! SQLite-backed storage for tasks, buckets, chat history, and settings.
//!
//! Each accessor module owns its schema and ensures the tables exist on
//! construction. All SQL lives in module-level constants.

pub mod buckets;
pub mod chat_history;
pub mod db;
pub mod settings;
pub mod tasks;
