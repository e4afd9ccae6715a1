//! # Taskmate - personal task management with an AI assistant
//!
//! A command-line utility for organizing tasks into buckets, tracking
//! due dates, and asking an assistant questions about your workload.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, complete, and delete tasks
//! - **Buckets**: Group tasks into named, colored containers
//! - **AI Assistant**: Ask free-text questions about your tasks
//! - **Task Enhancement**: AI-suggested descriptions, subtasks, and estimates
//! - **Chat History**: Persistent question/answer log with daily quota
//! - **Provider Integrations**: Optional LLM and web-search backends with
//!   a deterministic rule-based fallback
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmate::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
