use super::db::Db;
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

/// Most recent records kept per user; older ones are pruned on append.
pub const RETENTION_LIMIT: usize = 50;
/// Persisted field limits, applied at the storage boundary.
pub const MAX_MESSAGE_LEN: usize = 1000;
pub const MAX_RESPONSE_LEN: usize = 2000;

const SCHEMA_CHAT_HISTORY: &str = "CREATE TABLE IF NOT EXISTS chat_history (
    id INTEGER PRIMARY KEY,
    message TEXT NOT NULL,
    response TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT (datetime(CURRENT_TIMESTAMP, 'localtime'))
)";
const INSERT_CHAT: &str = "INSERT INTO chat_history (message, response) VALUES (?1, ?2)";
const SELECT_RECENT: &str = "SELECT id, message, response, created_at FROM chat_history ORDER BY id DESC LIMIT ?1";
const COUNT_SINCE: &str = "SELECT COUNT(*) FROM chat_history WHERE created_at >= ?1";
const PRUNE_OLD: &str = "DELETE FROM chat_history WHERE id NOT IN (SELECT id FROM chat_history ORDER BY id DESC LIMIT ?1)";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRecord {
    pub id: Option<i64>,
    pub message: String,
    pub response: String,
    pub created_at: Option<String>,
}

pub struct ChatHistory {
    conn: Connection,
}

impl ChatHistory {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_CHAT_HISTORY, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Append a question/answer pair, clamping field lengths and pruning
    /// records beyond the retention limit.
    pub fn append(&mut self, message: &str, response: &str) -> Result<i64> {
        let message = clamp(message, MAX_MESSAGE_LEN);
        let response = clamp(response, MAX_RESPONSE_LEN);
        self.conn.execute(INSERT_CHAT, params![message, response])?;
        let id = self.conn.last_insert_rowid();
        self.prune(RETENTION_LIMIT)?;
        Ok(id)
    }

    /// Most recent records, newest first.
    pub fn recent(&mut self, limit: usize) -> Result<Vec<ChatRecord>> {
        let mut stmt = self.conn.prepare(SELECT_RECENT)?;
        let record_iter = stmt.query_map(params![limit as i64], |row| {
            Ok(ChatRecord {
                id: row.get(0)?,
                message: row.get(1)?,
                response: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?;

        let mut records = Vec::new();
        for record in record_iter {
            records.push(record?);
        }
        Ok(records)
    }

    /// Number of records created at or after the given instant.
    ///
    /// The quota window is recomputed from this on every request; nothing
    /// is cached in process.
    pub fn count_since(&mut self, since: NaiveDateTime) -> Result<u32> {
        let since = since.format("%Y-%m-%d %H:%M:%S").to_string();
        let count: u32 = self.conn.query_row(COUNT_SINCE, params![since], |row| row.get(0))?;
        Ok(count)
    }

    /// Delete everything older than the `keep` most recent records.
    pub fn prune(&mut self, keep: usize) -> Result<usize> {
        Ok(self.conn.execute(PRUNE_OLD, params![keep as i64])?)
    }
}

fn clamp(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
