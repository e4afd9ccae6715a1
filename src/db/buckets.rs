use super::db::Db;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

pub(super) const SCHEMA_BUCKETS: &str = "CREATE TABLE IF NOT EXISTS buckets (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    color TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const INSERT_BUCKET: &str = "INSERT INTO buckets (name, color) VALUES (?1, ?2)";
const DELETE_BUCKET: &str = "DELETE FROM buckets WHERE id = ?1";
const SELECT_ALL_BUCKETS: &str = "SELECT b.id, b.name, b.color, b.created_at, COUNT(t.id)
    FROM buckets b
    LEFT JOIN tasks t ON t.bucket_id = b.id
    GROUP BY b.id
    ORDER BY b.name";
const SELECT_BUCKET_BY_ID: &str = "SELECT id, name, color, created_at FROM buckets WHERE id = ?1";
const SELECT_BUCKET_BY_NAME: &str = "SELECT id, name, color, created_at FROM buckets WHERE name = ?1";
const DETACH_BUCKET_TASKS: &str = "UPDATE tasks SET bucket_id = NULL WHERE bucket_id = ?1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bucket {
    pub id: Option<i64>,
    pub name: String,
    pub color: Option<String>,
    pub created_at: Option<String>,
}

impl Bucket {
    pub fn new(name: String, color: Option<String>) -> Self {
        Self {
            id: None,
            name,
            color,
            created_at: None,
        }
    }
}

pub struct Buckets {
    conn: Connection,
}

impl Buckets {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_BUCKETS, [])?;
        db.conn.execute(super::tasks::SCHEMA_TASKS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Create a new bucket
    pub fn create(&mut self, bucket: &Bucket) -> Result<i64> {
        self.conn.execute(INSERT_BUCKET, params![bucket.name, bucket.color])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get all buckets with their task counts
    pub fn list(&mut self) -> Result<Vec<(Bucket, i64)>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_BUCKETS)?;
        let bucket_iter = stmt.query_map([], |row| {
            Ok((
                Bucket {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    color: row.get(2)?,
                    created_at: row.get(3)?,
                },
                row.get(4)?,
            ))
        })?;

        let mut buckets = Vec::new();
        for bucket in bucket_iter {
            buckets.push(bucket?);
        }
        Ok(buckets)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Bucket>> {
        self.conn
            .query_row(SELECT_BUCKET_BY_ID, params![id], |row| {
                Ok(Bucket {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    color: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    pub fn get_by_name(&mut self, name: &str) -> Result<Option<Bucket>> {
        self.conn
            .query_row(SELECT_BUCKET_BY_NAME, params![name], |row| {
                Ok(Bucket {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    color: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })
            .optional()
            .map_err(Into::into)
    }

    /// Delete a bucket, detaching its tasks first.
    ///
    /// Returns the number of tasks that were detached.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let detached = self.conn.execute(DETACH_BUCKET_TASKS, params![id])?;
        let affected = self.conn.execute(DELETE_BUCKET, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::BucketNotFound(id.to_string())));
        }
        Ok(detached)
    }
}
