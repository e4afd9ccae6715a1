use super::db::Db;
use crate::libs::settings::{AiSettings, Tone};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_AI_SETTINGS: &str = "CREATE TABLE IF NOT EXISTS ai_settings (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    assistant_name TEXT NOT NULL,
    tone TEXT NOT NULL
)";
const SELECT_SETTINGS: &str = "SELECT assistant_name, tone FROM ai_settings WHERE id = 1";
const UPSERT_SETTINGS: &str = "INSERT INTO ai_settings (id, assistant_name, tone) VALUES (1, ?1, ?2)
    ON CONFLICT(id) DO UPDATE SET assistant_name = ?1, tone = ?2";

pub struct Settings {
    conn: Connection,
}

impl Settings {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_AI_SETTINGS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Read the stored settings, creating defaults on first access.
    pub fn get_or_create(&mut self) -> Result<AiSettings> {
        let stored = self
            .conn
            .query_row(SELECT_SETTINGS, [], |row| {
                let name: String = row.get(0)?;
                let tone: String = row.get(1)?;
                Ok((name, tone))
            })
            .optional()?;

        match stored {
            Some((assistant_name, tone)) => Ok(AiSettings {
                assistant_name,
                tone: tone.parse().unwrap_or(Tone::Professional),
            }),
            None => {
                let defaults = AiSettings::default();
                self.save(&defaults)?;
                Ok(defaults)
            }
        }
    }

    pub fn save(&mut self, settings: &AiSettings) -> Result<()> {
        self.conn.execute(UPSERT_SETTINGS, params![settings.assistant_name, settings.tone.as_str()])?;
        Ok(())
    }
}
