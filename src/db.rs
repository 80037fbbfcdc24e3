use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::errors::{TaskError, TaskResult};
use crate::models::Task;

const SELECT_COLUMNS: &str = "SELECT id, title, description, completed, created_at FROM todos";

type TaskRow = (i64, String, Option<String>, bool, String);

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> TaskResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    pub fn open_in_memory() -> TaskResult<Self> {
        let db = Self {
            conn: Connection::open_in_memory()?,
        };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> TaskResult<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL CHECK (length(title) <= 100),
                description TEXT CHECK (length(description) <= 200),
                created_at TEXT NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0
            );
            "#,
        )?;
        Ok(())
    }

    pub fn insert(
        &self,
        title: &str,
        description: &str,
        created_at: DateTime<Utc>,
    ) -> TaskResult<Task> {
        if title.trim().is_empty() {
            return Err(TaskError::validation("title must not be empty"));
        }

        self.conn.execute(
            "INSERT INTO todos (title, description, created_at, completed) VALUES (?1, ?2, ?3, 0)",
            params![title, description, format_timestamp(created_at)],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
            created_at,
        })
    }

    /// Newest first. Rows with identical timestamps fall back to id order.
    pub fn list_all(&self) -> TaskResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_COLUMNS} ORDER BY created_at DESC, id DESC"))?;
        let rows = stmt.query_map([], read_row)?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(into_task(row?)?);
        }
        Ok(tasks)
    }

    pub fn get(&self, id: i64) -> TaskResult<Task> {
        let row = self
            .conn
            .query_row(&format!("{SELECT_COLUMNS} WHERE id = ?1"), params![id], read_row)
            .optional()?;
        match row {
            Some(row) => into_task(row),
            None => Err(TaskError::NotFound(id)),
        }
    }

    pub fn update_completed(&self, id: i64, completed: bool) -> TaskResult<()> {
        let updated = self.conn.execute(
            "UPDATE todos SET completed = ?1 WHERE id = ?2",
            params![completed, id],
        )?;
        if updated == 0 {
            return Err(TaskError::NotFound(id));
        }
        Ok(())
    }

    pub fn delete(&self, id: i64) -> TaskResult<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        if deleted == 0 {
            return Err(TaskError::NotFound(id));
        }
        Ok(())
    }
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<TaskRow> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
    ))
}

fn into_task((id, title, description, completed, created_at): TaskRow) -> TaskResult<Task> {
    Ok(Task {
        id,
        title,
        description: description.unwrap_or_default(),
        completed,
        created_at: parse_timestamp(&created_at)?,
    })
}

// Fixed width so that ORDER BY on the text column is chronological.
fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn parse_timestamp(value: &str) -> TaskResult<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}
