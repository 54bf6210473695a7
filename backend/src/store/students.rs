use std::path::{Path, PathBuf};
use std::sync::Arc;

use common::model::student::{Scalar, Student};
use rusqlite::{params, Connection, OptionalExtension};

/// Handle on the SQLite file holding the collection.
///
/// Cloned into every actix worker as `web::Data`. Each call opens its own
/// connection, so the handle itself holds no open resources.
#[derive(Clone, Debug)]
pub struct StudentStore {
    db_path: Arc<PathBuf>,
}

impl StudentStore {
    /// Opens (creating if needed) the database at `db_path` and makes sure the
    /// `students` table exists.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, String> {
        let store = Self {
            db_path: Arc::new(db_path.as_ref().to_path_buf()),
        };
        let conn = store.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS students (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                body TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| e.to_string())?;
        Ok(store)
    }

    fn connect(&self) -> Result<Connection, String> {
        Connection::open(self.db_path.as_ref()).map_err(|e| e.to_string())
    }

    /// All records in insertion order.
    pub fn list(&self) -> Result<Vec<Student>, String> {
        let conn = self.connect()?;
        let mut stmt = conn
            .prepare("SELECT body FROM students ORDER BY id")
            .map_err(|e| e.to_string())?;
        let bodies = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| e.to_string())?;

        let students: Result<Vec<Student>, String> = bodies
            .map(|body| {
                let body = body.map_err(|e| e.to_string())?;
                serde_json::from_str(&body).map_err(|e| e.to_string())
            })
            .collect();
        students
    }

    /// Stores `student` under a freshly assigned id and returns it with that id.
    /// Any id supplied by the client is ignored.
    pub fn create(&self, mut student: Student) -> Result<Student, String> {
        let mut conn = self.connect()?;
        let tx = conn.transaction().map_err(|e| e.to_string())?;

        tx.execute("INSERT INTO students (body) VALUES ('{}')", [])
            .map_err(|e| e.to_string())?;
        let id = tx.last_insert_rowid();

        student.id = Some(Scalar::Text(id.to_string()));
        let body = serde_json::to_string(&student).map_err(|e| e.to_string())?;
        tx.execute(
            "UPDATE students SET body = ?1 WHERE id = ?2",
            params![body, id],
        )
        .map_err(|e| e.to_string())?;

        tx.commit().map_err(|e| e.to_string())?;
        Ok(student)
    }

    /// Replaces the record with `id`. `Ok(None)` when there is no such record.
    pub fn update(&self, id: &str, mut student: Student) -> Result<Option<Student>, String> {
        let Some(row_id) = parse_id(id) else {
            return Ok(None);
        };
        student.id = Some(Scalar::Text(row_id.to_string()));
        let body = serde_json::to_string(&student).map_err(|e| e.to_string())?;

        let conn = self.connect()?;
        let changed = conn
            .execute(
                "UPDATE students SET body = ?1 WHERE id = ?2",
                params![body, row_id],
            )
            .map_err(|e| e.to_string())?;

        Ok((changed > 0).then_some(student))
    }

    /// Removes the record with `id` and returns it. `Ok(None)` when there is
    /// no such record.
    pub fn delete(&self, id: &str) -> Result<Option<Student>, String> {
        let Some(row_id) = parse_id(id) else {
            return Ok(None);
        };

        let mut conn = self.connect()?;
        let tx = conn.transaction().map_err(|e| e.to_string())?;
        let body: Option<String> = tx
            .query_row(
                "SELECT body FROM students WHERE id = ?1",
                params![row_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| e.to_string())?;

        let Some(body) = body else {
            return Ok(None);
        };
        tx.execute("DELETE FROM students WHERE id = ?1", params![row_id])
            .map_err(|e| e.to_string())?;
        tx.commit().map_err(|e| e.to_string())?;

        serde_json::from_str(&body).map(Some).map_err(|e| e.to_string())
    }
}

/// Ids are positive integers; anything else cannot name a stored record.
fn parse_id(id: &str) -> Option<i64> {
    id.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
