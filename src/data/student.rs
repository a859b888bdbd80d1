use crate::error::{EmptyFieldSnafu, GradebookResult, MakeQuerySnafu};
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, ensure};
use sqlx::SqliteConnection;

/// A managed record: one row of `students`. `marks` is any integer, no
/// declared range.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub marks: i64,
}

/// Shape of a create body, and the field set an update rewrites.
#[derive(Debug, Deserialize)]
pub struct StudentForm {
    pub name: String,
    pub subject: String,
    pub marks: i64,
}

impl StudentForm {
    /// Presence check only: `name` and `subject` must be non-empty. Anything
    /// further (marks ranges, name shapes) is deliberately not enforced.
    pub fn validate(&self) -> GradebookResult<()> {
        ensure!(!self.name.trim().is_empty(), EmptyFieldSnafu { field: "name" });
        ensure!(
            !self.subject.trim().is_empty(),
            EmptyFieldSnafu { field: "subject" }
        );
        Ok(())
    }
}

/// Shape of an update body: the id plus a full replacement of every field.
#[derive(Debug, Deserialize)]
pub struct StudentUpdate {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub marks: i64,
}

impl StudentUpdate {
    pub fn validate(&self) -> GradebookResult<()> {
        ensure!(!self.name.trim().is_empty(), EmptyFieldSnafu { field: "name" });
        ensure!(
            !self.subject.trim().is_empty(),
            EmptyFieldSnafu { field: "subject" }
        );
        Ok(())
    }
}

impl Student {
    pub async fn insert(form: &StudentForm, conn: &mut SqliteConnection) -> GradebookResult<i64> {
        sqlx::query_scalar("INSERT INTO students (name, subject, marks) VALUES (?, ?, ?) RETURNING id")
            .bind(&form.name)
            .bind(&form.subject)
            .bind(form.marks)
            .fetch_one(conn)
            .await
            .context(MakeQuerySnafu)
    }

    /// All students in insertion order (ids are monotonically assigned).
    pub async fn get_all(conn: &mut SqliteConnection) -> GradebookResult<Vec<Self>> {
        sqlx::query_as("SELECT id, name, subject, marks FROM students ORDER BY id")
            .fetch_all(conn)
            .await
            .context(MakeQuerySnafu)
    }

    pub async fn get_by_id(id: i64, conn: &mut SqliteConnection) -> GradebookResult<Option<Self>> {
        sqlx::query_as("SELECT id, name, subject, marks FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(conn)
            .await
            .context(MakeQuerySnafu)
    }

    /// Full three-field replace. Returns false when no row has that id.
    pub async fn update(update: &StudentUpdate, conn: &mut SqliteConnection) -> GradebookResult<bool> {
        let result = sqlx::query("UPDATE students SET name = ?, subject = ?, marks = ? WHERE id = ?")
            .bind(&update.name)
            .bind(&update.subject)
            .bind(update.marks)
            .bind(update.id)
            .execute(conn)
            .await
            .context(MakeQuerySnafu)?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns false when no row has that id.
    pub async fn delete(id: i64, conn: &mut SqliteConnection) -> GradebookResult<bool> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(conn)
            .await
            .context(MakeQuerySnafu)?;

        Ok(result.rows_affected() > 0)
    }
}
