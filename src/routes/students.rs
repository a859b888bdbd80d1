use crate::{
    auth::GradebookSession,
    data::student::{Student, StudentForm, StudentUpdate},
    error::{
        GradebookResult, InvalidBodySnafu, MissingStudentSnafu, NotLoggedInSnafu,
    },
    state::GradebookState,
};
use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use snafu::{OptionExt, ResultExt, ensure};

/// The JSON endpoints carry the same session guard as the dashboard; for an
/// API caller the "redirect to login" becomes a 401 body.
fn require_login(session: &GradebookSession) -> GradebookResult<()> {
    ensure!(session.user.is_some(), NotLoggedInSnafu);
    Ok(())
}

/// Bodies arrive as raw JSON and are shape-checked explicitly so a missing or
/// mistyped field is a structured 422, not an opaque rejection.
fn parse_body<T: serde::de::DeserializeOwned>(body: Value) -> GradebookResult<T> {
    serde_json::from_value(body).context(InvalidBodySnafu)
}

pub async fn get_students(
    State(state): State<GradebookState>,
    session: GradebookSession,
) -> GradebookResult<Json<Vec<Student>>> {
    require_login(&session)?;

    let students = Student::get_all(&mut *state.get_connection().await?).await?;
    Ok(Json(students))
}

pub async fn get_student(
    State(state): State<GradebookState>,
    session: GradebookSession,
    Path(id): Path<i64>,
) -> GradebookResult<Json<Student>> {
    require_login(&session)?;

    let student = Student::get_by_id(id, &mut *state.get_connection().await?)
        .await?
        .context(MissingStudentSnafu { id })?;
    Ok(Json(student))
}

pub async fn post_student(
    State(state): State<GradebookState>,
    session: GradebookSession,
    Json(body): Json<Value>,
) -> GradebookResult<Json<Value>> {
    require_login(&session)?;

    let form: StudentForm = parse_body(body)?;
    form.validate()?;

    let id = Student::insert(&form, &mut *state.get_connection().await?).await?;
    info!(id, name = %form.name, "created student");
    Ok(Json(json!({"message": "Student created successfully"})))
}

pub async fn put_student(
    State(state): State<GradebookState>,
    session: GradebookSession,
    Json(body): Json<Value>,
) -> GradebookResult<Json<Value>> {
    require_login(&session)?;

    let update: StudentUpdate = parse_body(body)?;
    update.validate()?;

    let updated = Student::update(&update, &mut *state.get_connection().await?).await?;
    ensure!(updated, MissingStudentSnafu { id: update.id });

    Ok(Json(json!({"message": "Student updated successfully"})))
}

pub async fn delete_student(
    State(state): State<GradebookState>,
    session: GradebookSession,
    Path(id): Path<i64>,
) -> GradebookResult<Json<Value>> {
    require_login(&session)?;

    let deleted = Student::delete(id, &mut *state.get_connection().await?).await?;
    ensure!(deleted, MissingStudentSnafu { id });

    Ok(Json(json!({"message": "Student deleted successfully"})))
}
