use crate::{
    auth::GradebookSession,
    data::student::Student,
    error::GradebookResult,
    maud_conveniences::{form_submit_button, render_table, simple_form_element, title},
    state::GradebookState,
};
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use maud::{PreEscaped, html};

// Edit/delete go through the JSON API, same as any other client would.
const DASHBOARD_JS: &str = r#"
async function submitStudent(event) {
    event.preventDefault();
    const form = document.getElementById('student-form');
    const id = form.elements['student-id'].value;
    const payload = {
        name: form.elements['name'].value.trim(),
        subject: form.elements['subject'].value.trim(),
        marks: parseInt(form.elements['marks'].value, 10),
    };

    let response;
    if (id) {
        payload.id = parseInt(id, 10);
        response = await fetch('/api/students', {
            method: 'PUT',
            headers: {'Content-Type': 'application/json'},
            body: JSON.stringify(payload),
        });
    } else {
        response = await fetch('/api/students', {
            method: 'POST',
            headers: {'Content-Type': 'application/json'},
            body: JSON.stringify(payload),
        });
    }

    if (response.ok) {
        location.reload();
    } else {
        const body = await response.json();
        alert(body.error);
    }
}

async function editStudent(id) {
    const response = await fetch('/api/students/' + id);
    if (!response.ok) {
        return;
    }
    const student = await response.json();
    const form = document.getElementById('student-form');
    form.elements['student-id'].value = student.id;
    form.elements['name'].value = student.name;
    form.elements['subject'].value = student.subject;
    form.elements['marks'].value = student.marks;
}

async function deleteStudent(id) {
    const response = await fetch('/api/students/' + id, {method: 'DELETE'});
    if (response.ok) {
        location.reload();
    }
}
"#;

/// The one session-gated page: no logged-in user means a redirect to the
/// login entry point, never an error body.
pub async fn get_dashboard(
    State(state): State<GradebookState>,
    session: GradebookSession,
) -> GradebookResult<Response> {
    if session.user.is_none() {
        return Ok(Redirect::to("/login").into_response());
    }

    let students = Student::get_all(&mut *state.get_connection().await?).await?;

    let rows = students
        .into_iter()
        .map(|student| {
            [
                html! {(student.name)},
                html! {(student.subject)},
                html! {(student.marks)},
                html! {
                    button class="bg-blue-600 hover:bg-blue-800 font-bold py-1 px-3 rounded mr-2" onclick={"editStudent(" (student.id) ")"} {"Edit"}
                    button class="bg-red-600 hover:bg-red-800 font-bold py-1 px-3 rounded" onclick={"deleteStudent(" (student.id) ")"} {"Delete"}
                },
            ]
        })
        .collect();

    Ok(state
        .render(
            session,
            html! {
                div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full flex flex-col space-y-4" {
                    (render_table("Students", ["Name", "Subject", "Marks", "Actions"], rows))
                    div {
                        (title("Add or Edit Student"))
                        form id="student-form" onsubmit="submitStudent(event)" class="p-4" {
                            input type="hidden" id="student-id" name="student-id" {}
                            (simple_form_element("name", "Name", true, None))
                            (simple_form_element("subject", "Subject", true, None))
                            (simple_form_element("marks", "Marks", true, Some("number")))
                            (form_submit_button("Save"))
                        }
                    }
                }
                script {(PreEscaped(DASHBOARD_JS))}
            },
        )
        .into_response())
}
