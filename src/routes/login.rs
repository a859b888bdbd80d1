use crate::{
    auth::{GradebookSession, backend::GradebookAuthCredentials},
    error::{GradebookError, GradebookResult},
    maud_conveniences::{form_submit_button, simple_form_element, title},
    state::GradebookState,
};
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use maud::{Markup, html};
use secrecy::SecretString;
use serde::Deserialize;

fn login_form(state: &GradebookState, session: GradebookSession, error: Option<&str>) -> Markup {
    state.render(
        session,
        html! {
            div class="bg-gray-800 shadow-md rounded px-8 pt-6 pb-8 mb-4 w-full max-w-sm" {
                (title("Login"))
                @if let Some(error) = error {
                    div role="alert" class="bg-red-100 border border-red-400 text-red-700 px-4 py-4 rounded relative mb-4" {
                        span class="block sm:inline" {(error)}
                    }
                }

                form method="post" {
                    (simple_form_element("username", "Username", true, None))
                    (simple_form_element("password", "Password", true, Some("password")))
                    (form_submit_button("Login"))
                }
            }
        },
    )
}

pub async fn get_login(
    State(state): State<GradebookState>,
    session: GradebookSession,
) -> GradebookResult<Response> {
    if session.user.is_some() {
        return Ok(Redirect::to("/dashboard").into_response());
    }

    Ok(login_form(&state, session, None).into_response())
}

#[derive(Deserialize)]
pub struct LoginForm {
    username: String,
    password: SecretString,
}

/// On success: session established, redirect to the dashboard. On failure:
/// the form is re-rendered with an inline message (a 200, not an error), and
/// the message says whether the username or the password was wrong.
pub async fn post_login(
    State(state): State<GradebookState>,
    mut session: GradebookSession,
    Form(LoginForm { username, password }): Form<LoginForm>,
) -> GradebookResult<Response> {
    match session
        .authenticate(GradebookAuthCredentials { username, password })
        .await
    {
        Ok(Some(teacher)) => {
            session.login(&teacher).await.map_err(GradebookError::from)?;
            info!(username = %teacher.username, "logged in");
            Ok(Redirect::to("/dashboard").into_response())
        }
        Ok(None) => Ok(login_form(&state, session, Some("Invalid password")).into_response()),
        Err(e) => match GradebookError::from(e) {
            GradebookError::UnknownUser { .. } => {
                Ok(login_form(&state, session, Some("Invalid username")).into_response())
            }
            GradebookError::BadPassword => {
                Ok(login_form(&state, session, Some("Invalid password")).into_response())
            }
            other => Err(other),
        },
    }
}

pub async fn get_logout(mut session: GradebookSession) -> GradebookResult<Redirect> {
    session.logout().await.map_err(GradebookError::from)?;
    Ok(Redirect::to("/login"))
}
