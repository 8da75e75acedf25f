use axum::{debug_handler, extract::State, response::Response, Form};
use serde::Deserialize;

use crate::{domain::LoginForm, startup::AppState, Result};

use super::render_login_page;

#[derive(Deserialize)]
pub struct LoginFormData {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Submits the form to the backend over HTTP and re-renders the page with
/// the result. Backend failures end up in the page, never as an error status.
#[debug_handler]
#[tracing::instrument(name = "Submit login form", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Form(params): Form<LoginFormData>,
) -> Result<Response> {
    let mut form = LoginForm::new(params.email, params.password);
    form.submit(&state.login_client).await;
    render_login_page(&state, &form)
}
