mod post;

use axum::{debug_handler, extract::State, response::Response};
pub use post::*;
use serde_json::json;

use crate::{domain::LoginForm, startup::AppState, Result};

use super::format;

#[debug_handler]
pub async fn login_form(State(state): State<AppState>) -> Result<Response> {
    render_login_page(&state, &LoginForm::default())
}

fn render_login_page(state: &AppState, form: &LoginForm) -> Result<Response> {
    format::render().view(
        &state.tera_engine,
        "login.html",
        json!({
            "form": form,
            "submit_label": form.submit_label(),
        }),
    )
}
