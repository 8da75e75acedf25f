use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{
    client::LoginClient,
    configuration::Settings,
    controller::{check_login, health_check, login, login_form},
    domain::CredentialChecker,
    view_engine::TeraView,
    Result,
};

#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<CredentialChecker>,
    pub login_client: Arc<LoginClient>,
    pub tera_engine: Arc<TeraView>,
}

impl AppState {
    pub fn build(configuration: &Settings) -> Result<Self> {
        Ok(Self {
            checker: Arc::new(configuration.credentials.checker()),
            login_client: Arc::new(configuration.frontend.client()?),
            tera_engine: Arc::new(TeraView::build()?),
        })
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/login", post(check_login))
        .route("/", get(login_form))
        .route("/login", get(login_form).post(login))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let app = app(state);
    axum::serve(listener, app).await
}
