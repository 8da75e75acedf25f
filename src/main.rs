use login_demo::{
    configuration::get_configuration,
    startup::{run, AppState},
    telemetry,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration()?;
    let _guard = telemetry::init(&configuration.logger);

    let state = AppState::build(&configuration)?;
    let address = configuration.application.address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!("Server running on http://{}", address);
    tracing::info!(
        "Login form calls backend at {}",
        configuration.frontend.api_base_url
    );

    run(listener, state).await?;
    Ok(())
}
