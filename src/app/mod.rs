pub mod router;
pub mod server;
pub mod state;
pub mod tracing;

use crate::config;
use crate::error::LevelCtlError;
use crate::gate::SeverityGate;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Application entry point. Initializes tracing, configuration, and starts the server.
pub async fn run() -> Result<(), LevelCtlError> {
    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        match crate::healthcheck().await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1)
            }
        }
    }

    // Unarmed until settings are loaded; everything logged before then passes.
    let gate = Arc::new(SeverityGate::unset());
    tracing::init_tracing(gate.clone());

    let settings = config::get_configuration()?;
    ::tracing::info!("Loaded settings");

    let app_state = state::AppState::from_settings(&settings, gate)?;
    ::tracing::info!(level = %settings.log_level, "Log level control armed");

    let main_app = router::main_router(app_state.level_control);

    server::serve(main_app, settings.http_port, CancellationToken::new()).await
}
