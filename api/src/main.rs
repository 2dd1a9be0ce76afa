use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::{info, warn};

use ts_api::app::create_app;
use ts_api::config;
use ts_api::routes::auth::AppState;
use ts_core::services::auth::{AcceptAnyCredentials, AuthService, CredentialVerifier};
use ts_core::services::token::{TokenService, TokenServiceConfig};
use ts_shared::{AppConfig, Environment, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables, per-environment file first
    let environment = Environment::from_env();
    dotenv::from_filename(environment.env_file()).ok();
    dotenv().ok();

    let app_config = AppConfig::from_env();
    init_logging(&app_config.logging);

    info!("Starting TokenSession API Server ({})", app_config.environment);

    config::validate(&app_config)?;
    let signing_key = config::signing_key(&app_config)?;

    let token_service = Arc::new(TokenService::new(
        signing_key,
        TokenServiceConfig::from(&app_config.auth.jwt),
    ));
    info!(
        "Session tokens expire after {} seconds",
        token_service.session_ttl().num_seconds()
    );

    // No identity store is wired up; every submitted login is trusted.
    warn!("Credential verification is disabled: any username/password pair is accepted");
    let verifier: Arc<dyn CredentialVerifier> = Arc::new(AcceptAnyCredentials);

    let app_state = web::Data::new(AppState::new(
        AuthService::new(verifier, token_service),
        app_config.auth.cookie.clone(),
    ));

    let bind_address = app_config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if app_config.server.workers > 0 {
        server = server.workers(app_config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;
    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    env_logger::Builder::from_env(
        env_logger::Env::new().default_filter_or(config.default_filter.as_str()),
    )
    .format_module_path(config.module_path)
    .init();
}
