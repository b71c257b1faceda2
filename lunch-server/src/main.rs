use lunch_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. .env, then configuration
    let _ = dotenvy::dotenv();
    let config = Config::from_env()?;

    // 2. Logging
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    tracing::info!(
        "Lunch server starting (env: {}, port: {})",
        config.environment,
        config.http_port
    );

    // 3. State (database, migrations)
    let state = ServerState::initialize(&config).await?;

    // 4. Serve until shutdown
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
