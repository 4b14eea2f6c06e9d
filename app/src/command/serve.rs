use bfhl_config::Config;
use bfhl_server::AppState;
use tracing::info;

/// Command-line overrides for the listen address.
#[derive(Debug, Clone, Default)]
pub struct ServeInput {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Strategy for running the HTTP server.
///
/// Loads configuration (file, then environment, then flags) and serves
/// until Ctrl+C.
#[derive(Debug, Clone, Copy)]
pub struct ServeStrategy;

impl super::CommandStrategy for ServeStrategy {
    type Input = ServeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut config = Config::load()?;

        if let Some(host) = input.host {
            config.server.host = host;
        }
        if let Some(port) = input.port {
            config.server.port = port;
        }

        info!(
            "Serving as user_id={} roll_number={}",
            config.identity.user_id, config.identity.roll_number
        );

        let state = AppState::new(config.identity);
        bfhl_server::serve(&config.server, state).await
    }
}
