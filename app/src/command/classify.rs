use bfhl_config::Config;
use bfhl_server::dto::ClassifyResponse;

#[derive(Debug, Clone)]
pub struct ClassifyInput {
    pub tokens: Vec<String>,
}

/// Strategy for classifying tokens locally, without a server.
///
/// Prints the same envelope `POST /bfhl` would return.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyStrategy;

impl super::CommandStrategy for ClassifyStrategy {
    type Input = ClassifyInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let result = bfhl_core::classify(&input.tokens);
        let response = ClassifyResponse::new(&config.identity, result);
        println!("{}", serde_json::to_string_pretty(&response)?);
        Ok(())
    }
}
