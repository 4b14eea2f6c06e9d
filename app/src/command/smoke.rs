use bfhl_client::{BfhlClient, run_all};
use bfhl_config::Config;
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct SmokeInput {
    /// Overrides `client.base_url` from config.
    pub base_url: Option<String>,
}

/// Strategy for replaying the canonical scenarios against a running server.
///
/// Fails when any scenario fails, so it can gate a deploy script.
#[derive(Debug, Clone, Copy)]
pub struct SmokeStrategy;

impl super::CommandStrategy for SmokeStrategy {
    type Input = SmokeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let base_url = input.base_url.unwrap_or(config.client.base_url);

        println!("🧪 Running API Tests against {base_url}\n");
        println!("{}", "=".repeat(50));

        let client = BfhlClient::new(base_url);

        let status = client.status().await?;
        info!("Server status: {}", status.body);

        let reports = run_all(&client).await;
        for report in &reports {
            println!("\n{report}");
            println!("{}", "-".repeat(50));
        }

        let failed = reports.iter().filter(|r| !r.passed()).count();
        if failed > 0 {
            anyhow::bail!("{failed} of {} scenarios failed", reports.len());
        }

        println!("\nAll {} scenarios passed", reports.len());
        Ok(())
    }
}
