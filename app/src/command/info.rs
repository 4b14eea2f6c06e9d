use bfhl_config::Config;

/// Strategy for displaying the effective configuration.
///
/// Shows the merged result of the config file and environment overrides.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let config_path = Config::config_path()?;

        println!("=== bfhl Configuration ===\n");

        println!("Config File:");
        if config_path.exists() {
            println!("  Path: {}", config_path.display());
        } else {
            println!("  Path: {} (not found, using defaults)", config_path.display());
        }
        println!();

        println!("Server:");
        println!("  Host: {}", config.server.host);
        println!("  Port: {}", config.server.port);
        println!("  Endpoint: http://{}/bfhl", config.server.bind_addr());
        println!();

        println!("Identity:");
        println!("  User ID: {}", config.identity.user_id);
        println!("  Email: {}", mask_email(&config.identity.email));
        println!("  Roll Number: {}", config.identity.roll_number);
        println!();

        println!("Smoke Client:");
        println!("  Base URL: {}", config.client.base_url);

        Ok(())
    }
}

fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return email.to_string();
    };

    match local.chars().next() {
        Some(first) => format!("{first}***@{domain}"),
        None => format!("***@{domain}"),
    }
}
