use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl ServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    const fn default_port() -> u16 {
        3000
    }

    /// `host:port` suitable for binding a listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Fixed identity fields echoed in every successful response.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    #[serde(default = "IdentityConfig::default_user_id")]
    pub user_id: String,
    #[serde(default = "IdentityConfig::default_email")]
    pub email: String,
    #[serde(default = "IdentityConfig::default_roll_number")]
    pub roll_number: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            user_id: Self::default_user_id(),
            email: Self::default_email(),
            roll_number: Self::default_roll_number(),
        }
    }
}

impl IdentityConfig {
    fn default_user_id() -> String {
        "john_doe_17091999".to_string()
    }

    fn default_email() -> String {
        "john.doe@vitstudent.ac.in".to_string()
    }

    fn default_roll_number() -> String {
        "21BCE0001".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server the `smoke` command talks to.
    #[serde(default = "ClientConfig::default_base_url")]
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
        }
    }
}

impl ClientConfig {
    fn default_base_url() -> String {
        "http://localhost:3000".to_string()
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("bfhl"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load `~/bfhl/config.json` if it exists, fall back to defaults
    /// otherwise, then apply environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Self = serde_json::from_str(&content).map_err(|e| {
                anyhow::anyhow!("Invalid config file {}: {e}", config_path.display())
            })?;
            info!("Loaded config from {}", config_path.display());
            config
        } else {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Override fields from `PORT`, `BFHL_HOST`, `BFHL_USER_ID`, `BFHL_EMAIL`,
    /// `BFHL_ROLL_NUMBER` and `BFHL_BASE_URL`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // An empty PORT counts as unset.
        if let Some(port) = lookup("PORT").filter(|p| !p.trim().is_empty()) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT {port:?}: {e}"))?;
        }
        if let Some(host) = lookup("BFHL_HOST") {
            self.server.host = host;
        }
        if let Some(user_id) = lookup("BFHL_USER_ID") {
            self.identity.user_id = user_id;
        }
        if let Some(email) = lookup("BFHL_EMAIL") {
            self.identity.email = email;
        }
        if let Some(roll_number) = lookup("BFHL_ROLL_NUMBER") {
            self.identity.roll_number = roll_number;
        }
        if let Some(base_url) = lookup("BFHL_BASE_URL") {
            self.client.base_url = base_url;
        }
        Ok(())
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(&config_path, config_template)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the identity section with your user id, email and roll number");
        println!("   2. Run 'bfhl serve' to start the API");
        println!("   3. Run 'bfhl smoke' in another terminal to check it");
        println!();
        println!("🔧 Environment overrides:");
        println!("   - PORT, BFHL_HOST: listen address");
        println!("   - BFHL_USER_ID, BFHL_EMAIL, BFHL_ROLL_NUMBER: identity fields");
        println!("   - BFHL_BASE_URL: server used by 'bfhl smoke'");
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn partial_file_fills_defaults() -> anyhow::Result<()> {
        let config: Config = serde_json::from_str(r#"{"server": {"port": 8080}}"#)?;
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.identity, IdentityConfig::default());
        assert_eq!(config.client.base_url, "http://localhost:3000");
        Ok(())
    }

    #[test]
    fn empty_object_is_default() -> anyhow::Result<()> {
        let config: Config = serde_json::from_str("{}")?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn env_overrides_win() -> anyhow::Result<()> {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[
            ("PORT", "4000"),
            ("BFHL_USER_ID", "jane_roe_01012000"),
            ("BFHL_BASE_URL", "http://127.0.0.1:4000"),
        ]))?;
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.bind_addr(), "0.0.0.0:4000");
        assert_eq!(config.identity.user_id, "jane_roe_01012000");
        assert_eq!(config.identity.email, "john.doe@vitstudent.ac.in");
        assert_eq!(config.client.base_url, "http://127.0.0.1:4000");
        Ok(())
    }

    #[test]
    fn invalid_port_is_rejected() {
        let mut config = Config::default();
        let err = config.apply_env_overrides(env(&[("PORT", "eighty")]));
        assert!(err.is_err());
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn blank_port_keeps_default() -> anyhow::Result<()> {
        let mut config = Config::default();
        config.apply_env_overrides(env(&[("PORT", "")]))?;
        assert_eq!(config.server.port, 3000);

        config.apply_env_overrides(env(&[("PORT", "  ")]))?;
        assert_eq!(config.server.port, 3000);

        config.apply_env_overrides(env(&[("PORT", " 8081 ")]))?;
        assert_eq!(config.server.port, 8081);
        Ok(())
    }

    #[test]
    fn template_round_trips() -> anyhow::Result<()> {
        let template = serde_json::to_string_pretty(&Config::default())?;
        let parsed: Config = serde_json::from_str(&template)?;
        assert_eq!(parsed, Config::default());
        Ok(())
    }
}
