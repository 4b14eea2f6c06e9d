mod schema;

pub use schema::{ClientConfig, Config, IdentityConfig, ServerConfig};
