#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    ClassifyInput, ClassifyStrategy, CommandStrategy, InfoStrategy, InitStrategy, ServeInput,
    ServeStrategy, SmokeInput, SmokeStrategy, VersionStrategy,
};
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "bfhl")]
#[command(about = "Token classification API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind (overrides config and BFHL_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config and PORT)
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },
    /// Classify tokens locally and print the response envelope
    Classify {
        /// Tokens to classify, in order
        #[arg(allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// Run the example scenarios against a running server
    Smoke {
        /// Server base URL (overrides config and BFHL_BASE_URL)
        #[arg(short = 'u', long)]
        base_url: Option<String>,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.as_str()));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            ServeStrategy.execute(ServeInput { host, port }).await?;
        }
        Commands::Classify { tokens } => {
            ClassifyStrategy.execute(ClassifyInput { tokens }).await?;
        }
        Commands::Smoke { base_url } => {
            SmokeStrategy.execute(SmokeInput { base_url }).await?;
        }
        Commands::Init => InitStrategy.execute(()).await?,
        Commands::Info => InfoStrategy.execute(()).await?,
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}
