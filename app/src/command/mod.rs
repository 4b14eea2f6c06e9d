//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is its own strategy type with its own input type, so
//! dispatch in `main` is a plain match with no trait objects.

mod classify;
mod info;
mod init;
mod serve;
mod smoke;
mod version;

pub use classify::{ClassifyInput, ClassifyStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use serve::{ServeInput, ServeStrategy};
pub use smoke::{SmokeInput, SmokeStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
