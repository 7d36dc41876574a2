//! CLI command dispatch and handlers.
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod categories;
pub mod console;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Console(args) => console::run(&args).await,
        Commands::Categories(args) => categories::run(&args),
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}
