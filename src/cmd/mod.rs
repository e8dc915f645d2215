//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function routes the parsed CLI to the appropriate
//! subcommand handler: [`run`], [`init`], or [`validate`]. Each handler
//! lives in its own submodule.

pub mod init;
pub mod run;
pub mod validate;

use crate::cli::{Cli, Commands};
use crate::error::WaypostError;

pub async fn dispatch(cli: Cli) -> Result<(), WaypostError> {
    match cli.command {
        Some(Commands::Run(args)) => run::execute(args).await,
        Some(Commands::Init(ref args)) => init::execute(args),
        Some(Commands::Validate(ref args)) => validate::execute(args),
        None => {
            print_welcome();
            Ok(())
        }
    }
}

fn print_welcome() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "\n  waypost v{version} \u{2014} path-to-URL redirect server\n\n  \
         No command provided. To get started:\n\n    \
         waypost init                      Generate a starter mapping file\n    \
         waypost run                       Start with the built-in sample mappings\n    \
         waypost run -c redirects.yaml     Start with a specific mapping file\n    \
         waypost --help                    See all commands and options\n"
    );
}
