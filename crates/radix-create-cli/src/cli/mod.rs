//! CLI argument definitions using the clap derive API.
//!
//! The tool takes no positional arguments: everything project-specific is
//! asked interactively. Only the ambient flags live here.

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "create-radix-dapp",
    bin_name = "create-radix-dapp",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold a Radix dApp from an official template",
    long_about = "Asks for a project name and a template, downloads the template \
                  into ./<name> and installs its npm dependencies.",
    after_help = "EXAMPLES:\n\
        \x20 create-radix-dapp\n\
        \x20 create-radix-dapp -v\n\
        \x20 create-radix-dapp --config ./offline.toml",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
}
