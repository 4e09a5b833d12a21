pub mod cli;

#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "poetry-scaffold"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Generate a Poetry project skeleton in the current directory")
)]
pub struct CliConfig {
    /// Package name; prompted for interactively when omitted
    #[cfg_attr(feature = "cli", arg(long))]
    pub name: Option<String>,

    /// Directory the project is generated in
    #[cfg_attr(feature = "cli", arg(long, default_value = "."))]
    pub path: PathBuf,

    /// Print the paths that would be created without writing anything
    #[cfg_attr(feature = "cli", arg(long))]
    pub dry_run: bool,

    /// Print a JSON report of the created paths
    #[cfg_attr(feature = "cli", arg(long))]
    pub json: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}
