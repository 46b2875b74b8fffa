// CLI module for translate-relay
// Author: kelexine (https://github.com/kelexine)

use clap::Parser;
use std::path::PathBuf;

/// translate-relay - forwards text to a machine-translation provider
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "translate-relay", version, about, long_about = None)]
pub struct Args {
    /// Path to a TOML config file (default: ~/.translate-relay/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Address to bind the HTTP server to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,
}
