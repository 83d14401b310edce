//! Command-line interface definitions.

use crate::config::parse_binding;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// folio portfolio server CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: folio.toml)
    #[arg(short = 'C', long, global = true, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Serve the portfolio over HTTP
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,

        #[command(flatten)]
        env: EnvArgs,

        /// Enable verbose output for debugging
        #[arg(short = 'V', long)]
        verbose: bool,
    },

    /// Render a single route to stdout
    #[command(visible_alias = "r")]
    Render {
        /// Route path, e.g. `/`, `/sitemap.xml`, `/robots.txt`
        #[arg(default_value = "/")]
        path: String,

        /// Print the status line and headers before the body
        #[arg(short = 'i', long)]
        include: bool,

        #[command(flatten)]
        env: EnvArgs,
    },
}

/// Runtime environment bindings shared by Serve and Render.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct EnvArgs {
    /// Override an environment key (repeatable), e.g. `--env SITE_URL=https://example.com`
    #[arg(short, long = "env", value_name = "KEY=VALUE", value_parser = parse_binding)]
    pub env: Vec<(String, String)>,
}
