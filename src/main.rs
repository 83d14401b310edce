//! folio - A portfolio site server with a search-engine metadata layer.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod embed;
mod generator;
mod logger;
mod profile;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, EnvArgs};
use config::{EnvBindings, EnvResolver, Environment, ProcessEnv, SiteConfig, keys};
use std::sync::Arc;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let mut config = SiteConfig::load(&cli.config)?;

    match cli.command {
        Commands::Serve {
            interface,
            port,
            env,
            verbose,
        } => {
            config.apply_serve_options(interface, port);
            let runtime = runtime_bindings(env);

            let environment = startup_environment(&runtime);
            logger::set_verbose(verbose || environment.is_development());
            debug!("serve"; "environment: {}", environment);

            cli::serve::serve_site(Arc::new(config), Arc::new(runtime))
        }
        Commands::Render { path, include, env } => {
            let runtime = runtime_bindings(env);
            cli::render::render_route(&config, &runtime, &path, include)
        }
    }
}

/// Collect `--env` flags; a repeated key keeps its last value.
fn runtime_bindings(args: EnvArgs) -> EnvBindings {
    args.env.into_iter().collect()
}

/// Environment in effect at startup, for gating debug output.
fn startup_environment(runtime: &EnvBindings) -> Environment {
    let env = EnvResolver::new(runtime, &ProcessEnv);
    Environment::from_value(env.get(keys::ENVIRONMENT).as_deref())
}
