//! chain-router CLI.
//!
//! Loads a route table from TOML and resolves paths or route ids against it.
//!
//! ```text
//! chain-router --config routes.toml check
//! chain-router --config routes.toml resolve /tabs/users/42
//! chain-router --config routes.toml navigate tabs user:id=42,tab=posts
//! chain-router --config routes.toml watch /tabs/home
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

use chain_router::config::{load_config, ConfigWatcher, RouterConfig};
use chain_router::observability::{logging, metrics};
use chain_router::routing::{generate_path, parse_path, Params, RouteId, Router, SharedRouter};

#[derive(Parser)]
#[command(name = "chain-router")]
#[command(about = "Resolve navigation paths and route ids against a route table", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    /// Override the configured log level (e.g. "debug").
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the route table and print a summary
    Check,
    /// Resolve a path such as /tabs/users/42
    Resolve { path: String },
    /// Navigate by route ids, e.g. `tabs user:id=42`
    Navigate {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Resolve a path, then again after every change to the config file
    Watch { path: String },
}

#[derive(Debug, PartialEq, Eq, Error)]
enum CliError {
    #[error("invalid route id '{0}': expected ID or ID:key=value,...")]
    InvalidRouteId(String),

    #[error("no route matches {0}")]
    NotFound(String),
}

/// Parse `user` or `user:id=42,tab=posts` into a route id.
fn parse_route_id(arg: &str) -> Result<RouteId, CliError> {
    let invalid = || CliError::InvalidRouteId(arg.to_string());

    let (id, params) = match arg.split_once(':') {
        Some((id, params)) => (id, Some(params)),
        None => (arg, None),
    };
    if id.is_empty() {
        return Err(invalid());
    }

    let mut route_id = RouteId::new(id);
    if let Some(params) = params {
        let mut parsed = Params::new();
        for pair in params.split(',').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').ok_or_else(invalid)?;
            if key.is_empty() {
                return Err(invalid());
            }
            parsed.insert(key, value);
        }
        route_id = route_id.with_params(parsed);
    }
    Ok(route_id)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    logging::init_logging(&config.observability)?;

    let router = Router::from_config(&config);
    tracing::debug!(
        config = ?cli.config,
        chains = router.chains().len(),
        redirects = router.redirects().len(),
        "Route table loaded"
    );

    match cli.command {
        Commands::Check => {
            println!(
                "{}: {} chains, {} redirects",
                cli.config.display(),
                router.chains().len(),
                router.redirects().len()
            );
        }
        Commands::Resolve { path } => {
            let resolution = router.resolve_path(&parse_path(&path));
            print_json(&resolution)?;
            if resolution.chain.is_none() {
                return Err(CliError::NotFound(generate_path(&resolution.path)).into());
            }
        }
        Commands::Navigate { ids } => {
            let ids = ids
                .iter()
                .map(|arg| parse_route_id(arg))
                .collect::<Result<Vec<_>, _>>()?;
            match router.resolve_ids(&ids) {
                Some(navigation) => print_json(&navigation)?,
                None => {
                    let requested: Vec<&str> = ids.iter().map(|id| id.id.as_str()).collect();
                    return Err(CliError::NotFound(requested.join(" > ")).into());
                }
            }
        }
        Commands::Watch { path } => watch(&cli.config, &config, &path).await?,
    }

    Ok(())
}

async fn watch(
    config_path: &Path,
    config: &RouterConfig,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let shared = SharedRouter::new(Router::from_config(config));
    let segments = parse_path(path);
    print_json(&shared.load().resolve_path(&segments))?;

    let (watcher, mut updates) = ConfigWatcher::new(config_path);
    let _watcher = watcher.run()?;

    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Some(new_config) => {
                    shared.replace(Router::from_config(&new_config));
                    print_json(&shared.load().resolve_path(&segments))?;
                }
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, stopping watch");
                break;
            }
        }
    }

    Ok(())
}
