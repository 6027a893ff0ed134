//! Drainsafe CLI
//!
//! A command-line tool that evaluates a Kubernetes cluster's Deployments
//! for resiliency against voluntary disruption: node drains, upgrades,
//! and rollouts.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Drainsafe CLI
#[derive(Parser)]
#[command(name = "drainsafe")]
#[command(
    author,
    version,
    about = "Evaluate a Kubernetes cluster's resiliency against voluntary disruption",
    long_about = None
)]
pub struct Cli {
    /// Path to kubeconfig file (uses default if not specified)
    #[arg(long, env = "KUBECONFIG")]
    pub kubeconfig: Option<String>,

    /// Authenticate with in-cluster ServiceAccount credentials instead of
    /// a kubeconfig
    #[arg(long)]
    pub in_cluster: bool,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate Deployments for behavior during disruptive events like
    /// cluster upgrades or Node scaling
    Eval {
        /// Namespace to check; by default all Namespaces (except for
        /// system ones filtered out) are checked
        #[arg(long, short)]
        namespace: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the report on stdout stays clean
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // Connection failures are the only fatal path; per-query failures
    // degrade inside the engine
    let connection = config::connect(cli.in_cluster, cli.kubeconfig.as_deref()).await?;

    match cli.command {
        Commands::Eval { namespace } => {
            commands::eval::run(connection, namespace.as_deref()).await?;
        }
    }

    Ok(())
}
