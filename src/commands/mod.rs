//! CLI command definitions and dispatch.

pub mod demo;
pub mod layout;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::OutputFormat;
use parkhub_alloc::FloorStatus;
use parkhub_core::config::AppConfig;
use parkhub_core::error::AppError;

/// ParkHub: concurrent parking spot allocation
#[derive(Debug, Parser)]
#[command(name = "parkhub", version, about, long_about = None)]
pub struct Cli {
    /// Configuration overlay to load from `config/{env}`
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Park, pay for and release a burst of concurrent arrivals
    Demo(demo::DemoArgs),
    /// Show the configured floors and spot counts
    Layout,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Demo(args) => demo::execute(args, &config, self.format).await,
            Commands::Layout => layout::execute(&config, self.format),
        }
    }
}

/// One row of a floor status table.
#[derive(Debug, Serialize, Tabled)]
pub struct PoolRow {
    #[tabled(rename = "Floor")]
    pub floor: String,
    #[tabled(rename = "Pool")]
    pub pool: String,
    #[tabled(rename = "Total")]
    pub total: u32,
    #[tabled(rename = "Occupied")]
    pub occupied: u32,
    #[tabled(rename = "Available")]
    pub available: u32,
    #[tabled(rename = "Usage %")]
    pub usage: String,
}

/// Flatten floor snapshots into table rows.
pub fn pool_rows(floors: &[FloorStatus]) -> Vec<PoolRow> {
    floors
        .iter()
        .flat_map(|floor| floor.pools.iter())
        .map(|pool| PoolRow {
            floor: pool.floor.clone(),
            pool: pool.kind.to_string(),
            total: pool.total,
            occupied: pool.occupied,
            available: pool.available,
            usage: format!("{:.0}", pool.usage_percent()),
        })
        .collect()
}
