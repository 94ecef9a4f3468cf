//! `parkhub layout`: print the configured floors.

use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use parkhub_core::config::AppConfig;
use parkhub_core::error::AppError;

#[derive(Debug, Serialize, Tabled)]
struct FloorRow {
    #[tabled(rename = "Floor")]
    name: String,
    #[tabled(rename = "Motorcycle")]
    motorcycle: u32,
    #[tabled(rename = "Compact")]
    compact: u32,
    #[tabled(rename = "Electric")]
    electric: u32,
    #[tabled(rename = "Large")]
    large: u32,
    #[tabled(rename = "Total")]
    total: u32,
}

/// Execute the layout command
pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let rows: Vec<FloorRow> = config
        .layout
        .floors
        .iter()
        .map(|floor| FloorRow {
            name: floor.name.clone(),
            motorcycle: floor.motorcycle,
            compact: floor.compact,
            electric: floor.electric,
            large: floor.large,
            total: floor.total_spots(),
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
