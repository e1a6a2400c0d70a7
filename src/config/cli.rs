use crate::core::query::InventorySort;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dataset {
    Inventory,
    Calendar,
    Contacts,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "ems-dashboard")]
#[command(about = "Fetches municipal emergency-management dashboard data from Google Sheets")]
pub struct CliConfig {
    /// Dataset to fetch
    #[arg(value_enum)]
    pub dataset: Dataset,

    /// TOML file overriding the sheet source settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Case-insensitive search term applied to the dataset's text fields
    #[arg(long, default_value = "")]
    pub search: String,

    /// Sort key for the inventory dataset
    #[arg(long, value_enum, default_value = "name")]
    pub sort: InventorySort,

    /// Exact role filter for the contacts dataset
    #[arg(long, default_value = "")]
    pub role: String,

    /// Exact priority filter for the contacts dataset
    #[arg(long, default_value = "")]
    pub priority: String,

    /// Date substring filter for the calendar dataset
    #[arg(long, default_value = "")]
    pub date: String,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
