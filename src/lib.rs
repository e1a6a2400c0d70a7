pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, SheetsConfig};
pub use core::mappers::{fetch_calendar, fetch_contacts, fetch_inventory};
pub use core::sheets::SheetsClient;
pub use utils::error::{DashboardError, Result};
