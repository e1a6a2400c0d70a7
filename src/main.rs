use clap::Parser;
use ems_dashboard::config::cli::{CliConfig, Dataset};
use ems_dashboard::config::SheetsConfig;
use ems_dashboard::core::query::{
    filter_calendar, search_contacts, search_inventory, ContactStats, InventoryStats,
};
use ems_dashboard::utils::{logger, validation::Validate};
use ems_dashboard::{fetch_calendar, fetch_contacts, fetch_inventory, SheetsClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting ems-dashboard CLI");

    let config = match &cli.config {
        Some(path) => SheetsConfig::from_file(path)?,
        None => SheetsConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    let client = SheetsClient::new(config);

    match cli.dataset {
        Dataset::Inventory => {
            let items = fetch_inventory(&client).await;
            let stats = InventoryStats::collect(&items);
            tracing::info!(
                "{} items ({} in stock, {} low, {} out of stock)",
                stats.total,
                stats.in_stock,
                stats.low_stock,
                stats.out_of_stock
            );

            let view = search_inventory(&items, &cli.search, cli.sort);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                for item in &view {
                    println!(
                        "{:<28} {:<18} {:<18} {:>6} {:<8} {}",
                        item.name, item.category, item.location, item.stock, item.unit, item.status
                    );
                }
            }
        }
        Dataset::Calendar => {
            let entries = fetch_calendar(&client).await;
            tracing::info!("{} calendar entries", entries.len());

            let view = filter_calendar(&entries, &cli.date);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                for entry in &view {
                    println!(
                        "{:<6} {:<28} {:<12} {:<8} {:<20} {}",
                        entry.kind, entry.name, entry.date, entry.time, entry.location,
                        entry.priority
                    );
                }
            }
        }
        Dataset::Contacts => {
            let contacts = fetch_contacts(&client).await;
            let stats = ContactStats::collect(&contacts);
            tracing::info!(
                "{} contacts across {} agencies",
                stats.total,
                stats.agencies
            );

            let view = search_contacts(&contacts, &cli.search, &cli.role, &cli.priority);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                for contact in &view {
                    println!(
                        "{:<24} {:<16} {:<20} {:<14} {:<28} {:<10} {}",
                        contact.name,
                        contact.role,
                        contact.agency,
                        contact.phone,
                        contact.email,
                        contact.status,
                        contact.priority
                    );
                }
            }
        }
    }

    Ok(())
}
