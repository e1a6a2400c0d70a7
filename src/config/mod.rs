pub mod cli;
pub mod tables;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use cli::CliConfig;

pub const SHEETS_EXPORT_BASE: &str = "https://docs.google.com/spreadsheets/d";

/// The municipality's shared dashboard spreadsheet. All three datasets live
/// in tabs of this one document.
pub const DASHBOARD_SPREADSHEET_ID: &str = "11uutE9iZ2BjddbFkeX9cQVFOouphdvyP000vh1lGOo4";

/// Where the sheet data comes from. Defaults carry the production values;
/// a TOML file can override any subset of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetsConfig {
    pub base_url: String,
    pub spreadsheet_id: String,
    pub inventory_sheet: String,
    pub calendar_sheet: String,
    pub contacts_sheet: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            base_url: SHEETS_EXPORT_BASE.to_string(),
            spreadsheet_id: DASHBOARD_SPREADSHEET_ID.to_string(),
            inventory_sheet: "Sheet1".to_string(),
            calendar_sheet: "Sheet2".to_string(),
            contacts_sheet: "Sheet3".to_string(),
        }
    }
}

impl SheetsConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

impl Validate for SheetsConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("spreadsheet_id", &self.spreadsheet_id)?;
        validate_non_empty_string("inventory_sheet", &self.inventory_sheet)?;
        validate_non_empty_string("calendar_sheet", &self.calendar_sheet)?;
        validate_non_empty_string("contacts_sheet", &self.contacts_sheet)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_points_at_dashboard_spreadsheet() {
        let config = SheetsConfig::default();

        assert_eq!(config.spreadsheet_id, DASHBOARD_SPREADSHEET_ID);
        assert_eq!(config.inventory_sheet, "Sheet1");
        assert_eq!(config.calendar_sheet, "Sheet2");
        assert_eq!(config.contacts_sheet, "Sheet3");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_overrides_fall_back_to_defaults() {
        let toml_content = r#"
spreadsheet_id = "test-spreadsheet"
inventory_sheet = "Inventory"
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = SheetsConfig::from_file(temp_file.path()).unwrap();

        assert_eq!(config.spreadsheet_id, "test-spreadsheet");
        assert_eq!(config.inventory_sheet, "Inventory");
        // Untouched keys keep their defaults.
        assert_eq!(config.base_url, SHEETS_EXPORT_BASE);
        assert_eq!(config.contacts_sheet, "Sheet3");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = SheetsConfig {
            spreadsheet_id: String::new(),
            ..SheetsConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SheetsConfig {
            base_url: "ftp://example.com".to_string(),
            ..SheetsConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
