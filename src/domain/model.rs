use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One parsed spreadsheet row: trimmed column header -> cell value.
///
/// Records are built fresh on every fetch and discarded once a mapper has
/// turned them into typed entities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    pub data: HashMap<String, String>,
}

impl RawRecord {
    /// Cell value for a column, or "" when the column is absent.
    pub fn get(&self, key: &str) -> &str {
        self.data.get(key).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    /// Sheet literal -> status. Anything unrecognized (including an empty
    /// cell) falls back to In Stock.
    pub fn from_sheet(value: &str) -> Self {
        match value {
            "Low Stock" => Self::LowStock,
            "Out of Stock" => Self::OutOfStock,
            _ => Self::InStock,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supply inventory row from Sheet1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub stock: u32,
    pub unit: String,
    pub status: StockStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sheet literal -> priority, defaulting to Medium.
    pub fn from_sheet(value: &str) -> Self {
        match value {
            "High" => Self::High,
            "Low" => Self::Low,
            _ => Self::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Event,
    Task,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "Event",
            Self::Task => "Task",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar row from Sheet2. Events and tasks share the sheet; the mapper
/// decides the kind per row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub id: String,
    pub name: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub notes: String,
    pub priority: Priority,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactStatus {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Emergency,
}

impl ContactStatus {
    /// Sheet literal -> status, defaulting to Active.
    pub fn from_sheet(value: &str) -> Self {
        match value {
            "On Leave" => Self::OnLeave,
            "Emergency" => Self::Emergency,
            _ => Self::Active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On Leave",
            Self::Emergency => "Emergency",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactPriority {
    Critical,
    Support,
}

impl ContactPriority {
    /// Only the exact literal "Critical" is critical; everything else
    /// (wrong case, empty, unknown) collapses to Support.
    pub fn from_sheet(value: &str) -> Self {
        if value == "Critical" {
            Self::Critical
        } else {
            Self::Support
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Support => "Support",
        }
    }
}

impl fmt::Display for ContactPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contact directory row from Sheet3.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub agency: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    pub status: ContactStatus,
    pub priority: ContactPriority,
}
