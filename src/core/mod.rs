pub mod mappers;
pub mod query;
pub mod sheets;

pub use crate::domain::model::{CalendarEntry, Contact, InventoryItem, RawRecord};
pub use crate::utils::error::Result;
