//! Client-side derivations the views apply on every render: search, dropdown
//! filters, sorting, and summary statistics. All of them work on borrowed
//! slices and never mutate the stored base sequence.

use crate::domain::model::{CalendarEntry, Contact, InventoryItem, StockStatus};
use std::collections::HashSet;

/// Case-insensitive substring match across several fields (logical OR).
/// An empty term matches everything.
pub fn matches_search(term: &str, fields: &[&str]) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Exact dropdown match. An empty selection means no constraint.
pub fn matches_choice(selected: &str, value: &str) -> bool {
    selected.is_empty() || selected == value
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InventorySort {
    Name,
    Stock,
    Status,
}

/// Search over name/category/location, then sort: name ascending, stock
/// descending, or status ascending on the rendered literal.
pub fn search_inventory(
    items: &[InventoryItem],
    term: &str,
    sort: InventorySort,
) -> Vec<InventoryItem> {
    let mut matched: Vec<InventoryItem> = items
        .iter()
        .filter(|item| matches_search(term, &[&item.name, &item.category, &item.location]))
        .cloned()
        .collect();

    match sort {
        InventorySort::Name => matched.sort_by(|a, b| a.name.cmp(&b.name)),
        InventorySort::Stock => matched.sort_by(|a, b| b.stock.cmp(&a.stock)),
        InventorySort::Status => matched.sort_by(|a, b| a.status.as_str().cmp(b.status.as_str())),
    }
    matched
}

/// Search over name/agency/role, conjoined with exact role and priority
/// dropdowns.
pub fn search_contacts(
    contacts: &[Contact],
    term: &str,
    role: &str,
    priority: &str,
) -> Vec<Contact> {
    contacts
        .iter()
        .filter(|contact| {
            matches_search(term, &[&contact.name, &contact.agency, &contact.role])
                && matches_choice(role, &contact.role)
                && matches_choice(priority, contact.priority.as_str())
        })
        .cloned()
        .collect()
}

/// Entries whose date contains the selected date string; an empty selection
/// keeps everything.
pub fn filter_calendar(entries: &[CalendarEntry], selected_date: &str) -> Vec<CalendarEntry> {
    entries
        .iter()
        .filter(|entry| selected_date.is_empty() || entry.date.contains(selected_date))
        .cloned()
        .collect()
}

/// Counts shown in the supply view's summary cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryStats {
    pub total: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl InventoryStats {
    pub fn collect(items: &[InventoryItem]) -> Self {
        let mut stats = Self {
            total: items.len(),
            ..Self::default()
        };
        for item in items {
            match item.status {
                StockStatus::InStock => stats.in_stock += 1,
                StockStatus::LowStock => stats.low_stock += 1,
                StockStatus::OutOfStock => stats.out_of_stock += 1,
            }
        }
        stats
    }
}

/// Counts shown in the contact directory's summary cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactStats {
    pub total: usize,
    pub agencies: usize,
    pub with_phone: usize,
    pub with_email: usize,
}

impl ContactStats {
    pub fn collect(contacts: &[Contact]) -> Self {
        let agencies: HashSet<&str> = contacts.iter().map(|c| c.agency.as_str()).collect();
        Self {
            total: contacts.len(),
            agencies: agencies.len(),
            with_phone: contacts.iter().filter(|c| !c.phone.is_empty()).count(),
            with_email: contacts.iter().filter(|c| !c.email.is_empty()).count(),
        }
    }
}
