use crate::core::sheets::SheetsClient;
use crate::domain::model::{
    CalendarEntry, Contact, ContactPriority, ContactStatus, EntryKind, InventoryItem, Priority,
    RawRecord, StockStatus,
};

/// Inventory rows -> typed items. Stock parses as an unsigned integer with
/// fallback 0, so it can never go negative.
pub fn map_inventory(records: &[RawRecord]) -> Vec<InventoryItem> {
    records
        .iter()
        .enumerate()
        .map(|(index, row)| InventoryItem {
            id: format!("inv-{index}"),
            name: row.get("Item-Name").to_string(),
            description: row.get("Item-Description").to_string(),
            category: row.get("Item-Category").to_string(),
            location: row.get("Item-Location").to_string(),
            stock: row.get("Current-Stock").parse().unwrap_or(0),
            unit: row.get("Item-Unit").to_string(),
            status: StockStatus::from_sheet(row.get("Item-Status")),
        })
        .collect()
}

/// Calendar rows -> events followed by tasks, never interleaved.
///
/// Both kinds come from the same sheet: every row becomes an event, and rows
/// with a non-empty "Task Name" additionally become tasks. The two id
/// sequences each start at zero, so event-N and task-N can coexist in the
/// merged output.
pub fn map_calendar(records: &[RawRecord]) -> Vec<CalendarEntry> {
    let events = records.iter().enumerate().map(|(index, row)| CalendarEntry {
        id: format!("event-{index}"),
        name: row.get("Event Name").to_string(),
        date: row.get("Date").to_string(),
        time: row.get("Time").to_string(),
        location: row.get("Location").to_string(),
        notes: row.get("Notes").to_string(),
        priority: Priority::from_sheet(row.get("Priority")),
        kind: EntryKind::Event,
    });

    let tasks = records
        .iter()
        .filter(|row| !row.get("Task Name").is_empty())
        .enumerate()
        .map(|(index, row)| {
            let date_time = row.get("Date & Time");
            CalendarEntry {
                id: format!("task-{index}"),
                name: row.get("Task Name").to_string(),
                date: date_time.to_string(),
                // Second whitespace token of "Date & Time"; empty when the
                // cell has no space in it.
                time: date_time.split(' ').nth(1).unwrap_or("").to_string(),
                location: row.get("Deadline Date & Time").to_string(),
                notes: row.get("Description").to_string(),
                priority: Priority::Medium,
                kind: EntryKind::Task,
            }
        });

    events.chain(tasks).collect()
}

/// Contact rows -> typed contacts.
pub fn map_contacts(records: &[RawRecord]) -> Vec<Contact> {
    records
        .iter()
        .enumerate()
        .map(|(index, row)| Contact {
            id: format!("contact-{index}"),
            name: row.get("Contact Name").to_string(),
            agency: row.get("Agency").to_string(),
            role: row.get("Role/Title").to_string(),
            phone: row.get("Primary Phone").to_string(),
            email: row.get("Email").to_string(),
            status: ContactStatus::from_sheet(row.get("Status Indicator")),
            priority: ContactPriority::from_sheet(row.get("Priority")),
        })
        .collect()
}

/// Inventory for the supply view. Fetch failures are logged and collapsed
/// into an empty list; callers only ever see data or no data.
pub async fn fetch_inventory(client: &SheetsClient) -> Vec<InventoryItem> {
    match client.fetch_sheet(&client.config().inventory_sheet).await {
        Ok(records) => map_inventory(&records),
        Err(error) => {
            tracing::error!("Error fetching inventory data: {}", error);
            Vec::new()
        }
    }
}

/// Merged events and tasks for the calendar view. Never fails; see
/// [`fetch_inventory`].
pub async fn fetch_calendar(client: &SheetsClient) -> Vec<CalendarEntry> {
    match client.fetch_sheet(&client.config().calendar_sheet).await {
        Ok(records) => map_calendar(&records),
        Err(error) => {
            tracing::error!("Error fetching calendar data: {}", error);
            Vec::new()
        }
    }
}

/// Contacts for the directory view. Never fails; see [`fetch_inventory`].
pub async fn fetch_contacts(client: &SheetsClient) -> Vec<Contact> {
    match client.fetch_sheet(&client.config().contacts_sheet).await {
        Ok(records) => map_contacts(&records),
        Err(error) => {
            tracing::error!("Error fetching contacts data: {}", error);
            Vec::new()
        }
    }
}
