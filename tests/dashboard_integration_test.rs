use ems_dashboard::config::SheetsConfig;
use ems_dashboard::domain::model::{ContactPriority, ContactStatus, EntryKind, StockStatus};
use ems_dashboard::{fetch_calendar, fetch_contacts, fetch_inventory, SheetsClient};
use httpmock::prelude::*;

fn test_client(server: &MockServer) -> SheetsClient {
    SheetsClient::new(SheetsConfig {
        base_url: server.base_url(),
        spreadsheet_id: "test-spreadsheet".to_string(),
        ..SheetsConfig::default()
    })
}

#[tokio::test]
async fn test_fetch_inventory_end_to_end() {
    let server = MockServer::start();
    let csv = "\"Item-Name\",\"Current-Stock\",\"Item-Status\"\n\
               \"Tarpaulin\",\"5\",\"In Stock\"\n\
               \"Rope\",\"0\",\"Out of Stock\"";
    let sheet_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/test-spreadsheet/gviz/tq")
            .query_param("tqx", "out:csv")
            .query_param("sheet", "Sheet1");
        then.status(200).body(csv);
    });

    let client = test_client(&server);
    let items = fetch_inventory(&client).await;

    sheet_mock.assert();
    assert_eq!(items.len(), 2);

    assert_eq!(items[0].id, "inv-0");
    assert_eq!(items[0].name, "Tarpaulin");
    assert_eq!(items[0].stock, 5);
    assert_eq!(items[0].status, StockStatus::InStock);

    assert_eq!(items[1].id, "inv-1");
    assert_eq!(items[1].name, "Rope");
    assert_eq!(items[1].stock, 0);
    assert_eq!(items[1].status, StockStatus::OutOfStock);
}

#[tokio::test]
async fn test_fetch_calendar_merges_events_then_tasks() {
    let server = MockServer::start();
    let csv = "\"Event Name\",\"Date\",\"Time\",\"Location\",\"Notes\",\"Priority\",\"Task Name\",\"Date & Time\",\"Deadline Date & Time\",\"Description\"\n\
               \"Drill A\",\"2025-02-10\",\"09:00\",\"Plaza\",\"Bring PPE\",\"High\",\"\",\"\",\"\",\"\"\n\
               \"\",\"\",\"\",\"\",\"\",\"\",\"Submit Report\",\"2025-02-10 14:00\",\"2025-02-12 17:00\",\"Quarterly report\"";
    let sheet_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/test-spreadsheet/gviz/tq")
            .query_param("sheet", "Sheet2");
        then.status(200).body(csv);
    });

    let client = test_client(&server);
    let entries = fetch_calendar(&client).await;

    sheet_mock.assert();
    // Every row becomes an event; the task row additionally becomes a task.
    assert_eq!(entries.len(), 3);

    assert_eq!(entries[0].id, "event-0");
    assert_eq!(entries[0].name, "Drill A");
    assert_eq!(entries[0].kind, EntryKind::Event);

    assert_eq!(entries[1].id, "event-1");
    assert_eq!(entries[1].kind, EntryKind::Event);

    assert_eq!(entries[2].id, "task-0");
    assert_eq!(entries[2].name, "Submit Report");
    assert_eq!(entries[2].kind, EntryKind::Task);
    assert_eq!(entries[2].time, "14:00");
}

#[tokio::test]
async fn test_fetch_contacts_end_to_end() {
    let server = MockServer::start();
    let csv = "\"Contact Name\",\"Agency\",\"Role/Title\",\"Primary Phone\",\"Email\",\"Status Indicator\",\"Priority\"\n\
               \"Ana Cruz\",\"MDRRMO\",\"Director\",\"0917-000-0000\",\"ana@example.org\",\"Active\",\"Critical\"\n\
               \"Ben Reyes\",\"Red Cross\",\"Officer\",\"\",\"\",\"\",\"critical\"";
    let sheet_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/test-spreadsheet/gviz/tq")
            .query_param("sheet", "Sheet3");
        then.status(200).body(csv);
    });

    let client = test_client(&server);
    let contacts = fetch_contacts(&client).await;

    sheet_mock.assert();
    assert_eq!(contacts.len(), 2);

    assert_eq!(contacts[0].id, "contact-0");
    assert_eq!(contacts[0].priority, ContactPriority::Critical);
    assert_eq!(contacts[0].status, ContactStatus::Active);

    // Wrong-case "critical" collapses to Support; empty status to Active.
    assert_eq!(contacts[1].priority, ContactPriority::Support);
    assert_eq!(contacts[1].status, ContactStatus::Active);
}

#[tokio::test]
async fn test_fetch_failure_is_swallowed_into_empty_data() {
    let server = MockServer::start();
    let sheet_mock = server.mock(|when, then| {
        when.method(GET).path("/test-spreadsheet/gviz/tq");
        then.status(500);
    });

    let client = test_client(&server);

    // Views cannot tell fetch failure from a genuinely empty source; all
    // three wrappers return empty data instead of an error.
    assert!(fetch_inventory(&client).await.is_empty());
    assert!(fetch_calendar(&client).await.is_empty());
    assert!(fetch_contacts(&client).await.is_empty());

    sheet_mock.assert_hits(3);
}

#[tokio::test]
async fn test_header_only_sheet_yields_no_entities() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/test-spreadsheet/gviz/tq");
        then.status(200)
            .body("\"Item-Name\",\"Current-Stock\",\"Item-Status\"");
    });

    let client = test_client(&server);
    assert!(fetch_inventory(&client).await.is_empty());
}
