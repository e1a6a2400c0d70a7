use crate::config::SheetsConfig;
use crate::domain::model::RawRecord;
use crate::utils::error::{DashboardError, Result};
use reqwest::Client;
use url::Url;

/// Fetches publicly shared Google Sheets tabs as CSV exports.
///
/// No authentication: the spreadsheet must be shared as "anyone with the
/// link can view".
pub struct SheetsClient {
    client: Client,
    config: SheetsConfig,
}

impl SheetsClient {
    pub fn new(config: SheetsConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &SheetsConfig {
        &self.config
    }

    /// CSV export URL for one sheet tab. The sheet name is percent-encoded
    /// into the query string.
    fn export_url(&self, sheet_name: &str) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/{}/gviz/tq",
            self.config.base_url.trim_end_matches('/'),
            self.config.spreadsheet_id
        ))?;
        url.query_pairs_mut()
            .append_pair("tqx", "out:csv")
            .append_pair("sheet", sheet_name);
        Ok(url)
    }

    /// Fetches one sheet tab and parses it into raw records.
    pub async fn fetch_sheet(&self, sheet_name: &str) -> Result<Vec<RawRecord>> {
        let url = self.export_url(sheet_name)?;
        tracing::debug!("Fetching sheet export: {}", url);

        let response = self.client.get(url).send().await?;
        tracing::debug!("Sheet response status: {}", response.status());

        if !response.status().is_success() {
            return Err(DashboardError::Status {
                code: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(parse_sheet_csv(&body))
    }
}

/// Splits a CSV export into header-keyed records.
///
/// Deliberately naive: lines split on '\n', cells on ','. A comma inside a
/// quoted field therefore misaligns that row's columns; the gviz export for
/// these sheets does not produce such fields. Each cell loses one leading
/// and one trailing double quote plus surrounding whitespace.
///
/// The first line is the header row. Later lines zip positionally against
/// the headers; missing trailing cells become "", extra cells are dropped.
/// Fewer than two lines means no data at all.
pub fn parse_sheet_csv(csv: &str) -> Vec<RawRecord> {
    let rows: Vec<Vec<String>> = csv.split('\n').map(split_line).collect();
    if rows.len() < 2 {
        return Vec::new();
    }

    let headers: Vec<String> = rows[0].iter().map(|h| h.trim().to_string()).collect();
    rows[1..]
        .iter()
        .map(|cells| {
            let mut record = RawRecord::default();
            for (index, header) in headers.iter().enumerate() {
                let value = cells.get(index).cloned().unwrap_or_default();
                record.data.insert(header.clone(), value);
            }
            record
        })
        .collect()
}

fn split_line(line: &str) -> Vec<String> {
    line.split(',').map(strip_cell).collect()
}

fn strip_cell(cell: &str) -> String {
    let cell = cell.strip_prefix('"').unwrap_or(cell);
    let cell = cell.strip_suffix('"').unwrap_or(cell);
    cell.trim().to_string()
}
