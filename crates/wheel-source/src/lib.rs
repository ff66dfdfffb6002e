//! Entry source boundary: fetches participant records as opaque JSON
//! and sanitizes them into core entries.
//!
//! The transport format is a JSON array of `{name, tickets}` records;
//! capitalized `Name`/`Tickets` keys from spreadsheet-backed endpoints
//! are accepted as aliases. A record the wheel cannot use is skipped
//! with a warning rather than failing the whole fetch; a fetch with no
//! usable records at all degrades to [`SourceError::Empty`] and never
//! touches session state.

use serde::Deserialize;

use wheel_core::Entry;

/// Unified error type for the wheel-source crate.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("source returned no usable entries")]
    Empty,
}

/// One raw participant record as returned by the backing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryRecord {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Tickets", default)]
    pub tickets: i64,
}

/// Something that can produce the initial weighted entry list.
pub trait EntrySource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Entry>, SourceError>> + Send;
}

/// Entry source backed by an HTTP endpoint returning JSON records.
#[derive(Debug, Clone)]
pub struct HttpEntrySource {
    http: reqwest::Client,
    url: String,
}

impl HttpEntrySource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl EntrySource for HttpEntrySource {
    async fn fetch(&self) -> Result<Vec<Entry>, SourceError> {
        let resp = self.http.get(&self.url).send().await?;
        let resp = resp.error_for_status()?;
        let body = resp.text().await?;

        let records: Vec<EntryRecord> = serde_json::from_str(&body)?;
        tracing::debug!(records = records.len(), url = %self.url, "Fetched entry records");

        let entries = sanitize(records);
        if entries.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(entries)
    }
}

/// Drop records the wheel cannot use: blank names, non-positive or
/// out-of-range ticket counts, repeated names (first occurrence wins).
pub fn sanitize(records: Vec<EntryRecord>) -> Vec<Entry> {
    let mut entries: Vec<Entry> = Vec::with_capacity(records.len());
    for record in records {
        let name = record.name.trim();
        if name.is_empty() {
            tracing::warn!("Skipping record with an empty name");
            continue;
        }
        let Ok(tickets) = u32::try_from(record.tickets) else {
            tracing::warn!(name, tickets = record.tickets, "Skipping record with an unusable ticket count");
            continue;
        };
        if tickets == 0 {
            tracing::warn!(name, "Skipping record with zero tickets");
            continue;
        }
        if entries.iter().any(|e| e.name == name) {
            tracing::warn!(name, "Skipping repeated participant name");
            continue;
        }
        entries.push(Entry::new(name, tickets));
    }
    entries
}
