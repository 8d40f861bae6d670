use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::domain::reading::Reading;

pub const SENSOR_COLLECTION: &str = "SensorData";

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store query failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to decode store response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Client,
    base_url: String,
    collection: String,
}

impl StoreClient {
    pub fn new(base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            base_url: base_url.into(),
            collection: collection.into(),
        }
    }

    /// Runs an equality filter on the collection's `date` field.
    ///
    /// Zero matches decode to an empty list; only transport, status, and
    /// decode problems surface as errors.
    pub async fn fetch_readings(&self, date: &str) -> Result<Vec<Reading>> {
        let url = format!("{}/documents:runQuery", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&query_body(&self.collection, date))
            .send()
            .await?
            .error_for_status()?;

        let rows: Vec<QueryRow> = serde_json::from_slice(&response.bytes().await?)?;
        Ok(rows
            .into_iter()
            .filter_map(|row| row.document)
            .map(QueryDocument::into_reading)
            .collect())
    }
}

fn query_body(collection: &str, date: &str) -> serde_json::Value {
    json!({
        "structuredQuery": {
            "from": [{ "collectionId": collection }],
            "where": {
                "fieldFilter": {
                    "field": { "fieldPath": "date" },
                    "op": "EQUAL",
                    "value": { "stringValue": date },
                }
            }
        }
    })
}

// An empty result set comes back as a single row carrying only a readTime.
#[derive(Debug, Deserialize)]
struct QueryRow {
    document: Option<QueryDocument>,
}

#[derive(Debug, Deserialize)]
struct QueryDocument {
    #[serde(default)]
    fields: HashMap<String, FieldValue>,
}

#[derive(Debug, Deserialize)]
struct FieldValue {
    #[serde(rename = "stringValue")]
    string_value: Option<String>,
}

impl QueryDocument {
    fn into_reading(mut self) -> Reading {
        Reading {
            date: self.take_string("date"),
            time: self.take_string("time"),
            temp: self.take_string("temp"),
            hmd: self.take_string("hmd"),
        }
    }

    // Non-string values read as absent, same as a missing field.
    fn take_string(&mut self, field: &str) -> Option<String> {
        self.fields
            .remove(field)
            .and_then(|value| value.string_value)
    }
}
