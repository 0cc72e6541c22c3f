//! Sample picker payloads.
//!
//! Records mirror what the picker callback hands back for a `picked` action.

use serde_json::{Value, json};

/// A complete PDF record
pub fn pdf_record() -> Value {
    json!({
        "id": "1",
        "serviceId": "drive",
        "mimeType": "application/pdf",
        "name": "doc.pdf",
        "description": "",
        "type": "pdf",
        "lastEditedUtc": 1700000000,
        "iconUrl": "http://x/icon.png",
        "url": "http://x/doc",
        "embedUrl": "http://x/embed",
        "sizeBytes": 1024,
        "isShared": false
    })
}

/// A complete, shared Google Sheets record
pub fn sheet_record() -> Value {
    json!({
        "id": "1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms",
        "serviceId": "spread",
        "mimeType": "application/vnd.google-apps.spreadsheet",
        "name": "Budget 2024",
        "description": "Quarterly numbers",
        "type": "document",
        "lastEditedUtc": 1712145600000i64,
        "iconUrl": "https://drive-thirdparty.googleusercontent.com/16/type/application/vnd.google-apps.spreadsheet",
        "url": "https://docs.google.com/spreadsheets/d/1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms/edit",
        "embedUrl": "https://docs.google.com/spreadsheets/d/1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms/htmlembed",
        "sizeBytes": 0,
        "isShared": true
    })
}

/// `record` with `field` dropped
pub fn without_field(mut record: Value, field: &str) -> Value {
    if let Some(map) = record.as_object_mut() {
        map.remove(field);
    }
    record
}

/// `record` with `field` set to `value`
pub fn with_field(mut record: Value, field: &str, value: Value) -> Value {
    record[field] = value;
    record
}

/// Selection payload with both sample records, in that order
pub fn two_document_payload() -> Value {
    json!([pdf_record(), sheet_record()])
}

/// Callback properties as the picker reports them
pub fn picker_callback(action: &str, documents: Value) -> Value {
    json!({ "action": action, "documents": documents })
}

/// Minimal valid picker config file
pub const PICKER_CONFIG_TOML: &str = r#"[picker]
label = "Pick a file"
client_id = "client.apps.googleusercontent.com"
developer_key = "AIza-test-key"
view_ids = ["all", { type = "ViewGroup", views = ["documents", "spreadsheets"], label = "Office" }]
enabled_features = ["MULTISELECT_ENABLED"]
locale = "de"
"#;
