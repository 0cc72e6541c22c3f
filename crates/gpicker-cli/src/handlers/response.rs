use super::documents::print_documents;
use super::read_input;
use crate::output::print_json;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use gpicker_types::PickerResponse;
use serde_json::Value;

pub fn handle(action: &str, documents: Option<&str>, format: OutputFormat) -> Result<()> {
    let payload = documents
        .map(|input| -> Result<Value> {
            let content = read_input(input)?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse documents from {}", input))
        })
        .transpose()?;

    let response = PickerResponse::from_props(action, payload.as_ref())?;
    if !response.is_picked() && payload.is_some() {
        tracing::info!(action = %response.action, "documents ignored, action is not 'picked'");
    }

    if format == OutputFormat::Json {
        return print_json(&response);
    }

    let action = if response.action.as_str().is_empty() {
        "(none)"
    } else {
        response.action.as_str()
    };
    println!("Action: {}", action);
    print_documents(&response.documents, format)
}
