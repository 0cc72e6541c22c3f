//! Assertions over `gpicker --format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that JSON output is an array of `expected` documents.
pub fn assert_document_count(json: &Value, expected: usize) -> Result<()> {
    let documents = json.as_array().context("Expected a JSON array of documents")?;

    if documents.len() != expected {
        anyhow::bail!("Expected {} documents, got {}", expected, documents.len());
    }

    Ok(())
}

/// Assert that documents appear with the given names, in order.
pub fn assert_document_names(json: &Value, expected: &[&str]) -> Result<()> {
    let documents = json.as_array().context("Expected a JSON array of documents")?;

    let names = documents
        .iter()
        .enumerate()
        .map(|(i, doc)| {
            doc["name"]
                .as_str()
                .with_context(|| format!("Document {} missing name", i))
        })
        .collect::<Result<Vec<_>>>()?;

    if names != expected {
        anyhow::bail!("Expected documents {:?}, got {:?}", expected, names);
    }

    Ok(())
}

/// Assert that a value is a serialized view group with the given leaf views.
pub fn assert_view_group(json: &Value, views: &[&str], label: Option<&str>) -> Result<()> {
    if json["type"] != "ViewGroup" {
        anyhow::bail!("Expected type 'ViewGroup', got {}", json["type"]);
    }

    let actual = json["views"]
        .as_array()
        .context("Expected 'views' array")?
        .iter()
        .map(|v| v.as_str().context("Expected only view ids in 'views'"))
        .collect::<Result<Vec<_>>>()?;

    if actual != views {
        anyhow::bail!("Expected views {:?}, got {:?}", views, actual);
    }

    if json["label"].as_str() != label {
        anyhow::bail!("Expected label {:?}, got {}", label, json["label"]);
    }

    Ok(())
}
