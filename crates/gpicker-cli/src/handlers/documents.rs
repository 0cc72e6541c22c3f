use super::read_input;
use crate::output::{dim, print_header, print_json};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use gpicker_types::GoogleDocuments;
use serde_json::Value;

pub fn handle(input: &str, lenient: bool, format: OutputFormat) -> Result<()> {
    let content = read_input(input)?;
    let payload: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse payload from {}", input))?;

    if lenient {
        let records = match &payload {
            Value::Null => GoogleDocuments::map_all_lenient(None)?,
            Value::Array(records) => GoogleDocuments::map_all_lenient(Some(records))?,
            other => anyhow::bail!("payload must be null or an array, found {}", other),
        };
        tracing::info!(count = records.len(), "passed records through without schema checks");
        return print_json(&records);
    }

    let documents = GoogleDocuments::from_value(&payload)?;
    tracing::info!(count = documents.len(), "mapped documents");

    print_documents(&documents, format)
}

pub(crate) fn print_documents(documents: &GoogleDocuments, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(documents);
    }

    if documents.is_empty() {
        println!("No documents.");
        return Ok(());
    }

    print_header(&format!(
        "{:<32} {:<12} {:>12} {:<6} URL",
        "NAME", "TYPE", "SIZE", "SHARED"
    ));
    for doc in documents {
        println!(
            "{:<32} {:<12} {:>12} {:<6} {}",
            truncate(doc.name(), 32),
            doc.kind(),
            doc.size_bytes(),
            if doc.is_shared() { "yes" } else { "no" },
            dim(doc.url())
        );
    }
    println!();
    println!(
        "{} document(s), {} bytes",
        documents.len(),
        documents.total_size_bytes()
    );

    Ok(())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}
