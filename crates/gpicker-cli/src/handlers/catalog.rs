use crate::output::{dim, print_header, print_json};
use crate::types::OutputFormat;
use anyhow::Result;
use gpicker_types::{Feature, ViewId};
use serde::Serialize;

#[derive(Serialize)]
struct ViewRow {
    name: &'static str,
    value: &'static str,
    deprecated: bool,
    description: &'static str,
}

#[derive(Serialize)]
struct FeatureRow {
    name: &'static str,
    value: &'static str,
    aliases: Vec<&'static str>,
}

pub fn views(include_deprecated: bool, format: OutputFormat) -> Result<()> {
    let rows: Vec<ViewRow> = ViewId::all()
        .iter()
        .filter(|view| include_deprecated || !view.is_deprecated())
        .map(|view| ViewRow {
            name: view.name(),
            value: view.as_str(),
            deprecated: view.is_deprecated(),
            description: view.description(),
        })
        .collect();

    if format == OutputFormat::Json {
        return print_json(&rows);
    }

    print_header(&format!("{:<24} {:<24} DESCRIPTION", "NAME", "VALUE"));
    for row in &rows {
        println!(
            "{:<24} {:<24} {}",
            row.name,
            row.value,
            dim(row.description)
        );
    }

    Ok(())
}

pub fn features(value: Option<&str>, format: OutputFormat) -> Result<()> {
    let features: Vec<Feature> = match value {
        Some(value) => Feature::with_value(value),
        None => Feature::all().to_vec(),
    };

    if let Some(value) = value
        && features.is_empty()
    {
        anyhow::bail!("no feature resolves to '{}'", value);
    }

    let rows: Vec<FeatureRow> = features
        .iter()
        .map(|feature| FeatureRow {
            name: feature.name(),
            value: feature.as_str(),
            aliases: feature.aliases().iter().map(Feature::name).collect(),
        })
        .collect();

    if format == OutputFormat::Json {
        return print_json(&rows);
    }

    print_header(&format!("{:<24} {:<24} SAME VALUE AS", "NAME", "VALUE"));
    for row in &rows {
        println!(
            "{:<24} {:<24} {}",
            row.name,
            row.value,
            dim(&row.aliases.join(", "))
        );
    }

    Ok(())
}
