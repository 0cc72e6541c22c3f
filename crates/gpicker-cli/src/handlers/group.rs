use crate::output::print_json;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use gpicker_types::{ViewGroup, ViewId, ViewItem};
use serde_json::Value;

pub fn handle(items: &[String], label: Option<&str>, format: OutputFormat) -> Result<()> {
    let values = items
        .iter()
        .map(|item| to_value(item))
        .collect::<Result<Vec<_>>>()?;

    let group = ViewGroup::from_values(&values, label)?;

    if format == OutputFormat::Json {
        return print_json(&group);
    }

    print_tree(&group, 0);
    Ok(())
}

/// Map one argument to the value handed to the view group
///
/// JSON objects are nested groups. Anything else is a view, given either as
/// external value or symbolic name. Unknown views pass through unchanged.
fn to_value(item: &str) -> Result<Value> {
    if item.trim_start().starts_with('{') {
        return serde_json::from_str(item)
            .with_context(|| format!("'{}' is not a valid JSON view group", item));
    }

    match item.parse::<ViewId>() {
        Ok(view) => {
            if view.is_deprecated() {
                tracing::warn!(view = view.as_str(), "view is deprecated, the picker answers with 403");
            }
            Ok(Value::String(view.as_str().to_string()))
        }
        Err(_) => {
            tracing::warn!(view = item, "view is not in the catalog, passing it through");
            Ok(Value::String(item.to_string()))
        }
    }
}

fn print_tree(group: &ViewGroup, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{}[{}]", indent, group.label().unwrap_or("ViewGroup"));
    for (i, item) in group.views().iter().enumerate() {
        match item {
            ViewItem::View(view) if i == 0 => println!("{}  {} (root)", indent, view),
            ViewItem::View(view) => println!("{}  {}", indent, view),
            ViewItem::Group(nested) => print_tree(nested, depth + 1),
        }
    }
}
