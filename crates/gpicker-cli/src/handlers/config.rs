use crate::config::Config;
use crate::output::print_json;
use crate::types::OutputFormat;
use anyhow::Result;
use gpicker_types::PickerConfig;
use std::path::Path;

pub fn init(
    config_path: &Path,
    client_id: String,
    developer_key: String,
    label: String,
    force: bool,
) -> Result<()> {
    let mut config = Config::load_from(config_path)?;
    if config.picker.is_some() && !force {
        anyhow::bail!(
            "{} already has a [picker] section, use --force to overwrite",
            config_path.display()
        );
    }

    config.picker = Some(PickerConfig::builder(client_id, developer_key, label).build()?);
    config.save_to(config_path)?;

    tracing::info!(path = %config_path.display(), "wrote picker config");
    println!("Wrote picker config to {}", config_path.display());
    Ok(())
}

pub fn show(config_path: &Path, format: OutputFormat) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let picker = config.picker()?;

    for view in picker.deprecated_views() {
        tracing::warn!(
            view = view.as_str(),
            "config requests a deprecated view, the picker answers with 403"
        );
    }

    let props = picker.to_props()?;
    if format == OutputFormat::Json {
        return print_json(&props);
    }

    println!("Config: {}", config_path.display());
    println!();
    print_json(&props)
}
