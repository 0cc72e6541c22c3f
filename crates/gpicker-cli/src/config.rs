use crate::error::{Error, Result};
use gpicker_types::{Feature, PickerConfig, ViewItem};
use serde::{Deserialize, Serialize, Serializer};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";

/// `--config` wins over `GPICKER_CONFIG`. Otherwise the file lives in the
/// platform config dir, or under `~/.gpicker` where there is none.
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    let requested = explicit_path.map(str::to_owned).or_else(|| {
        std::env::var("GPICKER_CONFIG")
            .ok()
            .filter(|path| !path.is_empty())
    });
    if let Some(path) = requested {
        return Ok(expand_tilde(&path));
    }

    dirs::config_dir()
        .map(|dir| dir.join("gpicker"))
        .or_else(|| dirs::home_dir().map(|home| home.join(".gpicker")))
        .map(|dir| dir.join(CONFIG_FILE))
        .ok_or_else(|| {
            Error::Config("no config or home directory to keep gpicker settings in".to_string())
        })
}

fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_picker"
    )]
    pub picker: Option<PickerConfig>,
}

/// The `[picker]` table as written to disk. Unlike the picker props, features
/// keep their symbolic names so aliases that share a value survive a reload.
#[derive(Serialize)]
struct StoredPicker<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a str>,
    open: bool,
    view_ids: &'a [ViewItem],
    client_id: &'a str,
    scope: &'a str,
    developer_key: &'a str,
    enabled_features: Vec<&'static str>,
    disabled_features: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locale: Option<&'a str>,
}

impl<'a> From<&'a PickerConfig> for StoredPicker<'a> {
    fn from(picker: &'a PickerConfig) -> Self {
        let names = |features: &[Feature]| -> Vec<&'static str> {
            features.iter().map(Feature::name).collect()
        };
        StoredPicker {
            id: picker.id.as_deref(),
            label: &picker.label,
            value: picker.value.as_deref(),
            open: picker.open,
            view_ids: &picker.view_ids,
            client_id: &picker.client_id,
            scope: &picker.scope,
            developer_key: &picker.developer_key,
            enabled_features: names(&picker.enabled_features),
            disabled_features: names(&picker.disabled_features),
            locale: picker.locale.as_deref(),
        }
    }
}

fn serialize_picker<S>(
    picker: &Option<PickerConfig>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    picker.as_ref().map(StoredPicker::from).serialize(serializer)
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// The validated picker section
    pub fn picker(&self) -> Result<&PickerConfig> {
        let picker = self.picker.as_ref().ok_or_else(|| {
            Error::Config("no [picker] section, run 'gpicker config init' first".to_string())
        })?;
        picker.validate()?;
        Ok(picker)
    }
}
