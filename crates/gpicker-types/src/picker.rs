use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::catalog::{Feature, ViewId};
use crate::document::GoogleDocuments;
use crate::error::{Error, Result};
use crate::view_group::ViewItem;

/// Read-only Drive scope, enough to pick a document
pub const DEFAULT_SCOPE: &str = "https://www.googleapis.com/auth/drive.readonly";

fn default_view_ids() -> Vec<ViewItem> {
    vec![ViewItem::from(ViewId::Docs)]
}

fn default_scope() -> String {
    DEFAULT_SCOPE.to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

/// Accept either a single value or a list, as the picker properties do
fn one_or_many<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(item) => vec![item],
        OneOrMany::Many(items) => items,
    })
}

/// Properties of one picker invocation
///
/// Serializes to the property structure consumed by the presentation layer:
/// snake_case keys, features as external values, view groups as
/// `{type, views, label}`. When deserializing, list properties also accept a
/// single value and features may be given by symbolic name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub open: bool,
    #[serde(default = "default_view_ids", deserialize_with = "one_or_many")]
    pub view_ids: Vec<ViewItem>,
    pub client_id: String,
    #[serde(default = "default_scope")]
    pub scope: String,
    pub developer_key: String,
    #[serde(default, deserialize_with = "one_or_many")]
    pub enabled_features: Vec<Feature>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub disabled_features: Vec<Feature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl PickerConfig {
    pub fn builder(
        client_id: impl Into<String>,
        developer_key: impl Into<String>,
        label: impl Into<String>,
    ) -> PickerConfigBuilder {
        PickerConfigBuilder {
            config: PickerConfig {
                id: None,
                label: label.into(),
                value: None,
                open: false,
                view_ids: default_view_ids(),
                client_id: client_id.into(),
                scope: default_scope(),
                developer_key: developer_key.into(),
                enabled_features: Vec::new(),
                disabled_features: Vec::new(),
                locale: None,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(Error::invalid("label is required"));
        }
        if self.client_id.trim().is_empty() {
            return Err(Error::invalid("client_id is required"));
        }
        if self.developer_key.trim().is_empty() {
            return Err(Error::invalid("developer_key is required"));
        }
        if self.scope.trim().is_empty() {
            return Err(Error::invalid("scope must not be empty"));
        }
        if self.view_ids.is_empty() {
            return Err(Error::invalid("at least one view is required"));
        }
        // The picker only sees external values, so aliases collide too
        for enabled in &self.enabled_features {
            if let Some(disabled) = self
                .disabled_features
                .iter()
                .find(|disabled| disabled.as_str() == enabled.as_str())
            {
                return Err(Error::invalid(format!(
                    "feature '{}' is both enabled ({}) and disabled ({})",
                    enabled.as_str(),
                    enabled.name(),
                    disabled.name()
                )));
            }
        }
        Ok(())
    }

    /// Catalog views in this config that the picker service no longer serves
    pub fn deprecated_views(&self) -> Vec<ViewId> {
        let mut deprecated = Vec::new();
        for item in &self.view_ids {
            let leaves = match item {
                ViewItem::View(view) => vec![view.as_str()],
                ViewItem::Group(group) => group.leaf_views(),
            };
            for leaf in leaves {
                if let Some(view) = ViewId::from_value(leaf).filter(ViewId::is_deprecated)
                    && !deprecated.contains(&view)
                {
                    deprecated.push(view);
                }
            }
        }
        deprecated
    }

    /// Property structure handed to the presentation layer
    pub fn to_props(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

pub struct PickerConfigBuilder {
    config: PickerConfig,
}

impl PickerConfigBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.config.id = Some(id.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.config.value = Some(value.into());
        self
    }

    pub fn open(mut self, open: bool) -> Self {
        self.config.open = open;
        self
    }

    /// Replace the default view list
    pub fn views<I, T>(mut self, views: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ViewItem>,
    {
        self.config.view_ids = views.into_iter().map(Into::into).collect();
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.config.scope = scope.into();
        self
    }

    pub fn enable(mut self, feature: Feature) -> Self {
        self.config.enabled_features.push(feature);
        self
    }

    pub fn disable(mut self, feature: Feature) -> Self {
        self.config.disabled_features.push(feature);
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.config.locale = Some(locale.into());
        self
    }

    pub fn build(self) -> Result<PickerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Action reported by the picker callback
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PickerAction {
    /// No callback received yet
    #[default]
    None,
    Picked,
    Cancel,
    Loaded,
    /// Any action this crate does not know, carried verbatim
    Other(String),
}

impl PickerAction {
    pub fn as_str(&self) -> &str {
        match self {
            PickerAction::None => "",
            PickerAction::Picked => "picked",
            PickerAction::Cancel => "cancel",
            PickerAction::Loaded => "loaded",
            PickerAction::Other(action) => action,
        }
    }
}

impl From<&str> for PickerAction {
    fn from(action: &str) -> Self {
        match action {
            "" => PickerAction::None,
            "picked" => PickerAction::Picked,
            "cancel" => PickerAction::Cancel,
            "loaded" => PickerAction::Loaded,
            other => PickerAction::Other(other.to_string()),
        }
    }
}

impl From<String> for PickerAction {
    fn from(action: String) -> Self {
        PickerAction::from(action.as_str())
    }
}

impl From<PickerAction> for String {
    fn from(action: PickerAction) -> Self {
        action.as_str().to_string()
    }
}

impl fmt::Display for PickerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one picker callback
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PickerResponse {
    pub action: PickerAction,
    pub documents: GoogleDocuments,
}

impl PickerResponse {
    /// Build a response from the callback properties
    ///
    /// Documents are only mapped for a `picked` action; for any other action
    /// the payload is ignored and the document list stays empty.
    pub fn from_props(action: &str, documents: Option<&Value>) -> Result<Self> {
        let action = PickerAction::from(action);
        let documents = match (&action, documents) {
            (PickerAction::Picked, Some(payload)) => GoogleDocuments::from_value(payload)?,
            _ => GoogleDocuments::default(),
        };
        Ok(Self { action, documents })
    }

    /// Build a response from a `{"action": ..., "documents": ...}` object
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Object(props) = value else {
            return Err(Error::invalid(format!(
                "picker response must be an object, found {}",
                value
            )));
        };
        let action = match props.get("action") {
            None | Some(Value::Null) => "",
            Some(Value::String(action)) => action.as_str(),
            Some(other) => {
                return Err(Error::invalid(format!(
                    "picker action must be a string, found {}",
                    other
                )));
            }
        };
        Self::from_props(action, props.get("documents"))
    }

    pub fn is_picked(&self) -> bool {
        self.action == PickerAction::Picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_group::ViewGroup;
    use serde_json::json;

    fn minimal() -> PickerConfig {
        PickerConfig::builder("client.apps.googleusercontent.com", "AIza-key", "Pick a file")
            .build()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = minimal();
        assert_eq!(config.view_ids, vec![ViewItem::from("all")]);
        assert_eq!(config.scope, DEFAULT_SCOPE);
        assert!(!config.open);
        assert!(config.enabled_features.is_empty());
        assert!(config.disabled_features.is_empty());
        assert_eq!(config.locale, None);
    }

    #[test]
    fn test_missing_credentials_fail_validation() {
        let result = PickerConfig::builder("", "key", "label").build();
        assert!(matches!(result, Err(Error::InvalidArgument(_))));

        let result = PickerConfig::builder("client", "  ", "label").build();
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_empty_view_list_fails_validation() {
        let result = PickerConfig::builder("client", "key", "label")
            .views(Vec::<ViewItem>::new())
            .build();
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_conflicting_features_fail_validation() {
        let result = PickerConfig::builder("client", "key", "label")
            .enable(Feature::NavHidden)
            .disable(Feature::NavHidden)
            .build();
        assert!(matches!(result, Err(Error::InvalidArgument(_))));

        // Aliases share the external value the picker receives
        let result = PickerConfig::builder("client", "key", "label")
            .enable(Feature::Daa)
            .disable(Feature::MultiselectEnabled)
            .build();
        match result {
            Err(Error::InvalidArgument(msg)) => {
                assert!(msg.contains("multiselectEnabled"), "{}", msg);
                assert!(msg.contains("daa"), "{}", msg);
            }
            other => panic!("expected InvalidArgument, got {:?}", other),
        }

        // Distinct values do not conflict
        PickerConfig::builder("client", "key", "label")
            .enable(Feature::NavHidden)
            .disable(Feature::MineOnly)
            .build()
            .unwrap();
    }

    #[test]
    fn test_empty_label_fails_validation() {
        for label in ["", "   "] {
            let result = PickerConfig::builder("client", "key", label).build();
            assert!(matches!(result, Err(Error::InvalidArgument(_))), "{:?}", label);
        }
    }

    #[test]
    fn test_validated_props_reparse_as_valid() {
        let config = PickerConfig::builder("client", "key", "label")
            .enable(Feature::Daa)
            .disable(Feature::NavHidden)
            .build()
            .unwrap();

        let reparsed: PickerConfig = serde_json::from_value(config.to_props().unwrap()).unwrap();
        reparsed.validate().unwrap();
    }

    #[test]
    fn test_props_structure() {
        let office = ViewGroup::new([ViewId::Documents, ViewId::Spreadsheets])
            .unwrap()
            .with_label("Office");
        let config = PickerConfig::builder("client", "key", "Pick")
            .id("google-picker")
            .views([ViewItem::from(ViewId::Pdfs), ViewItem::from(office)])
            .enable(Feature::MultiselectEnabled)
            .locale("de")
            .build()
            .unwrap();

        assert_eq!(
            config.to_props().unwrap(),
            json!({
                "id": "google-picker",
                "label": "Pick",
                "open": false,
                "view_ids": [
                    "pdfs",
                    {"type": "ViewGroup", "views": ["documents", "spreadsheets"], "label": "Office"}
                ],
                "client_id": "client",
                "scope": DEFAULT_SCOPE,
                "developer_key": "key",
                "enabled_features": ["multiselectEnabled"],
                "disabled_features": [],
                "locale": "de"
            })
        );
    }

    #[test]
    fn test_deserialize_single_values_and_names() {
        let config: PickerConfig = serde_json::from_value(json!({
            "label": "Pick",
            "client_id": "client",
            "developer_key": "key",
            "view_ids": "docs-images",
            "enabled_features": "MULTISELECT_ENABLED",
            "disabled_features": ["iaa", "sdr"]
        }))
        .unwrap();

        assert_eq!(config.view_ids, vec![ViewItem::from(ViewId::DocsImages)]);
        assert_eq!(config.enabled_features, vec![Feature::MultiselectEnabled]);
        assert_eq!(
            config.disabled_features,
            vec![Feature::Iaa, Feature::SupportDrives]
        );
        assert_eq!(config.scope, DEFAULT_SCOPE);
    }

    #[test]
    fn test_deprecated_views_are_reported_once() {
        let group = ViewGroup::new([ViewId::Docs, ViewId::Youtube]).unwrap();
        let config = PickerConfig::builder("client", "key", "Pick")
            .views([
                ViewItem::from(ViewId::Maps),
                ViewItem::from(group),
                ViewItem::from(ViewId::Maps),
            ])
            .build()
            .unwrap();

        assert_eq!(config.deprecated_views(), vec![ViewId::Maps, ViewId::Youtube]);
        assert!(minimal().deprecated_views().is_empty());
    }

    #[test]
    fn test_action_round_trip() {
        for raw in ["", "picked", "cancel", "loaded", "error"] {
            assert_eq!(PickerAction::from(raw).as_str(), raw);
        }
        assert_eq!(
            PickerAction::from("error"),
            PickerAction::Other("error".to_string())
        );
    }

    #[test]
    fn test_response_ignores_documents_unless_picked() {
        let payload = json!([{"id": "not a full record"}]);

        let cancelled = PickerResponse::from_props("cancel", Some(&payload)).unwrap();
        assert_eq!(cancelled.action, PickerAction::Cancel);
        assert!(cancelled.documents.is_empty());
        assert!(!cancelled.is_picked());

        let picked = PickerResponse::from_props("picked", Some(&payload));
        assert!(matches!(picked, Err(Error::SchemaMismatch { .. })));
    }

    #[test]
    fn test_response_from_value() {
        let response = PickerResponse::from_value(&json!({"action": "picked", "documents": null}))
            .unwrap();
        assert!(response.is_picked());
        assert!(response.documents.is_empty());

        let initial = PickerResponse::from_value(&json!({})).unwrap();
        assert_eq!(initial.action, PickerAction::None);

        assert!(PickerResponse::from_value(&json!({"action": 3})).is_err());
        assert!(PickerResponse::from_value(&json!([])).is_err());
    }
}
