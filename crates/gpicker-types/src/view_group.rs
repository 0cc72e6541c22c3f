use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::catalog::ViewId;
use crate::error::{Error, Result};

/// Value of the `type` tag in a serialized group
pub const VIEW_GROUP_TYPE: &str = "ViewGroup";

/// One element of a [`ViewGroup`]: a view identifier or a nested group
///
/// View identifiers are kept as plain strings; membership in [`ViewId`] is not
/// enforced so the host can pass identifiers this catalog does not know yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ViewItem {
    View(String),
    Group(ViewGroup),
}

impl ViewItem {
    pub fn as_view(&self) -> Option<&str> {
        match self {
            ViewItem::View(view) => Some(view.as_str()),
            ViewItem::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&ViewGroup> {
        match self {
            ViewItem::View(_) => None,
            ViewItem::Group(group) => Some(group),
        }
    }
}

impl fmt::Display for ViewItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewItem::View(view) => f.write_str(view),
            ViewItem::Group(group) => write!(f, "{}", group),
        }
    }
}

impl From<ViewId> for ViewItem {
    fn from(view: ViewId) -> Self {
        ViewItem::View(view.as_str().to_string())
    }
}

impl From<&str> for ViewItem {
    fn from(view: &str) -> Self {
        ViewItem::View(view.to_string())
    }
}

impl From<String> for ViewItem {
    fn from(view: String) -> Self {
        ViewItem::View(view)
    }
}

impl From<ViewGroup> for ViewItem {
    fn from(group: ViewGroup) -> Self {
        ViewItem::Group(group)
    }
}

/// A set of views presented by the picker as a single tab
///
/// The first element is always a view identifier (the root view). Further
/// elements are views or nested groups, in insertion order, duplicates allowed.
/// Removing the root is rejected, so a group can never become empty or rootless.
///
/// Serializes to `{"type": "ViewGroup", "views": [...], "label": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawViewGroup")]
pub struct ViewGroup {
    views: Vec<ViewItem>,
    label: Option<String>,
}

impl ViewGroup {
    /// Group holding only a root view
    pub fn with_root(root: impl Into<ViewItemRoot>) -> Self {
        Self {
            views: vec![ViewItem::View(root.into().0)],
            label: None,
        }
    }

    /// Build a group from `items`. The first item must be a view identifier.
    pub fn new<I, T>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<ViewItem>,
    {
        let views: Vec<ViewItem> = items.into_iter().map(Into::into).collect();
        match views.first() {
            None => return Err(Error::invalid("a ViewGroup needs one view id as root item")),
            Some(ViewItem::Group(_)) => {
                return Err(Error::invalid(
                    "the root item of a ViewGroup must be a view id, not a nested group",
                ));
            }
            Some(ViewItem::View(_)) => {}
        }
        Ok(Self { views, label: None })
    }

    /// Build a group from opaque host values
    ///
    /// Strings become views, objects are parsed as serialized groups. Any other
    /// value, or a root that is not a string, is rejected.
    pub fn from_values(values: &[Value], label: Option<&str>) -> Result<Self> {
        let Some(first) = values.first() else {
            return Err(Error::invalid("a ViewGroup needs one view id as root item"));
        };
        if !first.is_string() {
            return Err(Error::invalid(format!(
                "the root item of a ViewGroup must be a view id string, got {}",
                json_kind(first)
            )));
        }

        let items = values
            .iter()
            .enumerate()
            .map(|(i, value)| match value {
                Value::String(view) => Ok(ViewItem::View(view.clone())),
                Value::Object(_) => serde_json::from_value(value.clone())
                    .map(ViewItem::Group)
                    .map_err(|e| Error::invalid(format!("item #{} is not a ViewGroup: {}", i, e))),
                other => Err(Error::invalid(format!(
                    "item #{} must be a view id or a ViewGroup, got {}",
                    i,
                    json_kind(other)
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        let mut group = Self::new(items)?;
        group.label = label.map(str::to_string);
        Ok(group)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn views(&self) -> &[ViewItem] {
        &self.views
    }

    pub fn root(&self) -> &str {
        match self.views.first() {
            Some(ViewItem::View(view)) => view.as_str(),
            // Construction and `remove` both keep a view in first position
            _ => unreachable!("ViewGroup without a root view"),
        }
    }

    /// Append a view or nested group
    pub fn add(&mut self, item: impl Into<ViewItem>) {
        self.views.push(item.into());
    }

    /// Remove the first element structurally equal to `item` and return it
    pub fn remove(&mut self, item: impl Into<ViewItem>) -> Result<ViewItem> {
        let item = item.into();
        let position = self
            .views
            .iter()
            .position(|existing| *existing == item)
            .ok_or_else(|| Error::NotFound(format!("'{}' is not part of the view group", item)))?;

        if position == 0 {
            return Err(Error::invalid(format!(
                "'{}' is the root view and cannot be removed",
                item
            )));
        }

        Ok(self.views.remove(position))
    }

    /// Every view identifier in the tree, depth-first
    pub fn leaf_views(&self) -> Vec<&str> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a str>) {
        for item in &self.views {
            match item {
                ViewItem::View(view) => leaves.push(view.as_str()),
                ViewItem::Group(group) => group.collect_leaves(leaves),
            }
        }
    }

    /// Nesting depth, 1 for a group without nested groups
    pub fn depth(&self) -> usize {
        1 + self
            .views
            .iter()
            .filter_map(ViewItem::as_group)
            .map(ViewGroup::depth)
            .max()
            .unwrap_or(0)
    }

    /// Plain nested structure handed to the presentation layer
    pub fn to_value(&self) -> Value {
        let views = self
            .views
            .iter()
            .map(|item| match item {
                ViewItem::View(view) => Value::String(view.clone()),
                ViewItem::Group(group) => group.to_value(),
            })
            .collect();

        serde_json::json!({
            "type": VIEW_GROUP_TYPE,
            "views": Value::Array(views),
            "label": self.label,
        })
    }
}

impl fmt::Display for ViewGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "ViewGroup({}: {})", label, self.root()),
            None => write!(f, "ViewGroup({})", self.root()),
        }
    }
}

impl Serialize for ViewGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ViewGroup", 3)?;
        state.serialize_field("type", VIEW_GROUP_TYPE)?;
        state.serialize_field("views", &self.views)?;
        state.serialize_field("label", &self.label)?;
        state.end()
    }
}

/// Root view argument of [`ViewGroup::with_root`]
pub struct ViewItemRoot(String);

impl From<ViewId> for ViewItemRoot {
    fn from(view: ViewId) -> Self {
        Self(view.as_str().to_string())
    }
}

impl From<&str> for ViewItemRoot {
    fn from(view: &str) -> Self {
        Self(view.to_string())
    }
}

impl From<String> for ViewItemRoot {
    fn from(view: String) -> Self {
        Self(view)
    }
}

#[derive(Deserialize)]
struct RawViewGroup {
    #[serde(rename = "type")]
    kind: String,
    views: Vec<ViewItem>,
    #[serde(default)]
    label: Option<String>,
}

impl TryFrom<RawViewGroup> for ViewGroup {
    type Error = Error;

    fn try_from(raw: RawViewGroup) -> Result<Self> {
        if raw.kind != VIEW_GROUP_TYPE {
            return Err(Error::invalid(format!(
                "expected type '{}', got '{}'",
                VIEW_GROUP_TYPE, raw.kind
            )));
        }
        let mut group = Self::new(raw.views)?;
        group.label = raw.label;
        Ok(group)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn office() -> ViewGroup {
        ViewGroup::new([ViewId::Documents, ViewId::Spreadsheets])
            .unwrap()
            .with_label("Office")
    }

    #[test]
    fn test_root_is_first_item() {
        let group = ViewGroup::new(["pdfs", "folders"]).unwrap();
        assert_eq!(group.root(), "pdfs");
        assert_eq!(group.views()[0], ViewItem::View("pdfs".to_string()));
        assert_eq!(group.label(), None);
    }

    #[test]
    fn test_empty_group_is_rejected() {
        let result = ViewGroup::new(Vec::<ViewItem>::new());
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_group_as_root_is_rejected() {
        let nested = ViewGroup::with_root(ViewId::Docs);
        let result = ViewGroup::new([ViewItem::Group(nested), ViewItem::from("pdfs")]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_from_values_rejects_non_string_root() {
        for root in [json!(1), json!(null), json!(true), json!(["all"])] {
            let result = ViewGroup::from_values(&[root, json!("all")], None);
            assert!(matches!(result, Err(Error::InvalidArgument(_))));
        }
        assert!(matches!(
            ViewGroup::from_values(&[], Some("Empty")),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_from_values_accepts_nested_groups() {
        let nested = json!({"type": "ViewGroup", "views": ["docs-images"], "label": null});
        let group = ViewGroup::from_values(&[json!("all"), nested], Some("Drive")).unwrap();

        assert_eq!(group.label(), Some("Drive"));
        assert_eq!(group.leaf_views(), vec!["all", "docs-images"]);
        assert_eq!(group.depth(), 2);
    }

    #[test]
    fn test_from_values_rejects_numbers_after_root() {
        let result = ViewGroup::from_values(&[json!("all"), json!(42)], None);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_add_then_remove_restores_sequence() {
        let mut group = office();
        let before = group.clone();

        group.add(ViewId::Pdfs);
        assert_eq!(group.views().len(), 3);

        let removed = group.remove(ViewId::Pdfs).unwrap();
        assert_eq!(removed, ViewItem::from("pdfs"));
        assert_eq!(group, before);
    }

    #[test]
    fn test_add_allows_duplicates() {
        let mut group = office();
        group.add("spreadsheets");
        group.add("spreadsheets");
        assert_eq!(
            group.leaf_views(),
            vec!["documents", "spreadsheets", "spreadsheets", "spreadsheets"]
        );

        group.remove("spreadsheets").unwrap();
        assert_eq!(group.leaf_views().len(), 3);
    }

    #[test]
    fn test_remove_missing_item_leaves_group_unchanged() {
        let mut group = office();
        let before = group.clone();

        let result = group.remove(ViewId::Forms);
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert_eq!(group, before);
    }

    #[test]
    fn test_remove_root_is_rejected() {
        let mut group = office();
        let before = group.clone();

        let result = group.remove(ViewId::Documents);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert_eq!(group, before);
        assert_eq!(group.root(), "documents");
    }

    #[test]
    fn test_remove_nested_group_by_structure() {
        let mut group = office();
        group.add(ViewGroup::with_root(ViewId::Pdfs).with_label("PDF"));

        let result = group.remove(ViewGroup::with_root(ViewId::Pdfs));
        assert!(matches!(result, Err(Error::NotFound(_))));

        group
            .remove(ViewGroup::with_root(ViewId::Pdfs).with_label("PDF"))
            .unwrap();
        assert_eq!(group, office());
    }

    #[test]
    fn test_serialize_office_group() {
        let json = serde_json::to_string(&office()).unwrap();
        assert_eq!(
            json,
            r#"{"type":"ViewGroup","views":["documents","spreadsheets"],"label":"Office"}"#
        );
    }

    #[test]
    fn test_serialize_is_stable() {
        let group = office();
        assert_eq!(group.to_value(), group.to_value());
        assert_eq!(serde_json::to_value(&group).unwrap(), group.to_value());
    }

    #[test]
    fn test_nested_group_snapshot() {
        let mut group = ViewGroup::with_root(ViewId::Docs).with_label("Drive");
        group.add(ViewGroup::new([ViewId::DocsImages, ViewId::DocsVideos]).unwrap());

        insta::assert_json_snapshot!(group, @r#"
        {
          "type": "ViewGroup",
          "views": [
            "all",
            {
              "type": "ViewGroup",
              "views": [
                "docs-images",
                "docs-videos"
              ],
              "label": null
            }
          ],
          "label": "Drive"
        }
        "#);
    }

    #[test]
    fn test_deserialize_round_trip() {
        let mut group = office();
        group.add(ViewGroup::with_root("forms"));

        let json = serde_json::to_string(&group).unwrap();
        let parsed: ViewGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, group);
    }

    #[test]
    fn test_deserialize_validates_root_and_tag() {
        assert!(
            serde_json::from_str::<ViewGroup>(r#"{"type":"ViewGroup","views":[]}"#).is_err()
        );
        assert!(
            serde_json::from_str::<ViewGroup>(r#"{"type":"DocsView","views":["all"]}"#).is_err()
        );

        let parsed: ViewGroup =
            serde_json::from_str(r#"{"type":"ViewGroup","views":["all"]}"#).unwrap();
        assert_eq!(parsed, ViewGroup::with_root(ViewId::Docs));
    }
}
