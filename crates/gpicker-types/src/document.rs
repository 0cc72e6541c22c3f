use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::Deref;

use crate::error::{Error, Result};

/// Field names of a picker document record, in schema order
pub const DOCUMENT_FIELDS: [&str; 12] = [
    "id",
    "serviceId",
    "mimeType",
    "name",
    "description",
    "type",
    "lastEditedUtc",
    "iconUrl",
    "url",
    "embedUrl",
    "sizeBytes",
    "isShared",
];

const RECORD: &str = "(record)";

/// One file selected through the picker
///
/// Built from a raw record by [`GoogleDocument::from_record`], which checks
/// that exactly the twelve schema fields are present with the expected types.
/// Serializes back with the picker's camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GoogleDocument {
    id: String,
    service_id: String,
    mime_type: String,
    name: String,
    description: String,
    #[serde(rename = "type")]
    kind: String,
    last_edited_utc: i64,
    icon_url: String,
    url: String,
    embed_url: String,
    size_bytes: u64,
    is_shared: bool,
}

impl GoogleDocument {
    /// Bind one raw record. `index` is the record's position, used in errors.
    pub fn from_record(index: usize, record: &Map<String, Value>) -> Result<Self> {
        if let Some(unknown) = record
            .keys()
            .find(|key| !DOCUMENT_FIELDS.contains(&key.as_str()))
        {
            return Err(Error::schema(index, unknown.as_str(), "unexpected field"));
        }

        let fields = RecordFields { index, record };
        Ok(Self {
            id: fields.string("id")?,
            service_id: fields.string("serviceId")?,
            mime_type: fields.string("mimeType")?,
            name: fields.string("name")?,
            description: fields.string("description")?,
            kind: fields.string("type")?,
            last_edited_utc: fields.integer("lastEditedUtc")?,
            icon_url: fields.string("iconUrl")?,
            url: fields.string("url")?,
            embed_url: fields.string("embedUrl")?,
            size_bytes: fields.unsigned("sizeBytes")?,
            is_shared: fields.boolean("isShared")?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The picker's `type` field (`"document"`, `"photo"`, `"pdf"`, ...)
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Last edit time as reported by the picker (epoch based)
    pub fn last_edited_utc(&self) -> i64 {
        self.last_edited_utc
    }

    pub fn icon_url(&self) -> &str {
        &self.icon_url
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn embed_url(&self) -> &str {
        &self.embed_url
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn is_shared(&self) -> bool {
        self.is_shared
    }
}

struct RecordFields<'a> {
    index: usize,
    record: &'a Map<String, Value>,
}

impl RecordFields<'_> {
    fn get(&self, field: &str) -> Result<&Value> {
        self.record
            .get(field)
            .ok_or_else(|| Error::schema(self.index, field, "missing field"))
    }

    fn mismatch(&self, field: &str, expected: &str, found: &Value) -> Error {
        Error::schema(
            self.index,
            field,
            format!("expected {}, found {}", expected, found),
        )
    }

    fn string(&self, field: &str) -> Result<String> {
        match self.get(field)? {
            Value::String(s) => Ok(s.clone()),
            other => Err(self.mismatch(field, "a string", other)),
        }
    }

    fn integer(&self, field: &str) -> Result<i64> {
        let value = self.get(field)?;
        value
            .as_i64()
            .ok_or_else(|| self.mismatch(field, "an integer", value))
    }

    fn unsigned(&self, field: &str) -> Result<u64> {
        let value = self.get(field)?;
        value
            .as_u64()
            .ok_or_else(|| self.mismatch(field, "a non-negative integer", value))
    }

    fn boolean(&self, field: &str) -> Result<bool> {
        let value = self.get(field)?;
        value
            .as_bool()
            .ok_or_else(|| self.mismatch(field, "a boolean", value))
    }
}

/// Ordered documents mapped from a picker selection payload
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoogleDocuments(Vec<GoogleDocument>);

impl GoogleDocuments {
    /// Map every record into a [`GoogleDocument`], preserving order
    ///
    /// An absent payload yields an empty list. The first record that does not
    /// match the schema aborts the mapping with [`Error::SchemaMismatch`].
    pub fn map_all(records: Option<&[Value]>) -> Result<Self> {
        let Some(records) = records else {
            return Ok(Self::default());
        };

        records
            .iter()
            .enumerate()
            .map(|(index, record)| match record {
                Value::Object(map) => GoogleDocument::from_record(index, map),
                other => Err(Error::schema(
                    index,
                    RECORD,
                    format!("expected an object, found {}", other),
                )),
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Map a payload given as one JSON value: `null` or an array of records
    pub fn from_value(payload: &Value) -> Result<Self> {
        match payload {
            Value::Null => Ok(Self::default()),
            Value::Array(records) => Self::map_all(Some(records)),
            other => Err(Error::invalid(format!(
                "documents payload must be null or an array, found {}",
                other
            ))),
        }
    }

    pub fn from_json_str(payload: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(payload)?;
        Self::from_value(&value)
    }

    /// Pass records through without binding them to the schema
    ///
    /// Weaker than [`GoogleDocuments::map_all`]: only checks that each record is
    /// an object. Unknown, missing, or mistyped fields are carried as-is.
    pub fn map_all_lenient(records: Option<&[Value]>) -> Result<Vec<Map<String, Value>>> {
        let Some(records) = records else {
            return Ok(Vec::new());
        };

        records
            .iter()
            .enumerate()
            .map(|(index, record)| match record {
                Value::Object(map) => Ok(map.clone()),
                other => Err(Error::schema(
                    index,
                    RECORD,
                    format!("expected an object, found {}", other),
                )),
            })
            .collect()
    }

    pub fn into_inner(self) -> Vec<GoogleDocument> {
        self.0
    }

    /// Sum of `sizeBytes` over all documents, saturating at `u64::MAX`
    pub fn total_size_bytes(&self) -> u64 {
        self.0
            .iter()
            .map(GoogleDocument::size_bytes)
            .fold(0, u64::saturating_add)
    }
}

impl Deref for GoogleDocuments {
    type Target = [GoogleDocument];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for GoogleDocuments {
    type Item = GoogleDocument;
    type IntoIter = std::vec::IntoIter<GoogleDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a GoogleDocuments {
    type Item = &'a GoogleDocument;
    type IntoIter = std::slice::Iter<'a, GoogleDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<GoogleDocuments> for Vec<GoogleDocument> {
    fn from(documents: GoogleDocuments) -> Self {
        documents.0
    }
}
