//! Firestore REST wire format for a `documents.list` response.
//!
//! Every field value arrives wrapped in a type tag (`{"stringValue": "..."}`,
//! `{"integerValue": "42"}`, ...). [`FieldValue`] decodes that tag once so the
//! rest of the crate never touches the wire shape.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::CatalogError;

/// A single typed field value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "TaggedValue")]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Double(f64),
    Boolean(bool),
    /// Null, timestamps, maps, arrays or anything else this catalog ignores.
    Other,
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Decimal reading; whole-number prices stored as integers count too.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Double(d) => Some(*d),
            FieldValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// Raw tagged object. Unknown tags are ignored by serde and fall through to
/// [`FieldValue::Other`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaggedValue {
    string_value: Option<String>,
    integer_value: Option<IntegerRepr>,
    double_value: Option<f64>,
    boolean_value: Option<bool>,
}

/// int64 values are sent as decimal strings, but accept bare numbers as well.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerRepr {
    Number(i64),
    Text(String),
}

impl From<TaggedValue> for FieldValue {
    fn from(raw: TaggedValue) -> Self {
        if let Some(s) = raw.string_value {
            return FieldValue::String(s);
        }
        if let Some(n) = raw.integer_value {
            return match n {
                IntegerRepr::Number(n) => FieldValue::Integer(n),
                IntegerRepr::Text(s) => s
                    .trim()
                    .parse()
                    .map(FieldValue::Integer)
                    .unwrap_or(FieldValue::Other),
            };
        }
        if let Some(d) = raw.double_value {
            return FieldValue::Double(d);
        }
        if let Some(b) = raw.boolean_value {
            return FieldValue::Boolean(b);
        }
        FieldValue::Other
    }
}

/// One document of the collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    /// Full resource name, e.g. `projects/p/databases/(default)/documents/inventoryDetails/abc`.
    pub name: String,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl Document {
    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Document id: the final segment of the resource name.
    pub fn id(&self) -> &str {
        document_id(&self.name)
    }
}

/// Last `/`-separated segment of a resource name.
pub fn document_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}

/// Body of a successful list call. `documents` is omitted entirely when the
/// collection is empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    pub next_page_token: Option<String>,
}

/// Body of a failed call.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorStatus,
}

#[derive(Debug, Deserialize)]
pub struct ErrorStatus {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Turn an HTTP status and body text into the document list, or the error the
/// store reported.
pub fn parse_list_response(status: u16, body: &str) -> Result<Vec<Document>, CatalogError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.trim().to_string());
        return Err(CatalogError::Http { status, message });
    }

    let list: ListDocumentsResponse = serde_json::from_str(body)?;
    if list.next_page_token.is_some() {
        tracing::debug!("Document list is truncated; only the first batch is shown");
    }
    Ok(list.documents)
}
