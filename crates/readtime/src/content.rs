use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConversionFailure, Error, Result};

mod text;

/// Anything exposing an ordered set of fields: a document or a repeater block.
pub trait FieldLayout {
    fn fields(&self) -> &[Field];
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl FieldLayout for ContentDocument {
    fn fields(&self) -> &[Field] {
        &self.fields
    }
}

/// One entry of a repeater field. Owns its own layout, independent of the
/// layout of the document it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub block_type: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl FieldLayout for Block {
    fn fields(&self) -> &[Field] {
        &self.fields
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub handle: String,
    pub value: FieldValue,
}

impl Field {
    pub fn new(handle: impl Into<String>, value: FieldValue) -> Self {
        Self {
            handle: handle.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    /// HTML produced by a rich text editor.
    RichText(String),
    Markdown(String),
    Number(f64),
    Date(DateTime<Utc>),
    Tags(Vec<String>),
    Empty,
    /// A field type with no text form, e.g. asset or entry relations.
    Unsupported(String),
    Repeater(Vec<Block>),
}

impl FieldValue {
    /// Text whose words are counted for this value.
    pub fn to_text(&self) -> std::result::Result<String, ConversionFailure> {
        match self {
            FieldValue::Text(text) => Ok(text.clone()),
            FieldValue::RichText(html) => Ok(text::strip_markup(html)),
            FieldValue::Markdown(markdown) => Ok(text::markdown_to_text(markdown)),
            FieldValue::Number(number) => Ok(number.to_string()),
            FieldValue::Date(date) => Ok(date.format("%Y-%m-%d %H:%M:%S").to_string()),
            FieldValue::Tags(tags) => Ok(tags.join(", ")),
            FieldValue::Empty => Ok(String::new()),
            FieldValue::Unsupported(kind) => Err(ConversionFailure::Unsupported(kind.clone())),
            FieldValue::Repeater(_) => Err(ConversionFailure::NotText),
        }
    }
}

/// Everything a read time can be computed for.
#[derive(Debug, Clone, PartialEq)]
pub enum ReadTimeInput {
    Document(ContentDocument),
    Blocks(Vec<Block>),
    Value(FieldValue),
}

impl ReadTimeInput {
    /// Decodes untyped JSON. Objects with a `fields` key are documents, arrays
    /// are block lists, strings, numbers and null are plain values, and any
    /// other object must be an encoded [`FieldValue`]. Every other shape is
    /// rejected with [`Error::InvalidInputKind`].
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) if map.contains_key("fields") => {
                Ok(Self::Document(serde_json::from_value(Value::Object(map))?))
            }
            Value::Object(map) => match serde_json::from_value::<FieldValue>(Value::Object(map)) {
                Ok(field_value) => Ok(Self::Value(field_value)),
                Err(error) => Err(Error::InvalidInputKind(format!(
                    "object is neither a document nor a field value ({error})"
                ))),
            },
            Value::Array(items) => {
                let mut blocks = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    if !item.get("fields").map_or(false, Value::is_array) {
                        return Err(Error::InvalidInputKind(format!(
                            "array item {index} is not a block"
                        )));
                    }

                    blocks.push(serde_json::from_value(item)?);
                }

                Ok(Self::Blocks(blocks))
            }
            Value::String(text) => Ok(Self::Value(FieldValue::Text(text))),
            Value::Number(number) => match number.as_f64() {
                Some(number) => Ok(Self::Value(FieldValue::Number(number))),
                None => Err(Error::InvalidInputKind(format!(
                    "number {number} is out of range"
                ))),
            },
            Value::Null => Ok(Self::Value(FieldValue::Empty)),
            Value::Bool(_) => Err(Error::InvalidInputKind("boolean".to_owned())),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json(serde_json::from_str(json)?)
    }
}
