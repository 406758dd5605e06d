//! Data produced by static analysis of a content configuration module.

use std::fmt;

use serde::Serialize;

/// Descriptor of a `glob({ pattern, base })` loader.
///
/// Values that could not be resolved statically are left as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GlobLoader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
}

/// Descriptor of a `file(path)` loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileLoader {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// How the raw items of a collection are located.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LoaderConfig {
    Glob(GlobLoader),
    File(FileLoader),
}

/// Base kind of a schema field.
///
/// `Unknown` is an ordinary value: it marks a builder expression whose shape
/// is outside the recognized vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
    Image,
    Array,
    Object,
    Unknown,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Image => "image",
            FieldType::Array => "array",
            FieldType::Object => "object",
            FieldType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One leaf of a collection's flattened schema.
///
/// `field_name` is a dotted path (`image.alt`) for leaves that were nested
/// inside object fields. Object-typed fields never appear as leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField {
    pub field_name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub is_optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array_element_type: Option<FieldType>,
}

impl SchemaField {
    pub fn new(field_name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            field_name: field_name.into(),
            field_type,
            is_optional: false,
            array_element_type: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    pub fn of(mut self, element: FieldType) -> Self {
        self.array_element_type = Some(element);
        self
    }

    /// True for leaves that came from inside an object field.
    pub fn is_nested(&self) -> bool {
        self.field_name.contains('.')
    }
}

/// A collection discovered in the configuration module.
///
/// `loader` is `None` when the loader call is missing or not one of the
/// recognized loader functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDefinition {
    pub name: String,
    pub loader: Option<LoaderConfig>,
    pub has_schema: bool,
    pub fields: Vec<SchemaField>,
}

impl CollectionDefinition {
    /// Copy of this definition published under another name.
    pub fn exported_as(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }

    pub fn glob_loader(&self) -> Option<&GlobLoader> {
        match &self.loader {
            Some(LoaderConfig::Glob(glob)) => Some(glob),
            _ => None,
        }
    }

    /// Dotted paths of `date` leaves.
    pub fn date_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|field| field.field_type == FieldType::Date)
            .map(|field| field.field_name.as_str())
            .collect()
    }

    /// Dotted paths of leaves that were nested inside object fields.
    pub fn nested_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|field| field.is_nested())
            .map(|field| field.field_name.as_str())
            .collect()
    }
}
