//! Record schema description, loaded once at startup and used for
//! build-time validation of criteria.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::SchemaError;

/// Declared type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Int,
    /// Enumerated value; compared by its textual name.
    Enum,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => write!(f, "text"),
            FieldType::Int => write!(f, "int"),
            FieldType::Enum => write!(f, "enum"),
        }
    }
}

/// Field-name to field-type mapping for the target record shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Serialized as a flat JSON object, e.g. `{"Status": "enum"}`.
    #[serde(flatten)]
    fields: HashMap<String, FieldType>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field declaration, chained-builder style.
    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.insert(name.into(), ty);
        self
    }

    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        self.fields.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Load a schema from a flat JSON object file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(SchemaError::NotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path_ref).map_err(|e| SchemaError::Io {
            path: path_ref.to_path_buf(),
            source: e,
        })?;

        let fields: HashMap<String, FieldType> =
            serde_json::from_str(&content).map_err(|e| SchemaError::Parse {
                path: path_ref.to_path_buf(),
                source: e,
            })?;

        Ok(Schema { fields })
    }
}
