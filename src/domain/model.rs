use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Leading alphanumeric characters of a call sign, at most three.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Prefix(String);

impl Prefix {
    pub const MAX_LEN: usize = 3;

    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Prefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// JSON object returned by the prefix service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupResult {
    pub data: Map<String, Value>,
}

impl LookupResult {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    pub fn country_name(&self) -> Option<&str> {
        self.data.get("countryName").and_then(Value::as_str)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.data)
    }
}

/// Shape of a resolved lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Full(LookupResult),
    Field { field: String, value: Value },
    FieldNotFound { field: String },
}

impl Projection {
    pub fn project(result: LookupResult, field: Option<&str>) -> Self {
        match field.filter(|f| !f.is_empty()) {
            None => Projection::Full(result),
            Some(field) => match result.get(field) {
                Some(value) => Projection::Field {
                    field: field.to_string(),
                    value: value.clone(),
                },
                None => Projection::FieldNotFound {
                    field: field.to_string(),
                },
            },
        }
    }

    pub fn not_found_message(field: &str) -> String {
        format!("{} not found in the response.", field)
    }

    /// Collapses the projection into a plain JSON value; a missing field
    /// becomes its placeholder string.
    pub fn into_value(self) -> Value {
        match self {
            Projection::Full(result) => result.into_value(),
            Projection::Field { value, .. } => value,
            Projection::FieldNotFound { field } => {
                Value::String(Self::not_found_message(&field))
            }
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Projection::Full(result) => {
                let pretty = serde_json::to_string_pretty(&result.data).map_err(|_| fmt::Error)?;
                f.write_str(&pretty)
            }
            Projection::Field {
                value: Value::String(s),
                ..
            } => f.write_str(s),
            Projection::Field { value, .. } => write!(f, "{}", value),
            Projection::FieldNotFound { field } => f.write_str(&Self::not_found_message(field)),
        }
    }
}
