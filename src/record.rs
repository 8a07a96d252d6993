//! Record field lookups
//!
//! Resolves placeholder keys as [`RecordPath`]s into a JSON record, so a
//! request body template such as `{"user": "${.record.user.name}"}` can be
//! filled straight from the record that triggered it.

use crate::error::SubstitutionError;
use crate::lookup::Lookup;
use crate::path::RecordPath;
use serde_json::Value;

/// Field accessor over a JSON record
#[derive(Debug, Clone)]
pub struct JsonPathLookup {
    record: Value,
    strict: bool,
}

impl JsonPathLookup {
    /// Lookup where keys that are not valid paths count as missing
    pub fn new(record: Value) -> Self {
        Self {
            record,
            strict: false,
        }
    }

    /// Lookup where keys that are not valid paths are errors
    pub fn strict(record: Value) -> Self {
        Self {
            record,
            strict: true,
        }
    }

    pub fn record(&self) -> &Value {
        &self.record
    }

    /// Text form of a selected value; `null` has none
    fn render(value: &Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl Lookup for JsonPathLookup {
    type Error = SubstitutionError;

    fn lookup(&self, key: &str) -> Result<Option<String>, SubstitutionError> {
        let path = match RecordPath::parse(key) {
            Ok(path) => path,
            Err(err) if self.strict => return Err(err),
            Err(_) => {
                tracing::trace!(key, "key is not a record path");
                return Ok(None);
            }
        };

        Ok(path.select(&self.record).and_then(Self::render))
    }
}
