//! Field presence rules and the reusable gate value.
//!
//! # Responsibilities
//! - Hold the configured field list and data source (immutable after construction)
//! - Decide per field whether a value counts as missing
//! - Produce the ordered list of missing fields for one request
//!
//! # Design Decisions
//! - The missing check is an explicit, enumerated rule set, not implicit
//!   truthiness: absent key | null | blank-after-trim | `false` | numeric zero
//! - Numeric zero and `false` count as missing; clients that need a literal
//!   `0` to pass must send it as a string
//! - The result preserves the configured field order (stable filter, never
//!   sorted); duplicate names report once per occurrence
//! - Pure and synchronous: no I/O, no locks, no state between requests

use serde_json::Value;

use crate::validation::source::DataSource;

/// Request data extracted from one source, keyed by field name.
///
/// Values are JSON-shaped; query and path parameters surface as strings.
pub type FieldMap = serde_json::Map<String, Value>;

/// Outcome of checking one request against a [`RequiredFields`] gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Every configured field is present and non-blank.
    Valid,
    /// At least one field is missing; names are in configured order.
    Invalid { missing_fields: Vec<String> },
}

impl ValidationResult {
    /// Returns true when the request may proceed.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

/// A reusable field-presence gate.
///
/// Constructed once with the fields to require and the request part to
/// inspect; immutable afterwards. Checking is pure, so one gate value can
/// serve any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct RequiredFields {
    fields: Vec<String>,
    source: DataSource,
}

impl RequiredFields {
    /// Create a gate that inspects the request body.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_source(fields, DataSource::Body)
    }

    /// Create a gate that inspects the given request part.
    pub fn with_source<I, S>(fields: I, source: DataSource) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            source,
        }
    }

    /// The configured field names, in reporting order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The request part this gate inspects.
    pub fn source(&self) -> DataSource {
        self.source
    }

    /// Check one request's extracted data against the configured fields.
    ///
    /// An empty field list always passes. An empty map (absent container)
    /// reports every configured field as missing.
    pub fn check(&self, data: &FieldMap) -> ValidationResult {
        let missing_fields: Vec<String> = self
            .fields
            .iter()
            .filter(|name| is_missing(data.get(name.as_str())))
            .cloned()
            .collect();

        if missing_fields.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid { missing_fields }
        }
    }
}

/// The enumerated missing rules.
///
/// Arrays and objects are never missing, whatever their contents.
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f == 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}
