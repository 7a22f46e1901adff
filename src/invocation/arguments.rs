//! Parameter schemas and argument validation
//!
//! The adapter validates the raw argument map from the runtime against the
//! tool's declared schema before dispatch: missing required parameters and
//! uncoercible values are caller errors, reported as invalid-argument
//! failures rather than reaching the tool at all.

use serde_json::{Map, Value};

use crate::error::ToolError;

/// Value kinds a tool parameter can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Any string
    String,
    /// A number, accepted as a JSON number or a numeric string
    Number,
    /// A comma-separated list of numbers ("1, 2, 3.5"), coerced to an array
    NumberList,
}

/// One declared parameter of a tool
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// Parameter name
    pub name: &'static str,
    /// Expected value kind
    pub kind: ParamKind,
    /// Whether the caller must supply it
    pub required: bool,
    /// Description shown to the agent
    pub description: &'static str,
}

impl ParamSpec {
    /// A required parameter
    pub const fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            description,
        }
    }

    /// An optional parameter
    pub const fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            description,
        }
    }
}

/// Validated, coerced arguments handed to a tool
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    values: Map<String, Value>,
}

impl Arguments {
    /// Wrap an already-validated argument map (used by tests)
    pub fn from_map(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Get a string argument
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|v| v.as_str())
    }

    /// Get a required string argument
    pub fn required_str(&self, name: &str) -> Result<&str, ToolError> {
        self.get_str(name)
            .ok_or_else(|| ToolError::invalid_argument(format!("missing argument '{}'", name)))
    }

    /// Get a number argument
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.values.get(name).and_then(|v| v.as_f64())
    }

    /// Get a coerced number-list argument
    pub fn get_numbers(&self, name: &str) -> Option<Vec<f64>> {
        let array = self.values.get(name)?.as_array()?;
        array.iter().map(|v| v.as_f64()).collect()
    }

    /// Get a required number-list argument
    pub fn required_numbers(&self, name: &str) -> Result<Vec<f64>, ToolError> {
        self.get_numbers(name)
            .ok_or_else(|| ToolError::invalid_argument(format!("missing argument '{}'", name)))
    }
}

/// Validate a raw argument map against a schema, coercing scalars
///
/// Unknown arguments are dropped with a debug log line; they are a caller
/// quirk, not an error. Missing required arguments and uncoercible values
/// fail with [`ToolError::InvalidArgument`].
pub fn validate_arguments(
    schema: &[ParamSpec],
    raw: &Map<String, Value>,
) -> Result<Arguments, ToolError> {
    let mut values = Map::new();

    for spec in schema {
        let value = match raw.get(spec.name) {
            Some(v) if !v.is_null() => v,
            _ if spec.required => {
                return Err(ToolError::invalid_argument(format!(
                    "missing required argument '{}'",
                    spec.name
                )));
            }
            _ => continue,
        };

        let coerced = coerce(spec, value)?;
        values.insert(spec.name.to_string(), coerced);
    }

    for name in raw.keys() {
        if !schema.iter().any(|spec| spec.name == name) {
            tracing::debug!("Dropping undeclared argument '{}'", name);
        }
    }

    Ok(Arguments { values })
}

fn coerce(spec: &ParamSpec, value: &Value) -> Result<Value, ToolError> {
    match spec.kind {
        ParamKind::String => match value {
            Value::String(_) => Ok(value.clone()),
            Value::Number(n) => Ok(Value::String(n.to_string())),
            other => Err(ToolError::invalid_argument(format!(
                "argument '{}' must be a string, got {}",
                spec.name, other
            ))),
        },
        ParamKind::Number => match value {
            Value::Number(_) => Ok(value.clone()),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| {
                    ToolError::invalid_argument(format!(
                        "argument '{}' is not a number: '{}'",
                        spec.name, s
                    ))
                }),
            other => Err(ToolError::invalid_argument(format!(
                "argument '{}' must be a number, got {}",
                spec.name, other
            ))),
        },
        ParamKind::NumberList => match value {
            Value::String(s) => parse_number_list(spec.name, s),
            Value::Array(items) => {
                if items.iter().all(|v| v.is_number()) {
                    Ok(value.clone())
                } else {
                    Err(ToolError::invalid_argument(format!(
                        "argument '{}' must contain only numbers",
                        spec.name
                    )))
                }
            }
            other => Err(ToolError::invalid_argument(format!(
                "argument '{}' must be a number list, got {}",
                spec.name, other
            ))),
        },
    }
}

/// Parse a comma-separated numeric list like "1, 2, 3.5"
fn parse_number_list(name: &str, input: &str) -> Result<Value, ToolError> {
    let mut numbers = Vec::new();
    for part in input.split(',') {
        let trimmed = part.trim();
        let parsed: f64 = trimmed.parse().map_err(|_| {
            ToolError::invalid_argument(format!(
                "argument '{}' contains a non-numeric entry: '{}'",
                name, trimmed
            ))
        })?;
        let number = serde_json::Number::from_f64(parsed).ok_or_else(|| {
            ToolError::invalid_argument(format!(
                "argument '{}' contains a non-finite entry: '{}'",
                name, trimmed
            ))
        })?;
        numbers.push(Value::Number(number));
    }
    Ok(Value::Array(numbers))
}
