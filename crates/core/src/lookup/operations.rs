use serde_json::{Number, Value};

use super::requests::SchemaValidateResponse;

/// Outcome of comparing a message body against a stored exemplar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaCheck {
    /// Both documents parse to the same JSON value.
    Match,
    /// The body parses but differs from the exemplar.
    Mismatch,
    /// The body is not JSON.
    InvalidBody(String),
}

/// Compares a message body against the stored exemplar for deep equality.
///
/// Both sides are parsed as untyped JSON, so key order and whitespace do not
/// matter, and numbers compare by value (`1` equals `1.0`). This is not JSON
/// Schema validation: the exemplar is a document,
/// not a schema definition.
///
/// Returns `Err` only when the stored exemplar itself is not valid JSON.
pub fn compare_to_exemplar(exemplar: &str, body: &str) -> Result<SchemaCheck, serde_json::Error> {
    let expected: Value = serde_json::from_str(exemplar)?;

    let actual: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => return Ok(SchemaCheck::InvalidBody(e.to_string())),
    };

    if values_equal(&expected, &actual) {
        Ok(SchemaCheck::Match)
    } else {
        Ok(SchemaCheck::Mismatch)
    }
}

/// Structural equality where numbers compare numerically.
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| values_equal(x, y)))
        }
        _ => a == b,
    }
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a == b;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

impl SchemaCheck {
    pub fn is_match(&self) -> bool {
        matches!(self, SchemaCheck::Match)
    }

    /// Renders the outcome as the `{result, errormsg}` response body.
    pub fn into_response(self, metaid: &str) -> SchemaValidateResponse {
        let errormsg = match self {
            SchemaCheck::Match => String::new(),
            SchemaCheck::Mismatch => format!("message body does not match schema {metaid}"),
            SchemaCheck::InvalidBody(reason) => format!("invalid message body: {reason}"),
        };

        SchemaValidateResponse {
            result: errormsg.is_empty(),
            errormsg,
        }
    }
}
