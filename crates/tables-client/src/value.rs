// ABOUTME: Conversion between row cell values and serde_json values
// ABOUTME: Row cells are google.protobuf.Value; JSON is what callers read and write

use std::collections::{BTreeMap, HashMap};

use prost_types::value::Kind;
use prost_types::{ListValue, Struct, Value};
use serde_json::{Map, Number};

use crate::error::ClientError;

/// Convert a JSON value into a protobuf `Value`.
///
/// Numbers become doubles, matching the wire type.
pub fn to_value(json: &serde_json::Value) -> Value {
    let kind = match json {
        serde_json::Value::Null => Kind::NullValue(0),
        serde_json::Value::Bool(b) => Kind::BoolValue(*b),
        serde_json::Value::Number(n) => Kind::NumberValue(n.as_f64().unwrap_or_default()),
        serde_json::Value::String(s) => Kind::StringValue(s.clone()),
        serde_json::Value::Array(items) => Kind::ListValue(ListValue {
            values: items.iter().map(to_value).collect(),
        }),
        serde_json::Value::Object(fields) => Kind::StructValue(Struct {
            fields: fields
                .iter()
                .map(|(k, v)| (k.clone(), to_value(v)))
                .collect::<BTreeMap<_, _>>(),
        }),
    };
    Value { kind: Some(kind) }
}

/// Convert a protobuf `Value` into JSON.
///
/// A value with no kind set maps to `null`. Non-finite numbers have no
/// JSON form and are rejected.
pub fn from_value(value: &Value) -> Result<serde_json::Value, ClientError> {
    Ok(match &value.kind {
        None | Some(Kind::NullValue(_)) => serde_json::Value::Null,
        Some(Kind::BoolValue(b)) => serde_json::Value::Bool(*b),
        Some(Kind::NumberValue(n)) => number(*n)?,
        Some(Kind::StringValue(s)) => serde_json::Value::String(s.clone()),
        Some(Kind::ListValue(list)) => serde_json::Value::Array(
            list.values
                .iter()
                .map(from_value)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Some(Kind::StructValue(s)) => {
            let mut map = Map::new();
            for (k, v) in &s.fields {
                map.insert(k.clone(), from_value(v)?);
            }
            serde_json::Value::Object(map)
        }
    })
}

/// Integral doubles render without a fractional part.
fn number(n: f64) -> Result<serde_json::Value, ClientError> {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return Ok(serde_json::Value::Number(Number::from(n as i64)));
    }
    Number::from_f64(n)
        .map(serde_json::Value::Number)
        .ok_or_else(|| ClientError::InvalidValue(n.to_string()))
}

/// Parse a cell given on the command line. Valid JSON is taken as is;
/// anything else is treated as a plain string.
pub fn parse_cell(input: &str) -> Value {
    match serde_json::from_str::<serde_json::Value>(input) {
        Ok(json) => to_value(&json),
        Err(_) => to_value(&serde_json::Value::String(input.to_string())),
    }
}

/// Build row values from `column=value` assignments.
pub fn values_from_assignments<S: AsRef<str>>(
    assignments: &[S],
) -> Result<HashMap<String, Value>, ClientError> {
    let mut values = HashMap::new();
    for assignment in assignments {
        let assignment = assignment.as_ref();
        let (column, cell) = assignment
            .split_once('=')
            .ok_or_else(|| ClientError::InvalidValue(format!("expected column=value, got '{}'", assignment)))?;
        let column = column.trim();
        if column.is_empty() {
            return Err(ClientError::InvalidValue(format!("missing column in '{}'", assignment)));
        }
        values.insert(column.to_string(), parse_cell(cell));
    }
    Ok(values)
}

/// Build row values from a JSON object keyed by column.
pub fn values_from_json(json: &serde_json::Value) -> Result<HashMap<String, Value>, ClientError> {
    let object = json
        .as_object()
        .ok_or_else(|| ClientError::InvalidValue(format!("expected a JSON object, got {}", json)))?;
    Ok(object
        .iter()
        .map(|(column, cell)| (column.clone(), to_value(cell)))
        .collect())
}

/// Render row values as a JSON object with sorted keys.
pub fn values_to_json(values: &HashMap<String, Value>) -> Result<serde_json::Value, ClientError> {
    let sorted: BTreeMap<&String, &Value> = values.iter().collect();
    let mut map = Map::new();
    for (column, value) in sorted {
        map.insert(column.clone(), from_value(value)?);
    }
    Ok(serde_json::Value::Object(map))
}
