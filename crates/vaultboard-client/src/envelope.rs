use serde_json::Value;
use vaultboard_types::MigratedVault;

/// Normalize the migrations endpoint's loosely-shaped body into a flat
/// record list.
///
/// Observed shapes: a bare array, or an object nesting the array under
/// `data`, `vaults` or `result`. As a last resort the object's values are
/// taken as the records. Anything unrecognizable counts as "no vault data
/// available": an empty list, never an error.
pub fn migrated_vaults_from_value(body: Value) -> Vec<MigratedVault> {
    let candidates = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            if let Some(Value::Array(items)) = map.remove("data") {
                items
            } else if let Some(Value::Array(items)) = map.remove("vaults") {
                items
            } else if let Some(Value::Array(items)) = map.remove("result") {
                items
            } else {
                map.into_iter().map(|(_, value)| value).collect()
            }
        }
        other => {
            tracing::warn!(kind = %value_kind(&other), "unrecognized migrations payload");
            return Vec::new();
        }
    };

    let total = candidates.len();
    let records: Vec<MigratedVault> = candidates
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();
    if records.len() < total {
        tracing::warn!(
            dropped = total - records.len(),
            kept = records.len(),
            "dropped malformed migration records"
        );
    }
    records
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
