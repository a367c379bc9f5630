//! HR identity resolution from the stored user record.
//!
//! Different login flows persist the HR identifier under different fields, so
//! resolution is an ordered chain of extractors; the first hit wins.

use serde_json::Value;

/// Field locations checked for the HR identifier, in priority order.
const HR_ID_FIELDS: [&str; 5] = ["userId", "companyId", "id", "hrId", "employeeId"];

/// Resolve the HR identifier from a stored user record.
///
/// Accepts string or integer values; empty strings and non-scalar values are
/// skipped so a null or object under a higher-priority field does not mask a
/// usable id further down the chain.
pub fn resolve_hr_id(user: &Value) -> Option<String> {
    HR_ID_FIELDS
        .iter()
        .filter_map(|field| scalar_id(user.get(field)?))
        .next()
}

fn scalar_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
