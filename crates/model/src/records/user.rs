use crate::core::value::Value;
use std::fmt;
use thiserror::Error;

/// A user object exactly as returned by the user-generation API.
pub type RawUser = serde_json::Map<String, serde_json::Value>;

/// Why a field could not be extracted from a [`RawUser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    Missing,
    NotAString(&'static str),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::Missing => f.write_str("field is missing"),
            MalformedReason::NotAString(found) => write!(f, "expected a string, found {found}"),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Malformed record at index {index}: `{field}` {reason}")]
pub struct MalformedRecordError {
    pub index: usize,
    pub field: &'static str,
    pub reason: MalformedReason,
}

/// The four fields the loader keeps from each fetched user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub country: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
}

impl UserRecord {
    pub const COUNTRY: &'static str = "address.country";
    pub const FIRST_NAME: &'static str = "first_name";
    pub const LAST_NAME: &'static str = "last_name";
    pub const GENDER: &'static str = "gender";

    /// Extracts the record from the `index`-th object of an API response.
    pub fn from_raw(index: usize, raw: &RawUser) -> Result<Self, MalformedRecordError> {
        Ok(UserRecord {
            country: required_str(index, raw, Self::COUNTRY)?,
            first_name: required_str(index, raw, Self::FIRST_NAME)?,
            last_name: required_str(index, raw, Self::LAST_NAME)?,
            gender: required_str(index, raw, Self::GENDER)?,
        })
    }

    /// Insert parameters in `(country, name, surname, gender)` order.
    pub fn to_params(&self) -> Vec<Value> {
        vec![
            Value::from(self.country.as_str()),
            Value::from(self.first_name.as_str()),
            Value::from(self.last_name.as_str()),
            Value::from(self.gender.as_str()),
        ]
    }
}

fn lookup<'a>(raw: &'a RawUser, path: &str) -> Option<&'a serde_json::Value> {
    let mut segments = path.split('.');
    let first = raw.get(segments.next()?)?;
    segments.try_fold(first, |current, segment| current.get(segment))
}

fn required_str(
    index: usize,
    raw: &RawUser,
    field: &'static str,
) -> Result<String, MalformedRecordError> {
    let malformed = |reason| MalformedRecordError {
        index,
        field,
        reason,
    };

    match lookup(raw, field) {
        None => Err(malformed(MalformedReason::Missing)),
        Some(serde_json::Value::String(v)) => Ok(v.clone()),
        Some(other) => Err(malformed(MalformedReason::NotAString(json_kind(other)))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawUser {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_extracts_nested_country() {
        let user = raw(json!({
            "id": 3141,
            "address": { "city": "Springfield", "country": "USA" },
            "first_name": "John",
            "last_name": "Doe",
            "gender": "Male",
        }));

        let record = UserRecord::from_raw(0, &user).unwrap();
        assert_eq!(
            record,
            UserRecord {
                country: "USA".into(),
                first_name: "John".into(),
                last_name: "Doe".into(),
                gender: "Male".into(),
            }
        );
    }

    #[test]
    fn test_params_follow_column_order() {
        let user = raw(json!({
            "address": { "country": "USA" },
            "first_name": "John",
            "last_name": "Doe",
            "gender": "Male",
        }));

        let params = UserRecord::from_raw(0, &user).unwrap().to_params();
        assert_eq!(
            params,
            vec![
                Value::from("USA"),
                Value::from("John"),
                Value::from("Doe"),
                Value::from("Male"),
            ]
        );
    }

    #[test]
    fn test_missing_nested_field_names_path_and_index() {
        let user = raw(json!({
            "address": { "city": "Springfield" },
            "first_name": "John",
            "last_name": "Doe",
            "gender": "Male",
        }));

        let err = UserRecord::from_raw(4, &user).unwrap_err();
        assert_eq!(err.index, 4);
        assert_eq!(err.field, "address.country");
        assert_eq!(err.reason, MalformedReason::Missing);
        assert_eq!(
            err.to_string(),
            "Malformed record at index 4: `address.country` field is missing"
        );
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        let user = raw(json!({
            "address": { "country": "USA" },
            "first_name": "John",
            "last_name": null,
            "gender": "Male",
        }));

        let err = UserRecord::from_raw(0, &user).unwrap_err();
        assert_eq!(err.field, "last_name");
        assert_eq!(err.reason, MalformedReason::NotAString("null"));
    }

    #[test]
    fn test_address_must_be_an_object() {
        let user = raw(json!({
            "address": "221B Baker Street",
            "first_name": "John",
            "last_name": "Doe",
            "gender": "Male",
        }));

        let err = UserRecord::from_raw(0, &user).unwrap_err();
        assert_eq!(err.field, "address.country");
        assert_eq!(err.reason, MalformedReason::Missing);
    }
}
