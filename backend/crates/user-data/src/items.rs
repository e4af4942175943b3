//! JSON codec for item lists stored in a single text column.

use serde_json::Value;

use crate::error::DecodeError;

/// Encode an ordered item list as a JSON array.
///
/// An empty list encodes to `"[]"`, never to a null value.
///
/// # Example
///
/// ```
/// use user_data::encode_items;
///
/// assert_eq!(encode_items(&[]), "[]");
/// assert_eq!(encode_items(&["Lever".to_owned()]), r#"["Lever"]"#);
/// ```
#[must_use]
pub fn encode_items(items: &[String]) -> String {
    Value::Array(items.iter().cloned().map(Value::String).collect()).to_string()
}

/// Decode a stored item list.
///
/// A missing value means the inventory holds nothing and decodes to an empty
/// list.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] when `raw` is present but is not a JSON
/// array whose elements are all strings.
///
/// # Example
///
/// ```
/// use user_data::decode_items;
///
/// assert_eq!(decode_items(None).expect("null decodes"), Vec::<String>::new());
/// assert!(decode_items(Some("not json")).is_err());
/// ```
pub fn decode_items(raw: Option<&str>) -> Result<Vec<String>, DecodeError> {
    match raw {
        None => Ok(Vec::new()),
        Some(text) => {
            serde_json::from_str(text).map_err(|err| DecodeError::malformed(err.to_string()))
        }
    }
}
