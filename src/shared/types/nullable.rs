//! Tri-state fields for partial updates
//!
//! A nullable column in a PATCH body has three states: absent (leave the
//! stored value alone), `null` (clear it) and a value (replace it).
//! Declare such fields as `Option<Option<T>>` with
//! `#[serde(default, deserialize_with = "deserialize_nullable")]`.

use serde::{Deserialize, Deserializer};

/// Maps a present key to `Some(..)`, keeping `null` as `Some(None)`.
/// Absent keys fall back to `None` through `#[serde(default)]`.
pub fn deserialize_nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Apply a tri-state patch to a stored optional value.
pub fn merge_nullable<T>(patch: Option<Option<T>>, current: Option<T>) -> Option<T> {
    match patch {
        Some(value) => value,
        None => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_nullable")]
        icon: Option<Option<String>>,
    }

    #[test]
    fn distinguishes_absent_null_and_value() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        let null: Patch = serde_json::from_str(r#"{"icon": null}"#).unwrap();
        let value: Patch = serde_json::from_str(r#"{"icon": "heart"}"#).unwrap();

        assert_eq!(absent.icon, None);
        assert_eq!(null.icon, Some(None));
        assert_eq!(value.icon, Some(Some("heart".to_string())));
    }

    #[test]
    fn merge_keeps_current_when_absent() {
        assert_eq!(merge_nullable(None, Some(5)), Some(5));
        assert_eq!(merge_nullable(Some(None), Some(5)), None);
        assert_eq!(merge_nullable(Some(Some(7)), Some(5)), Some(7));
    }
}
