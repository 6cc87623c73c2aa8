//! Text normalisation for incoming payloads
//!
//! Strings are trimmed on the way in and a blank string counts as no
//! value, so `"   "` fails a `required` rule the same way a missing key
//! does. Use with `#[serde(default, deserialize_with = "...")]`.

use serde::{Deserialize, Deserializer};

fn non_blank(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == raw.len() {
        Some(raw)
    } else {
        Some(trimmed.to_string())
    }
}

/// Trimmed text; blank and `null` both become `None`.
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(non_blank))
}

/// Trimmed nullable text for partial updates: a blank string clears the
/// stored value like an explicit `null`.
pub fn deserialize_nullable_text<'de, D>(
    deserializer: D,
) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(
        Option::<String>::deserialize(deserializer)?.and_then(non_blank),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "deserialize_text")]
        name: Option<String>,
        #[serde(default, deserialize_with = "deserialize_nullable_text")]
        note: Option<Option<String>>,
    }

    #[test]
    fn trims_and_drops_blank_text() {
        let form: Form = serde_json::from_str(r#"{"name": "  Ana  ", "note": " hi "}"#).unwrap();
        assert_eq!(form.name.as_deref(), Some("Ana"));
        assert_eq!(form.note, Some(Some("hi".to_string())));

        let blank: Form = serde_json::from_str(r#"{"name": "   ", "note": "  "}"#).unwrap();
        assert_eq!(blank.name, None);
        assert_eq!(blank.note, Some(None));

        let absent: Form = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.name, None);
        assert_eq!(absent.note, None);
    }

    #[test]
    fn non_string_is_an_error() {
        assert!(serde_json::from_str::<Form>(r#"{"name": 5}"#).is_err());
    }
}
