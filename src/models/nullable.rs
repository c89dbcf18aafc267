use serde::{Deserialize, Deserializer};

/// Reads a JSON list, treating `null` the same as an absent field.
///
/// Pair with `#[serde(default)]` so a missing field is also empty.
pub fn empty_if_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Lists {
        #[serde(default, deserialize_with = "super::empty_if_null")]
        values: Vec<String>,
    }

    #[test]
    fn test_null_absent_and_present() {
        let null: Lists = serde_json::from_str(r#"{"values": null}"#).unwrap();
        let absent: Lists = serde_json::from_str("{}").unwrap();
        let present: Lists = serde_json::from_str(r#"{"values": ["egg"]}"#).unwrap();
        assert!(null.values.is_empty());
        assert!(absent.values.is_empty());
        assert_eq!(present.values, vec!["egg"]);
    }
}
