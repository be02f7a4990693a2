//! Field-level deserializers for loosely typed remote payloads.

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing field.
///
/// Pair with `#[serde(default)]` so absent and null both yield `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Named {
        #[serde(default, deserialize_with = "crate::fields::null_as_default")]
        name: String,
    }

    #[test]
    fn test_null_and_missing_become_default() {
        let named: Named = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(named.name, "");
        let named: Named = serde_json::from_str("{}").unwrap();
        assert_eq!(named.name, "");
        let named: Named = serde_json::from_str(r#"{"name":"Music"}"#).unwrap();
        assert_eq!(named.name, "Music");
    }
}
