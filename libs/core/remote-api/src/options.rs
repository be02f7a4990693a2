/// Decode configuration shared by every repository.
///
/// Built once by the composition root and handed to [`crate::ApiClient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Fold object keys to lowercase before decoding so that `CategoryId`,
    /// `categoryId` and `categoryid` all reach the same field.
    pub case_insensitive: bool,
    /// Envelope fields probed, in order, when a list response is wrapped in
    /// an object. The resource's own collection name is probed after these.
    pub envelope_keys: Vec<String>,
}

impl DecodeOptions {
    pub fn case_sensitive() -> Self {
        Self {
            case_insensitive: false,
            ..Default::default()
        }
    }

    /// Key comparison honouring `case_insensitive`.
    pub fn key_matches(&self, candidate: &str, wanted: &str) -> bool {
        if self.case_insensitive {
            candidate.eq_ignore_ascii_case(wanted)
        } else {
            candidate == wanted
        }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            envelope_keys: vec!["items".to_string(), "data".to_string(), "results".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_is_probed_first() {
        assert_eq!(DecodeOptions::default().envelope_keys[0], "items");
    }

    #[test]
    fn test_key_matching_follows_case_setting() {
        let loose = DecodeOptions::default();
        assert!(loose.key_matches("Items", "items"));

        let strict = DecodeOptions::case_sensitive();
        assert!(!strict.key_matches("Items", "items"));
        assert!(strict.key_matches("items", "items"));
    }
}
