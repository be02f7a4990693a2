//! Response decoding for the remote API.
//!
//! List endpoints are not consistent about the shape of their bodies, so a
//! list response runs through a fixed chain of strategies and the first one
//! that decodes wins:
//!
//! 1. [`Strategy::Envelope`]: an object whose envelope field (`items`, then
//!    the other configured keys, then the collection name) holds the sequence
//! 2. [`Strategy::Array`]: a bare JSON array
//! 3. [`Strategy::Single`]: one entity, returned as a one-element list
//!
//! A present, non-null envelope field that fails to decode ends the chain.
//!
//! Everything here is pure: no I/O, no logging. Callers report the outcome
//! through [`crate::DecodeObserver`].

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::options::DecodeOptions;

/// One step of the list decoding chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Envelope,
    Array,
    Single,
}

/// Strategies in the order they are attempted.
pub const STRATEGY_CHAIN: [Strategy; 3] = [Strategy::Envelope, Strategy::Array, Strategy::Single];

/// Page metadata carried next to the items of a paginated wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
    pub total_count: Option<u64>,
    pub total_pages: Option<u64>,
}

/// A decoded paginated wrapper.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Envelope field the items were found under, as it appeared in the body
    pub envelope: String,
    pub items: Vec<T>,
    pub info: PageInfo,
}

/// Outcome of decoding a list response.
#[derive(Debug, Clone, PartialEq)]
pub enum ListShape<T> {
    Paginated(Page<T>),
    Array(Vec<T>),
    Single(T),
    /// Empty or whitespace-only body
    Empty,
    /// No strategy matched; `reason` collects why each one failed
    Unrecognized { reason: String },
}

/// Shape tag without the payload, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Paginated,
    Array,
    Single,
    Empty,
    Unrecognized,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Paginated => "paginated",
            ShapeKind::Array => "array",
            ShapeKind::Single => "single",
            ShapeKind::Empty => "empty",
            ShapeKind::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T> ListShape<T> {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ListShape::Paginated(_) => ShapeKind::Paginated,
            ListShape::Array(_) => ShapeKind::Array,
            ListShape::Single(_) => ShapeKind::Single,
            ListShape::Empty => ShapeKind::Empty,
            ListShape::Unrecognized { .. } => ShapeKind::Unrecognized,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ListShape::Paginated(page) => page.items.len(),
            ListShape::Array(items) => items.len(),
            ListShape::Single(_) => 1,
            ListShape::Empty | ListShape::Unrecognized { .. } => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten to the entity sequence. Unrecognized and empty bodies yield `[]`.
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListShape::Paginated(page) => page.items,
            ListShape::Array(items) => items,
            ListShape::Single(item) => vec![item],
            ListShape::Empty | ListShape::Unrecognized { .. } => Vec::new(),
        }
    }
}

/// Parse a body into a JSON value with keys folded per `options`.
pub fn parse_value(body: &str, options: &DecodeOptions) -> Result<Value, serde_json::Error> {
    let value: Value = serde_json::from_str(body)?;
    Ok(if options.case_insensitive {
        fold_keys(value)
    } else {
        value
    })
}

/// Lowercase every object key, recursively.
pub fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), fold_keys(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

/// Decode a single entity body.
pub fn decode_one<T: DeserializeOwned>(
    body: &str,
    options: &DecodeOptions,
) -> Result<T, serde_json::Error> {
    let value = parse_value(body, options)?;
    T::deserialize(&value)
}

/// Run the list strategy chain over a response body.
///
/// `collection_key` is the resource's own plural (e.g. `events`) and is
/// probed as an envelope field after the configured keys.
pub fn decode_list<T: DeserializeOwned>(
    body: &str,
    options: &DecodeOptions,
    collection_key: Option<&str>,
) -> ListShape<T> {
    if body.trim().is_empty() {
        return ListShape::Empty;
    }

    let value = match parse_value(body, options) {
        Ok(value) => value,
        Err(e) => {
            return ListShape::Unrecognized {
                reason: format!("body is not JSON: {}", e),
            };
        }
    };

    let mut failures = Vec::with_capacity(STRATEGY_CHAIN.len());
    for strategy in STRATEGY_CHAIN {
        match attempt(strategy, &value, options, collection_key) {
            Ok(shape) => return shape,
            Err(Miss::Next(reason)) => failures.push(format!("{:?}: {}", strategy, reason)),
            Err(Miss::Stop(reason)) => {
                failures.push(format!("{:?}: {}", strategy, reason));
                break;
            }
        }
    }

    ListShape::Unrecognized {
        reason: failures.join("; "),
    }
}

/// Why a strategy did not produce a shape.
enum Miss {
    /// The body is not this shape; try the next strategy.
    Next(String),
    /// The body is this shape but its payload is invalid; end the chain.
    Stop(String),
}

fn attempt<T: DeserializeOwned>(
    strategy: Strategy,
    value: &Value,
    options: &DecodeOptions,
    collection_key: Option<&str>,
) -> Result<ListShape<T>, Miss> {
    match strategy {
        Strategy::Envelope => {
            let Value::Object(map) = value else {
                return Err(Miss::Next("not an object".to_string()));
            };
            decode_envelope(map, options, collection_key).map(ListShape::Paginated)
        }
        Strategy::Array => {
            if !value.is_array() {
                return Err(Miss::Next("not an array".to_string()));
            }
            Vec::<T>::deserialize(value)
                .map(ListShape::Array)
                .map_err(|e| Miss::Next(e.to_string()))
        }
        Strategy::Single => T::deserialize(value)
            .map(ListShape::Single)
            .map_err(|e| Miss::Next(e.to_string())),
    }
}

/// The first present, non-null envelope field decides the outcome.
fn decode_envelope<T: DeserializeOwned>(
    map: &Map<String, Value>,
    options: &DecodeOptions,
    collection_key: Option<&str>,
) -> Result<Page<T>, Miss> {
    let wanted = options
        .envelope_keys
        .iter()
        .map(String::as_str)
        .chain(collection_key);

    for key in wanted {
        let Some((found, items)) = lookup(map, key, options) else {
            continue;
        };
        if items.is_null() {
            continue;
        }
        return Vec::<T>::deserialize(items)
            .map(|items| Page {
                envelope: found.clone(),
                items,
                info: page_info(map, options),
            })
            .map_err(|e| Miss::Stop(format!("envelope '{}': {}", found, e)));
    }

    Err(Miss::Next("no envelope field".to_string()))
}

fn lookup<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    options: &DecodeOptions,
) -> Option<(&'a String, &'a Value)> {
    map.iter().find(|(k, _)| options.key_matches(k, key))
}

fn page_info(map: &Map<String, Value>, options: &DecodeOptions) -> PageInfo {
    let number = |key: &str| lookup(map, key, options).and_then(|(_, v)| v.as_u64());
    PageInfo {
        page: number("page").or_else(|| number("pageNumber")),
        page_size: number("pageSize"),
        total_count: number("totalCount"),
        total_pages: number("totalPages"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Widget {
        id: i32,
        #[serde(default)]
        name: String,
        #[serde(default, rename = "widgetsize", alias = "widgetSize")]
        widget_size: i32,
    }

    fn widgets() -> Vec<Widget> {
        vec![
            Widget { id: 1, name: "one".into(), widget_size: 3 },
            Widget { id: 2, name: "two".into(), widget_size: 0 },
        ]
    }

    fn opts() -> DecodeOptions {
        DecodeOptions::default()
    }

    #[test]
    fn test_all_three_shapes_decode_to_the_same_items() {
        let wrapped = r#"{"items":[{"id":1,"name":"one","widgetSize":3},{"id":2,"name":"two"}]}"#;
        let bare = r#"[{"id":1,"name":"one","widgetSize":3},{"id":2,"name":"two"}]"#;

        let from_wrapper = decode_list::<Widget>(wrapped, &opts(), None);
        let from_array = decode_list::<Widget>(bare, &opts(), None);
        assert_eq!(from_wrapper.kind(), ShapeKind::Paginated);
        assert_eq!(from_array.kind(), ShapeKind::Array);
        assert_eq!(from_wrapper.into_items(), widgets());
        assert_eq!(from_array.into_items(), widgets());

        let single = decode_list::<Widget>(r#"{"id":1,"name":"one","widgetSize":3}"#, &opts(), None);
        assert_eq!(single.kind(), ShapeKind::Single);
        assert_eq!(single.into_items(), vec![widgets()[0].clone()]);
    }

    #[test]
    fn test_empty_and_garbage_bodies_yield_nothing() {
        for body in ["", "   \n", "<html>oops</html>", "{not json", "42", "\"text\""] {
            let shape = decode_list::<Widget>(body, &opts(), None);
            assert!(shape.is_empty(), "body {:?} produced {:?}", body, shape);
            assert!(shape.into_items().is_empty());
        }
    }

    #[test]
    fn test_invalid_envelope_payload_ends_the_chain() {
        let body = r#"{"id":3,"items":[{"name":"no id"}],"totalCount":1}"#;

        let shape = decode_list::<Widget>(body, &opts(), None);

        assert_eq!(shape.kind(), ShapeKind::Unrecognized);
        assert!(shape.into_items().is_empty());
    }

    #[test]
    fn test_null_envelope_falls_through_to_single() {
        let shape = decode_list::<Widget>(r#"{"id":3,"items":null}"#, &opts(), None);
        assert_eq!(shape.kind(), ShapeKind::Single);
    }

    #[test]
    fn test_empty_body_is_tagged_empty_not_unrecognized() {
        assert_eq!(decode_list::<Widget>("", &opts(), None).kind(), ShapeKind::Empty);
        assert_eq!(
            decode_list::<Widget>("nope", &opts(), None).kind(),
            ShapeKind::Unrecognized
        );
    }

    #[test]
    fn test_object_without_entity_fields_is_unrecognized() {
        let shape = decode_list::<Widget>(r#"{"message":"ok"}"#, &opts(), None);
        match shape {
            ListShape::Unrecognized { reason } => {
                assert!(reason.contains("Envelope"));
                assert!(reason.contains("Single"));
            }
            other => panic!("expected unrecognized, got {:?}", other),
        }
    }

    #[test]
    fn test_items_envelope_wins_over_later_keys() {
        let body = r#"{"data":[{"id":9}],"items":[{"id":1}]}"#;
        let shape = decode_list::<Widget>(body, &opts(), None);
        assert_eq!(shape.into_items().iter().map(|w| w.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_null_items_falls_through_to_next_envelope() {
        let body = r#"{"items":null,"results":[{"id":4}]}"#;
        match decode_list::<Widget>(body, &opts(), None) {
            ListShape::Paginated(page) => {
                assert_eq!(page.envelope, "results");
                assert_eq!(page.items[0].id, 4);
            }
            other => panic!("expected paginated, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_items_array_is_a_valid_page() {
        let shape = decode_list::<Widget>(r#"{"items":[],"totalCount":0}"#, &opts(), None);
        assert_eq!(shape.kind(), ShapeKind::Paginated);
        assert!(shape.is_empty());
    }

    #[test]
    fn test_collection_key_is_probed_last() {
        let body = r#"{"Events":[{"id":5}]}"#;
        let shape = decode_list::<Widget>(body, &opts(), Some("events"));
        assert_eq!(shape.kind(), ShapeKind::Paginated);
        assert_eq!(shape.into_items()[0].id, 5);

        let without_key = decode_list::<Widget>(body, &opts(), None);
        assert!(without_key.is_empty());
    }

    #[test]
    fn test_page_metadata_is_captured() {
        let body = r#"{"Items":[{"id":1}],"Page":2,"PageSize":10,"TotalCount":11,"TotalPages":2}"#;
        match decode_list::<Widget>(body, &opts(), None) {
            ListShape::Paginated(page) => {
                assert_eq!(
                    page.info,
                    PageInfo {
                        page: Some(2),
                        page_size: Some(10),
                        total_count: Some(11),
                        total_pages: Some(2),
                    }
                );
            }
            other => panic!("expected paginated, got {:?}", other),
        }
    }

    #[test]
    fn test_case_insensitive_field_matching() {
        let body = r#"[{"ID":1,"Name":"one","WIDGETSIZE":3}]"#;
        let items = decode_list::<Widget>(body, &opts(), None).into_items();
        assert_eq!(items, vec![widgets()[0].clone()]);
    }

    #[test]
    fn test_case_sensitive_mode_leaves_keys_alone() {
        let strict = DecodeOptions::case_sensitive();
        let body = r#"{"Items":[{"id":1}]}"#;
        // "Items" is not an envelope in strict mode and the object has no id.
        assert!(decode_list::<Widget>(body, &strict, None).is_empty());

        let camel = r#"[{"id":1,"name":"one","widgetSize":3}]"#;
        assert_eq!(decode_list::<Widget>(camel, &strict, None).into_items()[0], widgets()[0]);
    }

    #[test]
    fn test_fold_keys_is_recursive() {
        let folded = fold_keys(serde_json::json!({"Outer":{"InnerKey":[{"DeepKey":1}]}}));
        assert_eq!(folded, serde_json::json!({"outer":{"innerkey":[{"deepkey":1}]}}));
    }

    #[test]
    fn test_decode_one_reports_errors() {
        assert!(decode_one::<Widget>("", &opts()).is_err());
        assert!(decode_one::<Widget>(r#"{"name":"no id"}"#, &opts()).is_err());
        assert_eq!(decode_one::<Widget>(r#"{"Id":7}"#, &opts()).unwrap().id, 7);
    }
}
