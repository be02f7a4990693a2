/// A collection resource on the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Collection path, e.g. `/api/v1/events`
    pub path: &'static str,
    /// Singular entity name used in error messages, e.g. `event`
    pub entity: &'static str,
    /// Plural name probed as a list envelope field, e.g. `events`
    pub collection_key: &'static str,
}

impl Endpoint {
    pub const fn new(path: &'static str, entity: &'static str, collection_key: &'static str) -> Self {
        Self {
            path,
            entity,
            collection_key,
        }
    }

    pub fn item_path(&self, id: i32) -> String {
        format!("{}/{}", self.path, id)
    }
}
