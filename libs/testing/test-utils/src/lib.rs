//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for all domain crates:
//! - `FakeRemoteApi`: in-process stand-in for the remote events API, with an
//!   in-memory store, configurable list shapes and scripted raw responses
//! - `TestDataBuilder`: Deterministic test data generation
//! - `assertions`: Custom assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{FakeRemoteApi, ListStyle, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_repository_test() {
//!     let api = FakeRemoteApi::start().await;
//!     api.set_list_style(ListStyle::Items);
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let client = api.client();
//!     let name = builder.name("category", "main");
//! }
//! ```

mod fake_api;

pub use fake_api::{FakeRemoteApi, KeyCase, ListStyle, RecordedRequest};

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_event");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let name = builder.name("category", "main");
    /// // Returns: "test-category-12345-main"
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// A positive id derived from the seed, for paths that must miss.
    pub fn missing_id(&self) -> i32 {
        100_000 + (self.seed % 100_000) as i32
    }

    /// Midnight `days` after 2025-09-01.
    pub fn date(&self, days: i64) -> NaiveDateTime {
        let base = NaiveDate::from_ymd_opt(2025, 9, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("2025-09-01 is a valid date");
        base + Duration::days(days)
    }
}

/// Test assertion helpers
pub mod assertions {
    use crate::RecordedRequest;

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that an optional value is None
    pub fn assert_none<T: std::fmt::Debug>(value: Option<T>, context: &str) {
        if let Some(value) = value {
            panic!("{}: expected None, got {:?}", context, value);
        }
    }

    /// Assert that the remote API assigned an id
    pub fn assert_assigned_id(id: i32, context: &str) {
        assert!(id > 0, "{}: expected a server-assigned id, got {}", context, id);
    }

    /// Assert that no write (POST/PUT/DELETE) reached the remote API
    pub fn assert_no_writes(writes: &[RecordedRequest], context: &str) {
        assert!(
            writes.is_empty(),
            "{}: expected no writes, got {:?}",
            context,
            writes
                .iter()
                .map(|r| format!("{} {}", r.method, r.path))
                .collect::<Vec<_>>()
        );
    }
}
