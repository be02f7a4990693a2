//! Diagnostics sink for decoding and repair outcomes.

use std::sync::Mutex;

use crate::decode::ShapeKind;

/// Receives decode-strategy outcomes and repair actions from repositories.
///
/// All methods default to no-ops so implementors only override what they
/// care about.
pub trait DecodeObserver: Send + Sync {
    /// A list body was decoded (or found empty).
    fn shape_resolved(&self, _resource: &str, _shape: ShapeKind, _count: usize) {}

    /// A body could not be decoded as the expected type.
    fn decode_failed(&self, _resource: &str, _reason: &str) {}

    /// A read never produced a usable body: transport error or non-2xx status.
    fn request_failed(&self, _resource: &str, _reason: &str) {}

    /// A flat foreign key was filled from an embedded object.
    fn foreign_key_backfilled(&self, _resource: &str, _entity_id: i32, _field: &str, _value: i32) {}
}

/// Default observer: structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl DecodeObserver for TracingObserver {
    fn shape_resolved(&self, resource: &str, shape: ShapeKind, count: usize) {
        tracing::debug!(resource, shape = %shape, count, "List response decoded");
    }

    fn decode_failed(&self, resource: &str, reason: &str) {
        tracing::warn!(resource, reason, "Response shape not recognized");
    }

    fn request_failed(&self, resource: &str, reason: &str) {
        tracing::warn!(resource, reason, "Remote read failed");
    }

    fn foreign_key_backfilled(&self, resource: &str, entity_id: i32, field: &str, value: i32) {
        tracing::info!(
            resource,
            entity_id,
            field,
            value,
            "Foreign key backfilled from embedded object"
        );
    }
}

/// One observation captured by [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    ShapeResolved {
        resource: String,
        shape: ShapeKind,
        count: usize,
    },
    DecodeFailed {
        resource: String,
        reason: String,
    },
    RequestFailed {
        resource: String,
        reason: String,
    },
    ForeignKeyBackfilled {
        resource: String,
        entity_id: i32,
        field: String,
        value: i32,
    },
}

/// Observer that keeps every observation in memory.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    seen: Mutex<Vec<Observation>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observations(&self) -> Vec<Observation> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }

    pub fn backfills(&self) -> Vec<(String, i32)> {
        self.observations()
            .into_iter()
            .filter_map(|o| match o {
                Observation::ForeignKeyBackfilled { field, value, .. } => Some((field, value)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, observation: Observation) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(observation);
        }
    }
}

impl DecodeObserver for RecordingObserver {
    fn shape_resolved(&self, resource: &str, shape: ShapeKind, count: usize) {
        self.push(Observation::ShapeResolved {
            resource: resource.to_string(),
            shape,
            count,
        });
    }

    fn decode_failed(&self, resource: &str, reason: &str) {
        self.push(Observation::DecodeFailed {
            resource: resource.to_string(),
            reason: reason.to_string(),
        });
    }

    fn request_failed(&self, resource: &str, reason: &str) {
        self.push(Observation::RequestFailed {
            resource: resource.to_string(),
            reason: reason.to_string(),
        });
    }

    fn foreign_key_backfilled(&self, resource: &str, entity_id: i32, field: &str, value: i32) {
        self.push(Observation::ForeignKeyBackfilled {
            resource: resource.to_string(),
            entity_id,
            field: field.to_string(),
            value,
        });
    }
}
