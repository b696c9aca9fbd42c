//! Metrics registry
//!
//! - Counters only, monotonic
//! - Reset only on process start
//! - Relaxed atomics; exactness across counters is not required

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::resource::ResourceKind;

/// Operational counters, one slot per resource kind where it applies
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Records stored, per kind
    created: [AtomicU64; 3],
    /// Payloads rejected by validation, per kind
    rejected: [AtomicU64; 3],
    /// Bodies that failed JSON parsing
    malformed_bodies: AtomicU64,
    /// Store write failures
    store_failures: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_created(&self, kind: ResourceKind) {
        self.created[kind.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rejected(&self, kind: ResourceKind) {
        self.rejected[kind.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_malformed_bodies(&self) {
        self.malformed_bodies.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_store_failures(&self) {
        self.store_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn created(&self, kind: ResourceKind) -> u64 {
        self.created[kind.index()].load(Ordering::Relaxed)
    }

    pub fn rejected(&self, kind: ResourceKind) -> u64 {
        self.rejected[kind.index()].load(Ordering::Relaxed)
    }

    /// Point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            created: self.per_kind(&self.created),
            rejected: self.per_kind(&self.rejected),
            malformed_bodies: self.malformed_bodies.load(Ordering::Relaxed),
            store_failures: self.store_failures.load(Ordering::Relaxed),
        }
    }

    fn per_kind(&self, slots: &[AtomicU64; 3]) -> KindCounts {
        KindCounts {
            users: slots[ResourceKind::User.index()].load(Ordering::Relaxed),
            books: slots[ResourceKind::Book.index()].load(Ordering::Relaxed),
            reviews: slots[ResourceKind::Review.index()].load(Ordering::Relaxed),
        }
    }
}

/// Counter values keyed by collection name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindCounts {
    pub users: u64,
    pub books: u64,
    pub reviews: u64,
}

/// Snapshot of metrics at a point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub created: KindCounts,
    pub rejected: KindCounts,
    pub malformed_bodies: u64,
    pub store_failures: u64,
}
