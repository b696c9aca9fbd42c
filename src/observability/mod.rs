//! Observability subsystem
//!
//! - Structured logging through `tracing`
//! - Typed lifecycle and pipeline events
//! - Monotonic counters
//!
//! ```ignore
//! use library_api::observability::{log_event, Event, MetricsRegistry};
//!
//! log_event(Event::Serving);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_created(ResourceKind::User);
//! ```

mod events;
mod metrics;
mod subscriber;

pub use events::Event;
pub use metrics::{KindCounts, MetricsRegistry, MetricsSnapshot};
pub use subscriber::setup_tracing;

use tracing::Level;

/// Log an event with no extra fields
pub fn log_event(event: Event) {
    let level = event.level();
    if level == Level::ERROR {
        tracing::error!(event = event.as_str());
    } else if level == Level::WARN {
        tracing::warn!(event = event.as_str());
    } else {
        tracing::info!(event = event.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // No subscriber installed; verifies no panic
        log_event(Event::ServerStarting);
        log_event(Event::ValidationRejected);
        log_event(Event::StoreFailed);
    }
}
