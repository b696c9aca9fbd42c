//! Observable events for the service
//!
//! Events are explicit and typed. Each one is logged through `tracing` with
//! its name in the `event` field, so log pipelines can filter on it.

use std::fmt;

use tracing::Level;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Server is binding its listener
    ServerStarting,
    /// Listener bound, ready for requests
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Server drained and stopped
    ShutdownComplete,

    // Create pipeline
    /// Record validated and stored
    RecordCreated,
    /// Payload failed validation
    ValidationRejected,
    /// Request body was not parseable JSON
    MalformedBody,
    /// Store refused a write
    StoreFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServerStarting => "SERVER_STARTING",
            Event::Serving => "SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::RecordCreated => "RECORD_CREATED",
            Event::ValidationRejected => "VALIDATION_REJECTED",
            Event::MalformedBody => "MALFORMED_BODY",
            Event::StoreFailed => "STORE_FAILED",
        }
    }

    /// Level the event is logged at
    pub fn level(&self) -> Level {
        match self {
            Event::ValidationRejected | Event::MalformedBody => Level::WARN,
            Event::StoreFailed => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::ConfigLoaded,
            Event::ServerStarting,
            Event::Serving,
            Event::ShutdownStart,
            Event::ShutdownComplete,
            Event::RecordCreated,
            Event::ValidationRejected,
            Event::MalformedBody,
            Event::StoreFailed,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_levels() {
        assert_eq!(Event::Serving.level(), Level::INFO);
        assert_eq!(Event::ValidationRejected.level(), Level::WARN);
        assert_eq!(Event::StoreFailed.level(), Level::ERROR);
    }
}
