//! Lifecycle and request events
//!
//! Every log line carries an `event` field with one of these names so logs
//! can be filtered without parsing messages.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Server lifecycle
    /// Startup begins
    BootStart,
    /// Startup failed (fatal)
    BootFailed,
    /// Settings read from the environment
    ConfigLoaded,
    /// Database pool opened
    PoolReady,
    /// Listening for requests
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Server stopped and pool closed
    ShutdownComplete,

    // Requests
    /// Request body failed the presence check
    RequestRejected,
    /// Row inserted
    RowPersisted,
    /// Statement failed
    QueryFailed,

    // Schema bootstrap
    /// Bootstrap begins
    SetupBegin,
    /// Administrative connection opened
    SetupConnected,
    /// Script applied
    SetupComplete,
    /// Administrative connection closed
    SetupConnectionClosed,
    /// Bootstrap failed (fatal)
    SetupFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "SHOPFRONT_STARTUP_BEGIN",
            Event::BootFailed => "SHOPFRONT_STARTUP_FAILED",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::PoolReady => "DB_POOL_READY",
            Event::Serving => "SHOPFRONT_SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::RequestRejected => "REQUEST_REJECTED",
            Event::RowPersisted => "ROW_PERSISTED",
            Event::QueryFailed => "QUERY_FAILED",

            Event::SetupBegin => "SETUP_BEGIN",
            Event::SetupConnected => "SETUP_CONNECTED",
            Event::SetupComplete => "SETUP_COMPLETE",
            Event::SetupConnectionClosed => "SETUP_CONNECTION_CLOSED",
            Event::SetupFailed => "SETUP_FAILED",
        }
    }

    /// Returns true if this event ends the process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::BootFailed | Event::SetupFailed)
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
    fn test_event_names_are_upper_snake_case() {
        let events = [
            Event::BootStart,
            Event::BootFailed,
            Event::ConfigLoaded,
            Event::PoolReady,
            Event::Serving,
            Event::ShutdownStart,
            Event::ShutdownComplete,
            Event::RequestRejected,
            Event::RowPersisted,
            Event::QueryFailed,
            Event::SetupBegin,
            Event::SetupConnected,
            Event::SetupComplete,
            Event::SetupConnectionClosed,
            Event::SetupFailed,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_fatal_events() {
        assert!(Event::SetupFailed.is_fatal());
        assert!(Event::BootFailed.is_fatal());
        assert!(!Event::QueryFailed.is_fatal());
        assert!(!Event::BootStart.is_fatal());
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::Serving), "SHOPFRONT_SERVING");
    }
}
