//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording analysis events
//! (prompts sent, summaries received, faults) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the
//! exchange with the model in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured conversation event for logging.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields. Timestamps are added by the writer.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "analysis_completed", "analysis_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging conversation events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL line).
/// `log` is synchronous and infallible; write failures are dropped.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
