//! The logging capability used by the fetch client and the resolver.
//!
//! Components take an `Arc<dyn Logger>` rather than calling `tracing`
//! directly, so tests can observe exactly which messages were emitted.

use std::sync::{Mutex, PoisonError};

use tracing::info;

/// A single-argument logging capability.
pub trait Logger: Send + Sync {
    /// Records one message.
    fn log(&self, message: &str);
}

/// Forwards every message to `tracing` at `INFO` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        info!(target: "payroll_reference", "{message}");
    }
}

/// Keeps every message in memory, in the order received.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    messages: Mutex<Vec<String>>,
}

impl RecordingLogger {
    /// Creates an empty recording logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the messages recorded so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns how many recorded messages equal `message`.
    pub fn count(&self, message: &str) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|m| m.as_str() == message)
            .count()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
