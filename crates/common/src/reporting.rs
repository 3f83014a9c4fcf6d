//! Error-tracking sink.
//!
//! Faults that end in a generic 500 are handed to an [`ErrorReporter`] with
//! full detail. Reporting is for observability only and never changes the
//! response.

use tracing::error;

pub trait ErrorReporter: Send + Sync {
    /// Record `error` raised while performing `context` (e.g. `"list_services"`).
    fn capture(&self, context: &str, error: &(dyn std::error::Error + 'static));
}

/// Emits captured errors as structured `tracing` events.
#[derive(Debug, Clone)]
pub struct TracingReporter {
    service: &'static str,
}

impl TracingReporter {
    pub fn new(service: &'static str) -> Self { Self { service } }
}

impl Default for TracingReporter {
    fn default() -> Self { Self::new("server") }
}

impl ErrorReporter for TracingReporter {
    fn capture(&self, context: &str, error: &(dyn std::error::Error + 'static)) {
        let source = error.source().map(|s| s.to_string());
        error!(
            service = self.service,
            event = "exception_captured",
            context,
            error = %error,
            source = ?source,
            "error captured"
        );
    }
}

/// In-memory reporter for tests
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CapturedError {
        pub context: String,
        pub message: String,
    }

    #[derive(Default)]
    pub struct RecordingReporter {
        captured: Mutex<Vec<CapturedError>>,
    }

    impl RecordingReporter {
        pub fn captured(&self) -> Vec<CapturedError> {
            self.captured.lock().map(|c| c.clone()).unwrap_or_default()
        }

        pub fn count(&self) -> usize {
            self.captured.lock().map(|c| c.len()).unwrap_or_default()
        }
    }

    impl ErrorReporter for RecordingReporter {
        fn capture(&self, context: &str, error: &(dyn std::error::Error + 'static)) {
            if let Ok(mut captured) = self.captured.lock() {
                captured.push(CapturedError { context: context.to_string(), message: error.to_string() });
            }
        }
    }
}
