//! Operation outcome reporting.
//!
//! Every public operation emits one human-readable outcome to a sink. The
//! sink is presentation only; the data contract is the operation's return
//! value.

use metrics::counter;
use std::sync::Mutex;

/// How an operation concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// The operation did what was asked.
    Success,
    /// Nothing was written, and that is not a failure (lookup miss, no-op).
    Info,
    /// The operation failed.
    Failure,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Success => "success",
            OutcomeKind::Info => "info",
            OutcomeKind::Failure => "failure",
        }
    }
}

/// A human-readable operation outcome.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub operation: &'static str,
    pub message: String,
}

impl Outcome {
    pub fn success(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Success,
            operation,
            message: message.into(),
        }
    }

    pub fn info(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Info,
            operation,
            message: message.into(),
        }
    }

    pub fn failure(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Failure,
            operation,
            message: message.into(),
        }
    }
}

/// Collaborator that receives operation outcomes.
pub trait ReportSink: Send + Sync {
    fn report(&self, outcome: &Outcome);
}

/// Sink that forwards outcomes to the tracing subscriber and bumps the
/// per-operation outcome counter.
#[derive(Debug, Default, Clone)]
pub struct TracingSink;

impl ReportSink for TracingSink {
    fn report(&self, outcome: &Outcome) {
        counter!(
            "directory_operations_total",
            "operation" => outcome.operation,
            "outcome" => outcome.kind.as_str()
        )
        .increment(1);

        match outcome.kind {
            OutcomeKind::Success | OutcomeKind::Info => {
                tracing::info!(operation = outcome.operation, "{}", outcome.message)
            }
            OutcomeKind::Failure => {
                tracing::warn!(operation = outcome.operation, "{}", outcome.message)
            }
        }
    }
}

/// Sink that stores outcomes for later inspection. Used by tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    outcomes: Mutex<Vec<Outcome>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return everything reported so far.
    pub fn take(&self) -> Vec<Outcome> {
        std::mem::take(&mut *self.outcomes.lock().unwrap())
    }

    /// The most recently reported outcome, if any.
    pub fn last(&self) -> Option<Outcome> {
        self.outcomes.lock().unwrap().last().cloned()
    }
}

impl ReportSink for RecordingSink {
    fn report(&self, outcome: &Outcome) {
        self.outcomes.lock().unwrap().push(outcome.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_constructors() {
        let outcome = Outcome::success("create_client", "client added");
        assert_eq!(outcome.kind, OutcomeKind::Success);
        assert_eq!(outcome.operation, "create_client");
        assert_eq!(outcome.message, "client added");

        assert_eq!(Outcome::info("add_phone", "x").kind, OutcomeKind::Info);
        assert_eq!(
            Outcome::failure("delete_client", "x").kind,
            OutcomeKind::Failure
        );
    }

    #[test]
    fn test_outcome_kind_as_str() {
        assert_eq!(OutcomeKind::Success.as_str(), "success");
        assert_eq!(OutcomeKind::Info.as_str(), "info");
        assert_eq!(OutcomeKind::Failure.as_str(), "failure");
    }

    #[test]
    fn test_recording_sink() {
        let sink = RecordingSink::new();
        sink.report(&Outcome::success("create_client", "one"));
        sink.report(&Outcome::info("add_phone", "two"));

        assert_eq!(sink.last().unwrap().message, "two");
        let outcomes = sink.take();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].message, "one");
        assert!(sink.take().is_empty());
    }
}
