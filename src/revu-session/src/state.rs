//! Review session state machine.
//!
//! Manages the state and transitions of one review session: one code
//! buffer, at most one submission in flight. The machine is a plain
//! value, decoupled from rendering and transport, so transitions are
//! independently testable.

use serde::{Deserialize, Serialize};

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Initial state, nothing submitted yet.
    #[default]
    Idle,
    /// A submission is in flight.
    Requesting,
    /// The last submission produced a review.
    Succeeded,
    /// The last submission failed.
    Failed,
}

impl SessionPhase {
    /// Whether a new submission may start from this phase.
    pub fn accepts_submit(&self) -> bool {
        !matches!(self, Self::Requesting)
    }

    /// Whether a submission is currently in flight.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Requesting)
    }

    /// Whether the last submission has resolved, one way or the other.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// Session event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionEvent {
    /// User triggered a submission.
    Submit,
    /// The in-flight request produced a review.
    Resolved { review: String },
    /// The in-flight request failed.
    Rejected { message: String },
    /// The in-flight request was cancelled by the user.
    Cancelled,
}

/// State transition result.
#[derive(Debug, Clone)]
pub struct TransitionResult {
    /// Previous phase.
    pub from: SessionPhase,
    /// New phase.
    pub to: SessionPhase,
    /// Whether the transition was valid.
    pub valid: bool,
    /// Error message if invalid.
    pub error: Option<String>,
}

impl TransitionResult {
    fn valid(from: SessionPhase, to: SessionPhase) -> Self {
        Self {
            from,
            to,
            valid: true,
            error: None,
        }
    }

    fn invalid(from: SessionPhase, to: SessionPhase, error: impl Into<String>) -> Self {
        Self {
            from,
            to,
            valid: false,
            error: Some(error.into()),
        }
    }
}

/// Review session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionState {
    /// Current phase.
    pub phase: SessionPhase,
    /// Review text, present while phase is `Succeeded`.
    pub review: Option<String>,
    /// Failure message, present while phase is `Failed`.
    pub error: Option<String>,
    /// Submissions accepted so far.
    pub submissions: u32,
}

impl SessionState {
    /// Create a fresh session state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event and transition state.
    ///
    /// Invalid transitions leave the state untouched and are reported in
    /// the result rather than panicking.
    pub fn apply(&mut self, event: SessionEvent) -> TransitionResult {
        let from = self.phase;

        let result = match event {
            SessionEvent::Submit => self.handle_submit(from),
            SessionEvent::Resolved { review } => self.handle_resolved(from, review),
            SessionEvent::Rejected { message } => self.handle_rejected(from, message),
            SessionEvent::Cancelled => self.handle_cancelled(from),
        };

        if result.valid {
            self.phase = result.to;
        }

        result
    }

    fn handle_submit(&mut self, from: SessionPhase) -> TransitionResult {
        if from.accepts_submit() {
            // A new submission discards the prior outcome either way.
            self.review = None;
            self.error = None;
            self.submissions += 1;
            TransitionResult::valid(from, SessionPhase::Requesting)
        } else {
            TransitionResult::invalid(
                from,
                SessionPhase::Requesting,
                "A review is already in flight",
            )
        }
    }

    fn handle_resolved(&mut self, from: SessionPhase, review: String) -> TransitionResult {
        if from.is_in_flight() {
            self.review = Some(review);
            TransitionResult::valid(from, SessionPhase::Succeeded)
        } else {
            TransitionResult::invalid(from, SessionPhase::Succeeded, "No request in flight")
        }
    }

    fn handle_rejected(&mut self, from: SessionPhase, message: String) -> TransitionResult {
        if from.is_in_flight() {
            self.error = Some(message);
            TransitionResult::valid(from, SessionPhase::Failed)
        } else {
            TransitionResult::invalid(from, SessionPhase::Failed, "No request in flight")
        }
    }

    fn handle_cancelled(&self, from: SessionPhase) -> TransitionResult {
        if from.is_in_flight() {
            TransitionResult::valid(from, SessionPhase::Idle)
        } else {
            TransitionResult::invalid(from, SessionPhase::Idle, "No request in flight")
        }
    }
}
