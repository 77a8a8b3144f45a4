//! The review session controller.
//!
//! Single authority over one session's [`SessionState`]. Submission is
//! single-flight by construction: a `submit` while a request is in
//! flight is rejected with [`SubmitOutcome::Busy`] rather than silently
//! ignored, so callers and tests can assert on it.

use std::sync::{Arc, Mutex};

use revu_protocol::ReviewRequest;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::state::{SessionEvent, SessionState};
use crate::transport::ReviewTransport;

/// Fixed user-facing message for any failed submission. Transport and
/// gateway detail never reaches the rendering layer.
pub const FALLBACK_ERROR_MESSAGE: &str = "Error reviewing code. Please try again.";

/// Outcome of a `submit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submission was accepted and a request is now in flight.
    Accepted,
    /// A request is already in flight; nothing was submitted.
    Busy,
}

struct Core {
    state: SessionState,
    /// Monotonic submission counter; a resolution is dropped unless it
    /// carries the current generation.
    generation: u64,
    /// Cancellation token for the in-flight request.
    cancel: CancellationToken,
}

struct Inner {
    transport: Arc<dyn ReviewTransport>,
    core: Mutex<Core>,
    watch_tx: watch::Sender<SessionState>,
}

impl Inner {
    fn resolve(&self, generation: u64, outcome: Result<String, crate::transport::TransportError>) {
        let mut core = self.core.lock().unwrap();

        if generation != core.generation {
            // A newer submission superseded this one while it was in
            // flight; its result must never be displayed.
            debug!(generation, "Dropping stale review resolution");
            return;
        }

        let event = match outcome {
            Ok(review) => SessionEvent::Resolved { review },
            Err(err) => {
                warn!(error = %err, "Review request failed");
                SessionEvent::Rejected {
                    message: FALLBACK_ERROR_MESSAGE.to_string(),
                }
            }
        };

        let result = core.state.apply(event);
        if result.valid {
            self.watch_tx.send_replace(core.state.clone());
        } else {
            debug!(from = ?result.from, "Ignoring resolution without request in flight");
        }
    }
}

/// One browser-side review workflow: one code buffer, one state machine.
///
/// Must be used within a Tokio runtime; `submit` spawns the outbound
/// call as a task so it can return synchronously.
pub struct ReviewSession {
    inner: Arc<Inner>,
}

impl ReviewSession {
    /// Create a session over the given transport.
    pub fn new(transport: Arc<dyn ReviewTransport>) -> Self {
        let state = SessionState::new();
        let (watch_tx, _) = watch::channel(state.clone());
        Self {
            inner: Arc::new(Inner {
                transport,
                core: Mutex::new(Core {
                    state,
                    generation: 0,
                    cancel: CancellationToken::new(),
                }),
                watch_tx,
            }),
        }
    }

    /// Submit the current code buffer for review.
    ///
    /// Transitions to `Requesting` synchronously, before any I/O, and
    /// issues exactly one outbound call. No retries. While a request is
    /// in flight, further submits return [`SubmitOutcome::Busy`] with no
    /// side effects. The caller keeps ownership of its buffer; the
    /// session never mutates it.
    pub fn submit(&self, code: impl Into<String>) -> SubmitOutcome {
        let request = ReviewRequest::new(code);

        let (generation, cancel) = {
            let mut core = self.inner.core.lock().unwrap();
            let result = core.state.apply(SessionEvent::Submit);
            if !result.valid {
                return SubmitOutcome::Busy;
            }

            core.generation += 1;
            core.cancel = CancellationToken::new();
            self.inner.watch_tx.send_replace(core.state.clone());
            (core.generation, core.cancel.clone())
        };

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = cancel.cancelled() => {
                    debug!(generation, "Review request cancelled");
                    return;
                }
                outcome = inner.transport.review(&request) => outcome,
            };
            inner.resolve(generation, outcome);
        });

        SubmitOutcome::Accepted
    }

    /// Cancel the in-flight request, if any. Returns whether one was
    /// cancelled. The aborted request's response can never surface: its
    /// transport future is dropped and its generation is stale.
    pub fn cancel(&self) -> bool {
        let mut core = self.inner.core.lock().unwrap();
        let result = core.state.apply(SessionEvent::Cancelled);
        if !result.valid {
            return false;
        }

        core.cancel.cancel();
        self.inner.watch_tx.send_replace(core.state.clone());
        true
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.inner.core.lock().unwrap().state.clone()
    }

    /// Subscribe to state changes. Rendering stays decoupled from the
    /// controller; observers just watch this channel.
    pub fn observe(&self) -> watch::Receiver<SessionState> {
        self.inner.watch_tx.subscribe()
    }

    /// Wait until the in-flight submission resolves and return the
    /// resulting state. Resolves immediately if the session has already
    /// settled; waits forever if nothing was ever submitted.
    pub async fn settled(&self) -> SessionState {
        let mut rx = self.inner.watch_tx.subscribe();
        match rx.wait_for(|s| s.phase.is_resolved()).await {
            Ok(state) => state.clone(),
            // The sender lives as long as this session; a closed channel
            // can only mean shutdown, so fall back to the last snapshot.
            Err(_) => self.state(),
        }
    }
}
