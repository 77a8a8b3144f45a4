//! Lifecycle tests for the review session controller, driven through a
//! stub transport standing in for the gateway.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use revu_protocol::ReviewRequest;
use revu_session::{
    FALLBACK_ERROR_MESSAGE, ReviewSession, ReviewTransport, SessionPhase, SubmitOutcome,
    TransportError,
};

/// Stub transport with a scripted reply per call.
struct StubTransport {
    /// (delay, reply) per call; the last entry repeats.
    script: Vec<(Duration, Result<String, u16>)>,
    calls: AtomicUsize,
}

impl StubTransport {
    fn replying(review: &str) -> Arc<Self> {
        Arc::new(Self {
            script: vec![(Duration::ZERO, Ok(review.to_string()))],
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            script: vec![(Duration::ZERO, Err(status))],
            calls: AtomicUsize::new(0),
        })
    }

    fn scripted(script: Vec<(Duration, Result<String, u16>)>) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReviewTransport for StubTransport {
    async fn review(&self, _request: &ReviewRequest) -> Result<String, TransportError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let (delay, reply) = &self.script[call.min(self.script.len() - 1)];
        tokio::time::sleep(*delay).await;
        match reply {
            Ok(review) => Ok(review.clone()),
            Err(status) => Err(TransportError::Status(*status)),
        }
    }
}

#[tokio::test]
async fn submit_transitions_to_requesting_synchronously() {
    let transport = StubTransport::scripted(vec![(
        Duration::from_secs(60),
        Ok("never seen".to_string()),
    )]);
    let session = ReviewSession::new(transport);

    assert_eq!(session.state().phase, SessionPhase::Idle);
    assert_eq!(session.submit("fn main() {}"), SubmitOutcome::Accepted);
    // No await between submit and this assertion: the transition is
    // synchronous, before any response can arrive.
    assert_eq!(session.state().phase, SessionPhase::Requesting);

    session.cancel();
}

#[tokio::test]
async fn second_submit_while_in_flight_is_rejected_as_busy() {
    let transport = StubTransport::scripted(vec![(
        Duration::from_millis(100),
        Ok("first".to_string()),
    )]);
    let session = ReviewSession::new(transport.clone());

    assert_eq!(session.submit("fn a() {}"), SubmitOutcome::Accepted);
    assert_eq!(session.submit("fn b() {}"), SubmitOutcome::Busy);
    assert_eq!(session.submit("fn c() {}"), SubmitOutcome::Busy);

    let settled = session.settled().await;
    assert_eq!(settled.phase, SessionPhase::Succeeded);
    assert_eq!(settled.submissions, 1);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn success_holds_exactly_the_transport_text() {
    let text = "## Review\n\nLooks solid. One nit: rename `x`.";
    let session = ReviewSession::new(StubTransport::replying(text));

    session.submit("let x = 1;");
    let settled = session.settled().await;

    assert_eq!(settled.phase, SessionPhase::Succeeded);
    assert_eq!(settled.review.as_deref(), Some(text));
    assert_eq!(settled.error, None);
}

#[tokio::test]
async fn failure_holds_the_fixed_fallback_message() {
    let session = ReviewSession::new(StubTransport::failing(502));

    let code = "fn main() {}".to_string();
    session.submit(code.clone());
    let settled = session.settled().await;

    assert_eq!(settled.phase, SessionPhase::Failed);
    assert_eq!(settled.error.as_deref(), Some(FALLBACK_ERROR_MESSAGE));
    assert_eq!(settled.review, None);
    // The caller-owned buffer is untouched by the failure.
    assert_eq!(code, "fn main() {}");
}

#[tokio::test]
async fn session_is_resubmittable_after_failure() {
    let transport = StubTransport::scripted(vec![
        (Duration::ZERO, Err(500)),
        (Duration::ZERO, Ok("second time lucky".to_string())),
    ]);
    let session = ReviewSession::new(transport);

    session.submit("fn main() {}");
    assert_eq!(session.settled().await.phase, SessionPhase::Failed);

    assert_eq!(session.submit("fn main() {}"), SubmitOutcome::Accepted);
    let settled = session.settled().await;
    assert_eq!(settled.phase, SessionPhase::Succeeded);
    assert_eq!(settled.review.as_deref(), Some("second time lucky"));
    assert_eq!(settled.submissions, 2);
}

#[tokio::test]
async fn superseded_request_never_overwrites_the_newer_result() {
    // First call answers slowly with stale text; the second answers fast.
    let transport = StubTransport::scripted(vec![
        (Duration::from_millis(200), Ok("stale".to_string())),
        (Duration::from_millis(10), Ok("fresh".to_string())),
    ]);
    let session = ReviewSession::new(transport);

    session.submit("v1");
    assert!(session.cancel());
    assert_eq!(session.state().phase, SessionPhase::Idle);

    session.submit("v2");
    let settled = session.settled().await;
    assert_eq!(settled.review.as_deref(), Some("fresh"));

    // Give the superseded request time to have answered, then confirm
    // it never surfaced.
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(session.state().review.as_deref(), Some("fresh"));
}

#[tokio::test]
async fn cancel_without_in_flight_request_is_a_no_op() {
    let session = ReviewSession::new(StubTransport::replying("ok"));
    assert!(!session.cancel());

    session.submit("fn main() {}");
    session.settled().await;
    assert!(!session.cancel());
    assert_eq!(session.state().phase, SessionPhase::Succeeded);
}

#[tokio::test]
async fn observers_see_the_requesting_then_succeeded_sequence() {
    let transport = StubTransport::scripted(vec![(
        Duration::from_millis(200),
        Ok("done".to_string()),
    )]);
    let session = ReviewSession::new(transport);
    let mut rx = session.observe();

    session.submit("fn main() {}");

    rx.changed().await.unwrap();
    assert_eq!(rx.borrow().phase, SessionPhase::Requesting);

    rx.changed().await.unwrap();
    let state = rx.borrow().clone();
    assert_eq!(state.phase, SessionPhase::Succeeded);
    assert_eq!(state.review.as_deref(), Some("done"));
}
