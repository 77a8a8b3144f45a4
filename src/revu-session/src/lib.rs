//! Revu Session - client-side review session controller.
//!
//! This crate owns the review-submission lifecycle on the client side:
//! - [`SessionState`]: an explicit finite-state machine
//!   (Idle / Requesting / Succeeded / Failed) decoupled from rendering
//! - [`ReviewSession`]: the controller enforcing at-most-one in-flight
//!   request, with explicit busy rejection and cancellation of
//!   superseded requests
//! - [`ReviewTransport`]: the outbound seam, with an HTTP implementation
//!   against the gateway
//!
//! Observers subscribe through [`ReviewSession::observe`]; the
//! controller is the only writer of session state.

pub mod controller;
pub mod state;
pub mod transport;

pub use controller::{FALLBACK_ERROR_MESSAGE, ReviewSession, SubmitOutcome};
pub use state::{SessionEvent, SessionPhase, SessionState, TransitionResult};
pub use transport::{DEFAULT_GATEWAY_URL, HttpTransport, ReviewTransport, TransportError};
