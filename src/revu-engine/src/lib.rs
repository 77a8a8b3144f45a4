//! Revu Engine - the AI provider boundary.
//!
//! This crate provides:
//! - The [`ReviewModel`] trait, the seam between Revu and the external
//!   text-completion provider
//! - [`HttpReviewModel`], a non-streaming client for OpenAI-compatible
//!   chat-completions endpoints
//! - The fixed system instruction sent with every review request
//!
//! The provider is treated as opaque: it accepts code text and returns
//! prose text. Everything else (auth, model choice, endpoint) is
//! configuration.

pub mod client;
pub mod error;
pub mod prompt;

pub use client::{HttpReviewModel, ReviewModel};
pub use error::{EngineError, Result};
