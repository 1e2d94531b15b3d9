//! # Integration Tests
//!
//! End-to-end flows: request → HostSign layer → verifier → directory → handler.

pub mod flows;
