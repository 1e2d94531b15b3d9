//! # HostSign Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Shared clients, envelopes and routers
//! ├── exploits/         # Attack simulations against the verifier
//! └── integration/      # End-to-end flows through an axum router
//!
//! tests/benches/
//! └── verification_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p hostsign-tests
//!
//! # By category
//! cargo test -p hostsign-tests integration::
//! cargo test -p hostsign-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p hostsign-tests
//! ```

#![allow(dead_code)]

pub mod exploits;
pub mod fixtures;
pub mod integration;
