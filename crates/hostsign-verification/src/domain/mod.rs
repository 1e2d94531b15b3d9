//! # Domain Layer
//!
//! Pure verification logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod diagnostics;
pub mod entities;
pub mod envelope;
pub mod errors;
pub mod referrer;
pub mod signature;
