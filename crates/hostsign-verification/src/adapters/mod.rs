//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports.

pub mod memory;
pub mod recording;
pub mod tracing_sink;
