//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that the request pipeline calls
//! - **Outbound (Driven)**: Collaborators this crate needs

pub mod inbound;
pub mod outbound;
