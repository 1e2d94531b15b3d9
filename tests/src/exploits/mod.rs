//! # Attack Simulations
//!
//! Forged, tampered and smuggled plugin requests against the verifier.
