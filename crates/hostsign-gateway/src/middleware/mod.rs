//! Middleware for routers that receive forwarded plugin traffic.
//!
//! Layer order: Request → HostSign → Handler

pub mod hostsign;

pub use hostsign::{HostSignLayer, HostSignService, VerifiedClient};
