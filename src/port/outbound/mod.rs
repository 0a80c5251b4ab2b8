//! Outbound ports (driven side).

pub mod store;
