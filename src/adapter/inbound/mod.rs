//! Driving adapters: the command line and the HTTP surface.

pub mod cli;
pub mod http;
