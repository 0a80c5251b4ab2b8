//! Configuration modules.

pub mod database;
pub mod logging;
pub mod server;
pub mod settings;

pub use settings::Config;
