pub mod config;
pub mod error;
pub mod forwarder;
pub mod server;

pub use error::{Error, Result};
