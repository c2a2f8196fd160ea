mod client;
mod types;

pub use client::{HttpForwarder, PromptForwarder};
pub use types::OutboundRequest;
