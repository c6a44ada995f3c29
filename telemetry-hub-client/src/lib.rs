pub mod client;
pub mod config;
pub mod error;
pub mod poll;
pub mod render;
pub mod report;
pub mod test_util;
pub mod workflow;

pub use client::GatewayClient;
pub use config::Settings;
pub use error::{Error, Result};
pub use report::{CleanupOutcome, Termination};
