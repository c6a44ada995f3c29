//! TelemetryHub Common Types
//!
//! Shared wire types for the gateway REST protocol, used by every
//! TelemetryHub client.

pub mod protocol;

pub use protocol::{CommandResult, DeviceState, GatewayStatus, Sample};
