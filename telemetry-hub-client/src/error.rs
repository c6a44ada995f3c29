//! Error types for the TelemetryHub client.

/// Failure classes for gateway operations.
///
/// Every failure that can reach the operator maps onto exactly one
/// variant, so reporting and exit-code mapping branch on the variant
/// alone. Classification happens where the error is produced, not in
/// the reporting layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The gateway could not be reached: connection refused, DNS
    /// failure, or a request that timed out.
    #[error("Cannot connect to gateway: {0}")]
    Connectivity(String),

    /// The gateway answered outside the protocol: a non-success HTTP
    /// status, or a body that does not decode as the expected shape.
    #[error("Gateway protocol error: {0}")]
    Protocol(String),

    /// The operator interrupted the run.
    #[error("Interrupted by user")]
    Cancelled,

    /// Anything that fits none of the classes above.
    #[error("{0}")]
    Unexpected(String),
}

impl Error {
    /// Stable classification label used in log lines and failure
    /// reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Connectivity(_) => "connectivity",
            Error::Protocol(_) => "protocol",
            Error::Cancelled => "cancelled",
            Error::Unexpected(_) => "unexpected",
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() || e.is_connect() {
            Error::Connectivity(e.to_string())
        } else if e.is_decode() {
            Error::Protocol(format!("invalid response body: {}", e))
        } else {
            // Remaining reqwest failures (resets mid-response, protocol
            // upgrades, builder misuse) still mean the gateway exchange
            // did not complete. Non-2xx replies never reach this
            // conversion; the client classifies them before decoding.
            Error::Connectivity(e.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
