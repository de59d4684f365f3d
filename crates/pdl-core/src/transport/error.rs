//! Transport open failure.

/// Why a locator could not be opened as a byte stream. The orchestrator treats
/// every variant the same way (skip the URL); the variant is kept for logs.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Curl reported an error (resolve, connect, TLS, missing file, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// The transfer worker went away without reporting a response.
    #[error("transfer worker exited before a response")]
    Closed,
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
