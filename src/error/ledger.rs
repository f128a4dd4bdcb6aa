use thiserror::Error;

/// Failures at the ledger-data boundary. Never retried by the core: the
/// traversal logs the failed (address, direction) and treats that branch as
/// "no qualifying transfer found".
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Ledger API rejected the request: status {status}")]
    Api { status: u16 },
    #[error("Ledger API reported failure for {endpoint}")]
    Unsuccessful { endpoint: &'static str },
    #[error("Malformed ledger response: {0}")]
    MalformedResponse(String),
    #[error("Invalid ledger API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
