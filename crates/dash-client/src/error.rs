//! Client-side error taxonomy.
//!
//! There is deliberately a single transport taxon: connect failures,
//! timeouts and non-2xx statuses all degrade the same way on the read
//! path. `Rejected` exists for the close operation, where the server
//! answers 400 with a receipt explaining the refusal.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure or an error status with no usable body.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server processed the request and refused it.
    #[error("rejected (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
}
