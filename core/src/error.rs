//! Error types for the gateway client.
//!
//! # Design
//! Only transport-level failures are errors. The gateway reports business
//! failures (insufficient float, bad account, auth rejection) inside an HTTP
//! 200 JSON body, and this layer returns any readable body untouched, so there
//! is deliberately no variant for remote-reported errors. The two variants
//! split on where the exchange broke: before a response arrived, or while
//! consuming its body.

use std::fmt;

/// Errors returned by [`Lipisha::dispatch`](crate::Lipisha::dispatch) and the
/// endpoint wrappers built on it.
#[derive(Debug)]
pub enum Error {
    /// The request never completed: DNS, TCP, TLS or timeout failure.
    Transport(ureq::Error),

    /// The exchange succeeded but the response body could not be read.
    Read(ureq::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "transport failure: {e}"),
            Error::Read(e) => write!(f, "failed to read response body: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(e) | Error::Read(e) => Some(e),
        }
    }
}
