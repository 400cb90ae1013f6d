//! Error taxonomy.
//!
//! The reveal core itself cannot fail (style derivation is pure
//! arithmetic); errors come from the terminal and the contact relay.

use thiserror::Error;

/// Top-level site error.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("contact relay error: {0}")]
    Relay(#[from] reqwest::Error),
}
