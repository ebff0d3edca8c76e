//! Error types for lookup operations.
//!
//! This module defines [`DartError`] which covers all error cases that can
//! occur when resolving companies and fetching their financial figures.
//!
//! Most variants are per-company conditions: the batch layer records them in
//! the company's output row and moves on. Only a directory-load failure
//! ([`DartError::Network`] or [`DartError::Format`] during the load) is fatal
//! to a whole batch, since no resolution can proceed without the directory.

use thiserror::Error;

/// Errors that can occur during company resolution and figure retrieval.
#[derive(Error, Debug)]
pub enum DartError {
    /// Network-related errors (connection failures, timeouts, etc.).
    #[error("Network error: {0}")]
    Network(String),

    /// The registry directory payload could not be decoded.
    #[error("Directory format error: {0}")]
    Format(String),

    /// The company name could not be resolved to a registry identifier.
    #[error("Company not found in registry: {0}")]
    CorpNotFound(String),

    /// No filing of the requested category exists for the company.
    #[error("No matching filing found: {0}")]
    FilingNotFound(String),

    /// Both reporting-basis attempts failed, or no figure could be extracted.
    #[error("No financial data: {0}")]
    NoFinancialData(String),

    /// The document viewer page carried no document frame.
    #[error("Document link not found: {0}")]
    LinkNotFound(String),

    /// The located document could not be downloaded.
    #[error("Document download failed: {0}")]
    DownloadFailed(String),

    /// The downloaded response was not the expected document type.
    #[error("Not a document: {0}")]
    NotADocument(String),

    /// Error parsing a response payload.
    #[error("Parse error: {0}")]
    Parse(String),

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The API key's daily request quota has been exhausted.
    #[error("Rate limited by Open DART: {0}")]
    RateLimited(String),
}

/// Result type alias using [`DartError`].
pub type Result<T> = std::result::Result<T, DartError>;
