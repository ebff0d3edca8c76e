#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/dartlens/dartlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for DART disclosure lookups.
//!
//! This crate provides the foundational abstractions shared by the provider
//! crates:
//!
//! - [`normalize`](normalize::normalize) - Company-name canonicalization
//! - [`CorpDirectory`](directory::CorpDirectory) - Registry directory lookup table
//! - [`DirectoryProvider`](provider::DirectoryProvider) - Cached directory access
//! - [`StatementProvider`](provider::StatementProvider) - Structured financial figures
//! - [`ReportLocator`](provider::ReportLocator) - Audit-report filing discovery
//! - [`FilingParser`](provider::FilingParser) - Document download and extraction

/// Registry directory lookup table and identifier resolution.
pub mod directory;
/// Error types for lookup operations.
pub mod error;
/// Company-name normalization heuristics.
pub mod normalize;
/// Provider traits implemented by the API and web crates.
pub mod provider;
/// Core data types (CorpCode, FinancialRecord, etc.).
pub mod types;

// Re-export commonly used items at crate root
pub use directory::CorpDirectory;
pub use error::{DartError, Result};
pub use normalize::{normalize, stripped_designators};
pub use provider::{DirectoryProvider, FilingParser, ReportLocator, StatementProvider};
pub use types::{
    CorpCode, DirectoryEntry, FilingReference, FinancialRecord, ReportPeriod, ReportingBasis,
    ResolvedCorp, StatementFigures,
};
