//! Provider traits implemented by the API and web crates.
//!
//! These traits are the seams of the pipeline: the batch layer is written
//! against them, so the structured-API-backed and web-search-backed variants
//! are interchangeable and independently testable with fakes.

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

use crate::{
    directory::CorpDirectory,
    error::Result,
    types::{CorpCode, FilingReference, ReportPeriod, ResolvedCorp, StatementFigures},
};

/// Cached access to the registry directory.
///
/// Implementations own their TTL-guarded cache state: within the validity
/// window, every call observes the same decoded instance and the remote
/// fetch runs at most once, even under concurrent first loads.
#[async_trait]
pub trait DirectoryProvider: Send + Sync + Debug {
    /// Returns the registry directory, fetching and decoding it if the
    /// cached copy is absent or stale.
    async fn directory(&self) -> Result<Arc<CorpDirectory>>;
}

/// Provider of structured financial figures for a resolved company.
#[async_trait]
pub trait StatementProvider: Send + Sync + Debug {
    /// Fetches the four canonical line items for one reporting period,
    /// falling back across reporting-basis variants as needed.
    async fn fetch_statement(
        &self,
        corp_code: &CorpCode,
        year: u16,
        period: ReportPeriod,
    ) -> Result<StatementFigures>;
}

/// Locator for the most recent audit-report filing of a company.
#[async_trait]
pub trait ReportLocator: Send + Sync + Debug {
    /// Finds the most recent filing whose title marks it as an audit report.
    ///
    /// The API variant pages the disclosure list by identifier; the web
    /// variant searches the public search page by company name and verifies
    /// the result row against [`ResolvedCorp::normalized`].
    async fn locate_audit_report(&self, corp: &ResolvedCorp) -> Result<FilingReference>;
}

/// Downloader and extractor for a located filing document.
#[async_trait]
pub trait FilingParser: Send + Sync + Debug {
    /// Resolves the receipt number to the filed document, downloads it, and
    /// extracts the four canonical line items from its text.
    async fn fetch_and_extract(&self, rcept_no: &str) -> Result<StatementFigures>;
}
