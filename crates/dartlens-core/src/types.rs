//! Core data types for DART disclosure lookups.
//!
//! This module defines the fundamental data structures:
//!
//! - [`CorpCode`] - Registry-assigned corporate identifier
//! - [`ReportPeriod`] - Enumerated filing period codes
//! - [`ReportingBasis`] - Consolidated vs. standalone financials
//! - [`DirectoryEntry`] - One record of the registry directory
//! - [`ResolvedCorp`] - A company name resolved against the directory
//! - [`FilingReference`] - Pointer to a specific filed document
//! - [`StatementFigures`] - The four canonical line items
//! - [`FinancialRecord`] - Per-company batch output row

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::normalize::normalize;

/// A registry-assigned corporate identifier (8-digit Open DART corp code).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorpCode(String);

impl CorpCode {
    /// Creates a new corp code, trimming surrounding whitespace.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().trim().to_string())
    }

    /// Returns the corp code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CorpCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for CorpCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CorpCode {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Enumerated filing period selecting which periodic report to query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportPeriod {
    /// Annual business report.
    #[default]
    Annual,
    /// Half-year report.
    HalfYear,
    /// First-quarter report.
    FirstQuarter,
    /// Third-quarter report.
    ThirdQuarter,
}

impl ReportPeriod {
    /// Returns the Open DART `reprt_code` for this period.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Annual => "11011",
            Self::HalfYear => "11012",
            Self::FirstQuarter => "11013",
            Self::ThirdQuarter => "11014",
        }
    }

    /// Parses a `reprt_code` back into a period.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "11011" => Some(Self::Annual),
            "11012" => Some(Self::HalfYear),
            "11013" => Some(Self::FirstQuarter),
            "11014" => Some(Self::ThirdQuarter),
            _ => None,
        }
    }
}

/// Whether figures are consolidated (including subsidiaries) or standalone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportingBasis {
    /// Consolidated financial statements (CFS).
    Consolidated,
    /// Standalone financial statements (OFS).
    Standalone,
    /// Basis could not be determined (e.g., figures scraped from a PDF).
    #[default]
    Unknown,
}

impl ReportingBasis {
    /// The fallback order tried by the structured retriever.
    pub const FALLBACK_ORDER: [Self; 2] = [Self::Consolidated, Self::Standalone];

    /// Returns the Open DART `fs_div` flag, if this basis has one.
    #[must_use]
    pub const fn fs_div(&self) -> Option<&'static str> {
        match self {
            Self::Consolidated => Some("CFS"),
            Self::Standalone => Some("OFS"),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for ReportingBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Consolidated => "consolidated",
            Self::Standalone => "standalone",
            Self::Unknown => "unknown",
        };
        write!(f, "{label}")
    }
}

/// One record of the registry directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Registry-assigned identifier.
    pub corp_code: CorpCode,
    /// Canonical company name as registered.
    pub corp_name: String,
}

impl DirectoryEntry {
    /// Creates a new directory entry.
    #[must_use]
    pub fn new(corp_code: impl Into<CorpCode>, corp_name: impl Into<String>) -> Self {
        Self {
            corp_code: corp_code.into(),
            corp_name: corp_name.into(),
        }
    }
}

/// A company name resolved against the registry directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCorp {
    /// The name as supplied by the caller.
    pub raw_name: String,
    /// Normalized comparison key of the raw name.
    pub normalized: String,
    /// The registry identifier the name resolved to.
    pub corp_code: CorpCode,
}

impl ResolvedCorp {
    /// Creates a resolved company, deriving the normalized key from the raw name.
    #[must_use]
    pub fn new(raw_name: impl Into<String>, corp_code: CorpCode) -> Self {
        let raw_name = raw_name.into();
        let normalized = normalize(&raw_name);
        Self {
            raw_name,
            normalized,
            corp_code,
        }
    }
}

/// A pointer to a specific filed document, used to locate its viewer page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingReference {
    /// Receipt number assigned to the filing.
    pub rcept_no: String,
    /// Filing title as listed in the disclosure system.
    pub report_nm: String,
    /// Filing date (`YYYYMMDD`), when known.
    pub rcept_dt: Option<String>,
}

impl FilingReference {
    /// Creates a new filing reference.
    #[must_use]
    pub fn new(rcept_no: impl Into<String>, report_nm: impl Into<String>) -> Self {
        Self {
            rcept_no: rcept_no.into(),
            report_nm: report_nm.into(),
            rcept_dt: None,
        }
    }

    /// Sets the filing date.
    #[must_use]
    pub fn with_date(mut self, rcept_dt: impl Into<String>) -> Self {
        self.rcept_dt = Some(rcept_dt.into());
        self
    }
}

/// The four canonical line items extracted from either retrieval path.
///
/// Amounts are kept verbatim as the source reports them (comma-grouped
/// strings); `None` is the explicit not-found sentinel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementFigures {
    /// Total equity (자본총계).
    pub capital_total: Option<String>,
    /// Total liabilities (부채총계).
    pub liabilities_total: Option<String>,
    /// Revenue (매출액 / 영업수익).
    pub revenue: Option<String>,
    /// Operating income (영업이익).
    pub operating_income: Option<String>,
    /// Which reporting basis produced the figures.
    pub basis: ReportingBasis,
}

impl StatementFigures {
    /// Creates an empty figure set with the given basis.
    #[must_use]
    pub const fn with_basis(basis: ReportingBasis) -> Self {
        Self {
            capital_total: None,
            liabilities_total: None,
            revenue: None,
            operating_income: None,
            basis,
        }
    }

    /// Returns true if at least one of the four figures was found.
    #[must_use]
    pub const fn any_found(&self) -> bool {
        self.capital_total.is_some()
            || self.liabilities_total.is_some()
            || self.revenue.is_some()
            || self.operating_income.is_some()
    }
}

/// Per-company output row of a batch lookup.
///
/// Exactly one record is produced for every input name, in input order,
/// whether or not the lookup succeeded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialRecord {
    /// Company label as supplied by the caller.
    pub company: String,
    /// Extracted figures; all `None` when the lookup failed.
    pub figures: StatementFigures,
    /// Human-readable cause when the lookup failed.
    pub error: Option<String>,
}

impl FinancialRecord {
    /// Creates a successful record.
    #[must_use]
    pub fn success(company: impl Into<String>, figures: StatementFigures) -> Self {
        Self {
            company: company.into(),
            figures,
            error: None,
        }
    }

    /// Creates a failed record carrying the cause string.
    #[must_use]
    pub fn failure(company: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            company: company.into(),
            figures: StatementFigures::default(),
            error: Some(error.to_string()),
        }
    }
}
