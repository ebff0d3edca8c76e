#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/dartlens/dartlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # Quick start
//!
//! ```no_run
//! use dartlens::{DartReader, ReportPeriod, to_csv};
//!
//! # async fn run() -> dartlens::Result<()> {
//! let reader = DartReader::new("my-api-key");
//! let names = ["(주)한국전자", "서울상사 주식회사"];
//!
//! let outcome = reader
//!     .fetch_structured_batch(&names, 2023, ReportPeriod::Annual)
//!     .await?;
//! println!("{}", to_csv(&outcome.records)?);
//! # Ok(())
//! # }
//! ```

mod export;
mod reader;

pub use dartlens_api::{DartProvider, DirectoryCache};
pub use dartlens_core::{
    CorpCode, CorpDirectory, DartError, DirectoryEntry, DirectoryProvider, FilingParser,
    FilingReference, FinancialRecord, ReportLocator, ReportPeriod, ReportingBasis, ResolvedCorp,
    Result, StatementFigures, StatementProvider, normalize, stripped_designators,
};
pub use dartlens_web::WebProvider;
pub use export::{MISSING_SENTINEL, to_csv};
pub use reader::{BatchOutcome, DartReader};
