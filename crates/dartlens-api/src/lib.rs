#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/dartlens/dartlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Open DART structured API provider.
//!
//! This crate implements the `dartlens-core` traits against the official
//! reporting API:
//!
//! - Registry directory download (compressed corp-code archive) and decoding
//! - Financial-statement queries with consolidated→standalone fallback
//! - Audit-report discovery through the paginated disclosure list
//!
//! # Example
//!
//! ```rust,ignore
//! use dartlens_api::DartProvider;
//! use dartlens_core::{DirectoryProvider, StatementProvider, ReportPeriod};
//!
//! #[tokio::main]
//! async fn main() -> dartlens_core::Result<()> {
//!     let provider = DartProvider::new("your_api_key");
//!
//!     let directory = provider.directory().await?;
//!     let corp_code = directory.resolve("(주)한국전자").cloned().unwrap();
//!
//!     let figures = provider
//!         .fetch_statement(&corp_code, 2023, ReportPeriod::Annual)
//!         .await?;
//!     println!("자본총계: {:?} ({})", figures.capital_total, figures.basis);
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use std::fmt;
use std::future::Future;
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use dartlens_core::{
    CorpCode, CorpDirectory, DartError, DirectoryEntry, DirectoryProvider, FilingReference,
    ReportLocator, ReportPeriod, ReportingBasis, ResolvedCorp, Result, StatementFigures,
    StatementProvider,
};

/// TTL cache for the decoded registry directory.
pub mod cache;

pub use cache::{DEFAULT_DIRECTORY_TTL, DirectoryCache};

/// Open DART API base URL.
const DART_BASE_URL: &str = "https://opendart.fss.or.kr/api";

/// Status code the API reports on success.
const STATUS_OK: &str = "000";

/// Status code the API reports when the key's daily quota is exhausted.
const STATUS_QUOTA_EXCEEDED: &str = "020";

/// Entries requested per disclosure-list page (API maximum).
const LIST_PAGE_SIZE: u32 = 100;

/// Word-root marking a filing title as an audit report.
const AUDIT_KEYWORD: &str = "감사";

/// Name of the structured-data document inside the directory archive.
const CORP_INDEX_FILE: &str = "CORPCODE.xml";

/// Bounded timeout applied to every outbound request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Open DART data provider.
///
/// Holds the API key, an HTTP client with a bounded request timeout, and the
/// TTL-guarded directory cache shared by all lookups made through this
/// provider instance.
pub struct DartProvider {
    client: reqwest::Client,
    api_key: String,
    directory_cache: DirectoryCache,
}

impl fmt::Debug for DartProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DartProvider")
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl DartProvider {
    /// Creates a new provider with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");
        Self::with_client(client, api_key)
    }

    /// Creates a new provider with a custom HTTP client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            directory_cache: DirectoryCache::default(),
        }
    }

    /// Overrides the directory cache validity window (default one hour).
    #[must_use]
    pub fn with_directory_ttl(mut self, ttl: Duration) -> Self {
        self.directory_cache = DirectoryCache::new(ttl);
        self
    }

    /// Builds a URL with the API key appended.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{DART_BASE_URL}/{endpoint}&crtfc_key={}", self.api_key)
        } else {
            format!("{DART_BASE_URL}/{endpoint}?crtfc_key={}", self.api_key)
        }
    }

    /// Makes a GET request and parses the JSON response.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);
        debug!("DART request: {}", endpoint);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DartError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DartError::Network(format!("HTTP {status}: {text}")));
        }

        let text = response
            .text()
            .await
            .map_err(|e| DartError::Network(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| DartError::Parse(format!("{e}: {text}")))
    }

    /// Downloads the compressed registry directory archive.
    async fn fetch_directory_archive(&self) -> Result<Vec<u8>> {
        let url = self.url("corpCode.xml");
        debug!("Fetching registry directory archive");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DartError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DartError::Network(format!(
                "Failed to fetch registry directory: HTTP {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DartError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    /// Fetches and decodes the full registry directory.
    async fn load_directory(&self) -> Result<CorpDirectory> {
        let archive = self.fetch_directory_archive().await?;
        let entries = decode_directory(&archive)?;
        let directory = CorpDirectory::from_entries(entries);
        debug!(companies = directory.len(), "Decoded registry directory");
        Ok(directory)
    }

    /// Queries the financial-statement endpoint for one reporting basis.
    async fn fetch_single_basis(
        &self,
        corp_code: &CorpCode,
        year: u16,
        period: ReportPeriod,
        basis: ReportingBasis,
    ) -> Result<Vec<FnlttAccount>> {
        let fs_div = basis
            .fs_div()
            .ok_or_else(|| DartError::InvalidParameter(format!("no fs_div for basis {basis}")))?;

        let endpoint = format!(
            "fnlttSinglAcnt.json?corp_code={}&bsns_year={year}&reprt_code={}&fs_div={fs_div}",
            corp_code.as_str(),
            period.code(),
        );
        let response: FnlttResponse = self.get_json(&endpoint).await?;

        if response.status == STATUS_QUOTA_EXCEEDED {
            return Err(DartError::RateLimited(response.message));
        }
        if response.status != STATUS_OK {
            return Err(DartError::NoFinancialData(format!(
                "status {}: {}",
                response.status, response.message
            )));
        }

        Ok(response.list.unwrap_or_default())
    }
}

#[async_trait]
impl DirectoryProvider for DartProvider {
    async fn directory(&self) -> Result<Arc<CorpDirectory>> {
        self.directory_cache
            .get_or_load(|| self.load_directory())
            .await
    }
}

#[async_trait]
impl StatementProvider for DartProvider {
    async fn fetch_statement(
        &self,
        corp_code: &CorpCode,
        year: u16,
        period: ReportPeriod,
    ) -> Result<StatementFigures> {
        let (basis, items) = first_successful_basis(|basis| {
            self.fetch_single_basis(corp_code, year, period, basis)
        })
        .await?;

        Ok(classify_accounts(&items, basis))
    }
}

#[async_trait]
impl ReportLocator for DartProvider {
    async fn locate_audit_report(&self, corp: &ResolvedCorp) -> Result<FilingReference> {
        let filing = page_through_filings(|page_no| {
            let endpoint = format!(
                "list.json?corp_code={}&page_no={page_no}&page_count={LIST_PAGE_SIZE}",
                corp.corp_code.as_str()
            );
            async move {
                let response: ListResponse = self.get_json(&endpoint).await?;
                if response.status == STATUS_QUOTA_EXCEEDED {
                    return Err(DartError::RateLimited(response.message));
                }
                if response.status != STATUS_OK {
                    return Err(DartError::FilingNotFound(format!(
                        "{}: status {}: {}",
                        corp.raw_name, response.status, response.message
                    )));
                }
                Ok(response)
            }
        })
        .await?;

        match filing {
            Some(filing) => {
                debug!(rcept_no = %filing.rcept_no, "Located audit report");
                Ok(filing)
            }
            None => Err(DartError::FilingNotFound(format!(
                "no filing titled with '{AUDIT_KEYWORD}' for {}",
                corp.raw_name
            ))),
        }
    }
}

/// Tries the reporting-basis variants in fallback order, returning the first
/// successful response together with the basis that produced it.
///
/// Quota exhaustion is surfaced immediately; retrying with another basis
/// cannot succeed once the key is spent.
async fn first_successful_basis<F, Fut>(
    mut attempt: F,
) -> Result<(ReportingBasis, Vec<FnlttAccount>)>
where
    F: FnMut(ReportingBasis) -> Fut,
    Fut: Future<Output = Result<Vec<FnlttAccount>>>,
{
    let mut last_error = None;
    for basis in ReportingBasis::FALLBACK_ORDER {
        match attempt(basis).await {
            Ok(items) => return Ok((basis, items)),
            Err(e @ DartError::RateLimited(_)) => return Err(e),
            Err(e) => {
                warn!(%basis, error = %e, "Reporting basis failed, trying next");
                last_error = Some(e);
            }
        }
    }

    Err(DartError::NoFinancialData(match last_error {
        Some(e) => format!("all reporting bases failed, last: {e}"),
        None => "all reporting bases failed".to_string(),
    }))
}

/// Classifies response line items into the four canonical buckets.
///
/// Substring containment against the account name; the first item in
/// response order wins per bucket, later matches are ignored. Items with an
/// empty amount never fill a bucket.
fn classify_accounts(items: &[FnlttAccount], basis: ReportingBasis) -> StatementFigures {
    let mut figures = StatementFigures::with_basis(basis);

    for item in items {
        let amount = item.thstrm_amount.trim();
        if amount.is_empty() {
            continue;
        }
        let name = item.account_nm.as_str();

        if figures.capital_total.is_none() && name.contains("자본총계") {
            figures.capital_total = Some(amount.to_string());
        } else if figures.liabilities_total.is_none() && name.contains("부채총계") {
            figures.liabilities_total = Some(amount.to_string());
        } else if figures.revenue.is_none()
            && (name.contains("매출액") || name.contains("영업수익"))
        {
            figures.revenue = Some(amount.to_string());
        } else if figures.operating_income.is_none() && name.contains("영업이익") {
            figures.operating_income = Some(amount.to_string());
        }
    }

    figures
}

/// Pages through disclosure-list responses until an audit filing turns up
/// or the listing is exhausted.
///
/// Pages are fetched starting from 1 and never beyond the `total_page` the
/// response reports (absent in error payloads, defaulting to 0, so a single
/// page is fetched at minimum). Fetch errors abort the walk.
async fn page_through_filings<F, Fut>(mut fetch_page: F) -> Result<Option<FilingReference>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<ListResponse>>,
{
    let mut page_no = 1u32;
    loop {
        let response = fetch_page(page_no).await?;

        // The list is ordered most recent first, so the first title match
        // is the latest audit report.
        if let Some(filing) = find_audit_filing(&response.list) {
            return Ok(Some(filing));
        }

        if page_no >= response.total_page {
            return Ok(None);
        }
        page_no += 1;
    }
}

/// Returns the first disclosure-list entry titled as an audit report.
fn find_audit_filing(entries: &[ListItem]) -> Option<FilingReference> {
    entries
        .iter()
        .find(|entry| entry.report_nm.contains(AUDIT_KEYWORD))
        .map(|entry| {
            let filing = FilingReference::new(&entry.rcept_no, &entry.report_nm);
            match entry.rcept_dt.as_ref() {
                Some(date) => filing.with_date(date),
                None => filing,
            }
        })
}

/// Decodes the registry directory archive into directory entries.
///
/// The payload is a ZIP archive holding one XML document; records missing
/// either the identifier or the name are dropped silently since registry
/// data is not guaranteed fully populated.
fn decode_directory(archive: &[u8]) -> Result<Vec<DirectoryEntry>> {
    let cursor = std::io::Cursor::new(archive);
    let mut zip = zip::ZipArchive::new(cursor)
        .map_err(|e| DartError::Format(format!("directory payload is not a valid archive: {e}")))?;

    let mut index_file = zip
        .by_name(CORP_INDEX_FILE)
        .map_err(|e| DartError::Format(format!("{CORP_INDEX_FILE} missing from archive: {e}")))?;

    let mut xml = String::new();
    index_file
        .read_to_string(&mut xml)
        .map_err(|e| DartError::Format(format!("failed to read {CORP_INDEX_FILE}: {e}")))?;

    let index: CorpIndex = quick_xml::de::from_str(&xml)
        .map_err(|e| DartError::Format(format!("malformed {CORP_INDEX_FILE}: {e}")))?;

    Ok(index
        .list
        .into_iter()
        .filter_map(|record| match (record.corp_code, record.corp_name) {
            (Some(code), Some(name)) if !code.trim().is_empty() && !name.trim().is_empty() => {
                Some(DirectoryEntry::new(code, name))
            }
            _ => None,
        })
        .collect())
}

// =============================================================================
// Open DART API Response Types
// =============================================================================

/// Root of the corp-code index XML document.
#[derive(Debug, Deserialize)]
struct CorpIndex {
    #[serde(default)]
    list: Vec<CorpIndexRecord>,
}

/// One record element of the corp-code index.
#[derive(Debug, Deserialize)]
struct CorpIndexRecord {
    #[serde(default)]
    corp_code: Option<String>,
    #[serde(default)]
    corp_name: Option<String>,
}

/// Response from the financial-statement endpoint.
#[derive(Debug, Deserialize)]
struct FnlttResponse {
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    list: Option<Vec<FnlttAccount>>,
}

/// One line item of a financial-statement response.
#[derive(Debug, Clone, Deserialize)]
struct FnlttAccount {
    /// Account name (e.g. "자본총계").
    account_nm: String,
    /// Current-period amount, comma-grouped string form.
    #[serde(default)]
    thstrm_amount: String,
}

/// Response from the disclosure-list endpoint.
#[derive(Debug, Deserialize)]
struct ListResponse {
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    total_page: u32,
    #[serde(default)]
    list: Vec<ListItem>,
}

/// One filing entry of a disclosure-list response.
#[derive(Debug, Clone, Deserialize)]
struct ListItem {
    rcept_no: String,
    report_nm: String,
    #[serde(default)]
    rcept_dt: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn account(name: &str, amount: &str) -> FnlttAccount {
        FnlttAccount {
            account_nm: name.to_string(),
            thstrm_amount: amount.to_string(),
        }
    }

    #[test]
    fn test_url_building() {
        let provider = DartProvider::new("test_key");
        assert_eq!(
            provider.url("list.json?corp_code=00123456"),
            "https://opendart.fss.or.kr/api/list.json?corp_code=00123456&crtfc_key=test_key"
        );
        assert_eq!(
            provider.url("corpCode.xml"),
            "https://opendart.fss.or.kr/api/corpCode.xml?crtfc_key=test_key"
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let provider = DartProvider::new("secret_key_12345");
        let debug_str = format!("{provider:?}");
        assert!(!debug_str.contains("secret_key_12345"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_classify_single_capital_item() {
        let items = vec![account("자본총계", "500")];
        let figures = classify_accounts(&items, ReportingBasis::Consolidated);

        assert_eq!(figures.capital_total.as_deref(), Some("500"));
        assert_eq!(figures.liabilities_total, None);
        assert_eq!(figures.revenue, None);
        assert_eq!(figures.operating_income, None);
        assert_eq!(figures.basis, ReportingBasis::Consolidated);
    }

    #[test]
    fn test_classify_all_buckets() {
        let items = vec![
            account("자본총계", "1,000"),
            account("부채총계", "2,000"),
            account("매출액", "3,000"),
            account("영업이익", "400"),
        ];
        let figures = classify_accounts(&items, ReportingBasis::Standalone);

        assert_eq!(figures.capital_total.as_deref(), Some("1,000"));
        assert_eq!(figures.liabilities_total.as_deref(), Some("2,000"));
        assert_eq!(figures.revenue.as_deref(), Some("3,000"));
        assert_eq!(figures.operating_income.as_deref(), Some("400"));
    }

    #[test]
    fn test_classify_first_match_wins() {
        let items = vec![
            account("자본총계", "1,000"),
            account("지배기업소유주지분 자본총계", "900"),
        ];
        let figures = classify_accounts(&items, ReportingBasis::Consolidated);
        assert_eq!(figures.capital_total.as_deref(), Some("1,000"));
    }

    #[test]
    fn test_classify_revenue_roots() {
        let items = vec![account("영업수익", "7,700")];
        let figures = classify_accounts(&items, ReportingBasis::Consolidated);
        assert_eq!(figures.revenue.as_deref(), Some("7,700"));
    }

    #[test]
    fn test_classify_skips_empty_amounts() {
        let items = vec![account("자본총계", " "), account("자본총계", "500")];
        let figures = classify_accounts(&items, ReportingBasis::Consolidated);
        assert_eq!(figures.capital_total.as_deref(), Some("500"));
    }

    #[tokio::test]
    async fn test_fallback_to_standalone() {
        let (basis, items) = first_successful_basis(|basis| async move {
            match basis {
                ReportingBasis::Consolidated => {
                    Err(DartError::NoFinancialData("status 013".to_string()))
                }
                _ => Ok(vec![account("자본총계", "500")]),
            }
        })
        .await
        .unwrap();

        assert_eq!(basis, ReportingBasis::Standalone);
        assert_eq!(items.len(), 1);
    }

    #[tokio::test]
    async fn test_consolidated_preferred_when_available() {
        let (basis, _) =
            first_successful_basis(|_| async { Ok(vec![account("자본총계", "500")]) })
                .await
                .unwrap();
        assert_eq!(basis, ReportingBasis::Consolidated);
    }

    #[tokio::test]
    async fn test_both_bases_failing_reports_no_data() {
        let result = first_successful_basis(|_| async {
            Err(DartError::NoFinancialData("status 013".to_string()))
        })
        .await;

        assert!(matches!(result, Err(DartError::NoFinancialData(_))));
    }

    #[tokio::test]
    async fn test_quota_exhaustion_stops_fallback() {
        let result = first_successful_basis(|_| async {
            Err(DartError::RateLimited("limit exceeded".to_string()))
        })
        .await;

        assert!(matches!(result, Err(DartError::RateLimited(_))));
    }

    #[test]
    fn test_find_audit_filing() {
        let entries = vec![
            ListItem {
                rcept_no: "20240401000001".to_string(),
                report_nm: "사업보고서 (2023.12)".to_string(),
                rcept_dt: Some("20240401".to_string()),
            },
            ListItem {
                rcept_no: "20240315000002".to_string(),
                report_nm: "감사보고서 (2023.12)".to_string(),
                rcept_dt: Some("20240315".to_string()),
            },
        ];

        let filing = find_audit_filing(&entries).unwrap();
        assert_eq!(filing.rcept_no, "20240315000002");
        assert_eq!(filing.rcept_dt.as_deref(), Some("20240315"));

        assert!(find_audit_filing(&entries[..1]).is_none());
    }

    fn listing(total_page: u32, entries: Vec<ListItem>) -> ListResponse {
        ListResponse {
            status: STATUS_OK.to_string(),
            message: String::new(),
            total_page,
            list: entries,
        }
    }

    fn filing_item(rcept_no: &str, report_nm: &str) -> ListItem {
        ListItem {
            rcept_no: rcept_no.to_string(),
            report_nm: report_nm.to_string(),
            rcept_dt: None,
        }
    }

    #[tokio::test]
    async fn test_paging_advances_until_audit_found() {
        let fetched = std::sync::Mutex::new(Vec::new());

        let filing = page_through_filings(|page_no| {
            fetched.lock().unwrap().push(page_no);
            let response = match page_no {
                1 => listing(3, vec![filing_item("20240401000001", "사업보고서 (2023.12)")]),
                2 => listing(3, vec![filing_item("20240315000002", "감사보고서 (2023.12)")]),
                _ => listing(3, vec![]),
            };
            async move { Ok(response) }
        })
        .await
        .unwrap();

        assert_eq!(filing.unwrap().rcept_no, "20240315000002");
        assert_eq!(*fetched.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_paging_stops_at_total_page() {
        let fetched = std::sync::Mutex::new(Vec::new());

        let filing = page_through_filings(|page_no| {
            fetched.lock().unwrap().push(page_no);
            let response = listing(2, vec![filing_item("20240401000001", "사업보고서")]);
            async move { Ok(response) }
        })
        .await
        .unwrap();

        assert!(filing.is_none());
        assert_eq!(*fetched.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_paging_defaulted_total_page_fetches_once() {
        // Payloads without total_page deserialize to 0
        let fetched = std::sync::Mutex::new(Vec::new());

        let filing = page_through_filings(|page_no| {
            fetched.lock().unwrap().push(page_no);
            async move { Ok(listing(0, vec![])) }
        })
        .await
        .unwrap();

        assert!(filing.is_none());
        assert_eq!(*fetched.lock().unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn test_paging_aborts_on_quota_exhaustion() {
        let fetched = std::sync::Mutex::new(Vec::new());

        let result = page_through_filings(|page_no| {
            fetched.lock().unwrap().push(page_no);
            async move {
                match page_no {
                    1 => Ok(listing(5, vec![filing_item("20240401000001", "사업보고서")])),
                    _ => Err(DartError::RateLimited("limit exceeded".to_string())),
                }
            }
        })
        .await;

        assert!(matches!(result, Err(DartError::RateLimited(_))));
        assert_eq!(*fetched.lock().unwrap(), vec![1, 2]);
    }

    fn corp_index_archive(xml: &str) -> Vec<u8> {
        let mut cursor = std::io::Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .start_file(CORP_INDEX_FILE, zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.write_all(xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    const SAMPLE_INDEX: &str = "<result>\
        <list><corp_code>00123456</corp_code><corp_name>한국전자</corp_name>\
        <stock_code> </stock_code><modify_date>20240101</modify_date></list>\
        <list><corp_code>00777777</corp_code><corp_name>서울상사</corp_name>\
        <stock_code> </stock_code><modify_date>20240101</modify_date></list>\
        <list><corp_code>00999999</corp_code><modify_date>20240101</modify_date></list>\
        </result>";

    #[test]
    fn test_decode_directory() {
        let archive = corp_index_archive(SAMPLE_INDEX);
        let entries = decode_directory(&archive).unwrap();

        // The record without a corp_name is dropped silently
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].corp_code, CorpCode::new("00123456"));
        assert_eq!(entries[0].corp_name, "한국전자");
    }

    #[test]
    fn test_decode_directory_resolves_designator_name() {
        let archive = corp_index_archive(SAMPLE_INDEX);
        let directory = CorpDirectory::from_entries(decode_directory(&archive).unwrap());
        assert_eq!(
            directory.resolve("(주)한국전자"),
            Some(&CorpCode::new("00123456"))
        );
    }

    #[test]
    fn test_decode_directory_rejects_non_archive() {
        let result = decode_directory(b"this is not a zip archive");
        assert!(matches!(result, Err(DartError::Format(_))));
    }

    #[test]
    fn test_decode_directory_rejects_missing_index() {
        let mut cursor = std::io::Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .start_file("OTHER.xml", zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.write_all(b"<result/>").unwrap();
            writer.finish().unwrap();
        }

        let result = decode_directory(&cursor.into_inner());
        assert!(matches!(result, Err(DartError::Format(_))));
    }

    #[test]
    fn test_decode_directory_rejects_malformed_xml() {
        let archive = corp_index_archive("<result><list><corp_code>");
        let result = decode_directory(&archive);
        assert!(matches!(result, Err(DartError::Format(_))));
    }
}
