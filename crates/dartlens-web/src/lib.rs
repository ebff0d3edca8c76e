#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/dartlens/dartlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Web-discovery provider for audit-report figures.
//!
//! This crate implements the `dartlens-core` traits by scraping the public
//! DART site instead of calling the reporting API:
//!
//! - [`ReportLocator`]: search-page lookup keyed by company name
//! - [`FilingParser`]: viewer-page frame resolution, PDF download and
//!   keyword-proximity figure extraction
//!
//! # Example
//!
//! ```rust,ignore
//! use dartlens_web::WebProvider;
//! use dartlens_core::{FilingParser, ReportLocator, ResolvedCorp};
//!
//! #[tokio::main]
//! async fn main() -> dartlens_core::Result<()> {
//!     let provider = WebProvider::new();
//!
//!     let corp = ResolvedCorp::new("(주)한국전자", "00123456".into());
//!     let filing = provider.locate_audit_report(&corp).await?;
//!     let figures = provider.fetch_and_extract(&filing.rcept_no).await?;
//!     println!("자본총계: {:?}", figures.capital_total);
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, warn};

use dartlens_core::{
    DartError, FilingParser, FilingReference, ReportLocator, ReportingBasis, ResolvedCorp, Result,
    StatementFigures, normalize,
};

/// Public DART site base URL.
const DART_WEB_BASE_URL: &str = "https://dart.fss.or.kr";

/// Company-name search endpoint.
const SEARCH_PATH: &str = "/dsap001/search.ax";

/// Document viewer page for a receipt number.
const VIEWER_PATH: &str = "/dsaf001/main.do";

/// Word-root marking a result row as an audit report.
const AUDIT_KEYWORD: &str = "감사";

/// Maximum characters allowed between a keyword and its numeric token.
const PROXIMITY_WINDOW: usize = 20;

/// Bounded timeout applied to every outbound request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The four canonical keywords searched for in audit-report text.
pub const EXTRACTION_KEYWORDS: [&str; 4] = ["자본총계", "부채총계", "매출액", "영업이익"];

static RCEPT_NO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rcpNo=(\d+)").expect("static pattern"));

/// One proximity pattern per canonical keyword, compiled once.
static FIGURE_PATTERNS: LazyLock<HashMap<&'static str, Regex>> = LazyLock::new(|| {
    EXTRACTION_KEYWORDS
        .iter()
        .map(|&keyword| {
            let pattern = format!(
                "{}.{{0,{PROXIMITY_WINDOW}}}?([0-9][0-9,]*)",
                regex::escape(keyword)
            );
            (keyword, Regex::new(&pattern).expect("static pattern"))
        })
        .collect()
});

/// Web-discovery provider scraping the public DART site.
#[derive(Debug, Clone)]
pub struct WebProvider {
    client: reqwest::Client,
}

impl WebProvider {
    /// Creates a new provider with a default HTTP client.
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");
        Self::with_client(client)
    }

    /// Creates a new provider with a custom HTTP client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetches a page and returns its body text.
    async fn fetch_html(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        debug!("DART web request: {}", url);
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| DartError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DartError::Network(format!(
                "HTTP {} from {url}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| DartError::Network(e.to_string()))
    }

    /// Resolves a receipt number to the URL of its filed PDF document.
    async fn resolve_document_url(&self, rcept_no: &str) -> Result<String> {
        let viewer_url = format!("{DART_WEB_BASE_URL}{VIEWER_PATH}");
        let html = self.fetch_html(&viewer_url, &[("rcpNo", rcept_no)]).await?;

        parse_viewer_frame(&html).ok_or_else(|| {
            DartError::LinkNotFound(format!("viewer page for {rcept_no} has no document frame"))
        })
    }

    /// Downloads the document, verifying the response actually is a PDF.
    async fn download_document(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Downloading document: {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DartError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DartError::DownloadFailed(format!(
                "HTTP {} from {url}",
                response.status()
            )));
        }

        // An HTML error page instead of the file is the common failure mode.
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.contains("pdf") {
            return Err(DartError::NotADocument(format!(
                "expected a PDF, got content-type {content_type:?}"
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DartError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

impl Default for WebProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportLocator for WebProvider {
    async fn locate_audit_report(&self, corp: &ResolvedCorp) -> Result<FilingReference> {
        let search_url = format!("{DART_WEB_BASE_URL}{SEARCH_PATH}");
        let html = self
            .fetch_html(&search_url, &[("textCrpNm", corp.raw_name.as_str())])
            .await?;

        match parse_search_results(&html, &corp.normalized) {
            Some(filing) => {
                debug!(rcept_no = %filing.rcept_no, "Located audit report via web search");
                Ok(filing)
            }
            None => {
                warn!(company = %corp.raw_name, "No matching audit report in search results");
                Err(DartError::FilingNotFound(format!(
                    "no search result titled with '{AUDIT_KEYWORD}' matches {}",
                    corp.raw_name
                )))
            }
        }
    }
}

#[async_trait]
impl FilingParser for WebProvider {
    async fn fetch_and_extract(&self, rcept_no: &str) -> Result<StatementFigures> {
        let document_url = self.resolve_document_url(rcept_no).await?;
        let bytes = self.download_document(&document_url).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| DartError::Parse(format!("failed to extract document text: {e}")))?;

        let figures = extract_figures(&text);
        if !figures.any_found() {
            return Err(DartError::NoFinancialData(format!(
                "none of the canonical keywords found in document {rcept_no}"
            )));
        }
        Ok(figures)
    }
}

/// Parses search-result rows, returning the first audit-report filing whose
/// company cell matches the normalized query name.
///
/// A row qualifies when its link href carries a receipt number, its link
/// text contains the audit keyword, and the normalized text of the nearest
/// preceding table cell contains the normalized query.
fn parse_search_results(html: &str, normalized_name: &str) -> Option<FilingReference> {
    if normalized_name.is_empty() {
        return None;
    }
    let anchor_selector = Selector::parse("a[href*='rcpNo']").ok()?;
    let document = Html::parse_document(html);

    for anchor in document.select(&anchor_selector) {
        let title = anchor.text().collect::<String>().trim().to_string();
        if !title.contains(AUDIT_KEYWORD) {
            continue;
        }
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Some(rcept_no) = extract_rcept_no(href) else {
            continue;
        };

        // Company name sits in the cell preceding the link's cell.
        let Some(link_cell) = anchor
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|element| element.value().name() == "td")
        else {
            continue;
        };
        let Some(company_cell) = link_cell
            .prev_siblings()
            .filter_map(ElementRef::wrap)
            .find(|element| element.value().name() == "td")
        else {
            continue;
        };

        let listed_name = company_cell.text().collect::<String>();
        if normalize(&listed_name).contains(normalized_name) {
            return Some(FilingReference::new(rcept_no, title));
        }
    }

    None
}

/// Extracts the receipt-number parameter from a filing link href.
fn extract_rcept_no(href: &str) -> Option<String> {
    RCEPT_NO_RE
        .captures(href)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Locates the embedded document frame on a viewer page.
fn parse_viewer_frame(html: &str) -> Option<String> {
    let frame_selector = Selector::parse("iframe#pdf").ok()?;
    let document = Html::parse_document(html);

    let src = document
        .select(&frame_selector)
        .next()?
        .value()
        .attr("src")?;

    if src.starts_with("http") {
        Some(src.to_string())
    } else if src.starts_with('/') {
        Some(format!("{DART_WEB_BASE_URL}{src}"))
    } else {
        Some(format!("{DART_WEB_BASE_URL}/{src}"))
    }
}

/// Extracts the four canonical figures from document text.
///
/// Each keyword is searched independently; partial extraction is a valid
/// outcome and missing figures stay `None`. The basis of scraped figures is
/// unknowable from the flat text.
#[must_use]
pub fn extract_figures(text: &str) -> StatementFigures {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let mut figures = StatementFigures::with_basis(ReportingBasis::Unknown);
    figures.capital_total = find_near_keyword(&compact, "자본총계");
    figures.liabilities_total = find_near_keyword(&compact, "부채총계");
    figures.revenue = find_near_keyword(&compact, "매출액");
    figures.operating_income = find_near_keyword(&compact, "영업이익");
    figures
}

/// Finds the first numeric token within the proximity window after one of
/// the canonical keywords.
///
/// The haystack is expected to have whitespace already removed; the keyword
/// is matched verbatim.
fn find_near_keyword(compact_text: &str, keyword: &str) -> Option<String> {
    FIGURE_PATTERNS
        .get(keyword)?
        .captures(compact_text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim_end_matches(',').to_string())
}
