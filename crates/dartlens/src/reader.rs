//! Batch orchestration over injectable providers.

use std::fmt;
use std::sync::Arc;

use tracing::{info, warn};

use dartlens_api::DartProvider;
use dartlens_core::{
    DartError, DirectoryProvider, FilingParser, FinancialRecord, ReportLocator, ReportPeriod,
    ResolvedCorp, Result, StatementFigures, StatementProvider, stripped_designators,
};
use dartlens_web::WebProvider;

/// Result of a batch lookup.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// One record per input name, in input order.
    pub records: Vec<FinancialRecord>,
    /// Distinct designator tokens stripped across all input names
    /// (diagnostic, for caller display).
    pub stripped_designators: Vec<&'static str>,
}

/// Batch reader wiring the pipeline together.
///
/// Holds one provider per seam so either retrieval path can be swapped or
/// faked: directory access, structured statements, filing discovery, and
/// document parsing. Companies are processed sequentially in input order;
/// each company's failure is isolated into its own record and only a
/// directory-load failure aborts a batch.
#[derive(Clone)]
pub struct DartReader {
    directory: Arc<dyn DirectoryProvider>,
    statements: Arc<dyn StatementProvider>,
    locator: Arc<dyn ReportLocator>,
    parser: Arc<dyn FilingParser>,
}

impl fmt::Debug for DartReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DartReader").finish_non_exhaustive()
    }
}

impl DartReader {
    /// Creates a reader backed by the structured Open DART API, with the
    /// public web site used for document download and extraction.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        let api = Arc::new(DartProvider::new(api_key));
        let web = Arc::new(WebProvider::new());
        Self {
            directory: api.clone(),
            statements: api.clone(),
            locator: api,
            parser: web,
        }
    }

    /// Swaps filing discovery to the web-search variant, for filings the
    /// disclosure-list API does not carry.
    #[must_use]
    pub fn with_web_locator(mut self) -> Self {
        self.locator = Arc::new(WebProvider::new());
        self
    }

    /// Creates a reader from explicit providers.
    #[must_use]
    pub fn with_providers(
        directory: Arc<dyn DirectoryProvider>,
        statements: Arc<dyn StatementProvider>,
        locator: Arc<dyn ReportLocator>,
        parser: Arc<dyn FilingParser>,
    ) -> Self {
        Self {
            directory,
            statements,
            locator,
            parser,
        }
    }

    /// Resolves each input name and fetches its figures from the structured
    /// financial-statement API.
    ///
    /// Returns one record per input name, in input order. Fails only if the
    /// registry directory itself cannot be loaded.
    pub async fn fetch_structured_batch<S: AsRef<str>>(
        &self,
        names: &[S],
        year: u16,
        period: ReportPeriod,
    ) -> Result<BatchOutcome> {
        let directory = self.directory.directory().await?;
        let mut outcome = BatchOutcome::default();
        let total = names.len();

        for (index, name) in names.iter().enumerate() {
            let raw = name.as_ref();
            outcome.note_designators(raw);

            let record = match directory.resolve(raw) {
                None => not_found_record(raw),
                Some(corp_code) => {
                    match self.statements.fetch_statement(corp_code, year, period).await {
                        Ok(figures) => FinancialRecord::success(raw, figures),
                        Err(e) => {
                            warn!(company = raw, error = %e, "Statement fetch failed");
                            FinancialRecord::failure(raw, e)
                        }
                    }
                }
            };

            outcome.records.push(record);
            log_progress(index, total, raw);
        }

        Ok(outcome)
    }

    /// Resolves each input name, locates its most recent audit report, and
    /// extracts figures from the filed document.
    ///
    /// Returns one record per input name, in input order. Fails only if the
    /// registry directory itself cannot be loaded.
    pub async fn fetch_filing_batch<S: AsRef<str>>(&self, names: &[S]) -> Result<BatchOutcome> {
        let directory = self.directory.directory().await?;
        let mut outcome = BatchOutcome::default();
        let total = names.len();

        for (index, name) in names.iter().enumerate() {
            let raw = name.as_ref();
            outcome.note_designators(raw);

            let record = match directory.resolve(raw) {
                None => not_found_record(raw),
                Some(corp_code) => {
                    let corp = ResolvedCorp::new(raw, corp_code.clone());
                    match self.locate_and_extract(&corp).await {
                        Ok(figures) => FinancialRecord::success(raw, figures),
                        Err(e) => {
                            warn!(company = raw, error = %e, "Filing lookup failed");
                            FinancialRecord::failure(raw, e)
                        }
                    }
                }
            };

            outcome.records.push(record);
            log_progress(index, total, raw);
        }

        Ok(outcome)
    }

    async fn locate_and_extract(&self, corp: &ResolvedCorp) -> Result<StatementFigures> {
        let filing = self.locator.locate_audit_report(corp).await?;
        self.parser.fetch_and_extract(&filing.rcept_no).await
    }
}

impl BatchOutcome {
    fn note_designators(&mut self, raw_name: &str) {
        for token in stripped_designators(raw_name) {
            if !self.stripped_designators.contains(&token) {
                self.stripped_designators.push(token);
            }
        }
    }
}

fn not_found_record(raw_name: &str) -> FinancialRecord {
    warn!(company = raw_name, "Company not found in registry directory");
    FinancialRecord::failure(raw_name, DartError::CorpNotFound(raw_name.to_string()))
}

fn log_progress(index: usize, total: usize, company: &str) {
    info!(
        processed = index + 1,
        remaining = total - index - 1,
        company,
        "Processed company"
    );
}
