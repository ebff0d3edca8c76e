//! CSV export of batch results.

use dartlens_core::{DartError, FinancialRecord, Result};

/// Cell value written when a figure was not found in the source material.
pub const MISSING_SENTINEL: &str = "없음";

const HEADER: [&str; 7] = [
    "사업자명",
    "자본총계",
    "부채총계",
    "매출액",
    "영업이익",
    "재무제표구분",
    "오류",
];

/// Renders batch records as a CSV document with a fixed column set.
///
/// Rows follow the input order of the batch. Figures that were not found
/// are written as [`MISSING_SENTINEL`]; the error column is empty for
/// successful records.
pub fn to_csv(records: &[FinancialRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(HEADER)
        .map_err(|e| DartError::Parse(format!("CSV write failed: {e}")))?;

    for record in records {
        let figures = &record.figures;
        writer
            .write_record([
                record.company.as_str(),
                cell(figures.capital_total.as_deref()),
                cell(figures.liabilities_total.as_deref()),
                cell(figures.revenue.as_deref()),
                cell(figures.operating_income.as_deref()),
                &figures.basis.to_string(),
                record.error.as_deref().unwrap_or(""),
            ])
            .map_err(|e| DartError::Parse(format!("CSV write failed: {e}")))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DartError::Parse(format!("CSV flush failed: {e}")))?;
    String::from_utf8(bytes).map_err(|e| DartError::Parse(format!("CSV not UTF-8: {e}")))
}

fn cell(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dartlens_core::{ReportingBasis, StatementFigures};

    fn sample_record() -> FinancialRecord {
        let mut figures = StatementFigures::with_basis(ReportingBasis::Consolidated);
        figures.capital_total = Some("1,000".to_string());
        figures.liabilities_total = Some("2,000".to_string());
        figures.revenue = Some("3,000".to_string());
        FinancialRecord::success("(주)한국전자", figures)
    }

    #[test]
    fn test_header_row() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(
            csv.lines().next().unwrap(),
            "사업자명,자본총계,부채총계,매출액,영업이익,재무제표구분,오류"
        );
    }

    #[test]
    fn test_missing_figure_rendered_as_sentinel() {
        let csv = to_csv(&[sample_record()]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "(주)한국전자,\"1,000\",\"2,000\",\"3,000\",없음,consolidated,");
    }

    #[test]
    fn test_error_record_row() {
        let record = FinancialRecord::failure("없는회사", "Company not found: 없는회사");
        let csv = to_csv(&[record]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "없는회사,없음,없음,없음,없음,unknown,Company not found: 없는회사"
        );
    }

    #[test]
    fn test_rows_follow_record_order() {
        let records = vec![
            FinancialRecord::failure("가나상사", "lookup failed"),
            sample_record(),
        ];
        let csv = to_csv(&records).unwrap();
        let mut lines = csv.lines().skip(1);
        assert!(lines.next().unwrap().starts_with("가나상사,"));
        assert!(lines.next().unwrap().starts_with("(주)한국전자,"));
    }
}
