//! # FinPulse Engine
//!
//! A library for normalizing heterogeneous financial statement exports
//! (CSV/Excel with inconsistent column naming) into canonical period
//! metrics, with deterministic what-if projection and AI-assisted health
//! assessment.
//!
//! ## Core Concepts
//!
//! - **Row Records**: decoded tabular rows with case-folded, trimmed column
//!   names and uncoerced scalar values
//! - **Schema Shape**: the detected column-presence pattern of an input,
//!   driving which aggregation rule applies (`amount`+`type`, `amount`-only,
//!   or unrecognized)
//! - **Canonical Metrics**: the `{revenue, expenses, net_profit, period}`
//!   record derived from arbitrary tabular input; `net_profit` is always
//!   computed, never read
//! - **Projection**: a pure, deterministic original/projected/deltas triple
//!   under fractional growth and cost modifiers
//! - **Assessment**: the narrative collaborator's verdict, degraded
//!   predictably when the collaborator is absent, slow, or unparseable
//!
//! ## Example
//!
//! ```rust
//! use finpulse_engine::*;
//!
//! let csv = b"date,amount,type\n2024-01-10,1000,Income\n2024-01-12,-500,Expense\n";
//! let metrics = ingest_statement(csv, "january.csv").unwrap();
//! assert_eq!(metrics.net_profit, metrics.revenue - metrics.expenses);
//!
//! let result = project(
//!     &metrics.snapshot(),
//!     &ScenarioModifiers { revenue_growth: 0.10, expense_change: 0.05 },
//! );
//! assert_eq!(result.deltas.revenue_change_percent, 10.0);
//! ```

pub mod aggregator;
pub mod assessment;
pub mod decoder;
pub mod error;
pub mod projection;
pub mod schema;

#[cfg(feature = "gemini")]
pub mod llm;

pub use aggregator::{aggregate, SchemaShape};
pub use assessment::{health_score, interpret_advisor_response, AdvisorOutcome};
pub use decoder::{decode, CellValue, FileFormat, RowRecord};
pub use error::{FinPulseError, Result};
pub use projection::project;
pub use schema::*;

#[cfg(feature = "gemini")]
pub use llm::{AdvisorConfig, FinancialAdvisor, GeminiClient};

use log::{debug, info};

pub struct StatementProcessor;

impl StatementProcessor {
    /// Runs the full ingestion pipeline: format detection, decoding, and
    /// metric aggregation. Fails fast on unsupported suffixes and
    /// undecodable bytes; everything past decoding degrades instead of
    /// failing.
    pub fn ingest(bytes: &[u8], filename: &str) -> Result<CanonicalMetrics> {
        let format = FileFormat::from_filename(filename)?;

        info!("Ingesting statement {} as {:?}", filename, format);

        let rows = decode(bytes, format)?;
        let metrics = aggregate(&rows);

        debug!(
            "Aggregated {} rows into revenue={} expenses={} net_profit={}",
            rows.len(),
            metrics.revenue,
            metrics.expenses,
            metrics.net_profit
        );

        Ok(metrics)
    }
}

pub fn ingest_statement(bytes: &[u8], filename: &str) -> Result<CanonicalMetrics> {
    StatementProcessor::ingest(bytes, filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_to_end_csv_ingestion() {
        let csv = b"Date,Amount,Type\n2024-01-05,1000,Income\n2024-01-09,-500,Expense\n";

        let metrics = ingest_statement(csv, "statement.csv").unwrap();
        assert_eq!(metrics.revenue, 1000.0);
        assert_eq!(metrics.expenses, 500.0);
        assert_eq!(metrics.net_profit, 500.0);
    }

    #[test]
    fn test_unsupported_suffix_fails_fast() {
        let err = ingest_statement(b"irrelevant", "statement.pdf").unwrap_err();
        assert!(matches!(err, FinPulseError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_header_only_csv_yields_zeroed_metrics() {
        let metrics = ingest_statement(b"date,amount,type\n", "empty.csv").unwrap();
        assert_eq!(metrics.revenue, 0.0);
        assert_eq!(metrics.expenses, 0.0);
        assert_eq!(metrics.net_profit, 0.0);
    }
}
