use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The normalized metrics record derived from one ingested statement.
///
/// `net_profit` is always computed as `revenue - expenses`, never read from
/// input data. Period bounds are stamped with the ingestion time; real period
/// inference from the data is not implemented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalMetrics {
    pub revenue: f64,
    pub expenses: f64,
    pub net_profit: f64,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
}

impl CanonicalMetrics {
    pub fn zeroed(stamp: DateTime<Utc>) -> Self {
        Self {
            revenue: 0.0,
            expenses: 0.0,
            net_profit: 0.0,
            period_start: stamp,
            period_end: stamp,
        }
    }

    /// The dateless revenue/expenses/profit triple used by projections.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            revenue: self.revenue,
            expenses: self.expenses,
            net_profit: self.net_profit,
        }
    }
}

/// A bare revenue/expenses/profit triple.
///
/// All fields default to 0.0 so that map-shaped callers (e.g. a simulation
/// request built from JSON) may omit any of them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsSnapshot {
    pub revenue: f64,
    pub expenses: f64,
    pub net_profit: f64,
}

/// Fractional growth/shrink rates applied to a base metric in a projection.
/// `0.10` means +10%, `-0.05` means -5%. Missing fields mean "no change".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioModifiers {
    pub revenue_growth: f64,
    pub expense_change: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionDeltas {
    pub revenue_change_percent: f64,
    pub expense_change_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub original: MetricsSnapshot,
    pub projected: MetricsSnapshot,
    pub deltas: ProjectionDeltas,
}

/// Caller-owned company description, passed through verbatim to the
/// narrative collaborator. The engine neither validates nor stores it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyContext {
    pub name: String,
    pub industry: String,
    pub business_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationRequest {
    #[serde(default)]
    pub base_metrics: MetricsSnapshot,
    #[serde(default)]
    pub modifiers: ScenarioModifiers,
    #[serde(default)]
    pub company_info: CompanyContext,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationResponse {
    pub projection: ProjectionResult,
    pub ai_analysis: String,
}

/// The structured success shape the narrative collaborator is asked to
/// return. Every field is defaulted: a sparse but valid JSON object still
/// counts as a structured response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AdvisorReport {
    #[schemars(description = "A brief executive summary of the company's financial health, referencing the specific revenue and profit numbers")]
    pub executive_summary: String,

    #[schemars(description = "Risk score from 0 (safe) to 100 (critical)")]
    pub risk_score: f64,

    #[schemars(description = "3-5 actionable strategic recommendations to improve cash flow and profitability")]
    pub recommendations: Vec<String>,
}

/// Distinguishes a real assessment from the degraded fallbacks so that
/// downstream consumers can tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Unknown,
    Calculated,
    #[serde(rename = "Parse Error")]
    ParseError,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Unknown => write!(f, "Unknown"),
            RiskLevel::Calculated => write!(f, "Calculated"),
            RiskLevel::ParseError => write!(f, "Parse Error"),
        }
    }
}

/// The qualitative assessment record handed to the storage collaborator.
///
/// `recommendations` is a JSON-encoded list of strings, stored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub overall_score: i64,
    pub risk_level: RiskLevel,
    pub summary_report: String,
    pub recommendations: String,
}
