use crate::assessment::{interpret_advisor_response, AdvisorOutcome};
use crate::llm::client::GeminiClient;
use crate::llm::prompts;
use crate::projection::project;
use crate::schema::{
    AdvisorReport, CanonicalMetrics, CompanyContext, ProjectionResult, SimulationRequest,
    SimulationResponse,
};
use log::{debug, warn};
use std::time::Duration;

pub const DEFAULT_ADVISOR_MODEL: &str = "gemini-flash-latest";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Advisor configuration, injected at construction. An absent API key is a
/// normal configuration state: the advisor stays constructible and every
/// call degrades to the unavailable outcome.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_ADVISOR_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AdvisorConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }
}

/// The narrative collaborator: turns computed metrics into a qualitative
/// assessment and critiques projection scenarios.
///
/// Only structured data ever goes over the wire, never raw source bytes.
/// No method here returns an error: collaborator failures degrade into
/// [`AdvisorOutcome::Unavailable`] or a fallback string so that metric
/// computation and persistence are never aborted by the assessment step.
pub struct FinancialAdvisor {
    client: Option<GeminiClient>,
    model: String,
}

impl FinancialAdvisor {
    pub fn new(config: AdvisorConfig) -> Self {
        let client = config
            .api_key
            .filter(|key| !key.is_empty())
            .map(|key| GeminiClient::new(key, config.timeout));

        if client.is_none() {
            debug!("No advisor API key configured; assessments will degrade to unavailable");
        }

        Self {
            client,
            model: config.model,
        }
    }

    pub fn is_available(&self) -> bool {
        self.client.is_some()
    }

    /// Requests a structured health assessment for the given metrics.
    pub async fn assess(
        &self,
        metrics: &CanonicalMetrics,
        company: &CompanyContext,
    ) -> AdvisorOutcome {
        let Some(client) = &self.client else {
            return AdvisorOutcome::Unavailable("no API key configured".to_string());
        };

        let prompt = prompts::build_advice_prompt(metrics, company);
        match client
            .generate_content(&self.model, &prompt, Some(advisor_report_schema()))
            .await
        {
            Ok(text) => interpret_advisor_response(&text),
            Err(e) => {
                warn!("Advisor call failed: {}", e);
                AdvisorOutcome::Unavailable(e.to_string())
            }
        }
    }

    /// Free-text critique of a projection scenario. Degrades to a fixed
    /// message when the collaborator is unavailable or the call fails.
    pub async fn critique_scenario(
        &self,
        projection: &ProjectionResult,
        company: &CompanyContext,
    ) -> String {
        let Some(client) = &self.client else {
            return "AI analysis unavailable (no API key configured)".to_string();
        };

        let prompt = prompts::build_scenario_prompt(projection, company);
        match client.generate_content(&self.model, &prompt, None).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Scenario critique failed: {}", e);
                format!("AI analysis failed: {}", e)
            }
        }
    }

    /// Deterministic projection first, qualitative critique second. The
    /// critique can only degrade in quality, never fail the simulation.
    pub async fn simulate(&self, request: &SimulationRequest) -> SimulationResponse {
        let projection = project(&request.base_metrics, &request.modifiers);
        let ai_analysis = self
            .critique_scenario(&projection, &request.company_info)
            .await;

        SimulationResponse {
            projection,
            ai_analysis,
        }
    }
}

/// JSON schema for the structured advisor response, derived from
/// [`AdvisorReport`]. Metadata keys the Gemini API does not accept are
/// stripped.
fn advisor_report_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(AdvisorReport);
    let mut value = serde_json::to_value(schema).unwrap_or_else(|_| serde_json::json!({}));
    if let Some(map) = value.as_object_mut() {
        map.remove("$schema");
        map.remove("title");
    }
    value
}
