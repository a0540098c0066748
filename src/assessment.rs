//! Interpretation of narrative-collaborator responses.
//!
//! The collaborator can succeed with structured JSON, return free text that
//! fails to parse, or be unavailable outright. Each outcome maps to a
//! distinguishable assessment record so downstream consumers can tell a real
//! assessment from a degraded one. None of the paths can fail the operation
//! that triggered the assessment.

use crate::schema::{AdvisorReport, Assessment, RiskLevel};
use log::debug;

/// The three ways a collaborator call can land.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvisorOutcome {
    /// The response parsed against [`AdvisorReport`].
    Structured(AdvisorReport),
    /// The response was received but is not valid structured data; the raw
    /// text is preserved verbatim.
    RawFallback(String),
    /// No credential configured, transport failure, or timeout.
    Unavailable(String),
}

/// Parses a raw collaborator response into a structured report or the raw
/// fallback. Markdown code fences are stripped before parsing since models
/// routinely wrap JSON in ```json blocks.
///
/// This function never produces [`AdvisorOutcome::Unavailable`]; that
/// outcome belongs to the caller that owns the transport.
pub fn interpret_advisor_response(raw: &str) -> AdvisorOutcome {
    let cleaned = raw.replace("```json", "").replace("```", "");

    match serde_json::from_str::<AdvisorReport>(cleaned.trim()) {
        Ok(report) => AdvisorOutcome::Structured(report),
        Err(e) => {
            debug!("Advisor response did not parse as structured data: {}", e);
            AdvisorOutcome::RawFallback(raw.to_string())
        }
    }
}

/// Inverts a 0-100 risk score into a 0-100 health score. Out-of-range
/// collaborator scores are clamped rather than propagated.
pub fn health_score(risk_score: f64) -> i64 {
    (100.0 - risk_score).round().clamp(0.0, 100.0) as i64
}

impl Assessment {
    /// Maps a collaborator outcome to the assessment record handed to the
    /// storage collaborator. Sentinel scores keep the three outcomes
    /// distinguishable: unavailable scores 0, unparsed fallback scores the
    /// neutral midpoint 50.
    pub fn from_outcome(outcome: AdvisorOutcome) -> Self {
        match outcome {
            AdvisorOutcome::Structured(report) => Assessment {
                overall_score: health_score(report.risk_score),
                risk_level: RiskLevel::Calculated,
                summary_report: report.executive_summary,
                recommendations: serde_json::to_string(&report.recommendations)
                    .unwrap_or_else(|_| "[]".to_string()),
            },
            AdvisorOutcome::RawFallback(raw) => Assessment {
                overall_score: 50,
                risk_level: RiskLevel::ParseError,
                summary_report: raw,
                recommendations: "[]".to_string(),
            },
            AdvisorOutcome::Unavailable(reason) => Assessment {
                overall_score: 0,
                risk_level: RiskLevel::Unknown,
                summary_report: format!("AI analysis failed: {}", reason),
                recommendations: "[]".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_response_parses() {
        let raw = r#"{"executive_summary": "Healthy margins.", "risk_score": 20, "recommendations": ["Build a cash reserve"]}"#;

        match interpret_advisor_response(raw) {
            AdvisorOutcome::Structured(report) => {
                assert_eq!(report.executive_summary, "Healthy margins.");
                assert_eq!(report.risk_score, 20.0);
                assert_eq!(report.recommendations.len(), 1);
            }
            other => panic!("expected structured outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_code_fences_are_stripped() {
        let raw = "```json\n{\"executive_summary\": \"Ok\", \"risk_score\": 35, \"recommendations\": []}\n```";

        match interpret_advisor_response(raw) {
            AdvisorOutcome::Structured(report) => assert_eq!(report.risk_score, 35.0),
            other => panic!("expected structured outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_sparse_object_counts_as_structured() {
        // Missing keys default rather than falling back; risk 0 -> health 100.
        match interpret_advisor_response("{}") {
            AdvisorOutcome::Structured(report) => {
                let assessment = Assessment::from_outcome(AdvisorOutcome::Structured(report));
                assert_eq!(assessment.overall_score, 100);
                assert_eq!(assessment.risk_level, RiskLevel::Calculated);
            }
            other => panic!("expected structured outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_free_text_falls_back_with_raw_payload() {
        let raw = "I think this business looks risky, roughly 70/100.";

        match interpret_advisor_response(raw) {
            AdvisorOutcome::RawFallback(text) => assert_eq!(text, raw),
            other => panic!("expected raw fallback, got {:?}", other),
        }
    }

    #[test]
    fn test_fallback_assessment_uses_sentinel_score() {
        let assessment =
            Assessment::from_outcome(AdvisorOutcome::RawFallback("garbled".to_string()));
        assert_eq!(assessment.overall_score, 50);
        assert_eq!(assessment.risk_level, RiskLevel::ParseError);
        assert_eq!(assessment.summary_report, "garbled");
        assert_eq!(assessment.recommendations, "[]");
    }

    #[test]
    fn test_unavailable_assessment_is_zero_and_unknown() {
        let assessment =
            Assessment::from_outcome(AdvisorOutcome::Unavailable("no API key configured".into()));
        assert_eq!(assessment.overall_score, 0);
        assert_eq!(assessment.risk_level, RiskLevel::Unknown);
        assert!(assessment.summary_report.contains("no API key configured"));
    }

    #[test]
    fn test_structured_assessment_inverts_risk() {
        let report = AdvisorReport {
            executive_summary: "Tight cash position.".to_string(),
            risk_score: 65.0,
            recommendations: vec!["Cut discretionary spend".to_string()],
        };
        let assessment = Assessment::from_outcome(AdvisorOutcome::Structured(report));

        assert_eq!(assessment.overall_score, 35);
        assert_eq!(assessment.risk_level, RiskLevel::Calculated);
        assert_eq!(assessment.summary_report, "Tight cash position.");
        assert_eq!(assessment.recommendations, r#"["Cut discretionary spend"]"#);
    }

    #[test]
    fn test_health_score_clamps_out_of_range_input() {
        assert_eq!(health_score(0.0), 100);
        assert_eq!(health_score(100.0), 0);
        assert_eq!(health_score(150.0), 0);
        assert_eq!(health_score(-20.0), 100);
    }
}
