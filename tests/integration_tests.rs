use finpulse_engine::*;

fn csv_metrics(body: &str) -> CanonicalMetrics {
    ingest_statement(body.as_bytes(), "statement.csv").expect("csv should ingest")
}

#[test]
fn test_typed_statement_end_to_end() {
    let metrics = csv_metrics(
        "Date,Category,Amount,Type\n\
         2024-01-03,Sales,1000,Income\n\
         2024-01-08,Rent,-500,Expense\n",
    );

    assert_eq!(metrics.revenue, 1000.0);
    assert_eq!(metrics.expenses, 500.0);
    assert_eq!(metrics.net_profit, 500.0);
}

#[test]
fn test_net_profit_invariant_holds_for_typed_statements() {
    let metrics = csv_metrics(
        "amount,type\n\
         1200.50,income\n\
         800,INCOME\n\
         -430.25,Expense\n\
         90,expense\n\
         15,Transfer\n",
    );

    assert_eq!(metrics.net_profit, metrics.revenue - metrics.expenses);
    assert_eq!(metrics.revenue, 2000.5);
}

#[test]
fn test_sign_based_statement_end_to_end() {
    let metrics = csv_metrics(
        "date,amount\n\
         2024-02-01,1000\n\
         2024-02-02,-500\n",
    );

    assert_eq!(metrics.revenue, 1000.0);
    assert_eq!(metrics.expenses, 500.0);
    assert_eq!(metrics.net_profit, 500.0);
}

#[test]
fn test_unrecognized_statement_degrades_to_zeroed_metrics() {
    let metrics = csv_metrics(
        "description,total\n\
         Coffee,4.50\n\
         Hosting,20.00\n",
    );

    assert_eq!(metrics.revenue, 0.0);
    assert_eq!(metrics.expenses, 0.0);
    assert_eq!(metrics.net_profit, 0.0);
}

#[test]
fn test_currency_formatted_amounts_survive_ingestion() {
    let metrics = csv_metrics(
        "amount,type\n\
         \"$1,250.00\",Income\n\
         $250.00,Expense\n",
    );

    assert_eq!(metrics.revenue, 1250.0);
    assert_eq!(metrics.expenses, 250.0);
}

#[test]
fn test_spreadsheet_bytes_with_csv_suffix_are_a_decode_error() {
    // A zip-flavored binary payload must fail loudly, not produce a silent
    // empty result.
    let mut bytes = b"PK\x03\x04".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe, 0x00, 0x9c, 0x8b, b',', 0xff, b'\n']);
    bytes.extend_from_slice(&[0x88, 0x99, 0xaa, 0xbb]);

    let err = ingest_statement(&bytes, "export.csv").unwrap_err();
    assert!(matches!(err, FinPulseError::DecodeError(_)));
}

#[test]
fn test_garbage_bytes_with_spreadsheet_suffix_are_a_decode_error() {
    let err = ingest_statement(b"definitely not a workbook", "export.xlsx").unwrap_err();
    assert!(matches!(err, FinPulseError::DecodeError(_)));
}

#[test]
fn test_ingest_then_project_pipeline() {
    let metrics = csv_metrics(
        "amount,type\n\
         1000,Income\n\
         -200,Expense\n",
    );

    let result = project(
        &metrics.snapshot(),
        &ScenarioModifiers {
            revenue_growth: 0.10,
            expense_change: 0.05,
        },
    );

    assert_eq!(result.original.revenue, 1000.0);
    assert_eq!(result.original.expenses, 200.0);
    assert!((result.projected.revenue - 1100.0).abs() < 1e-9);
    assert!((result.projected.expenses - 210.0).abs() < 1e-9);
    assert!((result.projected.net_profit - 890.0).abs() < 1e-9);
    assert_eq!(result.deltas.revenue_change_percent, 10.0);
    assert_eq!(result.deltas.expense_change_percent, 5.0);
}

#[test]
fn test_projection_request_from_json_maps() {
    // The simulate interchange shape tolerates sparse maps: missing metric
    // and modifier fields default to zero.
    let request: SimulationRequest = serde_json::from_str(
        r#"{
            "base_metrics": {"revenue": 1000.0, "expenses": 800.0, "net_profit": 200.0},
            "modifiers": {"revenue_growth": 0.10},
            "company_info": {"name": "Acme", "business_type": "Retail"}
        }"#,
    )
    .expect("request should deserialize");

    let result = project(&request.base_metrics, &request.modifiers);
    assert!((result.projected.revenue - 1100.0).abs() < 1e-9);
    assert_eq!(result.projected.expenses, 800.0);
    assert_eq!(result.deltas.expense_change_percent, 0.0);
}

#[test]
fn test_unparseable_advisor_response_never_crashes() {
    let raw = "Sure! Here's my take: things look shaky but survivable.";

    let assessment = Assessment::from_outcome(interpret_advisor_response(raw));
    assert_eq!(assessment.overall_score, 50);
    assert_eq!(assessment.risk_level, RiskLevel::ParseError);
    assert_eq!(assessment.summary_report, raw);
    assert_eq!(assessment.recommendations, "[]");
}

#[test]
fn test_structured_advisor_response_end_to_end() {
    let raw = r#"```json
{
    "executive_summary": "Revenue of $2,000.50 comfortably covers expenses.",
    "risk_score": 25,
    "recommendations": ["Keep three months of runway", "Review supplier contracts"]
}
```"#;

    let assessment = Assessment::from_outcome(interpret_advisor_response(raw));
    assert_eq!(assessment.overall_score, 75);
    assert_eq!(assessment.risk_level, RiskLevel::Calculated);

    let recommendations: Vec<String> =
        serde_json::from_str(&assessment.recommendations).expect("stored as JSON list");
    assert_eq!(recommendations.len(), 2);
}
