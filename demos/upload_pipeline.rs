use anyhow::{Context, Result};
use finpulse_engine::{
    ingest_statement, AdvisorConfig, Assessment, CompanyContext, FinancialAdvisor,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let path = std::env::args()
        .nth(1)
        .context("usage: upload_pipeline <statement.csv|statement.xlsx>")?;
    let bytes = std::fs::read(&path).with_context(|| format!("reading {}", path))?;

    let metrics = ingest_statement(&bytes, &path)?;
    println!(
        "Metrics: revenue={:.2} expenses={:.2} net_profit={:.2}",
        metrics.revenue, metrics.expenses, metrics.net_profit
    );

    let config = match std::env::var("GEMINI_API_KEY") {
        Ok(key) => AdvisorConfig::with_api_key(key),
        Err(_) => AdvisorConfig::default(),
    };
    let advisor = FinancialAdvisor::new(config);

    let company = CompanyContext {
        name: "Demo Company".to_string(),
        industry: "Retail".to_string(),
        business_type: "SME".to_string(),
    };

    let outcome = advisor.assess(&metrics, &company).await;
    let assessment = Assessment::from_outcome(outcome);

    println!("\nAssessment ({}):", assessment.risk_level);
    println!("  Health score: {}/100", assessment.overall_score);
    println!("  Summary: {}", assessment.summary_report);
    println!("  Recommendations: {}", assessment.recommendations);

    Ok(())
}
