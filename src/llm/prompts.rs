//! Prompt builders for the financial-advice and scenario-critique calls.

use crate::schema::{CanonicalMetrics, CompanyContext, ProjectionResult};

pub fn build_advice_prompt(metrics: &CanonicalMetrics, company: &CompanyContext) -> String {
    format!(
        r#"You are an expert financial advisor for SMEs. Analyze the following financial data for a {business_type} company in the {industry} industry.

CRITICAL FINANCIAL METRICS:
- Revenue: ${revenue:.2}
- Expenses: ${expenses:.2}
- Net Profit: ${net_profit:.2}

Company Name: {name}

INSTRUCTIONS:
1. If Net Profit is NEGATIVE, the Risk Score MUST be above 70 (High Risk).
2. If Net Profit is POSITIVE but small (<10% margin), Risk Score should be 40-60 (Moderate).
3. Reference the specific Revenue and Profit numbers in your summary.

Provide:
1. A brief executive summary of their financial health (mention the specific numbers).
2. A Risk Score from 0 (Safe) to 100 (Critical).
3. 3-5 actionable strategic recommendations to improve cash flow and profitability.

Format the output as JSON with keys: "executive_summary", "risk_score", "recommendations" (list of strings)."#,
        business_type = company.business_type,
        industry = company.industry,
        name = company.name,
        revenue = metrics.revenue,
        expenses = metrics.expenses,
        net_profit = metrics.net_profit,
    )
}

pub fn build_scenario_prompt(projection: &ProjectionResult, company: &CompanyContext) -> String {
    format!(
        r#"You are a cynical, conservative CFO advising a {business_type} owner.

They are proposing a strategic shift:
- Target Revenue Growth: {revenue_delta:.1}%
- Target Expense Change: {expense_delta:.1}%

IMPACT:
- New Revenue: ${revenue:.2}
- New Net Profit: ${net_profit:.2}

Evaluate the feasibility and risks.
1. If they plan to GROW Revenue (+20%+) but CUT Expenses, warn them about operational failure (who is doing the work?).
2. If they increase expenses without revenue growth, warn about cash burn.
3. Keep it brief (max 3 sentences). Be direct."#,
        business_type = if company.business_type.is_empty() {
            "Business"
        } else {
            &company.business_type
        },
        revenue_delta = projection.deltas.revenue_change_percent,
        expense_delta = projection.deltas.expense_change_percent,
        revenue = projection.projected.revenue,
        net_profit = projection.projected.net_profit,
    )
}
