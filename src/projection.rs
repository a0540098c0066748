use crate::schema::{MetricsSnapshot, ProjectionDeltas, ProjectionResult, ScenarioModifiers};

/// Deterministic what-if projection of a base metrics triple.
///
/// Pure and I/O-free. No rounding is applied; presenting cents is a caller
/// concern. The original triple is passed through untouched, including a
/// caller-supplied `net_profit` that may disagree with its own
/// revenue/expenses.
pub fn project(base: &MetricsSnapshot, modifiers: &ScenarioModifiers) -> ProjectionResult {
    let new_revenue = base.revenue * (1.0 + modifiers.revenue_growth);
    let new_expenses = base.expenses * (1.0 + modifiers.expense_change);

    ProjectionResult {
        original: *base,
        projected: MetricsSnapshot {
            revenue: new_revenue,
            expenses: new_expenses,
            net_profit: new_revenue - new_expenses,
        },
        deltas: ProjectionDeltas {
            revenue_change_percent: modifiers.revenue_growth * 100.0,
            expense_change_percent: modifiers.expense_change * 100.0,
        },
    }
}
