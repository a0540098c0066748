use finpulse_engine::{ingest_statement, project, ScenarioModifiers};

fn main() {
    let csv = b"Date,Category,Amount,Type\n\
        2024-01-03,Product Sales,42000,Income\n\
        2024-01-15,Consulting,8500,Income\n\
        2024-01-20,Salaries,-21000,Expense\n\
        2024-01-22,Rent,-4500,Expense\n\
        2024-01-28,Marketing,-3200,Expense\n";

    let metrics = ingest_statement(csv, "january.csv").expect("statement should ingest");

    println!("Ingested metrics:");
    println!("  Revenue:    {:.2}", metrics.revenue);
    println!("  Expenses:   {:.2}", metrics.expenses);
    println!("  Net profit: {:.2}", metrics.net_profit);

    let modifiers = ScenarioModifiers {
        revenue_growth: 0.15,
        expense_change: -0.05,
    };
    let result = project(&metrics.snapshot(), &modifiers);

    println!(
        "\nScenario: revenue {:+.1}%, expenses {:+.1}%",
        result.deltas.revenue_change_percent, result.deltas.expense_change_percent
    );
    println!("  Projected revenue:    {:.2}", result.projected.revenue);
    println!("  Projected expenses:   {:.2}", result.projected.expenses);
    println!("  Projected net profit: {:.2}", result.projected.net_profit);
}
