use crate::decoder::{CellValue, RowRecord};
use crate::schema::CanonicalMetrics;
use chrono::Utc;
use log::debug;

const AMOUNT_COLUMN: &str = "amount";
const TYPE_COLUMN: &str = "type";
const INCOME_LABEL: &str = "income";
const EXPENSE_LABEL: &str = "expense";

/// The detected column-presence pattern of an input row sequence. Evaluated
/// in a fixed priority order; the first matching shape wins and shapes are
/// never blended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaShape {
    /// Both an `amount` and a `type` column exist: rows are classified by
    /// their income/expense label.
    AmountAndType,
    /// Only an `amount` column exists: rows are classified by sign.
    AmountOnly,
    /// Neither heuristic applies; aggregation degrades to zeroed metrics.
    Unrecognized,
}

impl SchemaShape {
    /// Column presence is checked across all rows, since heterogeneous
    /// sources may omit a column on some rows.
    pub fn detect(rows: &[RowRecord]) -> Self {
        let has_column = |name: &str| rows.iter().any(|row| row.contains_key(name));

        if has_column(AMOUNT_COLUMN) && has_column(TYPE_COLUMN) {
            SchemaShape::AmountAndType
        } else if has_column(AMOUNT_COLUMN) {
            SchemaShape::AmountOnly
        } else {
            SchemaShape::Unrecognized
        }
    }
}

/// Derives canonical metrics from a decoded row sequence.
///
/// An empty sequence is not an error: it produces zeroed metrics. Rows whose
/// amount cannot be interpreted as a number are excluded from the sums.
/// Both period bounds are stamped with the aggregation time until real
/// period inference exists.
pub fn aggregate(rows: &[RowRecord]) -> CanonicalMetrics {
    let stamp = Utc::now();

    if rows.is_empty() {
        return CanonicalMetrics::zeroed(stamp);
    }

    let shape = SchemaShape::detect(rows);
    debug!("Detected schema shape {:?} across {} rows", shape, rows.len());

    let (revenue, expenses) = match shape {
        SchemaShape::AmountAndType => sum_by_type(rows),
        SchemaShape::AmountOnly => sum_by_sign(rows),
        SchemaShape::Unrecognized => (0.0, 0.0),
    };

    CanonicalMetrics {
        revenue,
        expenses,
        net_profit: revenue - expenses,
        period_start: stamp,
        period_end: stamp,
    }
}

/// Classifies rows by their `type` label, matched case-insensitively.
/// Expense rows appear in the wild with either sign convention, so the
/// expense total is reported as a magnitude.
fn sum_by_type(rows: &[RowRecord]) -> (f64, f64) {
    let mut revenue = 0.0;
    let mut expenses = 0.0;

    for row in rows {
        let Some(amount) = row.get(AMOUNT_COLUMN).and_then(CellValue::as_number) else {
            continue;
        };

        match row.get(TYPE_COLUMN).and_then(CellValue::as_text) {
            Some(label) if label.eq_ignore_ascii_case(INCOME_LABEL) => revenue += amount,
            Some(label) if label.eq_ignore_ascii_case(EXPENSE_LABEL) => expenses += amount,
            _ => {}
        }
    }

    (revenue, expenses.abs())
}

/// No `type` column: positive amounts are income, negative amounts are
/// expenses. Zero amounts contribute to neither sum.
fn sum_by_sign(rows: &[RowRecord]) -> (f64, f64) {
    let mut revenue = 0.0;
    let mut expenses = 0.0;

    for row in rows {
        match row.get(AMOUNT_COLUMN).and_then(CellValue::as_number) {
            Some(amount) if amount > 0.0 => revenue += amount,
            Some(amount) if amount < 0.0 => expenses += amount.abs(),
            _ => {}
        }
    }

    (revenue, expenses)
}
