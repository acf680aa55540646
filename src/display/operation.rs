//! Operation display formatting
//!
//! The ledger stores insertion order; this layer sorts date-descending for
//! display, newest first.

use crate::models::Operation;

/// Format a ledger's operations as a table, newest first
pub fn format_operation_list(operations: &[Operation]) -> String {
    if operations.is_empty() {
        return "No operations recorded.\n".to_string();
    }

    let mut sorted: Vec<&Operation> = operations.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

    let kind_width = sorted
        .iter()
        .map(|op| op.kind.to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<kind_width$}  {:>12}\n",
        "ID",
        "Date",
        "Kind",
        "Amount",
        kind_width = kind_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<10}  {:-<kind_width$}  {:->12}\n",
        "",
        "",
        "",
        "",
        kind_width = kind_width,
    ));

    for op in sorted {
        output.push_str(&format!(
            "{:<12}  {:<10}  {:<kind_width$}  {:>12}\n",
            op.id.to_string(),
            op.date.format("%Y-%m-%d").to_string(),
            op.kind.to_string(),
            op.signed_amount().to_string(),
            kind_width = kind_width,
        ));
    }

    output
}
