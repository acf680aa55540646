//! Planned purchase display formatting

use crate::models::{Money, PlannedPurchase};

/// Format the wishlist as a table with a total row
pub fn format_planned_list(planned: &[PlannedPurchase]) -> String {
    if planned.is_empty() {
        return "No planned purchases.\n".to_string();
    }

    let name_width = planned
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<8}  {:>12}\n",
        "ID",
        "Name",
        "Category",
        "Price",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<8}  {:->12}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for p in planned {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:<8}  {:>12}\n",
            p.id.to_string(),
            p.name,
            p.category.to_string(),
            p.price.to_string(),
            name_width = name_width,
        ));
    }

    let total: Money = planned.iter().map(|p| p.price).sum();
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:-<8}  {:->12}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<8}  {:>12}\n",
        "",
        "Total",
        "",
        total.to_string(),
        name_width = name_width,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseCategory;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_planned_list(&[]), "No planned purchases.\n");
    }

    #[test]
    fn test_list_with_total() {
        let planned = vec![
            PlannedPurchase::new("Desk", Money::new(dec!(120.00)), ExpenseCategory::Undefined),
            PlannedPurchase::new("Trip", Money::new(dec!(800.00)), ExpenseCategory::Trip),
        ];

        let output = format_planned_list(&planned);
        assert!(output.contains("Desk"));
        assert!(output.contains("Total"));
        assert!(output.contains("920.00"));
    }
}
