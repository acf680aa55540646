//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::services::account::AccountSummary;

/// Format a list of accounts with balances as a table
pub fn format_account_list(summaries: &[AccountSummary]) -> String {
    if summaries.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let name_width = summaries
        .iter()
        .map(|s| s.account.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<8}  {:>12}  {:>10}  {:>5}\n",
        "Name",
        "Currency",
        "Balance",
        "Operations",
        "Goals",
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:-<name_width$}  {:-<8}  {:->12}  {:->10}  {:->5}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for summary in summaries {
        output.push_str(&format!(
            "{:<name_width$}  {:<8}  {:>12}  {:>10}  {:>5}\n",
            summary.account.name,
            summary.account.currency_code,
            summary.balance.to_string(),
            summary.operation_count,
            summary.goal_count,
            name_width = name_width,
        ));
    }

    output
}

/// Format a single account with details
pub fn format_account_details(summary: &AccountSummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", summary.account.name));
    output.push_str(&format!("  Currency: {}\n", summary.account.currency_code));
    output.push_str(&format!(
        "  Balance: {}\n",
        summary.balance.format_with_code(&summary.account.currency_code)
    ));
    output.push_str(&format!("  Operations: {}\n", summary.operation_count));
    output.push_str(&format!("  Goals: {}\n", summary.goal_count));
    output.push_str(&format!("  ID: {}\n", summary.account.id));

    output
}
