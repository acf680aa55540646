//! Saving goal display formatting

use crate::services::goal::GoalProgress;

const BAR_WIDTH: usize = 20;

/// Format the goals of an account as a table with progress bars
pub fn format_goal_list(progresses: &[GoalProgress]) -> String {
    if progresses.is_empty() {
        return "No saving goals.\n".to_string();
    }

    let name_width = progresses
        .iter()
        .map(|p| p.goal.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>12}  {:<bar$}  {:>6}\n",
        "Name",
        "Saved",
        "Target",
        "Progress",
        "%",
        name_width = name_width,
        bar = BAR_WIDTH + 2,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:->12}  {:-<bar$}  {:->6}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        bar = BAR_WIDTH + 2,
    ));

    for progress in progresses {
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>12}  {}  {:>5.0}%\n",
            progress.goal.name,
            progress.current_amount.to_string(),
            progress.goal.target_amount.to_string(),
            progress_bar(progress.progress_fraction),
            progress.progress_fraction * 100.0,
            name_width = name_width,
        ));
    }

    output
}

/// Format a single goal with details
pub fn format_goal_details(progress: &GoalProgress) -> String {
    let mut output = String::new();

    output.push_str(&format!("Goal: {}\n", progress.goal.name));
    output.push_str(&format!("  Target: {}\n", progress.goal.target_amount));
    output.push_str(&format!("  Saved: {}\n", progress.current_amount));
    if progress.progress_amount.is_negative() {
        output.push_str(&format!(
            "  Over-funded by: {}\n",
            progress.progress_amount.abs()
        ));
    } else {
        output.push_str(&format!("  Remaining: {}\n", progress.progress_amount));
    }
    output.push_str(&format!(
        "  Progress: {} {:.0}%\n",
        progress_bar(progress.progress_fraction),
        progress.progress_fraction * 100.0
    ));
    output.push_str(&format!("  ID: {}\n", progress.goal.id));

    output
}

/// Render a fraction as a fixed-width bar; display clamps to [0, 1]
fn progress_bar(fraction: f64) -> String {
    let clamped = fraction.clamp(0.0, 1.0);
    let filled = (clamped * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
