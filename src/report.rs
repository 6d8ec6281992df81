use crate::scorer::SessionSummary;
use crate::trial::TrialRecord;
use itertools::Itertools;

pub const INSUFFICIENT_DATA_MESSAGE: &str = "Not enough correct trials to analyze performance.";

pub fn format_trial_line(trial: &TrialRecord) -> String {
    format!(
        "Trial {} | Prompt: '{}' | Typed: '{}' | {} | Time: {:?}s",
        trial.index,
        trial.prompt,
        trial.typed,
        trial.outcome().label(),
        trial.elapsed_seconds
    )
}

/// Per-trial breakdown, all trials including incorrect ones
pub fn trial_details(trials: &[TrialRecord]) -> String {
    let lines = trials.iter().map(format_trial_line).join("\n");
    format!("\n--- Trial Details ---\n{lines}")
}

pub fn summary_report(summary: &SessionSummary) -> String {
    format!(
        "\n--- Summary Report ---\n\
         Baseline (first 5): {:?} sec\n\
         Average Time     : {:?} sec\n\
         Consistency (std): {:?}\n\
         Trend Slope      : {:.4}\n\
         Focus Score      : {:?}/100",
        summary.baseline, summary.average, summary.std_dev, summary.slope, summary.focus_score
    )
}

/// Full textual report; the summary part is replaced by a notice when absent
pub fn session_report(trials: &[TrialRecord], summary: Option<&SessionSummary>) -> String {
    let tail = match summary {
        Some(summary) => summary_report(summary),
        None => format!("\n{INSUFFICIENT_DATA_MESSAGE}"),
    };
    format!("{}\n{tail}", trial_details(trials))
}
