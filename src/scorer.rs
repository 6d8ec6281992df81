//! Session scoring over the correct trials of one run.
//!
//! Only correct trials count, in their original order. Fewer than two of
//! them is not an error: [`summarize`] returns `None` and nothing else is
//! computed.

use crate::trial::TrialRecord;
use crate::util::{linear_slope, mean, round_to, std_dev};
use serde::{Deserialize, Serialize};

/// Number of leading correct trials averaged into the baseline
pub const BASELINE_WINDOW: usize = 5;

pub const MIN_CORRECT_TRIALS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub baseline: f64,
    pub average: f64,
    pub std_dev: f64,
    pub slope: f64,
    pub focus_score: f64,
}

/// Fixed heuristic: slowing down and jitter both cost points.
/// Result is clamped to `[0, 100]` and rounded to 2 decimals.
pub fn focus_score(slope: f64, std_dev: f64) -> f64 {
    let raw = 100.0 - (slope * 100.0) - (std_dev * 10.0);
    round_to(raw.clamp(0.0, 100.0), 2)
}

/// Elapsed seconds of the correct trials, in trial order
pub fn correct_times(trials: &[TrialRecord]) -> Vec<f64> {
    trials
        .iter()
        .filter(|t| t.correct)
        .map(|t| t.elapsed_seconds)
        .collect()
}

pub fn summarize(trials: &[TrialRecord]) -> Option<SessionSummary> {
    let times = correct_times(trials);
    if times.len() < MIN_CORRECT_TRIALS {
        return None;
    }

    let window = times.len().min(BASELINE_WINDOW);
    let baseline = round_to(mean(&times[..window])?, 3);
    let average = round_to(mean(&times)?, 3);
    let std_dev = round_to(std_dev(&times).unwrap_or(0.0), 3);
    let slope = linear_slope(&times)?;

    Some(SessionSummary {
        baseline,
        average,
        std_dev,
        slope,
        focus_score: focus_score(slope, std_dev),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trials(data: &[(f64, bool)]) -> Vec<TrialRecord> {
        data.iter()
            .enumerate()
            .map(|(i, &(elapsed, correct))| TrialRecord {
                index: i + 1,
                prompt: "abc".to_string(),
                typed: if correct { "abc" } else { "abd" }.to_string(),
                elapsed_seconds: elapsed,
                correct,
            })
            .collect()
    }

    fn all_correct(times: &[f64]) -> Vec<TrialRecord> {
        trials(&times.iter().map(|&t| (t, true)).collect::<Vec<_>>())
    }

    #[test]
    fn test_no_summary_without_two_correct_trials() {
        assert_eq!(summarize(&[]), None);
        assert_eq!(summarize(&all_correct(&[0.7])), None);
        assert_eq!(
            summarize(&trials(&[(0.5, false), (0.6, true), (0.4, false)])),
            None
        );
    }

    #[test]
    fn test_three_trial_example() {
        let summary = summarize(&all_correct(&[0.5, 0.6, 0.4])).unwrap();

        assert_eq!(summary.baseline, 0.5);
        assert_eq!(summary.average, 0.5);
        assert_eq!(summary.std_dev, 0.1);
        assert!((summary.slope + 0.05).abs() < 1e-9);
        // 100 + 5 - 1 clamps down to the ceiling
        assert_eq!(summary.focus_score, 100.0);
    }

    #[test]
    fn test_arithmetic_slowdown() {
        let summary = summarize(&all_correct(&[1.0, 1.1, 1.2, 1.3])).unwrap();

        assert!((summary.slope - 0.1).abs() < 1e-6);
        assert_eq!(summary.std_dev, 0.129);
        assert_eq!(summary.baseline, 1.15);
        assert!((summary.focus_score - 88.71).abs() < 1e-9);
    }

    #[test]
    fn test_baseline_uses_first_five_correct_trials() {
        let summary =
            summarize(&all_correct(&[1.0, 1.0, 1.0, 1.0, 1.0, 4.0, 4.0])).unwrap();

        assert_eq!(summary.baseline, 1.0);
        assert_eq!(summary.average, 1.857);
    }

    #[test]
    fn test_incorrect_trials_are_filtered_preserving_order() {
        let mixed = trials(&[
            (9.0, false),
            (1.0, true),
            (9.0, false),
            (2.0, true),
            (3.0, true),
        ]);

        assert_eq!(correct_times(&mixed), vec![1.0, 2.0, 3.0]);

        let summary = summarize(&mixed).unwrap();
        assert_eq!(summary.average, 2.0);
        assert!((summary.slope - 1.0).abs() < 1e-9);
        assert_eq!(summary.std_dev, 1.0);
        assert_eq!(summary.focus_score, 0.0);
    }

    #[test]
    fn test_focus_score_is_clamped() {
        assert_eq!(focus_score(-50.0, 0.0), 100.0);
        assert_eq!(focus_score(50.0, 0.0), 0.0);
        assert_eq!(focus_score(0.0, 1_000.0), 0.0);
        assert_eq!(focus_score(0.1, 0.5), 85.0);
    }

    #[test]
    fn test_focus_score_bounded_for_extreme_sessions() {
        let samples: [&[f64]; 4] = [
            &[0.01, 30.0, 0.01, 45.0],
            &[60.0, 40.0, 20.0, 0.1],
            &[0.2, 0.2],
            &[5.0, 0.0, 5.0, 0.0, 5.0, 0.0],
        ];

        for times in samples {
            let summary = summarize(&all_correct(times)).unwrap();
            assert!(
                (0.0..=100.0).contains(&summary.focus_score),
                "{times:?} -> {}",
                summary.focus_score
            );
        }
    }

    #[test]
    fn test_identical_times_score_full_focus() {
        let summary = summarize(&all_correct(&[0.8, 0.8, 0.8])).unwrap();

        assert_eq!(summary.std_dev, 0.0);
        assert!(summary.slope.abs() < 1e-12);
        assert_eq!(summary.focus_score, 100.0);
    }
}
