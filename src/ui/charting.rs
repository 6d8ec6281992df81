use crate::trial::TrialRecord;
use crate::util::round_to;

/// Points for the trial chart: x is the 1-based trial number, y the elapsed seconds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub all: Vec<(f64, f64)>,
    pub correct: Vec<(f64, f64)>,
    pub incorrect: Vec<(f64, f64)>,
}

impl ChartSeries {
    pub fn from_trials(trials: &[TrialRecord]) -> Self {
        let mut series = Self::default();
        for (i, trial) in trials.iter().enumerate() {
            let point = ((i + 1) as f64, trial.elapsed_seconds);
            series.all.push(point);
            if trial.correct {
                series.correct.push(point);
            } else {
                series.incorrect.push(point);
            }
        }
        series
    }
}

/// Compute X (trial number) and Y (seconds) upper bounds for the trial chart
pub fn compute_chart_params(points: &[(f64, f64)]) -> (f64, f64) {
    let mut highest_time = 0.0;
    for &(_, time) in points {
        if time > highest_time {
            highest_time = time;
        }
    }

    let mut last_trial = points.last().map(|p| p.0).unwrap_or(1.0);
    // keep a non-empty x range for single-trial sessions
    if last_trial < 2.0 {
        last_trial = 2.0;
    }

    let y_bound = if highest_time > 0.0 {
        round_to(highest_time * 1.1, 2)
    } else {
        1.0
    };

    (last_trial, y_bound)
}

/// Labels for the trial axis: every trial for short sessions, ends otherwise
pub fn trial_axis_labels(last_trial: f64) -> Vec<String> {
    let last = last_trial.round() as usize;
    if last <= 12 {
        (1..=last).map(|t| t.to_string()).collect()
    } else {
        vec!["1".to_string(), format_label(last_trial)]
    }
}

/// Format a simple numeric label consistently
pub fn format_label(val: f64) -> String {
    if (val - val.round()).abs() < f64::EPSILON {
        format!("{}", val.round())
    } else {
        format!("{val:.2}")
    }
}
