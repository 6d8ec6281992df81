// Drives the compiled binary with piped stdin. Stdout is not a TTY here,
// so the chart is never drawn and the run stays non-interactive.

use std::fs;
use std::path::Path;
use std::process::Output;

use assert_cmd::Command;
use rand::{rngs::StdRng, SeedableRng};
use reaction::prompt_generator::PromptGenerator;

const SEED: u64 = 2024;

fn prompts(count: usize) -> Vec<String> {
    let mut generator = PromptGenerator::new(StdRng::seed_from_u64(SEED), 3);
    (0..count).map(|_| generator.generate_prompt()).collect()
}

fn run(dir: &Path, trials: usize, stdin: String) -> Output {
    Command::cargo_bin("reaction")
        .unwrap()
        .arg("--trials")
        .arg(trials.to_string())
        .arg("--seed")
        .arg(SEED.to_string())
        .arg("--history-file")
        .arg(dir.join("neuro_results.json"))
        .arg("--config")
        .arg(dir.join("no_such_config.json"))
        .arg("--no-chart")
        .write_stdin(stdin)
        .output()
        .unwrap()
}

fn history_len(path: &Path) -> usize {
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    value.as_array().map(Vec::len).unwrap_or(0)
}

#[test]
fn correct_session_is_reported_and_appended() {
    let dir = tempfile::tempdir().unwrap();
    let answers = prompts(3).join("\n") + "\n";

    let output = run(dir.path(), 3, answers.clone());
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Trial 1: Type -> "));
    assert!(stdout.contains("--- Trial Details ---"));
    assert!(stdout.contains("--- Summary Report ---"));
    assert!(stdout.contains("Focus Score"));
    assert!(stdout.contains("Results appended to"));

    let history = dir.path().join("neuro_results.json");
    assert_eq!(history_len(&history), 1);

    let output = run(dir.path(), 3, answers);
    assert!(output.status.success());
    assert_eq!(history_len(&history), 2);
}

#[test]
fn all_wrong_session_is_not_persisted() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(dir.path(), 3, "x\ny\nz\n".to_string());
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Not enough correct trials to analyze performance."));
    assert!(!dir.path().join("neuro_results.json").exists());
}

#[test]
fn corrupted_history_is_backed_up_and_restarted() {
    let dir = tempfile::tempdir().unwrap();
    let history = dir.path().join("neuro_results.json");
    fs::write(&history, "[{ truncated").unwrap();

    let output = run(dir.path(), 2, prompts(2).join("\n") + "\n");
    assert!(output.status.success());

    assert_eq!(history_len(&history), 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("neuro_results.json.corrupt")).unwrap(),
        "[{ truncated"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("history unreadable"));
}

#[test]
fn input_ending_early_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(dir.path(), 3, prompts(1)[0].clone() + "\n");
    assert!(!output.status.success());
    assert!(!dir.path().join("neuro_results.json").exists());
}
