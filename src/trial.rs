use crate::prompt_generator::PromptGenerator;
use crate::runtime::{Clock, ResponseSource};
use crate::util::round_to;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::debug;

#[derive(Clone, Debug, Copy, PartialEq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Correct => "Correct",
            Outcome::Incorrect => "Incorrect",
        }
    }
}

/// One prompt-and-response cycle.
///
/// Serialized with the keys used by existing history files
/// (`trial`, `prompt`, `input`, `time`, `correct`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    #[serde(rename = "trial")]
    pub index: usize,
    pub prompt: String,
    #[serde(rename = "input")]
    pub typed: String,
    #[serde(rename = "time")]
    pub elapsed_seconds: f64,
    pub correct: bool,
}

impl TrialRecord {
    pub fn new(index: usize, prompt: String, typed: String, elapsed_seconds: f64) -> Self {
        let correct = typed == prompt;
        Self {
            index,
            prompt,
            typed,
            elapsed_seconds,
            correct,
        }
    }

    pub fn outcome(&self) -> Outcome {
        if self.correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        }
    }
}

pub const WELCOME_BANNER: &str = "\nWelcome to Reaction - Performance Tracker!\n\
Type the prompted string exactly as shown (case sensitive).\n\
Try to be both fast and accurate.\n";

/// Drives the interactive trials: prompt, time a blocking read, record
pub struct TrialRunner<S: ResponseSource, C: Clock, R: Rng> {
    source: S,
    clock: C,
    generator: PromptGenerator<R>,
}

impl<S: ResponseSource, C: Clock, R: Rng> TrialRunner<S, C, R> {
    pub fn new(source: S, clock: C, generator: PromptGenerator<R>) -> Self {
        Self {
            source,
            clock,
            generator,
        }
    }

    /// Run a single trial numbered `index`
    pub fn run_trial<W: Write>(&mut self, index: usize, out: &mut W) -> io::Result<TrialRecord> {
        let prompt = self.generator.generate_prompt();
        writeln!(out, "Trial {index}: Type -> {prompt}")?;

        let started = self.clock.now_secs();
        write!(out, "Your input: ")?;
        out.flush()?;

        let line = self.source.read_response()?;
        let stopped = self.clock.now_secs();

        let typed = match line {
            Some(line) => line.trim().to_string(),
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("input ended before trial {index} was answered"),
                ))
            }
        };

        let elapsed = round_to((stopped - started).max(0.0), 3);
        let record = TrialRecord::new(index, prompt, typed, elapsed);
        debug!(
            trial = index,
            elapsed = record.elapsed_seconds,
            correct = record.correct,
            "trial recorded"
        );

        writeln!(
            out,
            "[{}] Time: {:?} sec\n",
            record.outcome().label(),
            record.elapsed_seconds
        )?;

        Ok(record)
    }

    /// Run `total_trials` trials in order, numbered from 1
    pub fn run_trials<W: Write>(
        &mut self,
        total_trials: usize,
        out: &mut W,
    ) -> io::Result<Vec<TrialRecord>> {
        writeln!(out, "{WELCOME_BANNER}")?;

        let mut results = Vec::with_capacity(total_trials);
        for index in 1..=total_trials {
            results.push(self.run_trial(index, out)?);
        }

        Ok(results)
    }
}
