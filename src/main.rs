use clap::Parser;
use crossterm::tty::IsTty;
use rand::{rngs::StdRng, SeedableRng};
use reaction::{
    config::{Config, ConfigStore, FileConfigStore},
    history::{FileHistoryStore, HistoryStore},
    prompt_generator::PromptGenerator,
    report::session_report,
    runtime::{LineSource, SystemClock},
    scorer::summarize,
    session::{SessionConfig, SessionRecord},
    trial::TrialRunner,
    ui,
};
use std::{error::Error, io, path::PathBuf};
use tracing::{debug, info, warn, Level};

/// typing reaction trainer with trend scoring and session history
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type short random prompts as fast and accurately as you can. Each session is scored for baseline, consistency and trend, appended to a JSON history file, and charted."
)]
pub struct Cli {
    /// number of trials in the session
    #[clap(short = 'n', long, value_parser = parse_positive)]
    trials: Option<usize>,

    /// number of characters in each prompt
    #[clap(short = 'l', long, value_parser = parse_positive)]
    length: Option<usize>,

    /// history file the session is appended to
    #[clap(short = 'f', long)]
    history_file: Option<PathBuf>,

    /// config file to read defaults from
    #[clap(long)]
    config: Option<PathBuf>,

    /// seed the prompt generator for a reproducible session
    #[clap(long)]
    seed: Option<u64>,

    /// skip the chart at the end of the session
    #[clap(long)]
    no_chart: bool,

    /// log debug output to stderr
    #[clap(short = 'v', long)]
    verbose: bool,
}

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Config file values with command line overrides applied
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeSettings {
    pub session: SessionConfig,
    pub history_file: Option<PathBuf>,
    pub show_chart: bool,
}

impl RuntimeSettings {
    fn resolve(cli: &Cli, cfg: Config) -> Self {
        Self {
            session: SessionConfig {
                number_of_trials: cli.trials.unwrap_or(cfg.trials).max(1),
                prompt_length: cli.length.unwrap_or(cfg.prompt_length).max(1),
                seed: cli.seed,
            },
            history_file: cli.history_file.clone().or(cfg.history_file),
            show_chart: cfg.show_chart && !cli.no_chart,
        }
    }

    fn history_store(&self) -> FileHistoryStore {
        match &self.history_file {
            Some(path) => FileHistoryStore::with_path(path),
            None => FileHistoryStore::new(),
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_store = match &cli.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    };
    let settings = RuntimeSettings::resolve(&cli, config_store.load());
    debug!(?settings, "resolved settings");

    let rng = match settings.session.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let generator = PromptGenerator::new(rng, settings.session.prompt_length);
    let mut runner = TrialRunner::new(
        LineSource::new(io::stdin().lock()),
        SystemClock::new(),
        generator,
    );

    let mut stdout = io::stdout();
    let trials = runner.run_trials(settings.session.number_of_trials, &mut stdout)?;

    let summary = summarize(&trials);
    println!("{}", session_report(&trials, summary.as_ref()));

    let Some(summary) = summary else {
        return Ok(());
    };

    let store = settings.history_store();
    let session = SessionRecord::new(trials, summary);
    let count = store.append(&session)?;
    println!("\nResults appended to {}", store.path().display());
    info!(sessions = count, "history updated");

    if settings.show_chart && stdout.is_tty() {
        if let Err(e) = ui::render_inline(&session.trials) {
            warn!(error = %e, "could not draw the chart");
        }
    }

    Ok(())
}
