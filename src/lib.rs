// Library surface for the binary and the integration tests.
pub mod app_dirs;
pub mod config;
pub mod history;
pub mod prompt_generator;
pub mod report;
pub mod runtime;
pub mod scorer;
pub mod session;
pub mod trial;
pub mod ui;
pub mod util;
