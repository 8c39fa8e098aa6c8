use clap::Parser;
use env_logger::Env;
use log::debug;
use std::io;
use thiserror::Error;

mod libquiz;

use crate::libquiz::bank::builtin_bank;
use crate::libquiz::engine::{EngineError, QuizEngine};
use crate::libquiz::question::BankError;
use crate::libquiz::settings::{QuizSettings, SettingsError, DEFAULT_PASS_THRESHOLD};

#[derive(Parser, Debug)]
#[command(name = "Pop Quiz!")]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_name = "PCT", default_value_t = DEFAULT_PASS_THRESHOLD)]
    pass_threshold: f64,
    #[arg(short, long, default_value = "error")]
    log_level: String,
    /// Also print the final summary as JSON. Terminal presenter only.
    #[cfg(not(feature = "gui"))]
    #[arg(long, default_value = "false")]
    summary_json: bool,
}

#[derive(Debug, Error)]
enum Error {
    #[error("invalid question bank: {0}")]
    Bank(#[from] BankError),
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("quiz error: {0}")]
    Engine(#[from] EngineError),
    #[error("cannot write to the terminal")]
    Io(#[from] io::Error),
    #[error("cannot encode summary")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "gui")]
    #[error("cannot start the window")]
    Gui(#[from] eframe::Error),
}

// `gui` wins when both presenters are enabled.
cfg_if::cfg_if! {
    if #[cfg(feature = "gui")] {
        mod gui;

        fn present(engine: QuizEngine, _args: &Args) -> Result<(), Error> {
            gui::init_gui(engine)
        }
    } else if #[cfg(feature = "cli")] {
        mod cli;

        fn present(mut engine: QuizEngine, args: &Args) -> Result<(), Error> {
            cli::cli_loop(
                &mut engine,
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
                args.summary_json,
            )
        }
    } else {
        compile_error!("enable the `cli` or the `gui` feature");
    }
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str())).init();

    let settings = QuizSettings::with_pass_threshold(args.pass_threshold)?;
    let bank = builtin_bank()?;
    debug!("[Setup] Loaded {} questions", bank.len());

    present(QuizEngine::new(bank, settings), &args)
}
