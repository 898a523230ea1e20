//! Terminal form for recording phone-inventory purchases
//!
//! Enter the purchase date and one line per phone bought (brand, RAM/ROM
//! spec, color, unit price and quantity). Subtotals and the grand total are
//! computed as you type. Saving checks that every line is complete and hands
//! the purchase to the configured sink.
//!
//! # Examples
//!
//! ```bash
//! # show help menu
//! purchase-term --help
//!
//! # launch with debug logging and a ledger file
//! purchase-term --debug --ledger purchases.jsonl
//! ```

use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use directories::ProjectDirs;
use indoc::indoc;
use ratatui::{Terminal, prelude::CrosstermBackend};
use std::{fs, io, rc::Rc};

use crate::{
    config::{Config, ConfigManager},
    purchase::form::PurchaseForm,
    renderer::{Renderer, TerminalEvents},
    sink::{LedgerSink, LogSink, SaveSink},
    store::{Store, reducer::StoreReducer, state::State},
};

#[doc(hidden)]
mod config;
#[doc(hidden)]
mod currency;
#[doc(hidden)]
mod error;
#[doc(hidden)]
mod purchase;
#[doc(hidden)]
mod renderer;
#[doc(hidden)]
mod sink;
#[doc(hidden)]
mod store;
#[doc(hidden)]
mod ui;

const KEY_BINDINGS: &str = indoc! {"
    Key bindings:
      tab / shift+tab   move between fields
      up / down         move between rows
      left / right      cycle spec and color, or shift the date by one day
      enter / space     open the brand search
      ctrl+a            add a row
      ctrl+d            remove the focused row
      ctrl+s            save
      ctrl+c            quit
"};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = KEY_BINDINGS)]
struct Args {
    /// Write debug logs to the application data directory
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Color theme: Blue, Emerald, Indigo or Red
    #[arg(short, long)]
    theme: Option<String>,

    /// Append every saved purchase to this file, one JSON document per line
    #[arg(short, long)]
    ledger: Option<String>,

    /// Seconds the "saved" acknowledgment stays on screen
    #[arg(long)]
    ack_seconds: Option<u64>,

    /// Use this config file instead of the one in the config directory
    #[arg(short, long)]
    config: Option<String>,
}

#[doc(hidden)]
fn get_project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "purchase-term")
        .ok_or(eyre!("failed to get project directory"))
}

#[doc(hidden)]
fn initialize_logger(args: &Args, project_dirs: &ProjectDirs) -> Result<()> {
    // the UI owns the terminal so logs only ever go to a file
    if !args.debug {
        return Ok(());
    }

    let data_dir = project_dirs.data_dir();
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join("purchase-term.log");
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .wrap_err_with(|| format!("failed to open log file {}", log_path.display()))?;

    simplelog::WriteLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        log_file,
    )?;

    Ok(())
}

#[doc(hidden)]
fn get_project_config_path(project_dirs: &ProjectDirs) -> Result<String> {
    let config_dir = project_dirs.config_dir();

    fs::create_dir_all(config_dir)?;

    let config_file_path = config_dir
        .join("config.yml")
        .to_str()
        .ok_or(eyre!("unable to construct config file path"))?
        .to_string();

    Ok(config_file_path)
}

#[doc(hidden)]
fn load_config(args: &Args, project_dirs: &ProjectDirs) -> Result<Config> {
    let config_path = match args.config.as_ref() {
        Some(path) => path.clone(),
        None => get_project_config_path(project_dirs)?,
    };

    let config_manager = ConfigManager::builder().path(config_path).build()?;

    Ok(config_manager.config().clone().with_overrides(
        args.theme.clone(),
        args.ack_seconds,
        args.ledger.clone(),
    ))
}

#[doc(hidden)]
fn create_sink(config: &Config) -> Box<dyn SaveSink> {
    match config.ledger_path.as_ref() {
        Some(path) => {
            log::info!("saving purchases to ledger {path}");
            Box::new(LedgerSink::new(path))
        }
        None => Box::new(LogSink),
    }
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let project_dirs = get_project_dirs()?;

    initialize_logger(&args, &project_dirs)?;

    let config = load_config(&args, &project_dirs)?;

    let true_color_enabled =
        match supports_color::on(supports_color::Stream::Stdout) {
            Some(support) => support.has_16m,
            _ => false,
        };

    let state = State::new(&config, PurchaseForm::default(), true_color_enabled);
    let store = Rc::new(Store::new(
        state,
        StoreReducer::boxed(),
        create_sink(&config),
    ));

    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .wrap_err("failed to create terminal")?;

    let renderer = Renderer::new(terminal, store, Box::new(TerminalEvents));

    renderer.start_render_loop()
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
