//! # CLI Layer
//!
//! This module is **one possible UI client** for the diary. It is the only
//! place that reads stdin, writes stdout, or decides the exit code.
//!
//! ## Structure
//!
//! - `setup`: clap flags, data directory resolution, logger setup
//! - `menu`: the numbered interactive loop, one API call per choice
//! - `render`: colored output for notes, messages and the menu
//!
//! Only startup problems (an unreadable config) end the process with an error.
//! Everything that goes wrong inside the menu is shown and the menu returns.

mod menu;
mod render;
pub mod setup;

use clap::Parser;
use diary::api::DiaryApi;
use diary::config::{DiaryConfig, DiaryPaths};
use diary::error::Result;
use log::info;
use menu::Menu;
use setup::{init_logging, resolve_data_dir, Cli, HOME_ENV};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut api = init_api(&cli)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Menu::new(&mut api, stdin.lock(), stdout.lock()).run()
}

fn init_api(cli: &Cli) -> Result<DiaryApi> {
    let data_dir = resolve_data_dir(cli.dir.clone(), std::env::var_os(HOME_ENV))?;
    let config = DiaryConfig::load(&data_dir)?;
    info!("using data directory {}", data_dir.display());
    Ok(DiaryApi::new(DiaryPaths::new(data_dir), config))
}
