//! tmux-im: per-pane input method store for tmux.
//!
//! Pure storage; an external switching script reads and writes it on pane
//! focus changes.

mod cli;
mod command;
mod config;
mod logger;
mod state;
mod util;

use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{Cli, Operation};
use config::Config;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let operation = Cli::parse().operation();

    let config = Config::from_env();
    // stderr is reserved for `error:`; a bad log setup just means no logs.
    let log_directive = std::env::var(logger::ENV_LOG).ok();
    let _ = logger::init(&config.file, log_directive.as_deref());
    tracing::debug!(?config, ?operation, "resolved invocation");

    let mut stdout = io::stdout().lock();
    match operation {
        Operation::Get { pane_key } => {
            command::get::run(&config, &pane_key, util::unix_now(), &mut stdout)
        }
        Operation::Set { pane_key, im } => {
            command::set::run(&config, &pane_key, &im, util::unix_now())
        }
        Operation::List => command::list::run(&config, &mut stdout),
        Operation::Help => Ok(Cli::command().print_help()?),
    }
}
