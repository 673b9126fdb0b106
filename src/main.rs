//! junkdrawer: script helpers on the command line.

use std::process::ExitCode;

use clap::Parser;

use junkdrawer::cli::{self, Cli};
use junkdrawer::{config, logging, msg, Env};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match config::load_settings(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            msg::error(e);
            return ExitCode::FAILURE;
        }
    };
    msg::set_label(settings.label.clone());
    let _log_guard = match logging::init(&cli.log_options(settings.log_filter.clone())) {
        Ok(guard) => guard,
        Err(e) => {
            msg::error(e);
            return ExitCode::FAILURE;
        }
    };

    let env = Env::from_process();
    match cli::run(&cli, &env) {
        Ok(code) => code,
        Err(e) => {
            msg::error(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
