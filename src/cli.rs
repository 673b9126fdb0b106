//! Command-line surface of the `junkdrawer` binary.
//!
//! Read, write and copy failures abort the process (status 1, `[Abort]`
//! line on stderr). Everything else is returned to `main` as an error.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, ExitCode};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use crate::datetime;
use crate::env::Env;
use crate::fs_op::{dir, file};
use crate::fs_op::file::{Content, Format};
use crate::logging::LogOptions;
use crate::msg::{self, OrAbort};
use crate::stopwatch::Stopwatch;

#[derive(Parser, Debug)]
#[command(name = "junkdrawer", version, about = "Console, time, file and directory helpers for scripts")]
pub struct Cli {
    /// Settings file (defaults to the per-user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More diagnostics on stderr (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// No diagnostics at all
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write diagnostics to FILE instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn log_options(&self, filter: Option<String>) -> LogOptions {
        LogOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            file: self.log_file.clone(),
            filter,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a status line
    Show { text: String },
    /// Print an error line
    Error { text: String },
    /// Print an abort line, exiting with status 1 when --exit is given
    Abort {
        text: String,
        #[arg(long)]
        exit: bool,
    },
    /// Current local timestamp
    Now {
        /// Print epoch seconds instead
        #[arg(long)]
        epoch: bool,
    },
    /// Convert epoch seconds to a timestamp
    ToTimestamp {
        #[arg(allow_negative_numbers = true)]
        epoch: i64,
    },
    /// Convert a timestamp to epoch seconds
    ToEpoch { timestamp: String },
    /// Create a directory and its parents
    Mkdir { path: String },
    /// Delete a directory tree
    Rmdir { path: String },
    /// Print whether a file (or with --dir, a directory) exists
    Exists {
        path: String,
        #[arg(long)]
        dir: bool,
    },
    /// Copy a file; the destination directory must exist
    Copy { src: String, dst: String },
    /// Delete a file
    Rm { path: String },
    /// Show path parts, size and modification time of a file
    Info { path: String },
    /// Find a file in the working directory and on PATH
    Find { name: String },
    /// Print a file
    Cat {
        path: String,
        #[arg(long, conflicts_with = "binary")]
        json: bool,
        #[arg(long)]
        binary: bool,
    },
    /// Write a file, creating its directory
    Write {
        path: String,
        content: String,
        /// Parse CONTENT as JSON and write it pretty-printed with sorted keys
        #[arg(long)]
        json: bool,
    },
    /// Run a program and report how long it took
    Time {
        program: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

#[derive(Debug)]
#[allow(dead_code)] // fields are read through `Debug`
struct FileInfo {
    path: String,
    basename: String,
    name: String,
    extension: String,
    directory: String,
    size_bytes: u64,
    modified: String,
}

/// Execute `cli.command`.
pub fn run(cli: &Cli, env: &Env) -> Result<ExitCode> {
    let expand = |p: &str| dir::expand_path(p, env);

    match &cli.command {
        Commands::Show { text } => msg::show(text),
        Commands::Error { text } => msg::error(text),
        Commands::Abort { text, exit } => msg::abort(text, *exit),
        Commands::Now { epoch } => {
            if *epoch {
                msg::raw(datetime::now_epoch(), false);
            } else {
                msg::raw(datetime::now_timestamp(), false);
            }
        }
        Commands::ToTimestamp { epoch } => {
            msg::raw(datetime::epoch_to_timestamp(*epoch)?, false);
        }
        Commands::ToEpoch { timestamp } => {
            msg::raw(datetime::timestamp_to_epoch(timestamp)?, false);
        }
        Commands::Mkdir { path } => dir::make(expand(path))?,
        Commands::Rmdir { path } => dir::delete(expand(path))?,
        Commands::Exists { path, dir: want_dir } => {
            let p = expand(path);
            let found = if *want_dir { dir::exists(&p) } else { file::exists(&p) };
            msg::raw(found, false);
        }
        Commands::Copy { src, dst } => {
            file::copy(expand(src), expand(dst)).or_abort();
        }
        Commands::Rm { path } => file::delete(expand(path))?,
        Commands::Info { path } => {
            let p = expand(path);
            let modified = file::modified_epoch(&p).with_context(|| format!("can't stat {p}"))?;
            let info = FileInfo {
                path: file::abs_path(&p),
                basename: file::basename(&p),
                name: file::name(&p),
                extension: file::extension(&p),
                directory: file::directory(&p),
                size_bytes: file::size_bytes(&p).with_context(|| format!("can't stat {p}"))?,
                modified: datetime::epoch_to_timestamp(modified)?,
            };
            msg::pretty(&info);
        }
        Commands::Find { name } => match file::find(name, env) {
            Some(paths) => paths.iter().for_each(|p| msg::raw(p, false)),
            None => {
                msg::error(format!("{name} not found"));
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Cat { path, json, binary } => {
            let format = match (*json, *binary) {
                (true, _) => Format::Json,
                (_, true) => Format::Binary,
                _ => Format::Text,
            };
            let content = file::read(expand(path), format).or_abort();
            let mut out = std::io::stdout().lock();
            if let Some(value) = content.as_json() {
                out.write_all(&crate::fs_op::content::to_pretty_json(value)?)?;
                out.write_all(b"\n")?;
            } else if let Some(text) = content.as_text() {
                out.write_all(text.as_bytes())?;
            } else if let Some(bytes) = content.as_bytes() {
                out.write_all(bytes)?;
            }
            out.flush()?;
        }
        Commands::Write { path, content, json } => {
            let content = if *json {
                Content::Json(serde_json::from_str(content).context("content is not valid JSON")?)
            } else {
                Content::Text(content.clone())
            };
            file::write(expand(path), &content).or_abort();
        }
        Commands::Time { program, args } => return time_command(program, args),
    }
    Ok(ExitCode::SUCCESS)
}

fn time_command(program: &str, args: &[String]) -> Result<ExitCode> {
    let cmdline = std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");
    msg::exe(&cmdline);

    let mut sw = Stopwatch::new();
    sw.start();
    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("can't run {program}"))?;
    sw.stop();

    msg::show(format!("{program} finished in {}s", sw.elapsed()));
    tracing::debug!(%status, elapsed = sw.elapsed(), "timed command finished");
    Ok(match status.code() {
        Some(0) => ExitCode::SUCCESS,
        Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        None => ExitCode::FAILURE,
    })
}
