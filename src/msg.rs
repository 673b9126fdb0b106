//! Console messaging helpers.
//!
//! Every line is written with a `[LABEL]` prefix and flushed straight away so
//! it stays ordered relative to whatever the caller does next (spawning a
//! process, exiting). The free functions write to the process stdout/stderr;
//! [`Messenger`] is the same thing over arbitrary writers.

use std::fmt::{Debug, Display};
use std::io::{self, Write};

use once_cell::sync::OnceCell;

/// Label used until [`set_label`] is called.
pub const DEFAULT_LABEL: &str = "MSG";

static LABEL: OnceCell<String> = OnceCell::new();

/// Set the process-wide message label. Only the first call wins; returns
/// `false` when a label was already set.
pub fn set_label(label: impl Into<String>) -> bool {
    LABEL.set(label.into()).is_ok()
}

/// Current process-wide message label.
pub fn label() -> &'static str {
    LABEL.get().map(String::as_str).unwrap_or(DEFAULT_LABEL)
}

/// Writes labelled lines to an output and an error writer.
#[derive(Debug)]
pub struct Messenger<W: Write, E: Write> {
    label: String,
    out: W,
    err: E,
}

impl<W: Write, E: Write> Messenger<W, E> {
    pub fn new(label: impl Into<String>, out: W, err: E) -> Self {
        Self {
            label: label.into(),
            out,
            err,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Write `text` plus a newline to the error writer when `is_error` is set,
    /// to the output writer otherwise, and flush that writer.
    pub fn raw(&mut self, text: impl Display, is_error: bool) -> io::Result<()> {
        if is_error {
            writeln!(self.err, "{text}")?;
            self.err.flush()
        } else {
            writeln!(self.out, "{text}")?;
            self.out.flush()
        }
    }

    pub fn show(&mut self, text: impl Display) -> io::Result<()> {
        let line = format!("[{}]: {}", self.label, text);
        self.raw(line, false)
    }

    pub fn error(&mut self, text: impl Display) -> io::Result<()> {
        let line = format!("[{}][Error]: {}", self.label, text);
        self.raw(line, true)
    }

    /// Echo a command line before it is run.
    pub fn exe(&mut self, cmd: impl Display) -> io::Result<()> {
        let line = format!("[{}][Exe]: {}", self.label, cmd);
        self.raw(line, false)
    }

    /// Write an abort line to the error writer. With `should_exit` the
    /// process terminates with status 1 once the line is flushed.
    pub fn abort(&mut self, text: impl Display, should_exit: bool) -> io::Result<()> {
        let line = format!("[{}][Abort]: {}", self.label, text);
        self.raw(line, true)?;
        if should_exit {
            std::process::exit(1);
        }
        Ok(())
    }

    /// Multi-line, indented rendering of `value` on the output writer.
    pub fn pretty<T: Debug + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        writeln!(self.out, "{value:#?}")?;
        self.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    pub fn into_inner(self) -> (W, E) {
        (self.out, self.err)
    }
}

fn console() -> Messenger<io::Stdout, io::Stderr> {
    Messenger::new(label(), io::stdout(), io::stderr())
}

// Console write failures (closed pipe and the like) are not reportable
// anywhere useful, so the free functions drop them.

pub fn raw(text: impl Display, is_error: bool) {
    let _ = console().raw(text, is_error);
}

pub fn show(text: impl Display) {
    let _ = console().show(text);
}

pub fn error(text: impl Display) {
    let _ = console().error(text);
}

pub fn exe(cmd: impl Display) {
    let _ = console().exe(cmd);
}

pub fn pretty<T: Debug + ?Sized>(value: &T) {
    let _ = console().pretty(value);
}

pub fn flush() {
    let _ = console().flush();
}

/// Write `[LABEL][Abort]: text` to stderr; exit with status 1 when
/// `should_exit` is set.
pub fn abort(text: impl Display, should_exit: bool) {
    if should_exit {
        fatal(text);
    }
    let _ = console().abort(text, false);
}

/// Abort and exit with status 1.
pub fn fatal(text: impl Display) -> ! {
    let _ = console().abort(text, false);
    std::process::exit(1)
}

/// Turns a failed `Result` into a fatal abort.
///
/// The error's `Display` output becomes the abort text, so errors should
/// already carry their context (see `FsOpError`).
pub trait OrAbort<T> {
    fn or_abort(self) -> T;
}

impl<T, E: Display> OrAbort<T> for Result<T, E> {
    fn or_abort(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "fatal error, aborting");
                fatal(e)
            }
        }
    }
}
