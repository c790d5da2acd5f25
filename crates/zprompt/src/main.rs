//! Prints a zsh prompt definition for the current directory, meant to be
//! wired into the shell as `precmd() { eval "$(zprompt)" }`.

use std::io::{
    self,
    Write,
};
use std::path::Path;
use std::process::ExitCode;

use eyre::{
    Context,
    Result,
    eyre,
};
use promptline::{
    RenderContext,
    render_prompt,
};
use tracing::error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Printed in place of the real definition when rendering fails, so the
/// shell still gets a usable prompt.
const FALLBACK_PROMPT: &str = "PROMPT='failed > '";

fn main() -> ExitCode {
    match run() {
        Ok(line) => match emit(io::stdout(), &line) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!("prompt write failed: {err}");
                eprintln!("zprompt: {err}");
                ExitCode::FAILURE
            },
        },
        Err(err) => {
            error!("prompt render failed: {err:#}");
            eprintln!("zprompt: {err:#}");
            let _ = emit(io::stdout(), FALLBACK_PROMPT);
            ExitCode::FAILURE
        },
    }
}

fn run() -> Result<String> {
    let home = dirs::home_dir().ok_or_else(|| eyre!("home directory is not resolvable"))?;
    if let Err(err) = setup_logging(&home) {
        // A broken log destination must not take the prompt down with it.
        eprintln!("zprompt: file logging disabled: {err:#}");
    }

    let cwd = std::env::current_dir().context("working directory is not resolvable")?;
    let ctx = RenderContext::new(home, cwd);
    Ok(render_prompt(&ctx)?)
}

/// Route tracing output to `~/.zprompt/zprompt.log`, created on demand.
fn setup_logging(home: &Path) -> Result<()> {
    use std::fs;

    use tracing_subscriber::fmt;

    let log_dir = home.join(".zprompt");
    fs::create_dir_all(&log_dir).context("failed to create log directory")?;

    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("zprompt.log"))
        .context("failed to open log file")?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(log_file).with_ansi(false))
        .with(EnvFilter::new("warn"))
        .init();

    Ok(())
}

/// Write the definition without a trailing newline and flush. The shell
/// evaluates the captured output as-is, so a failed write means no usable
/// prompt was delivered.
fn emit(mut out: impl Write, line: &str) -> io::Result<()> {
    out.write_all(line.as_bytes())?;
    out.flush()
}
