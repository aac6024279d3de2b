//! Logging setup.
//!
//! Everything goes to stderr. When a log file is configured it also receives a copy, and the
//! file is truncated on every start so it only ever holds the last run.

use std::{fs::File, io::Write, path::Path};

use log::LevelFilter;

/// Installs the global logger.
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<(), String> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // image decoders are chatty at debug
        .level_for("image", LevelFilter::Warn)
        .chain(std::io::stderr());

    if let Some(path) = log_file {
        dispatch = dispatch.chain(restart_log_file(path)?);
    }

    dispatch
        .apply()
        .map_err(|e| format!("Could not install logger: {e}"))?;

    if let Some(path) = log_file {
        log::info!("Logging to {}", path.display());
    }
    Ok(())
}

/// Truncates `path` and writes the header line.
fn restart_log_file(path: &Path) -> Result<File, String> {
    let mut file = File::create(path)
        .map_err(|e| format!("Could not open log file {} for writing: {e}", path.display()))?;
    writeln!(file, "{}", header(chrono::Local::now().naive_local()))
        .map_err(|e| format!("Could not write to log file {}: {e}", path.display()))?;
    Ok(file)
}

fn header(now: chrono::NaiveDateTime) -> String {
    format!("GL log. local time {}", now.format("%a %b %e %H:%M:%S %Y"))
}
