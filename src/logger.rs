//! Log file setup. Every event of a run goes to the trace file, never to the
//! terminal.

use std::fs::OpenOptions;
use std::path::PathBuf;

use env_logger::{Target, WriteStyle};
use log::{info, trace, LevelFilter};
use sysinfo::System;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub file: PathBuf,
    /// 0 disables logging, 5 logs everything.
    pub level: u8,
    pub colored: bool,
}

/// Maps the numeric debug level to a log filter.
pub fn level_filter(level: u8) -> LevelFilter {
    match level {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the global logger, appending to the trace file.
///
/// # Errors
/// * `Error::IoError` if the trace file cannot be opened
/// * `Error::ConfigError` if a logger is already installed
pub fn init_logger(settings: &LogSettings) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(&settings.file)?;

    env_logger::Builder::new()
        .filter_level(level_filter(settings.level))
        .target(Target::Pipe(Box::new(file)))
        .write_style(if settings.colored { WriteStyle::Always } else { WriteStyle::Never })
        .try_init()
        .map_err(|e| Error::ConfigError(e.to_string()))
}

/// Dumps the command line to the log.
pub fn trace_command_line() {
    trace!("trace_command_line - begin");
    for (index, arg) in std::env::args().enumerate() {
        trace!("argv[{}] == {}", index, arg);
    }
    trace!("trace_command_line - end");
}

/// Dumps the process environment to the log.
pub fn trace_environment() {
    info!("trace_environment - begin");
    for (index, (key, value)) in std::env::vars_os().enumerate() {
        trace!("envp[{}] == {}={}", index, key.to_string_lossy(), value.to_string_lossy());
    }
    info!("trace_environment - end");
}

/// Dumps the current time, the host and the user running the program.
pub fn trace_system_info() {
    info!("trace_system_info - begin");

    let unknown = || "unknown".to_string();
    let env_or_unknown = |key: &str| std::env::var(key).unwrap_or_else(|_| unknown());

    trace!(" GETTING SYSTEM INFORMATION");
    trace!("----------------------------");
    trace!(
        "Current date and time: {}",
        chrono::Local::now().format("%d/%m/%Y %H:%M:%S")
    );

    trace!(" OPERATING SYSTEM INFORMATION");
    trace!("------------------------------");
    trace!("Operating System........: {}", System::name().unwrap_or_else(unknown));
    trace!("Host Name...............: {}", System::host_name().unwrap_or_else(unknown));
    trace!("Kernel Version..........: {}", System::kernel_version().unwrap_or_else(unknown));
    trace!("Operating System Version: {}", System::os_version().unwrap_or_else(unknown));
    trace!("Architecture............: {}", std::env::consts::ARCH);
    trace!("------------------------------");

    trace!(" USER SYSTEM INFORMATION");
    trace!("-------------------------");
    trace!("User Name...............: {}", env_or_unknown("USER"));
    trace!("Home Directory..........: {}", env_or_unknown("HOME"));
    trace!("Default Shell...........: {}", env_or_unknown("SHELL"));
    trace!("-------------------------");

    info!("trace_system_info - end");
}

/// Dumps the program information to the log.
pub fn trace_program_info(settings: &LogSettings, config_file: &str) {
    trace!(" PROGRAM INFORMATION");
    trace!("---------------------");
    trace!("Software..........: {}", env!("CARGO_PKG_NAME"));
    trace!("Version...........: {}", env!("CARGO_PKG_VERSION"));
    trace!("Configuration file: {}", config_file);
    trace!("Log file..........: {}", settings.file.display());
    trace!("Report bugs to....: <{}>", env!("CARGO_PKG_AUTHORS"));
    trace!("Github............: {}", env!("CARGO_PKG_REPOSITORY"));
    trace!("---------------------");
}
