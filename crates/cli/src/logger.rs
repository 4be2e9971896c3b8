use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
    sync::Mutex,
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

static LOGGER: Logger = Logger {
    file: Mutex::new(None),
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to open log file: {0}")]
    File(#[from] std::io::Error),
    #[error(transparent)]
    Logger(#[from] SetLoggerError),
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub target: String,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Installs the logger. Entries are written to stderr and, if `file` is
/// given, appended to it as JSON lines.
pub fn init(level: LevelFilter, file: Option<&Path>) -> Result<(), Error> {
    if let Some(path) = file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        if let Ok(mut guard) = LOGGER.file.lock() {
            *guard = Some(file);
        }
    }
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

struct Logger {
    file: Mutex<Option<File>>,
}

impl Entry {
    fn new(record: &Record) -> Self {
        Self {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = Entry::new(record);
        eprintln!("{} {:<5} {}", entry.time, entry.level, entry.message);
        if let Ok(mut guard) = self.file.lock()
            && let Some(file) = guard.as_mut()
            && let Ok(line) = serde_json::to_string(&entry)
        {
            let _ = writeln!(file, "{line}");
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file.lock()
            && let Some(file) = guard.as_mut()
        {
            let _ = file.flush();
        }
    }
}
