use std::fs::File;
use std::path::PathBuf;

use simplelog::*;
use thiserror::Error;


/// Where log records go, and how verbose each sink is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub term_level: LevelFilter,
    /// Optional file sink with its own level.
    pub file: Option<(PathBuf, LevelFilter)>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { term_level: LevelFilter::Warn, file: None }
    }
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level {0:?}")]
    InvalidLevel(String),
    #[error("could not create log file {path:?}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("a global logger is already installed")]
    AlreadyInstalled,
}

impl LoggingConfig {
    /// Builds a config from a level name and an optional log file path.
    ///
    /// The file sink records everything down to `Debug`, or the terminal level if that is more verbose.
    pub fn from_parts(level: Option<&str>, file: Option<PathBuf>) -> Result<Self, LoggingError> {
        let term_level = match level {
            Some(name) => name.trim().parse().map_err(|_| LoggingError::InvalidLevel(name.to_owned()))?,
            None => LevelFilter::Warn,
        };
        let file = file.map(|path| (path, term_level.max(LevelFilter::Debug)));
        Ok(Self { term_level, file })
    }

    /// Reads `<prefix>_LOG` (a level name) and `<prefix>_LOG_FILE` (a path) from the environment.
    pub fn from_env(prefix: &str) -> Result<Self, LoggingError> {
        let level = std::env::var(format!("{prefix}_LOG")).ok();
        let file = std::env::var_os(format!("{prefix}_LOG_FILE")).map(PathBuf::from);
        Self::from_parts(level.as_deref(), file)
    }
}

/// Installs the global logger described by `config`.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(config.term_level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
    ];

    if let Some((path, level)) = &config.file {
        let file = File::create(path).map_err(|source| LoggingError::CreateFile { path: path.clone(), source })?;
        loggers.push(WriteLogger::new(*level, Config::default(), file));
    }

    CombinedLogger::init(loggers).map_err(|_| LoggingError::AlreadyInstalled)
}
