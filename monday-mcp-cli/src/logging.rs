//! Logging setup for the monday-mcp binary
//!
//! When serving MCP over a piped stdin the protocol owns stdout, so logs go to
//! `~/.monday-mcp/mcp.log`. Everything else logs to stderr.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Directory under the home directory that holds the server log
pub const LOG_DIR_NAME: &str = ".monday-mcp";

/// Environment variable overriding the log file name
pub const LOG_FILE_ENV: &str = "MONDAY_MCP_LOG_FILE";

const DEFAULT_LOG_FILE: &str = "mcp.log";

/// A thread-safe writer that flushes and syncs every write.
///
/// Log lines from a stdio MCP server must reach disk even if the client kills
/// the process abruptly, so each write is followed by `sync_all()`.
#[derive(Clone)]
pub struct FileWriterGuard {
    file: Arc<Mutex<File>>,
}

impl FileWriterGuard {
    pub fn new(file: Arc<Mutex<File>>) -> Self {
        Self { file }
    }
}

impl Write for FileWriterGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file mutex poisoned"))?;
        let written = file.write(buf)?;
        file.flush()?;
        file.sync_all()?;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file mutex poisoned"))?;
        file.flush()?;
        file.sync_all()
    }
}

/// Verbosity flags as given on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOptions {
    pub mcp_mode: bool,
    pub quiet: bool,
    pub debug: bool,
    pub verbose: bool,
}

impl LogOptions {
    pub fn level(&self) -> Level {
        if self.mcp_mode {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else if self.debug {
            Level::DEBUG
        } else if self.verbose {
            Level::TRACE
        } else {
            Level::INFO
        }
    }

    /// `RUST_LOG` wins over the flags when set
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level().as_str().to_lowercase()))
    }
}

/// Path of the MCP-mode log file
pub fn log_file_path() -> PathBuf {
    let dir = dirs::home_dir()
        .map(|home| home.join(LOG_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(LOG_DIR_NAME));
    let name = std::env::var(LOG_FILE_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    dir.join(name)
}

fn open_log_file(path: &PathBuf) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global tracing subscriber
pub fn init_logging(options: LogOptions) {
    if options.mcp_mode {
        let path = log_file_path();
        match open_log_file(&path) {
            Ok(file) => {
                let guard = FileWriterGuard::new(Arc::new(Mutex::new(file)));
                tracing_subscriber::fmt()
                    .with_writer(move || guard.clone())
                    .with_env_filter(options.filter())
                    .with_ansi(false)
                    .init();
                return;
            }
            Err(e) => {
                eprintln!(
                    "Failed to open log file {}, using stderr: {}",
                    path.display(),
                    e
                );
            }
        }
    }

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(options.filter())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Read;

    #[test]
    fn test_level_precedence() {
        let mcp = LogOptions {
            mcp_mode: true,
            quiet: true,
            ..Default::default()
        };
        assert_eq!(mcp.level(), Level::DEBUG);

        let quiet = LogOptions {
            quiet: true,
            verbose: true,
            ..Default::default()
        };
        assert_eq!(quiet.level(), Level::ERROR);

        let verbose = LogOptions {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(verbose.level(), Level::TRACE);

        assert_eq!(LogOptions::default().level(), Level::INFO);
    }

    #[test]
    #[serial]
    fn test_log_file_name_override() {
        std::env::set_var(LOG_FILE_ENV, "custom.log");
        let path = log_file_path();
        std::env::remove_var(LOG_FILE_ENV);

        assert!(path.ends_with(format!("{LOG_DIR_NAME}/custom.log")));
    }

    #[test]
    fn test_file_writer_guard_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("mcp.log");
        let file = open_log_file(&path).unwrap();

        let mut guard = FileWriterGuard::new(Arc::new(Mutex::new(file)));
        guard.write_all(b"first line\n").unwrap();
        guard.clone().write_all(b"second line\n").unwrap();
        guard.flush().unwrap();

        let mut contents = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "first line\nsecond line\n");
    }
}
