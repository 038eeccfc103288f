//! Logging init: file under the XDG state dir, or stderr when the log
//! directory is unusable.

use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Writer that is either a file or stderr (used when the file clone fails).
enum FileOrStderr {
    File(std::fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

/// Initialize structured logging to `~/.local/state/durl/durl.log`, falling
/// back to stderr when the log file cannot be opened.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,durl_core=debug,durl_cli=debug"));

    match open_log_file() {
        Ok((file, path)) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(move || {
                    file.try_clone()
                        .map(FileOrStderr::File)
                        .unwrap_or(FileOrStderr::Stderr)
                })
                .with_ansi(false)
                .init();
            tracing::info!("durl logging initialized at {}", path.display());
        }
        Err(err) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(io::stderr)
                .with_ansi(false)
                .init();
            tracing::debug!("log file unavailable, using stderr: {}", err);
        }
    }
}

fn open_log_file() -> anyhow::Result<(std::fs::File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("durl")?;
    let log_dir = xdg_dirs.get_state_home().join("durl");

    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join("durl.log");

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;
    Ok((file, log_file_path))
}
