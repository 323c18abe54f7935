//! File logging
//!
//! The terminal belongs to the TUI, so log records go to a file under the
//! user cache directory. `RUST_LOG` controls the filter; the default is
//! `info`.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};

const LOG_FILE_NAME: &str = "askterm.log";

/// Default location of the log file
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("askterm").join(LOG_FILE_NAME))
}

/// Install the global logger
///
/// Returns the log file path, or None when no file could be opened. Logging
/// is then disabled; the app keeps running.
pub fn init() -> Option<PathBuf> {
    let path = log_file_path()?;
    let file = match open_log_file(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("askterm: logging disabled, cannot open {}: {}", path.display(), e);
            return None;
        }
    };

    builder(file).try_init().ok()?;
    log::info!("askterm {} started", env!("CARGO_PKG_VERSION"));
    Some(path)
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn builder(file: File) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        });
    builder
}
