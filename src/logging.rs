//! Debug logging
//!
//! Log output goes to a file so it never tears through the TUI. Release builds
//! skip initialization entirely and every `log::` call becomes a no-op.

use std::path::PathBuf;

/// `<cache dir>/ghsuggest/debug.log`
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("ghsuggest").join("debug.log"))
}

/// Start logging to `log_path()`. Failures are swallowed; the app runs fine
/// without a log.
#[cfg(debug_assertions)]
pub fn init() {
    use std::fs::{self, OpenOptions};
    use std::io::Write;

    let Some(path) = log_path() else {
        return;
    };
    if let Some(dir) = path.parent()
        && fs::create_dir_all(dir).is_err()
    {
        return;
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();

    log::debug!("ghsuggest {} started", env!("CARGO_PKG_VERSION"));
}

#[cfg(not(debug_assertions))]
pub fn init() {}
