/// Logger initialization. The terminal UI owns stdout, so the default target is a log file.
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Once;

use env_logger::Target;

/// Where log records go.
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "fp3d_core=debug"). When unset, `RUST_LOG` is used, then `info`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub target: LogTarget,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            target: LogTarget::File(PathBuf::from("fp3d.log")),
        }
    }
}

static INIT: Once = Once::new();

/// Resolve where records are written. A log file that can't be created
/// discards records rather than writing over the terminal UI.
fn open_target(target: &LogTarget) -> Target {
    match target {
        LogTarget::Stderr => Target::Stderr,
        LogTarget::File(path) => match File::create(path) {
            Ok(file) => Target::Pipe(Box::new(file)),
            Err(e) => {
                eprintln!("could not open log file {}: {e}", path.display());
                Target::Pipe(Box::new(io::sink()))
            }
        },
    }
}

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        if let LogTarget::File(_) = config.target {
            builder.write_style(env_logger::WriteStyle::Never);
        }
        builder.target(open_target(&config.target));
        builder.init();

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_target() {
        assert!(matches!(open_target(&LogTarget::Stderr), Target::Stderr));
    }

    #[test]
    fn test_unwritable_log_file_is_discarded() {
        // A directory can't be opened as a file.
        let target = open_target(&LogTarget::File(std::env::temp_dir()));
        assert!(matches!(target, Target::Pipe(_)));
    }

    #[test]
    fn test_log_file_is_created() {
        let path = std::env::temp_dir().join(format!("fp3d-log-{}.log", std::process::id()));
        let target = open_target(&LogTarget::File(path.clone()));
        let created = path.exists();
        std::fs::remove_file(&path).ok();

        assert!(matches!(target, Target::Pipe(_)));
        assert!(created);
    }
}
