//! Mode-gated debug log.
//!
//! Writes debug-level records to a dedicated file unless the application runs
//! in a production mode with "log to file" turned off. The settings are read
//! from the [`SettingsSource`] on every record, so a mode switch takes effect
//! on the next call without rebuilding the logger.
//!
//! | mode                  | log_to_file | debug record |
//! |-----------------------|-------------|--------------|
//! | developer             | any         | written      |
//! | production(-minimal)  | true        | written      |
//! | production(-minimal)  | false       | skipped      |
//!
//! A skipped record touches nothing on disk: the file is neither created nor
//! modified.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::{
    deploy::SettingsSource,
    error::LogResult,
    log::{
        file_sink::FileSink,
        log_level::LogLevel,
        log_record::LogRecord,
        log_sink::{LogSink, SinkOutcome},
    },
};

pub struct DebugFileSink {
    file: FileSink,
    settings: Arc<dyn SettingsSource>,
}

impl DebugFileSink {
    pub const NAME: &'static str = "debug";
    pub const FILE_NAME: &'static str = "debug.log";

    pub fn new(path: impl Into<PathBuf>, settings: Arc<dyn SettingsSource>) -> Self {
        Self {
            file: FileSink::new(Self::NAME, path, LogLevel::Debug),
            settings,
        }
    }

    /// Debug sink writing `debug.log` inside `log_dir`.
    pub fn in_dir(log_dir: impl AsRef<Path>, settings: Arc<dyn SettingsSource>) -> Self {
        Self::new(log_dir.as_ref().join(Self::FILE_NAME), settings)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl LogSink for DebugFileSink {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_handling(&self, level: LogLevel) -> bool {
        self.file.is_handling(level)
    }

    fn handle(&self, record: &LogRecord) -> LogResult<SinkOutcome> {
        if !self.is_handling(record.level) {
            return Ok(SinkOutcome::Skipped);
        }

        let settings = self.settings.current()?;
        if !settings.debug_logging_enabled() {
            debug!(mode = %settings.mode, "debug log disabled; record skipped");
            return Ok(SinkOutcome::Skipped);
        }

        self.file.handle(record)
    }

    fn target_path(&self) -> Option<&Path> {
        Some(self.file.path())
    }
}

impl std::fmt::Debug for DebugFileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebugFileSink")
            .field("path", &self.file.path())
            .finish_non_exhaustive()
    }
}
