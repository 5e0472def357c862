use std::path::Path;
use std::sync::Arc;

use crate::{
    deploy::SettingsSource,
    error::LogResult,
    log::{
        debug_file_sink::DebugFileSink,
        file_sink::FileSink,
        log_level::LogLevel,
        log_record::LogRecord,
        log_sink::{LogSink, SinkOutcome},
    },
};

pub const SYSTEM_SINK: &str = "system";
pub const SYSTEM_LOG_FILE: &str = "system.log";

/// Logging facade: a named channel fanning records out to its sinks.
///
/// Every sink whose [`is_handling`](LogSink::is_handling) accepts the level
/// gets the record, in registration order. Calls are synchronous; the first
/// sink error is returned to the caller and the remaining sinks are not tried.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use modesink::deploy::ModeSwitcher;
/// use modesink::log::Logger;
///
/// let switcher = Arc::new(ModeSwitcher::new("app/etc/env.conf"));
/// let logger = Logger::standard("main", "var/log", switcher);
/// logger.debug("cache warmed")?;
/// # Ok::<(), modesink::error::LogError>(())
/// ```
#[derive(Clone, Default)]
pub struct Logger {
    channel: String,
    sinks: Vec<Arc<dyn LogSink>>,
}

impl Logger {
    /// Creates a logger with no sinks; records on it go nowhere until
    /// [`with_sink`](Self::with_sink) or [`push_sink`](Self::push_sink) is used.
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            sinks: Vec::new(),
        }
    }

    /// `system.log` for Info and above, plus the mode-gated `debug.log`, both
    /// under `log_dir`.
    pub fn standard(
        channel: impl Into<String>,
        log_dir: impl AsRef<Path>,
        settings: Arc<dyn SettingsSource>,
    ) -> Self {
        let log_dir = log_dir.as_ref();
        Self::new(channel)
            .with_sink(Arc::new(FileSink::new(
                SYSTEM_SINK,
                log_dir.join(SYSTEM_LOG_FILE),
                LogLevel::Info,
            )))
            .with_sink(Arc::new(DebugFileSink::in_dir(log_dir, settings)))
    }

    /// Builder form of [`push_sink`](Self::push_sink).
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.push_sink(sink);
        self
    }

    /// Registers `sink` after the existing ones. Dispatch order follows
    /// registration order.
    pub fn push_sink(&mut self, sink: Arc<dyn LogSink>) {
        self.sinks.push(sink);
    }

    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    #[must_use]
    pub fn sinks(&self) -> &[Arc<dyn LogSink>] {
        &self.sinks
    }

    #[must_use]
    pub fn find_sink(&self, name: &str) -> Option<&Arc<dyn LogSink>> {
        self.sinks.iter().find(|s| s.name() == name)
    }

    #[must_use]
    pub fn sink_path(&self, name: &str) -> Option<&Path> {
        self.find_sink(name).and_then(|s| s.target_path())
    }

    /// Path of the registered debug sink, if there is one.
    #[must_use]
    pub fn debug_log_path(&self) -> Option<&Path> {
        self.sink_path(DebugFileSink::NAME)
    }

    /// Builds a record on this channel and dispatches it.
    ///
    /// # Returns
    /// The number of sinks that wrote the record.
    ///
    /// # Errors
    /// The first sink failure, unchanged.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) -> LogResult<usize> {
        self.dispatch(&LogRecord::new(level, message, self.channel.as_str()))
    }

    /// Forwards an existing record to every sink that handles its level.
    ///
    /// # Arguments
    ///
    /// * `record` - The record to forward. Its channel is kept as is, even if
    ///   it differs from this logger's channel.
    ///
    /// # Returns
    ///
    /// The number of sinks that reported [`SinkOutcome::Written`]. Skipped
    /// records are not counted.
    ///
    /// # Errors
    ///
    /// The first sink error, unchanged. Sinks registered after the failing
    /// one do not see the record.
    pub fn dispatch(&self, record: &LogRecord) -> LogResult<usize> {
        let mut written = 0;
        for sink in self.sinks.iter().filter(|s| s.is_handling(record.level)) {
            if sink.handle(record)? == SinkOutcome::Written {
                written += 1;
            }
        }
        Ok(written)
    }

    /// Shorthand for [`log`](Self::log) at [`LogLevel::Trace`].
    pub fn trace(&self, message: impl Into<String>) -> LogResult<usize> {
        self.log(LogLevel::Trace, message)
    }

    /// Logs at [`LogLevel::Debug`]. In a production mode with "log to file"
    /// off, the debug sink skips it and no file is created.
    pub fn debug(&self, message: impl Into<String>) -> LogResult<usize> {
        self.log(LogLevel::Debug, message)
    }

    /// Shorthand for [`log`](Self::log) at [`LogLevel::Info`].
    pub fn info(&self, message: impl Into<String>) -> LogResult<usize> {
        self.log(LogLevel::Info, message)
    }

    /// Shorthand for [`log`](Self::log) at [`LogLevel::Warn`].
    pub fn warn(&self, message: impl Into<String>) -> LogResult<usize> {
        self.log(LogLevel::Warn, message)
    }

    /// Shorthand for [`log`](Self::log) at [`LogLevel::Error`].
    pub fn error(&self, message: impl Into<String>) -> LogResult<usize> {
        self.log(LogLevel::Error, message)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.sinks.iter().map(|s| s.name()).collect();
        f.debug_struct("Logger")
            .field("channel", &self.channel)
            .field("sinks", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::deploy::{DeploySettings, DeploymentMode};
    use crate::log::NoopLogSink;
    use std::fs;

    fn production() -> Arc<dyn SettingsSource> {
        Arc::new(DeploySettings::new(DeploymentMode::ProductionFull, false))
    }

    #[test]
    fn standard_layout_exposes_both_paths() {
        let dir = tempfile::tempdir().unwrap();
        let logger = Logger::standard("main", dir.path(), production());
        assert_eq!(logger.sinks().len(), 2);
        assert_eq!(
            logger.debug_log_path(),
            Some(dir.path().join("debug.log").as_path())
        );
        assert_eq!(
            logger.sink_path(SYSTEM_SINK),
            Some(dir.path().join("system.log").as_path())
        );
        assert!(logger.find_sink("missing").is_none());
    }

    #[test]
    fn system_log_is_not_mode_gated() {
        let dir = tempfile::tempdir().unwrap();
        let logger = Logger::standard("main", dir.path(), production());

        assert_eq!(logger.info("started").unwrap(), 1);
        assert_eq!(logger.debug("hidden").unwrap(), 0);

        let system = fs::read_to_string(dir.path().join("system.log")).unwrap();
        assert!(system.contains("main.INFO: started"));
        assert!(!system.contains("hidden"));
        assert!(!dir.path().join("debug.log").exists());
    }

    #[test]
    fn info_reaches_both_sinks_in_developer_mode() {
        let dir = tempfile::tempdir().unwrap();
        let logger = Logger::standard("main", dir.path(), Arc::new(DeploySettings::default()));
        assert_eq!(logger.info("both").unwrap(), 2);
        assert_eq!(logger.debug("debug only").unwrap(), 1);
        assert_eq!(logger.trace("nobody").unwrap(), 0);
    }

    #[test]
    fn first_sink_error_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let logger = Logger::new("main")
            .with_sink(Arc::new(FileSink::new("broken", dir.path(), LogLevel::Trace)));
        assert!(logger.error("boom").is_err());
    }

    #[test]
    fn noop_sink_counts_as_skipped() {
        let logger = Logger::new("main").with_sink(Arc::new(NoopLogSink));
        assert_eq!(logger.warn("ignored").unwrap(), 0);
        assert_eq!(format!("{logger:?}"), r#"Logger { channel: "main", sinks: ["noop"] }"#);
    }
}
