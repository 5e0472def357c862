use std::path::{Path, PathBuf};

use crate::{
    error::LogResult,
    filesystem::append_line,
    log::{
        line_formatter::format_line,
        log_level::LogLevel,
        log_record::LogRecord,
        log_sink::{LogSink, SinkOutcome},
    },
};

/// Appends every record at or above `min_level` to a file.
///
/// The file is opened per record in append mode (created if absent) and
/// closed before `handle` returns, so deleting it between calls is safe.
#[derive(Debug, Clone)]
pub struct FileSink {
    name: String,
    path: PathBuf,
    min_level: LogLevel,
}

impl FileSink {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, min_level: LogLevel) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            min_level,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_handling(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn handle(&self, record: &LogRecord) -> LogResult<SinkOutcome> {
        if !self.is_handling(record.level) {
            return Ok(SinkOutcome::Skipped);
        }
        append_line(&self.path, &format_line(record))?;
        Ok(SinkOutcome::Written)
    }

    fn target_path(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
