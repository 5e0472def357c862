use crate::{
    error::LogResult,
    log::{
        log_level::LogLevel,
        log_record::LogRecord,
        log_sink::{LogSink, SinkOutcome},
    },
};

/// Accepts every record and discards it.
#[derive(Debug, Clone, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    fn name(&self) -> &str {
        "noop"
    }

    #[inline]
    fn is_handling(&self, _level: LogLevel) -> bool {
        true
    }

    #[inline]
    fn handle(&self, _record: &LogRecord) -> LogResult<SinkOutcome> {
        Ok(SinkOutcome::Skipped)
    }
}
