use std::path::Path;

use crate::{
    error::LogResult,
    log::{log_level::LogLevel, log_record::LogRecord},
};

/// What a sink did with a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkOutcome {
    Written,
    /// Filtered out by level or policy. Not an error.
    Skipped,
}

/// A destination the [`Logger`](crate::log::Logger) forwards records to.
pub trait LogSink: Send + Sync {
    /// Stable name used to look the sink up on a logger.
    fn name(&self) -> &str;

    /// Cheap level pre-check; [`handle`](Self::handle) may still skip.
    fn is_handling(&self, level: LogLevel) -> bool;

    /// Writes `record` to the sink's destination, or decides not to.
    ///
    /// # Arguments
    ///
    /// * `record` - The record to persist. Its level may be below what the
    ///   sink accepts; implementations re-check it.
    ///
    /// # Returns
    ///
    /// [`SinkOutcome::Written`] when the record reached the destination,
    /// [`SinkOutcome::Skipped`] when a level or policy filter dropped it.
    ///
    /// # Errors
    ///
    /// Destination failures such as [`LogError::Io`](crate::error::LogError::Io).
    /// Implementations do not retry.
    fn handle(&self, record: &LogRecord) -> LogResult<SinkOutcome>;

    /// File the sink writes to, if any.
    fn target_path(&self) -> Option<&Path> {
        None
    }
}
