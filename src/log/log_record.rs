use chrono::{DateTime, Utc};

use crate::log::log_level::LogLevel;

/// A single log event, created per call and dropped once every sink has seen it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// The severity level of the record.
    pub level: LogLevel,
    /// The message text, written verbatim by file sinks.
    pub message: String,
    /// Name of the logger channel that produced the record.
    pub channel: String,
    /// When the record was created.
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// Creates a record stamped with the current time.
    ///
    /// # Example
    ///
    /// ```rust
    /// use modesink::log::{LogLevel, LogRecord};
    ///
    /// let rec = LogRecord::new(LogLevel::Debug, "test message", "main");
    /// assert_eq!(rec.message, "test message");
    /// ```
    pub fn new(level: LogLevel, message: impl Into<String>, channel: impl Into<String>) -> Self {
        Self::at(level, message, channel, Utc::now())
    }

    pub fn at(
        level: LogLevel,
        message: impl Into<String>,
        channel: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            level,
            message: message.into(),
            channel: channel.into(),
            timestamp,
        }
    }
}
