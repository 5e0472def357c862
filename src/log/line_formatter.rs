//! One-line text rendering of a [`LogRecord`].
//!
//! ```text
//! [2026-10-16 09:30:00] main.DEBUG: test message
//! ```
//!
//! Embedded line breaks are flattened to spaces so that one record is always
//! one line in the file.

use crate::log::log_record::LogRecord;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[must_use]
pub fn format_line(record: &LogRecord) -> String {
    let message: String = record
        .message
        .split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "[{}] {}.{}: {}\n",
        record.timestamp.format(DATETIME_FORMAT),
        record.channel,
        record.level,
        message
    )
}
