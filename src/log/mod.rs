pub mod debug_file_sink;
pub mod file_sink;
pub mod line_formatter;
pub mod log_level;
pub mod log_macros;
pub mod log_record;
pub mod log_sink;
pub mod logger;
pub mod noop_log_sink;

pub use debug_file_sink::DebugFileSink;
pub use file_sink::FileSink;
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use log_sink::{LogSink, SinkOutcome};
pub use logger::Logger;
pub use noop_log_sink::NoopLogSink;
