//! Leveled logging macros over a [`Logger`](crate::log::Logger) or a single
//! [`LogSink`](crate::log::LogSink).
//!
//! `logger_*!` format their arguments and return the `LogResult<usize>` of
//! [`Logger::log`](crate::log::Logger::log). `sink_*!` build a record whose
//! channel is the calling module path and return the sink's
//! `LogResult<SinkOutcome>`.

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {{
        $logger.log($lvl, format!($($arg)*))
    }};
}

#[macro_export]
macro_rules! sink_log {
    ($sink:expr, $lvl:expr, $($arg:tt)*) => {{
        let __rec = $crate::log::LogRecord::new($lvl, format!($($arg)*), module_path!());
        $crate::log::LogSink::handle(&$sink, &__rec)
    }};
}

#[macro_export]
macro_rules! logger_trace { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::LogLevel::Trace, $($arg)*) } }
#[macro_export]
macro_rules! logger_debug { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::LogLevel::Debug, $($arg)*) } }
#[macro_export]
macro_rules! logger_info  { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::LogLevel::Info, $($arg)*) } }
#[macro_export]
macro_rules! logger_warn  { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::LogLevel::Warn, $($arg)*) } }
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::LogLevel::Error, $($arg)*) } }

#[macro_export]
macro_rules! sink_debug { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::log::LogLevel::Debug, $($arg)*) } }
