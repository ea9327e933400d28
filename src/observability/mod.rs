//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → JsonFileExporter → OTLP JSON file
//! ```
//!
//! Traces go to `~/.local/share/zellij/donation-board/donation-board-otlp.json`
//! (seen as `/host/...` from the sandbox), one OTLP JSON document per line.
//! The file rotates at 10 MB and keeps 3 backups.
//!
//! The trace level comes from the `trace_level` plugin option, default
//! `"info"`. Submission spans carry their trace context through the web
//! request context map so the response handling joins the same trace.
//!
//! # Modules
//!
//! - [`init`]: Subscriber installation
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: Size-rotated trace file

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL, SERVICE_NAME};
