//! Tracer provider exporting spans to a local OTLP JSON file.
//!
//! The plugin runs inside a WASI sandbox with no collector to talk to, so
//! spans go to a rotating file through a synchronous simple exporter.

use super::file_writer::RotatingFile;
use super::span_formatter::OtlpJsonEncoder;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// `SpanExporter` writing one OTLP JSON document per batch.
struct JsonFileExporter {
    file: RotatingFile,
    encoder: OtlpJsonEncoder,
    is_shutdown: AtomicBool,
}

impl JsonFileExporter {
    const fn new(path: PathBuf, resource: Resource, scope: &'static str) -> Self {
        Self {
            file: RotatingFile::new(path),
            encoder: OtlpJsonEncoder::new(resource, scope),
            is_shutdown: AtomicBool::new(false),
        }
    }
}

impl SpanExporter for JsonFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown.load(Ordering::SeqCst) {
            Err(TraceError::from("exporter is shut down"))
        } else {
            let line = self.encoder.encode_batch(&batch).to_string();
            self.file
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    /// The resource is fixed at construction.
    fn set_resource(&mut self, _resource: &Resource) {}
}

impl std::fmt::Debug for JsonFileExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileExporter")
            .field("file", &self.file)
            .field("encoder", &self.encoder)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a tracer provider whose spans are written to `path` as soon as
/// they end.
pub fn create_tracer_provider(
    path: PathBuf,
    resource: Resource,
    scope: &'static str,
) -> TracerProvider {
    let exporter = JsonFileExporter::new(path, resource.clone(), scope);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer as _, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn finished_spans_land_in_the_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("spans.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", "DonationBoard")]);

        let provider = create_tracer_provider(path.clone(), resource, "DonationBoard");
        provider.tracer("test").in_span("submit_donation", |_cx| {});

        let contents = std::fs::read_to_string(path).expect("trace file written");
        let doc: serde_json::Value =
            serde_json::from_str(contents.lines().next().expect("one line")).expect("valid json");
        assert_eq!(
            doc["resourceSpans"][0]["scopeSpans"][0]["spans"][0]["name"],
            "submit_donation"
        );
    }
}
