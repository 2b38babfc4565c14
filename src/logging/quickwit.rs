use crate::logging::consts::{
    DEFAULT_LOGGING_BUFFER_SIZE, QUICKWIT_FLUSH_INTERVAL_SECS, QUICKWIT_LOGGING_CHANNEL_CAPACITY,
};
use reqwest::Client;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task;
use tracing::field::{Field, Visit};
use tracing_core::Event;
use tracing_core::Subscriber;
use tracing_subscriber::layer::Context as TracingContext;
use tracing_subscriber::Layer;
use url::Url;

type LogRecord = Map<String, Value>;

/// Routes events carrying a marker field to Quickwit indexes, e.g. every event with
/// `task = "http_request"` to the `http_requests` index.
pub struct QuickwitLoggingLayerBuilder {
    quickwit_url: Url,
    marker_field: String,
    marker_to_index: HashMap<String, String>,
    batch_size: usize,
}

impl QuickwitLoggingLayerBuilder {
    pub fn new(quickwit_url: Url) -> Self {
        Self {
            quickwit_url,
            marker_field: String::new(),
            marker_to_index: HashMap::new(),
            batch_size: DEFAULT_LOGGING_BUFFER_SIZE,
        }
    }

    pub fn marker_field(mut self, field: &str) -> Self {
        self.marker_field = field.to_string();
        self
    }

    pub fn map_marker_to_index(mut self, marker_value: &str, index_id: &str) -> Self {
        self.marker_to_index
            .insert(marker_value.to_string(), index_id.to_string());
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Must be called from within a Tokio runtime: spawns the shipping task.
    pub fn build(self) -> QuickwitLoggingLayer {
        let (sender, receiver) = mpsc::channel(QUICKWIT_LOGGING_CHANNEL_CAPACITY);
        let shipper = QuickwitShipper {
            http_client: Client::new(),
            quickwit_url: self.quickwit_url,
            batch_size: self.batch_size,
        };
        task::spawn(shipper.run(receiver));
        QuickwitLoggingLayer {
            sender,
            marker_field: self.marker_field,
            marker_to_index: self.marker_to_index,
        }
    }
}

pub struct QuickwitLoggingLayer {
    sender: mpsc::Sender<QuickwitLogMessage>,
    marker_field: String,
    marker_to_index: HashMap<String, String>,
}

impl QuickwitLoggingLayer {
    fn index_for(&self, event: &Event<'_>) -> Option<String> {
        let mut visitor = MarkerVisitor {
            marker_field: &self.marker_field,
            marker_value: None,
        };
        event.record(&mut visitor);
        visitor
            .marker_value
            .and_then(|value| self.marker_to_index.get(&value).cloned())
    }
}

impl<S: Subscriber> Layer<S> for QuickwitLoggingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: TracingContext<'_, S>) {
        if let Some(index_id) = self.index_for(event) {
            let mut visitor = RecordVisitor::default();
            event.record(&mut visitor);
            // Dropped when the channel is full; logging must never block a request.
            let _ = self.sender.try_send(QuickwitLogMessage {
                index_id,
                record: visitor.record,
            });
        }
    }
}

struct QuickwitLogMessage {
    index_id: String,
    record: LogRecord,
}

struct QuickwitShipper {
    http_client: Client,
    quickwit_url: Url,
    batch_size: usize,
}

impl QuickwitShipper {
    async fn run(self, mut receiver: mpsc::Receiver<QuickwitLogMessage>) {
        let mut buffers: HashMap<String, Vec<LogRecord>> = HashMap::new();
        let mut flush_interval =
            tokio::time::interval(Duration::from_secs(QUICKWIT_FLUSH_INTERVAL_SECS));
        loop {
            tokio::select! {
                message = receiver.recv() => {
                    let Some(QuickwitLogMessage { index_id, record }) = message else {
                        break;
                    };
                    let buffer = buffers.entry(index_id.clone()).or_default();
                    buffer.push(record);
                    if buffer.len() >= self.batch_size {
                        self.ship(&index_id, buffer).await;
                    }
                }
                _ = flush_interval.tick() => {
                    for (index_id, buffer) in buffers.iter_mut() {
                        self.ship(index_id, buffer).await;
                    }
                }
            }
        }
        for (index_id, buffer) in buffers.iter_mut() {
            self.ship(index_id, buffer).await;
        }
    }

    async fn ship(&self, index_id: &str, buffer: &mut Vec<LogRecord>) {
        if buffer.is_empty() {
            return;
        }
        let mut ndjson_body = Vec::new();
        for record in buffer.drain(..) {
            if let Err(error) = write_ndjson_line(&mut ndjson_body, &record) {
                eprintln!("Failed to serialize a log record for Quickwit: {error}");
            }
        }
        let ingest_url = match self
            .quickwit_url
            .join(&format!("api/v1/{index_id}/ingest"))
        {
            Ok(url) => url,
            Err(error) => {
                eprintln!("Failed to build the Quickwit ingest URL for `{index_id}`: {error}");
                return;
            }
        };
        // Reporting through `tracing` here would feed back into this layer.
        if let Err(error) = self
            .http_client
            .post(ingest_url)
            .body(ndjson_body)
            .send()
            .await
        {
            eprintln!("Failed to ship logs to Quickwit index `{index_id}`: {error}");
        }
    }
}

struct MarkerVisitor<'a> {
    marker_field: &'a str,
    marker_value: Option<String>,
}

impl Visit for MarkerVisitor<'_> {
    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == self.marker_field {
            self.marker_value = Some(value.to_string());
        }
    }
}

#[derive(Default)]
struct RecordVisitor {
    record: LogRecord,
}

impl Visit for RecordVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record.insert(field.name().to_string(), value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.record.insert(field.name().to_string(), value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record.insert(field.name().to_string(), value.into());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record.insert(field.name().to_string(), value.into());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.record.insert(field.name().to_string(), value.into());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.record
            .insert(field.name().to_string(), format!("{value:?}").into());
    }
}

fn write_ndjson_line<W: io::Write>(mut writer: W, record: &LogRecord) -> io::Result<()> {
    serde_json::to_writer(&mut writer, record)?;
    writer.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndjson_lines_are_newline_terminated() {
        let mut record = LogRecord::new();
        record.insert(String::from("task"), Value::from("http_request"));
        record.insert(String::from("status"), Value::from(200_u64));
        let mut body = Vec::new();

        write_ndjson_line(&mut body, &record).expect("serializable record");
        write_ndjson_line(&mut body, &record).expect("serializable record");

        let body = String::from_utf8(body).expect("valid UTF-8");
        let lines = body.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        let parsed: Value = serde_json::from_str(lines[0]).expect("valid JSON");
        assert_eq!(parsed["task"], "http_request");
        assert_eq!(parsed["status"], 200);
    }

    #[tokio::test]
    async fn only_marked_events_are_routed() {
        use tracing_subscriber::layer::SubscriberExt;

        let layer = QuickwitLoggingLayerBuilder::new(
            Url::parse("http://127.0.0.1:9").expect("valid URL"),
        )
        .marker_field("task")
        .map_marker_to_index("http_request", "http_requests")
        .build();
        let (sender, mut receiver) = mpsc::channel(8);
        let layer = QuickwitLoggingLayer { sender, ..layer };
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(task = "http_request", status = 200_u64);
            tracing::info!(task = "something_else");
            tracing::info!("unmarked");
        });

        let message = receiver.try_recv().expect("marked event is routed");
        assert_eq!(message.index_id, "http_requests");
        assert_eq!(message.record["status"], 200);
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn every_domain_task_has_an_index() {
        use crate::logging::consts::QUICKWIT_MARKER_INDEXES;
        use tracing_subscriber::layer::SubscriberExt;

        let layer = QUICKWIT_MARKER_INDEXES
            .iter()
            .fold(
                QuickwitLoggingLayerBuilder::new(
                    Url::parse("http://127.0.0.1:9").expect("valid URL"),
                )
                .marker_field("task"),
                |builder, (marker_value, index_id)| {
                    builder.map_marker_to_index(marker_value, index_id)
                },
            )
            .build();
        let (sender, mut receiver) = mpsc::channel(8);
        let layer = QuickwitLoggingLayer { sender, ..layer };
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(task = "participants_upload", participants_count = 3_u64);
            tracing::info!(task = "winner_draw", winner_index = 2_u64);
            tracing::info!(task = "sessions_count", sessions_count = 1_u64);
        });

        let indexes = std::iter::from_fn(|| receiver.try_recv().ok())
            .map(|message| message.index_id)
            .collect::<Vec<_>>();
        assert_eq!(
            indexes,
            ["participants_uploads", "winner_draws", "sessions_counts"]
        );
    }
}
