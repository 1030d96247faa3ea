//! Tracing layer that forwards each event as one formatted line to a [`LogSink`].

use std::fmt::Write;

use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

const MAX_LINE_LEN: usize = 8_000;

/// Collects "message key=value ..." from an event's fields.
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn push_field(&mut self, name: &str, value: std::fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        write!(self.fields, "{}={}", name, value).ok();
    }

    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            write!(self.message, "{:?}", value).ok();
        } else {
            self.push_field(field.name(), format_args!("{:?}", value));
        }
    }
}

/// Formats an event as `[LEVEL] target: message key=value`.
fn format_event(event: &tracing::Event<'_>) -> String {
    let level = *event.metadata().level();
    let target = event.metadata().target();
    let mut visitor = LineVisitor::default();
    event.record(&mut visitor);
    let rest = visitor.finish();
    let line = if rest.is_empty() {
        format!("[{}] {}", level, target)
    } else {
        format!("[{}] {}: {}", level, target, rest)
    };
    let chars = line.chars().count();
    if chars > MAX_LINE_LEN {
        let trunc: String = line.chars().take(MAX_LINE_LEN).collect();
        format!("{}… ({} chars)", trunc, chars)
    } else {
        line
    }
}

/// Layer that sends each formatted event to `sink` when present.
pub fn log_sink_layer(sink: Option<LogSink>) -> LogSinkLayer {
    LogSinkLayer { sink }
}

#[derive(Clone)]
pub struct LogSinkLayer {
    sink: Option<LogSink>,
}

impl<S> Layer<S> for LogSinkLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if let Some(ref sink) = self.sink {
            sink(format_event(event));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::layer::SubscriberExt;

    use super::*;

    fn capture<F: FnOnce()>(f: F) -> Vec<String> {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = Arc::clone(&lines);
        let sink: LogSink = Arc::new(move |line| sink_lines.lock().unwrap().push(line));
        let subscriber = tracing_subscriber::registry().with(log_sink_layer(Some(sink)));
        tracing::subscriber::with_default(subscriber, f);
        let out = lines.lock().unwrap().clone();
        out
    }

    #[test]
    fn test_message_and_fields() {
        let lines = capture(|| {
            tracing::warn!(target: "acme", key = "app-theme", "Error saving theme");
        });
        assert_eq!(lines, vec![r#"[WARN] acme: Error saving theme key="app-theme""#]);
    }

    #[test]
    fn test_fields_without_message() {
        let lines = capture(|| {
            tracing::info!(target: "acme", revision = 3u64);
        });
        assert_eq!(lines, vec!["[INFO] acme: revision=3"]);
    }

    #[test]
    fn test_long_lines_are_truncated() {
        let long = "x".repeat(MAX_LINE_LEN * 2);
        let lines = capture(|| {
            tracing::info!(target: "acme", "{}", long);
        });
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" chars)"));
        assert!(lines[0].chars().count() < MAX_LINE_LEN + 32);
    }

    #[test]
    fn test_line_length_counts_chars() {
        let fits = "é".repeat(MAX_LINE_LEN - 100);
        let long = "é".repeat(MAX_LINE_LEN * 2);
        let lines = capture(|| {
            tracing::info!(target: "acme", "{}", fits);
            tracing::info!(target: "acme", "{}", long);
        });
        assert_eq!(lines[0], format!("[INFO] acme: {}", fits));
        let total = "[INFO] acme: ".len() + MAX_LINE_LEN * 2;
        assert!(lines[1].ends_with(&format!("… ({} chars)", total)));
        assert!(lines[1].starts_with("[INFO] acme: éé"));
    }

    #[test]
    fn test_no_sink_is_silent() {
        let subscriber = tracing_subscriber::registry().with(log_sink_layer(None));
        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("dropped");
        });
    }
}
