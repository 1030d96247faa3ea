//! Span macros for theme and storage operations, plus [`record_error`].
//!
//! Both macros open a `debug`-level span with `error` and `error.message`
//! declared empty so [`record_error`] can fill them in:
//!
//! ```rust
//! use acme_observability::{storage_span, theme_span};
//!
//! let commit = theme_span!("mobile", "commit");
//! let _entered = commit.enter();
//! commit.record("revision", 3u64);
//!
//! let read = storage_span!("sqlite", "get", "app-theme");
//! read.in_scope(|| tracing::debug!("reading"));
//! ```

/// `theme.operation` span: `app`, `operation`, later `revision`.
#[macro_export]
macro_rules! theme_span {
    ($app:expr, $operation:expr) => {
        tracing::debug_span!(
            "theme.operation",
            app = $app,
            operation = $operation,
            revision = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// `storage.operation` span: backend, operation and record key.
#[macro_export]
macro_rules! storage_span {
    ($backend:expr, $operation:expr, $key:expr) => {
        tracing::debug_span!(
            "storage.operation",
            storage.backend = $backend,
            storage.operation = $operation,
            storage.key = $key,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Marks the current span failed and logs `error` at warn.
pub fn record_error<E: std::error::Error + ?Sized>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", tracing::field::display(error));
    tracing::warn!(error = %error, "operation failed");
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::layer::SubscriberExt;

    use super::*;
    use crate::config::LogSink;
    use crate::sink_layer::log_sink_layer;

    #[test]
    fn test_record_error_logs_warning() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = Arc::clone(&lines);
        let sink: LogSink = Arc::new(move |line| sink_lines.lock().unwrap().push(line));
        let subscriber = tracing_subscriber::registry().with(log_sink_layer(Some(sink)));

        tracing::subscriber::with_default(subscriber, || {
            let span = storage_span!("memory", "set", "app-theme");
            let _entered = span.enter();
            let err = std::io::Error::other("disk full");
            record_error(&err);
        });

        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[WARN] acme_observability::spans: operation failed"));
        assert!(lines[0].contains("error=disk full"));
    }
}
