//! Common test utilities.

use std::sync::{Arc, Mutex};

use acme_core::{App, ColorProvider, SqliteStorage};
use acme_observability::{log_sink_layer, LogSink};
use tempfile::TempDir;
use tracing_subscriber::layer::SubscriberExt;

/// Runs `f` with a subscriber that records every event as a formatted line.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink_lines = Arc::clone(&lines);
    let sink: LogSink = Arc::new(move |line| sink_lines.lock().unwrap().push(line));
    let subscriber = tracing_subscriber::registry().with(log_sink_layer(Some(sink)));
    let result = tracing::subscriber::with_default(subscriber, f);
    let out = lines.lock().unwrap().clone();
    (result, out)
}

/// A fresh data directory, removed on drop.
pub fn data_dir() -> TempDir {
    tempfile::tempdir().expect("create temp data dir")
}

/// Mounts `app` over the SQLite store in `dir`.
#[allow(dead_code)]
pub fn mount_sqlite(app: App, dir: &TempDir) -> ColorProvider {
    let storage = SqliteStorage::open_at(dir.path()).expect("open sqlite storage");
    ColorProvider::builder(app).with_storage(storage).mount()
}
