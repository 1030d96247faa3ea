//! SQL schema for the theme DB. Applied on open.

/// Key-value slots; `updated_at` is unix milliseconds (UTC).
pub const KV: &str = "
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL
);
";

/// Run all migrations on an open connection.
pub fn run_all(conn: &rusqlite::Connection) -> crate::Result<()> {
    conn.execute_batch(KV)?;
    Ok(())
}
