/// Primary keys are SQLite `INTEGER PRIMARY KEY AUTOINCREMENT` rowids.
pub type DbId = i64;

/// All timestamps are unix seconds (UTC).
pub type UnixTimestamp = i64;

/// Current time as unix seconds.
pub fn now_unix() -> UnixTimestamp {
    chrono::Utc::now().timestamp()
}
