pub const DEFAULT_LOGGING_BUFFER_SIZE: usize = 100;
pub const QUICKWIT_LOGGING_CHANNEL_CAPACITY: usize = 1024;
pub const QUICKWIT_FLUSH_INTERVAL_SECS: u64 = 10;

/// Values of the `task` field shipped to Quickwit, with the index each one lands in.
pub const QUICKWIT_MARKER_INDEXES: [(&str, &str); 4] = [
    ("http_request", "http_requests"),
    ("participants_upload", "participants_uploads"),
    ("winner_draw", "winner_draws"),
    ("sessions_count", "sessions_counts"),
];
