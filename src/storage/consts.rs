pub const SESSION_ID_LENGTH: usize = 10;
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 3600;
pub const SESSION_SWEEP_INTERVAL_SECS: u64 = 60;
