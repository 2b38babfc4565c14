pub const EXPECTED_COLUMNS: [&str; 2] = ["name", "coordinates"];

pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;
