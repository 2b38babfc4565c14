/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const DEFAULT_GIVEAWAY_LAT: f64 = -33.867582661116245;
pub const DEFAULT_GIVEAWAY_LNG: f64 = 151.05560569089798;

pub const MAP_ZOOM: u8 = 12;

pub const GIVEAWAY_MARKER_COLOR: &str = "#FF0000";
pub const GIVEAWAY_MARKER_SIZE: u32 = 100;
pub const GIVEAWAY_MARKER_LABEL: &str = "Giveaway Location";

pub const PARTICIPANT_MARKER_COLOR: &str = "#2196F3";
pub const PARTICIPANT_MARKER_SIZE: u32 = 20;

pub const WINNER_MARKER_COLOR: &str = "#4CAF50";
pub const WINNER_MARKER_SIZE: u32 = 200;

/// Entries kept by the distance memo before it is flushed.
pub const DISTANCE_CACHE_CAPACITY: usize = 65_536;
