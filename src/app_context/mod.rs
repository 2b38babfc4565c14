use crate::cli::Args;
use crate::map::cache::DistanceCache;
use crate::map::models::LatLng;
use crate::storage::interface::ISessionStorage;
use crate::storage::sessions::HashMapSessionsStorage;
use thiserror::Error;

#[derive(Clone)]
pub struct AppContext<SS: ISessionStorage> {
    pub sessions: SS,
    pub giveaway: Giveaway,
    pub distances: DistanceCache,
}

/// Process-wide settings of the draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Giveaway {
    pub location: LatLng,
    pub leaderboard_size: usize,
}

#[derive(Debug, Error)]
#[error("The giveaway location ({0:?}) is outside of valid latitude/longitude bounds.")]
pub struct InvalidGiveawayLocation(pub LatLng);

pub struct RequestContext {
    pub session_id: String,
}

pub fn init(args: &Args) -> Result<AppContext<HashMapSessionsStorage>, InvalidGiveawayLocation> {
    let location = LatLng::new(args.giveaway_lat, args.giveaway_lng);
    if !location.is_valid() {
        return Err(InvalidGiveawayLocation(location));
    }
    Ok(AppContext {
        sessions: HashMapSessionsStorage::default(),
        giveaway: Giveaway {
            location,
            leaderboard_size: args.leaderboard_size,
        },
        distances: DistanceCache::default(),
    })
}
