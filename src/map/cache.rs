use crate::map::consts::DISTANCE_CACHE_CAPACITY;
use crate::map::distance_km;
use crate::map::models::LatLng;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

type CacheKey = [u64; 4];

/// Memoizes `distance_km` by the exact bit patterns of its four input coordinates.
#[derive(Clone, Debug, Default)]
pub struct DistanceCache {
    storage: Arc<RwLock<HashMap<CacheKey, f64>>>,
}

impl DistanceCache {
    pub fn distance_km(&self, from: LatLng, to: LatLng) -> f64 {
        let key = [
            from.lat.to_bits(),
            from.lng.to_bits(),
            to.lat.to_bits(),
            to.lng.to_bits(),
        ];
        if let Some(distance) = self
            .storage
            .read()
            .ok()
            .and_then(|storage| storage.get(&key).copied())
        {
            return distance;
        }
        let distance = distance_km(from, to);
        if let Ok(mut storage) = self.storage.write() {
            if storage.len() >= DISTANCE_CACHE_CAPACITY {
                storage.clear();
            }
            storage.insert(key, distance);
        }
        distance
    }

    pub fn len(&self) -> usize {
        self.storage.read().map_or(0, |storage| storage.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_value_matches_direct_computation() {
        let cache = DistanceCache::default();
        let from = LatLng::new(-33.867582661116245, 151.05560569089798);
        let to = LatLng::new(40.7128, -74.0060);

        let first = cache.distance_km(from, to);
        let second = cache.distance_km(from, to);

        assert_eq!(first, distance_km(from, to));
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn argument_order_is_part_of_the_key() {
        let cache = DistanceCache::default();
        let a = LatLng::new(1.0, 2.0);
        let b = LatLng::new(3.0, 4.0);

        cache.distance_km(a, b);
        cache.distance_km(b, a);

        assert_eq!(cache.len(), 2);
    }
}
