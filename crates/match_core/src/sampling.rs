//! Random demo rosters drawn from fixed driver and rider pools.
//!
//! Both pools sit in lower Manhattan so every sampled rider has a few
//! plausible drivers nearby. Sampling shuffles a pool, takes a random-size
//! prefix and numbers it from 1.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::agents::{Driver, Rider};
use crate::geo::Location;

struct PoolDriver {
    name: &'static str,
    lat: f64,
    lng: f64,
    capacity: u32,
}

struct PoolRider {
    name: &'static str,
    pickup: (f64, f64),
    dropoff: (f64, f64),
    passengers: u32,
}

const fn d(name: &'static str, lat: f64, lng: f64, capacity: u32) -> PoolDriver {
    PoolDriver {
        name,
        lat,
        lng,
        capacity,
    }
}

const fn r(
    name: &'static str,
    pickup: (f64, f64),
    dropoff: (f64, f64),
    passengers: u32,
) -> PoolRider {
    PoolRider {
        name,
        pickup,
        dropoff,
        passengers,
    }
}

const DRIVER_POOL: [PoolDriver; 12] = [
    d("Alice", 40.7128, -74.0060, 4),
    d("Bob", 40.7150, -74.0070, 3),
    d("Charlie", 40.7100, -74.0050, 5),
    d("Diana", 40.7200, -74.0100, 4),
    d("Evan", 40.7050, -74.0020, 3),
    d("Fiona", 40.7182, -74.0150, 4),
    d("George", 40.7035, -74.0115, 2),
    d("Hannah", 40.7270, -74.0005, 5),
    d("Ian", 40.6990, -74.0180, 4),
    d("Julia", 40.7095, -74.0130, 3),
    d("Kyle", 40.7168, -74.0010, 6),
    d("Lena", 40.7215, -74.0065, 4),
];

const RIDER_POOL: [PoolRider; 14] = [
    r("John", (40.7128, -74.0060), (40.7160, -74.0100), 1),
    r("Sarah", (40.7150, -74.0070), (40.7180, -74.0120), 2),
    r("Mike", (40.7100, -74.0050), (40.7130, -74.0080), 1),
    r("Emma", (40.7200, -74.0100), (40.7210, -74.0090), 3),
    r("Lisa", (40.7050, -74.0020), (40.7070, -74.0040), 2),
    r("David", (40.7120, -74.0065), (40.7140, -74.0110), 1),
    r("Olivia", (40.7185, -74.0140), (40.7240, -74.0055), 2),
    r("Noah", (40.7062, -74.0085), (40.7115, -74.0150), 1),
    r("Ava", (40.7005, -74.0030), (40.7090, -74.0065), 3),
    r("Liam", (40.7250, -74.0025), (40.7190, -74.0125), 2),
    r("Mia", (40.7135, -74.0170), (40.7180, -74.0185), 1),
    r("Ethan", (40.6978, -74.0102), (40.7045, -74.0145), 2),
    r("Zoe", (40.7290, -74.0080), (40.7330, -74.0035), 1),
    r("Leo", (40.7030, -74.0008), (40.7075, -74.0095), 4),
];

/// Number of entries in the driver pool.
pub const DRIVER_POOL_SIZE: usize = DRIVER_POOL.len();
/// Number of entries in the rider pool.
pub const RIDER_POOL_SIZE: usize = RIDER_POOL.len();

/// How many drivers and riders to draw, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleParams {
    pub drivers_min: usize,
    pub drivers_max: usize,
    pub riders_min: usize,
    pub riders_max: usize,
    /// Fixed seed for reproducible samples; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SampleParams {
    fn default() -> Self {
        Self {
            drivers_min: 6,
            drivers_max: 10,
            riders_min: 8,
            riders_max: 14,
            seed: None,
        }
    }
}

impl SampleParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_driver_range(mut self, min: usize, max: usize) -> Self {
        self.drivers_min = min;
        self.drivers_max = max;
        self
    }

    pub fn with_rider_range(mut self, min: usize, max: usize) -> Self {
        self.riders_min = min;
        self.riders_max = max;
        self
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Draw a count in `[min, max]` (either order), capped at `pool_len`.
fn sample_count<R: Rng>(rng: &mut R, min: usize, max: usize, pool_len: usize) -> usize {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(lo..=hi).min(pool_len)
}

/// Shuffled indices into a pool of `pool_len`, truncated to the drawn count.
fn sample_indices<R: Rng>(rng: &mut R, min: usize, max: usize, pool_len: usize) -> Vec<usize> {
    let count = sample_count(rng, min, max, pool_len);
    let mut indices: Vec<usize> = (0..pool_len).collect();
    indices.shuffle(rng);
    indices.truncate(count);
    indices
}

pub fn sample_drivers<R: Rng>(rng: &mut R, min: usize, max: usize) -> Vec<Driver> {
    sample_indices(rng, min, max, DRIVER_POOL.len())
        .into_iter()
        .enumerate()
        .map(|(position, index)| {
            let entry = &DRIVER_POOL[index];
            Driver::new(
                position as u32 + 1,
                entry.name,
                entry.lat,
                entry.lng,
                entry.capacity,
            )
        })
        .collect()
}

pub fn sample_riders<R: Rng>(rng: &mut R, min: usize, max: usize) -> Vec<Rider> {
    sample_indices(rng, min, max, RIDER_POOL.len())
        .into_iter()
        .enumerate()
        .map(|(position, index)| {
            let entry = &RIDER_POOL[index];
            Rider::new(
                position as u32 + 1,
                entry.name,
                Location::new(entry.pickup.0, entry.pickup.1),
                Location::new(entry.dropoff.0, entry.dropoff.1),
                entry.passengers,
            )
        })
        .collect()
}

/// Draw drivers then riders from one RNG built from `params`.
pub fn sample(params: &SampleParams) -> (Vec<Driver>, Vec<Rider>) {
    let mut rng = params.rng();
    let drivers = sample_drivers(&mut rng, params.drivers_min, params.drivers_max);
    let riders = sample_riders(&mut rng, params.riders_min, params.riders_max);
    debug!(
        drivers = drivers.len(),
        riders = riders.len(),
        seed = ?params.seed,
        "sampled demo roster"
    );
    (drivers, riders)
}
