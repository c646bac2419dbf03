use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use interval_kit_containers::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ---------- Scenario knobs (fragmented booking calendar) ----------
const SEED: u64 = 0x1C1_5E7; // deterministic RNG for reproducibility

// Domain: one year at 1-minute resolution
const HORIZON: i64 = 60 * 24 * 365;

// Booking lengths: 30 minutes to 8 hours
const BOOKING_MIN: i64 = 30;
const BOOKING_MAX: i64 = 8 * 60;

// Mutation workload building the base containers
const BOOKINGS: usize = 20_000;
const CANCELLATIONS: usize = 2_000;

// Query workload (per pass)
const PASS_QUERIES: usize = 5_000;

// ----------------------------------------------------

#[inline]
fn iv(a: i64, b: i64) -> Interval<i64> {
    Interval::closed(a, b)
}

fn random_booking<R: Rng + ?Sized>(rng: &mut R) -> Interval<i64> {
    let len = rng.random_range(BOOKING_MIN..=BOOKING_MAX);
    let start = rng.random_range(0..=(HORIZON - len));
    iv(start, start + len - 1)
}

// Build a fragmented set: many overlapping bookings, a few cancellations.
fn build_fragmented_set() -> IntervalSet<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let mut set = IntervalSet::new();
    for _ in 0..BOOKINGS {
        set.add(&random_booking(&mut rng));
    }
    for _ in 0..CANCELLATIONS {
        set.subtract(&random_booking(&mut rng));
    }
    set
}

// Build an overlap-counter map over the same kind of workload.
fn build_load_map() -> IntervalMap<i64, i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let mut map = IntervalMap::new();
    for _ in 0..BOOKINGS {
        map.add(&random_booking(&mut rng), &1);
    }
    for _ in 0..CANCELLATIONS {
        map.subtract(&random_booking(&mut rng), &1);
    }
    map
}

fn run_set_query_pass(set: &IntervalSet<i64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED ^ 0xBEEF);
    let mut hits = 0usize;
    for _ in 0..PASS_QUERIES {
        let probe = random_booking(&mut rng);
        if set.contains_interval(&probe) {
            hits += 1;
        }
        if set.intersects_interval(&probe) {
            hits += 1;
        }
    }
    black_box(hits);
}

fn run_map_query_pass(map: &IntervalMap<i64, i64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED ^ 0xBEEF);
    let mut total = 0i64;
    for _ in 0..PASS_QUERIES {
        let point = rng.random_range(0..HORIZON);
        if let Some((_, load)) = map.find(&point) {
            total += *load;
        }
    }
    black_box(total);
}

// -------------- Criterion wiring --------------
fn bench_set_build(c: &mut Criterion) {
    c.bench_function("interval_set_fragmented_build", |bch| {
        bch.iter(|| black_box(build_fragmented_set()));
    });
}

fn bench_set_queries(c: &mut Criterion) {
    c.bench_function("interval_set_query_pass", |bch| {
        bch.iter_batched(
            build_fragmented_set,
            |set| run_set_query_pass(&set),
            BatchSize::LargeInput,
        );
    });
}

fn bench_map_build(c: &mut Criterion) {
    c.bench_function("interval_map_counter_build", |bch| {
        bch.iter(|| black_box(build_load_map()));
    });
}

fn bench_map_queries(c: &mut Criterion) {
    c.bench_function("interval_map_query_pass", |bch| {
        bch.iter_batched(
            build_load_map,
            |map| run_map_query_pass(&map),
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    containers,
    bench_set_build,
    bench_set_queries,
    bench_map_build,
    bench_map_queries
);
criterion_main!(containers);
