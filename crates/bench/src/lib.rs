use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks a runtime preset from the input length.
pub fn apply_runtime_config_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len <= 4_096 {
        apply_small_runtime_config(group);
    } else if len <= 65_536 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_i32s<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.random::<i32>()).collect()
}

/// Values drawn from `0..distinct`, so every key repeats about
/// `len / distinct` times.
pub fn few_unique_i32s<R: Rng + ?Sized>(rng: &mut R, len: usize, distinct: i32) -> Vec<i32> {
    debug_assert!(distinct > 0);
    (0..len).map(|_| rng.random_range(0..distinct)).collect()
}

/// Ascending run with `len / 100` random transpositions.
pub fn nearly_sorted_i32s<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i32> {
    let mut data: Vec<i32> = (0..len).map(|i| i as i32).collect();
    if len == 0 {
        return data;
    }

    let swaps = (len / 100).max(1);
    for _ in 0..swaps {
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        data.swap(a, b);
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_produce_requested_len() {
        let mut rng = default_rng();
        assert_eq!(random_i32s(&mut rng, 37).len(), 37);
        assert_eq!(nearly_sorted_i32s(&mut rng, 0).len(), 0);

        let few = few_unique_i32s(&mut rng, 500, 4);
        assert_eq!(few.len(), 500);
        assert!(few.iter().all(|&x| (0..4).contains(&x)));
    }

    #[test]
    fn nearly_sorted_is_a_permutation() {
        let mut rng = default_rng();
        let mut data = nearly_sorted_i32s(&mut rng, 1_000);
        data.sort_unstable();
        assert!(data.iter().copied().eq(0..1_000));
    }
}
