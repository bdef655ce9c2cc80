#[macro_use]
extern crate criterion;

use criterion::Criterion;
use orient_rotate::direction::Direction;
use orient_rotate::rotator::Rotator;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::hint::black_box;

const SEED: u64 = 7;
const OFFSETS_COUNT: usize = 4096;

fn random_offsets(seed: u64) -> Vec<(i32, i32, i32)> {
  let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
  (0..OFFSETS_COUNT)
    .map(|_| {
      (
        rng.random_range(-32..32),
        rng.random_range(-32..32),
        rng.random_range(-32..32),
      )
    })
    .collect()
}

fn rotate_directions(c: &mut Criterion) {
  c.bench_function("rotate_directions", |bencher| {
    bencher.iter(|| {
      let mut count = 0;
      for rotator in Rotator::all() {
        for &direction in black_box(&Direction::CARDINALS) {
          if rotator.apply_to_direction(direction) == Direction::North {
            count += 1;
          }
        }
      }
      count
    })
  });
}

fn rotate_offsets(c: &mut Criterion) {
  let offsets = random_offsets(SEED);
  c.bench_function("rotate_offsets", |bencher| {
    bencher.iter(|| {
      let mut sum = 0;
      for rotator in Rotator::all() {
        for &(x, y, z) in black_box(&offsets) {
          let (x, y, z) = rotator.rotate_offset(x, y, z);
          sum += x + y + z;
        }
      }
      sum
    })
  });
}

fn rotate_quads(c: &mut Criterion) {
  c.bench_function("rotate_quads", |bencher| {
    bencher.iter(|| {
      let mut quad = [true, false, false, true];
      for rotator in Rotator::all() {
        quad = rotator.rotate_quad(black_box(quad));
      }
      quad
    })
  });
}

criterion_group!(rotations, rotate_directions, rotate_offsets, rotate_quads);
criterion_main!(rotations);
