//! Strategy builders for MST property tests.
//!
//! Each generator is driven by a seeded [`SmallRng`] so a failing case can be
//! replayed from its `(shape, seed)` pair.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Weight;

use super::types::{GraphShape, MstFixture};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 40;
/// Dense graphs stay smaller to bound the quadratic edge count.
const DENSE_MAX_VERTICES: usize = 20;

pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> MstFixture {
    match shape {
        GraphShape::Sparse => generate_sparse(rng),
        GraphShape::Dense => generate_dense(rng),
        GraphShape::ManyIdentical => generate_identical(rng),
        GraphShape::Disconnected => generate_disconnected(rng),
        GraphShape::Noisy => generate_noisy(rng),
    }
}

fn random_weight(rng: &mut SmallRng) -> Weight {
    rng.gen_range(-50..=500)
}

fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = spanning_path(0, vertex_count, rng);
    let extra = rng.gen_range(0..=vertex_count);
    for _ in 0..extra {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        if u != v {
            edges.push((u, v, random_weight(rng)));
        }
    }
    MstFixture {
        vertex_count,
        edges,
        shape: GraphShape::Sparse,
    }
}

fn generate_dense(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
    let probability = rng.gen_range(0.7..=0.95);
    let edges = probabilistic_pairs(0, vertex_count, probability, rng, random_weight);
    MstFixture {
        vertex_count,
        edges,
        shape: GraphShape::Dense,
    }
}

fn generate_identical(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<Weight> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
    let probability = rng.gen_range(0.2..=0.6);
    let edges = probabilistic_pairs(0, vertex_count, probability, rng, |r| {
        pool[r.gen_range(0..pool.len())]
    });
    MstFixture {
        vertex_count,
        edges,
        shape: GraphShape::ManyIdentical,
    }
}

fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=4);
    let mut vertex_count = 0;
    let mut edges = Vec::new();
    for _ in 0..component_count {
        let size = rng.gen_range(1..=10);
        edges.extend(spanning_path(vertex_count, size, rng));
        let probability = rng.gen_range(0.1..=0.5);
        edges.extend(probabilistic_pairs(
            vertex_count,
            size,
            probability,
            rng,
            random_weight,
        ));
        vertex_count += size;
    }
    MstFixture {
        vertex_count,
        edges,
        shape: GraphShape::Disconnected,
    }
}

fn generate_noisy(rng: &mut SmallRng) -> MstFixture {
    let mut fixture = generate_sparse(rng);
    let noise = rng.gen_range(1..=fixture.vertex_count);
    for _ in 0..noise {
        let u = rng.gen_range(0..fixture.vertex_count);
        if rng.gen_bool(0.5) {
            fixture.edges.push((u, u, random_weight(rng)));
        } else if !fixture.edges.is_empty() {
            // Re-add an existing edge reversed with a fresh weight.
            let (a, b, _) = fixture.edges[rng.gen_range(0..fixture.edges.len())];
            fixture.edges.push((b, a, random_weight(rng)));
        }
    }
    fixture.shape = GraphShape::Noisy;
    fixture
}

/// Connects `offset..offset + size` along a random permutation.
fn spanning_path(offset: usize, size: usize, rng: &mut SmallRng) -> Vec<(usize, usize, Weight)> {
    let mut order: Vec<usize> = (offset..offset + size).collect();
    shuffle(&mut order, rng);
    order
        .windows(2)
        .map(|pair| (pair[0], pair[1], random_weight(rng)))
        .collect()
}

fn probabilistic_pairs(
    offset: usize,
    size: usize,
    probability: f64,
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> Weight,
) -> Vec<(usize, usize, Weight)> {
    let mut edges = Vec::new();
    for i in offset..offset + size {
        for j in (i + 1)..offset + size {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                edges.push((i, j, w));
            }
        }
    }
    edges
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
