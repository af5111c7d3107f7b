use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use kornia_pose_adapter::{AbsoluteAdapter, HybridPointAdapter};
use rand::{rngs::StdRng, Rng, SeedableRng};

type Dataset = (Vec<[f64; 3]>, Vec<[f64; 3]>, Vec<[f64; 3]>);

fn generate_dataset(num_points: usize, seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut bearings = Vec::with_capacity(num_points);
    let mut camera = Vec::with_capacity(num_points);
    for _ in 0..num_points {
        let p = [
            rng.random_range(-0.5..0.5),
            rng.random_range(-0.5..0.5),
            rng.random_range(3.0..6.0),
        ];
        let n = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        bearings.push([p[0] / n, p[1] / n, p[2] / n]);
        camera.push(p);
    }
    let world = camera.clone();
    (bearings, camera, world)
}

fn bench_adapter(c: &mut Criterion) {
    let mut group = c.benchmark_group("hybrid_adapter");

    for num_points in [100, 1_000, 10_000] {
        let (bearings, camera, world) = generate_dataset(num_points, 0);
        let mut rng = StdRng::seed_from_u64(1);
        let bearing_flags: Vec<bool> = (0..num_points).map(|_| rng.random_bool(0.7)).collect();
        let camera_flags: Vec<bool> = (0..num_points).map(|_| rng.random_bool(0.7)).collect();

        group.throughput(Throughput::Elements(num_points as u64));

        group.bench_with_input(
            BenchmarkId::new("set_inliers", num_points),
            &num_points,
            |b, _| {
                let mut adapter = HybridPointAdapter::new(&bearings, &camera, &world)
                    .expect("valid dataset");
                b.iter(|| {
                    adapter
                        .set_inliers(black_box(&[
                            bearing_flags.as_slice(),
                            camera_flags.as_slice(),
                        ]))
                        .expect("matching lengths")
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("compact_inlier_indices", num_points),
            &num_points,
            |b, _| {
                let mut adapter = HybridPointAdapter::new(&bearings, &camera, &world)
                    .expect("valid dataset");
                adapter
                    .set_inliers(&[bearing_flags.as_slice(), camera_flags.as_slice()])
                    .expect("matching lengths");
                b.iter(|| black_box(adapter.compact_inlier_indices()))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_adapter);
criterion_main!(benches);
