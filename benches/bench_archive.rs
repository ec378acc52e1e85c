use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use pareto_ga::{
    archive::{Archive, BoundedArchive, NonDominatedArchive},
    density::HypervolumeContribution,
    rng::RandomNumberGenerator,
    solution::Solution,
};

fn candidates(count: usize) -> Vec<Solution<f64>> {
    let mut rng = RandomNumberGenerator::from_seed(7);
    (0..count)
        .map(|_| {
            let x = rng.next_double();
            let noise = rng.next_double() * 0.1;
            Solution::from_objectives(vec![x, 1.0 - x + noise])
        })
        .collect()
}

fn bench_archive(c: &mut Criterion) {
    let mut group = c.benchmark_group("archive");
    for count in [100, 1000].iter() {
        let offered = candidates(*count);

        group.bench_function(format!("non_dominated_{}", count), |b| {
            b.iter_batched(
                || offered.clone(),
                |offered| {
                    let mut archive = NonDominatedArchive::new();
                    for solution in offered {
                        let result = archive.add(black_box(solution));
                        assert!(result.is_ok());
                    }
                    archive.size()
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("bounded_crowding_{}", count), |b| {
            b.iter_batched(
                || offered.clone(),
                |offered| {
                    let mut archive = BoundedArchive::new(50).unwrap();
                    for solution in offered {
                        let result = archive.add(black_box(solution));
                        assert!(result.is_ok());
                    }
                    archive.size()
                },
                BatchSize::SmallInput,
            )
        });
    }

    let offered = candidates(200);
    group.bench_function("bounded_hypervolume_200", |b| {
        b.iter_batched(
            || offered.clone(),
            |offered| {
                let mut archive =
                    BoundedArchive::with_density_estimator(20, HypervolumeContribution::default())
                        .unwrap();
                for solution in offered {
                    let result = archive.add(black_box(solution));
                    assert!(result.is_ok());
                }
                archive.size()
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_archive);
criterion_main!(benches);
