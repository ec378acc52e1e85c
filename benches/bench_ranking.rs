use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pareto_ga::{
    density::{CrowdingDistance, DensityEstimator},
    indicator::{Front, Hypervolume, SweepHypervolume2d},
    ranking::DominanceRanking,
    rng::RandomNumberGenerator,
    solution::Solution,
};

fn random_population(size: usize, objectives: usize) -> Vec<Solution<f64>> {
    let mut rng = RandomNumberGenerator::from_seed(42);
    (0..size)
        .map(|_| Solution::from_objectives((0..objectives).map(|_| rng.next_double()).collect()))
        .collect()
}

fn bench_ranking(c: &mut Criterion) {
    let ranking = DominanceRanking::new();

    let mut group = c.benchmark_group("dominance_ranking");
    for size in [10, 100, 500].iter() {
        let population = random_population(*size, 2);
        group.bench_function(format!("dominance_ranking_{}", size), |b| {
            b.iter(|| {
                let result = ranking.compute(black_box(population.clone()));
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

fn bench_crowding(c: &mut Criterion) {
    let crowding = CrowdingDistance::new();

    let mut group = c.benchmark_group("crowding_distance");
    for size in [10, 100, 1000].iter() {
        let mut population = random_population(*size, 3);
        group.bench_function(format!("crowding_distance_{}", size), |b| {
            b.iter(|| {
                let result = crowding.compute(black_box(&mut population));
                assert!(result.is_ok());
            })
        });
    }
    group.finish();
}

fn bench_hypervolume(c: &mut Criterion) {
    let mut group = c.benchmark_group("hypervolume");
    for size in [10, 100].iter() {
        let front = Front::from_solutions(&random_population(*size, 2)).unwrap();
        let slicing = Hypervolume::from_uniform_reference(1.0, 2).unwrap();
        let sweep = Hypervolume::from_uniform_reference(1.0, 2)
            .unwrap()
            .with_algorithm(SweepHypervolume2d);

        group.bench_function(format!("slicing_{}", size), |b| {
            b.iter(|| slicing.compute(black_box(&front)))
        });
        group.bench_function(format!("sweep_{}", size), |b| {
            b.iter(|| sweep.compute(black_box(&front)))
        });
    }

    let front = Front::from_solutions(&random_population(50, 3)).unwrap();
    let hv = Hypervolume::from_uniform_reference(1.0, 3).unwrap();
    group.bench_function("slicing_3d_50", |b| b.iter(|| hv.compute(black_box(&front))));
    group.finish();
}

criterion_group!(benches, bench_ranking, bench_crowding, bench_hypervolume);
criterion_main!(benches);
