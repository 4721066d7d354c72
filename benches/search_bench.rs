use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use grid_util::point::Point;
use rand::prelude::*;
use std::hint::black_box;
use stepwise_pathfinding::{EarlyExit, Graph, Pathfinder, PriorityQueue, SearchConfig, SearchMode};

fn random_rows(n: usize, rng: &mut StdRng) -> Vec<Vec<u8>> {
    (0..n)
        .map(|_| {
            (0..n)
                .map(|_| if rng.gen_bool(0.25) { 1 } else { rng.gen_range(2..5) * rng.gen_range(0..2) })
                .collect()
        })
        .collect()
}

fn search_bench(c: &mut Criterion) {
    const N: usize = 48;
    let mut rng = StdRng::seed_from_u64(0);
    let mut rows = random_rows(N, &mut rng);
    rows[0][0] = 0;
    rows[N - 1][N - 1] = 0;
    let graph = Graph::new(&rows).unwrap();
    let start = Point::new(0, 0);
    let goal = Point::new(N as i32 - 1, N as i32 - 1);

    for mode in SearchMode::ALL {
        let config = SearchConfig::new(mode).with_early_exit(EarlyExit::Disabled);
        c.bench_function(format!("{mode}, {N}x{N}, exhaustive").as_str(), |b| {
            b.iter(|| {
                let mut pathfinder =
                    Pathfinder::with_endpoints(&graph, start, goal, config).unwrap();
                black_box(pathfinder.run_to_completion().unwrap().iterations);
            })
        });
    }
}

fn queue_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<u32> = (0..4096).map(|_| rng.gen_range(0..512)).collect();
    c.bench_function("priority queue, 4096 enqueue + dequeue", |b| {
        b.iter_batched(
            || values.clone(),
            |values| {
                let mut queue = PriorityQueue::with_capacity(values.len());
                for v in values {
                    queue.enqueue(v);
                }
                while let Ok(v) = queue.dequeue() {
                    black_box(v);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, search_bench, queue_bench);
criterion_main!(benches);
