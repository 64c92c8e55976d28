use cmrace::{
    generate::{generate, seeded_rng},
    solve::{Discipline, Solver},
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SIZE: i32 = 61;
const WALL_CHANCE: f64 = 0.3;
const SEED: u64 = 1;

fn bench_discipline(c: &mut Criterion, name: &str, discipline: Discipline) {
    let board = generate(SIZE, WALL_CHANCE, &mut seeded_rng(Some(SEED))).unwrap();

    c.bench_function(name, |b| {
        b.iter(|| {
            let solver = Solver::new(black_box(board.clone()), discipline).unwrap();
            let _ = solver.solve();
        })
    });
}

pub fn dfs(c: &mut Criterion) {
    bench_discipline(c, "dfs", Discipline::Dfs);
}

pub fn bfs(c: &mut Criterion) {
    bench_discipline(c, "bfs", Discipline::Bfs);
}

pub fn best_first(c: &mut Criterion) {
    bench_discipline(c, "best_first", Discipline::BestFirst);
}

criterion_group! {name = benches; config = Criterion::default().sample_size(50); targets = dfs, bfs, best_first}
criterion_main!(benches);
