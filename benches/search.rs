use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use tilepuzzle_solver::solving::{parallel, sequential};
use tilepuzzle_solver::{parity, Board, GoalIndex};

/// Sample boards of increasing difficulty, grounded in the teacher's
/// `benches/shared/mod.rs::create_sample_boards` (a handful of fixed
/// scrambles cycled round-robin rather than freshly randomized each run,
/// so runs are comparable across commits).
fn sample_boards() -> impl Iterator<Item = (Board, GoalIndex)> {
    let fixtures: Vec<(&str, u32, u32)> = vec![
        ("[[1,2,3],[4,5,6],[7,8,0]]", 3, 3),
        ("[[1,2,3],[4,5,6],[7,0,8]]", 3, 3),
        ("[[1,2,3],[4,0,5],[7,8,6]]", 3, 3),
        ("[[8,6,7],[2,5,4],[3,0,1]]", 3, 3),
        ("[[5,4,0],[3,8,7],[6,10,11],[9,1,2]]", 3, 4),
        ("[[5,7,15,11],[2,0,3,14],[10,9,4,1],[6,13,12,8]]", 4, 4),
    ];

    let prepared: Vec<(Board, GoalIndex)> = fixtures
        .into_iter()
        .map(|(raw, width, height)| {
            let mut board: Board = raw.parse().expect("bench fixture must parse");
            parity::fix(&mut board);
            (board, GoalIndex::new(width, height))
        })
        .collect();

    RoundRobin {
        items: prepared,
        next: 0,
    }
}

struct RoundRobin {
    items: Vec<(Board, GoalIndex)>,
    next: usize,
}

impl Iterator for RoundRobin {
    type Item = (Board, GoalIndex);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items[self.next].clone();
        self.next = (self.next + 1) % self.items.len();
        Some(item)
    }
}

pub fn search_benchmark(c: &mut Criterion) {
    let mut sequential_boards = sample_boards();
    c.bench_function("sequential IDA*", |b| {
        b.iter_batched(
            || sequential_boards.next().unwrap(),
            |(mut board, goal)| {
                let _ = black_box(sequential::solve(&mut board, &goal));
            },
            BatchSize::SmallInput,
        )
    });

    let mut parallel_boards = sample_boards();
    c.bench_function("parallel IDA* (4 units)", |b| {
        b.iter_batched(
            || parallel_boards.next().unwrap(),
            |(mut board, goal)| {
                let _ = black_box(parallel::solve(&mut board, &goal, 4));
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(search_benchmarks, search_benchmark);
criterion_main!(search_benchmarks);
