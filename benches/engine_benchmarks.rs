//! Benchmarks for move generation, evaluation, and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use woodpusher::board::{search_with_report, Board, Color};

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::starting_position();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.all_moves(Color::White)))
    });

    let middlegame = Board::try_from_placement(
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R",
    )
    .unwrap();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.all_moves(Color::White)))
    });

    let queens = Board::try_from_placement("3q4/8/2q5/8/3Q4/5Q2/8/8").unwrap();
    group.bench_function("open_queens", |b| {
        b.iter(|| black_box(queens.all_moves(Color::White)))
    });

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [
        ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
        (
            "middlegame",
            "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R",
        ),
        ("endgame", "8/5k2/8/8/8/8/5K2/4R3"),
    ];

    for (name, placement) in positions {
        let board = Board::try_from_placement(placement).unwrap();
        group.bench_with_input(BenchmarkId::new("position", name), &board, |b, board| {
            b.iter(|| black_box(board.evaluate(Color::White)))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let startpos = Board::starting_position();
    for depth in [1, 2, 3] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| search_with_report(black_box(&startpos), Color::White, depth))
        });
    }

    let tactical = Board::try_from_placement("k7/4p3/3p4/8/8/8/8/3Q3K").unwrap();
    for depth in [2, 3] {
        group.bench_with_input(BenchmarkId::new("tactical", depth), &depth, |b, &depth| {
            b.iter(|| search_with_report(black_box(&tactical), Color::White, depth))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_eval, bench_search);
criterion_main!(benches);
