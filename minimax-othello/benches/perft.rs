use criterion::*;

use minimax_othello::test_utils::perft;
use minimax_othello::{Dimensions, OthelloBoard, Player};

fn criterion_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(50);

    for depth in 1..6 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| perft::run_perft(OthelloBoard::default(), Player::Black, black_box(depth)))
        });
    }

    group.finish();
}

fn criterion_perft_small(c: &mut Criterion) {
    let start = OthelloBoard::new(Dimensions::new(4, 4).unwrap()).unwrap();
    c.bench_function("perft 4x4 full game", |b| {
        b.iter(|| perft::run_perft(black_box(start), Player::Black, 16))
    });
}

criterion_group!(perft, criterion_perft, criterion_perft_small);
criterion_main!(perft);
