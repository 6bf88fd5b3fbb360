use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockdrop::core::puyo::{find_clusters, resolve, PuyoBoard};
use blockdrop::core::tetris::{clear_full_rows, TetrisBoard};
use blockdrop::core::{PuyoGame, TetrisGame};
use blockdrop::types::{Phase, PieceKind, PuyoColor};

fn bench_tick(c: &mut Criterion) {
    let mut state = TetrisGame::new(12345);
    state.start();

    c.bench_function("tetris_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(16));
            if state.phase() != Phase::Running {
                state.reset();
                state.start();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = TetrisBoard::new();
            for r in 16..20 {
                for col in 0..10 {
                    board.set(r, col, Some(PieceKind::I));
                }
            }
            clear_full_rows(black_box(&mut board))
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = TetrisGame::new(12345);
    state.start();
    state.try_move(5, 0);

    c.bench_function("tetris_rotate", |b| {
        b.iter(|| {
            state.rotate();
        })
    });
}

fn chain_board() -> PuyoBoard {
    PuyoBoard::from_rows(
        &[
            "B.....", "R.....", "R.....", "R.....", "RBBBGG", "YYGGCC", "YYCCMM", "MMRRBB",
        ],
        PuyoColor::from_char,
    )
}

fn bench_find_clusters(c: &mut Criterion) {
    let board = chain_board();
    c.bench_function("puyo_find_clusters", |b| {
        b.iter(|| find_clusters(black_box(&board)))
    });
}

fn bench_resolve(c: &mut Criterion) {
    let board = chain_board();
    c.bench_function("puyo_resolve_chain", |b| {
        b.iter(|| {
            let mut board = board.clone();
            resolve(black_box(&mut board))
        })
    });
}

fn bench_puyo_tick(c: &mut Criterion) {
    let mut state = PuyoGame::new(12345);
    state.start();

    c.bench_function("puyo_tick_frame", |b| {
        b.iter(|| {
            state.tick(black_box(1));
            if state.phase() != Phase::Running {
                state.reset();
                state.start();
            }
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_try_rotate,
    bench_find_clusters,
    bench_resolve,
    bench_puyo_tick
);
criterion_main!(benches);
