use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{try_rotate, Board, GameState, Piece};
use blockfall::types::{GameAction, PieceKind, TICK_MS};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            state.tick(black_box(TICK_MS));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, PieceKind::I.tag());
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_soft_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("soft_drop", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::SoftDrop));
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.player_move(black_box(1));
            state.player_move(black_box(-1));
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut board = Board::new();
    for y in 10..20 {
        board.set(6, y, PieceKind::Z.tag());
    }
    let mut piece = Piece::spawn(PieceKind::I);
    piece.shape = piece.shape.rotated();
    piece.x = 5;
    piece.y = 12;

    c.bench_function("try_rotate_with_kick", |b| {
        b.iter(|| black_box(try_rotate(black_box(&piece), &board)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_soft_drop,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);
