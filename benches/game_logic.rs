use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetric::core::{collides, rotate, shape_of, Board, GameState, RenderSnapshot};
use tetric::types::{Intent, PieceKind, Position};

fn running() -> GameState {
    let mut state = GameState::new(12345);
    state.apply(Intent::StartGame);
    state
}

fn bench_tick(c: &mut Criterion) {
    let mut state = running();

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            if !state.tick() {
                state = running();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let full = Board::from_text(&["##########"; 4]);

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = black_box(full);
            board.clear_lines()
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = running();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if !state.apply(Intent::HardDrop) {
                state = running();
            }
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let board = Board::from_text(&["#.#.#.#.#.", ".#.#.#.#.#"]);
    let shape = rotate(&shape_of(PieceKind::T));

    c.bench_function("collides", |b| {
        b.iter(|| collides(black_box(Position::new(16, 3)), &shape, &board))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = running();
    let mut snap = RenderSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_collides,
    bench_snapshot
);
criterion_main!(benches);
