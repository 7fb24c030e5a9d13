use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridfall::core::{Block, Game, Grid, Piece, RandomSupplier};
use gridfall::types::ShapeKind;

fn bench_advance_time(c: &mut Criterion) {
    let mut game = Game::new(Box::new(RandomSupplier::new(12345)));
    let mut now = 0u64;

    c.bench_function("advance_time_16ms", |b| {
        b.iter(|| {
            now += 16;
            game.advance_time(black_box(now));
        })
    });
}

fn bench_clear_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    grid.insert(Block::new(x, y, ShapeKind::I));
                }
            }
            grid.clear_finished_rows();
        })
    });
}

fn bench_move_horizontal(c: &mut Criterion) {
    let grid = Grid::new();
    let mut piece = Piece::spawn(ShapeKind::T);
    let mut delta = 1i8;

    c.bench_function("move_horizontal", |b| {
        b.iter(|| {
            if !piece.move_horizontal(black_box(delta), &grid) {
                delta = -delta;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let grid = Grid::new();
    let mut piece = Piece::spawn(ShapeKind::S);
    for _ in 0..10 {
        piece.try_descend(&grid);
    }

    c.bench_function("rotate", |b| {
        b.iter(|| {
            piece.rotate(black_box(&grid));
        })
    });
}

criterion_group!(
    benches,
    bench_advance_time,
    bench_clear_rows,
    bench_move_horizontal,
    bench_rotate
);
criterion_main!(benches);
