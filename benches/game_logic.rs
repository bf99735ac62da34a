use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blocktris::core::{Board, Game, Move, Piece};
use blocktris::types::{Action, PieceKind};

fn bench_step(c: &mut Criterion) {
    let mut game = Game::with_seed(12345).unwrap();

    c.bench_function("game_step", |b| {
        b.iter(|| {
            if game.is_game_over() {
                game = Game::with_seed(12345).unwrap();
            }
            black_box(game.step(black_box(Action::Rotate)));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for row in 18..22 {
                board.set_row(row, [1; 10]);
            }
            black_box(board.clear_completed_lines());
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut board = Board::new();
    let mut piece = Piece::spawn(PieceKind::T);
    piece.translate(10, 3);
    board.place_piece(&piece);

    c.bench_function("try_move_left_right", |b| {
        b.iter(|| {
            board.try_move(&mut piece, black_box(Move::Left));
            board.try_move(&mut piece, black_box(Move::Right));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut piece = Piece::spawn(PieceKind::L);
    piece.translate(10, 4);

    c.bench_function("rotate_piece", |b| {
        b.iter(|| {
            piece.rotate();
            black_box(&piece);
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_line_clear,
    bench_try_move,
    bench_rotate
);
criterion_main!(benches);
