//! Piece geometry tests - spawn table and pivot rotation

use blocktris::core::{spawn_shape, Piece};
use blocktris::types::{PieceKind, Point};

fn points(cells: &[(i8, i8)]) -> [Point; 4] {
    [
        Point::new(cells[0].0, cells[0].1),
        Point::new(cells[1].0, cells[1].1),
        Point::new(cells[2].0, cells[2].1),
        Point::new(cells[3].0, cells[3].1),
    ]
}

#[test]
fn test_spawn_table() {
    assert_eq!(spawn_shape(PieceKind::I), points(&[(1, 0), (1, 1), (1, 2), (1, 3)]));
    assert_eq!(spawn_shape(PieceKind::O), points(&[(1, 0), (1, 1), (0, 0), (0, 1)]));
    assert_eq!(spawn_shape(PieceKind::T), points(&[(1, 0), (1, 1), (1, 2), (0, 1)]));
    assert_eq!(spawn_shape(PieceKind::S), points(&[(0, 0), (0, 1), (1, 1), (1, 2)]));
    assert_eq!(spawn_shape(PieceKind::Z), points(&[(1, 0), (1, 1), (0, 1), (0, 2)]));
    assert_eq!(spawn_shape(PieceKind::J), points(&[(1, 0), (0, 1), (0, 0), (0, 2)]));
    assert_eq!(spawn_shape(PieceKind::L), points(&[(1, 0), (1, 1), (1, 2), (0, 0)]));
}

#[test]
fn test_spawn_fits_top_two_rows() {
    for kind in PieceKind::ALL {
        for p in Piece::spawn(kind).cells() {
            assert!(p.row == 0 || p.row == 1, "{:?} spawns at row {}", kind, p.row);
            assert!(p.col >= 0 && p.col <= 3);
        }
    }
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::spawn(kind);
        piece.translate(8, 4);
        let original = piece;

        for turn in 1..=4 {
            piece.rotate();
            if turn < 4 && kind == PieceKind::O {
                // Still a 2x2 block of four distinct cells.
                let mut cells = piece.cells().to_vec();
                cells.sort_by_key(|p| (p.row, p.col));
                cells.dedup();
                assert_eq!(cells.len(), 4);
            }
        }
        assert_eq!(piece, original, "{:?} did not return after four turns", kind);
    }
}

#[test]
fn test_single_rotation_changes_non_square_pieces() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        let mut turned = piece;
        turned.rotate();
        assert_eq!(turned.pivot(), piece.pivot());
        if kind != PieceKind::O {
            assert_ne!(turned, piece, "{:?}", kind);
        }
    }
}

#[test]
fn test_rotate_i_piece() {
    let mut piece = Piece::spawn(PieceKind::I);
    piece.rotate();
    assert_eq!(piece.cells(), &points(&[(0, 1), (1, 1), (2, 1), (3, 1)]));
    piece.rotate();
    assert_eq!(piece.cells(), &points(&[(1, 2), (1, 1), (1, 0), (1, -1)]));
}

#[test]
fn test_translate() {
    let mut piece = Piece::spawn(PieceKind::Z);
    piece.translate(3, 2);
    assert_eq!(piece.cells(), &points(&[(4, 2), (4, 3), (3, 3), (3, 4)]));
    piece.translate(-3, -2);
    assert_eq!(piece, Piece::spawn(PieceKind::Z));
}
