//! Cascade tests - match scoring, power-tile creation, and full resolution

use tui_match3::core::{find_matches, resolve_cascade, resolve_step, Board, SimpleRng};
use tui_match3::types::{Pos, SpecialKind, Tile, TileColor, COLOR_COUNT};

const R: Tile = Tile::Plain(TileColor::Red);
const G: Tile = Tile::Plain(TileColor::Green);
const Y: Tile = Tile::Plain(TileColor::Yellow);

/// G/Y checkerboard rows: provably free of runs in both axes.
fn quiet_rows(n: usize) -> Vec<Vec<Tile>> {
    (0..n)
        .map(|y| {
            (0..n)
                .map(|x| if (x + y) % 2 == 0 { G } else { Y })
                .collect()
        })
        .collect()
}

#[test]
fn test_triple_scores_one_per_cell() {
    let mut rows = quiet_rows(4);
    rows[0] = vec![R, R, R, Y];
    let mut board = Board::from_rows(COLOR_COUNT, &rows);
    let mut rng = SimpleRng::new(1);

    let matches = find_matches(&board);
    let result = resolve_step(&mut board, &matches, &mut rng);

    assert_eq!(result.score, 3);
    assert_eq!(result.color_clears.get(TileColor::Red), 3);
    assert_eq!(result.color_clears.total(), 3);
    for x in 0..3 {
        assert!(board.is_empty_at(Pos::new(x, 0)));
    }
    assert_eq!(board.tile(Pos::new(3, 0)), Some(Y));
}

#[test]
fn test_quad_scores_double_and_leaves_one_striped() {
    let mut rows = quiet_rows(4);
    rows[0] = vec![R, R, R, R];
    let mut board = Board::from_rows(COLOR_COUNT, &rows);
    let mut rng = SimpleRng::new(3);

    let matches = find_matches(&board);
    let result = resolve_step(&mut board, &matches, &mut rng);

    assert_eq!(result.score, 8);

    let mut striped = 0;
    let mut cleared = 0;
    for x in 0..4 {
        match board.tile(Pos::new(x, 0)) {
            Some(Tile::Special(TileColor::Red, kind)) => {
                assert!(matches!(kind, SpecialKind::StripedH | SpecialKind::StripedV));
                striped += 1;
            }
            None => cleared += 1,
            other => panic!("unexpected cell after quad: {other:?}"),
        }
    }
    assert_eq!(striped, 1);
    assert_eq!(cleared, 3);
}

#[test]
fn test_quint_scores_triple_and_leaves_one_bomb() {
    let mut rows = quiet_rows(5);
    rows[2] = vec![R, R, R, R, R];
    let mut board = Board::from_rows(COLOR_COUNT, &rows);
    let mut rng = SimpleRng::new(9);

    let matches = find_matches(&board);
    let result = resolve_step(&mut board, &matches, &mut rng);

    assert_eq!(result.score, 15);

    let bombs = (0..5)
        .filter(|&x| {
            matches!(
                board.tile(Pos::new(x, 2)),
                Some(Tile::Special(_, SpecialKind::ColorBomb))
            )
        })
        .count();
    assert_eq!(bombs, 1);
}

#[test]
fn test_matched_striped_clears_its_row_unscored() {
    let striped = Tile::Special(TileColor::Red, SpecialKind::StripedH);
    let mut rows = quiet_rows(4);
    rows[0] = vec![striped, R, R, Y];
    let mut board = Board::from_rows(COLOR_COUNT, &rows);
    let mut rng = SimpleRng::new(2);

    let matches = find_matches(&board);
    let result = resolve_step(&mut board, &matches, &mut rng);

    // Only the run itself scores; the extra row cell it blasts does not,
    // and the striped tile is not a plain clear for objective tallies.
    assert_eq!(result.score, 3);
    assert_eq!(result.color_clears.get(TileColor::Red), 2);
    for x in 0..4 {
        assert!(board.is_empty_at(Pos::new(x, 0)));
    }
}

#[test]
fn test_resolve_cascade_reaches_stable_state() {
    for seed in [1, 7, 42, 31337] {
        let mut rows = quiet_rows(8);
        rows[7] = vec![R, R, R, Y, G, Y, G, Y];
        let mut board = Board::from_rows(COLOR_COUNT, &rows);
        let mut rng = SimpleRng::new(seed);

        let result = resolve_cascade(&mut board, &mut rng).unwrap();

        assert!(result.score >= 3, "seed {seed} scored {}", result.score);
        assert!(board.is_full());
        assert!(find_matches(&board).is_empty());
    }
}

#[test]
fn test_resolve_cascade_on_quiet_board_is_a_no_op() {
    let mut board = Board::from_rows(COLOR_COUNT, &quiet_rows(8));
    let snapshot = board.clone();
    let mut rng = SimpleRng::new(4);

    let result = resolve_cascade(&mut board, &mut rng).unwrap();

    assert_eq!(result.score, 0);
    assert_eq!(result.color_clears.total(), 0);
    assert_eq!(board, snapshot);
}
