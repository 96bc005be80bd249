use konane::{generate_moves, next_board, Board, IllegalMove, Move, Side};

/// Build a board from row strings of `B`, `W` and `.` (whitespace ignored).
fn board_from_rows(rows: &[&str]) -> Board {
    let size = u8::try_from(rows.len()).unwrap();
    let mut b = Board::new(size);
    for (r, row) in rows.iter().enumerate() {
        let cells: Vec<char> = row.chars().filter(|ch| !ch.is_whitespace()).collect();
        assert_eq!(cells.len(), rows.len(), "row {r} has wrong width");
        for (c, ch) in cells.into_iter().enumerate() {
            let cell = match ch {
                'B' => Some(Side::First),
                'W' => Some(Side::Second),
                _ => None,
            };
            b.set(u8::try_from(r).unwrap(), u8::try_from(c).unwrap(), cell);
        }
    }
    b
}

#[test]
fn first_opening_moves_are_the_fixed_four() {
    let b = Board::new(8);
    let moves = generate_moves(&b, Side::First);
    assert_eq!(
        moves,
        vec![
            Move::vacate(0, 0),
            Move::vacate(7, 7),
            Move::vacate(4, 4),
            Move::vacate(3, 3),
        ]
    );
}

#[test]
fn second_opening_moves_depend_on_the_vacated_cell() {
    let cases: [(Move, Vec<Move>); 4] = [
        (
            Move::vacate(0, 0),
            vec![Move::vacate(0, 1), Move::vacate(1, 0)],
        ),
        (
            Move::vacate(7, 7),
            vec![Move::vacate(7, 6), Move::vacate(6, 7)],
        ),
        (
            Move::vacate(3, 3),
            vec![
                Move::vacate(3, 2),
                Move::vacate(4, 3),
                Move::vacate(3, 4),
                Move::vacate(2, 3),
            ],
        ),
        (
            Move::vacate(4, 4),
            vec![
                Move::vacate(4, 3),
                Move::vacate(5, 4),
                Move::vacate(4, 5),
                Move::vacate(3, 4),
            ],
        ),
    ];
    for (opening, expected) in cases {
        let b = Board::new(8);
        let b = next_board(&b, Side::First, opening).expect("opening applies");
        assert_eq!(generate_moves(&b, Side::Second), expected, "after {opening}");
    }
}

#[test]
fn opening_phase_yields_only_degenerate_moves() {
    let b = Board::new(6);
    for mv in generate_moves(&b, Side::First) {
        assert!(mv.is_degenerate());
    }
    let b = next_board(&b, Side::First, Move::vacate(0, 0)).unwrap();
    for mv in generate_moves(&b, Side::Second) {
        assert!(mv.is_degenerate());
    }
}

#[test]
fn chain_moves_emit_every_prefix() {
    let b = board_from_rows(&[
        ". . . . . .",
        ". . . . . .",
        "B W . W . .",
        ". . . . . .",
        ". . . . . .",
        ". . . . . .",
    ]);
    assert_eq!(
        generate_moves(&b, Side::First),
        vec![Move::new(2, 0, 2, 2), Move::new(2, 0, 2, 4)]
    );
}

#[test]
fn chain_apply_captures_each_midpoint() {
    let b = board_from_rows(&[
        ". . . . . .",
        ". . . . . .",
        "B W . W . .",
        ". . . . . .",
        ". . . . . .",
        ". . . . . .",
    ]);
    let nb = next_board(&b, Side::First, Move::new(2, 0, 2, 4)).expect("chain applies");
    for c in 0..4 {
        assert_eq!(nb.get(2, c), None, "cell (2,{c}) should be vacated");
    }
    assert_eq!(nb.get(2, 4), Some(Side::First));
    assert_eq!(nb.count(Some(Side::Second)), 0);
}

#[test]
fn opening_apply_vacates_exactly_one_cell() {
    let b = Board::new(8);
    let nb = next_board(&b, Side::First, Move::vacate(4, 4)).unwrap();
    assert_eq!(nb.get(4, 4), None);
    assert_eq!(nb.count(None), 1);
}

#[test]
fn generated_moves_always_apply() {
    // Self-play with the first generated move; every candidate at every
    // visited position must pass the applier.
    let mut board = Board::new(6);
    let mut side = Side::First;
    for _ in 0..40 {
        let moves = generate_moves(&board, side);
        if moves.is_empty() {
            break;
        }
        for mv in &moves {
            next_board(&board, side, *mv)
                .unwrap_or_else(|e| panic!("generated move {mv} rejected: {e}"));
        }
        board = next_board(&board, side, moves[0]).unwrap();
        side = side.other();
    }
}

#[test]
fn applier_rejects_out_of_bounds() {
    let b = Board::new(4);
    assert_eq!(
        next_board(&b, Side::First, Move::new(0, 0, 0, 9)),
        Err(IllegalMove::OutOfBounds { r: 0, c: 9 })
    );
}

#[test]
fn applier_rejects_unowned_source() {
    let b = Board::new(4);
    // (0,1) is a Second stone on a fresh board
    assert_eq!(
        next_board(&b, Side::First, Move::vacate(0, 1)),
        Err(IllegalMove::SourceNotOwned { r: 0, c: 1 })
    );
}

#[test]
fn applier_rejects_degenerate_move_after_opening() {
    let mut b = Board::new(4);
    b.set(1, 1, None);
    b.set(3, 3, None);
    assert_eq!(
        next_board(&b, Side::First, Move::vacate(0, 0)),
        Err(IllegalMove::NotOpeningPhase)
    );
}

#[test]
fn applier_rejects_occupied_destination() {
    let mut b = Board::new(4);
    b.set(1, 1, None);
    b.set(3, 3, None);
    assert_eq!(
        next_board(&b, Side::First, Move::new(0, 0, 0, 2)),
        Err(IllegalMove::DestinationOccupied { r: 0, c: 2 })
    );
}

#[test]
fn applier_rejects_empty_midpoint() {
    // 4x4 with (0,1) and (0,2) empty: (0,0)->(0,2) jumps over nothing.
    let mut b = Board::new(4);
    b.set(0, 1, None);
    b.set(0, 2, None);
    assert_eq!(
        next_board(&b, Side::First, Move::new(0, 0, 0, 2)),
        Err(IllegalMove::MidpointNotOpponent { r: 0, c: 1 })
    );
}

#[test]
fn next_board_is_pure() {
    let mut b = Board::new(6);
    b.set(2, 2, None);
    b.set(4, 4, None);
    let snapshot = b.clone();

    let mv = generate_moves(&b, Side::First)
        .into_iter()
        .next()
        .expect("some move exists");
    let once = next_board(&b, Side::First, mv).unwrap();
    let twice = next_board(&b, Side::First, mv).unwrap();

    assert_eq!(b, snapshot, "input board must not be mutated");
    assert_eq!(once, twice, "equal inputs must produce equal boards");
    assert_ne!(once, b);
}
