use peg_solitaire::{Board, Cell, Move, Outcome, Solver, CENTER};

fn moves(list: &[(usize, usize, usize, usize)]) -> Vec<Move> {
    list.iter()
        .map(|&(fr, fc, tr, tc)| Move::new((fr, fc), (tr, tc)).unwrap())
        .collect()
}

/// The first solution reached when pegs are tried in row-major order and
/// jumps are tried right, left, down, up.
const FIRST_SOLUTION: [(usize, usize, usize, usize); 31] = [
    (1, 3, 3, 3),
    (2, 1, 2, 3),
    (0, 2, 2, 2),
    (0, 4, 0, 2),
    (2, 3, 2, 1),
    (2, 0, 2, 2),
    (2, 4, 0, 4),
    (2, 6, 2, 4),
    (3, 2, 1, 2),
    (0, 2, 2, 2),
    (3, 0, 3, 2),
    (3, 2, 1, 2),
    (3, 4, 3, 2),
    (3, 6, 3, 4),
    (3, 4, 1, 4),
    (0, 4, 2, 4),
    (4, 2, 2, 2),
    (1, 2, 3, 2),
    (4, 0, 4, 2),
    (4, 3, 4, 1),
    (5, 4, 3, 4),
    (4, 6, 4, 4),
    (6, 2, 4, 2),
    (3, 2, 5, 2),
    (6, 4, 6, 2),
    (6, 2, 4, 2),
    (4, 1, 4, 3),
    (4, 3, 4, 5),
    (2, 4, 4, 4),
    (4, 5, 4, 3),
    (5, 3, 3, 3),
];

#[test]
fn canonical_board_is_solved() {
    let mut board = Board::canonical();
    let mut solver = Solver::new();
    let Outcome::Solved(solution) = solver.search(&mut board) else {
        panic!("the canonical board has a solution");
    };

    assert_eq!(solution.len(), 31);
    assert_eq!(solution.moves(), moves(&FIRST_SOLUTION).as_slice());
    assert_eq!(solver.attempts(), 20_277);
    assert_eq!(solution.attempts(), solver.attempts());

    // the live board is left on the winning position
    assert_eq!(board.peg_count(), 1);
    assert_eq!(board.cell_state(3, 3), Ok(Cell::Peg));

    // and replaying from scratch agrees with it
    let replayed = solution.board_after(solution.len()).unwrap();
    assert_eq!(replayed, board);
    assert_eq!(solution.initial(), &Board::canonical());
}

#[test]
fn search_is_deterministic() {
    let first = Solver::new().solve(&mut Board::canonical());
    let second = Solver::new().solve(&mut Board::canonical());
    assert!(first.is_some());
    assert_eq!(first, second);

    // reusing a solver on a fresh board gives the same answer too
    let mut solver = Solver::new();
    let mut board = Board::canonical();
    let third = solver.solve(&mut board);
    board = Board::canonical();
    assert_eq!(solver.solve(&mut board), third);
    assert_eq!(third, first);
}

#[test]
fn every_prefix_removes_one_peg_per_move() {
    let mut board = Board::canonical();
    let solution = Solver::new().search(&mut board).into_solution().unwrap();
    for (step, (mv, after)) in solution.replay().enumerate() {
        assert_eq!(after.peg_count(), 32 - (step + 1));
        assert_eq!(after.cell(mv.to()), Some(Cell::Peg));
        assert_eq!(Ok(after), solution.board_after(step + 1));
    }
}

#[test]
fn reversibility_along_the_solution() {
    let mut board = Board::canonical();
    for mv in moves(&FIRST_SOLUTION) {
        for candidate in board.legal_moves() {
            let before = board.clone();
            board.apply_move(candidate);
            assert_eq!(board.peg_count(), before.peg_count() - 1);
            board.undo_move(candidate);
            assert_eq!(board, before);
        }
        board.try_apply_move(mv).unwrap();
    }
    assert_eq!(board.pegs().collect::<Vec<_>>(), vec![CENTER]);
    assert!(board.legal_moves().is_empty());
}

#[test]
fn two_holes_are_rejected_before_searching() {
    let mut cells = Board::canonical().cells().clone();
    cells[(6, 3)] = Cell::Empty;
    assert!(matches!(
        Board::new(cells),
        Err(peg_solitaire::Error::InvalidInput(_))
    ));
}
