use crate::engine::errors::EngineError;
use crate::engine::manager::{solve_first, solve_last, GameManager};
use crate::engine::test_fixtures::{example_grids, example_numbers, sequential_grid};

#[test]
fn example_game_first_winner_score() {
    let score = solve_first(&example_numbers(), example_grids(), 5)
        .expect("example game must produce a first winner");
    assert_eq!(score, 2044);
}

#[test]
fn example_game_last_winner_score() {
    let score = solve_last(&example_numbers(), example_grids(), 5)
        .expect("example game must produce a last winner");
    assert_eq!(score, 247);
}

#[test]
fn global_index_lists_boards_in_input_order() {
    let manager = GameManager::new(example_grids(), 5).expect("example grids must construct");

    // 14 and 25 appear on both boards, 26 and 99 on neither
    assert_eq!(manager.boards_containing(14), &[0, 1]);
    assert_eq!(manager.boards_containing(25), &[0, 1]);
    assert_eq!(manager.boards_containing(26), &[] as &[usize]);
    assert_eq!(manager.boards_containing(99), &[] as &[usize]);
}

#[test]
fn global_index_records_a_board_once_per_number() {
    // 7 occurs twice on board 0 but its id must appear once under 7
    let grids = vec![vec![vec![7, 7], vec![2, 3]], vec![vec![7, 4], vec![5, 6]]];
    let manager = GameManager::new(grids, 2).expect("grids must construct");

    assert_eq!(manager.boards_containing(7), &[0, 1]);
}

#[test]
fn first_mode_same_number_tie_goes_to_the_lower_id() {
    let numbers = vec![1, 2, 3, 4, 5];

    // Both boards hold the line 1..=5; both would complete on draw 5.
    let board0 = vec![
        vec![1, 2, 3, 4, 5],
        vec![10, 11, 12, 13, 14],
        vec![15, 16, 17, 18, 19],
        vec![20, 21, 22, 23, 24],
        vec![25, 26, 27, 28, 29],
    ];
    let board1 = vec![
        vec![30, 31, 32, 33, 34],
        vec![1, 2, 3, 4, 5],
        vec![35, 36, 37, 38, 39],
        vec![40, 41, 42, 43, 44],
        vec![45, 46, 47, 48, 49],
    ];

    let score = solve_first(&numbers, vec![board0.clone(), board1], 5)
        .expect("tie game must produce a first winner");

    let total0: i64 = board0.iter().flatten().sum();
    let expected = (total0 - (1 + 2 + 3 + 4 + 5)) * 5;
    assert_eq!(score, expected);
}

#[test]
fn last_mode_same_number_tie_goes_to_the_higher_id() {
    let numbers = vec![1, 2, 3, 4, 5];

    let board0 = vec![
        vec![1, 2, 3, 4, 5],
        vec![10, 11, 12, 13, 14],
        vec![15, 16, 17, 18, 19],
        vec![20, 21, 22, 23, 24],
        vec![25, 26, 27, 28, 29],
    ];
    let board1 = vec![
        vec![30, 31, 32, 33, 34],
        vec![1, 2, 3, 4, 5],
        vec![35, 36, 37, 38, 39],
        vec![40, 41, 42, 43, 44],
        vec![45, 46, 47, 48, 49],
    ];

    let score = solve_last(&numbers, vec![board0, board1.clone()], 5)
        .expect("tie game must produce a last winner");

    let total1: i64 = board1.iter().flatten().sum();
    let expected = (total1 - (1 + 2 + 3 + 4 + 5)) * 5;
    assert_eq!(score, expected);
}

#[test]
fn last_mode_ignores_draws_after_every_board_has_won() {
    // Junk draws appended after both boards have won must not change the score
    let mut numbers = example_numbers();
    let baseline = solve_last(&numbers, example_grids(), 5).expect("baseline last winner");

    numbers.extend([21, 22, 23, 24, 25]);
    let extended = solve_last(&numbers, example_grids(), 5).expect("extended last winner");

    assert_eq!(extended, baseline);
}

#[test]
fn empty_draw_sequence_yields_no_winner() {
    let err = solve_first(&[], example_grids(), 5).expect_err("no draws, no winner");
    assert_eq!(err, EngineError::NoWinner);

    let err = solve_last(&[], example_grids(), 5).expect_err("no draws, no winner");
    assert_eq!(err, EngineError::NoWinner);
}

#[test]
fn non_winning_draw_sequence_yields_no_winner() {
    // Draws touch the board but never complete a line
    let numbers = vec![1, 2, 3, 4, 7, 8, 9, 12, 99];

    let err = solve_first(&numbers, vec![sequential_grid()], 5).expect_err("no line completed");
    assert_eq!(err, EngineError::NoWinner);

    let err = solve_last(&numbers, vec![sequential_grid()], 5).expect_err("no line completed");
    assert_eq!(err, EngineError::NoWinner);
}

#[test]
fn no_boards_yields_no_winner() {
    let err = solve_first(&[1, 2, 3], Vec::new(), 5).expect_err("nothing can win");
    assert_eq!(err, EngineError::NoWinner);

    let err = solve_last(&[1, 2, 3], Vec::new(), 5).expect_err("nothing can win");
    assert_eq!(err, EngineError::NoWinner);
}

#[test]
fn bad_board_shape_fails_construction_before_any_replay() {
    let grids = vec![sequential_grid(), vec![vec![1, 2], vec![3, 4]]];

    let err = GameManager::new(grids, 5).expect_err("2x2 grid must be rejected against N=5");
    assert_eq!(err, EngineError::BoardShape { expected: 5 });
}

#[test]
fn solve_entry_points_propagate_shape_errors() {
    let grids = vec![vec![vec![1, 2, 3]]];

    let err = solve_first(&[1, 2, 3], grids.clone(), 5).expect_err("shape error expected");
    assert!(err.to_string().contains("5x5"));

    let err = solve_last(&[1, 2, 3], grids, 5).expect_err("shape error expected");
    assert!(err.to_string().contains("5x5"));
}
