use tilepuzzle_solver::{parity, Board, GoalIndex};

/// Parses `raw`, runs the parity fixer, and returns the board plus the
/// goal index for its dimensions — the fixture every scenario test starts
/// from, matching how `main.rs` prepares a board before solving.
pub fn fixture(raw: &str, width: u32, height: u32) -> (Board, GoalIndex) {
    let mut board: Board = raw.parse().expect("fixture board must parse");
    parity::fix(&mut board);
    (board, GoalIndex::new(width, height))
}

/// Replays a comma-separated, oldest-first swap sequence (as produced by
/// `SolutionRecord::dump_solution_shuffles`) from `board` and asserts it
/// lands on the canonical goal.
pub fn assert_trajectory_reaches_goal(mut board: Board, goal: &GoalIndex, shuffles: &str) {
    for tile_str in shuffles.split(',').filter(|s| !s.is_empty()) {
        let tile: u32 = tile_str.parse().expect("recorded swap must be a tile label");
        board.swap(tile, 0);
    }
    assert!(board.is_solved(goal), "trajectory did not reach the goal");
}
