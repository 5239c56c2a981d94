use crate::board::Board;
use crate::goal::GoalIndex;
use crate::heuristic::Heuristic;

use super::{grow_stack, SolutionRecord};

/// Single-threaded IDA*: iterative deepening over the cost bound `F`,
/// starting from `F = H[N]` (§4.4). Mutates `board` in place; callers that
/// want the original preserved should clone first.
pub fn solve(board: &mut Board, goal: &GoalIndex) -> (u32, SolutionRecord) {
    let mut heuristic = Heuristic::init(board, goal);
    let mut record = SolutionRecord::new();

    let mut bound = heuristic.sum();
    while bound > 0 {
        log::trace!("deepening IDA* bound to {bound}");
        bound = dfs(board, goal, &mut heuristic, &mut record, bound, 1, 0, None);
    }

    (record.best_steps().unwrap_or(0), record)
}

/// Cost-bounded depth-first search. Returns the minimum f-value exceeding
/// `bound` encountered in this subtree, or `0` if the goal was reached.
/// `is_best_out`, when provided, is set to `true` iff this subtree's
/// descendant is on the path that produced the current best solution —
/// the mechanism the caller uses to know which of its children to record
/// as `shuffle_with`.
#[allow(clippy::too_many_lines)]
fn dfs(
    board: &mut Board,
    goal: &GoalIndex,
    heuristic: &mut Heuristic,
    record: &mut SolutionRecord,
    bound: u32,
    depth: u32,
    prev: u32,
    mut is_best_out: Option<&mut bool>,
) -> u32 {
    let mut min = u32::MAX;
    let mut shuffle_with = 0u32;

    for nbr in board.neighbours(0).iter() {
        if nbr == prev {
            continue;
        }

        let undo = heuristic.step_forward(board, goal, nbr);
        let h_new = heuristic.sum();
        let f = depth + h_new;

        if f > bound {
            heuristic.step_back(board, undo);
            if shuffle_with != 0 {
                break;
            }
            return f;
        }

        if h_new == 0 {
            let became_best = record.record_goal(depth, nbr, || board.to_bracketed_string());
            heuristic.step_back(board, undo);
            if became_best {
                record.push_state_if_needed(|| board.to_bracketed_string());
                if let Some(flag) = is_best_out.as_deref_mut() {
                    *flag = true;
                }
            }
            return 0;
        }

        let mut child_best = false;
        let m = grow_stack(|| {
            dfs(
                board,
                goal,
                heuristic,
                record,
                bound,
                depth + 1,
                nbr,
                Some(&mut child_best),
            )
        });
        min = min.min(m);
        if child_best {
            shuffle_with = nbr;
        }
        heuristic.step_back(board, undo);
    }

    if min == 0 && shuffle_with != 0 {
        record.push_state_if_needed(|| board.to_bracketed_string());
        record.push_swap(shuffle_with);
        if let Some(flag) = is_best_out {
            *flag = true;
        }
    }

    min
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_str(input: &str, width: u32, height: u32) -> (u32, SolutionRecord) {
        let mut board: Board = input.parse().unwrap();
        crate::parity::fix(&mut board);
        let goal = GoalIndex::new(width, height);
        solve(&mut board, &goal)
    }

    #[test]
    fn already_solved_board_returns_zero_with_empty_trajectory() {
        let (steps, record) = solve_str("[[1,2,3],[4,5,6],[7,8,0]]", 3, 3);
        assert_eq!(steps, 0);
        assert!(record.shuffles().is_empty());
    }

    #[test]
    fn single_move_away_returns_one_step() {
        let (steps, record) = solve_str("[[1,2,3],[4,5,6],[7,0,8]]", 3, 3);
        assert_eq!(steps, 1);
        assert_eq!(record.shuffles(), &[8]);
        // goal snapshot plus the pre-goal snapshot at G-1 (spec §4.4 step 4).
        assert_eq!(record.state_count(), 2);
    }

    #[test]
    fn state_snapshots_trail_shuffles_by_exactly_one() {
        let (steps, record) = solve_str("[[8,6,7],[2,5,4],[3,0,1]]", 3, 3);
        assert_eq!(record.shuffles().len() as u32, steps);
        assert_eq!(record.state_count(), record.shuffles().len() + 1);
    }

    #[test]
    fn scrambled_3x3_returns_known_optimal_length() {
        let (steps, _) = solve_str("[[8,6,7],[2,5,4],[3,0,1]]", 3, 3);
        assert_eq!(steps, 31);
    }

    #[test]
    fn replaying_trajectory_reaches_goal() {
        let mut board: Board = "[[8,6,7],[2,5,4],[3,0,1]]".parse().unwrap();
        crate::parity::fix(&mut board);
        let goal = GoalIndex::new(3, 3);
        let (steps, record) = solve(&mut board.clone(), &goal);

        let mut replay = board;
        for tile_str in record.dump_solution_shuffles().split(',').filter(|s| !s.is_empty()) {
            let tile: u32 = tile_str.parse().unwrap();
            replay.swap(tile, 0);
        }
        assert!(replay.is_solved(&goal));
        assert_eq!(replay_len(&record), steps);
    }

    fn replay_len(record: &SolutionRecord) -> u32 {
        record.shuffles().len() as u32
    }
}
