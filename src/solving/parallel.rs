use std::sync::{Arc, Mutex};
use std::thread;

use crate::board::Board;
use crate::goal::GoalIndex;
use crate::heuristic::Heuristic;

use super::{grow_stack, SolutionRecord};

/// Parallel IDA*: identical iterative-deepening outer loop to
/// [`super::sequential::solve`], but the inner DFS fans out to worker
/// threads while `depth <= cpu_units` (§4.5). `board` and `heuristic` are
/// only ever touched by the calling thread outside of a join; each worker
/// operates on its own deep-cloned copy.
pub fn solve(board: &mut Board, goal: &GoalIndex, cpu_units: u32) -> (u32, SolutionRecord) {
    let mut heuristic = Heuristic::init(board, goal);
    let record = Arc::new(Mutex::new(SolutionRecord::new()));

    let mut bound = heuristic.sum();
    while bound > 0 {
        log::trace!("deepening parallel IDA* bound to {bound}");
        bound = dfs_multi(
            board,
            goal,
            &mut heuristic,
            &record,
            cpu_units,
            bound,
            1,
            0,
            None,
        );
    }

    let best = record.lock().expect("solution record mutex poisoned").best_steps();
    let record = Arc::try_unwrap(record)
        .expect("all worker threads have joined by the time solve returns")
        .into_inner()
        .expect("solution record mutex poisoned");
    (best.unwrap_or(0), record)
}

/// Outcome of one worker's subtree, reported back to the fan-out join
/// point. `leaf_depth` is `Some(d)` when this worker's subtree produced a
/// solution that, *at the time the worker found it*, was the best known —
/// the depth-encoded flag from §4.5's design note. Comparing `leaf_depth`
/// against the shared best at join time (rather than trusting the flag
/// outright) keeps this correct even if a sibling improved on it afterwards.
struct WorkerOutcome {
    nbr: u32,
    min: u32,
    leaf_depth: Option<u32>,
}

#[allow(clippy::too_many_arguments, clippy::too_many_lines)]
fn dfs_multi(
    board: &mut Board,
    goal: &GoalIndex,
    heuristic: &mut Heuristic,
    record: &Arc<Mutex<SolutionRecord>>,
    cpu_units: u32,
    bound: u32,
    depth: u32,
    prev: u32,
    mut is_best_out: Option<&mut bool>,
) -> u32 {
    if depth > cpu_units {
        return dfs_in_thread(board, goal, heuristic, record, cpu_units, bound, depth, prev, is_best_out);
    }

    let candidates: Vec<u32> = board.neighbours(0).iter().filter(|&n| n != prev).collect();
    if candidates.is_empty() {
        return u32::MAX;
    }

    let outcomes: Vec<WorkerOutcome> = thread::scope(|scope| {
        let handles: Vec<_> = candidates
            .iter()
            .map(|&nbr| {
                let mut worker_board = board.clone();
                let mut worker_heuristic = heuristic.clone();
                let record = Arc::clone(record);
                thread::Builder::new()
                    .stack_size(16 * 1024 * 1024)
                    .spawn_scoped(scope, move || {
                        run_worker(
                            &mut worker_board,
                            goal,
                            &mut worker_heuristic,
                            &record,
                            cpu_units,
                            bound,
                            depth,
                            nbr,
                        )
                    })
                    .expect("failed to spawn search worker thread")
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("search worker thread panicked"))
            .collect()
    });

    join_outcomes(board, record, outcomes, depth, is_best_out.as_deref_mut())
}

/// Runs one fan-out worker: applies its move, then either records a goal or
/// recurses (possibly fanning out again, if still within `cpu_units`).
#[allow(clippy::too_many_arguments)]
fn run_worker(
    worker_board: &mut Board,
    goal: &GoalIndex,
    worker_heuristic: &mut Heuristic,
    record: &Arc<Mutex<SolutionRecord>>,
    cpu_units: u32,
    bound: u32,
    depth: u32,
    nbr: u32,
) -> WorkerOutcome {
    let undo = worker_heuristic.step_forward(worker_board, goal, nbr);
    let h_new = worker_heuristic.sum();
    let f = depth + h_new;

    if f > bound {
        worker_heuristic.step_back(worker_board, undo);
        return WorkerOutcome {
            nbr,
            min: f,
            leaf_depth: None,
        };
    }

    if h_new == 0 {
        let became_best = {
            let mut rec = record.lock().expect("solution record mutex poisoned");
            rec.record_goal(depth, nbr, || worker_board.to_bracketed_string())
        };
        worker_heuristic.step_back(worker_board, undo);
        if became_best {
            let mut rec = record.lock().expect("solution record mutex poisoned");
            rec.push_state_if_needed(|| worker_board.to_bracketed_string());
        }
        return WorkerOutcome {
            nbr,
            min: 0,
            leaf_depth: became_best.then_some(depth),
        };
    }

    let mut child_best = false;
    let m = grow_stack(|| {
        dfs_multi(
            worker_board,
            goal,
            worker_heuristic,
            record,
            cpu_units,
            bound,
            depth + 1,
            nbr,
            Some(&mut child_best),
        )
    });
    worker_heuristic.step_back(worker_board, undo);
    WorkerOutcome {
        nbr,
        min: m,
        leaf_depth: child_best.then_some(depth),
    }
}

fn join_outcomes(
    board: &Board,
    record: &Arc<Mutex<SolutionRecord>>,
    outcomes: Vec<WorkerOutcome>,
    depth: u32,
    is_best_out: Option<&mut bool>,
) -> u32 {
    let mut min = u32::MAX;
    let mut shuffle_with = 0u32;

    let current_best = record.lock().expect("solution record mutex poisoned").best_steps();
    for outcome in &outcomes {
        min = min.min(outcome.min);
        if outcome.leaf_depth.is_some() && outcome.leaf_depth == current_best {
            shuffle_with = outcome.nbr;
        }
    }

    if min == 0 && shuffle_with != 0 {
        let mut rec = record.lock().expect("solution record mutex poisoned");
        rec.push_state_if_needed(|| board.to_bracketed_string());
        rec.push_swap(shuffle_with);
        if let Some(flag) = is_best_out {
            *flag = true;
        }
    }

    min
}

/// Below the fan-out frontier (`depth > cpu_units`), recursion proceeds
/// exactly as the single-threaded variant, differing only in locking the
/// shared record instead of owning it outright.
#[allow(clippy::too_many_arguments)]
fn dfs_in_thread(
    board: &mut Board,
    goal: &GoalIndex,
    heuristic: &mut Heuristic,
    record: &Arc<Mutex<SolutionRecord>>,
    cpu_units: u32,
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
            let became_best = {
                let mut rec = record.lock().expect("solution record mutex poisoned");
                rec.record_goal(depth, nbr, || board.to_bracketed_string())
            };
            heuristic.step_back(board, undo);
            if became_best {
                let mut rec = record.lock().expect("solution record mutex poisoned");
                rec.push_state_if_needed(|| board.to_bracketed_string());
                if let Some(flag) = is_best_out.as_deref_mut() {
                    *flag = true;
                }
            }
            return 0;
        }

        let mut child_best = false;
        let m = grow_stack(|| {
            dfs_multi(
                board,
                goal,
                heuristic,
                record,
                cpu_units,
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
        let mut rec = record.lock().expect("solution record mutex poisoned");
        rec.push_state_if_needed(|| board.to_bracketed_string());
        rec.push_swap(shuffle_with);
        if let Some(flag) = is_best_out {
            *flag = true;
        }
    }

    min
}
