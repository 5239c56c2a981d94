use crate::board::Board;
use crate::goal::GoalIndex;

fn manhattan(a: (u32, u32), b: (u32, u32)) -> u32 {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// Undo token returned by [`Heuristic::step_forward`]. Carries exactly the
/// state `step_back` needs to restore the heuristic without recomputation:
/// the pre-move per-tile distances for the two tiles that moved, and the
/// pre-move running sum.
#[derive(Clone, Copy, Debug)]
pub struct StepUndo {
    nbr: u32,
    prev_h_nbr: u32,
    prev_h_zero: u32,
    prev_sum: u32,
}

/// Per-tile Manhattan distances to the goal, plus the running sum `H[N]`.
/// Maintained incrementally (§4.3): a move touches exactly two tiles (the
/// one that slid and tile 0), so both distances and the sum can be updated
/// in O(1) instead of recomputed over all N tiles.
#[derive(Clone, Debug)]
pub struct Heuristic {
    per_tile: Box<[u32]>,
    sum: u32,
}

impl Heuristic {
    #[must_use]
    pub fn init(board: &Board, goal: &GoalIndex) -> Self {
        let per_tile: Box<[u32]> = (0..board.size())
            .map(|tile| manhattan(board.coord_of(tile), goal.goal_coord(tile)))
            .collect();
        let sum = per_tile.iter().sum();
        Self { per_tile, sum }
    }

    #[must_use]
    pub fn sum(&self) -> u32 {
        self.sum
    }

    #[must_use]
    pub fn at(&self, tile: u32) -> u32 {
        self.per_tile[tile as usize]
    }

    /// Performs `board.swap(nbr, 0)` and incrementally updates H[nbr], H[0]
    /// and the running sum from the two tiles' new coordinates. O(1).
    pub fn step_forward(&mut self, board: &mut Board, goal: &GoalIndex, nbr: u32) -> StepUndo {
        let prev_h_nbr = self.at(nbr);
        let prev_h_zero = self.at(0);
        let prev_sum = self.sum;

        board.swap(nbr, 0);

        let new_h_nbr = manhattan(board.coord_of(nbr), goal.goal_coord(nbr));
        let new_h_zero = manhattan(board.coord_of(0), goal.goal_coord(0));
        self.per_tile[nbr as usize] = new_h_nbr;
        self.per_tile[0] = new_h_zero;
        self.sum = self.sum + (new_h_nbr + new_h_zero) - (prev_h_nbr + prev_h_zero);

        StepUndo {
            nbr,
            prev_h_nbr,
            prev_h_zero,
            prev_sum,
        }
    }

    /// Reverses a matching [`Heuristic::step_forward`]: swaps the board back
    /// and restores the three heuristic cells it touched (H3).
    pub fn step_back(&mut self, board: &mut Board, undo: StepUndo) {
        board.swap(undo.nbr, 0);
        self.per_tile[undo.nbr as usize] = undo.prev_h_nbr;
        self.per_tile[0] = undo.prev_h_zero;
        self.sum = undo.prev_sum;
    }
}
