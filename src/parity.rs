use crate::board::Board;

/// Computes the board's solvability parity against the canonical goal and,
/// if it is odd (unsolvable), swaps the two highest-labelled non-empty
/// tiles to obtain a solvable configuration. Mutates in place; a no-op when
/// the board is already solvable.
///
/// Grounded in `original_source/include/Solver.hpp::__fix`: count
/// inversions over the flattened grid (tile 0 skipped), adjust by the row
/// of the empty cell and the board's dimension parities, then correct with
/// a single swap if the total is odd.
pub fn fix(board: &mut Board) {
    let size = board.size();
    let mut flattened = Vec::with_capacity(size as usize);
    for row in 0..board.height() {
        for col in 0..board.width() {
            flattened.push(board.value_at(row, col));
        }
    }

    let mut inversions = 0u32;
    for i in 0..flattened.len() {
        if flattened[i] == 0 {
            continue;
        }
        for j in (i + 1)..flattened.len() {
            if flattened[j] != 0 && flattened[i] > flattened[j] {
                inversions += 1;
            }
        }
    }

    let (zero_row, _) = board.coord_of(0);
    let mut parity = inversions;
    let width = board.width();
    let height = board.height();

    if (size - 1) % 2 == 1 {
        parity += zero_row;
    }
    if height % 2 == 0 && width % 2 == 0 {
        parity += 1;
    }
    if height % 2 == 0 && width % 2 == 1 {
        parity += zero_row % 2;
    }

    if parity % 2 == 1 {
        log::debug!("board parity is odd, swapping tiles {} and {} to make it solvable", size - 1, size - 2);
        board.swap(size - 1, size - 2);
    }
}
