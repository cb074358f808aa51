//! This module contains the logic for solving boards.
//!
//! The central entry point is [solve], which completes a partially filled
//! [Board] by backtracking and reports the outcome as a [Solution].

use crate::Board;
use crate::rules;

/// An enumeration of the outcomes of solving a board. Making the
/// no-solution case an explicit variant forces callers to branch on it
/// instead of silently ignoring it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the board is not solvable at all, i.e. no assignment
    /// of the empty cells satisfies all rules.
    Impossible,

    /// Indicates that a completion of the board was found, which is wrapped
    /// in this instance.
    Solved(Board)
}

fn solve_rec(board: &mut Board, row: usize, column: usize) -> bool {
    let side_length = board.side_length();

    if row == side_length {
        return true;
    }

    let next_column = (column + 1) % side_length;
    let next_row = if next_column == 0 { row + 1 } else { row };

    if board.get_cell(row, column).unwrap().is_some() {
        return solve_rec(board, next_row, next_column);
    }

    for number in 1..=side_length {
        if rules::is_valid_move(board, row, column, number).unwrap() {
            board.set_cell(row, column, number).unwrap();

            if solve_rec(board, next_row, next_column) {
                return true;
            }

            board.clear_cell(row, column).unwrap();
        }
    }

    false
}

/// Solves the given board by recursively testing all legal numbers for each
/// empty cell, in ascending order. If a completion exists, the first one
/// found in that order is returned, which makes the result deterministic:
/// the same input always yields the same output. The provided board is
/// never mutated; the search operates on a private copy.
///
/// The input is *not* checked for pre-existing conflicts. Callers must
/// ensure that [rules::conflicts] is empty before solving; for a board that
/// already violates the rules, the search may still report a completion
/// that merely agrees with the conflicting entries.
///
/// Note that the worst-case runtime of backtracking is exponential in the
/// number of empty cells. At the supported board sizes this stays well
/// below a second in practice, but callers embedding this in an
/// interactive system should still invoke it off their main path.
pub fn solve(board: &Board) -> Solution {
    let mut working = board.clone();

    if solve_rec(&mut working, 0, 0) {
        Solution::Solved(working)
    }
    else {
        Solution::Impossible
    }
}
