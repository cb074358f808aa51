//! This module contains the rule checks of the engine: the legality of a
//! single placement, the set of all conflicting cells on a board, and the
//! check whether a board is completely solved.
//!
//! All functions in this module are pure; none of them mutates the provided
//! board.

use crate::{Board, Position};
use crate::error::{SudokuError, SudokuResult};
use crate::util::DigitSet;

use std::collections::HashSet;

fn row_allows(board: &Board, row: usize, column: usize, number: usize)
        -> bool {
    let side_length = board.side_length();

    for other_column in 0..side_length {
        if other_column != column &&
                board.has_number(row, other_column, number).unwrap() {
            return false;
        }
    }

    true
}

fn column_allows(board: &Board, row: usize, column: usize, number: usize)
        -> bool {
    let side_length = board.side_length();

    for other_row in 0..side_length {
        if other_row != row &&
                board.has_number(other_row, column, number).unwrap() {
            return false;
        }
    }

    true
}

fn region_allows(board: &Board, row: usize, column: usize, number: usize)
        -> bool {
    let (region_width, region_height) = board.size().region_dims();
    let region_row = (row / region_height) * region_height;
    let region_column = (column / region_width) * region_width;

    for other_row in region_row..(region_row + region_height) {
        for other_column in region_column..(region_column + region_width) {
            if (other_row != row || other_column != column) &&
                    board.has_number(other_row, other_column, number)
                        .unwrap() {
                return false;
            }
        }
    }

    true
}

fn allows(board: &Board, row: usize, column: usize, number: usize) -> bool {
    row_allows(board, row, column, number) &&
        column_allows(board, row, column, number) &&
        region_allows(board, row, column, number)
}

/// Indicates whether the given number would be legal in the cell at the
/// given position. That is the case if and only if no *other* cell in the
/// same row, column, or region currently holds `number`. The probed cell
/// itself is excluded from the check, so a number that is already placed in
/// that cell can be re-validated without removing it first.
///
/// Note that the content of the probed cell is ignored entirely: checking a
/// cell that holds a different number answers what would happen if that
/// number were replaced.
///
/// # Arguments
///
/// * `row`: The row (y-coordinate) of the checked cell. Must be in the
/// range `[0, side_length[`.
/// * `column`: The column (x-coordinate) of the checked cell. Must be in
/// the range `[0, side_length[`.
/// * `number`: The number to check whether it is legal in the given cell.
///
/// # Errors
///
/// * `SudokuError::OutOfBounds` If either `row` or `column` are not in the
/// specified range.
/// * `SudokuError::InvalidNumber` If `number` is not in the range
/// `[1, side_length]`.
pub fn is_valid_move(board: &Board, row: usize, column: usize, number: usize)
        -> SudokuResult<bool> {
    let side_length = board.side_length();

    if row >= side_length || column >= side_length {
        Err(SudokuError::OutOfBounds)
    }
    else if number == 0 || number > side_length {
        Err(SudokuError::InvalidNumber)
    }
    else {
        Ok(allows(board, row, column, number))
    }
}

/// Computes the set of all positions whose cell duplicates the value of at
/// least one other cell in the same row, column, or region. The check is
/// symmetric and pairwise: if two cells share a value, *both* of their
/// positions are contained in the result, never just one of them. Empty
/// cells are never conflicts.
///
/// For a fully valid board, as well as for a fully empty one, the result is
/// the empty set.
pub fn conflicts(board: &Board) -> HashSet<Position> {
    let side_length = board.side_length();
    let mut result = HashSet::new();

    for row in 0..side_length {
        for column in 0..side_length {
            if let Some(number) = board.get_cell(row, column).unwrap() {
                if !allows(board, row, column, number) {
                    result.insert((row, column));
                }
            }
        }
    }

    result
}

fn rows_duplicate_free(board: &Board) -> bool {
    let side_length = board.side_length();
    let mut seen = DigitSet::new();

    for row in 0..side_length {
        seen.clear();

        for column in 0..side_length {
            if let Some(number) = board.get_cell(row, column).unwrap() {
                if !seen.insert(number) {
                    return false;
                }
            }
        }
    }

    true
}

fn columns_duplicate_free(board: &Board) -> bool {
    let side_length = board.side_length();
    let mut seen = DigitSet::new();

    for column in 0..side_length {
        seen.clear();

        for row in 0..side_length {
            if let Some(number) = board.get_cell(row, column).unwrap() {
                if !seen.insert(number) {
                    return false;
                }
            }
        }
    }

    true
}

fn regions_duplicate_free(board: &Board) -> bool {
    let side_length = board.side_length();
    let (region_width, region_height) = board.size().region_dims();
    let mut seen = DigitSet::new();

    for region_row in (0..side_length).step_by(region_height) {
        for region_column in (0..side_length).step_by(region_width) {
            seen.clear();

            for row in region_row..(region_row + region_height) {
                for column in
                        region_column..(region_column + region_width) {
                    if let Some(number) =
                            board.get_cell(row, column).unwrap() {
                        if !seen.insert(number) {
                            return false;
                        }
                    }
                }
            }
        }
    }

    true
}

/// Indicates whether the given board is completely solved, i.e. it is full
/// and every row, column, and region contains each digit exactly once.
pub fn is_solved(board: &Board) -> bool {
    board.is_full() &&
        rows_duplicate_free(board) &&
        columns_duplicate_free(board) &&
        regions_duplicate_free(board)
}
