//! This module contains logic for generating random puzzles.
//!
//! Generation is done by first filling an empty board with random digits
//! using a [Generator] and then removing cells until only the clue count
//! associated with the requested [Difficulty] remains.

use crate::{Board, Size};
use crate::error::{SudokuError, SudokuResult};
use crate::rules;

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

/// An enumeration of the difficulties a puzzle can be generated in. The
/// difficulty only determines how many clues the generated puzzle retains.
///
/// | Difficulty | Clues on 9x9 | Clues on 6x6 |
/// |------------|--------------|--------------|
/// | `Easy`     | 43           | 24           |
/// | `Medium`   | 35           | 18           |
/// | `Hard`     | 27           | 12           |
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Difficulty {

    /// Retains the most clues.
    Easy,

    /// Retains a moderate amount of clues.
    Medium,

    /// Retains the fewest clues.
    Hard
}

impl Difficulty {

    /// Gets the number of clues a puzzle generated with this difficulty
    /// retains on a board of the given size.
    pub fn clue_count(self, size: Size) -> usize {
        match (size, self) {
            (Size::Nine, Difficulty::Easy) => 43,
            (Size::Nine, Difficulty::Medium) => 35,
            (Size::Nine, Difficulty::Hard) => 27,
            (Size::Six, Difficulty::Easy) => 24,
            (Size::Six, Difficulty::Medium) => 18,
            (Size::Six, Difficulty::Hard) => 12
        }
    }
}

/// A generator randomly fills and punches [Board]s to create puzzles. It
/// uses a random number generator to decide the content. For most cases,
/// sensible defaults are provided by [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, board: &mut Board, row: usize, column: usize)
            -> bool {
        let side_length = board.side_length();

        if row == side_length {
            return true;
        }

        let next_column = (column + 1) % side_length;
        let next_row = if next_column == 0 { row + 1 } else { row };

        if board.get_cell(row, column).unwrap().is_some() {
            return self.fill_rec(board, next_row, next_column);
        }

        for number in shuffle(&mut self.rng, 1..=side_length) {
            if rules::is_valid_move(board, row, column, number).unwrap() {
                board.set_cell(row, column, number).unwrap();

                if self.fill_rec(board, next_row, next_column) {
                    return true;
                }

                board.clear_cell(row, column).unwrap();
            }
        }

        false
    }

    /// Fills the given board with random digits that satisfy all rules and
    /// match all already present digits. The control structure is the same
    /// backtracking search as [solve](crate::solver::solve), except that
    /// the candidate numbers are shuffled independently at every recursive
    /// step, so repeated calls on an empty board produce different grids.
    ///
    /// If no error is returned, the board is full and
    /// [rules::is_solved] holds for it afterwards. Otherwise, it remains
    /// unchanged.
    ///
    /// # Arguments
    ///
    /// * `board`: The board to fill with random digits.
    ///
    /// # Errors
    ///
    /// * `SudokuError::Unsolvable` If there are no sets of digits that can
    /// be entered into the board's empty cells without breaking the rules.
    pub fn fill(&mut self, board: &mut Board) -> SudokuResult<()> {
        if self.fill_rec(board, 0, 0) {
            Ok(())
        }
        else {
            Err(SudokuError::Unsolvable)
        }
    }

    /// Generates a new random puzzle of the given size and difficulty.
    ///
    /// A full board is synthesized first by [Generator::fill]; afterwards,
    /// uniformly random cells are cleared until only
    /// [Difficulty::clue_count] clues remain. The result is guaranteed to
    /// be solvable (the full board it was punched from is a solution), but
    /// *not* guaranteed to be uniquely solvable.
    ///
    /// Filling an empty board cannot fail, since every empty board has
    /// completions. Should the search report a failure anyway, the
    /// untouched empty board is returned rather than retrying, signaling a
    /// degenerate configuration to the caller.
    pub fn generate(&mut self, size: Size, difficulty: Difficulty) -> Board {
        let mut board = Board::new(size);

        if self.fill(&mut board).is_err() {
            return board;
        }

        let side_length = size.side_length();
        let cells_to_clear = size.cell_count() - difficulty.clue_count(size);
        let mut cleared = 0;

        while cleared < cells_to_clear {
            let row = self.rng.gen_range(0..side_length);
            let column = self.rng.gen_range(0..side_length);

            if board.get_cell(row, column).unwrap().is_some() {
                board.clear_cell(row, column).unwrap();
                cleared += 1;
            }
        }

        board
    }
}
