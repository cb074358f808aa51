// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements a compact, easy-to-understand Sudoku engine for
//! 6x6 and 9x9 boards. It supports the following key features:
//!
//! * Parsing and printing boards
//! * Checking whether a single move is legal
//! * Finding every cell on a board that conflicts with one of its peers
//! * Solving boards using a backtracking algorithm
//! * Generating puzzles in three difficulties by randomized solving
//! followed by clue removal
//!
//! A 9x9 board is divided into nine 3x3 regions, each of which must contain
//! the digits 1 to 9 at most once, just like each row and column. A 6x6
//! board is divided into six regions that are 3 cells wide and 2 cells
//! tall, holding the digits 1 to 6. Note in this introduction we will
//! mostly be using 6x6 boards due to their simpler nature.
//!
//! # Parsing and printing boards
//!
//! See [Board::parse] for the exact format of a board code.
//!
//! Codes can be used to exchange boards, while pretty prints can be used to
//! display a board in a clearer manner. An example of how to parse and
//! display a board is provided below.
//!
//! ```
//! use sudoku_engine::Board;
//!
//! let board = Board::parse("6;\
//!     1, ,3, , ,6,\
//!      ,5, ,1, , ,\
//!      , ,1, , ,4,\
//!      , , , ,6, ,\
//!     4, , , ,1, ,\
//!      , ,5, , ,2").unwrap();
//! println!("{}", board);
//! ```
//!
//! # Checking moves and conflicts
//!
//! The [rules] module decides which placements are legal. A number may be
//! placed in a cell if no other cell in the same row, column, or region
//! already holds it. If you are developing an app that gives feedback to
//! the user, it may be desirable to check a potential entry before changing
//! the board's state.
//!
//! ```
//! use sudoku_engine::{Board, Size};
//! use sudoku_engine::rules;
//!
//! let mut board = Board::new(Size::Nine);
//! board.set_cell(0, 0, 5).unwrap();
//!
//! // Another 5 in the same row is illegal, far away it is fine.
//! assert!(!rules::is_valid_move(&board, 0, 8, 5).unwrap());
//! assert!(rules::is_valid_move(&board, 4, 8, 5).unwrap());
//! ```
//!
//! Sometimes the board already contains contradictory entries, for example
//! after loading user input. [rules::conflicts] finds every offending cell,
//! so all of them can be highlighted at once.
//!
//! ```
//! use sudoku_engine::{Board, Size};
//! use sudoku_engine::rules;
//!
//! let mut board = Board::new(Size::Nine);
//! board.set_cell(0, 0, 5).unwrap();
//! board.set_cell(0, 1, 5).unwrap();
//!
//! let conflicts = rules::conflicts(&board);
//!
//! // Both duplicated cells are reported, not just one of them.
//! assert!(conflicts.contains(&(0, 0)));
//! assert!(conflicts.contains(&(0, 1)));
//! ```
//!
//! # Solving boards
//!
//! [solver::solve] completes a partially filled board by recursively
//! testing all legal numbers for each empty cell. The result is a
//! [Solution](solver::Solution), which distinguishes a completed board from
//! an unsolvable input.
//!
//! ```
//! use sudoku_engine::{Board, Size};
//! use sudoku_engine::solver::{self, Solution};
//!
//! let board = Board::new(Size::Nine);
//!
//! match solver::solve(&board) {
//!     Solution::Solved(full) => assert!(full.is_full()),
//!     Solution::Impossible => panic!("An empty board is always solvable.")
//! }
//! ```
//!
//! # Generating puzzles
//!
//! A [Generator](generator::Generator) first synthesizes a random full
//! board and then removes cells until only the clue count associated with
//! the requested [Difficulty](generator::Difficulty) remains. The generator
//! needs a random number generator, for which we use the `Rng` trait from
//! the [rand](https://rust-random.github.io/rand/rand/index.html) crate.
//!
//! ```
//! use sudoku_engine::Size;
//! use sudoku_engine::generator::{Difficulty, Generator};
//! use sudoku_engine::rules;
//!
//! // new_default yields a generator backed by rand::thread_rng()
//! let mut generator = Generator::new_default();
//! let puzzle = generator.generate(Size::Nine, Difficulty::Medium);
//!
//! assert_eq!(35, puzzle.count_clues());
//! assert!(rules::conflicts(&puzzle).is_empty());
//! ```
//!
//! # Note regarding performance
//!
//! Solving and generating boards of the supported sizes finishes in well
//! under a second on commodity hardware. The backtracking search profits
//! considerably from optimization, however, so it is recommended to use at
//! least `opt-level = 2` in tests that solve or generate many boards.

pub mod error;
pub mod generator;
pub mod rules;
pub mod solver;
pub mod util;


use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// An enumeration of the board sizes supported by this engine. The size
/// determines the side length of the square grid as well as the shape of
/// its regions.
///
/// | Size          | Side length | Region shape      |
/// |---------------|-------------|-------------------|
/// | `Size::Six`   | 6           | 3 wide, 2 tall    |
/// | `Size::Nine`  | 9           | 3 wide, 3 tall    |
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Size {

    /// A 6x6 board with regions that are 3 cells wide and 2 cells tall.
    Six,

    /// A classic 9x9 board with 3x3 regions.
    Nine
}

impl Size {

    /// Gets the number of cells along one axis of a board of this size,
    /// which is also the highest digit that can occur in its cells.
    pub fn side_length(self) -> usize {
        match self {
            Size::Six => 6,
            Size::Nine => 9
        }
    }

    /// Gets the total number of cells of a board of this size, i.e. the
    /// square of [Size::side_length].
    pub fn cell_count(self) -> usize {
        let side_length = self.side_length();
        side_length * side_length
    }

    /// Gets the dimensions `(width, height)` of one region of a board of
    /// this size. The grid is partitioned into `side_length / width`
    /// regions horizontally and `side_length / height` regions vertically.
    pub fn region_dims(self) -> (usize, usize) {
        match self {
            Size::Six => (3, 2),
            Size::Nine => (3, 3)
        }
    }

    /// Gets the size whose [Size::side_length] equals the given number, or
    /// `None` if no supported size matches.
    pub fn from_side_length(side_length: usize) -> Option<Size> {
        match side_length {
            6 => Some(Size::Six),
            9 => Some(Size::Nine),
            _ => None
        }
    }
}

/// The location of one cell on a [Board] as a `(row, column)` pair. Both
/// coordinates are 0-indexed and less than the board's side length.
pub type Position = (usize, usize);

/// A Sudoku board of one of the supported [Size]s. Each cell may or may not
/// be occupied by a number in the range `[1, side_length]`.
///
/// A 6x6 board has the following layout, where the bold lines mark region
/// boundaries:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// Boards are plain values: the engine never retains a reference to a board
/// across calls, and solving operates on a private copy.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Board {
    size: Size,
    cells: Vec<Option<usize>>
}

fn index(row: usize, column: usize, side_length: usize) -> usize {
    row * side_length + column
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        ('0' as u8 + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(board: &Board, start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let side_length = board.side_length();
    let (region_width, _) = board.size().region_dims();
    let mut result = String::new();

    for x in 0..side_length {
        if x == 0 {
            result.push(start);
        }
        else if x % region_width == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row(board: &Board) -> String {
    line(board, '╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line(board: &Board) -> String {
    line(board, '╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line(board: &Board) -> String {
    line(board, '╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row(board: &Board) -> String {
    line(board, '╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(board: &Board, y: usize) -> String {
    line(board, '║', '║', '│', |x| to_char(board.get_cell(y, x).unwrap()),
        ' ', '║', true)
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let side_length = self.side_length();
        let (_, region_height) = self.size().region_dims();

        let top_row = top_row(self);
        let thin_separator_line = thin_separator_line(self);
        let thick_separator_line = thick_separator_line(self);
        let bottom_row = bottom_row(self);

        for y in 0..side_length {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % region_height == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

impl Board {

    /// Creates a new, empty board of the given size. Every cell starts out
    /// without a number.
    pub fn new(size: Size) -> Board {
        let cells = vec![None; size.cell_count()];

        Board {
            size,
            cells
        }
    }

    /// Parses a code encoding a board. The code has to be of the format
    /// `<side_length>;<cells>` where `<side_length>` is 6 or 9 and
    /// `<cells>` is a comma-separated list of entries, which are either
    /// empty or a number. The entries are assigned left-to-right,
    /// top-to-bottom, where each row is completed before the next one is
    /// started. Whitespace in the entries is ignored to allow for more
    /// intuitive formatting. The number of entries must match the amount of
    /// cells in a board of the given size, i.e. it must be `side_length²`.
    ///
    /// As an example, the code `6;1, ,2, , , , ,3, ,4, , , , , ,3, , , ,1,
    /// , ,2, , , , ,5, , ,6, , , , ,4` will parse to a 6x6 board holding
    /// the given numbers.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<Board> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(SudokuParseError::WrongNumberOfParts);
        }

        let side_length = parts[0].trim().parse::<usize>()?;
        let size = Size::from_side_length(side_length)
            .ok_or(SudokuParseError::InvalidSize)?;
        let mut board = Board::new(size);
        let numbers: Vec<&str> = parts[1].split(',').collect();

        if numbers.len() != size.cell_count() {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        for (i, number_str) in numbers.iter().enumerate() {
            let number_str = number_str.trim();

            if number_str.is_empty() {
                continue;
            }

            let number = number_str.parse::<usize>()?;

            if number == 0 || number > side_length {
                return Err(SudokuParseError::InvalidNumber);
            }

            board.cells[i] = Some(number);
        }

        Ok(board)
    }

    /// Converts the board into a `String` in a way that is consistent with
    /// [Board::parse](#method.parse). That is, a board that is converted to
    /// a string and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_engine::{Board, Size};
    ///
    /// let mut board = Board::new(Size::Six);
    ///
    /// // Just some arbitrary changes to create some content.
    /// board.set_cell(1, 1, 4).unwrap();
    /// board.set_cell(2, 1, 5).unwrap();
    ///
    /// let board_str = board.to_parseable_string();
    /// let board_parsed = Board::parse(board_str.as_str()).unwrap();
    /// assert_eq!(board, board_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        let mut s = format!("{};", self.side_length());
        let cells = self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    /// Gets the [Size] of this board.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Gets the number of cells along one axis of this board. Shorthand for
    /// `board.size().side_length()`.
    pub fn side_length(&self) -> usize {
        self.size.side_length()
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, side_length[`.
    /// * `column`: The column (x-coordinate) of the desired cell. Must be
    /// in the range `[0, side_length[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, row: usize, column: usize)
            -> SudokuResult<Option<usize>> {
        let side_length = self.side_length();

        if row >= side_length || column >= side_length {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(row, column, side_length)])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, side_length[`.
    /// * `column`: The column (x-coordinate) of the checked cell. Must be
    /// in the range `[0, side_length[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, side_length]`, `false` will always
    /// be returned.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, row: usize, column: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(row, column)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, side_length[`.
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, side_length[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, side_length]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `row` or `column` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, row: usize, column: usize, number: usize)
            -> SudokuResult<()> {
        let side_length = self.side_length();

        if row >= side_length || column >= side_length {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > side_length {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(row, column, side_length)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is,
    /// if it contains a number, that number is removed. If the cell is
    /// already empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, side_length[`.
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be
    /// in the range `[0, side_length[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, row: usize, column: usize)
            -> SudokuResult<()> {
        let side_length = self.side_length();

        if row >= side_length || column >= side_length {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(row, column, side_length)] = None;
        Ok(())
    }

    fn verify_size(&self, other: &Board) -> SudokuResult<()> {
        if self.size != other.size {
            Err(SudokuError::SizeMismatch)
        }
        else {
            Ok(())
        }
    }

    /// Counts the number of clues given by this board. This is the number
    /// of non-empty cells. While on average boards with less clues are
    /// harder, this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|c| c.is_some())
            .count()
    }

    /// Indicates whether this board is full, i.e. every cell is filled with
    /// a number. In this case, [Board::count_clues] returns
    /// [Size::cell_count].
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this board is empty, i.e. no cell is filled with a
    /// number. In this case, [Board::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this board configuration is a subset of another
    /// one. That is, all cells filled in this board with some number must
    /// be filled in `other` with the same number. If this condition is met,
    /// `true` is returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the sizes of this and the `other` board are not the same. In that
    /// case, `SudokuError::SizeMismatch` is returned.
    pub fn is_subset(&self, other: &Board) -> SudokuResult<bool> {
        self.verify_size(other)?;
        Ok(self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        match other_cell {
                            Some(other_number) => self_number == other_number,
                            None => false
                        },
                    None => true
                }
            }))
    }

    /// Indicates whether this board configuration is a superset of another
    /// one. That is, all cells filled in the `other` board with some number
    /// must be filled in this one with the same number. If this condition
    /// is met, `true` is returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the sizes of this and the `other` board are not the same. In that
    /// case, `SudokuError::SizeMismatch` is returned.
    pub fn is_superset(&self, other: &Board) -> SudokuResult<bool> {
        other.is_subset(self)
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn geometry() {
        assert_eq!(6, Size::Six.side_length());
        assert_eq!(9, Size::Nine.side_length());
        assert_eq!(36, Size::Six.cell_count());
        assert_eq!(81, Size::Nine.cell_count());
        assert_eq!((3, 2), Size::Six.region_dims());
        assert_eq!((3, 3), Size::Nine.region_dims());
    }

    #[test]
    fn size_from_side_length() {
        assert_eq!(Some(Size::Six), Size::from_side_length(6));
        assert_eq!(Some(Size::Nine), Size::from_side_length(9));
        assert_eq!(None, Size::from_side_length(4));
        assert_eq!(None, Size::from_side_length(7));
    }

    #[test]
    fn parse_ok() {
        let board_res = Board::parse("6;\
            1, ,3, , ,6,\
             ,5, ,1, , ,\
             , ,1, , ,4,\
             , , , ,6, ,\
            4, , , ,1, ,\
             , ,5, , ,2");

        if let Ok(board) = board_res {
            assert_eq!(Size::Six, board.size());
            assert_eq!(Some(1), board.get_cell(0, 0).unwrap());
            assert_eq!(None, board.get_cell(0, 1).unwrap());
            assert_eq!(Some(3), board.get_cell(0, 2).unwrap());
            assert_eq!(Some(6), board.get_cell(0, 5).unwrap());
            assert_eq!(Some(5), board.get_cell(1, 1).unwrap());
            assert_eq!(Some(1), board.get_cell(1, 3).unwrap());
            assert_eq!(Some(1), board.get_cell(2, 2).unwrap());
            assert_eq!(Some(4), board.get_cell(2, 5).unwrap());
            assert_eq!(Some(6), board.get_cell(3, 4).unwrap());
            assert_eq!(Some(4), board.get_cell(4, 0).unwrap());
            assert_eq!(Some(1), board.get_cell(4, 4).unwrap());
            assert_eq!(Some(5), board.get_cell(5, 2).unwrap());
            assert_eq!(Some(2), board.get_cell(5, 5).unwrap());
            assert_eq!(12, board.count_clues());
        }
        else {
            panic!("Parsing valid board failed.");
        }
    }

    #[test]
    fn parse_wrong_number_of_parts() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfParts),
            Board::parse("6"));
        assert_eq!(Err(SudokuParseError::WrongNumberOfParts),
            Board::parse("6;,,;whatever"));
    }

    #[test]
    fn parse_invalid_size() {
        assert_eq!(Err(SudokuParseError::InvalidSize), Board::parse("7;,"));
        assert_eq!(Err(SudokuParseError::InvalidSize), Board::parse("4;,"));
        assert_eq!(Err(SudokuParseError::InvalidSize), Board::parse("0;,"));
    }

    #[test]
    fn parse_number_format_error() {
        assert_eq!(Err(SudokuParseError::NumberFormatError),
            Board::parse("3x3;,"));
        assert_eq!(Err(SudokuParseError::NumberFormatError),
            Board::parse("6#;,"));
    }

    #[test]
    fn parse_invalid_number() {
        let code = format!("6;7{}", ",".repeat(35));
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            Board::parse(code.as_str()));

        let code = format!("6;0{}", ",".repeat(35));
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            Board::parse(code.as_str()));
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        let too_few = format!("6;{}", ",".repeat(34));
        let too_many = format!("6;{}", ",".repeat(36));
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            Board::parse(too_few.as_str()));
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            Board::parse(too_many.as_str()));
    }

    #[test]
    fn to_parseable_string() {
        let mut board = Board::new(Size::Six);
        let empty_code = format!("6;{}", ",".repeat(35));

        assert_eq!(empty_code, board.to_parseable_string());

        board.set_cell(0, 0, 1).unwrap();
        board.set_cell(2, 3, 4).unwrap();
        board.set_cell(5, 5, 6).unwrap();

        let reparsed = Board::parse(board.to_parseable_string().as_str())
            .unwrap();
        assert_eq!(board, reparsed);
    }

    #[test]
    fn cell_accessors_check_bounds() {
        let mut board = Board::new(Size::Six);

        assert_eq!(Err(SudokuError::OutOfBounds), board.get_cell(6, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), board.get_cell(0, 6));
        assert_eq!(Err(SudokuError::OutOfBounds), board.set_cell(6, 0, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), board.clear_cell(0, 6));
        assert_eq!(Err(SudokuError::OutOfBounds), board.has_number(9, 0, 1));
    }

    #[test]
    fn set_cell_checks_number_range() {
        let mut board = Board::new(Size::Six);

        assert_eq!(Err(SudokuError::InvalidNumber), board.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber), board.set_cell(0, 0, 7));

        let mut board = Board::new(Size::Nine);

        assert_eq!(Ok(()), board.set_cell(0, 0, 9));
        assert_eq!(Err(SudokuError::InvalidNumber), board.set_cell(0, 0, 10));
    }

    #[test]
    fn set_and_clear_cell() {
        let mut board = Board::new(Size::Six);

        board.set_cell(2, 4, 5).unwrap();
        assert_eq!(Some(5), board.get_cell(2, 4).unwrap());
        assert!(board.has_number(2, 4, 5).unwrap());
        assert!(!board.has_number(2, 4, 3).unwrap());

        board.set_cell(2, 4, 3).unwrap();
        assert_eq!(Some(3), board.get_cell(2, 4).unwrap());

        board.clear_cell(2, 4).unwrap();
        assert_eq!(None, board.get_cell(2, 4).unwrap());
        assert!(!board.has_number(2, 4, 3).unwrap());
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = Board::new(Size::Six);
        let partial = Board::parse("6;\
            1, ,3, , ,6,\
             ,5, ,1, , ,\
             , , , , , ,\
             , , , ,6, ,\
            4, , , , , ,\
             , ,5, , ,2").unwrap();
        let full = Board::parse("6;\
            1,2,3,4,5,6,\
            4,5,6,1,2,3,\
            2,3,1,5,6,4,\
            5,6,4,2,3,1,\
            3,1,2,6,4,5,\
            6,4,5,3,1,2").unwrap();

        assert_eq!(0, empty.count_clues());
        assert_eq!(9, partial.count_clues());
        assert_eq!(36, full.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    fn assert_subset_relation(a: &Board, b: &Board, a_subset_b: bool,
            b_subset_a: bool) {
        assert!(a.is_subset(b).unwrap() == a_subset_b);
        assert!(a.is_superset(b).unwrap() == b_subset_a);
        assert!(b.is_subset(a).unwrap() == b_subset_a);
        assert!(b.is_superset(a).unwrap() == a_subset_b);
    }

    #[test]
    fn empty_is_subset() {
        let empty = Board::new(Size::Six);
        let mut partial = Board::new(Size::Six);
        partial.set_cell(0, 0, 1).unwrap();
        partial.set_cell(3, 4, 3).unwrap();

        assert_subset_relation(&empty, &partial, true, false);
        assert_subset_relation(&empty, &empty, true, true);
    }

    #[test]
    fn true_subset() {
        let mut partial = Board::new(Size::Six);
        partial.set_cell(0, 0, 1).unwrap();
        partial.set_cell(3, 4, 3).unwrap();
        let full = Board::parse("6;\
            1,2,3,4,5,6,\
            4,5,6,1,2,3,\
            2,3,1,5,6,4,\
            5,6,4,2,3,1,\
            3,1,2,6,4,5,\
            6,4,5,3,1,2").unwrap();

        assert_subset_relation(&partial, &full, true, false);
    }

    #[test]
    fn unrelated_boards_not_subsets() {
        let mut a = Board::new(Size::Six);
        a.set_cell(0, 0, 1).unwrap();
        let mut b = Board::new(Size::Six);
        b.set_cell(0, 0, 2).unwrap();

        assert_subset_relation(&a, &b, false, false);
    }

    #[test]
    fn subset_requires_equal_sizes() {
        let six = Board::new(Size::Six);
        let nine = Board::new(Size::Nine);

        assert_eq!(Err(SudokuError::SizeMismatch), six.is_subset(&nine));
        assert_eq!(Err(SudokuError::SizeMismatch), nine.is_superset(&six));
    }

    #[test]
    fn serde_round_trip() {
        let board = Board::parse("9;\
            5,3, , ,7, , , , ,\
            6, , ,1,9,5, , , ,\
             ,9,8, , , , ,6, ,\
            8, , , ,6, , , ,3,\
            4, , ,8, ,3, , ,1,\
            7, , , ,2, , , ,6,\
             ,6, , , , ,2,8, ,\
             , , ,4,1,9, , ,5,\
             , , , ,8, , ,7,9").unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(json.as_str()).unwrap();

        assert_eq!(board, deserialized);
    }
}
