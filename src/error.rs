//! This module contains some error and result definitions used in this crate.

use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing boards, see [SudokuParseError](enum.SudokuParseError.html) for
/// that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that some number is invalid for the size of the board in
    /// question. This is the case if it is less than 1 or greater than the
    /// side length.
    InvalidNumber,

    /// Indicates that the specified coordinates (row and column) lie outside
    /// the board in question. This is the case if they are greater than or
    /// equal to the side length.
    OutOfBounds,

    /// Indicates that two boards of different sizes were provided to an
    /// operation that requires boards of equal size.
    SizeMismatch,

    /// An error that is raised whenever it is attempted to fill a board that
    /// has no completion agreeing with its present digits.
    Unsolvable
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a
/// [Board](crate::Board).
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by semicolons. The code should have two parts: side length
    /// and cells (separated by ';'), so if the code does not contain exactly
    /// one semicolon, this error will be returned.
    WrongNumberOfParts,

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal the number deduced from the side length.
    WrongNumberOfCells,

    /// Indicates that the side length is not one of the supported board
    /// sizes (6 or 9).
    InvalidSize,

    /// Indicates that one of the numbers (side length or cell content) could
    /// not be parsed.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more
    /// than the side length).
    InvalidNumber
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}
