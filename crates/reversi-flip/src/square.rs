//! Board squares in algebraic notation.

use std::fmt;
use std::str::FromStr;

/// Number of files (and ranks) of the board.
pub const BOARD_SIZE: usize = 8;
/// Number of playable squares.
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// A square of the board, `A1` through `H8`, plus `None` for "no square".
///
/// Files are labeled A-H, ranks 1-8, and the discriminant doubles as the
/// bit index of the square:
///
/// ```text
///   A B C D E F G H
/// 1 00 01 02 03 04 05 06 07
/// 2 08 09 10 11 12 13 14 15
/// 3 16 17 18 19 20 21 22 23
/// 4 24 25 26 27 28 29 30 31
/// 5 32 33 34 35 36 37 38 39
/// 6 40 41 42 43 44 45 46 47
/// 7 48 49 50 51 52 53 54 55
/// 8 56 57 58 59 60 61 62 63
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
    None,
}

impl Square {
    /// Returns a `u64` with only this square's bit set.
    ///
    /// A1 maps to `0x1`, B1 to `0x2`, H8 to `0x8000000000000000`.
    #[inline]
    pub fn bitboard(self) -> u64 {
        debug_assert!(
            (self as usize) < TOTAL_SQUARES,
            "Square::bitboard called on Square::None"
        );
        1 << self as u8
    }

    /// Returns the bit index of this square (0-63, or 64 for `None`).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts an index into a `Square` without bounds checking.
    ///
    /// # Arguments
    ///
    /// * `index` - 0-63 for board squares, 64 for `None`.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `index` > 64.
    #[inline]
    pub fn from_usize_unchecked(index: usize) -> Square {
        debug_assert!(
            index <= TOTAL_SQUARES,
            "Index out of bounds for Square enum. index: {index:?}"
        );
        unsafe { std::mem::transmute(index as u8) }
    }

    /// Converts an index into a `Square`, returning `None` when out of range.
    #[inline]
    pub fn from_usize(index: usize) -> Option<Square> {
        if index <= TOTAL_SQUARES {
            Some(Square::from_usize_unchecked(index))
        } else {
            None
        }
    }

    /// Returns the file (column) of this square, 0 for A through 7 for H.
    ///
    /// # Panics
    ///
    /// Panics if called on `Square::None`.
    #[inline]
    pub fn file(self) -> usize {
        assert!(self != Square::None, "Square::file called on Square::None");
        self.index() % BOARD_SIZE
    }

    /// Returns the rank (row) of this square, 0 for rank 1 through 7 for rank 8.
    ///
    /// # Panics
    ///
    /// Panics if called on `Square::None`.
    #[inline]
    pub fn rank(self) -> usize {
        assert!(self != Square::None, "Square::rank called on Square::None");
        self.index() / BOARD_SIZE
    }

    /// Creates a `Square` from file and rank coordinates.
    ///
    /// # Arguments
    ///
    /// * `file` - 0 (file A) to 7 (file H).
    /// * `rank` - 0 (rank 1) to 7 (rank 8).
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is >= 8.
    pub fn from_file_rank(file: u8, rank: u8) -> Square {
        assert!(file < BOARD_SIZE as u8, "Invalid file: {file}");
        assert!(rank < BOARD_SIZE as u8, "Invalid rank: {rank}");
        Self::from_usize_unchecked(rank as usize * BOARD_SIZE + file as usize)
    }

    /// Returns an iterator over all 64 board squares, A1 to H8 in index
    /// order. `Square::None` is not yielded.
    #[inline]
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..TOTAL_SQUARES).map(Square::from_usize_unchecked)
    }
}

// We want Square::None as the default value, not the first variant (A1)
// which would be chosen by #[derive(Default)]
#[allow(clippy::derivable_impls)]
impl Default for Square {
    fn default() -> Self {
        Square::None
    }
}

/// Error type for square parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid square string format (must be 2 characters)
    InvalidFormat,
    /// Invalid file character (must be a-h or A-H)
    InvalidFile(char),
    /// Invalid rank character (must be 1-8)
    InvalidRank(char),
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidFormat => write!(
                f,
                "Invalid square format: must be 2 characters (e.g., 'a1')"
            ),
            SquareError::InvalidFile(c) => write!(f, "Invalid file '{c}': must be a-h or A-H"),
            SquareError::InvalidRank(c) => write!(f, "Invalid rank '{c}': must be 1-8"),
        }
    }
}

impl std::error::Error for SquareError {}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic notation (e.g. "a1", "H8") into a `Square`.
    ///
    /// Surrounding whitespace is ignored and the file letter is
    /// case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidFormat);
        };

        let file = file_char.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareError::InvalidFile(file_char));
        }
        if !('1'..='8').contains(&rank_char) {
            return Err(SquareError::InvalidRank(rank_char));
        }

        Ok(Square::from_file_rank(
            file as u8 - b'a',
            rank_char as u8 - b'1',
        ))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Square::None {
            return write!(f, "None");
        }

        let file = self.file() as u8 + b'a';
        let rank = self.rank() as u8 + b'1';
        write!(f, "{}{}", file as char, rank as char)
    }
}
