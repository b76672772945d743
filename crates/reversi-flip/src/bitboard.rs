//! Bitboard type and board-geometry transforms.
//!
//! A [`Bitboard`] packs one color's disc occupancy into a `u64`, one bit per
//! square (bit 0 = A1, bit 63 = H8). The transforms in this module realize
//! the full symmetry group of the board and back the symmetry checks of the
//! flip kernel's test suite.

use crate::square::Square;

/// Newtype wrapper for a 64-bit bitboard (bit 0 = A1, bit 63 = H8).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(pub(crate) u64);

impl Bitboard {
    /// Creates a new bitboard from raw bits.
    #[inline(always)]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    /// Returns the raw 64-bit value.
    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Creates a bitboard with a single bit set at the given square.
    ///
    /// # Arguments
    ///
    /// * `sq` - The square to set.
    #[inline(always)]
    pub fn from_square(sq: Square) -> Self {
        Bitboard(sq.bitboard())
    }

    /// Returns a new bitboard with the bit at the given square set.
    #[inline(always)]
    pub fn set(self, sq: Square) -> Self {
        Bitboard(self.0 | sq.bitboard())
    }

    /// Returns a new bitboard with the bit at the given square cleared.
    #[inline(always)]
    pub fn remove(self, sq: Square) -> Self {
        Bitboard(self.0 & !sq.bitboard())
    }

    /// Checks if the bit at the given square is set.
    #[inline(always)]
    pub fn contains(self, sq: Square) -> bool {
        self.0 & sq.bitboard() != 0
    }

    /// Checks if the bitboard has no bits set.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count).
    #[inline(always)]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns a new bitboard with the least significant bit cleared.
    #[inline(always)]
    pub const fn clear_lsb(self) -> Self {
        Bitboard(self.0 & self.0.wrapping_sub(1))
    }

    /// Returns the square of the least significant set bit, or `None` if the
    /// bitboard is empty.
    #[inline(always)]
    pub fn lsb_square(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_usize_unchecked(
                self.0.trailing_zeros() as usize
            ))
        }
    }

    /// Returns the square of the least significant set bit.
    ///
    /// # Panics
    ///
    /// Panics if the bitboard is empty in debug mode.
    #[inline(always)]
    pub fn lsb_square_unchecked(self) -> Square {
        debug_assert!(
            !self.is_empty(),
            "lsb_square_unchecked called on empty bitboard"
        );
        Square::from_usize_unchecked(self.0.trailing_zeros() as usize)
    }

    /// Removes and returns the least significant set bit as a square, along
    /// with the updated bitboard.
    ///
    /// # Panics
    ///
    /// Panics if the bitboard is empty in debug mode.
    #[inline(always)]
    pub fn pop_lsb(self) -> (Square, Self) {
        debug_assert!(!self.is_empty(), "pop_lsb called on empty bitboard");
        (self.lsb_square_unchecked(), self.clear_lsb())
    }

    /// Flips the bitboard vertically (rank 1 ↔ rank 8, etc.).
    #[inline(always)]
    pub fn flip_vertical(self) -> Self {
        Bitboard(self.0.swap_bytes())
    }

    /// Flips the bitboard horizontally (file A ↔ file H, etc.).
    #[inline(always)]
    pub fn flip_horizontal(self) -> Self {
        const MASK1: u64 = 0x5555555555555555;
        const MASK2: u64 = 0x3333333333333333;
        const MASK3: u64 = 0x0f0f0f0f0f0f0f0f;

        let mut b = self.0;
        b = ((b >> 1) & MASK1) | ((b & MASK1) << 1);
        b = ((b >> 2) & MASK2) | ((b & MASK2) << 2);
        b = ((b >> 4) & MASK3) | ((b & MASK3) << 4);
        Bitboard(b)
    }

    /// Flips the bitboard along the A1-H8 diagonal (transpose).
    #[inline(always)]
    pub fn flip_diag_a1h8(self) -> Self {
        const MASK1: u64 = 0x5500550055005500;
        const MASK2: u64 = 0x3333000033330000;
        const MASK3: u64 = 0x0f0f0f0f00000000;

        let mut bits = self.0;
        bits = delta_swap(bits, MASK3, 28);
        bits = delta_swap(bits, MASK2, 14);
        bits = delta_swap(bits, MASK1, 7);
        Bitboard(bits)
    }

    /// Flips the bitboard along the A8-H1 diagonal (anti-transpose).
    #[inline(always)]
    pub fn flip_diag_a8h1(self) -> Self {
        const MASK1: u64 = 0xaa00aa00aa00aa00;
        const MASK2: u64 = 0xcccc0000cccc0000;
        const MASK3: u64 = 0xf0f0f0f000000000;

        let mut bits = self.0;
        bits = delta_swap(bits, MASK3, 36);
        bits = delta_swap(bits, MASK2, 18);
        bits = delta_swap(bits, MASK1, 9);
        Bitboard(bits)
    }

    /// Rotates the bitboard 90 degrees clockwise.
    #[inline(always)]
    pub fn rotate_90_clockwise(self) -> Self {
        self.flip_diag_a8h1().flip_vertical()
    }

    /// Rotates the bitboard 180 degrees.
    #[inline(always)]
    pub fn rotate_180_clockwise(self) -> Self {
        Bitboard(self.0.reverse_bits())
    }

    /// Rotates the bitboard 270 degrees clockwise (90 degrees counter-clockwise).
    #[inline(always)]
    pub fn rotate_270_clockwise(self) -> Self {
        self.flip_diag_a1h8().flip_vertical()
    }

    /// Returns an iterator over all set squares, LSB first.
    #[inline(always)]
    pub fn iter(self) -> BitboardIterator {
        BitboardIterator::new(self)
    }

    /// Returns a new bitboard after applying a player's move.
    ///
    /// XORs the current bitboard with both the flipped discs and the placed
    /// disc.
    ///
    /// # Arguments
    ///
    /// * `flipped` - Bitboard of opponent discs flipped by this move.
    /// * `sq` - Square where the disc was placed.
    #[inline(always)]
    pub fn apply_move(self, flipped: Bitboard, sq: Square) -> Bitboard {
        self ^ flipped ^ Bitboard(sq.bitboard())
    }

    /// Returns a new bitboard after applying a flip.
    ///
    /// XORs the current bitboard with the flipped discs; used for the side
    /// that loses the flipped discs as well as for undo.
    ///
    /// # Arguments
    ///
    /// * `flipped` - Bitboard of discs flipped by the move.
    #[inline(always)]
    pub fn apply_flip(self, flipped: Bitboard) -> Bitboard {
        self ^ flipped
    }
}

// Operator trait implementations

impl std::ops::BitAnd for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl std::ops::BitXor for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl std::ops::Not for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl std::ops::BitAndAssign for Bitboard {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl std::ops::BitOrAssign for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitXorAssign for Bitboard {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

// Conversion trait implementations

impl From<u64> for Bitboard {
    #[inline(always)]
    fn from(bits: u64) -> Self {
        Bitboard(bits)
    }
}

impl From<Bitboard> for u64 {
    #[inline(always)]
    fn from(bb: Bitboard) -> Self {
        bb.0
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        Bitboard(sq.bitboard())
    }
}

// Iterator support

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIterator;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        BitboardIterator::new(self)
    }
}

// Display trait

impl std::fmt::Display for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let sq = rank * 8 + file;
                if (self.0 >> sq) & 1 != 0 {
                    write!(f, "1")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Delta swap - a fundamental bit manipulation operation.
///
/// # Arguments
///
/// * `bits` - The value to perform the swap on.
/// * `mask` - Specifies which bit pairs to swap (must have 1s in positions that are `delta` apart).
/// * `delta` - The distance between bit pairs to swap.
#[inline(always)]
fn delta_swap(bits: u64, mask: u64, delta: u32) -> u64 {
    let tmp = mask & (bits ^ (bits << delta));
    bits ^ tmp ^ (tmp >> delta)
}

/// An iterator that yields each set bit position in a bitboard as a `Square`.
pub struct BitboardIterator {
    bitboard: Bitboard,
}

impl BitboardIterator {
    /// Creates a new `BitboardIterator`.
    #[inline(always)]
    pub fn new(bitboard: Bitboard) -> BitboardIterator {
        BitboardIterator { bitboard }
    }
}

impl Iterator for BitboardIterator {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bitboard.is_empty() {
            return None;
        }

        let (square, rest) = self.bitboard.pop_lsb();
        self.bitboard = rest;
        Some(square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_remove_contains() {
        let mut board = Bitboard::new(0);
        board = board.set(Square::A1);
        board = board.set(Square::H8);
        assert!(board.contains(Square::A1));
        assert!(board.contains(Square::H8));
        assert!(!board.contains(Square::D4));
        assert_eq!(board.count(), 2);

        board = board.remove(Square::A1);
        assert!(!board.contains(Square::A1));
        assert!(board.contains(Square::H8));
    }

    #[test]
    fn test_count_and_empty() {
        assert!(Bitboard::new(0).is_empty());
        assert_eq!(Bitboard::new(0).count(), 0);
        assert_eq!(Bitboard::new(u64::MAX).count(), 64);
        assert!(!Bitboard::from_square(Square::C3).is_empty());
    }

    #[test]
    fn test_lsb_walk() {
        let board = Square::C1.bitboard() | Square::A2.bitboard() | Square::H8.bitboard();
        let board = Bitboard::new(board);

        let (first, rest) = board.pop_lsb();
        assert_eq!(first, Square::C1);
        let (second, rest) = rest.pop_lsb();
        assert_eq!(second, Square::A2);
        let (third, rest) = rest.pop_lsb();
        assert_eq!(third, Square::H8);
        assert!(rest.is_empty());

        assert_eq!(Bitboard::new(0).lsb_square(), None);
        assert_eq!(board.lsb_square(), Some(Square::C1));
    }

    #[test]
    fn test_iterator() {
        let board = Bitboard::from_square(Square::B1)
            .set(Square::D4)
            .set(Square::H8);
        let squares: Vec<Square> = board.iter().collect();
        assert_eq!(squares, vec![Square::B1, Square::D4, Square::H8]);

        let mut count = 0;
        for _ in Bitboard::new(u64::MAX) {
            count += 1;
        }
        assert_eq!(count, 64);
    }

    #[test]
    fn test_flip_vertical() {
        assert_eq!(
            Bitboard::from_square(Square::A1).flip_vertical(),
            Bitboard::from_square(Square::A8)
        );
        assert_eq!(
            Bitboard::from_square(Square::C2).flip_vertical(),
            Bitboard::from_square(Square::C7)
        );

        let board = Bitboard::new(0x00003C3C3C000000);
        assert_eq!(board.flip_vertical().flip_vertical(), board);
    }

    #[test]
    fn test_flip_horizontal() {
        assert_eq!(
            Bitboard::from_square(Square::A1).flip_horizontal(),
            Bitboard::from_square(Square::H1)
        );
        assert_eq!(
            Bitboard::from_square(Square::B3).flip_horizontal(),
            Bitboard::from_square(Square::G3)
        );

        let board = Bitboard::new(0x123456789ABCDEF0);
        assert_eq!(board.flip_horizontal().flip_horizontal(), board);
    }

    #[test]
    fn test_flip_diag_a1h8() {
        // Transpose: (file, rank) -> (rank, file)
        assert_eq!(
            Bitboard::from_square(Square::B1).flip_diag_a1h8(),
            Bitboard::from_square(Square::A2)
        );
        assert_eq!(
            Bitboard::from_square(Square::H1).flip_diag_a1h8(),
            Bitboard::from_square(Square::A8)
        );
        assert_eq!(
            Bitboard::from_square(Square::D4).flip_diag_a1h8(),
            Bitboard::from_square(Square::D4)
        );

        let board = Bitboard::new(0xFEDCBA9876543210);
        assert_eq!(board.flip_diag_a1h8().flip_diag_a1h8(), board);
    }

    #[test]
    fn test_flip_diag_a8h1() {
        // Anti-transpose: (file, rank) -> (7 - rank, 7 - file)
        assert_eq!(
            Bitboard::from_square(Square::A1).flip_diag_a8h1(),
            Bitboard::from_square(Square::H8)
        );
        assert_eq!(
            Bitboard::from_square(Square::B1).flip_diag_a8h1(),
            Bitboard::from_square(Square::H7)
        );
        assert_eq!(
            Bitboard::from_square(Square::A8).flip_diag_a8h1(),
            Bitboard::from_square(Square::A8)
        );

        let board = Bitboard::new(0x0123456789ABCDEF);
        assert_eq!(board.flip_diag_a8h1().flip_diag_a8h1(), board);
    }

    #[test]
    fn test_rotations() {
        assert_eq!(
            Bitboard::from_square(Square::A1).rotate_180_clockwise(),
            Bitboard::from_square(Square::H8)
        );
        assert_eq!(
            Bitboard::from_square(Square::B1).rotate_180_clockwise(),
            Bitboard::from_square(Square::G8)
        );
        assert_eq!(
            Bitboard::from_square(Square::A1).rotate_90_clockwise(),
            Bitboard::from_square(Square::H1)
        );

        let board = Bitboard::new(0x00003C2418000000);
        assert_eq!(
            board.rotate_90_clockwise().rotate_90_clockwise(),
            board.rotate_180_clockwise()
        );
        assert_eq!(
            board.rotate_90_clockwise().rotate_270_clockwise(),
            board
        );
        assert_eq!(
            board
                .rotate_90_clockwise()
                .rotate_90_clockwise()
                .rotate_90_clockwise()
                .rotate_90_clockwise(),
            board
        );
    }

    #[test]
    fn test_apply_move() {
        let player = Bitboard::from_square(Square::A1);
        let flipped = Bitboard::from_square(Square::B1).set(Square::C1);
        let result = player.apply_move(flipped, Square::D1);

        assert!(result.contains(Square::A1));
        assert!(result.contains(Square::B1));
        assert!(result.contains(Square::C1));
        assert!(result.contains(Square::D1));
        assert_eq!(result.count(), 4);
    }

    #[test]
    fn test_apply_flip() {
        let opponent = Bitboard::from_square(Square::A1)
            .set(Square::B1)
            .set(Square::C1);
        let flipped = Bitboard::from_square(Square::B1).set(Square::C1);
        let result = opponent.apply_flip(flipped);

        assert!(result.contains(Square::A1));
        assert!(!result.contains(Square::B1));
        assert!(!result.contains(Square::C1));
    }

    #[test]
    fn test_operators() {
        let a = Bitboard::new(0b1100);
        let b = Bitboard::new(0b1010);
        assert_eq!(a & b, Bitboard::new(0b1000));
        assert_eq!(a | b, Bitboard::new(0b1110));
        assert_eq!(a ^ b, Bitboard::new(0b0110));
        assert_eq!(!Bitboard::new(u64::MAX), Bitboard::new(0));

        let mut c = a;
        c |= b;
        assert_eq!(c, Bitboard::new(0b1110));
        c &= a;
        assert_eq!(c, a);
        c ^= a;
        assert!(c.is_empty());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Bitboard::from(0x42u64).bits(), 0x42);
        assert_eq!(u64::from(Bitboard::new(0x42)), 0x42);
        assert_eq!(
            Bitboard::from(Square::E5),
            Bitboard::from_square(Square::E5)
        );
    }

    #[test]
    fn test_display() {
        let board = Bitboard::from_square(Square::A1).set(Square::H8);
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 8);
        // Rank 8 is printed first, rank 1 last.
        assert_eq!(lines[0], ".......1");
        assert_eq!(lines[7], "1.......");
    }
}
