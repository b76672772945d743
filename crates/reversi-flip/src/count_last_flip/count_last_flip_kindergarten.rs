//! Portable last-flip counting using kindergarten multiply gathers.
//!
//! Based on count_last_flip_kindergarten.c from edax-reversi.
//! Reference: <https://github.com/abulmo/edax-reversi>

use crate::ray::{COUNT_FLIP, DIAG_A1H8, DIAG_A8H1};
use crate::square::Square;
use crate::uget;

#[inline(always)]
fn lookup(role: usize, pattern: usize) -> i32 {
    *uget!(COUNT_FLIP; role, pattern) as i32
}

/// Counts flipped discs for the last move, returning twice the count.
///
/// # Arguments
///
/// * `p` - Player's disc pattern.
/// * `sq` - Square where the last move is played.
#[allow(dead_code)]
pub fn count_last_flip(p: u64, sq: Square) -> i32 {
    let file = sq.file();
    let rank = sq.rank();

    // Row: the rank's byte is already contiguous.
    let mut n_flipped = lookup(file, ((p >> (rank * 8)) & 0xFF) as usize);

    // Column: gather the file's bits into a rank-ordered byte.
    let col = ((p >> file) & 0x0101010101010101).wrapping_mul(0x0102040810204080) >> 56;
    n_flipped += lookup(rank, col as usize);

    // Diagonals: at most one cell per rank, so summing the bytes of the
    // masked board gathers a carry-free, file-ordered pattern. Cells a
    // short diagonal does not reach read as 0 and contribute nothing.
    let d7 = (p & *uget!(DIAG_A8H1; sq.index())).wrapping_mul(0x0101010101010101) >> 56;
    n_flipped += lookup(file, d7 as usize);
    let d9 = (p & *uget!(DIAG_A1H8; sq.index())).wrapping_mul(0x0101010101010101) >> 56;
    n_flipped += lookup(file, d9 as usize);

    n_flipped
}
