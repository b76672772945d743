//! SSE2 last-flip counting.
//!
//! Gathers both diagonals with one byte-compare and movemask, and the column
//! with a shift and movemask; the row byte needs no gather.
//! Based on count_last_flip_sse.c from edax-reversi.
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
#[target_feature(enable = "sse2")]
#[allow(dead_code)]
pub fn count_last_flip(p: u64, sq: Square) -> i32 {
    use std::arch::x86_64::*;

    let file = sq.file();
    let rank = sq.rank();
    let p0 = _mm_cvtsi64_si128(p as i64);

    // Column: shift the file into bit 7 of every byte; the byte movemask
    // then reads the file rank-ordered.
    let shifted = _mm_sll_epi64(p0, _mm_cvtsi32_si128((file ^ 7) as i32));
    let col = (_mm_movemask_epi8(shifted) & 0xFF) as usize;
    let mut n_flipped = lookup(rank, col);

    // Both diagonals in one compare: a diagonal holds at most one cell per
    // rank, so a per-byte zero test reads each of them rank-ordered. Cells
    // a short diagonal does not reach stay 0 and contribute nothing.
    let masks = _mm_set_epi64x(
        *uget!(DIAG_A1H8; sq.index()) as i64,
        *uget!(DIAG_A8H1; sq.index()) as i64,
    );
    let absent = _mm_cmpeq_epi8(
        _mm_and_si128(_mm_unpacklo_epi64(p0, p0), masks),
        _mm_setzero_si128(),
    );
    let t = !(_mm_movemask_epi8(absent) as u32);
    n_flipped += lookup(rank, (t & 0xFF) as usize);
    n_flipped += lookup(rank, ((t >> 8) & 0xFF) as usize);

    // Row: the rank's byte is already contiguous.
    n_flipped += lookup(file, ((p >> (rank * 8)) & 0xFF) as usize);

    n_flipped
}
