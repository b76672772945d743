//! Portable scalar flip strategy.
//!
//! Evaluates the four rays toward lower bit indices with a leading-zero scan
//! and the four toward higher bit indices with carry propagation.
//! Based on flip_sse_bitscan.c from edax-reversi.
//! Reference: <https://github.com/abulmo/edax-reversi>

use crate::ray::{RAY_HI, RAY_LO};
use crate::square::Square;
use crate::uget;

/// Flips along one ray toward lower bit indices.
///
/// The ray's highest bit is adjacent to the played square, so the first
/// non-opponent cell walking away from the square is the highest bit of
/// `!o & ray`. `leading_zeros` returns 64 on an empty ray; the wrapping
/// shift then lands on bit 63 and the negate-shift recovery wipes it out.
#[inline(always)]
pub(super) fn flip_descending(p: u64, o: u64, ray: u64) -> u64 {
    let outflank = 0x8000000000000000u64.wrapping_shr((!o & ray).leading_zeros()) & p;
    outflank.wrapping_neg().wrapping_shl(1) & ray
}

/// Flips along one ray toward higher bit indices.
///
/// Every bit outside the ray is set before the add, so the carry out of the
/// opponent run lands a single bit on the ray's first non-opponent cell.
/// `outflank - 1` then recovers the run below it.
#[inline(always)]
fn flip_ascending(p: u64, o: u64, ray: u64) -> u64 {
    let outflank = (o | !ray).wrapping_add(1) & ray & p;
    outflank.wrapping_sub(u64::from(outflank != 0)) & ray
}

/// Computes flipped discs when playing on `sq`.
///
/// # Arguments
///
/// * `sq` - The square where the disc is being placed.
/// * `p` - Player's disc pattern.
/// * `o` - Opponent's disc pattern.
#[allow(dead_code)]
pub fn flip(sq: Square, p: u64, o: u64) -> u64 {
    let rays_lo = uget!(RAY_LO; sq.index());
    let rays_hi = uget!(RAY_HI; sq.index());

    let mut flipped = flip_descending(p, o, rays_lo[0]);
    flipped |= flip_descending(p, o, rays_lo[1]);
    flipped |= flip_descending(p, o, rays_lo[2]);
    flipped |= flip_descending(p, o, rays_lo[3]);
    flipped |= flip_ascending(p, o, rays_hi[0]);
    flipped |= flip_ascending(p, o, rays_hi[1]);
    flipped |= flip_ascending(p, o, rays_hi[2]);
    flipped |= flip_ascending(p, o, rays_hi[3]);
    flipped
}
