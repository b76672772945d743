//! AVX2 flip strategy.
//!
//! Evaluates the four rays toward higher bit indices in one 256-bit vector
//! (carry propagation per lane, compare-and-subtract run recovery) and the
//! four toward lower bit indices with the scalar leading-zero scan.
//! Based on flip_sse_bitscan.c from edax-reversi.
//! Reference: <https://github.com/abulmo/edax-reversi>

use super::flip_bitscan;
use crate::ray::{RAY_HI, RAY_LO};
use crate::square::Square;
use crate::uget;

/// Computes flipped discs when playing on `sq`.
///
/// # Arguments
///
/// * `sq` - The square where the disc is being placed.
/// * `p` - Player's disc pattern.
/// * `o` - Opponent's disc pattern.
#[target_feature(enable = "avx2")]
#[allow(dead_code)]
pub fn flip(sq: Square, p: u64, o: u64) -> u64 {
    use std::arch::x86_64::*;

    let rh = uget!(RAY_HI; sq.index());
    let rays = _mm256_set_epi64x(rh[3] as i64, rh[2] as i64, rh[1] as i64, rh[0] as i64);
    let pp = _mm256_set1_epi64x(p as i64);
    let oo = _mm256_set1_epi64x(o as i64);
    let ones = _mm256_set1_epi64x(-1);

    // (O | !ray) + 1 lands a single bit on each ray's first non-opponent
    // cell; it outflanks if that cell holds a player disc.
    let not_rays = _mm256_xor_si256(rays, ones);
    let carry = _mm256_sub_epi64(_mm256_or_si256(oo, not_rays), ones);
    let outflank = _mm256_and_si256(_mm256_and_si256(carry, rays), pp);

    // outflank - 1 recovers the run below the outflank bit; lanes without
    // an outflank subtract nothing and stay empty.
    let is_zero = _mm256_cmpeq_epi64(outflank, _mm256_setzero_si256());
    let run = _mm256_add_epi64(outflank, _mm256_xor_si256(is_zero, ones));
    let flips = _mm256_and_si256(run, rays);

    let merged = _mm_or_si128(
        _mm256_castsi256_si128(flips),
        _mm256_extracti128_si256(flips, 1),
    );
    let merged = _mm_or_si128(merged, _mm_unpackhi_epi64(merged, merged));
    let mut flipped = _mm_cvtsi128_si64(merged) as u64;

    let rl = uget!(RAY_LO; sq.index());
    flipped |= flip_bitscan::flip_descending(p, o, rl[0]);
    flipped |= flip_bitscan::flip_descending(p, o, rl[1]);
    flipped |= flip_bitscan::flip_descending(p, o, rl[2]);
    flipped |= flip_bitscan::flip_descending(p, o, rl[3]);
    flipped
}
