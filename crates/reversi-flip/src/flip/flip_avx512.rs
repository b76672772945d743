//! AVX-512 (CD+VL) flip strategy.
//!
//! Evaluates all eight rays in two 256-bit vectors: lane-wise lzcnt replaces
//! the scalar leading-zero scan for the rays toward lower bit indices, and
//! carry propagation handles the rays toward higher ones.
//! Based on flip_sse_bitscan.c from edax-reversi.
//! Reference: <https://github.com/abulmo/edax-reversi>

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
#[target_feature(enable = "avx512cd", enable = "avx512vl")]
#[allow(dead_code)]
pub fn flip(sq: Square, p: u64, o: u64) -> u64 {
    use std::arch::x86_64::*;

    let pp = _mm256_set1_epi64x(p as i64);
    let oo = _mm256_set1_epi64x(o as i64);
    let ones = _mm256_set1_epi64x(-1);
    let zero = _mm256_setzero_si256();

    // Rays toward lower bit indices: the first non-opponent cell is the
    // highest bit of !O & ray, found per lane with lzcnt. The variable
    // shift saturates past 63, so empty rays produce no outflank.
    let rl = uget!(RAY_LO; sq.index());
    let rays_lo = _mm256_set_epi64x(rl[3] as i64, rl[2] as i64, rl[1] as i64, rl[0] as i64);
    let n = _mm256_lzcnt_epi64(_mm256_andnot_si256(oo, rays_lo));
    let top = _mm256_set1_epi64x(i64::MIN);
    let outflank_lo = _mm256_and_si256(_mm256_srlv_epi64(top, n), pp);
    let run_lo = _mm256_slli_epi64(_mm256_sub_epi64(zero, outflank_lo), 1);
    let flips_lo = _mm256_and_si256(run_lo, rays_lo);

    // Rays toward higher bit indices: carry propagation as in the AVX2
    // strategy.
    let rh = uget!(RAY_HI; sq.index());
    let rays_hi = _mm256_set_epi64x(rh[3] as i64, rh[2] as i64, rh[1] as i64, rh[0] as i64);
    let not_rays = _mm256_xor_si256(rays_hi, ones);
    let carry = _mm256_sub_epi64(_mm256_or_si256(oo, not_rays), ones);
    let outflank_hi = _mm256_and_si256(_mm256_and_si256(carry, rays_hi), pp);
    let is_zero = _mm256_cmpeq_epi64(outflank_hi, zero);
    let run_hi = _mm256_add_epi64(outflank_hi, _mm256_xor_si256(is_zero, ones));
    let flips_hi = _mm256_and_si256(run_hi, rays_hi);

    let flips = _mm256_or_si256(flips_lo, flips_hi);
    let merged = _mm_or_si128(
        _mm256_castsi256_si128(flips),
        _mm256_extracti128_si256(flips, 1),
    );
    let merged = _mm_or_si128(merged, _mm_unpackhi_epi64(merged, merged));
    _mm_cvtsi128_si64(merged) as u64
}
