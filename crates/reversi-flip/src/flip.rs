//! Disc flip calculation for move execution.

use cfg_if::cfg_if;

use crate::bitboard::Bitboard;
use crate::square::Square;

mod flip_bitscan;
#[cfg(target_arch = "x86_64")]
mod flip_avx2;
#[cfg(target_arch = "x86_64")]
mod flip_avx512;

/// Calculates which opponent discs would be flipped by placing a disc at the given square.
///
/// # Arguments
///
/// * `sq` - The square where the disc is being placed
/// * `player` - Bitboard representing the current player's discs
/// * `opponent` - Bitboard representing the opponent's discs
///
/// # Returns
///
/// A bitboard representing all opponent discs that would be flipped by this move.
/// Returns an empty bitboard if no discs would be flipped (invalid move).
#[inline(always)]
pub fn flip(sq: Square, player: Bitboard, opponent: Bitboard) -> Bitboard {
    debug_assert!(sq != Square::None, "flip called on Square::None");
    debug_assert_eq!(
        player.bits() & opponent.bits(),
        0,
        "player and opponent bitboards overlap"
    );
    debug_assert_eq!(
        (player.bits() | opponent.bits()) & sq.bitboard(),
        0,
        "played square is already occupied"
    );

    cfg_if! {
        if #[cfg(all(target_arch = "x86_64", target_feature = "avx512cd", target_feature = "avx512vl"))] {
            Bitboard::new(unsafe { flip_avx512::flip(sq, player.bits(), opponent.bits()) })
        } else if #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))] {
            Bitboard::new(unsafe { flip_avx2::flip(sq, player.bits(), opponent.bits()) })
        } else {
            Bitboard::new(flip_bitscan::flip(sq, player.bits(), opponent.bits()))
        }
    }
}
