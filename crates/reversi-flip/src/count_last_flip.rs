//! Last move flip counting optimized for endgame.

use cfg_if::cfg_if;

use crate::bitboard::Bitboard;
use crate::square::Square;

mod count_last_flip_kindergarten;
#[cfg(target_arch = "x86_64")]
mod count_last_flip_sse;

/// Counts the number of discs that would be flipped by the last move.
///
/// Valid only when `sq` is the board's sole empty square; the opponent's
/// discs are implied as the complement of `player` minus the played square
/// and never materialized.
///
/// # Arguments
///
/// * `player` - Current player's bitboard.
/// * `sq` - Square where the last move is played.
///
/// # Returns
///
/// Returns twice the actual number of flipped discs for optimization purposes.
#[inline(always)]
pub fn count_last_flip(player: Bitboard, sq: Square) -> i32 {
    debug_assert!(sq != Square::None, "count_last_flip called on Square::None");
    debug_assert!(!player.contains(sq), "played square is already occupied");

    cfg_if! {
        if #[cfg(target_arch = "x86_64")] {
            unsafe { count_last_flip_sse::count_last_flip(player.bits(), sq) }
        } else {
            count_last_flip_kindergarten::count_last_flip(player.bits(), sq)
        }
    }
}
