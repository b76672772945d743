//! Move-simulation kernel for 8x8 Reversi.
//!
//! Given a played square and both players' disc patterns, [`flip::flip`]
//! returns the opponent discs that flip. [`count_last_flip::count_last_flip`]
//! is the endgame fast path for the board's last empty square, returning
//! twice the flip count. Both operate on compile-time ray tables, run in
//! constant time, allocate nothing, and are safe to call from any number of
//! threads.
//!
//! Strategy selection is compile-time only: build with
//! `RUSTFLAGS="-C target-cpu=native"` to pick the SIMD paths.

pub mod bitboard;
pub mod count_last_flip;
pub mod flip;
pub mod ray;
pub mod square;
mod util;
