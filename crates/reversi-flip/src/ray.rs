//! Precomputed ray masks and flip-count tables.
//!
//! All data here is derived from square geometry alone and evaluated at
//! compile time, so the flip kernels index plain `static` arrays with no
//! startup cost. Mask layout follows the classic edax-reversi tables.
//!
//! Reference: <https://github.com/abulmo/edax-reversi>

/// Direction deltas toward higher bit indices, as (file, rank) steps:
/// +1 (east), +7 (north-west), +8 (north), +9 (north-east).
const DIRECTIONS_HI: [(i32, i32); 4] = [(1, 0), (-1, 1), (0, 1), (1, 1)];

/// Direction deltas toward lower bit indices:
/// -1 (west), -7 (south-east), -8 (south), -9 (south-west).
const DIRECTIONS_LO: [(i32, i32); 4] = [(-1, 0), (1, -1), (0, -1), (-1, -1)];

/// Per-square ray masks toward higher bit indices, one per direction in
/// [`DIRECTIONS_HI`] order. Each mask holds every on-board cell strictly
/// beyond the square along that direction; edge squares get empty masks, so
/// no wraparound handling is needed at lookup time.
pub static RAY_HI: [[u64; 4]; 64] = build_rays(DIRECTIONS_HI);

/// Per-square ray masks toward lower bit indices, one per direction in
/// [`DIRECTIONS_LO`] order.
pub static RAY_LO: [[u64; 4]; 64] = build_rays(DIRECTIONS_LO);

/// Full A1-H8 style diagonal (north-east direction) through each square,
/// square included. Used by the last-flip counter's diagonal gathers.
pub static DIAG_A1H8: [u64; 64] = build_line(1, 1);

/// Full A8-H1 style diagonal (north-west direction) through each square,
/// square included.
pub static DIAG_A8H1: [u64; 64] = build_line(-1, 1);

/// Flip counts for a single 8-cell line.
///
/// Indexed by the played cell's position within the line and the line's
/// 8-bit player occupancy (1 = player disc, 0 = opponent disc or empty; the
/// played cell's own bit is a don't-care). The stored value is twice the
/// number of discs flipped on that line.
pub static COUNT_FLIP: [[i8; 256]; 8] = build_count_flip();

/// Cells on the board reachable from `sq` by repeated `(df, dr)` steps,
/// excluding `sq` itself.
const fn ray_mask(sq: usize, df: i32, dr: i32) -> u64 {
    let mut mask = 0u64;
    let mut file = (sq % 8) as i32 + df;
    let mut rank = (sq / 8) as i32 + dr;
    while 0 <= file && file < 8 && 0 <= rank && rank < 8 {
        mask |= 1u64 << (rank * 8 + file);
        file += df;
        rank += dr;
    }
    mask
}

const fn build_rays(directions: [(i32, i32); 4]) -> [[u64; 4]; 64] {
    let mut table = [[0u64; 4]; 64];
    let mut sq = 0;
    while sq < 64 {
        let mut dir = 0;
        while dir < 4 {
            table[sq][dir] = ray_mask(sq, directions[dir].0, directions[dir].1);
            dir += 1;
        }
        sq += 1;
    }
    table
}

const fn build_line(df: i32, dr: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0;
    while sq < 64 {
        table[sq] = ray_mask(sq, df, dr) | ray_mask(sq, -df, -dr) | (1u64 << sq);
        sq += 1;
    }
    table
}

/// Builds the flip-count table by scanning outward from the played cell.
///
/// In each direction the run of consecutive 0 cells adjacent to the played
/// cell counts toward the total only if a 1 cell terminates it before the
/// line boundary; a run that reaches the boundary contributes nothing.
const fn build_count_flip() -> [[i8; 256]; 8] {
    let mut table = [[0i8; 256]; 8];
    let mut role = 0;
    while role < 8 {
        let mut pattern = 0usize;
        while pattern < 256 {
            let mut flipped = 0;

            let mut run = 0;
            let mut cell = role + 1;
            while cell < 8 {
                if pattern & (1 << cell) != 0 {
                    flipped += run;
                    break;
                }
                run += 1;
                cell += 1;
            }

            let mut run = 0;
            let mut cell = role;
            while cell > 0 {
                cell -= 1;
                if pattern & (1 << cell) != 0 {
                    flipped += run;
                    break;
                }
                run += 1;
            }

            table[role][pattern] = 2 * flipped;
            pattern += 1;
        }
        role += 1;
    }
    table
}
