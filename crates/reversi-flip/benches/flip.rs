use criterion::{Criterion, criterion_group, criterion_main};
use reversi_flip::bitboard::Bitboard;
use reversi_flip::flip::flip;
use reversi_flip::square::Square;
use std::hint::black_box;

fn bench_flip_opening(c: &mut Criterion) {
    let p = Bitboard::new(Square::D5.bitboard() | Square::E4.bitboard());
    let o = Bitboard::new(Square::D4.bitboard() | Square::E5.bitboard());
    assert_eq!(flip(Square::C4, p, o), Bitboard::from_square(Square::D4));

    c.bench_function("flip_opening", |b| {
        b.iter(|| flip(black_box(Square::C4), black_box(p), black_box(o)))
    });
}

fn bench_flip_midgame(c: &mut Criterion) {
    // 62-disc position with A8 and C8 empty.
    let p = Bitboard::new(0x12714145695D797F);
    let o = Bitboard::new(0xE88EBEBA96A28680);
    assert_eq!(
        flip(Square::A8, p, o),
        Bitboard::new(0x0002040810200000)
    );

    c.bench_function("flip_midgame", |b| {
        b.iter(|| {
            flip(black_box(Square::A8), black_box(p), black_box(o))
                | flip(black_box(Square::C8), black_box(p), black_box(o))
        })
    });
}

fn bench_flip_all_squares(c: &mut Criterion) {
    let p = Bitboard::new(0x00003C3C3C000000);
    let o = Bitboard::new(0x0000C3C3C3000000);
    let empties: Vec<Square> = (!(p | o)).iter().collect();

    c.bench_function("flip_all_empties", |b| {
        b.iter(|| {
            let mut acc = Bitboard::new(0);
            for &sq in &empties {
                acc |= flip(black_box(sq), black_box(p), black_box(o));
            }
            acc
        })
    });
}

criterion_group!(
    benches,
    bench_flip_opening,
    bench_flip_midgame,
    bench_flip_all_squares
);
criterion_main!(benches);
