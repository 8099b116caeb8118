//! Shared setup for boardkit benchmarks.

#![forbid(unsafe_code)]

use boardkit_board::{Board, BoardConfig, LayeredBoard, LayeredConfig};
use boardkit_core::Position;
use boardkit_space::Limits;

/// Row-major positions of a `side`×`side` board, `[1, 1]` first.
pub fn all_squares(side: u32) -> Vec<Position> {
    (1..=side)
        .flat_map(|x| (1..=side).map(move |y| Position::from_slice(&[x, y])))
        .collect()
}

/// A `side`×`side` board with one element placed on every square.
///
/// Element `i` sits on the `i`-th square of [`all_squares`].
///
/// # Panics
///
/// Panics if `side` is 0.
pub fn full_board(side: u32) -> Board<u32, u64> {
    let limits =
        Limits::new(Position::from_slice(&[side, side])).expect("two-dimensional limits");
    let mut board = Board::new(BoardConfig::new(limits).with_name("bench"));
    for (id, square) in (0u32..).zip(all_squares(side)) {
        board.add(id, u64::from(id)).expect("fresh id");
        board.set(&id, square).expect("free square inside the board");
    }
    board
}

/// A `side`×`side` layered board with custom defaults on the diagonal.
///
/// # Panics
///
/// Panics if `side` is 0.
pub fn layered_board(side: u32) -> LayeredBoard<u32, u64> {
    let limits =
        Limits::new(Position::from_slice(&[side, side])).expect("two-dimensional limits");
    let config = LayeredConfig::new(BoardConfig::new(limits), u32::MAX, 0u64);
    let mut board = LayeredBoard::new(config);
    board.add_default(0, 1u64).expect("fresh default id");
    for d in 1..=side {
        board
            .set_default(&0, Position::from_slice(&[d, d]))
            .expect("free diagonal square");
    }
    board
}
