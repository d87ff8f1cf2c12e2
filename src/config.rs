use crate::bitboard::BitBoard;

/// Side length of the square game board.
pub const BOARD_SIZE: usize = 10;

/// Cell-set type sized for the game board; 100 cells pack into a `u128`.
pub type Cells = BitBoard<u128, BOARD_SIZE>;
