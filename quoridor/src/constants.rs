pub const BOARD_SIZE: usize = 9;
pub const NUM_WALLS_PER_PLAYER: usize = 10;
pub const ASCII_LETTER_A: u8 = 97;

/// Largest board whose columns can be written as a single letter.
pub const MAX_BOARD_SIZE: usize = 26;
