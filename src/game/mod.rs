//! Core Connect Four game logic: board representation, player types, and the
//! turn-by-turn game state machine.

mod board;
mod player;
mod state;

#[cfg(test)]
mod tests_props;

pub use board::{
    Board, Cell, Position, CONNECT, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_CELLS,
    MIN_DIMENSION,
};
pub use player::Player;
pub use state::{GameState, GameStatus, Placement};
