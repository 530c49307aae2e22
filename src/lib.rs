//! # Connect Four
//!
//! A deterministic Connect Four game engine. A caller (typically a UI layer)
//! owns a [`game::GameState`], submits column choices, and renders the
//! placements and results the engine hands back.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;

pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use game::{GameState, GameStatus, Placement, Player};
