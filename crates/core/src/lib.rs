//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole simulation: board, pieces, collision,
//! line clearing, scoring and the pause/run lifecycle. It has no knowledge
//! of terminals or key codes, so the same state machine can be driven by any
//! host that supplies elapsed time and [`GameAction`](types::GameAction)s.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of cell tags, merging and full-row removal
//! - [`collision`]: shape-versus-board overlap test
//! - [`pieces`]: tetromino matrices, clockwise rotation and wall kicks
//! - [`rng`]: uniform random piece factory
//! - [`rules`]: points per line and the score-driven gravity interval
//! - [`game_state`]: the game loop state machine
//! - [`snapshot`]: read-only frame data for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::{GameAction, GamePhase};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.phase(), GamePhase::Paused);
//!
//! game.apply_action(GameAction::Start);
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//!
//! // One second of gravity is not enough; the counter must exceed the interval.
//! assert!(!game.tick(1000));
//! assert!(game.tick(16));
//! ```
//!
//! # Timing
//!
//! The host calls [`GameState::tick`](game_state::GameState::tick) once per
//! frame with the elapsed milliseconds. When the accumulated time exceeds the
//! drop interval the active piece falls one row. The interval starts at
//! 1000ms and shrinks by 1ms per point of score, never below 200ms.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod rules;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use game_state::GameState;
pub use pieces::{spawn_shape, try_rotate, Piece, Shape};
pub use rng::PieceFactory;
pub use rules::{Rules, RulesError};
pub use snapshot::{GameSnapshot, PieceSnapshot};
