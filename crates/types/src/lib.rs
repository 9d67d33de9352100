//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be
//! shared by the simulation core, the input mapping and the terminal view.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//!
//! Each board cell stores a tag: `0` is empty, `1..=7` is the color index of
//! the piece kind that was merged there.
//!
//! # Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the host loop (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at score 0 |
//! | `MIN_DROP_MS` | 200 | Gravity interval floor |
//! | `LINE_SCORE` | 10 | Points per cleared line |
//!
//! The gravity interval is `max(MIN_DROP_MS, BASE_DROP_MS - score)`.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_tag(3), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.tag(), 3);
//! assert!(GameAction::Start.allowed_while_paused());
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at score 0 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval never drops below this floor
pub const MIN_DROP_MS: u32 = 200;

/// Points awarded per cleared line
pub const LINE_SCORE: u32 = 10;

/// Tag stored in an empty board cell
pub const EMPTY: Cell = 0;

/// A board or shape cell: 0 = empty, 1..=7 = piece color index
pub type Cell = u8;

/// The seven tetromino piece kinds
///
/// The discriminant order matches the cell tag (`I` = 1 .. `L` = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in tag order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Cell tag written into the board for this kind (1..=7)
    pub fn tag(&self) -> Cell {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::tag`]; `None` for empty or unknown tags
    pub fn from_tag(tag: Cell) -> Option<Self> {
        match tag {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Single uppercase letter, for side panels and logs
    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Player actions understood by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    Pause,
    Start,
}

impl GameAction {
    /// Stable name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
            GameAction::Pause => "pause",
            GameAction::Start => "start",
        }
    }

    /// Actions that are still honored while the game is paused
    pub fn allowed_while_paused(&self) -> bool {
        matches!(self, GameAction::Pause | GameAction::Start)
    }
}

/// Loop phase.
///
/// Game over is not a resting phase: it resets the board and lands in
/// `Paused`, announced through [`GameEvent::GameOver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Paused,
    Running,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Paused => "paused",
            GamePhase::Running => "running",
        }
    }
}

/// Notifications queued by the simulation for the host to consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// One or more rows were removed; `score` is the new total.
    LinesCleared { lines: u32, score: u32 },
    /// A fresh piece had no legal spawn position; `score` is the final score
    /// before the reset.
    GameOver { score: u32 },
}
