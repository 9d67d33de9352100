//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is flushed to the terminal with `crossterm`.
//!
//! - [`fb`]: styled character framebuffer and color shading
//! - [`game_view`]: pure snapshot-to-framebuffer mapping (board, piece,
//!   score, next preview, pause and notice overlays)
//! - [`notice`]: timed game-over banner
//! - [`renderer`]: full and diff flushing to a terminal or any writer

pub mod fb;
pub mod game_view;
pub mod notice;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, NoticeView, Viewport};
pub use notice::{Notice, NOTICE_MS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
