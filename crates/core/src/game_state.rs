//! Game state module - manages the complete game state
//!
//! Ties together the board, the piece factory, collision and the rules.
//! Handles gravity timing, player moves, rotation, line clears and the
//! pause/run/game-over lifecycle. All state lives in one value owned by the
//! host loop; nothing is global.

use std::vec::Drain;

use tracing::{debug, info};

use crate::board::Board;
use crate::pieces::{try_rotate, Piece};
use crate::rng::PieceFactory;
use crate::rules::Rules;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{GameAction, GameEvent, GamePhase};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    next: Piece,
    factory: PieceFactory,
    rules: Rules,
    phase: GamePhase,
    score: u32,
    lines: u32,
    drop_interval_ms: u32,
    drop_counter_ms: u32,
    /// Notifications not yet drained by the host.
    events: Vec<GameEvent>,
    /// Active and next were drawn since the last start and not played yet.
    dealt: bool,
}

impl GameState {
    /// Create a paused game with default rules and a seeded factory
    pub fn new(seed: u64) -> Self {
        Self::with_factory(Rules::default(), PieceFactory::new(seed))
    }

    /// Create a paused game with explicit rules and piece source.
    ///
    /// The board is empty and the first two pieces are already drawn; call
    /// [`GameState::start`] (or apply [`GameAction::Start`]) to begin.
    pub fn with_factory(rules: Rules, mut factory: PieceFactory) -> Self {
        let active = factory.next_piece();
        let next = factory.next_piece();
        Self {
            board: Board::new(),
            active,
            next,
            factory,
            rules,
            phase: GamePhase::Paused,
            score: 0,
            lines: 0,
            drop_interval_ms: rules.drop_interval_ms(0),
            drop_counter_ms: 0,
            events: Vec::new(),
            dealt: true,
        }
    }

    /// Replace the board contents, keeping everything else.
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Replace the active piece, keeping everything else.
    pub fn with_active(mut self, piece: Piece) -> Self {
        self.active = piece;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn drop_counter_ms(&self) -> u32 {
        self.drop_counter_ms
    }

    /// Take all pending notifications, oldest first.
    pub fn drain_events(&mut self) -> Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.board.rows();
        out.active = Some(PieceSnapshot::from(self.active));
        out.next = Some(PieceSnapshot::from(self.next));
        out.paused = self.paused();
        out.score = self.score;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Fresh board, zero score, base speed.
    fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.drop_interval_ms = self.rules.drop_interval_ms(0);
        self.drop_counter_ms = 0;
    }

    /// Draw a new active and next piece.
    fn deal(&mut self) {
        self.active = self.factory.next_piece();
        self.next = self.factory.next_piece();
        self.dealt = true;
    }

    /// (Re)initialize and run.
    ///
    /// Pieces shown while waiting to start are kept; a restart mid-game
    /// draws new ones.
    pub fn start(&mut self) {
        if !self.dealt {
            self.deal();
        }
        self.reset();
        self.dealt = false;
        self.phase = GamePhase::Running;
        info!(first = self.active.kind.letter(), "game started");
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Paused => GamePhase::Running,
            GamePhase::Running => GamePhase::Paused,
        };
        if self.phase == GamePhase::Running {
            self.dealt = false;
        }
        debug!(phase = self.phase.as_str(), "pause toggled");
    }

    /// Advance the gravity clock by `elapsed_ms`.
    ///
    /// Returns true if a gravity drop happened this frame. Paused games do
    /// not accumulate time.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused() {
            return false;
        }

        self.drop_counter_ms = self.drop_counter_ms.saturating_add(elapsed_ms);
        if self.drop_counter_ms > self.drop_interval_ms {
            self.player_drop();
            return true;
        }
        false
    }

    /// Move the active piece down one row.
    ///
    /// If that collides, the piece is put back, merged, full rows are cleared
    /// and the next piece spawns. Always resets the drop counter. Returns true
    /// if the piece landed.
    pub fn player_drop(&mut self) -> bool {
        self.drop_counter_ms = 0;

        let lowered = self.active.shifted(0, 1);
        if !lowered.collides(&self.board) {
            self.active = lowered;
            return false;
        }

        self.board
            .merge(&self.active.shape, self.active.x, self.active.y);
        self.clear_lines();
        self.spawn_next();
        true
    }

    /// Shift the active piece one column (`dir` = -1 left, +1 right).
    ///
    /// The move is discarded if it would collide.
    pub fn player_move(&mut self, dir: i8) -> bool {
        let moved = self.active.shifted(dir, 0);
        if moved.collides(&self.board) {
            return false;
        }
        self.active = moved;
        true
    }

    /// Rotate the active piece clockwise with wall kicks.
    ///
    /// On failure shape and position stay as they were.
    pub fn player_rotate(&mut self) -> bool {
        match try_rotate(&self.active, &self.board) {
            Some(rotated) => {
                self.active = rotated;
                true
            }
            None => false,
        }
    }

    /// Remove full rows and apply score and speed changes.
    ///
    /// Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> u32 {
        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared == 0 {
            return 0;
        }

        self.score = self
            .score
            .saturating_add(self.rules.line_clear_points(cleared));
        self.lines = self.lines.saturating_add(cleared);
        self.drop_interval_ms = self.rules.drop_interval_ms(self.score);
        self.events.push(GameEvent::LinesCleared {
            lines: cleared,
            score: self.score,
        });
        info!(
            lines = cleared,
            score = self.score,
            interval_ms = self.drop_interval_ms,
            "lines cleared"
        );
        cleared
    }

    /// Promote the queued piece and draw a new one; a blocked spawn ends the game.
    fn spawn_next(&mut self) {
        self.active = self.next;
        self.next = self.factory.next_piece();
        debug!(
            kind = self.active.kind.letter(),
            next = self.next.kind.letter(),
            "spawned"
        );

        if self.active.collides(&self.board) {
            self.game_over();
        }
    }

    fn game_over(&mut self) {
        let final_score = self.score;
        info!(score = final_score, lines = self.lines, "game over");
        self.reset();
        self.deal();
        self.phase = GamePhase::Paused;
        self.events.push(GameEvent::GameOver { score: final_score });
    }

    /// Apply a player action.
    ///
    /// While paused only [`GameAction::Pause`] and [`GameAction::Start`] are
    /// honored. Returns true if the action changed the state.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.paused() && !action.allowed_while_paused() {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.player_move(-1),
            GameAction::MoveRight => self.player_move(1),
            GameAction::Rotate => self.player_rotate(),
            GameAction::SoftDrop => {
                self.player_drop();
                true
            }
            GameAction::Pause => {
                self.toggle_pause();
                true
            }
            GameAction::Start => {
                self.start();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
