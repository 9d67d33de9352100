//! Timed banners drawn over the board.

use crate::game_view::NoticeView;
use crate::types::GamePhase;

/// How long the game-over banner stays up
pub const NOTICE_MS: u32 = 3000;

/// Banner currently on screen and its remaining time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    view: NoticeView,
    remaining_ms: u32,
}

impl Notice {
    pub fn game_over(score: u32) -> Self {
        Self {
            view: NoticeView {
                title: "GAME OVER",
                score,
            },
            remaining_ms: NOTICE_MS,
        }
    }

    pub fn view(&self) -> &NoticeView {
        &self.view
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    /// Count down; `None` once expired.
    pub fn advance(self, elapsed_ms: u32) -> Option<Self> {
        let remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        (remaining_ms > 0).then_some(Self {
            remaining_ms,
            ..self
        })
    }

    /// Keep the banner only while play is stopped.
    pub fn retain_in(self, phase: GamePhase) -> Option<Self> {
        (phase == GamePhase::Paused).then_some(self)
    }
}
