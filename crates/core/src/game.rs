//! Game orchestration: grid, active piece, timers, scoring and lifecycle.
//!
//! The shell drives the game with `advance_time(now_ms)` once per tick plus
//! zero or more [`GameIntent`]s, and pulls render state back out through the
//! getters. All mutation happens synchronously inside those calls.

use gridfall_types::{
    GameIntent, ShapeKind, FAST_DROP_FACTOR, LEVEL_SPEEDUP, MOVE_WAIT_MS, PREVIEW_LEN,
    ROTATE_WAIT_MS, START_DROP_MS,
};

use crate::grid::Grid;
use crate::piece::{Descent, Piece};
use crate::scoring::ScoreState;
use crate::supply::ShapeSupplier;
use crate::timer::Timer;

/// Events emitted by the core for the shell to react to (audio hooks,
/// session teardown). Drained with [`Game::take_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PieceLanded,
    RowsCleared(u32),
    GameOver,
}

/// One renderable cell, pulled by the shell every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub row: i8,
    pub col: i8,
    pub kind: ShapeKind,
}

/// The board: owns the grid, the active piece, the three timers and the
/// score, and runs the spawn -> fall -> lock -> clear -> respawn loop.
pub struct Game {
    grid: Grid,
    piece: Option<Piece>,
    supplier: Box<dyn ShapeSupplier>,
    preview: [ShapeKind; PREVIEW_LEN],
    /// Repeating gravity timer.
    gravity: Timer,
    /// One-shot debounce for horizontal movement.
    move_timer: Timer,
    /// One-shot debounce for rotation.
    rotate_timer: Timer,
    score: ScoreState,
    down_speed_ms: f64,
    fast_speed_ms: f64,
    down_pressed: bool,
    game_over: bool,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(mut supplier: Box<dyn ShapeSupplier>) -> Self {
        let preview = [(); PREVIEW_LEN].map(|_| supplier.next_shape());

        let mut game = Self {
            grid: Grid::new(),
            piece: None,
            supplier,
            preview,
            gravity: Timer::new(START_DROP_MS, true),
            move_timer: Timer::new(MOVE_WAIT_MS, false),
            rotate_timer: Timer::new(ROTATE_WAIT_MS, false),
            score: ScoreState::new(),
            down_speed_ms: START_DROP_MS,
            fast_speed_ms: START_DROP_MS * FAST_DROP_FACTOR,
            down_pressed: false,
            game_over: false,
            events: Vec::new(),
        };
        game.spawn_piece();
        game
    }

    /// Advance wall-clock time. Call once per tick.
    pub fn advance_time(&mut self, now_ms: u64) {
        if self.game_over {
            return;
        }

        // The gravity timer arms itself on the first observed timestamp, so
        // a game constructed long before its first tick does not fire
        // immediately.
        if !self.gravity.is_active() {
            self.gravity.arm(now_ms);
        }

        self.move_timer.advance(now_ms);
        self.rotate_timer.advance(now_ms);
        if self.gravity.advance(now_ms) {
            self.apply_gravity();
        }
    }

    /// Feed one discrete input intent. Unactionable intents (debounced
    /// moves, input after game over) are ignored.
    pub fn handle(&mut self, intent: GameIntent, now_ms: u64) {
        if self.game_over {
            return;
        }

        match intent {
            GameIntent::MoveLeft => self.try_shift(-1, now_ms),
            GameIntent::MoveRight => self.try_shift(1, now_ms),
            GameIntent::Rotate => {
                if self.rotate_timer.is_active() {
                    return;
                }
                if let Some(piece) = self.piece.as_mut() {
                    piece.rotate(&self.grid);
                }
                self.rotate_timer.arm(now_ms);
            }
            GameIntent::SoftDropPressed => {
                if !self.down_pressed {
                    self.down_pressed = true;
                    self.gravity.set_duration(self.fast_speed_ms);
                }
            }
            GameIntent::SoftDropReleased => {
                if self.down_pressed {
                    self.down_pressed = false;
                    self.gravity.set_duration(self.down_speed_ms);
                }
            }
        }
    }

    fn try_shift(&mut self, delta: i8, now_ms: u64) {
        if self.move_timer.is_active() {
            return;
        }
        if let Some(piece) = self.piece.as_mut() {
            piece.move_horizontal(delta, &self.grid);
        }
        // Re-armed even for a rejected move; a blocked press still spends
        // its debounce window.
        self.move_timer.arm(now_ms);
    }

    fn apply_gravity(&mut self) {
        let landed = match self.piece.as_mut() {
            Some(piece) => piece.try_descend(&self.grid) == Descent::Landed,
            None => false,
        };
        if landed {
            self.lock_piece();
        }
    }

    /// Landing pipeline, in order: transfer blocks into the grid, emit the
    /// landed event, game-over check, row clearing and scoring, respawn.
    fn lock_piece(&mut self) {
        let Some(piece) = self.piece.take() else {
            return;
        };

        for &block in piece.blocks() {
            self.grid.insert(block);
        }
        self.events.push(GameEvent::PieceLanded);

        // A block still above the visible grid at lock time ends the game
        // before any row accounting happens.
        if piece.blocks().iter().any(|b| b.y < 0) {
            self.end_game();
            return;
        }

        let cleared = self.grid.clear_finished_rows();
        if cleared > 0 {
            self.events.push(GameEvent::RowsCleared(cleared as u32));
            if self.score.record_clear(cleared) {
                self.down_speed_ms *= LEVEL_SPEEDUP;
                self.fast_speed_ms = self.down_speed_ms * FAST_DROP_FACTOR;
                // Reset to the normal speed; the next soft-drop press edge
                // restores the fast one.
                self.gravity.set_duration(self.down_speed_ms);
            }
        }

        self.spawn_piece();
    }

    fn spawn_piece(&mut self) {
        let kind = self.draw_shape();
        let piece = Piece::spawn(kind);

        // Spawning onto locked blocks means the stack reached the top.
        if piece.overlaps(&self.grid) {
            self.end_game();
            return;
        }

        self.piece = Some(piece);
    }

    fn end_game(&mut self) {
        self.game_over = true;
        self.piece = None;
        self.gravity.disarm();
        self.events.push(GameEvent::GameOver);
    }

    /// Pop the head of the preview queue and refill it from the supplier.
    fn draw_shape(&mut self) -> ShapeKind {
        let next = self.preview[0];
        self.preview.rotate_left(1);
        self.preview[PREVIEW_LEN - 1] = self.supplier.next_shape();
        next
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score.score
    }

    pub fn level(&self) -> u32 {
        self.score.level
    }

    pub fn lines(&self) -> u32 {
        self.score.lines
    }

    /// Current gravity interval for a normal (not soft-dropped) descent.
    pub fn drop_speed_ms(&self) -> f64 {
        self.down_speed_ms
    }

    /// The upcoming shapes, soonest first.
    pub fn preview(&self) -> &[ShapeKind; PREVIEW_LEN] {
        &self.preview
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for test harnesses and tooling that need to set
    /// up board positions.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active_piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    /// Every visible occupied cell: locked blocks plus the active piece's
    /// blocks that have entered the grid.
    pub fn occupied_cells(&self) -> impl Iterator<Item = CellView> + '_ {
        let active = self
            .piece
            .iter()
            .flat_map(|piece| piece.blocks().iter().copied());
        self.grid
            .blocks()
            .chain(active)
            .filter(|block| block.y >= 0)
            .map(|block| CellView {
                row: block.y,
                col: block.x,
                kind: block.kind,
            })
    }

    /// Drain the events accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
