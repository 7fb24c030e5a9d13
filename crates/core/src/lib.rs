//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the board rules, state management, and simulation
//! logic. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same shape supply produces identical games
//! - **Testable**: Unit tests drive the game purely through timestamps
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`block`]: A single colored cell with grid-aware collision probes
//! - [`grid`]: 10x20 board of locked blocks with row clearing
//! - [`piece`]: Tetromino shape table and the active four-block piece
//! - [`timer`]: Polled millisecond timers for gravity and input debounce
//! - [`scoring`]: Classic table scoring with level progression
//! - [`supply`]: The shape-supplier seam plus LCG-backed and scripted suppliers
//! - [`game`]: The orchestrator tying all of the above together
//!
//! # Game Rules
//!
//! - **Rotation**: 90° about the first block of each shape; the square does
//!   not rotate, and a rotation may park a block one row past the floor
//! - **Gravity**: Starts at 400ms per row, speeds up 25% per level
//! - **Soft Drop**: 0.3x the normal gravity interval while held
//! - **Scoring**: 40/100/300/1200 per 1-4 rows, times the current level
//! - **Preview**: Three upcoming shapes, refilled from the injected supplier
//!
//! # Example
//!
//! ```
//! use gridfall_core::{Game, ScriptedSupplier};
//! use gridfall_core::types::{GameIntent, ShapeKind};
//!
//! let supplier = ScriptedSupplier::new(vec![ShapeKind::T, ShapeKind::I]);
//! let mut game = Game::new(Box::new(supplier));
//!
//! // Drive the game with input intents and wall-clock timestamps.
//! game.handle(GameIntent::MoveLeft, 0);
//! game.advance_time(0);
//! game.advance_time(400);
//!
//! assert!(!game.is_game_over());
//! assert_eq!(game.level(), 1);
//! ```
//!
//! # Timing
//!
//! The core never reads a clock. The shell calls
//! [`Game::advance_time`](game::Game::advance_time) with a monotonic
//! millisecond timestamp every frame; all timers fire from that.

pub mod block;
pub mod game;
pub mod grid;
pub mod piece;
pub mod scoring;
pub mod supply;
pub mod timer;

pub use gridfall_types as types;

// Re-export commonly used types for convenience
pub use block::Block;
pub use game::{CellView, Game, GameEvent};
pub use grid::Grid;
pub use piece::{shape_offsets, Descent, Piece};
pub use scoring::{line_points, ScoreState};
pub use supply::{RandomSupplier, ScriptedSupplier, ShapeSupplier, SimpleRng};
pub use timer::Timer;
