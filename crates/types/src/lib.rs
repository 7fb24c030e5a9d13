//! Shared data types and constants
//!
//! This crate contains pure data with no external dependencies: board
//! dimensions, timing constants, shape identifiers and input intents.

/// Board dimensions (rows are 0-indexed top to bottom).
pub const COLUMNS: u8 = 10;
pub const ROWS: u8 = 20;

/// Spawn offset for new pieces: horizontally centered, one row above the
/// visible grid.
pub const SPAWN_OFFSET: (i8, i8) = (COLUMNS as i8 / 2, -1);

/// Game timing (milliseconds). Durations are fractional because every
/// level-up multiplies the gravity speed by [`LEVEL_SPEEDUP`].
pub const START_DROP_MS: f64 = 400.0;
pub const MOVE_WAIT_MS: f64 = 200.0;
pub const ROTATE_WAIT_MS: f64 = 200.0;

/// Gravity speed multiplier applied on each level-up (lower = faster).
pub const LEVEL_SPEEDUP: f64 = 0.75;

/// Soft-drop gravity duration as a fraction of the normal duration.
pub const FAST_DROP_FACTOR: f64 = 0.3;

/// Number of upcoming shapes exposed to the preview panel.
pub const PREVIEW_LEN: usize = 3;

/// Points for clearing 1..=4 rows at once, before the level multiplier.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Tetromino shape identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    T,
    O,
    J,
    L,
    I,
    S,
    Z,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::T,
        ShapeKind::O,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::I,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Single-letter label used by the preview panel.
    pub fn letter(self) -> char {
        match self {
            ShapeKind::T => 'T',
            ShapeKind::O => 'O',
            ShapeKind::J => 'J',
            ShapeKind::L => 'L',
            ShapeKind::I => 'I',
            ShapeKind::S => 'S',
            ShapeKind::Z => 'Z',
        }
    }

    /// Display color for this shape's blocks.
    pub const fn color(self) -> Rgb {
        match self {
            ShapeKind::T => Rgb::new(0x73, 0x59, 0xe0), // purple
            ShapeKind::O => Rgb::new(0xf4, 0xdd, 0x7d), // yellow
            ShapeKind::J => Rgb::new(0x4c, 0x5f, 0xdf), // blue
            ShapeKind::L => Rgb::new(0xe2, 0x90, 0x47), // orange
            ShapeKind::I => Rgb::new(0x00, 0x80, 0x80), // teal
            ShapeKind::S => Rgb::new(0x6f, 0xc3, 0xb6), // green
            ShapeKind::Z => Rgb::new(0xda, 0x63, 0x5b), // red
        }
    }
}

/// Discrete input intents fed into the core by the shell, zero or more per
/// tick. Soft drop is edge-triggered: the shell reports press and release,
/// not key-held state every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameIntent {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDropPressed,
    SoftDropReleased,
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
