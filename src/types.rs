//! Core types and tuning constants shared across the crate.
//! Pure data with no external dependencies.

/// Board dimensions in cells.
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity period: the active piece descends one row per interval.
pub const GRAVITY_INTERVAL_MS: u32 = 1000;

/// Points awarded per cleared row.
pub const POINTS_PER_LINE: u32 = 100;

/// Spawn anchor for a freshly promoted piece (top-center).
pub const SPAWN_X: i8 = BOARD_WIDTH as i8 / 2 - 2;
pub const SPAWN_Y: i8 = 0;

/// Tetromino piece kinds, in shape-table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in shape-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];
}

/// Cell on the board (None = empty, Some = locked cell's piece identity).
pub type Cell = Option<PieceKind>;

/// Player commands the engine accepts.
///
/// Raw key decoding lives outside the core; unmapped keys never reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

/// Game lifecycle status. Only `Running` permits state mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Running,
    GameOver,
}
