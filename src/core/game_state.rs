//! Game state: the owned state machine tying board, pieces and RNG together.
//!
//! All transitions are synchronous and total. External drivers call
//! `on_tick` (gravity) and `command` (player input); both are no-ops unless
//! the game is running.

use crate::core::pieces::{base_shape, Shape};
use crate::core::rng::PieceGenerator;
use crate::core::snapshot::GameSnapshot;
use crate::core::Board;
use crate::types::{Command, GameStatus, PieceKind, POINTS_PER_LINE, SPAWN_X, SPAWN_Y};

/// The falling, player-controlled piece.
///
/// `shape` is this piece's own copy of the matrix; rotation replaces it
/// without touching the static shape table. (x, y) anchors the matrix's
/// top-left in board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A fresh piece of `kind` at the spawn anchor, spawn orientation.
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: base_shape(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    next: Option<PieceKind>,
    generator: PieceGenerator,
    score: u32,
    status: GameStatus,
}

impl GameState {
    /// Create an idle game with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            generator: PieceGenerator::new(seed),
            score: 0,
            status: GameStatus::Idle,
        }
    }

    /// Start a new run: fresh board, zero score, new active and next pieces.
    ///
    /// Also serves as restart from `GameOver` (or mid-run). The generator
    /// keeps its stream position so successive runs differ.
    pub fn start(&mut self) {
        self.board = Board::new();
        self.score = 0;
        self.active = Some(Piece::spawn(self.generator.next()));
        self.next = Some(self.generator.next());
        self.status = GameStatus::Running;
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next_kind(&self) -> Option<PieceKind> {
        self.next
    }

    /// One gravity step: move the active piece down, or lock it when blocked.
    ///
    /// The external timer only matters while running; a tick arriving in any
    /// other status is ignored.
    pub fn on_tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }
        if !self.try_move(0, 1) {
            self.lock_and_spawn();
        }
    }

    /// Apply a player command. Returns whether it changed anything; a
    /// rejected move is an ordinary no-op, not an error.
    pub fn command(&mut self, command: Command) -> bool {
        if self.status != GameStatus::Running {
            return false;
        }
        match command {
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::SoftDrop => self.try_move(0, 1),
            Command::Rotate => self.try_rotate(),
        }
    }

    /// Validate-then-commit translation of the active piece.
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if !self
            .board
            .is_valid_placement(&active.shape, active.x + dx, active.y + dy)
        {
            return false;
        }
        self.active = Some(Piece {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });
        true
    }

    /// Validate-then-commit clockwise rotation at the unchanged anchor.
    /// No wall kicks: if the turned shape does not fit, nothing happens.
    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let rotated = active.shape.rotated_cw();
        if !self.board.is_valid_placement(&rotated, active.x, active.y) {
            return false;
        }
        self.active = Some(Piece {
            shape: rotated,
            ..active
        });
        true
    }

    /// Settle the active piece and advance the queue.
    ///
    /// Merge into the board, clear full rows, score them, promote the next
    /// piece to the spawn anchor and draw a new next. If the promoted piece
    /// does not fit the just-compacted board the game is over; the rejected
    /// piece stays visible but nothing will move it again.
    fn lock_and_spawn(&mut self) {
        let (Some(active), Some(next_kind)) = (self.active, self.next) else {
            return;
        };

        self.board
            .merge_piece(&active.shape, active.x, active.y, active.kind);

        let cleared = self.board.clear_full_rows();
        self.score += cleared.len() as u32 * POINTS_PER_LINE;

        let promoted = Piece::spawn(next_kind);
        self.next = Some(self.generator.next());

        if !self
            .board
            .is_valid_placement(&promoted.shape, promoted.x, promoted.y)
        {
            self.status = GameStatus::GameOver;
        }
        self.active = Some(promoted);
    }

    /// Fill a caller-owned snapshot with the current renderable state.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(Into::into);
        out.next = self.next;
        out.score = self.score;
        out.status = self.status;
    }

    /// Allocate-and-fill convenience around [`snapshot_into`].
    ///
    /// [`snapshot_into`]: GameState::snapshot_into
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
